use serde::{Deserialize, Serialize};

use crate::api_client;

/// One point of the plotted series. Order within the series is
/// significant, it defines the line path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: AxisValue,
    pub y: f64,
}

/// The backend sends whatever it keys the series by (timestamps for
/// intraday periods, date strings for longer ones), so the x field is
/// kept opaque and only formatted for axis labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisValue {
    Number(f64),
    Label(String),
}

impl std::fmt::Display for AxisValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisValue::Number(n) => write!(f, "{}", n),
            AxisValue::Label(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockChartResponse {
    pub data: Vec<ChartPoint>,
    pub percentage_change: f64,
}

/// Endpoint path for a (ticker, period) pair, relative to the API base.
pub fn stock_chart_endpoint(ticker_symbol: &str, period: &str) -> String {
    format!("/stockinfochart/{}/{}", ticker_symbol, period)
}

pub async fn get_stock_chart(
    ticker_symbol: &str,
    period: &str,
) -> Result<StockChartResponse, String> {
    log::trace!(
        "Fetching stock chart for ticker: {} period: {}",
        ticker_symbol,
        period
    );

    let result =
        api_client::get::<StockChartResponse>(&stock_chart_endpoint(ticker_symbol, period)).await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch stock chart: {}", e);
    } else {
        log::info!(
            "Successfully fetched stock chart for ticker: {}",
            ticker_symbol
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_interpolates_ticker_and_period_verbatim() {
        assert_eq!(
            stock_chart_endpoint("AAPL", "1D"),
            "/stockinfochart/AAPL/1D"
        );
        assert_eq!(
            stock_chart_endpoint("BRK.B", "1M"),
            "/stockinfochart/BRK.B/1M"
        );
    }

    #[test]
    fn response_with_numeric_x_deserializes() {
        let body = r#"{"data":[{"x":1,"y":2.0},{"x":2,"y":3.0}],"percentage_change":4.5}"#;
        let resp: StockChartResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.data.len(), 2);
        assert_eq!(resp.data[0].x, AxisValue::Number(1.0));
        assert_eq!(resp.data[1].y, 3.0);
        assert_eq!(resp.percentage_change, 4.5);
    }

    #[test]
    fn response_with_date_label_x_deserializes() {
        let body =
            r#"{"data":[{"x":"2024-05-03","y":187.2}],"percentage_change":-0.8}"#;
        let resp: StockChartResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.data[0].x, AxisValue::Label("2024-05-03".to_string()));
        assert_eq!(resp.percentage_change, -0.8);
    }

    #[test]
    fn empty_series_is_a_valid_response() {
        let body = r#"{"data":[],"percentage_change":0.0}"#;
        let resp: StockChartResponse = serde_json::from_str(body).unwrap();
        assert!(resp.data.is_empty());
    }

    #[test]
    fn body_missing_required_fields_is_rejected() {
        assert!(serde_json::from_str::<StockChartResponse>(r#"{"data":[]}"#).is_err());
        assert!(
            serde_json::from_str::<StockChartResponse>(r#"{"percentage_change":1.0}"#).is_err()
        );
    }
}
