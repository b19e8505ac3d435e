use std::cell::Cell;

use yew::prelude::*;

use crate::api_client::chart::{get_stock_chart, StockChartResponse};
use crate::chart::{area_path, line_path, scaled_points, stock_info_dims};
use crate::common::error::ErrorDisplay;
use crate::common::fetch_hook::use_fetch_with_deps;
use crate::common::loading::Loading;
use crate::hooks::FetchState;

const LINE_COLOR: &str = "#D2A5FF";

thread_local! {
    static GRADIENT_COUNTER: Cell<u64> = Cell::new(0);
}

/// Allocate an id for a gradient definition. Ids must be unique per
/// mounted chart, two panels for the same instrument included, because
/// the area fill references its own `<defs>` entry by id.
fn next_gradient_id() -> String {
    GRADIENT_COUNTER.with(|counter| {
        let n = counter.get() + 1;
        counter.set(n);
        format!("stockinfo-fill-{}", n)
    })
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub ticker_symbol: String,
    pub period: String,
    pub on_percentage_change: Callback<f64>,
}

/// Area chart of one instrument over one period.
///
/// Fetches the series whenever the (ticker, period) pair changes and
/// reports the accompanying percentage change upward through the
/// callback, once per successful fetch.
#[function_component(StockInfoChart)]
pub fn stock_info_chart(props: &Props) -> Html {
    let (fetch_state, refetch) = use_fetch_with_deps(
        (props.ticker_symbol.clone(), props.period.clone()),
        |(symbol, period): (String, String)| async move {
            get_stock_chart(&symbol, &period).await
        },
    );

    // Report the derived value upward once the fetch lands. Keyed on the
    // fetch state, so completions dropped as stale never report anything.
    {
        let on_percentage_change = props.on_percentage_change.clone();
        use_effect_with((*fetch_state).clone(), move |state| {
            if let FetchState::Success(response) = state {
                on_percentage_change.emit(response.percentage_change);
            }
            || ()
        });
    }

    // One gradient definition per chart instance
    let gradient_id = use_state(next_gradient_id);

    html! {
        <div>
            {match &*fetch_state {
                FetchState::NotStarted | FetchState::Loading => html! { <Loading /> },
                FetchState::Error(error) => html! {
                    <ErrorDisplay message={error.clone()} on_retry={Some(refetch.clone())} />
                },
                FetchState::Success(response) => html! {
                    <SvgAreaChart
                        response={response.clone()}
                        gradient_id={(*gradient_id).clone()}
                    />
                },
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SvgAreaChartProps {
    response: StockChartResponse,
    gradient_id: String,
}

#[function_component(SvgAreaChart)]
fn svg_area_chart(props: &SvgAreaChartProps) -> Html {
    let dims = stock_info_dims();

    let points = scaled_points(&props.response.data, &dims);
    let line_d = line_path(&points);
    let area_d = area_path(&points, dims.inner_height());
    let fill = format!("url(#{})", props.gradient_id);

    html! {
        <svg
            width="300"
            height="100"
            viewBox={dims.viewbox()}
        >
            <defs>
                <linearGradient
                    id={props.gradient_id.clone()}
                    x2="0"
                    y2="1"
                    gradientUnits="objectBoundingBox"
                >
                    <stop offset="5%" stop-color="rgb(225, 247, 255)" />
                    <stop offset="30%" stop-color="rgb(236, 255, 248)" />
                    <stop offset="100%" stop-color="rgb(247, 239, 255)" />
                </linearGradient>
            </defs>
            <g transform={dims.inner_transform()}>
                <path d={area_d} fill={fill} stroke="none" />
                <path d={line_d} fill="none" stroke={LINE_COLOR} stroke-width="1" />
            </g>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_ids_are_unique_across_instances() {
        let first = next_gradient_id();
        let second = next_gradient_id();
        let third = next_gradient_id();
        assert_ne!(first, second);
        assert_ne!(second, third);
        assert!(first.starts_with("stockinfo-fill-"));
    }
}
