pub mod path;
pub mod scale;

pub use path::{area_path, line_path};
pub use scale::LinearScale;

use crate::api_client::chart::ChartPoint;

/// Pixel margins around the plotting area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Fixed pixel geometry of a chart surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDims {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
}

impl ChartDims {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: ChartMargin {
                top: 0.0,
                right: 0.0,
                bottom: 0.0,
                left: 0.0,
            },
        }
    }

    pub fn with_margin(mut self, margin: ChartMargin) -> Self {
        self.margin = margin;
        self
    }

    /// Width of the plotting area inside the margins.
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Height of the plotting area inside the margins.
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    pub fn viewbox(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// SVG transform moving the origin to the top-left of the plotting area.
    pub fn inner_transform(&self) -> String {
        format!("translate({}, {})", self.margin.left, self.margin.top)
    }
}

/// Fixed geometry of the stock-info chart surface.
pub fn stock_info_dims() -> ChartDims {
    ChartDims::new(300.0, 100.0).with_margin(ChartMargin {
        top: 25.0,
        right: 30.0,
        bottom: 50.0,
        left: 50.0,
    })
}

/// Scale a series into pixel coordinates inside the plotting area.
/// Points are laid out evenly by position in the sequence; the y domain
/// spans the series extent. A single point sits centered.
pub fn scaled_points(data: &[ChartPoint], dims: &ChartDims) -> Vec<(f64, f64)> {
    if data.is_empty() {
        return Vec::new();
    }

    let y_min = data.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let y_max = data.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

    let y_scale = LinearScale::new()
        .domain(y_min, y_max)
        .range(dims.inner_height(), 0.0);

    let last = (data.len() - 1) as f64;
    data.iter()
        .enumerate()
        .map(|(i, p)| {
            let x = if last == 0.0 {
                dims.inner_width() / 2.0
            } else {
                i as f64 / last * dims.inner_width()
            };
            (x, y_scale.scale(p.y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::chart::AxisValue;

    fn point(x: f64, y: f64) -> ChartPoint {
        ChartPoint {
            x: AxisValue::Number(x),
            y,
        }
    }

    #[test]
    fn inner_area_subtracts_margins() {
        let dims = stock_info_dims();
        assert_eq!(dims.inner_width(), 220.0);
        assert_eq!(dims.inner_height(), 25.0);
    }

    #[test]
    fn inner_area_never_goes_negative() {
        let dims = ChartDims::new(10.0, 10.0).with_margin(ChartMargin {
            top: 20.0,
            right: 20.0,
            bottom: 20.0,
            left: 20.0,
        });
        assert_eq!(dims.inner_width(), 0.0);
        assert_eq!(dims.inner_height(), 0.0);
    }

    #[test]
    fn viewbox_and_transform_reflect_geometry() {
        let dims = stock_info_dims();
        assert_eq!(dims.viewbox(), "0 0 300 100");
        assert_eq!(dims.inner_transform(), "translate(50, 25)");
    }

    #[test]
    fn empty_series_scales_to_no_points() {
        assert!(scaled_points(&[], &stock_info_dims()).is_empty());
    }

    #[test]
    fn single_point_is_centered() {
        let points = scaled_points(&[point(1.0, 5.0)], &stock_info_dims());
        assert_eq!(points, vec![(110.0, 12.5)]);
    }

    #[test]
    fn series_spans_the_plotting_area() {
        let data = [point(1.0, 10.0), point(2.0, 20.0), point(3.0, 15.0)];
        let points = scaled_points(&data, &stock_info_dims());

        assert_eq!(points.len(), 3);
        // X spreads from the left edge to the right edge
        assert_eq!(points[0].0, 0.0);
        assert_eq!(points[2].0, 220.0);
        // Y is inverted: the minimum sits on the chart floor
        assert_eq!(points[0].1, 25.0);
        assert_eq!(points[1].1, 0.0);
        assert_eq!(points[2].1, 12.5);
    }

    #[test]
    fn flat_series_sits_mid_height() {
        let data = [point(1.0, 7.0), point(2.0, 7.0)];
        let points = scaled_points(&data, &stock_info_dims());
        assert!(points.iter().all(|p| p.1 == 12.5));
    }
}
