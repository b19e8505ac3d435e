mod chart;
mod view;

pub use chart::{Props as StockInfoChartProps, StockInfoChart};
pub use view::StockInfo;
