//! Concrete chart renderers.

/// Vertical bar chart with axis ticks and a label row.
pub mod bar;

/// Horizontal bar chart, one line per data point.
pub mod horizontal_bar;

pub use bar::BarChart;
pub use horizontal_bar::HorizontalBarChart;
