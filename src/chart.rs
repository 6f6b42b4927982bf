//! Base chart contract: shared state, validation, and the render trait.
//!
//! [`Chart`] owns the dataset, dimensions, margins, title, and color list
//! common to every chart type. Concrete renderers compose a `Chart` and
//! implement [`Render`]; invoking [`Render::render`] on the base itself is a
//! contract violation and fails.

use crate::error::{Error, Result};

/// Default chart width in characters.
pub const DEFAULT_WIDTH: u32 = 400;
/// Default chart height in characters.
pub const DEFAULT_HEIGHT: u32 = 300;

const DEFAULT_COLORS: [&str; 5] = ["#3498db", "#e74c3c", "#2ecc71", "#f39c12", "#9b59b6"];

/// Rendering capability every concrete chart type must provide.
pub trait Render {
    /// Render the chart to a single multi-line string.
    ///
    /// A pure function of the chart's current state: repeated calls on equal
    /// state produce equal output.
    ///
    /// # Errors
    ///
    /// Returns an error if the current state cannot be laid out (for example
    /// a canvas too narrow for its labels), or when invoked on the base
    /// [`Chart`] directly.
    fn render(&self) -> Result<String>;
}

/// Margins around the drawing area, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Margins {
    /// Top offset.
    pub top: u32,
    /// Right offset.
    pub right: u32,
    /// Bottom offset.
    pub bottom: u32,
    /// Left offset.
    pub left: u32,
}

/// Shared chart state: dataset, dimensions, margins, title, and colors.
///
/// Fluent setters consume and return the chart so configuration chains:
///
/// ```
/// use textchart::chart::Chart;
///
/// let chart = Chart::new(&[1.0, 2.0, 3.0])?
///     .set_title("Example")
///     .set_margins(1, 0, 1, 0);
/// assert_eq!(chart.title(), "Example");
/// # Ok::<(), textchart::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Chart {
    data: Vec<f64>,
    width: u32,
    height: u32,
    margins: Margins,
    title: String,
    colors: Vec<String>,
}

impl Chart {
    /// Create a chart with the default 400x300 dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` is empty or contains non-finite values.
    pub fn new(data: &[f64]) -> Result<Self> {
        Self::with_size(data, DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Create a chart with explicit dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` is empty or non-finite, or if either
    /// dimension is zero.
    pub fn with_size(data: &[f64], width: u32, height: u32) -> Result<Self> {
        Self::validate_numeric(data)?;
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        Ok(Self {
            data: data.to_vec(),
            width,
            height,
            margins: Margins::default(),
            title: String::new(),
            colors: DEFAULT_COLORS.iter().map(ToString::to_string).collect(),
        })
    }

    /// Check that a dataset is non-empty and entirely finite.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] or [`Error::NonFiniteData`] with the
    /// index of the first offending element.
    pub fn validate_numeric(data: &[f64]) -> Result<()> {
        if data.is_empty() {
            return Err(Error::EmptyData);
        }
        if let Some(index) = data.iter().position(|v| !v.is_finite()) {
            return Err(Error::NonFiniteData { index });
        }
        Ok(())
    }

    /// Width of the drawing area after subtracting horizontal margins.
    #[must_use]
    pub fn drawing_width(&self) -> u32 {
        self.width.saturating_sub(self.margins.left).saturating_sub(self.margins.right)
    }

    /// Height of the drawing area after subtracting vertical margins.
    #[must_use]
    pub fn drawing_height(&self) -> u32 {
        self.height.saturating_sub(self.margins.top).saturating_sub(self.margins.bottom)
    }

    /// Set the display title.
    #[must_use]
    pub fn set_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replace the color list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyColors`] if `colors` is empty.
    pub fn set_colors(mut self, colors: &[&str]) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::EmptyColors);
        }
        self.colors = colors.iter().map(ToString::to_string).collect();
        Ok(self)
    }

    /// Set all four margins.
    #[must_use]
    pub fn set_margins(mut self, top: u32, right: u32, bottom: u32, left: u32) -> Self {
        self.margins = Margins { top, right, bottom, left };
        self
    }

    /// Replace the dataset, re-running the full numeric validation.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` is empty or contains non-finite values.
    pub fn set_data(mut self, data: &[f64]) -> Result<Self> {
        Self::validate_numeric(data)?;
        self.data = data.to_vec();
        Ok(self)
    }

    /// The dataset.
    #[must_use]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// The display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The color list.
    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// The margins.
    #[must_use]
    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Total chart width.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Total chart height.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color for a data index, cycling through the color list.
    #[must_use]
    pub fn color(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }
}

impl Render for Chart {
    /// The base contract carries no layout; every call fails.
    fn render(&self) -> Result<String> {
        Err(Error::RenderNotImplemented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_data() {
        let chart = Chart::with_size(&[1.0, 2.0, 3.0], 500, 400).unwrap();
        assert_eq!(chart.data(), [1.0, 2.0, 3.0]);
        assert_eq!(chart.width(), 500);
        assert_eq!(chart.height(), 400);
    }

    #[test]
    fn test_default_dimensions() {
        let chart = Chart::new(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(chart.width(), 400);
        assert_eq!(chart.height(), 300);
    }

    #[test]
    fn test_empty_data_rejected() {
        assert!(matches!(Chart::new(&[]), Err(Error::EmptyData)));
    }

    #[test]
    fn test_non_finite_data_rejected() {
        let err = Chart::new(&[1.0, f64::NAN, 3.0]);
        assert!(matches!(err, Err(Error::NonFiniteData { index: 1 })));
        assert!(Chart::new(&[1.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Chart::with_size(&[1.0], 0, 200),
            Err(Error::InvalidDimensions { width: 0, height: 200 })
        ));
    }

    #[test]
    fn test_drawing_dimensions_account_for_margins() {
        let chart = Chart::with_size(&[1.0, 2.0, 3.0], 500, 400).unwrap();
        assert_eq!(chart.drawing_width(), 500);
        assert_eq!(chart.drawing_height(), 400);

        let chart = chart.set_margins(40, 20, 40, 60);
        assert_eq!(chart.drawing_width(), 420);
        assert_eq!(chart.drawing_height(), 320);
    }

    #[test]
    fn test_drawing_dimensions_saturate() {
        let chart = Chart::with_size(&[1.0], 10, 10).unwrap().set_margins(8, 8, 8, 8);
        assert_eq!(chart.drawing_width(), 0);
        assert_eq!(chart.drawing_height(), 0);
    }

    #[test]
    fn test_set_title() {
        let chart = Chart::new(&[1.0]).unwrap().set_title("Test Chart");
        assert_eq!(chart.title(), "Test Chart");
    }

    #[test]
    fn test_set_colors() {
        let chart = Chart::new(&[1.0]).unwrap().set_colors(&["red", "blue", "green"]).unwrap();
        assert_eq!(chart.colors(), ["red", "blue", "green"]);
    }

    #[test]
    fn test_set_colors_rejects_empty() {
        let err = Chart::new(&[1.0]).unwrap().set_colors(&[]);
        assert!(matches!(err, Err(Error::EmptyColors)));
    }

    #[test]
    fn test_set_data() {
        let chart = Chart::new(&[1.0, 2.0, 3.0]).unwrap().set_data(&[4.0, 5.0, 6.0]).unwrap();
        assert_eq!(chart.data(), [4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_set_data_revalidates() {
        let chart = Chart::new(&[1.0]).unwrap();
        assert!(chart.clone().set_data(&[]).is_err());
        assert!(chart.set_data(&[f64::NAN]).is_err());
    }

    #[test]
    fn test_color_cycles() {
        let chart = Chart::new(&[1.0]).unwrap();
        assert_eq!(chart.color(0), "#3498db");
        assert_eq!(chart.color(1), "#e74c3c");
        assert_eq!(chart.color(5), chart.color(0));
    }

    #[test]
    fn test_base_render_fails() {
        let chart = Chart::new(&[1.0, 2.0, 3.0]).unwrap();
        let err = chart.render().unwrap_err();
        assert!(err.to_string().contains("must be implemented"));
    }

    #[test]
    fn test_fluent_chaining() {
        let chart = Chart::new(&[1.0, 2.0, 3.0])
            .unwrap()
            .set_title("Test Chart")
            .set_colors(&["red", "blue"])
            .unwrap()
            .set_margins(50, 30, 50, 70)
            .set_data(&[4.0, 5.0, 6.0])
            .unwrap();

        assert_eq!(chart.title(), "Test Chart");
        assert_eq!(chart.colors(), ["red", "blue"]);
        assert_eq!(chart.margins(), Margins { top: 50, right: 30, bottom: 50, left: 70 });
        assert_eq!(chart.data(), [4.0, 5.0, 6.0]);
    }
}

// ============================================================================
// Property-based tests with proptest
// ============================================================================
