//! Horizontal bar chart renderer.
//!
//! Emits one text line per data point: a right-padded label, the axis glyph,
//! a block-character bar scaled to the available width, and the formatted
//! original value.

use crate::chart::{Chart, Render};
use crate::error::{Error, Result};
use crate::format::{format_number, pad_string, Align};
use crate::scale::auto_scale;

/// Default width and height for horizontal charts.
pub const DEFAULT_SIZE: u32 = 50;

/// Smallest usable chart width; anything narrower is rejected up front.
pub const MIN_WIDTH: u32 = 30;

const AXIS: char = '┃';
const FILL: char = '█';

/// Horizontal bar chart: one labelled line per data point.
///
/// ```
/// use textchart::prelude::*;
///
/// let chart = HorizontalBarChart::new(&[10.0, 100.0, 20.0], &["Low", "High", "Mid"])?;
/// let output = chart.render()?;
/// assert_eq!(output.lines().count(), 3);
/// # Ok::<(), textchart::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct HorizontalBarChart {
    chart: Chart,
    labels: Vec<String>,
}

impl HorizontalBarChart {
    /// Create a horizontal bar chart with the default 50x50 dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if the label count does not match the data count, or
    /// if the dataset fails the base validation.
    pub fn new(data: &[f64], labels: &[&str]) -> Result<Self> {
        Self::with_size(data, labels, DEFAULT_SIZE, DEFAULT_SIZE)
    }

    /// Create a horizontal bar chart with explicit dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error on mismatched label count, a width below 30, empty
    /// or non-finite data, or a zero height.
    pub fn with_size(data: &[f64], labels: &[&str], width: u32, height: u32) -> Result<Self> {
        if labels.len() != data.len() {
            return Err(Error::LabelCountMismatch { labels: labels.len(), data: data.len() });
        }
        if width < MIN_WIDTH {
            return Err(Error::BelowMinimumWidth { width });
        }

        Ok(Self {
            chart: Chart::with_size(data, width, height)?,
            labels: labels.iter().map(ToString::to_string).collect(),
        })
    }

    /// Set the display title.
    #[must_use]
    pub fn set_title(mut self, title: impl Into<String>) -> Self {
        self.chart = self.chart.set_title(title);
        self
    }

    /// Replace the color list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyColors`] if `colors` is empty.
    pub fn set_colors(mut self, colors: &[&str]) -> Result<Self> {
        self.chart = self.chart.set_colors(colors)?;
        Ok(self)
    }

    /// Set all four margins.
    #[must_use]
    pub fn set_margins(mut self, top: u32, right: u32, bottom: u32, left: u32) -> Self {
        self.chart = self.chart.set_margins(top, right, bottom, left);
        self
    }

    /// Replace the dataset, keeping the label pairing invariant.
    ///
    /// # Errors
    ///
    /// Returns an error if the new dataset is invalid or its length no
    /// longer matches the labels.
    pub fn set_data(mut self, data: &[f64]) -> Result<Self> {
        if data.len() != self.labels.len() {
            return Err(Error::LabelCountMismatch { labels: self.labels.len(), data: data.len() });
        }
        self.chart = self.chart.set_data(data)?;
        Ok(self)
    }

    /// The dataset.
    #[must_use]
    pub fn data(&self) -> &[f64] {
        self.chart.data()
    }

    /// The per-line labels.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The display title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.chart.title()
    }

    /// Color for a data index, cycling through the color list.
    #[must_use]
    pub fn color(&self, index: usize) -> &str {
        self.chart.color(index)
    }

    /// The shared base state.
    #[must_use]
    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    fn label_gutter(&self) -> usize {
        self.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0).max(3) + 1
    }

    fn value_gutter(&self) -> usize {
        self.chart
            .data()
            .iter()
            .map(|&v| format_number(v, 2).chars().count())
            .max()
            .unwrap_or(0)
            + 1
    }
}

impl Render for HorizontalBarChart {
    fn render(&self) -> Result<String> {
        let data = self.chart.data();
        let label_gutter = self.label_gutter();
        let value_gutter = self.value_gutter();

        let available =
            i64::from(self.chart.drawing_width()) - label_gutter as i64 - value_gutter as i64;
        let scaled = auto_scale(data, available as f64);

        if scaled.iter().copied().min().unwrap_or(0) < 0 {
            return Err(Error::WidthTooNarrow { required: (label_gutter + value_gutter) as u32 });
        }

        let mut out = String::new();
        for ((label, &value), &bar) in self.labels.iter().zip(data).zip(&scaled) {
            out.push_str(&pad_string(label, label_gutter, Align::Right));
            out.push(AXIS);
            out.push_str(&FILL.to_string().repeat(bar as usize));
            out.push(' ');
            out.push_str(&format_number(value, 2));
            out.push('\n');
        }
        Ok(out)
    }
}
