//! Vertical bar chart renderer.
//!
//! Builds a row-by-row character grid: a left gutter carrying axis tick
//! values, a vertical axis, one column slot per data point, and a bottom
//! rule followed by the label row.

use crate::chart::{Chart, Render, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::{Error, Result};
use crate::format::{format_number, pad_string, Align};
use crate::scale::{auto_scale, linear_scale};

/// Default bar thickness in character columns.
pub const DEFAULT_BAR_THICKNESS: usize = 5;

/// Minimum bar thickness; thinner requests are floored to this.
pub const MIN_BAR_THICKNESS: usize = 3;

const AXIS: char = '┃';
const RULE: char = '‾';
const FILL: char = '█';

/// Vertical bar chart: one labelled column slot per data point.
///
/// ```
/// use textchart::prelude::*;
///
/// let chart = BarChart::with_size(&[10.0, 20.0, 30.0], &["A", "B", "C"], 40, 10)?;
/// let output = chart.render()?;
/// assert_eq!(output.lines().count(), 12); // drawing height + rule + labels
/// # Ok::<(), textchart::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct BarChart {
    chart: Chart,
    labels: Vec<String>,
    bar_thickness: usize,
    align_bars: Align,
}

impl BarChart {
    /// Create a bar chart with the default 400x300 dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if the label count does not match the data count, or
    /// if the dataset fails the base validation.
    pub fn new(data: &[f64], labels: &[&str]) -> Result<Self> {
        Self::with_size(data, labels, DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Create a bar chart with explicit dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error on mismatched label count, empty or non-finite data,
    /// or zero dimensions.
    pub fn with_size(data: &[f64], labels: &[&str], width: u32, height: u32) -> Result<Self> {
        if labels.len() != data.len() {
            return Err(Error::LabelCountMismatch { labels: labels.len(), data: data.len() });
        }

        Ok(Self {
            chart: Chart::with_size(data, width, height)?,
            labels: labels.iter().map(ToString::to_string).collect(),
            bar_thickness: DEFAULT_BAR_THICKNESS,
            align_bars: Align::default(),
        })
    }

    /// Set how many character columns wide each bar is, floored at 3.
    #[must_use]
    pub fn bar_thickness(mut self, thickness: usize) -> Self {
        self.bar_thickness = thickness.max(MIN_BAR_THICKNESS);
        self
    }

    /// Set where each bar sits inside its column slot.
    #[must_use]
    pub fn align_bars(mut self, align: Align) -> Self {
        self.align_bars = align;
        self
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

    /// The per-column labels.
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
}

impl Render for BarChart {
    fn render(&self) -> Result<String> {
        let data = self.chart.data();
        let height = i64::from(self.chart.drawing_height());

        let max_label = self.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let column_width = max_label.max(3) + 2 + self.bar_thickness;

        let scaled = auto_scale(data, height as f64);
        let max_value = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let max_scaled = scaled.iter().copied().max().unwrap_or(0);
        let gutter = format_number(max_value, 2).chars().count();

        // One tick row per five rows of height, spaced evenly. The counter
        // starts below zero so the spacing stays uniform when the height is
        // not an exact multiple of the step.
        let tick_count = height / 5;
        let tick_step = if tick_count == 0 { 0 } else { height / tick_count + 1 };
        let mut tick_counter = height - tick_step * (tick_count + 1);

        let mut out = String::new();
        for row in (0..height).rev() {
            if row == height - 1 || tick_counter == tick_step - 1 {
                // Inverse-map the row back to an original data value
                let original =
                    linear_scale((row + 1) as f64, 0.0, max_scaled as f64, 0.0, max_value);
                out.push_str(&pad_string(&format_number(original, 2), gutter, Align::Right));
                out.push(' ');
                out.push(RULE);
                tick_counter = 0;
            } else {
                out.push_str(&" ".repeat(gutter + 2));
            }
            out.push(AXIS);

            for &bar in &scaled {
                if bar > row {
                    let fill: String = std::iter::repeat(FILL).take(self.bar_thickness).collect();
                    out.push_str(&pad_string(&fill, column_width, self.align_bars));
                } else {
                    out.push_str(&" ".repeat(column_width));
                }
            }
            out.push('\n');

            if tick_step != 0 {
                tick_counter += 1;
            }
        }

        out.push_str(&pad_string("0", gutter + 1, Align::Right));
        out.push_str("  ");
        out.push_str(&RULE.to_string().repeat(scaled.len() * column_width));
        out.push('\n');

        out.push_str(&" ".repeat(gutter + 3));
        for label in &self.labels {
            out.push_str(&pad_string(label, column_width, self.align_bars));
        }

        Ok(out)
    }
}
