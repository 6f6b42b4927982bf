//! Error types for textchart operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing or rendering charts.
#[derive(Error, Debug)]
pub enum Error {
    /// Empty data provided where non-empty is required.
    #[error("Data cannot be empty")]
    EmptyData,

    /// Data contains a NaN or infinite element.
    #[error("Data must be finite numeric values (element {index} is not)")]
    NonFiniteData {
        /// Index of the offending element.
        index: usize,
    },

    /// Non-positive chart dimensions.
    #[error("Width and height must be positive: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Label count does not match data count.
    #[error("There must be as many labels as data points: {labels} labels for {data} values")]
    LabelCountMismatch {
        /// Number of labels.
        labels: usize,
        /// Number of data values.
        data: usize,
    },

    /// Empty color list provided.
    #[error("Colors must be a non-empty list")]
    EmptyColors,

    /// Unrecognized bar alignment name.
    #[error("Alignment must be one of 'left', 'center', or 'right', got '{0}'")]
    InvalidAlignment(String),

    /// Horizontal chart width below the usable minimum.
    #[error("Minimum width 30, got {width}")]
    BelowMinimumWidth {
        /// Width value.
        width: u32,
    },

    /// Drawing width too narrow for the labels and values at render time.
    #[error("Width too low, minimum required for dataset and labels: {required}")]
    WidthTooNarrow {
        /// Minimum width needed by the label and value gutters.
        required: u32,
    },

    /// `render()` invoked on the base chart contract.
    #[error("render() must be implemented by a concrete chart type")]
    RenderNotImplemented,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions { width: 0, height: 100 };
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_label_count_mismatch() {
        let err = Error::LabelCountMismatch { labels: 2, data: 3 };
        assert!(err.to_string().contains('2'));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_width_too_narrow_reports_minimum() {
        let err = Error::WidthTooNarrow { required: 14 };
        assert!(err.to_string().contains("14"));
    }
}
