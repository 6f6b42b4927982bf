//! # textchart
//!
//! ASCII/Unicode bar chart rendering for terminals, logs, and plain-text
//! reports.
//!
//! Each chart is a pure, synchronous data-to-text pipeline: validate the
//! dataset, scale values into the bounded drawing area, lay characters out
//! into a fixed-width grid, and emit one multi-line `String`. No I/O, no
//! color escapes, no global state.
//!
//! ## Quick Start
//!
//! ```rust
//! use textchart::prelude::*;
//!
//! let chart = BarChart::with_size(&[10.0, 25.0, 15.0], &["Q1", "Q2", "Q3"], 40, 10)?
//!     .set_title("Quarterly Sales");
//! println!("{}", chart.render()?);
//!
//! let chart = HorizontalBarChart::new(&[450.0, 720.0, 320.0], &["Q1", "Q2", "Q3"])?;
//! println!("{}", chart.render()?);
//! # Ok::<(), textchart::Error>(())
//! ```
//!
//! ## Output
//!
//! Vertical charts draw a value-annotated axis (`┃`), block bars (`█`), a
//! bottom rule (`‾`), and a label row. Horizontal charts emit one line per
//! data point: label, axis, bar, value.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in text-layout/scaling code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Scale transforms for data-to-text mappings.
pub mod scale;

/// Text layout primitives (padding, alignment, numeric formatting).
pub mod format;

/// Hex/RGB color utilities and palette generation (unused by the renderers).
pub mod color;

// ============================================================================
// Chart Modules
// ============================================================================

/// Base chart contract: shared state, validation, and the render trait.
pub mod chart;

/// Concrete chart renderers.
pub mod charts;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for textchart operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use textchart::prelude::*;
/// ```
pub mod prelude {
    pub use crate::chart::{Chart, Margins, Render};
    pub use crate::charts::{BarChart, HorizontalBarChart};
    pub use crate::error::{Error, Result};
    pub use crate::format::Align;
}
