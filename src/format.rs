//! Text layout primitives.
//!
//! Fixed-width padding, alignment, and numeric-to-string formatting used by
//! the renderers to assemble each output line. Widths are measured in
//! `char`s so multi-byte labels pad correctly.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Default target width for [`create_label`].
pub const DEFAULT_LABEL_WIDTH: usize = 20;

/// Alignment of text within a fixed-width slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Flush left, padding on the right.
    #[default]
    Left,
    /// Centered, with the smaller half of the padding on the left.
    Center,
    /// Flush right, padding on the left.
    Right,
}

impl FromStr for Align {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            other => Err(Error::InvalidAlignment(other.to_string())),
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Center => write!(f, "center"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Format a number with a fixed decimal count.
///
/// A negative `decimals` falls back to the default of 2 rather than erroring.
#[must_use]
pub fn format_number(value: f64, decimals: i32) -> String {
    let precision = if decimals < 0 { 2 } else { decimals as usize };
    format!("{value:.precision$}")
}

/// Pad `text` to exactly `width` chars using the given alignment.
///
/// Text at or beyond `width` is returned unchanged; there is no truncation.
#[must_use]
pub fn pad_string(text: &str, width: usize, align: Align) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let total = width - len;
    match align {
        Align::Left => format!("{text}{}", " ".repeat(total)),
        Align::Right => format!("{}{text}", " ".repeat(total)),
        Align::Center => {
            let left = total / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(total - left))
        }
    }
}

/// Hard-cut `text` to at most `max_length` chars.
#[must_use]
pub fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    text.chars().take(max_length).collect()
}

/// Build a `"key: value"` label padded to exactly `width` chars.
///
/// The value portion is right-aligned into the remaining space. If the
/// natural length already meets or exceeds `width`, the unpadded
/// concatenation is returned.
#[must_use]
pub fn create_label(key: &str, value: impl fmt::Display, width: usize) -> String {
    let value = value.to_string();
    let key_len = key.chars().count();
    let needed = key_len + 2 + value.chars().count();

    if needed >= width {
        return format!("{key}: {value}");
    }

    let value_width = width - key_len - 2;
    format!("{key}: {}", pad_string(&value, value_width, Align::Right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_default_decimals() {
        assert_eq!(format_number(1234.5678, 2), "1234.57");
    }

    #[test]
    fn test_format_number_zero_decimals() {
        assert_eq!(format_number(1234.5678, 0), "1235");
    }

    #[test]
    fn test_format_number_three_decimals() {
        assert_eq!(format_number(1234.5678, 3), "1234.568");
    }

    #[test]
    fn test_format_number_negative_decimals_fallback() {
        assert_eq!(format_number(1234.5678, -1), "1234.57");
    }

    #[test]
    fn test_pad_string_left() {
        assert_eq!(pad_string("Hi", 5, Align::Left), "Hi   ");
    }

    #[test]
    fn test_pad_string_right() {
        assert_eq!(pad_string("Hi", 5, Align::Right), "   Hi");
    }

    #[test]
    fn test_pad_string_center_smaller_half_left() {
        assert_eq!(pad_string("Hi", 5, Align::Center), " Hi  ");
    }

    #[test]
    fn test_pad_string_no_truncation() {
        assert_eq!(pad_string("Hello", 3, Align::Left), "Hello");
    }

    #[test]
    fn test_pad_string_multibyte() {
        assert_eq!(pad_string("é", 3, Align::Left).chars().count(), 3);
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate("Hello World", 8), "Hello Wo");
    }

    #[test]
    fn test_truncate_short_text() {
        assert_eq!(truncate("Hello World", 20), "Hello World");
    }

    #[test]
    fn test_create_label_basic() {
        let label = create_label("Sales", 1234.56, DEFAULT_LABEL_WIDTH);
        assert_eq!(label.chars().count(), 20);
        assert!(label.starts_with("Sales: "));
        assert!(label.contains("1234.56"));
    }

    #[test]
    fn test_create_label_custom_width() {
        let label = create_label("Revenue", 999, 15);
        assert_eq!(label.chars().count(), 15);
        assert!(label.starts_with("Revenue: "));
    }

    #[test]
    fn test_create_label_overflow_unpadded() {
        assert_eq!(create_label("Quarterly Revenue", 1234.56, 15), "Quarterly Revenue: 1234.56");
    }

    #[test]
    fn test_align_from_str() {
        assert_eq!("left".parse::<Align>().ok(), Some(Align::Left));
        assert_eq!("center".parse::<Align>().ok(), Some(Align::Center));
        assert_eq!("right".parse::<Align>().ok(), Some(Align::Right));
    }

    #[test]
    fn test_align_from_str_rejects_unknown() {
        let err = "middle".parse::<Align>();
        assert!(matches!(err, Err(Error::InvalidAlignment(_))));
    }

    #[test]
    fn test_align_display_round_trip() {
        for align in [Align::Left, Align::Center, Align::Right] {
            assert_eq!(align.to_string().parse::<Align>().ok(), Some(align));
        }
    }
}

// ============================================================================
// Property-based tests with proptest
// ============================================================================
