//! Scale transforms for data-to-text mappings.
//!
//! Pure numeric functions that map values or whole datasets from one range
//! onto another. The renderers use these to fit raw data into the bounded
//! character grid of the drawing area.

/// Map `value` from `[input_min, input_max]` onto `[output_min, output_max]`.
///
/// When the input range collapses (`input_min == input_max`) the function
/// returns `input_min` unconditionally rather than dividing by zero.
#[must_use]
pub fn linear_scale(
    value: f64,
    input_min: f64,
    input_max: f64,
    output_min: f64,
    output_max: f64,
) -> f64 {
    if (input_max - input_min).abs() < f64::EPSILON {
        return input_min;
    }
    let t = (value - input_min) / (input_max - input_min);
    output_min + t * (output_max - output_min)
}

/// Scale a dataset against its own extent onto `[0, max_extent]`, rounding
/// each element to an integer character position.
///
/// A constant dataset passes through unchanged (rounded): the collapsed input
/// range short-circuits [`linear_scale`] to the input value itself.
///
/// The output is signed so a negative `max_extent` (a canvas with no room
/// left after gutters) yields negative positions the caller can detect.
#[must_use]
pub fn auto_scale(values: &[f64], max_extent: f64) -> Vec<i64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    values
        .iter()
        .map(|&v| linear_scale(v, min, max, 0.0, max_extent).round() as i64)
        .collect()
}

/// Min-max normalize a dataset into `[0, 1]`.
///
/// A zero-range dataset is returned unchanged rather than collapsed to a
/// constant; callers relying on normalization must handle that passthrough.
#[must_use]
pub fn normalize_data(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if (max - min).abs() < f64::EPSILON {
        return values.to_vec();
    }
    values.iter().map(|&v| (v - min) / (max - min)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_scale_midpoint() {
        assert_relative_eq!(linear_scale(50.0, 0.0, 100.0, 0.0, 20.0), 10.0);
    }

    #[test]
    fn test_linear_scale_nonzero_input_min() {
        // Offset input range: 20 sits halfway through [10, 30]
        assert_relative_eq!(linear_scale(20.0, 10.0, 30.0, 0.0, 100.0), 50.0);
    }

    #[test]
    fn test_linear_scale_collapsed_range() {
        assert_relative_eq!(linear_scale(50.0, 100.0, 100.0, 0.0, 20.0), 100.0);
    }

    #[test]
    fn test_auto_scale_regular() {
        assert_eq!(auto_scale(&[10.0, 20.0, 30.0, 40.0], 10.0), vec![0, 3, 7, 10]);
    }

    #[test]
    fn test_auto_scale_constant_passthrough() {
        assert_eq!(auto_scale(&[4.0, 4.0, 4.0], 10.0), vec![4, 4, 4]);
    }

    #[test]
    fn test_auto_scale_negative_extent() {
        let scaled = auto_scale(&[1.0, 2.0, 3.0], -5.0);
        assert!(scaled.iter().any(|&v| v < 0));
    }

    #[test]
    fn test_auto_scale_single_element() {
        assert_eq!(auto_scale(&[42.0], 300.0), vec![42]);
    }

    #[test]
    fn test_normalize_data_regular() {
        let normalized = normalize_data(&[10.0, 20.0, 30.0]);
        assert_relative_eq!(normalized[0], 0.0);
        assert_relative_eq!(normalized[1], 0.5);
        assert_relative_eq!(normalized[2], 1.0);
    }

    #[test]
    fn test_normalize_data_zero_range_passthrough() {
        assert_eq!(normalize_data(&[4.0, 4.0, 4.0]), vec![4.0, 4.0, 4.0]);
    }
}

// ============================================================================
// Property-based tests with proptest
// ============================================================================
