//! Axis range model
//!
//! [`AxisData`] turns an observed (min, max) value pair into the
//! gridline description used everywhere else: total delta, a fixed
//! subdivision into segments, and the per-segment step. It is
//! recomputed from scratch on every paint, never mutated.

use serde::{Deserialize, Serialize};

/// Fixed tick subdivision for every axis. A historical constant of the
/// renderer, not a configuration option.
pub const SEGMENT_COUNT: usize = 5;

/// Derived min/max/step description of one chart axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisData {
    range_min: f64,
    range_max: f64,
    delta: f64,
    segment_count: usize,
    step: f64,
    reverse_direction: bool,
}

impl AxisData {
    /// Build an axis from observed bounds.
    ///
    /// A degenerate range (min == max) becomes a single-segment axis
    /// spanning a placeholder delta of 1.0, so `step` is always
    /// positive and gridline math never divides by zero.
    pub fn new(min: f64, max: f64) -> Self {
        let (delta, segment_count) = if max - min == 0.0 {
            (1.0, 1)
        } else {
            (max - min, SEGMENT_COUNT.max(1))
        };
        Self {
            range_min: min,
            range_max: max,
            delta,
            segment_count,
            step: delta / segment_count as f64,
            reverse_direction: false,
        }
    }

    /// Mark the axis as reversed. Only tick-label value mapping is
    /// affected; bar and line geometry never consult this flag.
    pub fn reversed(mut self) -> Self {
        self.reverse_direction = true;
        self
    }

    /// Lower bound of the observed range
    pub fn min_value(&self) -> f64 {
        self.range_min
    }

    /// Upper bound of the observed range
    pub fn max_value(&self) -> f64 {
        self.range_max
    }

    /// Start of the tick range
    pub fn range_min(&self) -> f64 {
        self.range_min
    }

    /// Span covered by the ticks
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Number of segments between ticks, always >= 1
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Value difference between adjacent ticks
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Whether tick labels run in reverse
    pub fn reverse_direction(&self) -> bool {
        self.reverse_direction
    }

    /// Numeric label for tick `i` (0 ..= segment_count).
    ///
    /// On a reversed axis whose minimum is non-negative the labels run
    /// from max down to min; below zero the axis already reads reversed
    /// (values closer to zero are higher), so the plain mapping is kept.
    pub fn tick_label(&self, i: usize) -> String {
        let value = if self.reverse_direction && self.range_min >= 0.0 {
            self.range_min + (self.segment_count - i.min(self.segment_count)) as f64 * self.step
        } else {
            self.range_min + i as f64 * self.step
        };
        if self.step.floor() == self.step {
            format_number(value)
        } else {
            // Fractional steps round to two decimals
            format_number((value * 100.0).round() / 100.0)
        }
    }
}

impl Default for AxisData {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Plain number formatting: integral values print without a decimal
/// point, everything else uses the shortest representation.
pub(crate) fn format_number(value: f64) -> String {
    // Normalizes -0.0 so it never shows a sign
    format!("{}", value + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_basic_range() {
        let axis = AxisData::new(0.0, 20.0);
        assert_eq!(axis.delta(), 20.0);
        assert_eq!(axis.segment_count(), 5);
        assert_eq!(axis.step(), 4.0);
        assert_eq!(axis.range_min(), 0.0);
    }

    #[test]
    fn test_degenerate_range() {
        let axis = AxisData::new(3.0, 3.0);
        assert_eq!(axis.segment_count(), 1);
        assert!(axis.step() > 0.0);
        assert_eq!(axis.delta(), 1.0);
    }

    #[test]
    fn test_tick_labels_forward() {
        let axis = AxisData::new(0.0, 20.0);
        let labels: Vec<String> = (0..=5).map(|i| axis.tick_label(i)).collect();
        assert_eq!(labels, vec!["0", "4", "8", "12", "16", "20"]);
    }

    #[test]
    fn test_tick_labels_reversed() {
        let axis = AxisData::new(0.0, 20.0).reversed();
        assert_eq!(axis.tick_label(0), "20");
        assert_eq!(axis.tick_label(5), "0");
    }

    #[test]
    fn test_reversed_below_zero_keeps_plain_mapping() {
        let axis = AxisData::new(-10.0, 10.0).reversed();
        assert_eq!(axis.tick_label(0), "-10");
        assert_eq!(axis.tick_label(5), "10");
    }

    #[test]
    fn test_fractional_step_rounds_labels() {
        let axis = AxisData::new(0.0, 1.0);
        assert_eq!(axis.step(), 0.2);
        assert_eq!(axis.tick_label(1), "0.2");
        assert_eq!(axis.tick_label(3), "0.6");
    }

    proptest! {
        #[test]
        fn prop_invariants(min in -1e6f64..1e6, span in 0.0f64..1e6) {
            let axis = AxisData::new(min, min + span);
            prop_assert!(axis.segment_count() >= 1);
            prop_assert!(axis.step() > 0.0);
            let expected = axis.delta() / axis.segment_count() as f64;
            prop_assert!((axis.step() - expected).abs() <= f64::EPSILON * expected.abs().max(1.0));
        }
    }
}
