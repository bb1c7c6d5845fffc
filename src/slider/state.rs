//! Range slider value state and pixel metrics
//!
//! `SliderState` is the only mutable model the controller owns. It is
//! normalized once per `RangeSlider::set_state` call rather than on every
//! field write.

use serde::{Deserialize, Serialize};

use super::constraint::bound_value;

/// Numeric configuration and current bounds of a range slider
///
/// Callers must keep `maximum_value >= minimum_value`. A degenerate range is
/// accepted but every knob maps to the zero position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderState {
    /// Start of the selectable range
    pub minimum_value: f64,
    /// End of the selectable range
    pub maximum_value: f64,
    /// The current lower value
    pub lower_value: f64,
    /// The current upper value
    pub upper_value: f64,
    /// Smallest value change a drag commits (0 = continuous)
    pub step_value: f64,
    /// Minimum gap kept between the knobs while dragging one of them
    pub minimum_distance: f64,
    /// Whether dragging the band between the knobs moves both bounds
    pub drag_track_enabled: bool,
}

impl Default for SliderState {
    fn default() -> Self {
        Self {
            minimum_value: 0.0,
            maximum_value: 10.0,
            lower_value: 0.0,
            upper_value: 10.0,
            step_value: 0.0,
            minimum_distance: 0.0,
            drag_track_enabled: true,
        }
    }
}

impl SliderState {
    /// Width of the selectable range
    pub fn range(&self) -> f64 {
        self.maximum_value - self.minimum_value
    }

    /// Current distance between the knobs
    pub fn gap(&self) -> f64 {
        self.upper_value - self.lower_value
    }

    /// True when the range cannot be mapped onto pixels
    pub fn is_degenerate(&self) -> bool {
        // Written as a negation so NaN bounds count as degenerate
        !(self.maximum_value > self.minimum_value)
    }

    /// True when the knobs are within `minimum_distance` of each other
    pub fn knobs_within_minimum_distance(&self) -> bool {
        self.gap() <= self.minimum_distance
    }

    /// Returns a copy with negative step/distance zeroed and both values
    /// pulled into `[minimum_value, maximum_value]` with `lower <= upper`.
    ///
    /// An inverted range is left untouched and only logged.
    pub fn validated(mut self) -> Self {
        self.step_value = self.step_value.max(0.0);
        self.minimum_distance = self.minimum_distance.max(0.0);

        if self.maximum_value < self.minimum_value {
            tracing::warn!(
                "Range slider maximum {} is below minimum {}, geometry is undefined",
                self.maximum_value,
                self.minimum_value
            );
            return self;
        }

        let lower = bound_value(self.lower_value, self.minimum_value, self.maximum_value);
        let upper = bound_value(self.upper_value, lower, self.maximum_value);

        if lower != self.lower_value || upper != self.upper_value {
            tracing::debug!(
                "Range slider values adjusted from {}..{} to {}..{}",
                self.lower_value,
                self.upper_value,
                lower,
                upper
            );
        }

        self.lower_value = lower;
        self.upper_value = upper;
        self
    }
}

/// Pixel sizing of the slider's visual elements
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    /// Side of the square knob frame, shadow included
    pub knob_size: f32,
    /// Inset of the knob shape inside its frame, reserved for the shadow
    pub shadow_offset: f32,
    /// Thickness of the track
    pub track_height: f32,
    /// Minimum height of the whole widget
    pub min_height: f32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            knob_size: 28.0,
            shadow_offset: 2.0,
            track_height: 2.0,
            min_height: 32.0,
        }
    }
}

impl Metrics {
    /// Diameter of the visible knob shape (frame minus shadow on both sides)
    pub fn knob_visual_width(&self) -> f32 {
        self.knob_size - self.shadow_offset * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = SliderState::default();
        assert_eq!(state.minimum_value, 0.0);
        assert_eq!(state.maximum_value, 10.0);
        assert_eq!(state.lower_value, 0.0);
        assert_eq!(state.upper_value, 10.0);
        assert!(state.drag_track_enabled);
        assert!(!state.is_degenerate());
    }

    #[test]
    fn test_validated_clamps_values_into_range() {
        let state = SliderState {
            lower_value: -4.0,
            upper_value: 42.0,
            ..Default::default()
        }
        .validated();

        assert_eq!(state.lower_value, 0.0);
        assert_eq!(state.upper_value, 10.0);
    }

    #[test]
    fn test_validated_orders_crossed_values() {
        let state = SliderState {
            lower_value: 7.0,
            upper_value: 3.0,
            ..Default::default()
        }
        .validated();

        assert_eq!(state.lower_value, 7.0);
        assert_eq!(state.upper_value, 7.0, "Upper is raised to meet lower");
    }

    #[test]
    fn test_validated_zeroes_negative_step_and_distance() {
        let state = SliderState {
            step_value: -1.0,
            minimum_distance: -0.5,
            ..Default::default()
        }
        .validated();

        assert_eq!(state.step_value, 0.0);
        assert_eq!(state.minimum_distance, 0.0);
    }

    #[test]
    fn test_validated_leaves_inverted_range_alone() {
        let state = SliderState {
            minimum_value: 5.0,
            maximum_value: 1.0,
            lower_value: 3.0,
            upper_value: 4.0,
            ..Default::default()
        };
        let validated = state.validated();

        assert!(validated.is_degenerate());
        assert_eq!(validated.lower_value, 3.0);
        assert_eq!(validated.upper_value, 4.0);
    }

    #[test]
    fn test_nan_range_is_degenerate() {
        let state = SliderState {
            maximum_value: f64::NAN,
            ..Default::default()
        };
        assert!(state.is_degenerate());
    }

    #[test]
    fn test_knob_visual_width() {
        assert_eq!(Metrics::default().knob_visual_width(), 24.0);
    }

    #[test]
    fn test_state_deserializes_with_missing_fields() {
        let state: SliderState =
            serde_json::from_str(r#"{ "lower_value": 2.5, "drag_track_enabled": false }"#)
                .unwrap();

        assert_eq!(state.lower_value, 2.5);
        assert_eq!(state.maximum_value, 10.0);
        assert!(!state.drag_track_enabled);
    }
}
