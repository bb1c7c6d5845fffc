//! Value constraint rules
//!
//! Turns a raw value delta into committed lower/upper values: step
//! quantization first, then one of the move policies below.

use super::state::SliderState;

/// Clamp `value` into `[low, high]`.
///
/// Unlike `f64::clamp` this never panics; when `low > high` the result is
/// `high`.
pub fn bound_value(value: f64, low: f64, high: f64) -> f64 {
    value.max(low).min(high)
}

/// Snap a raw delta to the step grid.
///
/// Returns `None` when the delta is smaller than one step (or exactly zero),
/// in which case the caller must not advance its reference pointer position.
/// Multiples are rounded half away from zero, so a delta of exactly half a
/// step commits one step.
pub fn quantize(raw_delta: f64, step: f64) -> Option<f64> {
    if !raw_delta.is_finite() || raw_delta == 0.0 || raw_delta.abs() < step {
        return None;
    }

    if step > 0.0 {
        Some(step * (raw_delta / step).round())
    } else {
        Some(raw_delta)
    }
}

/// Shift both knobs by `delta`, preserving their gap.
///
/// The knob leading in the direction of travel moves first so the two never
/// cross mid-update; at an edge the whole band stops instead of compressing.
pub fn move_both(state: &mut SliderState, delta: f64) {
    let gap = state.gap();

    if delta > 0.0 {
        state.upper_value = bound_value(
            state.upper_value + delta,
            state.lower_value + gap,
            state.maximum_value,
        );
        state.lower_value = bound_value(
            state.lower_value + delta,
            state.minimum_value,
            state.upper_value - gap,
        );
    } else {
        state.lower_value = bound_value(
            state.lower_value + delta,
            state.minimum_value,
            state.upper_value - gap,
        );
        state.upper_value = bound_value(
            state.upper_value + delta,
            state.lower_value + gap,
            state.maximum_value,
        );
    }

    // `lower + gap` can land one ulp outside the range
    state.lower_value = bound_value(state.lower_value, state.minimum_value, state.upper_value);
    state.upper_value = bound_value(state.upper_value, state.lower_value, state.maximum_value);
}

/// Move the lower knob, keeping it `minimum_distance` below the upper one.
///
/// A knob already closer than `minimum_distance` may move away from the other
/// knob but not towards it.
pub fn move_lower(state: &mut SliderState, delta: f64) {
    let ceiling = bound_value(
        state.upper_value - state.minimum_distance,
        state.lower_value,
        state.upper_value,
    );
    state.lower_value = bound_value(state.lower_value + delta, state.minimum_value, ceiling);
}

/// Move the upper knob, keeping it `minimum_distance` above the lower one.
pub fn move_upper(state: &mut SliderState, delta: f64) {
    let floor = bound_value(
        state.lower_value + state.minimum_distance,
        state.lower_value,
        state.upper_value,
    );
    state.upper_value = bound_value(state.upper_value + delta, floor, state.maximum_value);
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn state(lower: f64, upper: f64) -> SliderState {
        SliderState {
            lower_value: lower,
            upper_value: upper,
            ..Default::default()
        }
    }

    fn assert_ordered(state: &SliderState) {
        assert!(state.minimum_value <= state.lower_value, "{state:?}");
        assert!(state.lower_value <= state.upper_value, "{state:?}");
        assert!(state.upper_value <= state.maximum_value, "{state:?}");
    }

    #[test]
    fn test_bound_value() {
        assert_eq!(bound_value(5.0, 0.0, 10.0), 5.0);
        assert_eq!(bound_value(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(bound_value(11.0, 0.0, 10.0), 10.0);
        // Inverted bounds resolve to the upper bound instead of panicking
        assert_eq!(bound_value(5.0, 8.0, 2.0), 2.0);
    }

    #[test]
    fn test_quantize_continuous() {
        assert_eq!(quantize(0.37, 0.0), Some(0.37));
        assert_eq!(quantize(-0.37, 0.0), Some(-0.37));
        assert_eq!(quantize(0.0, 0.0), None, "No motion commits nothing");
    }

    #[test]
    fn test_quantize_discards_sub_step_motion() {
        assert_eq!(quantize(0.4, 1.0), None);
        assert_eq!(quantize(-0.99, 1.0), None);
    }

    #[test]
    fn test_quantize_rounds_to_nearest_step() {
        assert_eq!(quantize(1.2, 1.0), Some(1.0));
        assert_eq!(quantize(1.7, 1.0), Some(2.0));
        assert_eq!(quantize(-1.7, 1.0), Some(-2.0));
        assert_eq!(quantize(1.0, 0.25), Some(1.0));
    }

    #[test]
    fn test_quantize_half_step_rounds_away_from_zero() {
        assert_eq!(quantize(2.5, 1.0), Some(3.0));
        assert_eq!(quantize(-2.5, 1.0), Some(-3.0));
    }

    #[test]
    fn test_quantize_rejects_non_finite() {
        assert_eq!(quantize(f64::INFINITY, 0.0), None);
        assert_eq!(quantize(f64::NAN, 1.0), None);
    }

    #[test]
    fn test_lower_is_capped_by_minimum_distance() {
        let mut s = SliderState {
            minimum_distance: 1.0,
            ..state(2.0, 8.0)
        };
        move_lower(&mut s, 8.0);
        assert_eq!(s.lower_value, 7.0);
        assert_eq!(s.upper_value, 8.0);
    }

    #[test]
    fn test_upper_is_floored_by_minimum_distance() {
        let mut s = SliderState {
            minimum_distance: 1.5,
            ..state(2.0, 8.0)
        };
        move_upper(&mut s, -9.0);
        assert_eq!(s.upper_value, 3.5);
    }

    #[test]
    fn test_single_moves_clamp_to_range_edges() {
        let mut s = state(2.0, 8.0);
        move_lower(&mut s, -5.0);
        assert_eq!(s.lower_value, 0.0);

        move_upper(&mut s, 5.0);
        assert_eq!(s.upper_value, 10.0);
    }

    #[test]
    fn test_single_move_never_crosses_when_distance_exceeds_gap() {
        let mut s = SliderState {
            minimum_distance: 3.0,
            ..state(0.5, 1.0)
        };
        move_lower(&mut s, 0.2);
        assert_ordered(&s);
        assert_eq!(s.lower_value, 0.5, "Knob holds instead of closing in");

        move_lower(&mut s, -0.2);
        assert!((s.lower_value - 0.3).abs() < EPSILON, "Moving away is allowed");

        move_upper(&mut s, -0.4);
        assert_ordered(&s);
        assert_eq!(s.upper_value, 1.0);
    }

    #[test]
    fn test_both_preserves_gap() {
        let mut s = state(2.0, 5.0);
        move_both(&mut s, 1.5);
        assert!((s.lower_value - 3.5).abs() < EPSILON);
        assert!((s.upper_value - 6.5).abs() < EPSILON);

        move_both(&mut s, -3.0);
        assert!((s.lower_value - 0.5).abs() < EPSILON);
        assert!((s.upper_value - 3.5).abs() < EPSILON);
    }

    #[test]
    fn test_both_stops_at_upper_edge() {
        let mut s = state(2.0, 8.0);
        move_both(&mut s, 5.0);
        assert_eq!(s.upper_value, 10.0);
        assert_eq!(s.lower_value, 4.0);
        assert!((s.gap() - 6.0).abs() < EPSILON);
    }

    #[test]
    fn test_both_stops_at_lower_edge() {
        let mut s = state(2.0, 8.0);
        move_both(&mut s, -5.0);
        assert_eq!(s.lower_value, 0.0);
        assert_eq!(s.upper_value, 6.0);
    }

    #[test]
    fn test_moves_keep_ordering_under_arbitrary_deltas() {
        let deltas = [3.7, -12.0, 0.1, 25.0, -0.3, -4.4, 9.9];
        let mut s = SliderState {
            minimum_distance: 0.5,
            ..state(3.0, 6.0)
        };

        for delta in deltas {
            move_both(&mut s, delta);
            assert_ordered(&s);
            move_lower(&mut s, delta);
            assert_ordered(&s);
            move_upper(&mut s, -delta);
            assert_ordered(&s);
        }
    }
}
