//! Value <-> pixel mapping
//!
//! Pure functions shared by interactive positioning and band drawing. All
//! pixel coordinates are local to the widget.

use super::state::{Metrics, SliderState};

/// Horizontal pixel position of the knob center for `value`.
///
/// The knob's visible shape (frame minus shadow) travels across
/// `width - visual_width`, offset by half a knob so its center, not its
/// corner, sits on the mapped point. A degenerate range maps everything to 0.
pub fn position_for_value(state: &SliderState, value: f64, width: f32, metrics: &Metrics) -> f32 {
    if state.is_degenerate() {
        return 0.0;
    }

    let percent = (value - state.minimum_value) / state.range();
    let visual_width = f64::from(metrics.knob_visual_width());
    let x = percent * (f64::from(width) - visual_width) + visual_width / 2.0;

    x as f32
}

/// Value-space equivalent of a horizontal pointer movement of `dx` pixels.
///
/// Returns `None` when the range is degenerate or the track is too narrow to
/// hold a knob.
pub fn value_delta_for_pixels(
    state: &SliderState,
    dx: f32,
    width: f32,
    metrics: &Metrics,
) -> Option<f64> {
    let usable = width - metrics.knob_size;
    if state.is_degenerate() || usable <= 0.0 {
        return None;
    }

    Some(state.range() * f64::from(dx) / f64::from(usable))
}
