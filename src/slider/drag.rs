//! Drag gesture state machine
//!
//! A [`DragSession`] lives from an accepted begin until end/cancel. Knob
//! selection on begin follows this order:
//!
//! 1. Pointer over both knobs: select both when the values are within
//!    `minimum_distance` ("close" mode, resolved by the first movement),
//!    otherwise alternate between the two on repeated taps.
//! 2. Pointer over one knob: select it.
//! 3. Pointer elsewhere: drag the band (both knobs) if enabled, else reject.

use iced::Point;

use super::constraint;
use super::geometry::value_delta_for_pixels;
use super::layout::{Geometry, Knob};
use super::state::{Metrics, SliderState};

/// Knob(s) driven by the current gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveKnob {
    #[default]
    None,
    Lower,
    Upper,
    Both,
}

impl ActiveKnob {
    pub fn contains(self, knob: Knob) -> bool {
        matches!(
            (self, knob),
            (ActiveKnob::Both, _)
                | (ActiveKnob::Lower, Knob::Lower)
                | (ActiveKnob::Upper, Knob::Upper)
        )
    }

    /// Drop `knob` from the selection
    pub fn without(self, knob: Knob) -> Self {
        match (self, knob) {
            (ActiveKnob::Both, Knob::Lower) => ActiveKnob::Upper,
            (ActiveKnob::Both, Knob::Upper) => ActiveKnob::Lower,
            (ActiveKnob::Lower, Knob::Lower) | (ActiveKnob::Upper, Knob::Upper) => ActiveKnob::None,
            (other, _) => other,
        }
    }

    /// The knob when exactly one is selected
    pub fn single_knob(self) -> Option<Knob> {
        match self {
            ActiveKnob::Lower => Some(Knob::Lower),
            ActiveKnob::Upper => Some(Knob::Upper),
            ActiveKnob::None | ActiveKnob::Both => None,
        }
    }

    fn from_knob(knob: Knob) -> Self {
        match knob {
            Knob::Lower => ActiveKnob::Lower,
            Knob::Upper => ActiveKnob::Upper,
        }
    }
}

/// Transient state of one pointer interaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position of the last committed delta (or of the begin)
    previous_position: Point,
    active: ActiveKnob,
    knobs_are_close: bool,
}

impl DragSession {
    /// Hit-test `position` and open a session, or `None` to reject.
    ///
    /// `last_selected` remembers the most recently chosen single knob across
    /// gestures so ambiguous taps alternate.
    pub fn begin(
        position: Point,
        geometry: &Geometry,
        state: &SliderState,
        last_selected: &mut Knob,
    ) -> Option<Self> {
        let over_lower = geometry.lower_knob.contains(position);
        let over_upper = geometry.upper_knob.contains(position);

        let (active, knobs_are_close) = match (over_lower, over_upper) {
            (true, true) if state.knobs_within_minimum_distance() => {
                tracing::debug!("Knobs are close, selecting both until the drag picks a side");
                (ActiveKnob::Both, true)
            }
            (true, true) => {
                let knob = last_selected.opposite();
                *last_selected = knob;
                tracing::debug!("Overlapping knobs, alternating to {:?}", knob);
                (ActiveKnob::from_knob(knob), false)
            }
            (true, false) => {
                *last_selected = Knob::Lower;
                (ActiveKnob::Lower, false)
            }
            (false, true) => {
                *last_selected = Knob::Upper;
                (ActiveKnob::Upper, false)
            }
            (false, false) if state.drag_track_enabled => {
                tracing::debug!("Dragging the band between the knobs");
                (ActiveKnob::Both, false)
            }
            (false, false) => {
                tracing::debug!("Press at {:?} missed both knobs, band drag disabled", position);
                return None;
            }
        };

        Some(Self {
            previous_position: position,
            active,
            knobs_are_close,
        })
    }

    pub fn active(&self) -> ActiveKnob {
        self.active
    }

    pub fn knobs_are_close(&self) -> bool {
        self.knobs_are_close
    }

    pub fn previous_position(&self) -> Point {
        self.previous_position
    }

    /// Feed a new pointer position; returns true when values were committed.
    ///
    /// Sub-step motion leaves `previous_position` untouched so movement keeps
    /// accumulating from the last committed point.
    pub fn advance(
        &mut self,
        position: Point,
        state: &mut SliderState,
        width: f32,
        metrics: &Metrics,
    ) -> bool {
        let dx = position.x - self.previous_position.x;

        let Some(delta) = value_delta_for_pixels(state, dx, width, metrics)
            .and_then(|raw| constraint::quantize(raw, state.step_value))
        else {
            return false;
        };

        self.previous_position = position;

        if self.knobs_are_close {
            // Pull apart: moving up releases the lower knob, moving down the upper one
            let released = if delta > 0.0 { Knob::Lower } else { Knob::Upper };
            self.active = self.active.without(released);
            self.knobs_are_close = false;
            tracing::debug!("Close knobs resolved to {:?}", self.active);
        }

        match self.active {
            ActiveKnob::Both => constraint::move_both(state, delta),
            ActiveKnob::Lower => constraint::move_lower(state, delta),
            ActiveKnob::Upper => constraint::move_upper(state, delta),
            ActiveKnob::None => {}
        }

        tracing::trace!(
            "Committed delta {} -> {}..{}",
            delta,
            state.lower_value,
            state.upper_value
        );
        true
    }
}
