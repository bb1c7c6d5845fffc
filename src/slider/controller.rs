//! Range slider controller
//!
//! Owns the value state, the current geometry and at most one drag session.
//! Every public mutation returns what the host has to repaint.

use iced::{Point, Size};

use super::drag::{ActiveKnob, DragSession};
use super::layout::{self, Geometry, Knob, RedrawRequest};
use super::state::{Metrics, SliderState};
use super::surface::DrawSurface;

/// Result of feeding a pointer event to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragResponse {
    /// Begin: the gesture was taken. Continue: a delta was committed.
    pub accepted: bool,
    /// Lower/upper values changed; observers should re-read them
    pub value_changed: bool,
    pub redraw: RedrawRequest,
}

impl DragResponse {
    const IGNORED: Self = Self {
        accepted: false,
        value_changed: false,
        redraw: RedrawRequest::NONE,
    };
}

/// Dual-knob range slider core
#[derive(Debug, Clone)]
pub struct RangeSlider {
    state: SliderState,
    metrics: Metrics,
    geometry: Geometry,
    session: Option<DragSession>,
    last_selected: Knob,
}

impl Default for RangeSlider {
    fn default() -> Self {
        Self::new(SliderState::default())
    }
}

impl RangeSlider {
    pub fn new(state: SliderState) -> Self {
        Self::with_metrics(state, Metrics::default())
    }

    pub fn with_metrics(state: SliderState, metrics: Metrics) -> Self {
        let state = state.validated();
        let size = Size::new(0.0, metrics.min_height);

        Self {
            geometry: layout::arrange(&state, size, &metrics),
            state,
            metrics,
            session: None,
            last_selected: Knob::Upper,
        }
    }

    pub fn state(&self) -> &SliderState {
        &self.state
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Replace the whole state: validate once, then recompute the layout.
    pub fn set_state(&mut self, state: SliderState) -> RedrawRequest {
        self.state = state.validated();
        self.relayout()
    }

    /// Batch several field writes into a single validation + relayout.
    pub fn update(&mut self, f: impl FnOnce(&mut SliderState)) -> RedrawRequest {
        let mut next = self.state;
        f(&mut next);
        self.set_state(next)
    }

    pub fn set_metrics(&mut self, metrics: Metrics) -> RedrawRequest {
        self.metrics = metrics;
        self.relayout()
    }

    /// New pixel bounds of the widget
    pub fn set_size(&mut self, size: Size) -> RedrawRequest {
        if size == self.geometry.size {
            return RedrawRequest::NONE;
        }
        self.geometry = layout::arrange(&self.state, size, &self.metrics);
        RedrawRequest::all()
    }

    fn relayout(&mut self) -> RedrawRequest {
        self.geometry = layout::arrange(&self.state, self.geometry.size, &self.metrics);
        RedrawRequest::all()
    }

    /// Knob center for `value` under the current bounds
    pub fn position_for_value(&self, value: f64) -> Point {
        layout::knob_center(
            &self.state,
            value,
            self.geometry.size,
            &self.geometry.track,
            &self.metrics,
        )
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn active_knob(&self) -> ActiveKnob {
        self.session
            .as_ref()
            .map_or(ActiveKnob::None, DragSession::active)
    }

    pub fn knobs_are_close(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(DragSession::knobs_are_close)
    }

    /// Whether `knob` is drawn in its highlighted style
    pub fn is_highlighted(&self, knob: Knob) -> bool {
        self.active_knob().contains(knob)
    }

    /// Start a gesture at `position` (widget-local).
    ///
    /// A session left open by an interrupted gesture is closed first.
    pub fn begin_drag(&mut self, position: Point) -> DragResponse {
        let stale = self.end_drag();

        let Some(session) =
            DragSession::begin(position, &self.geometry, &self.state, &mut self.last_selected)
        else {
            return DragResponse {
                redraw: stale,
                ..DragResponse::IGNORED
            };
        };

        let redraw = match session.active() {
            ActiveKnob::Both => RedrawRequest::knob(Knob::Upper)
                .with_knob(Knob::Lower)
                .front(Knob::Lower),
            active => active
                .single_knob()
                .map_or(RedrawRequest::NONE, |knob| RedrawRequest::knob(knob).front(knob)),
        };

        self.session = Some(session);

        DragResponse {
            accepted: true,
            value_changed: false,
            redraw: stale.merge(redraw),
        }
    }

    /// Move the pointer of the current gesture to `position`.
    pub fn continue_drag(&mut self, position: Point) -> DragResponse {
        let Some(session) = self.session.as_mut() else {
            return DragResponse::IGNORED;
        };

        let before = session.active();
        if !session.advance(
            position,
            &mut self.state,
            self.geometry.size.width,
            &self.metrics,
        ) {
            return DragResponse::IGNORED;
        }
        let after = session.active();

        let mut redraw = self.relayout();
        // Close mode just resolved to a single knob
        if before != after {
            if let Some(knob) = after.single_knob() {
                redraw = redraw.front(knob);
            }
        }

        DragResponse {
            accepted: true,
            value_changed: true,
            redraw,
        }
    }

    /// Finish the gesture and clear all highlights.
    pub fn end_drag(&mut self) -> RedrawRequest {
        let Some(session) = self.session.take() else {
            return RedrawRequest::NONE;
        };

        let active = session.active();
        let mut redraw = RedrawRequest::NONE;
        for knob in [Knob::Lower, Knob::Upper] {
            if active.contains(knob) {
                redraw = redraw.with_knob(knob);
            }
        }
        redraw
    }

    /// The host interrupted the gesture without a clean end.
    pub fn cancel_drag(&mut self) -> RedrawRequest {
        if self.session.is_some() {
            tracing::debug!("Range slider drag cancelled");
        }
        self.end_drag()
    }

    /// Paint through `surface`, stacking `front` above the other knob.
    pub fn draw<S: DrawSurface>(&self, surface: &mut S, front: Knob) {
        surface.draw_track(&self.geometry, &self.state);

        for knob in [front.opposite(), front] {
            surface.draw_knob(knob, self.geometry.knob(knob), self.is_highlighted(knob));
        }
    }
}
