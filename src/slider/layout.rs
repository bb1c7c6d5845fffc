//! Frame recomputation for the track, band and knobs
//!
//! Every state or size change produces a whole new [`Geometry`] in one step,
//! so no half-updated frame is ever observable.

use iced::{Point, Rectangle, Size};

use super::geometry::position_for_value;
use super::state::{Metrics, SliderState};

/// One of the two slider knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Knob {
    Lower,
    Upper,
}

impl Knob {
    /// The other knob
    pub fn opposite(self) -> Self {
        match self {
            Knob::Lower => Knob::Upper,
            Knob::Upper => Knob::Lower,
        }
    }
}

/// Derived pixel frames, local to the widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Widget size the frames were computed for
    pub size: Size,
    /// Full-width track, vertically centered
    pub track: Rectangle,
    /// Highlighted span of the track between the two knob centers
    pub band: Rectangle,
    pub lower_knob: Rectangle,
    pub upper_knob: Rectangle,
}

impl Geometry {
    /// Square hit/draw frame of `knob`
    pub fn knob(&self, knob: Knob) -> Rectangle {
        match knob {
            Knob::Lower => self.lower_knob,
            Knob::Upper => self.upper_knob,
        }
    }

    /// Center of `knob`'s frame
    pub fn knob_center(&self, knob: Knob) -> Point {
        self.knob(knob).center()
    }
}

/// Knob center for `value`; the origin when the range is degenerate.
pub fn knob_center(
    state: &SliderState,
    value: f64,
    size: Size,
    track: &Rectangle,
    metrics: &Metrics,
) -> Point {
    if state.is_degenerate() {
        return Point::new(0.0, 0.0);
    }

    Point::new(
        position_for_value(state, value, size.width, metrics),
        track.center_y(),
    )
}

/// Recompute every frame from the current values and widget size.
pub fn arrange(state: &SliderState, size: Size, metrics: &Metrics) -> Geometry {
    let track = Rectangle {
        x: 0.0,
        y: (size.height - metrics.track_height) / 2.0,
        width: size.width,
        height: metrics.track_height,
    };

    let lower_center = knob_center(state, state.lower_value, size, &track, metrics);
    let upper_center = knob_center(state, state.upper_value, size, &track, metrics);

    let knob_frame = |center: Point| Rectangle {
        x: center.x - metrics.knob_size / 2.0,
        y: center.y - metrics.knob_size / 2.0,
        width: metrics.knob_size,
        height: metrics.knob_size,
    };

    let band = Rectangle {
        x: lower_center.x,
        y: track.y,
        width: (upper_center.x - lower_center.x).max(0.0),
        height: track.height,
    };

    Geometry {
        size,
        track,
        band,
        lower_knob: knob_frame(lower_center),
        upper_knob: knob_frame(upper_center),
    }
}

/// Which surfaces need repainting after an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RedrawRequest {
    pub track: bool,
    pub lower_knob: bool,
    pub upper_knob: bool,
    /// Knob that should be stacked above the other one from now on
    pub bring_to_front: Option<Knob>,
}

impl RedrawRequest {
    /// Nothing to repaint
    pub const NONE: Self = Self {
        track: false,
        lower_knob: false,
        upper_knob: false,
        bring_to_front: None,
    };

    /// Repaint the track and both knobs
    pub fn all() -> Self {
        Self {
            track: true,
            lower_knob: true,
            upper_knob: true,
            bring_to_front: None,
        }
    }

    /// Repaint a single knob
    pub fn knob(knob: Knob) -> Self {
        Self::NONE.with_knob(knob)
    }

    /// Also repaint `knob`
    pub fn with_knob(mut self, knob: Knob) -> Self {
        match knob {
            Knob::Lower => self.lower_knob = true,
            Knob::Upper => self.upper_knob = true,
        }
        self
    }

    /// Attach a z-order hint
    pub fn front(mut self, knob: Knob) -> Self {
        self.bring_to_front = Some(knob);
        self
    }

    /// Union of two requests; the later z-order hint wins
    pub fn merge(self, other: Self) -> Self {
        Self {
            track: self.track || other.track,
            lower_knob: self.lower_knob || other.lower_knob,
            upper_knob: self.upper_knob || other.upper_knob,
            bring_to_front: other.bring_to_front.or(self.bring_to_front),
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.track && !self.lower_knob && !self.upper_knob && self.bring_to_front.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size() -> Size {
        Size::new(128.0, 32.0)
    }

    #[test]
    fn test_track_is_vertically_centered() {
        let geometry = arrange(&SliderState::default(), size(), &Metrics::default());
        assert_eq!(geometry.track.x, 0.0);
        assert_eq!(geometry.track.y, 15.0);
        assert_eq!(geometry.track.width, 128.0);
        assert_eq!(geometry.track.height, 2.0);
    }

    #[test]
    fn test_knob_frames_are_centered_on_mapped_positions() {
        let state = SliderState {
            lower_value: 0.0,
            upper_value: 5.0,
            ..Default::default()
        };
        let geometry = arrange(&state, size(), &Metrics::default());

        assert_eq!(geometry.knob_center(Knob::Lower), Point::new(12.0, 16.0));
        assert_eq!(geometry.knob_center(Knob::Upper), Point::new(64.0, 16.0));
        assert_eq!(geometry.lower_knob.width, 28.0);
        assert_eq!(geometry.lower_knob.x, -2.0);
        assert_eq!(geometry.lower_knob.y, 2.0);
    }

    #[test]
    fn test_band_spans_knob_centers() {
        let state = SliderState {
            lower_value: 2.5,
            upper_value: 7.5,
            ..Default::default()
        };
        let geometry = arrange(&state, size(), &Metrics::default());

        assert_eq!(geometry.band.x, 38.0);
        assert_eq!(geometry.band.width, 52.0);
        assert_eq!(geometry.band.y, geometry.track.y);
        assert_eq!(geometry.band.height, geometry.track.height);
    }

    #[test]
    fn test_arrange_is_a_pure_function_of_inputs() {
        let state = SliderState {
            lower_value: 1.25,
            upper_value: 9.0,
            ..Default::default()
        };
        let first = arrange(&state, size(), &Metrics::default());
        let second = arrange(&state, size(), &Metrics::default());
        assert_eq!(first, second);

        let resized = arrange(&state, Size::new(256.0, 48.0), &Metrics::default());
        assert_ne!(first.upper_knob, resized.upper_knob);
        assert_eq!(resized.track.y, 23.0);
    }

    #[test]
    fn test_degenerate_range_collapses_knobs_to_origin() {
        let state = SliderState {
            minimum_value: 3.0,
            maximum_value: 3.0,
            lower_value: 3.0,
            upper_value: 3.0,
            ..Default::default()
        };
        let geometry = arrange(&state, size(), &Metrics::default());

        assert_eq!(geometry.knob_center(Knob::Lower), Point::new(0.0, 0.0));
        assert_eq!(geometry.knob_center(Knob::Upper), Point::new(0.0, 0.0));
        assert_eq!(geometry.band.width, 0.0);
    }

    #[test]
    fn test_redraw_merge() {
        let merged = RedrawRequest::knob(Knob::Lower)
            .front(Knob::Lower)
            .merge(RedrawRequest::knob(Knob::Upper).front(Knob::Upper));

        assert!(merged.lower_knob && merged.upper_knob);
        assert!(!merged.track);
        assert_eq!(merged.bring_to_front, Some(Knob::Upper));
        assert!(RedrawRequest::NONE.is_empty());
        assert!(!RedrawRequest::all().is_empty());
    }
}
