//! Drawing collaborator interface
//!
//! The controller never draws; it hands the current geometry and a read-only
//! view of the values to a surface at draw time.

use iced::Rectangle;

use super::layout::{Geometry, Knob};
use super::state::SliderState;

/// Something that can paint the slider's three visual elements
pub trait DrawSurface {
    /// Paint the track background and the highlighted band
    fn draw_track(&mut self, geometry: &Geometry, state: &SliderState);

    /// Paint one knob inside `frame`
    fn draw_knob(&mut self, knob: Knob, frame: Rectangle, highlighted: bool);
}
