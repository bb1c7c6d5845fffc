//! Dual-knob range slider core
//!
//! Toolkit-independent interaction logic: pointer gestures come in through
//! [`RangeSlider::begin_drag`], [`RangeSlider::continue_drag`] and
//! [`RangeSlider::end_drag`]; repaint work goes out as [`RedrawRequest`]s and
//! through a [`DrawSurface`].
//!
//! # Layers
//!
//! - [`geometry`]: value <-> pixel mapping
//! - [`constraint`]: step quantization and knob move policies
//! - [`drag`]: gesture state machine
//! - [`layout`]: frame recomputation and redraw requests
//! - [`controller`]: ties the above together around one [`SliderState`]

pub mod constraint;
pub mod controller;
pub mod drag;
pub mod geometry;
pub mod layout;
pub mod state;
pub mod surface;

pub use controller::{DragResponse, RangeSlider};
pub use drag::ActiveKnob;
pub use layout::{Geometry, Knob, RedrawRequest};
pub use state::{Metrics, SliderState};
pub use surface::DrawSurface;
