//! Range slider - a dual-knob range selection widget
//!
//! [`slider`] holds the toolkit-independent core, [`ui`] the iced widget
//! built on it and [`features`] the persisted appearance settings.

pub mod features;
pub mod slider;
pub mod ui;

pub use slider::{RangeSlider, SliderState};
