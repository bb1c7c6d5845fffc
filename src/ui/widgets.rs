//! Reusable UI widgets
//!
//! Widgets take generic message types and callbacks; they never depend on
//! `crate::app` directly.

pub mod range_slider;

pub use range_slider::{RangeSliderWidget, Status, Style, range_slider};
