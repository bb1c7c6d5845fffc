//! UI module for the range slider
//!
//! - **Theme** (`theme`): colors and container/button styles for both modes
//! - **Widgets** (`widgets`): iced widgets built on the toolkit-independent core

pub mod theme;
pub mod widgets;
