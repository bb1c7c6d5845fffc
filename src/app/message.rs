//! Application messages

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Slider committed new values during a drag
    RangeChanged(f64, f64),
    /// Drag gesture finished
    RangeReleased,
    /// Enable or disable dragging the band between the knobs
    ToggleDragTrack,
    /// Switch between dark and light themes
    ToggleTheme,
    /// Restore the values from the settings file
    Reset,
    /// Persist the current behavior flags
    SaveSettings,
}
