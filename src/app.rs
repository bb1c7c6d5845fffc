//! Demo application hosting a single range slider

mod message;
mod view;

use iced::{Task, Theme};

use range_slider::SliderState;
use range_slider::features::Settings;

pub use message::Message;

/// Application state
pub struct App {
    settings: Settings,
    values: SliderState,
    dark_mode: bool,
    status: Option<String>,
}

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        (Self::with_settings(Settings::load()), Task::none())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let values = settings.initial.validated();
        tracing::info!(
            "Starting with range {}..={} and values {}..={}",
            values.minimum_value,
            values.maximum_value,
            values.lower_value,
            values.upper_value
        );

        Self {
            settings,
            values,
            dark_mode: true,
            status: None,
        }
    }

    pub fn title(&self) -> String {
        format!(
            "Range Slider - {:.2} to {:.2}",
            self.values.lower_value, self.values.upper_value
        )
    }

    pub fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn values(&self) -> &SliderState {
        &self.values
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RangeChanged(lower, upper) => {
                self.values.lower_value = lower;
                self.values.upper_value = upper;
            }
            Message::RangeReleased => {
                tracing::debug!(
                    "Range released at {}..={}",
                    self.values.lower_value,
                    self.values.upper_value
                );
            }
            Message::ToggleDragTrack => {
                self.values.drag_track_enabled = !self.values.drag_track_enabled;
                self.settings.initial.drag_track_enabled = self.values.drag_track_enabled;
            }
            Message::ToggleTheme => {
                self.dark_mode = !self.dark_mode;
            }
            Message::Reset => {
                self.values = self.settings.initial.validated();
                self.status = None;
            }
            Message::SaveSettings => match self.settings.save() {
                Ok(()) => {
                    tracing::info!("Settings saved");
                    self.status = Some("Settings saved".to_string());
                }
                Err(e) => {
                    tracing::warn!("Failed to save settings: {}", e);
                    self.status = Some(format!("Failed to save settings: {}", e));
                }
            },
        }

        Task::none()
    }
}
