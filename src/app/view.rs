//! Application view rendering

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use range_slider::ui::{theme, widgets};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let values = self.values();

        let slider = widgets::range_slider(*values, Message::RangeChanged)
            .on_release(Message::RangeReleased)
            .metrics(self.settings().metrics)
            .appearance(self.settings().appearance);

        let readout = row![
            text(format!("Lower: {:.2}", values.lower_value)).size(14),
            text(format!("Upper: {:.2}", values.upper_value)).size(14),
            text(format!(
                "Range: {:.2} - {:.2}",
                values.minimum_value, values.maximum_value
            ))
            .size(12)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
        ]
        .spacing(24)
        .align_y(Alignment::Center);

        let drag_track_label = if values.drag_track_enabled {
            "Band drag: on"
        } else {
            "Band drag: off"
        };

        let controls = row![
            button(text(drag_track_label).size(13))
                .padding([6, 14])
                .style(theme::secondary_button)
                .on_press(Message::ToggleDragTrack),
            button(text("Reset").size(13))
                .padding([6, 14])
                .style(theme::secondary_button)
                .on_press(Message::Reset),
            button(text("Toggle theme").size(13))
                .padding([6, 14])
                .style(theme::secondary_button)
                .on_press(Message::ToggleTheme),
            button(text("Save").size(13))
                .padding([6, 14])
                .style(theme::primary_button)
                .on_press(Message::SaveSettings),
        ]
        .spacing(8);

        let card = container(column![slider, readout].spacing(16))
            .padding(24)
            .width(Fill)
            .style(theme::card);

        let mut content = column![text("Range Slider").size(22), card, controls]
            .spacing(20)
            .max_width(640);

        if let Some(status) = self.status() {
            content = content.push(text(status).size(12).style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }));
        }

        container(content)
            .padding(32)
            .height(Fill)
            .center_x(Fill)
            .style(theme::main_content)
            .into()
    }
}
