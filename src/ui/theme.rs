//! Theme for the range slider demo
//! Supports both dark and light modes with a shared accent

use iced::color;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Check if theme is dark mode
pub fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x121212);
    pub const SURFACE: Color = color!(0x1a1a1a);
    pub const BORDER: Color = color!(0x333333);
    pub const TRACK: Color = color!(0x3a3a3c);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SURFACE: Color = color!(0xeeeeee);
    pub const BORDER: Color = color!(0xdddddd);
    pub const TRACK: Color = color!(0xe3e5ea);
    pub const TEXT_SECONDARY: Color = color!(0x555555);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

/// Light blue accent used for the selected band (same for both modes)
pub const ACCENT: Color = color!(0x5aabff);

/// Accent hover state
pub const ACCENT_HOVER: Color = color!(0x3d8fe6);

pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Unselected part of the slider track
pub fn track(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TRACK
    } else {
        light::TRACK
    }
}

pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Card holding the slider
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    }
}

/// Primary button style
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ACCENT)),
        text_color: Color::WHITE,
        border: Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(ACCENT_HOVER)),
            ..base
        },
        _ => base,
    }
}

/// Secondary button - transparent with border
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 16.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(surface(theme))),
            ..base
        },
        _ => base,
    }
}
