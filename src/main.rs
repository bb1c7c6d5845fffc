//! Range slider demo
//! A single dual-knob slider with live value readout

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .window_size(iced::Size::new(720.0, 360.0))
        .antialiasing(true)
        .run()
}
