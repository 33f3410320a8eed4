//! Tunegrab - grab the audio of a video URL, cover art included
//! Built with iced for a small, dark mode UI

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod download;
mod platform;
mod settings;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .window_size(iced::Size::new(520.0, 340.0))
        .run()
}
