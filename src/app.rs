//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

pub use message::Message;
pub use state::{App, Status};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = crate::settings::Settings::load();

        // Persist defaults on first run so the file is there to edit
        if crate::settings::Settings::file_path().is_some_and(|path| !path.exists()) {
            if let Err(e) = settings.save() {
                tracing::warn!("could not write default settings: {e}");
            }
        }

        (Self::with_settings(settings), Task::none())
    }

    /// Window title
    pub fn title(&self) -> String {
        String::from("Tunegrab")
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{App, Message, Status};
    use crate::settings::Settings;

    fn app() -> App {
        App::with_settings(Settings::default())
    }

    fn app_with_bound(max_concurrent: usize) -> App {
        App::with_settings(Settings {
            max_concurrent,
            ..Settings::default()
        })
    }

    #[test]
    fn start_download_enters_downloading() {
        let mut app = app();
        let _ = app.update(Message::UrlChanged("https://example.com/v".into()));
        let _ = app.update(Message::StartDownload);

        assert_eq!(app.active, 1);
        assert_eq!(app.status, Status::Downloading);
        assert!(app.url.is_empty(), "input should clear once a worker starts");
    }

    #[test]
    fn blank_url_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::UrlChanged("   ".into()));
        let _ = app.update(Message::StartDownload);

        assert_eq!(app.active, 0);
        assert_eq!(app.status, Status::Idle);
    }

    #[test]
    fn two_workers_run_within_the_bound() {
        let mut app = app_with_bound(3);
        let _ = app.update(Message::UrlChanged("https://example.com/a".into()));
        let _ = app.update(Message::StartDownload);
        let _ = app.update(Message::UrlChanged("https://example.com/b".into()));
        let _ = app.update(Message::StartDownload);

        assert_eq!(app.active, 2);

        // Each worker reports back independently
        let _ = app.update(Message::DownloadFinished(Ok(PathBuf::from(
            "/downloads/a.m4a",
        ))));
        assert_eq!(app.active, 1);
        let _ = app.update(Message::DownloadFinished(Ok(PathBuf::from(
            "/downloads/b.m4a",
        ))));
        assert_eq!(app.active, 0);
        assert_eq!(app.status, Status::Done("b.m4a".into()));
    }

    #[test]
    fn requests_past_the_bound_are_rejected() {
        let mut app = app_with_bound(1);
        let _ = app.update(Message::UrlChanged("https://example.com/a".into()));
        let _ = app.update(Message::StartDownload);
        let _ = app.update(Message::UrlChanged("https://example.com/b".into()));
        let _ = app.update(Message::StartDownload);

        assert_eq!(app.active, 1);
        assert_eq!(app.status, Status::AtCapacity);
    }

    #[test]
    fn failures_reach_the_status_line() {
        let mut app = app();
        let _ = app.update(Message::UrlChanged("https://example.com/v".into()));
        let _ = app.update(Message::StartDownload);
        let _ = app.update(Message::DownloadFinished(Err("extractor exited".into())));

        assert_eq!(app.active, 0);
        assert_eq!(app.status, Status::Failed("extractor exited".into()));
    }

    #[test]
    fn cancel_aborts_everything_in_flight() {
        let mut app = app();
        let _ = app.update(Message::UrlChanged("https://example.com/v".into()));
        let _ = app.update(Message::StartDownload);
        let _ = app.update(Message::CancelAll);

        assert_eq!(app.active, 0);
        assert_eq!(app.status, Status::Idle);
    }
}
