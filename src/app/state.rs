//! Application state definitions

use iced::task;

use crate::settings::Settings;

/// Main application state
pub struct App {
    pub settings: Settings,
    /// URL input field contents
    pub url: String,
    /// Workers currently in flight
    pub active: usize,
    /// What the status line shows
    pub status: Status,
    /// Abort handles for in-flight workers
    pub handles: Vec<task::Handle>,
}

/// Status line contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Downloading,
    /// Finished; holds the output file name
    Done(String),
    /// A worker reported an error
    Failed(String),
    /// Request rejected, the in-flight bound is reached
    AtCapacity,
}

impl App {
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            url: String::new(),
            active: 0,
            status: Status::Idle,
            handles: Vec::new(),
        }
    }

    /// Human-readable status line
    pub fn status_line(&self) -> String {
        match &self.status {
            Status::Idle => "Paste a URL and hit Download".into(),
            Status::Downloading if self.active > 1 => {
                format!("Downloading... ({} active)", self.active)
            }
            Status::Downloading => "Downloading...".into(),
            Status::Done(name) => format!("Done: {name}"),
            Status::Failed(reason) => format!("Failed: {reason}"),
            Status::AtCapacity => {
                format!("Busy: {} downloads already running", self.active)
            }
        }
    }
}
