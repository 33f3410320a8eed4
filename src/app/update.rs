//! Message update handlers

use std::path::PathBuf;

use iced::Task;
use tracing::{info, warn};

use super::state::Status;
use super::{App, Message};
use crate::download::{self, FetchOptions};
use crate::platform;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::UrlChanged(url) => {
                self.url = url;
                Task::none()
            }
            Message::StartDownload => self.start_download(),
            Message::DownloadFinished(result) => {
                self.active = self.active.saturating_sub(1);
                if self.active == 0 {
                    self.handles.clear();
                }
                match result {
                    Ok(path) => {
                        info!("download finished: {}", path.display());
                        let name = path
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_else(|| path.display().to_string());
                        self.status = Status::Done(name);
                    }
                    Err(reason) => {
                        warn!("download failed: {reason}");
                        self.status = Status::Failed(reason);
                    }
                }
                Task::none()
            }
            Message::CancelAll => {
                if self.active > 0 {
                    info!("aborting {} in-flight download(s)", self.active);
                }
                for handle in self.handles.drain(..) {
                    handle.abort();
                }
                self.active = 0;
                self.status = Status::Idle;
                Task::none()
            }
        }
    }

    fn start_download(&mut self) -> Task<Message> {
        let url = self.url.trim().to_string();
        if url.is_empty() {
            return Task::none();
        }
        if self.active >= self.settings.max_concurrent {
            self.status = Status::AtCapacity;
            return Task::none();
        }

        self.active += 1;
        self.status = Status::Downloading;
        self.url.clear();

        let options = FetchOptions::from_settings(&self.settings);
        let (task, handle) = Task::perform(run_download(url, options), |result| {
            Message::DownloadFinished(result.map_err(|e| format!("{e:#}")))
        })
        .abortable();
        self.handles.push(handle);
        task
    }
}

/// Worker body: fetch the audio, then poke the media indexer where one exists
async fn run_download(url: String, options: FetchOptions) -> anyhow::Result<PathBuf> {
    let path = download::fetch_audio(&url, &options).await?;
    if platform::runtime_is_touch_platform() {
        platform::media_scan(&path).await;
    }
    Ok(path)
}
