//! Application messages

use std::path::PathBuf;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// URL input changed
    UrlChanged(String),
    /// Download button pressed or input submitted
    StartDownload,
    /// A worker finished; success carries the final audio path
    DownloadFinished(Result<PathBuf, String>),
    /// Abort all in-flight downloads
    CancelAll,
}
