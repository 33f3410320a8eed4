//! Download orchestration
//!
//! Drives the `yt-dlp` extractor as a child process and finishes the file
//! off with embedded cover art.

pub mod cover;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tokio::process::Command;

use crate::settings::Settings;

/// Stream selector: prefer an m4a audio stream, fall back to the best one
const FORMAT_SELECTOR: &str = "bestaudio[ext=m4a]/bestaudio";

/// How a single fetch should run
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub download_dir: PathBuf,
    pub ytdlp_bin: PathBuf,
}

impl FetchOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            download_dir: settings.effective_download_dir(),
            ytdlp_bin: settings
                .ytdlp_path
                .clone()
                .unwrap_or_else(|| PathBuf::from("yt-dlp")),
        }
    }
}

/// Build the extractor argument list for one URL
fn build_args(url: &str, download_dir: &Path) -> Vec<String> {
    let outtmpl = download_dir.join("%(title)s.%(ext)s");
    vec![
        "-f".into(),
        FORMAT_SELECTOR.into(),
        "-o".into(),
        outtmpl.to_string_lossy().into_owned(),
        "--no-playlist".into(),
        "--write-thumbnail".into(),
        "--quiet".into(),
        "--no-simulate".into(),
        "--print".into(),
        "after_move:filepath".into(),
        url.into(),
    ]
}

/// Download the audio of `url` and embed its thumbnail as cover art.
///
/// Returns the final audio path. A missing thumbnail is not an error; the
/// file simply ships without a cover.
pub async fn fetch_audio(url: &str, options: &FetchOptions) -> Result<PathBuf> {
    tokio::fs::create_dir_all(&options.download_dir)
        .await
        .with_context(|| {
            format!(
                "failed to create download directory {}",
                options.download_dir.display()
            )
        })?;

    tracing::info!("fetching audio for {url}");
    let output = Command::new(&options.ytdlp_bin)
        .args(build_args(url, &options.download_dir))
        .output()
        .await
        .with_context(|| format!("failed to run {}", options.ytdlp_bin.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("extractor exited with {}: {}", output.status, stderr.trim());
    }

    // `--print after_move:filepath` emits the final path once post-processing
    // has settled; take the last non-empty line in case of extractor noise.
    let stdout = String::from_utf8_lossy(&output.stdout);
    let path = stdout
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(PathBuf::from)
        .context("extractor did not report an output path")?;

    let audio = path.clone();
    let consumed = tokio::task::spawn_blocking(move || cover::attach_thumbnail(&audio))
        .await
        .context("cover embedding task panicked")??;

    match consumed {
        Some(thumbnail) => tracing::info!("embedded cover from {}", thumbnail.display()),
        None => tracing::debug!("no thumbnail next to {}", path.display()),
    }

    Ok(path)
}
