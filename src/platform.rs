//! Platform integration
//!
//! Touch-platform detection, media indexer notification, and the public
//! downloads directory.

use std::path::{Path, PathBuf};

use tokio::process::Command;

/// OS identifier of the touch platform
pub const TOUCH_PLATFORM_OS: &str = "android";

fn os_is_touch_platform(os: &str) -> bool {
    os == TOUCH_PLATFORM_OS
}

/// Whether the running OS is the touch platform
pub fn runtime_is_touch_platform() -> bool {
    os_is_touch_platform(std::env::consts::OS)
}

/// Ask the platform media indexer to pick up `path`.
///
/// Fire-and-forget: failures are logged at debug level and swallowed. No-op
/// off the touch platform.
pub async fn media_scan(path: &Path) {
    if !runtime_is_touch_platform() {
        return;
    }

    let uri = format!("file://{}", path.display());
    let result = Command::new("am")
        .args([
            "broadcast",
            "-a",
            "android.intent.action.MEDIA_SCANNER_SCAN_FILE",
            "-d",
            &uri,
        ])
        .output()
        .await;

    match result {
        Ok(output) if output.status.success() => {
            tracing::debug!("media scan requested for {}", path.display());
        }
        Ok(output) => {
            tracing::debug!("media scanner broadcast exited with {}", output.status);
        }
        Err(e) => {
            tracing::debug!("media scanner broadcast failed: {e}");
        }
    }
}

/// The OS-designated public downloads directory
pub fn download_dir() -> PathBuf {
    if let Some(dirs) = directories::UserDirs::new() {
        if let Some(download) = dirs.download_dir() {
            return download.to_path_buf();
        }
        return dirs.home_dir().join("Downloads");
    }
    PathBuf::from("Downloads")
}
