//! Local folder source: ordered scan and decode of card images.

use std::path::Path;

use log::{debug, warn};
use proxy_layout::CardImage;

use crate::Result;

/// File extensions the folder source will try to decode
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tiff"];

/// A file that matched the extension filter but could not be loaded
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub name: String,
    pub reason: String,
}

/// Result of a folder scan. Cards are ordered by file name so repeated runs
/// produce the same sheet.
#[derive(Debug, Default)]
pub struct FolderScan {
    pub cards: Vec<CardImage>,
    pub skipped: Vec<SkippedFile>,
}

fn is_supported(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Scan `dir` for card images.
///
/// Files that fail to read or decode are recorded in
/// [`FolderScan::skipped`] and the scan continues; deciding whether an empty
/// result is fatal is left to the caller.
pub async fn scan_folder(dir: impl AsRef<Path>) -> Result<FolderScan> {
    let dir = dir.as_ref().to_owned();
    debug!("scanning folder {}", dir.display());

    let mut names = Vec::new();
    let mut entries = tokio::fs::read_dir(&dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await?.is_file() && is_supported(&name) {
            names.push(name);
        }
    }
    names.sort();

    let mut scan = FolderScan::default();
    for name in names {
        let bytes = match tokio::fs::read(dir.join(&name)).await {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!("failed to read '{name}': {err}");
                scan.skipped.push(SkippedFile {
                    name,
                    reason: err.to_string(),
                });
                continue;
            }
        };

        // Decoding is CPU-bound, keep it off the runtime
        let file_name = name.clone();
        match tokio::task::spawn_blocking(move || CardImage::decode(file_name, &bytes)).await? {
            Ok(card) => scan.cards.push(card),
            Err(err) => {
                warn!("failed to decode '{name}': {err}");
                scan.skipped.push(SkippedFile {
                    name,
                    reason: err.to_string(),
                });
            }
        }
    }

    Ok(scan)
}
