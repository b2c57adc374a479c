//! Card-image collaborators: local folder scanning and Scryfall lookups.
//!
//! Both sources produce [`proxy_layout::CardImage`] values in a caller-visible
//! order; everything about placing them on pages lives in `proxy-layout`.

mod folder;
mod scryfall;

pub use folder::{FolderScan, SUPPORTED_EXTENSIONS, SkippedFile, scan_folder};
pub use scryfall::ScryfallClient;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to fetch card data for '{0}'")]
    CardNotFound(String),
    #[error("Card '{0}' has no PNG image")]
    MissingImage(String),
    #[error(transparent)]
    Layout(#[from] proxy_layout::LayoutError),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, SourceError>;
