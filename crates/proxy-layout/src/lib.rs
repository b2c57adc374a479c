pub mod constants;
pub mod layout;
pub mod render;

mod options;
mod pdf;
mod types;

pub use options::SheetOptions;
pub use pdf::{generate_pdf, render_deck_bytes};
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Failed to decode image '{name}': {message}")]
    Image { name: String, message: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No cards to lay out")]
    EmptyDeck,
}

pub type Result<T> = std::result::Result<T, LayoutError>;
