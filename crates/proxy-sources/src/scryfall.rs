//! Scryfall lookups: fuzzy named-card search plus PNG artwork download.

use log::debug;
use proxy_layout::CardImage;
use serde::Deserialize;

use crate::{Result, SourceError};

const API_BASE: &str = "https://api.scryfall.com";

#[derive(Debug, Deserialize)]
struct NamedCard {
    name: String,
    image_uris: Option<ImageUris>,
    card_faces: Option<Vec<CardFace>>,
}

#[derive(Debug, Deserialize)]
struct CardFace {
    image_uris: Option<ImageUris>,
}

#[derive(Debug, Deserialize)]
struct ImageUris {
    png: String,
}

impl NamedCard {
    /// PNG artwork URL. Double-faced cards carry their art per face; use the
    /// front face.
    fn png_url(&self) -> Option<&str> {
        if let Some(uris) = &self.image_uris {
            return Some(&uris.png);
        }
        self.card_faces
            .as_ref()?
            .first()?
            .image_uris
            .as_ref()
            .map(|uris| uris.png.as_str())
    }
}

/// Client for the Scryfall card API.
///
/// Lookups are one blocking await each, with no retry or backoff; the caller
/// decides whether a failed name is fatal or skipped.
#[derive(Debug, Clone)]
pub struct ScryfallClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for ScryfallClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ScryfallClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: API_BASE.to_string(),
        }
    }

    /// Fetch and decode the PNG artwork for a card by (fuzzy) name.
    pub async fn named(&self, card_name: &str) -> Result<CardImage> {
        let url = format!("{}/cards/named", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("fuzzy", card_name)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SourceError::CardNotFound(card_name.to_string()));
        }

        let card: NamedCard = response.json().await?;
        let png_url = card
            .png_url()
            .ok_or_else(|| SourceError::MissingImage(card.name.clone()))?;
        debug!("downloading art for '{}' from {png_url}", card.name);

        let art = self.http.get(png_url).send().await?;
        if !art.status().is_success() {
            return Err(SourceError::MissingImage(card.name.clone()));
        }
        let bytes = art.bytes().await?;

        Ok(CardImage::decode(card.name, &bytes)?)
    }
}
