//! Raw document types as stored in the document store.

use serde::Deserialize;

/// A raw document fetched from the store.
///
/// The store omits fields that were never written, so everything is
/// defaulted; display fallbacks live here rather than at each call site.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    /// Display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Name of the raw's author.
    #[serde(rename = "authorName", default)]
    pub author_name: Option<String>,
    /// View counter.
    #[serde(default)]
    pub views: u64,
    /// The script text the whitelist lives in.
    #[serde(default)]
    pub code: String,
}

impl RawDocument {
    /// Title for display, with the store's conventional fallback.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Raw sem título")
    }

    /// Author name for display.
    #[must_use]
    pub fn display_author(&self) -> &str {
        self.author_name.as_deref().unwrap_or("Desconhecido")
    }
}
