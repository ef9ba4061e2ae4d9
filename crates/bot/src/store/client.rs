//! REST client for the raw document store.

use coderaw_core::RawId;
use tracing::{debug, instrument};

use crate::config::StoreConfig;

use super::error::StoreError;
use super::types::RawDocument;

/// Client for the raw document store.
#[derive(Debug, Clone)]
pub struct StoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl StoreClient {
    /// Create a new store client.
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Fetch a raw document by id.
    ///
    /// The store answers `GET /raws/{id}.json` with the document, or with
    /// JSON `null` when the key does not exist - surfaced as `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the store answers with a
    /// non-success status, or the body is not valid JSON.
    #[instrument(skip(self), fields(raw_id = %raw_id))]
    pub async fn fetch(&self, raw_id: &RawId) -> Result<Option<RawDocument>, StoreError> {
        let url = format!("{}/raws/{}.json", self.base_url, raw_id);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| StoreError::Response(e.to_string()))?;

        if value.is_null() {
            debug!("Raw not found in store");
            return Ok(None);
        }

        let document = serde_json::from_value(value)
            .map_err(|e| StoreError::Response(e.to_string()))?;

        Ok(Some(document))
    }

    /// Replace the `code` field of a raw document.
    ///
    /// Issues `PUT /raws/{id}/code.json` with the new code JSON-encoded.
    /// There is no read-back and no version check; the last writer wins.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the store answers with a
    /// non-success status.
    #[instrument(skip(self, new_code), fields(raw_id = %raw_id, code_len = new_code.len()))]
    pub async fn replace_code(&self, raw_id: &RawId, new_code: &str) -> Result<(), StoreError> {
        let url = format!("{}/raws/{}/code.json", self.base_url, raw_id);

        let response = self.client.put(&url).json(&new_code).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("Raw code replaced");

        Ok(())
    }
}
