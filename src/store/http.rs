//! REST-backed item store.

use async_trait::async_trait;
use tracing::instrument;

use crate::types::StoredItem;
use crate::{Result, ShennongError};

use super::ItemStore;

/// Store client for a REST document-store API.
///
/// Secondary lookup is `GET {base}/items?nameLowercase={key}` (404 means
/// no match); conditional insert is `POST {base}/items`, where the
/// service answers 409 when a record with the same id already exists.
pub struct HttpItemStore {
    api_key: Option<String>,
    /// Shared HTTP client.
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpItemStore {
    /// Create a store client with its own HTTP client.
    pub fn new(base_url: impl Into<String>, api_key: Option<impl Into<String>>) -> Self {
        Self::with_http_client(base_url, api_key, reqwest::Client::new())
    }

    /// Create a store client sharing an existing HTTP client.
    pub fn with_http_client(
        base_url: impl Into<String>,
        api_key: Option<impl Into<String>>,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            api_key: api_key.map(|k| k.into()),
            http_client,
            base_url: base_url.into(),
        }
    }

    fn items_url(&self) -> String {
        format!("{}/items", self.base_url)
    }
}

#[async_trait]
impl ItemStore for HttpItemStore {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(name = "store.find_by_name", skip(self))]
    async fn find_by_name(&self, name_lowercase: &str) -> Result<Option<StoredItem>> {
        let mut request = self
            .http_client
            .get(self.items_url())
            .query(&[("nameLowercase", name_lowercase)]);
        if let Some(ref key) = self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ShennongError::Store(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ShennongError::Store(format!(
                "query returned status {}",
                response.status().as_u16()
            )));
        }

        let item = response
            .json::<StoredItem>()
            .await
            .map_err(|e| ShennongError::Store(e.to_string()))?;
        Ok(Some(item))
    }

    #[instrument(name = "store.put_new", skip(self, item), fields(id = %item.id))]
    async fn put_new(&self, item: &StoredItem) -> Result<()> {
        let mut request = self.http_client.post(self.items_url()).json(item);
        if let Some(ref key) = self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ShennongError::Store(e.to_string()))?;

        if response.status() == reqwest::StatusCode::CONFLICT {
            return Err(ShennongError::Conflict(item.id.to_string()));
        }
        if !response.status().is_success() {
            return Err(ShennongError::Store(format!(
                "insert returned status {}",
                response.status().as_u16()
            )));
        }
        Ok(())
    }
}
