//! HTTP corpus source with per-fetch timeout and bounded retry.

use std::time::Duration;

use noesis_core::config::CorpusConfig;
use noesis_core::errors::SourceError;
use noesis_core::models::{Book, Catalog};
use noesis_core::traits::CorpusSource;
use tracing::{debug, warn};

pub struct HttpSource {
    client: reqwest::blocking::Client,
    base_url: String,
    catalog_file: String,
    retries: u32,
}

impl HttpSource {
    pub fn new(config: &CorpusConfig) -> Result<Self, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()
            .map_err(|e| SourceError::CatalogUnavailable {
                reason: format!("http client init failed: {e}"),
            })?;
        let mut base_url = config.base_url.clone();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Ok(Self {
            client,
            base_url,
            catalog_file: config.catalog_file.clone(),
            retries: config.fetch_retries,
        })
    }

    /// GET a resource, retrying transient failures. Returns `Ok(None)`
    /// on 404 so callers can distinguish "missing" from "broken".
    fn get_json_with_retry(&self, resource: &str) -> Result<Option<String>, SourceError> {
        let url = format!("{}{}", self.base_url, resource);
        let attempts = self.retries + 1;
        let mut last_error = String::new();

        for attempt in 1..=attempts {
            match self.client.get(&url).send() {
                Ok(response) => {
                    if response.status() == reqwest::StatusCode::NOT_FOUND {
                        return Ok(None);
                    }
                    if !response.status().is_success() {
                        last_error = format!("http status {}", response.status());
                    } else {
                        match response.text() {
                            Ok(body) => return Ok(Some(body)),
                            Err(e) => last_error = format!("body read failed: {e}"),
                        }
                    }
                }
                Err(e) if e.is_timeout() => {
                    return Err(SourceError::FetchTimeout {
                        resource: resource.to_string(),
                        attempts: attempt,
                    });
                }
                Err(e) => last_error = e.to_string(),
            }
            if attempt < attempts {
                warn!(resource, attempt, error = %last_error, "fetch failed, retrying");
            }
        }

        Err(SourceError::BookFetchFailed {
            id: resource.to_string(),
            reason: last_error,
        })
    }
}

impl CorpusSource for HttpSource {
    fn fetch_catalog(&self) -> Result<Catalog, SourceError> {
        debug!(catalog = %self.catalog_file, "fetching catalog");
        let body = self
            .get_json_with_retry(&self.catalog_file)
            .map_err(|e| SourceError::CatalogUnavailable {
                reason: e.to_string(),
            })?
            .ok_or_else(|| SourceError::CatalogUnavailable {
                reason: "catalog not found".to_string(),
            })?;
        serde_json::from_str(&body).map_err(|e| SourceError::CatalogMalformed {
            reason: e.to_string(),
        })
    }

    fn fetch_book(&self, book_id: &str) -> Result<Option<Book>, SourceError> {
        let resource = format!("{book_id}.json");
        let Some(body) = self.get_json_with_retry(&resource)? else {
            return Ok(None);
        };
        let mut book: Book =
            serde_json::from_str(&body).map_err(|e| SourceError::BookMalformed {
                id: book_id.to_string(),
                reason: e.to_string(),
            })?;
        book.id = book_id.to_string();
        Ok(Some(book))
    }
}
