use reqwest::Client;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::models::OpportunityRecord;
use crate::services::cache::{CacheKey, CatalogCache, Snapshot};

/// Keys under which an upstream object response may carry its records
const LIST_FIELDS: &[&str] = &["internships", "opportunities", "documents"];

/// Errors that can occur when loading the opportunity catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Failed to read catalog snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("No catalog source configured")]
    NotConfigured,
}

/// Where catalog snapshots come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// `GET` this URL
    Remote(String),
    /// Read this JSON file
    File(PathBuf),
    /// Nothing configured
    None,
}

impl CatalogSource {
    /// A non-blank URL wins over a snapshot path
    pub fn from_settings(source_url: Option<&str>, snapshot_path: Option<&str>) -> Self {
        let url = source_url.map(str::trim).filter(|u| !u.is_empty());
        let path = snapshot_path.map(str::trim).filter(|p| !p.is_empty());
        match (url, path) {
            (Some(url), _) => CatalogSource::Remote(url.to_string()),
            (None, Some(path)) => CatalogSource::File(PathBuf::from(path)),
            (None, None) => CatalogSource::None,
        }
    }

    fn cache_key(&self) -> Option<String> {
        match self {
            CatalogSource::Remote(url) => Some(CacheKey::remote(url)),
            CatalogSource::File(path) => Some(CacheKey::file(&path.to_string_lossy())),
            CatalogSource::None => None,
        }
    }
}

/// Opportunity catalog client
///
/// Loads read-only snapshots of the opportunity catalog from an upstream
/// HTTP endpoint or a local JSON file, caching each snapshot for the
/// configured TTL.
#[derive(Clone)]
pub struct CatalogClient {
    source: CatalogSource,
    client: Client,
    cache: CatalogCache,
}

impl CatalogClient {
    /// Create a new catalog client
    pub fn new(
        source: CatalogSource,
        timeout_secs: u64,
        cache_ttl_secs: u64,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            source,
            client,
            cache: CatalogCache::new(16, cache_ttl_secs),
        })
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Current catalog snapshot, from cache when fresh.
    ///
    /// Concurrent callers that miss the cache share one upstream load and
    /// one error.
    pub async fn snapshot(&self) -> Result<Snapshot, Arc<CatalogError>> {
        let key = self
            .source
            .cache_key()
            .ok_or_else(|| Arc::new(CatalogError::NotConfigured))?;

        self.cache.get_or_load(&key, self.load()).await
    }

    async fn load(&self) -> Result<Snapshot, CatalogError> {
        let records = match &self.source {
            CatalogSource::Remote(url) => self.fetch_remote(url).await?,
            CatalogSource::File(path) => read_snapshot_file(path).await?,
            CatalogSource::None => return Err(CatalogError::NotConfigured),
        };

        tracing::info!("Loaded catalog snapshot with {} opportunities", records.len());
        Ok(Arc::new(records))
    }

    /// Current snapshot, or an empty one when it cannot be loaded
    pub async fn snapshot_or_empty(&self) -> Snapshot {
        match self.snapshot().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("Catalog unavailable, continuing with empty catalog: {}", e);
                Arc::new(Vec::new())
            }
        }
    }

    async fn fetch_remote(&self, url: &str) -> Result<Vec<OpportunityRecord>, CatalogError> {
        tracing::debug!("Fetching catalog from: {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::ApiError(format!(
                "Failed to fetch catalog: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;
        parse_catalog(json)
    }
}

async fn read_snapshot_file(path: &Path) -> Result<Vec<OpportunityRecord>, CatalogError> {
    tracing::debug!("Reading catalog snapshot from: {}", path.display());

    let bytes = tokio::fs::read(path).await?;
    let json: Value = serde_json::from_slice(&bytes)
        .map_err(|e| CatalogError::InvalidResponse(format!("Snapshot is not JSON: {}", e)))?;
    parse_catalog(json)
}

/// Decode a catalog body: a bare array of records, or an object carrying one
/// under `internships`, `opportunities` or `documents`.
///
/// Records that do not deserialize are skipped.
pub fn parse_catalog(json: Value) -> Result<Vec<OpportunityRecord>, CatalogError> {
    let items = match json {
        Value::Array(items) => items,
        Value::Object(mut map) => LIST_FIELDS
            .iter()
            .find_map(|field| match map.remove(*field) {
                Some(Value::Array(items)) => Some(items),
                _ => None,
            })
            .ok_or_else(|| CatalogError::InvalidResponse("Missing opportunities array".into()))?,
        other => {
            return Err(CatalogError::InvalidResponse(format!(
                "Expected array or object, got {}",
                other
            )))
        }
    };

    let records = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<OpportunityRecord>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Skipping malformed opportunity record: {}", e);
                None
            }
        })
        .collect();

    Ok(records)
}
