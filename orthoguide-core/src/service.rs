//! Client for the external rooting service
//!
//! The service exposes `GET /get_roots?genes=A,B&species=hsa` and answers
//! with a JSON array of row objects, or `{"detail": "..."}` on failure. This
//! module only forwards identifiers and decodes rows.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::ApiConfig;
use crate::error::{OrthoError, Result};
use crate::identifiers::IdentifierList;
use crate::record::ResultRecord;

/// Current crate version, sent in the User-Agent header
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Anything that can turn identifiers into rooting rows
#[async_trait]
pub trait RootsService: Send + Sync {
    async fn get_roots(&self, genes: &IdentifierList, species: &str) -> Result<Vec<ResultRecord>>;
}

/// HTTP implementation backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpRootsService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRootsService {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(format!("orthoguide/{}", CLIENT_VERSION))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(api: &ApiConfig) -> Result<Self> {
        Self::new(api.base_url.clone(), Duration::from_secs(api.timeout_secs))
    }
}

#[async_trait]
impl RootsService for HttpRootsService {
    #[instrument(skip(self, genes), fields(count = genes.len()))]
    async fn get_roots(&self, genes: &IdentifierList, species: &str) -> Result<Vec<ResultRecord>> {
        if genes.is_empty() {
            debug!("no identifiers, skipping request");
            return Ok(Vec::new());
        }

        let url = roots_url(&self.base_url, genes, species)?;
        debug!(%url, "requesting roots");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        decode_roots(status, &body)
    }
}

/// Build the `/get_roots` URL for a request
pub fn roots_url(base_url: &str, genes: &IdentifierList, species: &str) -> Result<Url> {
    let endpoint = format!("{}/get_roots", base_url.trim_end_matches('/'));
    let genes = genes.join(",");

    Url::parse_with_params(&endpoint, [("genes", genes.as_str()), ("species", species)])
        .map_err(|e| OrthoError::config(format!("invalid api.base_url '{}': {}", base_url, e)))
}

/// Decode a `/get_roots` response body
pub fn decode_roots(status: StatusCode, body: &str) -> Result<Vec<ResultRecord>> {
    if !status.is_success() {
        let detail = error_detail(body);
        warn!(status = status.as_u16(), %detail, "rooting service rejected request");
        return Err(OrthoError::service(status.as_u16(), detail));
    }

    let records: Vec<ResultRecord> =
        serde_json::from_str(body).map_err(|e| OrthoError::json("get_roots response", e))?;
    debug!(rows = records.len(), "decoded roots");
    Ok(records)
}

/// Pull the `detail` message out of an error body, falling back to the raw text
fn error_detail(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("detail") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => body.trim().to_string(),
        },
        _ => body.trim().to_string(),
    }
}
