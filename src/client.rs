use anyhow::{anyhow, Result};
use log::debug;
use serde::Serialize;

use crate::types::SearchResponse;

/// Number of results requested per search. Fixed, not user-configurable.
pub const TOP_K: usize = 10;

#[derive(Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    top_k: usize,
}

/// Thin client for the remote `/search` endpoint. All failures surface as a
/// single error message; callers do not branch on status codes.
#[derive(Clone)]
pub struct SearchClient {
    base_url: String,
    client: reqwest::Client,
}

impl SearchClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn search(&self, query: &str, top_k: usize) -> Result<SearchResponse> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));
        debug!("POST {} query=\"{}\" top_k={}", url, query, top_k);

        let response = self
            .client
            .post(&url)
            .json(&SearchRequest { query, top_k })
            .send()
            .await
            .map_err(|e| anyhow!("Search request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(anyhow!("Search failed: {}", response.status()));
        }

        let data: SearchResponse = response
            .json()
            .await
            .map_err(|e| anyhow!("Failed to parse search response: {}", e))?;

        Ok(data)
    }
}
