use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when searching for photos
#[derive(Debug, Error)]
pub enum PhotoSearchError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Photo API returned error: {0}")]
    ApiError(String),
}

/// Photo search returning image URLs ordered by relevance
#[async_trait]
pub trait PhotoSearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<String>, PhotoSearchError>;
}

/// Pexels search client, portrait orientation only
pub struct PexelsClient {
    base_url: String,
    api_key: String,
    per_page: u32,
    client: Client,
}

impl PexelsClient {
    pub fn new(base_url: String, api_key: String, per_page: u32, client: Client) -> Self {
        Self {
            base_url,
            api_key,
            per_page,
            client,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PexelsResponse {
    #[serde(default)]
    photos: Vec<PexelsPhoto>,
}

#[derive(Debug, Deserialize)]
struct PexelsPhoto {
    src: PexelsSources,
}

#[derive(Debug, Deserialize)]
struct PexelsSources {
    #[serde(default)]
    large: Option<String>,
}

#[async_trait]
impl PhotoSearchProvider for PexelsClient {
    async fn search(&self, query: &str) -> Result<Vec<String>, PhotoSearchError> {
        let url = format!(
            "{}/v1/search?query={}&per_page={}&orientation=portrait",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(query),
            self.per_page
        );

        let response = self
            .client
            .get(&url)
            .header("Authorization", &self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PhotoSearchError::ApiError(response.status().to_string()));
        }

        let data: PexelsResponse = response.json().await?;

        Ok(data
            .photos
            .into_iter()
            .filter_map(|p| p.src.large)
            .collect())
    }
}
