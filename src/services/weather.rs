use crate::models::WeatherSnapshot;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when looking up the weather
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Weather API returned error: {0}")]
    ApiError(String),

    #[error("Invalid weather response: {0}")]
    InvalidResponse(String),
}

/// Source of current weather for a coordinate pair
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, latitude: f64, longitude: f64) -> Result<WeatherSnapshot, WeatherError>;
}

/// OpenWeather current-weather client (metric units)
pub struct OpenWeatherClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl OpenWeatherClient {
    pub fn new(base_url: String, api_key: String, client: Client) -> Self {
        Self {
            base_url,
            api_key,
            client,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, latitude: f64, longitude: f64) -> Result<WeatherSnapshot, WeatherError> {
        let url = format!("{}/data/2.5/weather", self.base_url.trim_end_matches('/'));

        tracing::debug!("Fetching weather for ({}, {})", latitude, longitude);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Weather lookup failed: {} - {}", status, body);
            return Err(WeatherError::ApiError(status.to_string()));
        }

        let payload: OpenWeatherResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::InvalidResponse(e.to_string()))?;

        payload.into_snapshot()
    }
}

#[derive(Debug, Deserialize)]
struct OpenWeatherResponse {
    main: Option<OpenWeatherMain>,
    #[serde(default)]
    weather: Vec<OpenWeatherCondition>,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherCondition {
    main: String,
}

impl OpenWeatherResponse {
    fn into_snapshot(self) -> Result<WeatherSnapshot, WeatherError> {
        let temperature_celsius = self
            .main
            .map(|m| m.temp)
            .ok_or_else(|| WeatherError::InvalidResponse("Missing main.temp".into()))?;

        let condition = self
            .weather
            .into_iter()
            .next()
            .map(|w| w.main)
            .ok_or_else(|| WeatherError::InvalidResponse("Missing weather conditions".into()))?;

        Ok(WeatherSnapshot {
            temperature_celsius,
            condition,
        })
    }
}
