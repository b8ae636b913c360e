use crate::core::imagery::{resolve_image, PLACEHOLDER_IMAGE_URL};
use crate::core::reasoning::recommend_outfit;
use crate::models::{StylistRequest, StylistRequestBody, StylistResponse, WeatherInfo};
use crate::services::{PhotoSearchProvider, ReasoningProvider, WeatherError, WeatherProvider};
use actix_web::http::Method;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use validator::Validate;

/// Errors that reach the caller
///
/// Reasoning and photo failures never show up here; they are absorbed by
/// their stage's fallback.
#[derive(Debug, Error)]
pub enum StylistError {
    #[error("Method {0} not allowed: this endpoint cannot be opened directly in a browser")]
    MethodNotAllowed(Method),

    #[error("Missing required fields: {0}")]
    MissingFields(String),

    #[error("Weather lookup failed: {0}")]
    WeatherLookup(#[from] WeatherError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Stages of a single stylist run
///
/// Stages only move forward. `Failed` is reachable from `Validating` and
/// `WeatherLookup` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Validating,
    WeatherLookup,
    Reasoning,
    ImageResolution,
    Responding,
    Failed,
}

impl PipelineStage {
    pub fn can_fail(self) -> bool {
        matches!(self, PipelineStage::Validating | PipelineStage::WeatherLookup)
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::Validating => "validating",
            PipelineStage::WeatherLookup => "weather_lookup",
            PipelineStage::Reasoning => "reasoning",
            PipelineStage::ImageResolution => "image_resolution",
            PipelineStage::Responding => "responding",
            PipelineStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Check method and body before any external call is made
pub fn validate_request(method: &Method, body: &[u8]) -> Result<StylistRequest, StylistError> {
    if method != Method::POST {
        return Err(StylistError::MethodNotAllowed(method.clone()));
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(StylistError::MissingFields("request body is empty".to_string()));
    }

    let raw: StylistRequestBody = serde_json::from_slice(body)
        .map_err(|e| StylistError::MissingFields(format!("invalid JSON body ({})", e)))?;

    if let Err(errors) = raw.validate() {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        return Err(StylistError::MissingFields(fields.join(", ")));
    }

    match (raw.lat, raw.lon, raw.profile) {
        (Some(latitude), Some(longitude), Some(profile)) => Ok(StylistRequest {
            latitude,
            longitude,
            profile,
        }),
        _ => Err(StylistError::MissingFields("lat, lon, profile".to_string())),
    }
}

/// The stylist pipeline: weather, reasoning, then image resolution
///
/// Holds no per-request state; providers are injected so every stage can be
/// swapped out in tests.
pub struct Stylist {
    weather: Arc<dyn WeatherProvider>,
    reasoning: Arc<dyn ReasoningProvider>,
    photos: Arc<dyn PhotoSearchProvider>,
    placeholder_url: String,
}

impl Stylist {
    pub fn new(
        weather: Arc<dyn WeatherProvider>,
        reasoning: Arc<dyn ReasoningProvider>,
        photos: Arc<dyn PhotoSearchProvider>,
    ) -> Self {
        Self {
            weather,
            reasoning,
            photos,
            placeholder_url: PLACEHOLDER_IMAGE_URL.to_string(),
        }
    }

    pub fn with_placeholder(mut self, placeholder_url: impl Into<String>) -> Self {
        self.placeholder_url = placeholder_url.into();
        self
    }

    /// Validate a raw invocation and run the pipeline
    pub async fn handle(&self, method: &Method, body: &[u8]) -> Result<StylistResponse, StylistError> {
        let request = validate_request(method, body).map_err(|e| fail(PipelineStage::Validating, e))?;
        self.recommend(&request).await
    }

    /// Run the pipeline for an already validated request
    pub async fn recommend(&self, request: &StylistRequest) -> Result<StylistResponse, StylistError> {
        let profile = &request.profile;

        tracing::info!(
            lat = request.latitude,
            lon = request.longitude,
            username = ?profile.username,
            height = ?profile.height,
            weight = ?profile.weight,
            gender = ?profile.gender,
            styles = ?profile.style_preferences,
            "Stylist request received"
        );

        enter(PipelineStage::WeatherLookup);
        let weather = self
            .weather
            .current(request.latitude, request.longitude)
            .await
            .map_err(|e| fail(PipelineStage::WeatherLookup, e.into()))?;

        tracing::info!("Weather: {} {}°C", weather.condition, weather.temperature_celsius);

        enter(PipelineStage::Reasoning);
        let recommendation = recommend_outfit(self.reasoning.as_ref(), profile, &weather).await;

        enter(PipelineStage::ImageResolution);
        let image = resolve_image(
            self.photos.as_ref(),
            &recommendation.image_prompt,
            profile,
            &weather,
            &self.placeholder_url,
        )
        .await;

        enter(PipelineStage::Responding);
        tracing::info!(
            recommendation = ?recommendation.source,
            image = ?image.source,
            "Stylist recommendation ready"
        );

        Ok(StylistResponse {
            image: image.url,
            reasoning: recommendation.reasoning,
            info: WeatherInfo {
                temp: weather.temperature_celsius,
                weather: weather.condition,
            },
        })
    }
}

fn enter(stage: PipelineStage) {
    tracing::debug!(%stage, "Entering stage");
}

fn fail(stage: PipelineStage, error: StylistError) -> StylistError {
    debug_assert!(stage.can_fail());
    tracing::warn!(%stage, next = %PipelineStage::Failed, "Stylist pipeline failed: {}", error);
    error
}
