use serde::{Deserialize, Serialize};

/// Successful stylist response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylistResponse {
    pub image: String,
    pub reasoning: String,
    pub info: WeatherInfo,
}

/// Weather summary echoed back to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherInfo {
    pub temp: f64,
    pub weather: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub status_code: u16,
}
