//! AI Stylist - weather-aware outfit recommendations
//!
//! A single request runs four stages: validation, weather lookup, LLM
//! reasoning and photo search. Reasoning and photo search degrade to
//! deterministic fallbacks; weather failures abort the request.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{Stylist, StylistError, PipelineStage};
pub use models::{UserProfile, WeatherSnapshot, Recommendation, StylistRequest, StylistResponse};
