// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{UserProfile, WeatherSnapshot, Recommendation, RecommendationSource, ResolvedImage, ImageSource, DEFAULT_STYLE};
pub use requests::{StylistRequestBody, StylistRequest};
pub use responses::{StylistResponse, WeatherInfo, HealthResponse, ErrorResponse};
