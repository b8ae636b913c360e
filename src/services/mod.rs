// Service exports
pub mod llm;
pub mod photos;
pub mod weather;

pub use llm::{ChatCompletionsClient, ChatPrompt, CompletionOptions, ReasoningError, ReasoningProvider};
pub use photos::{PexelsClient, PhotoSearchError, PhotoSearchProvider};
pub use weather::{OpenWeatherClient, WeatherError, WeatherProvider};

use std::time::Duration;

/// Build the HTTP client shared by all providers
///
/// The timeout bounds every single external call.
pub fn build_http_client(timeout_secs: u64) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}
