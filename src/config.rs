use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub http: HttpSettings,
    #[serde(default)]
    pub weather: WeatherSettings,
    #[serde(default)]
    pub llm: LlmSettings,
    #[serde(default)]
    pub photos: PhotoSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Outbound HTTP settings shared by every provider
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self { timeout_secs: default_timeout_secs() }
    }
}

fn default_timeout_secs() -> u64 { 10 }

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherSettings {
    #[serde(default = "default_weather_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            endpoint: default_weather_endpoint(),
            api_key: String::new(),
        }
    }
}

fn default_weather_endpoint() -> String { "https://api.openweathermap.org".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    #[serde(default = "default_llm_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_llm_model")]
    pub model: String,
    #[serde(default = "default_llm_temperature")]
    pub temperature: f32,
    #[serde(default = "default_llm_max_tokens")]
    pub max_tokens: u32,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            endpoint: default_llm_endpoint(),
            api_key: String::new(),
            model: default_llm_model(),
            temperature: default_llm_temperature(),
            max_tokens: default_llm_max_tokens(),
        }
    }
}

fn default_llm_endpoint() -> String { "https://api.groq.com/openai/v1".to_string() }
fn default_llm_model() -> String { "llama-3.3-70b-versatile".to_string() }
fn default_llm_temperature() -> f32 { 0.2 }
fn default_llm_max_tokens() -> u32 { 300 }

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoSettings {
    #[serde(default = "default_photos_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default = "default_placeholder_url")]
    pub placeholder_url: String,
}

impl Default for PhotoSettings {
    fn default() -> Self {
        Self {
            endpoint: default_photos_endpoint(),
            api_key: String::new(),
            per_page: default_per_page(),
            placeholder_url: default_placeholder_url(),
        }
    }
}

fn default_photos_endpoint() -> String { "https://api.pexels.com".to_string() }
fn default_per_page() -> u32 { 20 }
fn default_placeholder_url() -> String { crate::core::PLACEHOLDER_IMAGE_URL.to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with STYLIST__)
    /// 4. Provider keys (OPENWEATHER_API_KEY, GROQ_API_KEY, PEXELS_API_KEY)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Local overrides for development
            .add_source(File::with_name("config/local").required(false))
            // e.g., STYLIST__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("STYLIST")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        apply_provider_keys(settings)?.try_deserialize()
    }

}

/// Override API keys from the provider-conventional environment variables
fn apply_provider_keys(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let overrides = [
        ("weather.api_key", "OPENWEATHER_API_KEY"),
        ("llm.api_key", "GROQ_API_KEY"),
        ("photos.api_key", "PEXELS_API_KEY"),
    ];

    let mut builder = Config::builder().add_source(settings);
    for (key, var) in overrides {
        if let Ok(value) = env::var(var) {
            builder = builder.set_override(key, value)?;
        }
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.http.timeout_secs, 10);
        assert_eq!(settings.llm.model, "llama-3.3-70b-versatile");
        assert_eq!(settings.llm.temperature, 0.2);
        assert_eq!(settings.llm.max_tokens, 300);
        assert_eq!(settings.photos.per_page, 20);
        assert_eq!(settings.photos.placeholder_url, "https://via.placeholder.com/400x600?text=No+Image");
    }

    #[test]
    fn test_empty_config_deserializes_with_defaults() {
        let settings: Settings = Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.weather.endpoint, "https://api.openweathermap.org");
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.format, "json");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let settings: Settings = Config::builder()
            .set_override("llm.model", "mixtral-8x7b")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.llm.model, "mixtral-8x7b");
        assert_eq!(settings.llm.max_tokens, 300);
    }

    #[test]
    fn test_provider_keys_override_configured_keys() {
        std::env::set_var("GROQ_API_KEY", "groq-from-env");

        let base = Config::builder()
            .set_override("llm.api_key", "from-file")
            .unwrap()
            .set_override("photos.api_key", "pexels-from-file")
            .unwrap()
            .build()
            .unwrap();
        let settings: Settings = apply_provider_keys(base).unwrap().try_deserialize().unwrap();

        std::env::remove_var("GROQ_API_KEY");

        assert_eq!(settings.llm.api_key, "groq-from-env");
        if std::env::var("PEXELS_API_KEY").is_err() {
            assert_eq!(settings.photos.api_key, "pexels-from-file");
        }
    }
}
