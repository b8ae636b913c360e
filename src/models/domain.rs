use serde::{Deserialize, Serialize};

/// Style used when the profile carries no preference
pub const DEFAULT_STYLE: &str = "casual";

/// Caller-supplied profile. Every field is optional and every read
/// must tolerate its absence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    /// Height in centimetres
    #[serde(default)]
    pub height: Option<f64>,
    /// Weight in kilograms
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub style_preferences: Option<Vec<String>>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl UserProfile {
    /// Height in cm, if present and positive
    pub fn height_cm(&self) -> Option<f64> {
        self.height.filter(|h| h.is_finite() && *h > 0.0)
    }

    /// Weight in kg, if present and positive
    pub fn weight_kg(&self) -> Option<f64> {
        self.weight.filter(|w| w.is_finite() && *w > 0.0)
    }

    /// Both measurements, only when both are usable
    pub fn measurements(&self) -> Option<(f64, f64)> {
        Some((self.height_cm()?, self.weight_kg()?))
    }

    /// Non-blank style preferences in caller order
    pub fn styles(&self) -> Vec<&str> {
        self.style_preferences
            .iter()
            .flatten()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// The caller's first style preference, or "casual" when that entry is
    /// missing or blank. Later entries are not promoted.
    pub fn primary_style(&self) -> &str {
        self.style_preferences
            .as_ref()
            .and_then(|styles| styles.first())
            .and_then(|style| non_blank(Some(style)))
            .unwrap_or(DEFAULT_STYLE)
    }

    pub fn gender(&self) -> Option<&str> {
        non_blank(self.gender.as_deref())
    }

    pub fn bio(&self) -> Option<&str> {
        non_blank(self.bio.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Current weather at the requested coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_celsius: f64,
    /// Short provider label such as "Clear" or "Rain"
    pub condition: String,
}

/// Where a recommendation came from. Logged, never returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationSource {
    Model,
    Fallback,
}

/// Output of the reasoning stage
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub reasoning: String,
    /// Short keyword phrase, at most five words
    pub image_prompt: String,
    pub source: RecommendationSource,
}

/// Where the final image came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Search,
    Placeholder,
}

/// Output of the image resolution stage
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedImage {
    pub url: String,
    pub source: ImageSource,
}
