use crate::models::{UserProfile, WeatherSnapshot};

/// Framing terms that bias results toward full-body, front-facing shots
pub const FRAMING_TERMS: &str = "front view frontal full length portrait full body";

/// Style terms appended to every search query
pub const STYLE_TERMS: &str = "fashion model street photography";

/// Body category inferred from BMI, used only to bias search keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFit {
    Slim,
    Regular,
    Relaxed,
}

impl BodyFit {
    /// Classify a BMI value
    ///
    /// * `< 18.5` → slim
    /// * `18.5 ..< 25` → regular
    /// * `>= 25` → relaxed
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BodyFit::Slim
        } else if bmi < 25.0 {
            BodyFit::Regular
        } else {
            BodyFit::Relaxed
        }
    }

    pub fn keywords(self) -> &'static str {
        match self {
            BodyFit::Slim => "slim fit",
            BodyFit::Regular => "regular fit",
            BodyFit::Relaxed => "relaxed fit",
        }
    }
}

/// Body mass index from height in cm and weight in kg
#[inline]
pub fn bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Body fit for a profile, or `None` unless both height and weight are known
pub fn body_fit(profile: &UserProfile) -> Option<BodyFit> {
    profile
        .measurements()
        .map(|(height_cm, weight_kg)| BodyFit::from_bmi(bmi(height_cm, weight_kg)))
}

/// Clothing season derived from the current temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    /// At or below freezing
    DeepWinter,
    /// (0, 10] °C
    Layered,
    /// (10, 20] °C
    LightJacket,
    /// (20, 28] °C
    LightCasual,
    /// Above 28 °C
    Hot,
}

impl Season {
    /// Map a temperature in °C to a season. Brackets are upper-inclusive.
    pub fn from_temperature(celsius: f64) -> Self {
        if celsius <= 0.0 {
            Season::DeepWinter
        } else if celsius <= 10.0 {
            Season::Layered
        } else if celsius <= 20.0 {
            Season::LightJacket
        } else if celsius <= 28.0 {
            Season::LightCasual
        } else {
            Season::Hot
        }
    }

    pub fn keywords(self) -> &'static str {
        match self {
            Season::DeepWinter => "winter cold weather heavy coat warm layered",
            Season::Layered => "winter fall jacket coat layered",
            Season::LightJacket => "spring fall light jacket",
            Season::LightCasual => "summer spring light casual",
            Season::Hot => "summer hot weather light breathable",
        }
    }
}

pub fn season_keywords(celsius: f64) -> &'static str {
    Season::from_temperature(celsius).keywords()
}

/// "man", "woman" or "person"
pub fn gender_keyword(profile: &UserProfile) -> &'static str {
    match profile.gender() {
        Some(g) if g.eq_ignore_ascii_case("male") => "man",
        Some(g) if g.eq_ignore_ascii_case("female") => "woman",
        _ => "person",
    }
}

/// Build the photo search query
///
/// Order: framing terms, gender, season, body fit (when known),
/// the outfit prompt, style terms.
pub fn build_search_query(image_prompt: &str, profile: &UserProfile, weather: &WeatherSnapshot) -> String {
    let mut parts = vec![
        FRAMING_TERMS,
        gender_keyword(profile),
        season_keywords(weather.temperature_celsius),
    ];

    if let Some(fit) = body_fit(profile) {
        parts.push(fit.keywords());
    }

    let prompt = image_prompt.trim();
    if !prompt.is_empty() {
        parts.push(prompt);
    }

    parts.push(STYLE_TERMS);
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather(temp: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_celsius: temp,
            condition: "Clear".to_string(),
        }
    }

    #[test]
    fn test_bmi_calculation() {
        let value = bmi(180.0, 81.0);
        assert!((value - 25.0).abs() < 1e-9, "Expected 25.0, got {}", value);
    }

    #[test]
    fn test_bmi_exact_boundaries() {
        assert_eq!(BodyFit::from_bmi(18.49), BodyFit::Slim);
        assert_eq!(BodyFit::from_bmi(18.5), BodyFit::Regular);
        assert_eq!(BodyFit::from_bmi(24.99), BodyFit::Regular);
        assert_eq!(BodyFit::from_bmi(25.0), BodyFit::Relaxed);
    }

    #[test]
    fn test_gender_keyword() {
        let mut profile = UserProfile::default();
        assert_eq!(gender_keyword(&profile), "person");

        profile.gender = Some("Female".to_string());
        assert_eq!(gender_keyword(&profile), "woman");

        profile.gender = Some("male".to_string());
        assert_eq!(gender_keyword(&profile), "man");

        profile.gender = Some("non-binary".to_string());
        assert_eq!(gender_keyword(&profile), "person");
    }

    #[test]
    fn test_query_order() {
        let profile = UserProfile {
            gender: Some("female".to_string()),
            height: Some(165.0),
            weight: Some(55.0),
            ..Default::default()
        };

        let query = build_search_query("beige trench coat", &profile, &weather(15.0));
        assert_eq!(
            query,
            "front view frontal full length portrait full body woman spring fall light jacket \
             regular fit beige trench coat fashion model street photography"
        );
    }

    #[test]
    fn test_query_without_body_fit_has_single_spaces() {
        let query = build_search_query("black puffer", &UserProfile::default(), &weather(-3.0));
        assert!(!query.contains("  "));
        assert!(!query.contains("fit"));
        assert!(query.contains("person winter cold weather heavy coat warm layered black puffer"));
    }
}
