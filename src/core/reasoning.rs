use crate::models::{Recommendation, RecommendationSource, UserProfile, WeatherSnapshot};
use crate::services::{ChatPrompt, ReasoningProvider};
use serde_json::{Map, Value};

/// Maximum number of words kept in an image prompt
pub const MAX_PROMPT_WORDS: usize = 5;

const SYSTEM_PROMPT: &str =
    "You are a professional fashion stylist. Respond ONLY in English. Return responses as JSON only.";

/// Compose the chat prompt for a profile and the current weather
///
/// Absent profile fields are left out or replaced by neutral defaults.
pub fn build_prompt(profile: &UserProfile, weather: &WeatherSnapshot) -> ChatPrompt {
    let body_clause = match profile.measurements() {
        Some((height, weight)) => format!(" (height {}cm, weight {}kg)", height, weight),
        None => String::new(),
    };

    let mut profile_lines = vec![format!("- Gender: {}", profile.gender().unwrap_or("unisex"))];
    if let Some(height) = profile.height_cm() {
        profile_lines.push(format!("- Height: {} cm", height));
    }
    if let Some(weight) = profile.weight_kg() {
        profile_lines.push(format!("- Weight: {} kg", weight));
    }

    let styles = profile.styles();
    let styles = if styles.is_empty() {
        "casual, comfortable".to_string()
    } else {
        styles.join(", ")
    };
    profile_lines.push(format!("- Style Preferences: {}", styles));
    profile_lines.push(format!("- Bio: {}", profile.bio().unwrap_or("No specific preference")));

    let user = format!(
        concat!(
            "A user is asking: \"Recommend me a fashion style that considers my current location & weather, ",
            "fits my body{body}, and matches my preferred fashion style.\"\n",
            "\n",
            "User Profile:\n",
            "{profile}\n",
            "\n",
            "Current Location & Weather:\n",
            "- Weather: {condition}\n",
            "- Temperature: {temp}°C\n",
            "\n",
            "As a professional Korean fashion stylist, provide ONE consistent recommendation that:\n",
            "1. Perfectly matches their body type (height/weight)\n",
            "2. Suits their style preferences EXACTLY\n",
            "3. Is appropriate for current weather\n",
            "4. Follows Korean fashion trends\n",
            "5. Is the BEST outfit for them (not random, but the ideal choice)\n",
            "\n",
            "Return JSON (ALL TEXT IN ENGLISH):\n",
            "{{\n",
            "  \"reasoning\": \"2-3 English sentences explaining why THIS specific outfit is perfect for their body, style, and weather\",\n",
            "  \"image_prompt\": \"3-5 English keywords for the exact outfit - e.g. 'oversized black coat minimal' or 'casual blue denim jacket'\"\n",
            "}}\n",
            "\n",
            "Output ONLY JSON in ENGLISH. Be CONSISTENT - same profile should get similar recommendations.",
        ),
        body = body_clause,
        profile = profile_lines.join("\n"),
        condition = weather.condition,
        temp = weather.temperature_celsius,
    );

    ChatPrompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
    }
}

/// Find the first well-formed JSON object embedded in free text
///
/// Models often wrap their JSON in prose or code fences; every `{` is tried
/// as a starting point until one parses as an object.
pub fn extract_json_object(text: &str) -> Option<Map<String, Value>> {
    text.match_indices('{').find_map(|(start, _)| {
        let mut values = serde_json::Deserializer::from_str(&text[start..]).into_iter::<Value>();
        match values.next() {
            Some(Ok(Value::Object(map))) => Some(map),
            _ => None,
        }
    })
}

/// Keep at most the first five whitespace-separated words
pub fn truncate_prompt(prompt: &str) -> String {
    prompt
        .split_whitespace()
        .take(MAX_PROMPT_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
}

fn fallback_reasoning(profile: &UserProfile, weather: &WeatherSnapshot) -> String {
    let body_info = match profile.measurements() {
        Some((height, weight)) => format!(
            "Perfect for your height ({}cm) and weight ({}kg). ",
            height, weight
        ),
        None => String::new(),
    };

    format!(
        "{}We recommend a {} style outfit for today's weather ({}°C, {}). This look is tailored perfectly for you!",
        body_info,
        profile.primary_style(),
        weather.temperature_celsius,
        weather.condition
    )
}

fn fallback_image_prompt(profile: &UserProfile) -> String {
    format!("{} korean fashion", profile.primary_style())
}

/// Deterministic recommendation built from the profile and weather alone
pub fn fallback_recommendation(profile: &UserProfile, weather: &WeatherSnapshot) -> Recommendation {
    Recommendation {
        reasoning: fallback_reasoning(profile, weather),
        image_prompt: truncate_prompt(&fallback_image_prompt(profile)),
        source: RecommendationSource::Fallback,
    }
}

fn text_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Turn a raw completion into a recommendation
///
/// Missing or blank fields fall back one by one; a completion without any
/// JSON object falls back entirely.
pub fn interpret_completion(text: &str, profile: &UserProfile, weather: &WeatherSnapshot) -> Recommendation {
    let Some(parsed) = extract_json_object(text) else {
        tracing::warn!("LLM reply contained no JSON object, using fallback");
        return fallback_recommendation(profile, weather);
    };

    let reasoning = text_field(&parsed, "reasoning");
    let image_prompt = text_field(&parsed, "image_prompt");

    let source = if reasoning.is_some() || image_prompt.is_some() {
        RecommendationSource::Model
    } else {
        RecommendationSource::Fallback
    };

    Recommendation {
        reasoning: reasoning.unwrap_or_else(|| fallback_reasoning(profile, weather)),
        image_prompt: truncate_prompt(&image_prompt.unwrap_or_else(|| fallback_image_prompt(profile))),
        source,
    }
}

/// Reasoning stage: ask the model, degrade to the fallback on any failure
pub async fn recommend_outfit(
    provider: &dyn ReasoningProvider,
    profile: &UserProfile,
    weather: &WeatherSnapshot,
) -> Recommendation {
    let prompt = build_prompt(profile, weather);

    let recommendation = match provider.complete(&prompt).await {
        Ok(text) => interpret_completion(&text, profile, weather),
        Err(e) => {
            tracing::warn!("LLM call failed, using fallback: {}", e);
            fallback_recommendation(profile, weather)
        }
    };

    tracing::info!(
        source = ?recommendation.source,
        "Image prompt: {}",
        recommendation.image_prompt
    );

    recommendation
}
