// Stylist pipeline exports
pub mod imagery;
pub mod keywords;
pub mod pipeline;
pub mod reasoning;

pub use imagery::{resolve_image, PLACEHOLDER_IMAGE_URL};
pub use keywords::{bmi, body_fit, build_search_query, gender_keyword, season_keywords, BodyFit, Season};
pub use pipeline::{validate_request, PipelineStage, Stylist, StylistError};
pub use reasoning::{build_prompt, extract_json_object, fallback_recommendation, interpret_completion, recommend_outfit, truncate_prompt};
