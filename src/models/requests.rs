use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::UserProfile;

/// Raw stylist request body as sent by the storefront
///
/// Every field is optional at the wire level so that a missing field is
/// reported as a validation failure rather than a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct StylistRequestBody {
    #[validate(required)]
    #[serde(default)]
    pub lat: Option<f64>,
    #[validate(required)]
    #[serde(default)]
    pub lon: Option<f64>,
    #[validate(required)]
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

/// Validated stylist request
#[derive(Debug, Clone, PartialEq)]
pub struct StylistRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub profile: UserProfile,
}
