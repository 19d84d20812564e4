//! User profile models.

use serde::{Deserialize, Serialize};

/// Authenticated user profile as returned by `/users/me` and login.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    /// ISO 8601 date (YYYY-MM-DD)
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub profile_image_path: Option<String>,
    #[serde(default)]
    pub is_verified: bool,

    // Risk scores (0-100)
    #[serde(default)]
    pub ad_risk_score: f64,
    #[serde(default)]
    pub pd_risk_score: f64,

    // Category scores (0-100)
    #[serde(default)]
    pub cognitive_score: f64,
    #[serde(default)]
    pub speech_score: f64,
    #[serde(default)]
    pub motor_score: f64,
    #[serde(default)]
    pub gait_score: f64,
    #[serde(default)]
    pub facial_score: f64,

    // Stage classification
    pub ad_stage: Option<String>,
    pub pd_stage: Option<String>,

    pub created_at: Option<String>,
}

/// Partial profile update for PATCH `/users/me`. Unset fields are left
/// untouched server-side and omitted from the request body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}
