//! User feedback models.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCategory {
    General,
    BugReport,
    FeatureRequest,
    UiUx,
    TestQuality,
    Performance,
    Other,
}

/// New feedback payload.
///
/// The message is validated locally before any request is sent; see
/// `ApiClient::submit_feedback`.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackCreate {
    pub category: FeedbackCategory,
    /// 1-5 stars
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_info: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackSubmitted {
    pub success: bool,
    pub message: String,
    pub feedback_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feedback {
    pub id: i64,
    pub user_id: i64,
    pub category: String,
    pub rating: Option<i32>,
    pub message: String,
    pub status: String,
    pub app_version: Option<String>,
    pub device_info: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackList {
    pub feedbacks: Vec<Feedback>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    #[serde(default)]
    pub total_pages: i64,
}
