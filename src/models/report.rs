//! PDF report models.

use serde::{Deserialize, Serialize};

/// What a generated report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    Comprehensive,
    CognitiveSpeech,
    MotorGait,
    SingleCategory,
    Wellness,
    Progress,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub report_type: ReportType,
    /// Sessions to include; defaults to all completed when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_ids: Option<Vec<i64>>,
    /// Category filter for single-category reports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range_end: Option<String>,
    pub include_wellness: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Report {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub report_type: Option<String>,
    #[serde(default)]
    pub ad_risk_score: f64,
    #[serde(default)]
    pub pd_risk_score: f64,
    pub cognitive_score: Option<f64>,
    pub speech_score: Option<f64>,
    pub motor_score: Option<f64>,
    pub gait_score: Option<f64>,
    pub facial_score: Option<f64>,
    pub ad_stage: Option<String>,
    pub pd_stage: Option<String>,
    #[serde(default)]
    pub tests_count: i64,
    #[serde(default)]
    pub is_ready: bool,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportList {
    pub reports: Vec<Report>,
    pub total: i64,
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub page_size: i64,
}
