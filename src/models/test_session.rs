//! Test session models.
//!
//! A session groups the mini-tests of one category; items carry the raw
//! per-test payload (free-form JSON, shaped per test type).

use serde::{Deserialize, Serialize};

/// Screening categories offered by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestCategory {
    Cognitive,
    Speech,
    Motor,
    Gait,
    Facial,
}

/// Lifecycle of a test session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Created,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestSessionCreate {
    pub category: TestCategory,
}

/// A mini-test result to attach to a session.
#[derive(Debug, Clone, Serialize)]
pub struct TestItemCreate {
    pub item_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    /// Raw per-test payload, e.g. the story-recall record
    pub raw_data: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestItem {
    pub id: i64,
    pub session_id: i64,
    pub item_name: String,
    pub item_type: Option<String>,
    pub raw_data: Option<serde_json::Value>,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestSession {
    pub id: i64,
    pub user_id: i64,
    pub category: String,
    pub status: String,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,
    pub created_at: Option<String>,
    #[serde(default)]
    pub items_count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestSessionList {
    pub sessions: Vec<TestSession>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}
