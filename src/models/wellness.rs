//! Daily wellness tracking models.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    VeryBad,
    Bad,
    Neutral,
    Good,
    VeryGood,
}

/// Daily wellness entry payload. Every field is optional; unset fields
/// are omitted from the JSON body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WellnessEntryCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_quality: Option<SleepQuality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_time_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gaming_hours: Option<f64>,
    /// 1-10
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    /// 1-10
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anxiety_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_activity_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_intake_glasses: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Defaults to today server-side (YYYY-MM-DD)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_date: Option<String>,
}

/// Partial update for an existing entry.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WellnessEntryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_quality: Option<SleepQuality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_time_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gaming_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anxiety_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_activity_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_intake_glasses: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WellnessEntry {
    pub id: i64,
    pub user_id: i64,
    pub sleep_hours: Option<f64>,
    pub sleep_quality: Option<String>,
    pub screen_time_hours: Option<f64>,
    pub gaming_hours: Option<f64>,
    pub stress_level: Option<i32>,
    pub mood: Option<String>,
    pub anxiety_level: Option<i32>,
    pub physical_activity_minutes: Option<i32>,
    pub exercise_type: Option<String>,
    pub water_intake_glasses: Option<i32>,
    pub notes: Option<String>,
    pub entry_date: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WellnessHistory {
    pub entries: Vec<WellnessEntry>,
    #[serde(default)]
    pub total: i64,
    /// Aggregates for charts, shape decided server-side
    #[serde(default)]
    pub daily_summary: Vec<serde_json::Value>,
    #[serde(default)]
    pub weekly_averages: Vec<serde_json::Value>,
    #[serde(default)]
    pub monthly_averages: Vec<serde_json::Value>,
}
