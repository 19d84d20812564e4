// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The assessment result record.

use serde::Serialize;

use crate::models::TestItemCreate;

/// Timing and result data accumulated by one assessment run.
///
/// Created empty when the flow starts and mutated exactly twice: once
/// when playback finishes (listening duration) and once when recording
/// stops (recording duration, audio handle, completion flag). The audio
/// path stays `None` until `completed` flips to true, and `completed`
/// never flips back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentRecord {
    /// Which stimulus was presented
    pub stimulus_id: String,
    /// Observed stimulus playback time
    pub story_duration_ms: u64,
    /// Observed response recording time
    pub recording_duration_ms: u64,
    /// Handle to the captured response audio
    pub audio_path: Option<String>,
    /// True once recording has been explicitly stopped
    pub completed: bool,
}

impl AssessmentRecord {
    /// Fresh record for a stimulus, before any phase has run.
    pub(crate) fn new(stimulus_id: impl Into<String>) -> Self {
        Self {
            stimulus_id: stimulus_id.into(),
            story_duration_ms: 0,
            recording_duration_ms: 0,
            audio_path: None,
            completed: false,
        }
    }

    /// Package the record as a test item for upload to a session.
    pub fn into_test_item(self) -> TestItemCreate {
        TestItemCreate {
            item_name: self.stimulus_id.clone(),
            item_type: Some("story_recall".to_string()),
            raw_data: serde_json::json!({
                "story_id": self.stimulus_id,
                "audio_path": self.audio_path,
                "story_duration_ms": self.story_duration_ms,
                "recording_duration_ms": self.recording_duration_ms,
                "duration_seconds": self.recording_duration_ms as f64 / 1000.0,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_empty() {
        let record = AssessmentRecord::new("story_a");
        assert_eq!(record.story_duration_ms, 0);
        assert_eq!(record.recording_duration_ms, 0);
        assert_eq!(record.audio_path, None);
        assert!(!record.completed);
    }

    #[test]
    fn test_into_test_item_carries_timings() {
        let record = AssessmentRecord {
            stimulus_id: "story_a".to_string(),
            story_duration_ms: 30_000,
            recording_duration_ms: 10_000,
            audio_path: Some("story_a_1700000000000.aac".to_string()),
            completed: true,
        };

        let item = record.into_test_item();
        assert_eq!(item.item_name, "story_a");
        assert_eq!(item.raw_data["duration_seconds"], 10.0);
        assert_eq!(item.raw_data["story_duration_ms"], 30_000);
    }
}
