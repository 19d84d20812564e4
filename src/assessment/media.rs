// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Playback/capture device abstraction.
//!
//! The flow drives an abstract media port so a real audio stack can be
//! swapped in without touching the phase logic. The shipped
//! [`SimulatedMedia`] port matches the product's current behavior, where
//! timers stand in for actual playback and capture.

/// External playback/recording capability driven by the assessment flow.
pub trait MediaPort: Send + 'static {
    /// Stimulus playback is starting.
    fn begin_playback(&mut self, stimulus: &str);

    /// Stimulus playback finished.
    fn end_playback(&mut self, stimulus: &str);

    /// Response capture is starting.
    fn begin_capture(&mut self, stimulus: &str);

    /// Response capture stopped; returns a handle to the captured audio.
    fn end_capture(&mut self, stimulus: &str) -> String;

    /// The flow was aborted; release whatever is active.
    fn cancel(&mut self, _stimulus: &str) {}
}

/// Timer-simulated media port.
#[derive(Debug, Default)]
pub struct SimulatedMedia;

impl MediaPort for SimulatedMedia {
    fn begin_playback(&mut self, stimulus: &str) {
        tracing::debug!(stimulus, "Playback started");
    }

    fn end_playback(&mut self, stimulus: &str) {
        tracing::debug!(stimulus, "Playback finished");
    }

    fn begin_capture(&mut self, stimulus: &str) {
        tracing::debug!(stimulus, "Capture started");
    }

    fn end_capture(&mut self, stimulus: &str) -> String {
        let path = format!("{}_{}.aac", stimulus, chrono::Utc::now().timestamp_millis());
        tracing::debug!(stimulus, path = %path, "Capture stopped");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_capture_handle_names_the_stimulus() {
        let mut media = SimulatedMedia;
        let path = media.end_capture("story_recall");
        assert!(path.starts_with("story_recall_"));
        assert!(path.ends_with(".aac"));
    }
}
