//! Assessment flow phases.

use serde::Serialize;

/// One discrete step of the assessment flow.
///
/// Phases are strictly ordered; a flow only ever moves forward, and the
/// only way out of the middle of the sequence is a full abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for the user to start
    Instructions,
    /// Stimulus playback in progress
    Listening,
    /// Response capture in progress
    Recording,
    /// Record finalized, waiting for confirmation
    Completed,
}

impl Phase {
    /// Whether the flow has produced its record.
    pub fn is_terminal(self) -> bool {
        self == Phase::Completed
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Instructions => "instructions",
            Phase::Listening => "listening",
            Phase::Recording => "recording",
            Phase::Completed => "completed",
        };
        f.write_str(name)
    }
}
