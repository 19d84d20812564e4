// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The assessment flow runner.
//!
//! One task owns all mutable state and walks the phase sequence
//! `instructions → listening → recording → completed`. Commands arrive
//! over a channel; phase and progress are published through a watch for
//! the visual layer to observe. Exactly one periodic timer exists per
//! phase, and it is dropped before the next phase's timer starts.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval, sleep, Instant};

use crate::assessment::media::MediaPort;
use crate::assessment::phase::Phase;
use crate::assessment::record::AssessmentRecord;

/// Timing parameters for one assessment run.
#[derive(Debug, Clone)]
pub struct AssessmentConfig {
    /// Identifier of the presented stimulus
    pub stimulus_id: String,
    /// How long the stimulus plays
    pub stimulus_duration: Duration,
    /// Playback progress tick
    pub tick_interval: Duration,
    /// Pause between playback ending and capture starting
    pub handoff_delay: Duration,
    /// Recording cutoff
    pub max_recording: Duration,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            stimulus_id: "story_recall".to_string(),
            stimulus_duration: Duration::from_secs(30),
            tick_interval: Duration::from_millis(100),
            handoff_delay: Duration::from_millis(500),
            max_recording: Duration::from_secs(120),
        }
    }
}

impl AssessmentConfig {
    /// Create a config for the given stimulus with default timings.
    pub fn new(stimulus_id: impl Into<String>) -> Self {
        Self {
            stimulus_id: stimulus_id.into(),
            ..Self::default()
        }
    }

    /// Set the stimulus playback duration.
    #[must_use]
    pub fn with_stimulus_duration(mut self, duration: Duration) -> Self {
        self.stimulus_duration = duration;
        self
    }

    /// Set the playback progress tick.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Set the playback→capture hand-off pause.
    #[must_use]
    pub fn with_handoff_delay(mut self, delay: Duration) -> Self {
        self.handoff_delay = delay;
        self
    }

    /// Set the recording cutoff.
    #[must_use]
    pub fn with_max_recording(mut self, max: Duration) -> Self {
        self.max_recording = max;
        self
    }
}

/// Observable state of a running flow.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowSnapshot {
    pub phase: Phase,
    /// Playback progress in [0, 1]
    pub playback_progress: f64,
    /// Recording progress in [0, 1]
    pub recording_progress: f64,
    /// Whole seconds of recording elapsed
    pub elapsed_recording_secs: u64,
}

impl FlowSnapshot {
    fn initial() -> Self {
        Self {
            phase: Phase::Instructions,
            playback_progress: 0.0,
            recording_progress: 0.0,
            elapsed_recording_secs: 0,
        }
    }
}

/// Commands a caller can send into the flow.
enum Command {
    Start,
    StopRecording,
    Abort,
    Confirm(oneshot::Sender<Option<AssessmentRecord>>),
}

/// Entry point for spawning assessment flows.
pub struct AssessmentFlow;

impl AssessmentFlow {
    /// Spawn a flow task; the returned handle controls and observes it.
    pub fn spawn(config: AssessmentConfig, media: impl MediaPort) -> AssessmentHandle {
        let (command_tx, command_rx) = mpsc::channel(16);
        let (snapshot_tx, snapshot_rx) = watch::channel(FlowSnapshot::initial());

        let runner = Runner {
            record: AssessmentRecord::new(config.stimulus_id.clone()),
            config,
            media: Box::new(media),
            commands: command_rx,
            snapshot: snapshot_tx,
        };

        let task = tokio::spawn(runner.run());

        AssessmentHandle {
            commands: command_tx,
            snapshot: snapshot_rx,
            task,
        }
    }
}

/// Control/observation handle for a spawned flow.
pub struct AssessmentHandle {
    commands: mpsc::Sender<Command>,
    snapshot: watch::Receiver<FlowSnapshot>,
    task: JoinHandle<()>,
}

impl AssessmentHandle {
    /// Begin the flow (instructions → listening).
    pub async fn start(&self) {
        let _ = self.commands.send(Command::Start).await;
    }

    /// Stop recording early (recording → completed).
    pub async fn stop_recording(&self) {
        let _ = self.commands.send(Command::StopRecording).await;
    }

    /// Abort the flow, discarding all accumulated state.
    pub async fn abort(&self) {
        let _ = self.commands.send(Command::Abort).await;
    }

    /// Confirm completion and take the record.
    ///
    /// Returns `None` if the flow was aborted or has not completed.
    pub async fn confirm(&self) -> Option<AssessmentRecord> {
        let (tx, rx) = oneshot::channel();
        if self
            .commands
            .send(Command::Confirm(tx))
            .await
            .is_err()
        {
            return None;
        }
        rx.await.ok().flatten()
    }

    /// Current phase and progress.
    pub fn snapshot(&self) -> FlowSnapshot {
        self.snapshot.borrow().clone()
    }

    /// Watch phase/progress changes.
    pub fn subscribe(&self) -> watch::Receiver<FlowSnapshot> {
        self.snapshot.clone()
    }

    /// Whether the flow task has ended (confirmed or aborted).
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the flow task to end.
    pub async fn join(self) {
        let _ = self.task.await;
    }
}

/// The flow task's state. Owned entirely by its task; no other actor
/// touches the record or the timers.
struct Runner {
    config: AssessmentConfig,
    record: AssessmentRecord,
    media: Box<dyn MediaPort>,
    commands: mpsc::Receiver<Command>,
    snapshot: watch::Sender<FlowSnapshot>,
}

/// Why a phase loop ended.
enum PhaseExit {
    Advance,
    Aborted,
}

impl Runner {
    async fn run(mut self) {
        let stimulus = self.config.stimulus_id.clone();
        tracing::debug!(stimulus = %stimulus, "Assessment flow ready");

        // Instructions: wait for an explicit start.
        match self.wait_for_start().await {
            PhaseExit::Advance => {}
            PhaseExit::Aborted => return self.aborted(),
        }

        // Listening: tick playback progress until the stimulus is done.
        self.publish(|s| s.phase = Phase::Listening);
        self.media.begin_playback(&stimulus);
        let listening_start = Instant::now();

        match self.listen().await {
            PhaseExit::Advance => {}
            PhaseExit::Aborted => return self.aborted(),
        }

        self.record.story_duration_ms = listening_start.elapsed().as_millis() as u64;
        self.media.end_playback(&stimulus);
        tracing::debug!(
            stimulus = %stimulus,
            story_duration_ms = self.record.story_duration_ms,
            "Playback finished"
        );

        // Hand-off pause before capture starts.
        match self.handoff().await {
            PhaseExit::Advance => {}
            PhaseExit::Aborted => return self.aborted(),
        }

        // Recording: count seconds until the user stops or the cutoff hits.
        self.publish(|s| s.phase = Phase::Recording);
        self.media.begin_capture(&stimulus);
        let recording_start = Instant::now();

        match self.record_response().await {
            PhaseExit::Advance => {}
            PhaseExit::Aborted => return self.aborted(),
        }

        self.record.recording_duration_ms = recording_start.elapsed().as_millis() as u64;
        self.record.audio_path = Some(self.media.end_capture(&stimulus));
        self.record.completed = true;
        tracing::debug!(
            stimulus = %stimulus,
            recording_duration_ms = self.record.recording_duration_ms,
            "Recording finished"
        );

        // Completed: hold the record until the caller confirms or leaves.
        self.publish(|s| s.phase = Phase::Completed);
        loop {
            match self.commands.recv().await {
                Some(Command::Confirm(reply)) => {
                    let _ = reply.send(Some(self.record.clone()));
                    tracing::debug!(stimulus = %stimulus, "Record confirmed");
                    return;
                }
                Some(Command::Abort) | None => return self.aborted(),
                Some(Command::Start) | Some(Command::StopRecording) => {}
            }
        }
    }

    /// Instructions phase: no timer, just wait for the start action.
    async fn wait_for_start(&mut self) -> PhaseExit {
        loop {
            match self.commands.recv().await {
                Some(Command::Start) => return PhaseExit::Advance,
                Some(Command::Abort) | None => return PhaseExit::Aborted,
                Some(Command::Confirm(reply)) => {
                    let _ = reply.send(None);
                }
                Some(Command::StopRecording) => {}
            }
        }
    }

    /// Listening phase: one periodic timer advancing playback progress by
    /// `tick / total` per tick, clamped at 1.0.
    async fn listen(&mut self) -> PhaseExit {
        let tick_ms = self.config.tick_interval.as_millis().max(1) as u64;
        let total_ms = (self.config.stimulus_duration.as_millis() as u64).max(1);
        let total_ticks = (total_ms + tick_ms - 1) / tick_ms;

        let mut ticker = interval(Duration::from_millis(tick_ms));
        ticker.tick().await; // first tick completes immediately
        let mut ticks: u64 = 0;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    ticks += 1;
                    let progress = (ticks as f64 * tick_ms as f64 / total_ms as f64).min(1.0);
                    self.publish(|s| s.playback_progress = progress);
                    if ticks >= total_ticks {
                        return PhaseExit::Advance;
                    }
                }
                cmd = self.commands.recv() => match cmd {
                    Some(Command::Abort) | None => return PhaseExit::Aborted,
                    Some(Command::Confirm(reply)) => {
                        let _ = reply.send(None);
                    }
                    Some(Command::Start) | Some(Command::StopRecording) => {}
                }
            }
        }
    }

    /// Pause between playback and capture; abort is still honored.
    async fn handoff(&mut self) -> PhaseExit {
        let pause = sleep(self.config.handoff_delay);
        tokio::pin!(pause);

        loop {
            tokio::select! {
                _ = &mut pause => return PhaseExit::Advance,
                cmd = self.commands.recv() => match cmd {
                    Some(Command::Abort) | None => return PhaseExit::Aborted,
                    Some(Command::Confirm(reply)) => {
                        let _ = reply.send(None);
                    }
                    Some(Command::Start) | Some(Command::StopRecording) => {}
                }
            }
        }
    }

    /// Recording phase: a once-per-second timer up to the cutoff; the
    /// user's stop action ends the phase early.
    async fn record_response(&mut self) -> PhaseExit {
        let max_secs = self.config.max_recording.as_secs().max(1);

        let mut ticker = interval(Duration::from_secs(1));
        ticker.tick().await;
        let mut elapsed_secs: u64 = 0;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    elapsed_secs += 1;
                    let progress = (elapsed_secs as f64 / max_secs as f64).min(1.0);
                    self.publish(|s| {
                        s.recording_progress = progress;
                        s.elapsed_recording_secs = elapsed_secs;
                    });
                    if elapsed_secs >= max_secs {
                        return PhaseExit::Advance;
                    }
                }
                cmd = self.commands.recv() => match cmd {
                    Some(Command::StopRecording) => return PhaseExit::Advance,
                    Some(Command::Abort) | None => return PhaseExit::Aborted,
                    Some(Command::Confirm(reply)) => {
                        let _ = reply.send(None);
                    }
                    Some(Command::Start) => {}
                }
            }
        }
    }

    /// Abort: release the media port and drop all accumulated state.
    fn aborted(mut self) {
        self.media.cancel(&self.config.stimulus_id);
        tracing::debug!(stimulus = %self.config.stimulus_id, "Assessment flow aborted");
    }

    fn publish(&self, update: impl FnOnce(&mut FlowSnapshot)) {
        self.snapshot.send_modify(update);
    }
}
