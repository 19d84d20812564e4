// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The timed story-recall assessment flow.
//!
//! A flow walks the user through a fixed ordered sequence of phases
//! (instructions, listening, recording, completed), accumulating timing
//! measurements into an [`AssessmentRecord`]. The flow is UI-independent:
//! it runs as its own task, takes commands through an
//! [`AssessmentHandle`], and publishes phase/progress snapshots for a
//! visual layer to render.

pub mod flow;
pub mod media;
pub mod phase;
pub mod record;

pub use flow::{AssessmentConfig, AssessmentFlow, AssessmentHandle, FlowSnapshot};
pub use media::{MediaPort, SimulatedMedia};
pub use phase::Phase;
pub use record::AssessmentRecord;
