// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - the HTTP client layer.
//!
//! One `ApiClient` carries every endpoint group; the resource wrappers
//! live in one file per backend router.

pub mod api;
pub mod feedback;
pub mod reports;
pub mod users;
pub mod wellness;

pub use api::ApiClient;
