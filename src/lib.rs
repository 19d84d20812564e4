// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! NeuroVerse client core: session management and assessment flows.
//!
//! This crate provides the non-visual core of the NeuroVerse app — the
//! authenticated HTTP client for the backend API and the timed
//! story-recall assessment state machine. Screens own rendering and
//! navigation; everything stateful lives here.

pub mod assessment;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod store;

use std::sync::Arc;

use config::Config;
use services::ApiClient;
use session::{Session, SharedSession};
use store::FileTokenStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Shared application core wired once at startup.
pub struct AppCore {
    pub config: Config,
    pub session: SharedSession,
    pub api: ApiClient,
}

impl AppCore {
    /// Wire the token store, session, and API client from a config,
    /// restoring any persisted session.
    pub async fn init(config: Config) -> error::Result<Self> {
        let store = Arc::new(FileTokenStore::new(config.token_store_path.clone()));
        let session = Session::new(store);
        session.init().await?;

        let api = ApiClient::new(&config, session.clone())?;
        tracing::info!(
            base_url = %config.base_url,
            logged_in = session.is_logged_in(),
            "Client core initialized"
        );

        Ok(Self {
            config,
            session,
            api,
        })
    }
}

/// Initialize structured logging for the host app.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("neuroverse_client=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
