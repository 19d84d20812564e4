// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types with a uniform failure shape.
//!
//! Every network-facing operation returns `Result<T, ApiError>`; no
//! transport or parse failure escapes as a panic. Screens render the
//! `Display` text inline.

/// Client error type covering transport, API, and local failures.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, TLS, timeout) or an unparseable body.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Non-2xx response with the server's `detail` message when present.
    #[error("{detail}")]
    Api { status: u16, detail: String },

    /// 401 after the refresh flow ran; the caller should retry or re-login.
    #[error("Authentication required")]
    Unauthorized,

    /// Local validation failure; no request was sent.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Token store read/write failure.
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal client error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Generic fallback used when a non-2xx body carries no `detail`.
    pub const GENERIC_API_ERROR: &'static str = "Request failed";

    /// Whether this error indicates the caller should retry after re-auth.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// HTTP status code, if this error came from an HTTP response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ApiError>;
