// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! NeuroVerse API client.
//!
//! Handles:
//! - Uniform request/response normalization (every failure becomes an
//!   `ApiError`, never a panic)
//! - Bearer-token auth on authenticated calls
//! - One token refresh on 401, serialized so concurrent failures share a
//!   single refresh attempt
//! - The auth endpoint group (register, OTP, login, logout, password reset)

use reqwest::Method;

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    LoginRequest, LoginResponse, MessageResponse, RefreshRequest, RegisterRequest,
    ResendOtpRequest, TokenPair, VerifyOtpRequest,
};
use crate::session::SharedSession;
use crate::store::StoredTokens;

/// HTTP client for the NeuroVerse backend.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SharedSession,
}

impl ApiClient {
    /// Create a client for the configured backend, sharing the given session.
    pub fn new(config: &Config, session: SharedSession) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            session,
        })
    }

    /// The session this client authenticates with.
    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    // ─── Request plumbing ────────────────────────────────────────────────────

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build an unauthenticated request.
    pub(crate) fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.http.request(method, self.url(path))
    }

    /// Build a request carrying the bearer token when one is held.
    pub(crate) fn authed_request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let req = self.request(method, path);
        match self.session.access_token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Send a request and parse the 2xx JSON body.
    ///
    /// `authed` selects the 401-refresh path; pass `false` for calls that
    /// must not trigger a refresh (the auth endpoints themselves).
    pub(crate) async fn send_json<T: for<'de> serde::Deserialize<'de>>(
        &self,
        req: reqwest::RequestBuilder,
        authed: bool,
    ) -> Result<T> {
        // Snapshot the token generation before sending so the refresh
        // flow can tell whether another caller already swapped the pair.
        let sent_at = authed.then(|| self.session.generation());

        let response = req
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        if response.status().is_success() {
            return response
                .json()
                .await
                .map_err(|e| ApiError::Connection(format!("invalid response body: {}", e)));
        }

        Err(self.failure(response, sent_at).await)
    }

    /// Send a request and return the raw 2xx body (PDF downloads).
    pub(crate) async fn send_bytes(
        &self,
        req: reqwest::RequestBuilder,
        authed: bool,
    ) -> Result<Vec<u8>> {
        let sent_at = authed.then(|| self.session.generation());

        let response = req
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        if response.status().is_success() {
            return response
                .bytes()
                .await
                .map(|b| b.to_vec())
                .map_err(|e| ApiError::Connection(e.to_string()));
        }

        Err(self.failure(response, sent_at).await)
    }

    /// Turn a non-2xx response into an `ApiError`, running the refresh
    /// flow first when an authenticated call got a 401.
    async fn failure(&self, response: reqwest::Response, sent_at: Option<u64>) -> ApiError {
        let status = response.status().as_u16();
        let detail = error_detail(response).await;

        if status == 401 {
            if let Some(observed) = sent_at {
                // One refresh attempt; the original call is still reported
                // as failed and the caller retries with the fresh tokens.
                self.refresh_session(observed).await;
                return ApiError::Unauthorized;
            }
        }

        ApiError::Api { status, detail }
    }

    // ─── Token refresh ───────────────────────────────────────────────────────

    /// Exchange the stored refresh token for a new pair.
    ///
    /// `observed` is the token generation the failed request was sent
    /// with. Refreshes are serialized behind the session's refresh gate;
    /// a caller whose generation is already stale when it gets the lock
    /// knows another refresh (or a logout) happened and does nothing. A
    /// failed exchange clears the session entirely.
    async fn refresh_session(&self, observed: u64) {
        let _guard = self.session.refresh_gate().lock().await;

        if self.session.generation() != observed {
            // Another caller refreshed (or cleared) while we waited.
            return;
        }

        let Some(refresh_token) = self.session.refresh_token() else {
            return;
        };

        match self.exchange_refresh_token(refresh_token).await {
            Ok(pair) => {
                let tokens = StoredTokens {
                    access_token: pair.access_token,
                    refresh_token: pair.refresh_token,
                };
                match self.session.install(tokens).await {
                    Ok(()) => tracing::info!("Session tokens refreshed"),
                    Err(e) => tracing::warn!(error = %e, "Failed to persist refreshed tokens"),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Token refresh failed, clearing session");
                if let Err(e) = self.session.clear().await {
                    tracing::warn!(error = %e, "Failed to clear session after refresh failure");
                }
            }
        }
    }

    /// POST the refresh token for a new pair.
    ///
    /// Deliberately bypasses `send_json` so the refresh flow cannot
    /// re-enter itself on a 401.
    async fn exchange_refresh_token(&self, refresh_token: String) -> Result<TokenPair> {
        let response = self
            .request(Method::POST, "/api/v1/auth/refresh")
            .json(&RefreshRequest { refresh_token })
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let detail = error_detail(response).await;
            return Err(ApiError::Api { status, detail });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Connection(format!("invalid response body: {}", e)))
    }

    // ─── Auth endpoints ──────────────────────────────────────────────────────

    /// Register a new account; the backend mails an OTP for verification.
    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse> {
        let req = self
            .request(Method::POST, "/api/v1/auth/register")
            .json(request);
        self.send_json(req, false).await
    }

    /// Verify the emailed OTP; a success activates the account and logs in.
    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<LoginResponse> {
        let body = VerifyOtpRequest {
            email: email.to_string(),
            otp: otp.to_string(),
        };
        let req = self
            .request(Method::POST, "/api/v1/auth/verify-otp")
            .json(&body);
        let response: LoginResponse = self.send_json(req, false).await?;

        self.install_tokens(&response).await?;
        Ok(response)
    }

    /// Request a fresh OTP for a pending registration.
    pub async fn resend_otp(&self, email: &str) -> Result<MessageResponse> {
        let body = ResendOtpRequest {
            email: email.to_string(),
        };
        let req = self
            .request(Method::POST, "/api/v1/auth/resend-otp")
            .json(&body);
        self.send_json(req, false).await
    }

    /// Log in with email and password; persists the returned token pair.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let req = self.request(Method::POST, "/api/v1/auth/login").json(&body);
        let response: LoginResponse = self.send_json(req, false).await?;

        self.install_tokens(&response).await?;
        tracing::info!(user_id = response.user.id, "Logged in");
        Ok(response)
    }

    /// Request a password-reset OTP.
    pub async fn forgot_password(&self, email: &str) -> Result<MessageResponse> {
        let body = crate::models::ForgotPasswordRequest {
            email: email.to_string(),
        };
        let req = self
            .request(Method::POST, "/api/v1/auth/forgot-password")
            .json(&body);
        self.send_json(req, false).await
    }

    /// Reset the password with the emailed OTP.
    ///
    /// The backend takes these as query parameters, not a JSON body.
    pub async fn reset_password(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> Result<MessageResponse> {
        let req = self
            .request(Method::POST, "/api/v1/auth/reset-password")
            .query(&[
                ("email", email),
                ("otp", otp),
                ("new_password", new_password),
            ]);
        self.send_json(req, false).await
    }

    /// Log out: notify the backend best-effort and drop the local session.
    ///
    /// The network call's failure is ignored; the local session is cleared
    /// unconditionally and logout itself never fails.
    pub async fn logout(&self) {
        let req = self.authed_request(Method::POST, "/api/v1/auth/logout");
        if let Err(e) = self.send_json::<MessageResponse>(req, false).await {
            tracing::debug!(error = %e, "Logout request failed (ignored)");
        }

        if let Err(e) = self.session.clear().await {
            tracing::warn!(error = %e, "Failed to clear persisted session");
        }
        tracing::info!("Logged out");
    }

    /// Backend liveness probe.
    pub async fn health_check(&self) -> Result<serde_json::Value> {
        let req = self.request(Method::GET, "/health");
        self.send_json(req, false).await
    }

    /// Store both tokens from a login/verify response as a pair.
    async fn install_tokens(&self, response: &LoginResponse) -> Result<()> {
        self.session
            .install(StoredTokens {
                access_token: response.access_token.clone(),
                refresh_token: response.refresh_token.clone(),
            })
            .await
    }
}

/// Pull the server's `detail` message out of an error body, falling back
/// to a generic message when the body is empty or unparseable.
async fn error_detail(response: reqwest::Response) -> String {
    let body = response.text().await.unwrap_or_default();

    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| {
            v.get("detail")
                .and_then(|d| d.as_str())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| ApiError::GENERIC_API_ERROR.to_string())
}
