// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared test fixtures: an in-process mock backend plus client wiring.
//!
//! The mock backend is a real HTTP server on a loopback port speaking
//! the same JSON the NeuroVerse API does, so the client's transport,
//! auth header, and refresh behavior are exercised end to end.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use neuroverse_client::config::Config;
use neuroverse_client::services::ApiClient;
use neuroverse_client::session::{Session, SharedSession};
use neuroverse_client::store::MemoryTokenStore;

/// Credentials the mock backend accepts.
#[allow(dead_code)]
pub const TEST_EMAIL: &str = "user@example.com";
#[allow(dead_code)]
pub const TEST_PASSWORD: &str = "Passw0rd1";
#[allow(dead_code)]
pub const TEST_OTP: &str = "123456";

/// Observable state of the mock backend.
pub struct BackendState {
    /// Access tokens currently accepted on authenticated routes.
    pub valid_tokens: Mutex<HashSet<String>>,
    /// Whether the refresh endpoint succeeds.
    pub refresh_ok: AtomicBool,
    pub refresh_calls: AtomicUsize,
    pub logout_calls: AtomicUsize,
    pub last_profile_update: Mutex<Option<Value>>,
    pub last_reset_query: Mutex<Option<HashMap<String, String>>>,
    /// (part name, file name, byte count) of the last upload.
    pub last_upload: Mutex<Option<(String, String, usize)>>,
    pub last_wellness_body: Mutex<Option<Value>>,
    pub last_sessions_query: Mutex<Option<HashMap<String, String>>>,
}

impl BackendState {
    fn new() -> Self {
        Self {
            valid_tokens: Mutex::new(HashSet::new()),
            refresh_ok: AtomicBool::new(true),
            refresh_calls: AtomicUsize::new(0),
            logout_calls: AtomicUsize::new(0),
            last_profile_update: Mutex::new(None),
            last_reset_query: Mutex::new(None),
            last_upload: Mutex::new(None),
            last_wellness_body: Mutex::new(None),
            last_sessions_query: Mutex::new(None),
        }
    }

    /// Invalidate an access token, simulating expiry server-side.
    #[allow(dead_code)]
    pub fn expire_token(&self, token: &str) {
        self.valid_tokens.lock().unwrap().remove(token);
    }
}

/// A running mock backend.
pub struct MockBackend {
    pub base_url: String,
    pub state: Arc<BackendState>,
}

/// Start the mock backend on a random loopback port.
#[allow(dead_code)]
pub async fn spawn_backend() -> MockBackend {
    let state = Arc::new(BackendState::new());
    let app = router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock backend");
    });

    MockBackend {
        base_url: format!("http://{}", addr),
        state,
    }
}

/// Wire a client with an isolated in-memory session.
#[allow(dead_code)]
pub fn test_client(base_url: &str) -> (ApiClient, SharedSession, Arc<MemoryTokenStore>) {
    let store = Arc::new(MemoryTokenStore::new());
    let session = Session::new(store.clone());
    let config = Config {
        base_url: base_url.to_string(),
        ..Config::default()
    };
    let api = ApiClient::new(&config, session.clone()).expect("client");
    (api, session, store)
}

fn router(state: Arc<BackendState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/verify-otp", post(verify_otp))
        .route("/api/v1/auth/refresh", post(refresh))
        .route("/api/v1/auth/logout", post(logout))
        .route("/api/v1/auth/reset-password", post(reset_password))
        .route("/api/v1/users/me", get(me).patch(update_me))
        .route("/api/v1/users/profile-image", post(upload_image))
        .route("/api/v1/wellness/data", post(create_wellness))
        .route("/api/v1/tests/", post(create_session).get(list_sessions))
        .with_state(state)
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(String::from)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"detail": "Could not validate credentials"})),
    )
        .into_response()
}

fn profile_json() -> Value {
    json!({
        "id": 1,
        "email": TEST_EMAIL,
        "first_name": "Pat",
        "last_name": "Doe",
        "phone": null,
        "date_of_birth": null,
        "gender": null,
        "profile_image_path": null,
        "is_verified": true,
        "ad_risk_score": 12.5,
        "pd_risk_score": 8.0,
        "cognitive_score": 61.0,
        "speech_score": 55.0,
        "motor_score": 70.0,
        "gait_score": 0.0,
        "facial_score": 0.0,
        "ad_stage": null,
        "pd_stage": null,
        "created_at": null
    })
}

fn login_json(access: &str, refresh: &str) -> Value {
    json!({
        "access_token": access,
        "refresh_token": refresh,
        "token_type": "bearer",
        "user": profile_json()
    })
}

async fn health() -> Json<Value> {
    Json(json!({"status": "healthy"}))
}

async fn register(Json(_body): Json<Value>) -> Response {
    (
        StatusCode::CREATED,
        Json(json!({"message": "Registration successful. OTP sent", "success": true})),
    )
        .into_response()
}

async fn login(State(state): State<Arc<BackendState>>, Json(body): Json<Value>) -> Response {
    if body["email"] == TEST_EMAIL && body["password"] == TEST_PASSWORD {
        state
            .valid_tokens
            .lock()
            .unwrap()
            .insert("access-1".to_string());
        Json(login_json("access-1", "refresh-1")).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Incorrect email or password"})),
        )
            .into_response()
    }
}

async fn verify_otp(State(state): State<Arc<BackendState>>, Json(body): Json<Value>) -> Response {
    if body["otp"] == TEST_OTP {
        state
            .valid_tokens
            .lock()
            .unwrap()
            .insert("access-1".to_string());
        Json(login_json("access-1", "refresh-1")).into_response()
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Invalid OTP"})),
        )
            .into_response()
    }
}

async fn refresh(State(state): State<Arc<BackendState>>, Json(body): Json<Value>) -> Response {
    state.refresh_calls.fetch_add(1, Ordering::SeqCst);

    if state.refresh_ok.load(Ordering::SeqCst) && body["refresh_token"] == "refresh-1" {
        state
            .valid_tokens
            .lock()
            .unwrap()
            .insert("access-2".to_string());
        Json(json!({
            "access_token": "access-2",
            "refresh_token": "refresh-2",
            "token_type": "bearer"
        }))
        .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Invalid refresh token"})),
        )
            .into_response()
    }
}

async fn logout(State(state): State<Arc<BackendState>>) -> Json<Value> {
    state.logout_calls.fetch_add(1, Ordering::SeqCst);
    Json(json!({"message": "Logged out successfully", "success": true}))
}

async fn reset_password(
    State(state): State<Arc<BackendState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    *state.last_reset_query.lock().unwrap() = Some(query);
    Json(json!({"message": "Password reset successful", "success": true}))
}

async fn me(State(state): State<Arc<BackendState>>, headers: HeaderMap) -> Response {
    match bearer(&headers) {
        Some(t) if state.valid_tokens.lock().unwrap().contains(&t) => {
            Json(profile_json()).into_response()
        }
        _ => unauthorized(),
    }
}

async fn update_me(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    match bearer(&headers) {
        Some(t) if state.valid_tokens.lock().unwrap().contains(&t) => {
            *state.last_profile_update.lock().unwrap() = Some(body);
            Json(profile_json()).into_response()
        }
        _ => unauthorized(),
    }
}

async fn upload_image(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    match bearer(&headers) {
        Some(t) if state.valid_tokens.lock().unwrap().contains(&t) => {}
        _ => return unauthorized(),
    }

    while let Some(field) = multipart.next_field().await.expect("multipart field") {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.expect("field bytes");
        *state.last_upload.lock().unwrap() = Some((name, file_name, bytes.len()));
    }

    Json(profile_json()).into_response()
}

async fn create_wellness(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    match bearer(&headers) {
        Some(t) if state.valid_tokens.lock().unwrap().contains(&t) => {}
        _ => return unauthorized(),
    }

    *state.last_wellness_body.lock().unwrap() = Some(body.clone());

    // Echo the entry back with ids attached, like the real backend.
    let mut entry = body;
    entry["id"] = json!(1);
    entry["user_id"] = json!(1);
    (StatusCode::CREATED, Json(entry)).into_response()
}

async fn create_session(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    match bearer(&headers) {
        Some(t) if state.valid_tokens.lock().unwrap().contains(&t) => {}
        _ => return unauthorized(),
    }

    (
        StatusCode::CREATED,
        Json(json!({
            "id": 7,
            "user_id": 1,
            "category": body["category"],
            "status": "created",
            "started_at": null,
            "completed_at": null,
            "created_at": null,
            "items_count": 0
        })),
    )
        .into_response()
}

async fn list_sessions(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    match bearer(&headers) {
        Some(t) if state.valid_tokens.lock().unwrap().contains(&t) => {}
        _ => return unauthorized(),
    }

    *state.last_sessions_query.lock().unwrap() = Some(query);
    Json(json!({"sessions": [], "total": 0, "page": 1, "page_size": 20})).into_response()
}
