// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tests for request shaping on the resource endpoints.

use neuroverse_client::error::ApiError;
use neuroverse_client::models::{
    FeedbackCategory, FeedbackCreate, Mood, ProfileUpdate, SessionStatus, TestCategory,
    WellnessEntryCreate,
};

mod common;
use common::{spawn_backend, test_client, TEST_EMAIL, TEST_PASSWORD};

#[tokio::test]
async fn test_profile_update_omits_unset_fields() {
    let backend = spawn_backend().await;
    let (api, _session, _store) = test_client(&backend.base_url);
    api.login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();

    let update = ProfileUpdate {
        first_name: Some("Ada".to_string()),
        gender: Some("female".to_string()),
        ..Default::default()
    };
    api.update_profile(&update).await.unwrap();

    let body = backend
        .state
        .last_profile_update
        .lock()
        .unwrap()
        .clone()
        .expect("update body");
    assert_eq!(
        body,
        serde_json::json!({"first_name": "Ada", "gender": "female"})
    );
}

#[tokio::test]
async fn test_reset_password_uses_query_parameters() {
    let backend = spawn_backend().await;
    let (api, _session, _store) = test_client(&backend.base_url);

    api.reset_password(TEST_EMAIL, "654321", "N3wPassword")
        .await
        .unwrap();

    let query = backend
        .state
        .last_reset_query
        .lock()
        .unwrap()
        .clone()
        .expect("reset query");
    assert_eq!(query.get("email").map(String::as_str), Some(TEST_EMAIL));
    assert_eq!(query.get("otp").map(String::as_str), Some("654321"));
    assert_eq!(
        query.get("new_password").map(String::as_str),
        Some("N3wPassword")
    );
}

#[tokio::test]
async fn test_profile_image_upload_is_single_file_part() {
    let backend = spawn_backend().await;
    let (api, _session, _store) = test_client(&backend.base_url);
    api.login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();

    let bytes = vec![0xFFu8; 128];
    let profile = api
        .upload_profile_image("avatar.jpg", "image/jpeg", bytes)
        .await
        .unwrap();
    assert_eq!(profile.id, 1);

    let (part, file_name, len) = backend
        .state
        .last_upload
        .lock()
        .unwrap()
        .clone()
        .expect("upload");
    assert_eq!(part, "file");
    assert_eq!(file_name, "avatar.jpg");
    assert_eq!(len, 128);
}

#[tokio::test]
async fn test_wellness_entry_omits_unset_fields() {
    let backend = spawn_backend().await;
    let (api, _session, _store) = test_client(&backend.base_url);
    api.login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();

    let entry = WellnessEntryCreate {
        sleep_hours: Some(7.5),
        mood: Some(Mood::Good),
        stress_level: Some(3),
        ..Default::default()
    };
    let created = api.create_wellness_entry(&entry).await.unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.sleep_hours, Some(7.5));

    let body = backend
        .state
        .last_wellness_body
        .lock()
        .unwrap()
        .clone()
        .expect("wellness body");
    assert_eq!(
        body,
        serde_json::json!({"sleep_hours": 7.5, "mood": "good", "stress_level": 3})
    );
}

#[tokio::test]
async fn test_list_sessions_sends_only_present_filters() {
    let backend = spawn_backend().await;
    let (api, _session, _store) = test_client(&backend.base_url);
    api.login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();

    api.list_test_sessions(Some(TestCategory::Speech), None, 20, 0)
        .await
        .unwrap();

    let query = backend
        .state
        .last_sessions_query
        .lock()
        .unwrap()
        .clone()
        .expect("sessions query");
    assert_eq!(query.get("category").map(String::as_str), Some("speech"));
    assert_eq!(query.get("limit").map(String::as_str), Some("20"));
    assert_eq!(query.get("offset").map(String::as_str), Some("0"));
    assert!(!query.contains_key("status"));

    // Both filters present when supplied.
    api.list_test_sessions(None, Some(SessionStatus::InProgress), 10, 5)
        .await
        .unwrap();
    let query = backend
        .state
        .last_sessions_query
        .lock()
        .unwrap()
        .clone()
        .unwrap();
    assert_eq!(
        query.get("status").map(String::as_str),
        Some("in_progress")
    );
    assert!(!query.contains_key("category"));
}

#[tokio::test]
async fn test_create_session_round_trip() {
    let backend = spawn_backend().await;
    let (api, _session, _store) = test_client(&backend.base_url);
    api.login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();

    let session = api.create_test_session(TestCategory::Speech).await.unwrap();
    assert_eq!(session.id, 7);
    assert_eq!(session.category, "speech");
    assert_eq!(session.status, "created");
}

#[tokio::test]
async fn test_blank_feedback_rejected_before_any_request() {
    let backend = spawn_backend().await;
    let (api, _session, _store) = test_client(&backend.base_url);
    api.login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();

    let feedback = FeedbackCreate {
        category: FeedbackCategory::General,
        rating: None,
        message: "   ".to_string(),
        app_version: None,
        device_info: None,
    };

    let err = api.submit_feedback(&feedback).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));

    // A too-short message is rejected the same way.
    let short = FeedbackCreate {
        message: "hey".to_string(),
        ..feedback
    };
    let err = api.submit_feedback(&short).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}

#[tokio::test]
async fn test_unauthenticated_resource_call_fails() {
    let backend = spawn_backend().await;
    let (api, session, _store) = test_client(&backend.base_url);

    // No login; the backend rejects and there is no refresh token to use.
    let err = api.current_user().await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
    assert!(!session.is_logged_in());
}
