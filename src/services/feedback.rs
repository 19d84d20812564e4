// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Feedback endpoints.

use reqwest::Method;

use crate::error::{ApiError, Result};
use crate::models::{Feedback, FeedbackCreate, FeedbackList, FeedbackSubmitted, MessageResponse};
use crate::services::ApiClient;

/// Minimum feedback message length after trimming, matching the backend.
const MIN_MESSAGE_LEN: usize = 5;

impl ApiClient {
    /// Submit feedback.
    ///
    /// The message is validated locally first; a blank or too-short
    /// message is rejected without any request being sent.
    pub async fn submit_feedback(&self, feedback: &FeedbackCreate) -> Result<FeedbackSubmitted> {
        let trimmed = feedback.message.trim();
        if trimmed.is_empty() {
            return Err(ApiError::Validation(
                "Feedback message cannot be empty".to_string(),
            ));
        }
        if trimmed.len() < MIN_MESSAGE_LEN {
            return Err(ApiError::Validation(format!(
                "Feedback message must be at least {} characters",
                MIN_MESSAGE_LEN
            )));
        }

        let req = self
            .authed_request(Method::POST, "/api/v1/feedback/")
            .json(feedback);
        self.send_json(req, true).await
    }

    /// Paginated list of the user's own feedback.
    pub async fn my_feedbacks(&self, page: u32, per_page: u32) -> Result<FeedbackList> {
        let req = self
            .authed_request(Method::GET, "/api/v1/feedback/my-feedbacks")
            .query(&[
                ("page", page.to_string()),
                ("per_page", per_page.to_string()),
            ]);
        self.send_json(req, true).await
    }

    pub async fn get_feedback(&self, feedback_id: i64) -> Result<Feedback> {
        let req = self.authed_request(Method::GET, &format!("/api/v1/feedback/{}", feedback_id));
        self.send_json(req, true).await
    }

    pub async fn delete_feedback(&self, feedback_id: i64) -> Result<MessageResponse> {
        let req =
            self.authed_request(Method::DELETE, &format!("/api/v1/feedback/{}", feedback_id));
        self.send_json(req, true).await
    }
}
