// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile endpoints.

use reqwest::multipart::{Form, Part};
use reqwest::Method;

use crate::error::{ApiError, Result};
use crate::models::{ProfileUpdate, UserProfile};
use crate::services::ApiClient;

impl ApiClient {
    /// Get the authenticated user's profile.
    pub async fn current_user(&self) -> Result<UserProfile> {
        let req = self.authed_request(Method::GET, "/api/v1/users/me");
        self.send_json(req, true).await
    }

    /// Partially update the profile. Unset fields are left untouched.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile> {
        let req = self
            .authed_request(Method::PATCH, "/api/v1/users/me")
            .json(update);
        self.send_json(req, true).await
    }

    /// Upload a profile image as a single multipart `file` part.
    ///
    /// The backend accepts JPEG, PNG, and WebP up to 10 MB and responds
    /// with the updated profile.
    pub async fn upload_profile_image(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UserProfile> {
        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(content_type)
            .map_err(|e| ApiError::Validation(format!("invalid content type: {}", e)))?;
        let form = Form::new().part("file", part);

        let req = self
            .authed_request(Method::POST, "/api/v1/users/profile-image")
            .multipart(form);
        self.send_json(req, true).await
    }
}
