// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Report endpoints.

use reqwest::Method;

use crate::error::Result;
use crate::models::{MessageResponse, Report, ReportCreate, ReportList};
use crate::services::ApiClient;

impl ApiClient {
    /// List the user's reports, most recent first.
    pub async fn list_reports(&self, limit: u32, offset: u32) -> Result<ReportList> {
        let req = self
            .authed_request(Method::GET, "/api/v1/reports/")
            .query(&[("limit", limit.to_string()), ("offset", offset.to_string())]);
        self.send_json(req, true).await
    }

    /// Generate a new report from completed sessions.
    pub async fn create_report(&self, request: &ReportCreate) -> Result<Report> {
        let req = self
            .authed_request(Method::POST, "/api/v1/reports/")
            .json(request);
        self.send_json(req, true).await
    }

    pub async fn get_report(&self, report_id: i64) -> Result<Report> {
        let req = self.authed_request(Method::GET, &format!("/api/v1/reports/{}", report_id));
        self.send_json(req, true).await
    }

    /// Download the rendered PDF. Fails with 404 until the report is ready.
    pub async fn download_report(&self, report_id: i64) -> Result<Vec<u8>> {
        let req = self.authed_request(
            Method::GET,
            &format!("/api/v1/reports/{}/download", report_id),
        );
        self.send_bytes(req, true).await
    }

    pub async fn delete_report(&self, report_id: i64) -> Result<MessageResponse> {
        let req = self.authed_request(Method::DELETE, &format!("/api/v1/reports/{}", report_id));
        self.send_json(req, true).await
    }
}
