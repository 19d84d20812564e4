// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily wellness endpoints.

use reqwest::Method;

use crate::error::Result;
use crate::models::{WellnessEntry, WellnessEntryCreate, WellnessEntryUpdate, WellnessHistory};
use crate::services::ApiClient;

impl ApiClient {
    /// Wellness dashboard: today's status, weekly averages, trends.
    pub async fn wellness_dashboard(&self) -> Result<serde_json::Value> {
        let req = self.authed_request(Method::GET, "/api/v1/wellness/dashboard");
        self.send_json(req, true).await
    }

    /// Log today's wellness data (one entry per day, all fields optional).
    pub async fn create_wellness_entry(&self, entry: &WellnessEntryCreate) -> Result<WellnessEntry> {
        let req = self
            .authed_request(Method::POST, "/api/v1/wellness/data")
            .json(entry);
        self.send_json(req, true).await
    }

    /// Daily entries plus chart aggregates for the given window.
    pub async fn wellness_history(&self, days: u32, limit: u32) -> Result<WellnessHistory> {
        let req = self
            .authed_request(Method::GET, "/api/v1/wellness/history")
            .query(&[("days", days.to_string()), ("limit", limit.to_string())]);
        self.send_json(req, true).await
    }

    /// Today's entry; 404 when nothing has been logged yet.
    pub async fn today_wellness_entry(&self) -> Result<WellnessEntry> {
        let req = self.authed_request(Method::GET, "/api/v1/wellness/today");
        self.send_json(req, true).await
    }

    pub async fn get_wellness_entry(&self, entry_id: i64) -> Result<WellnessEntry> {
        let req = self.authed_request(Method::GET, &format!("/api/v1/wellness/{}", entry_id));
        self.send_json(req, true).await
    }

    pub async fn update_wellness_entry(
        &self,
        entry_id: i64,
        update: &WellnessEntryUpdate,
    ) -> Result<WellnessEntry> {
        let req = self
            .authed_request(Method::PATCH, &format!("/api/v1/wellness/{}", entry_id))
            .json(update);
        self.send_json(req, true).await
    }
}
