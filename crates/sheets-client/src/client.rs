//! HTTP client for the spreadsheet web-app endpoint.
//!
//! One configured URL serves every action: reads are query-string GETs,
//! writes are JSON bodies POSTed with an `action` discriminator. Every call
//! is wrapped in the retry loop; each call is independent (no shared
//! limiter, no in-flight coalescing).

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use mutabaah_core::models::{Goal, JournalEntry, Student, TeacherStats};

use crate::api::JournalApi;
use crate::envelope::ApiResponse;
use crate::errors::{ClientError, Result};
use crate::retry::{execute_with_policy, RetryPolicy};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Apps Script web apps reject preflighted requests; bodies go out as plain
/// text exactly like the browser client sends them.
const POST_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

#[derive(Debug, Clone)]
pub struct SheetsClientConfig {
    /// Deployment URL of the spreadsheet web app.
    pub script_url: String,
    pub retry: RetryPolicy,
    pub timeout: Duration,
}

impl SheetsClientConfig {
    pub fn new(script_url: impl Into<String>) -> Self {
        SheetsClientConfig {
            script_url: script_url.into(),
            retry: RetryPolicy::default(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Resilient data client for the single spreadsheet endpoint.
#[derive(Clone)]
pub struct SheetsClient {
    client: Client,
    script_url: String,
    retry: RetryPolicy,
}

/// POST body wrapper: `{action: "...", ...payload}`.
#[derive(Serialize)]
struct ActionBody<'a, T: Serialize> {
    action: &'a str,
    #[serde(flatten)]
    payload: &'a T,
}

impl SheetsClient {
    pub fn new(config: SheetsClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        SheetsClient {
            client,
            script_url: config.script_url,
            retry: config.retry,
        }
    }

    /// GET with query parameters, retried per policy; returns the raw body
    /// for the caller to parse.
    async fn get_raw(&self, query: &[(&str, &str)]) -> Result<String> {
        execute_with_policy(&self.retry, || {
            let request = self.client.get(&self.script_url).query(query);
            async move {
                let response = request.send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(ClientError::Http { status });
                }
                Ok(response.text().await?)
            }
        })
        .await
    }

    /// POST a pre-serialized body, retried per policy.
    async fn post_raw(&self, payload: &str) -> Result<String> {
        execute_with_policy(&self.retry, || {
            let request = self
                .client
                .post(&self.script_url)
                .header(CONTENT_TYPE, POST_CONTENT_TYPE)
                .body(payload.to_string());
            async move {
                let response = request.send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(ClientError::Http { status });
                }
                Ok(response.text().await?)
            }
        })
        .await
    }

    async fn get_envelope<T: DeserializeOwned>(
        &self,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse<T>> {
        let body = self.get_raw(query).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post_action<T: Serialize>(&self, action: &str, payload: &T) -> Result<()> {
        let body = serde_json::to_string(&ActionBody { action, payload })?;
        let raw = self.post_raw(&body).await?;
        let response: ApiResponse<serde_json::Value> = serde_json::from_str(&raw)?;
        response.into_result(action)?;
        Ok(())
    }
}

#[async_trait]
impl JournalApi for SheetsClient {
    async fn login(&self, nis: &str) -> Result<Option<Student>> {
        let response: ApiResponse<Student> =
            self.get_envelope(&[("action", "login"), ("nis", nis)]).await?;
        if !response.is_success() {
            debug!("login rejected: {:?}", response.message);
        }
        Ok(response.into_data())
    }

    async fn get_goals(&self) -> Result<Vec<Goal>> {
        let response: ApiResponse<Vec<Goal>> =
            self.get_envelope(&[("action", "getGoals")]).await?;
        if !response.is_success() {
            warn!("getGoals rejected, degrading to empty catalog");
        }
        Ok(response.into_data().unwrap_or_default())
    }

    async fn get_journal(&self, date: NaiveDate) -> Result<Option<JournalEntry>> {
        let date_key = date.format("%Y-%m-%d").to_string();
        let response: ApiResponse<JournalEntry> = self
            .get_envelope(&[("action", "getJournal"), ("date", &date_key)])
            .await?;
        Ok(response.into_data())
    }

    async fn submit_journal(&self, entry: &JournalEntry) -> Result<()> {
        entry.validate()?;
        self.post_action("submitJournal", entry).await
    }

    async fn update_profile(&self, student: &Student) -> Result<()> {
        self.post_action("updateProfile", student).await
    }

    async fn get_history(&self, student_id: &str) -> Result<Vec<JournalEntry>> {
        let response: ApiResponse<Vec<JournalEntry>> = self
            .get_envelope(&[("action", "getHistory"), ("studentId", student_id)])
            .await?;
        if !response.is_success() {
            warn!("getHistory rejected, degrading to empty history");
        }
        Ok(response.into_data().unwrap_or_default())
    }

    async fn get_teacher_stats(&self) -> Result<TeacherStats> {
        let response: ApiResponse<TeacherStats> =
            self.get_envelope(&[("action", "getTeacherStats")]).await?;
        if !response.is_success() {
            warn!("getTeacherStats rejected, degrading to zeroed stats");
        }
        Ok(response.into_data().unwrap_or_default())
    }

    async fn get_leaderboard(&self) -> Result<Vec<Student>> {
        let response: ApiResponse<Vec<Student>> =
            self.get_envelope(&[("action", "getLeaderboard")]).await?;
        let mut students = response.into_data().unwrap_or_default();
        students.sort_by_key(|s| std::cmp::Reverse(s.points));
        Ok(students)
    }
}
