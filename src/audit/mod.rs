//! Audit Notifications
//!
//! This module forwards login and registration outcomes to an external
//! collector (an n8n webhook in production, which appends them to a
//! spreadsheet). Delivery is strictly fire-and-forget: the HTTP request
//! runs on a spawned task, failures are logged and swallowed, and the
//! client-facing response never waits on the collector.
//!
//! # Endpoints
//!
//! - `POST {base}/n8n-login` with `{"email", "status"}`
//! - `POST {base}/n8n-register` with `{"name", "email", "status"}`
//!
//! Both success and failure outcomes are reported, so the collector sees
//! failed login attempts too.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tokio::task::JoinHandle;

/// Outcome label attached to every audit event
///
/// Serializes as `"Success"` / `"Fail"`, the labels the collector's
/// spreadsheet columns already use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuditStatus {
    Success,
    Fail,
}

/// Handle to the audit collector
///
/// Cheap to clone; the inner `reqwest::Client` is shared. The client
/// carries a 10 second timeout so a hung collector cannot pin spawned
/// tasks indefinitely.
#[derive(Debug, Clone)]
pub struct AuditNotifier {
    client: Client,
    base_url: String,
}

impl AuditNotifier {
    /// Create a notifier targeting the given webhook base URL
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Report a login outcome
    ///
    /// Returns the handle of the spawned delivery task. Callers normally
    /// drop it; tests await it to make delivery deterministic.
    pub fn notify_login(&self, email: &str, status: AuditStatus) -> JoinHandle<()> {
        let body = serde_json::json!({ "email": email, "status": status });
        self.deliver("/n8n-login", body)
    }

    /// Report a registration outcome
    pub fn notify_register(&self, name: &str, email: &str, status: AuditStatus) -> JoinHandle<()> {
        let body = serde_json::json!({ "name": name, "email": email, "status": status });
        self.deliver("/n8n-register", body)
    }

    fn deliver(&self, path: &str, body: serde_json::Value) -> JoinHandle<()> {
        let client = self.client.clone();
        let url = format!("{}{}", self.base_url, path);

        tokio::spawn(async move {
            match client.post(&url).json(&body).send().await {
                Ok(response) if response.status().is_success() => {
                    tracing::debug!("Audit event delivered to {}", url);
                }
                Ok(response) => {
                    tracing::warn!(
                        "Audit collector at {} answered {}",
                        url,
                        response.status()
                    );
                }
                Err(e) => {
                    tracing::warn!("Audit event to {} failed: {}", url, e);
                }
            }
        })
    }
}
