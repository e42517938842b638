//! Outgoing mail.
//!
//! `HttpMailer` posts messages to a transactional mail API. Without mail
//! credentials the server falls back to `LogMailer`, which only logs what would
//! have been sent.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::server::error::AppError;

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), AppError>;
}

pub struct HttpMailer {
    client: Client,
    api_url: String,
    api_key: String,
}

impl HttpMailer {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_key,
        }
    }
}

#[derive(Serialize)]
struct MailPayload<'a> {
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), AppError> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&MailPayload {
                to,
                subject,
                html: html_body,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::InternalError(format!(
                "Mail API responded with {}: {}",
                status, body
            )));
        }

        Ok(())
    }
}

/// Mailer used when no mail API is configured.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, to: &str, subject: &str, _html_body: &str) -> Result<(), AppError> {
        tracing::info!("Mail delivery disabled, not sending '{}' to {}", subject, to);

        Ok(())
    }
}
