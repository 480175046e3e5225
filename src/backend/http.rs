//! HTTP backend implementation for Studyhall
//!
//! This module implements the `LearningBackend` trait over the platform's
//! REST endpoints: JSON chat dispatch and multipart document upload.

use crate::backend::{ChatReply, ChatRequest, DocumentOutcome, DocumentUpload, LearningBackend};
use crate::config::BackendConfig;
use crate::error::{Result, StudyhallError};

use async_trait::async_trait;
use reqwest::multipart;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// HTTP client for the learning platform backend
///
/// Connects to the chat endpoint (`POST {base}/chat`) and the document
/// conversion endpoint (`POST {base}/api/process-pdf`). The transport
/// timeout is the only time bound: a request that hangs shorter than the
/// timeout is simply awaited.
///
/// # Examples
///
/// ```no_run
/// use studyhall::backend::{ChatRequest, ChatTurn, HttpBackend, LearningBackend};
/// use studyhall::config::BackendConfig;
///
/// # async fn example() -> studyhall::error::Result<()> {
/// let backend = HttpBackend::new(&BackendConfig::default())?;
/// let request = ChatRequest {
///     messages: vec![ChatTurn::user("What is entropy?")],
///     transcript: String::new(),
///     user_id: None,
/// };
/// let reply = backend.send_chat(&request).await?;
/// println!("{}", reply.message);
/// # Ok(())
/// # }
/// ```
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

/// Response body from the document conversion endpoint
#[derive(Debug, Deserialize)]
struct ProcessDocumentResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    transcript: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl HttpBackend {
    /// Create a new HTTP backend instance
    ///
    /// # Arguments
    ///
    /// * `config` - Backend configuration containing base URL and timeout
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    ///
    /// # Examples
    ///
    /// ```
    /// use studyhall::backend::HttpBackend;
    /// use studyhall::config::BackendConfig;
    ///
    /// let backend = HttpBackend::new(&BackendConfig::default());
    /// assert!(backend.is_ok());
    /// ```
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("studyhall/0.1.0")
            .build()
            .map_err(|e| StudyhallError::Backend(format!("Failed to create HTTP client: {}", e)))?;

        tracing::info!("Initialized backend client: base_url={}", config.base_url);

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the configured base URL (without trailing slash)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl LearningBackend for HttpBackend {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply> {
        let url = format!("{}/chat", self.base_url);
        tracing::debug!(
            "Dispatching chat turn: url={}, messages={}",
            url,
            request.messages.len()
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Chat dispatch failed: {}", e);
                StudyhallError::Backend(format!("Failed to reach chat endpoint: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Chat endpoint returned {}: {}", status, body);
            return Err(StudyhallError::Backend(format!(
                "Chat endpoint returned {}: {}",
                status, body
            ))
            .into());
        }

        let reply: ChatReply = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse chat response: {}", e);
            StudyhallError::Backend(format!("Failed to parse chat response: {}", e))
        })?;

        Ok(reply)
    }

    async fn process_document(&self, upload: DocumentUpload) -> Result<DocumentOutcome> {
        let url = format!("{}/api/process-pdf", self.base_url);
        tracing::debug!(
            "Uploading document: url={}, file={}, bytes={}",
            url,
            upload.file_name,
            upload.bytes.len()
        );

        let part = multipart::Part::bytes(upload.bytes).file_name(upload.file_name);
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Document upload failed: {}", e);
                StudyhallError::Backend(format!("Failed to reach conversion endpoint: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Conversion endpoint returned {}: {}", status, body);
            return Err(StudyhallError::Backend(format!(
                "Conversion endpoint returned {}: {}",
                status, body
            ))
            .into());
        }

        let body: ProcessDocumentResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse conversion response: {}", e);
            StudyhallError::Backend(format!("Failed to parse conversion response: {}", e))
        })?;

        if !body.success {
            let reason = body
                .error
                .unwrap_or_else(|| "Failed to process PDF".to_string());
            return Err(StudyhallError::DocumentRejected(reason).into());
        }

        Ok(DocumentOutcome {
            transcript: body.transcript.unwrap_or_default(),
            summary: body.summary.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = BackendConfig {
            base_url: "http://localhost:8000/".to_string(),
            ..Default::default()
        };
        let backend = HttpBackend::new(&config).unwrap();
        assert_eq!(backend.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_new_keeps_clean_base_url() {
        let config = BackendConfig::default();
        let backend = HttpBackend::new(&config).unwrap();
        assert_eq!(backend.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_process_response_defaults() {
        let body: ProcessDocumentResponse = serde_json::from_str("{}").unwrap();
        assert!(!body.success);
        assert!(body.transcript.is_none());
        assert!(body.summary.is_none());
        assert!(body.error.is_none());
    }

    #[test]
    fn test_process_response_full_body() {
        let body: ProcessDocumentResponse = serde_json::from_str(
            r#"{"success": true, "transcript": "text", "summary": "short", "error": null}"#,
        )
        .unwrap();
        assert!(body.success);
        assert_eq!(body.transcript.as_deref(), Some("text"));
        assert_eq!(body.summary.as_deref(), Some("short"));
    }
}
