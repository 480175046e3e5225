//! Backend trait and wire types for Studyhall
//!
//! This module defines the `LearningBackend` trait the session engine
//! dispatches through, along with the request and response structures for
//! the chat and document-conversion endpoints.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One role-tagged entry in a chat dispatch payload
///
/// Only `user` and `assistant` roles appear on the wire; system and error
/// turns from the conversation log stay client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Role of the entry ("user" or "assistant")
    pub role: String,
    /// Content of the entry
    pub content: String,
}

impl ChatTurn {
    /// Creates a new user entry
    ///
    /// # Examples
    ///
    /// ```
    /// use studyhall::backend::ChatTurn;
    ///
    /// let turn = ChatTurn::user("What is entropy?");
    /// assert_eq!(turn.role, "user");
    /// ```
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Creates a new assistant entry
    ///
    /// # Examples
    ///
    /// ```
    /// use studyhall::backend::ChatTurn;
    ///
    /// let turn = ChatTurn::assistant("Entropy is a measure of disorder.");
    /// assert_eq!(turn.role, "assistant");
    /// ```
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for the chat endpoint
///
/// Carries the accumulated conversation, the current context-of-record
/// transcript, and the optional user identifier.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Prior user/assistant turns in log order, ending with the pending
    /// user entry
    pub messages: Vec<ChatTurn>,
    /// Content of record carried over from the last reply or ingested
    /// document (may be empty)
    pub transcript: String,
    /// Optional user identifier; omitted from the body when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Successful response body from the chat endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    /// The assistant's reply text
    pub message: String,
}

/// A document handed to the ingestion pipeline
///
/// No client-side validation of type or size happens here; the conversion
/// service is the authority on what it accepts.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    /// File name reported to the conversion service
    pub file_name: String,
    /// Raw document bytes
    pub bytes: Vec<u8>,
}

impl DocumentUpload {
    /// Creates an upload from a name and raw bytes
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Creates an upload by reading a file from disk
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("document")
            .to_string();
        Ok(Self { file_name, bytes })
    }
}

/// Outcome of a successful document conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOutcome {
    /// Full transcript of the document
    pub transcript: String,
    /// Human-readable summary of the document
    pub summary: String,
}

/// Learning-platform backend used by the session engine
///
/// Implementations talk to the real service over HTTP; tests substitute
/// scripted fakes.
#[async_trait]
pub trait LearningBackend: Send + Sync {
    /// Dispatch one conversation turn with accumulated context
    ///
    /// # Arguments
    ///
    /// * `request` - The full dispatch payload
    ///
    /// # Returns
    ///
    /// Returns the assistant's reply
    ///
    /// # Errors
    ///
    /// Returns error if the endpoint is unreachable, answers with a
    /// non-success status, or the body cannot be parsed
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply>;

    /// Submit one document for conversion to transcript and summary
    ///
    /// # Arguments
    ///
    /// * `upload` - The document to convert
    ///
    /// # Returns
    ///
    /// Returns the transcript and summary produced by the service
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, or
    /// `StudyhallError::DocumentRejected` when the service reports
    /// `success: false`
    async fn process_document(&self, upload: DocumentUpload) -> Result<DocumentOutcome>;
}
