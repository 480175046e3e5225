//! Backend module for Studyhall
//!
//! This module contains the learning-platform backend abstraction and its
//! HTTP implementation.

pub mod api;
pub mod http;

pub use api::{
    ChatReply, ChatRequest, ChatTurn, DocumentOutcome, DocumentUpload, LearningBackend,
};
pub use http::HttpBackend;
