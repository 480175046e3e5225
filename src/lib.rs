//! Studyhall - learning platform CLI library
//!
//! This library provides the core functionality for the Studyhall client,
//! including the conversational session engine, the backend abstraction,
//! and configuration management.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `session`: The session engine: input multiplexing, conversation log,
//!   turn dispatch, document ingestion, and context carryover
//! - `backend`: Learning-platform backend abstraction and HTTP implementation
//! - `commands`: CLI command handlers (interactive chat)
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use studyhall::backend::HttpBackend;
//! use studyhall::session::{SessionEngine, UnsupportedRecognizer};
//! use studyhall::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     config.validate()?;
//!
//!     let backend = Arc::new(HttpBackend::new(&config.backend)?);
//!     let engine = SessionEngine::new(backend, Box::new(UnsupportedRecognizer), None);
//!     engine.submit("What is entropy?").await?;
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod session;

// Re-export commonly used types
pub use backend::{HttpBackend, LearningBackend};
pub use config::Config;
pub use error::{Result, StudyhallError};
pub use session::{SessionEngine, SessionView};
