//! Session module for Studyhall
//!
//! This module contains the conversational session engine: session identity
//! allocation, the input capture multiplexer, the append-only conversation
//! log, the turn dispatcher, the resource ingestion pipeline, and the
//! context carryover store.

pub mod capture;
pub mod context;
pub mod engine;
pub mod log;
pub mod resources;
pub mod token;

pub use capture::{
    RecognitionEvent, RecognitionResult, SpeechCapture, SpeechRecognizer, UnsupportedRecognizer,
};
pub use context::ContextSnapshot;
pub use engine::{IngestOutcome, SessionEngine, SessionView, SubmitOutcome};
pub use log::{ConversationLog, Turn, TurnKind};
pub use resources::{Resource, ResourceKind, ResourceRegistry, ResourceStatus};
pub use token::Session;
