//! Conversational session engine
//!
//! This module coordinates the input capture multiplexer, the conversation
//! log, the turn dispatcher, the resource ingestion pipeline, and the
//! context carryover store into one consistent session state. All engine
//! state lives in a single `SessionState` value mutated only through the
//! operations here; the presentation layer observes it through the
//! read-only `SessionView` projection.
//!
//! Overlapping async operations are allowed: the state lock is held only
//! across synchronous mutation sections, never across an await, so appends
//! serialize while any number of dispatches are in flight. Each dispatch
//! carries a monotonic sequence number; a response arriving after a later
//! dispatch has already been applied is dropped rather than appended out of
//! order.

use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use crate::backend::{ChatRequest, DocumentUpload, LearningBackend};
use crate::error::{Result, StudyhallError};
use crate::session::capture::{RecognitionEvent, SpeechCapture, SpeechRecognizer};
use crate::session::context::ContextSnapshot;
use crate::session::log::{ConversationLog, Turn};
use crate::session::resources::{Resource, ResourceRegistry, ResourceStatus};
use crate::session::token::Session;

/// Fixed, non-technical message shown when a chat dispatch fails
const CHAT_FAILURE_MESSAGE: &str = "Sorry, there was an error processing your message.";

/// How a `submit` call concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was blank after trimming; nothing was appended or sent
    Ignored,
    /// The backend replied and an assistant turn was applied
    Replied,
    /// The dispatch failed and an error turn was applied
    Failed,
    /// A later dispatch was applied first; this response was dropped
    Superseded,
}

/// How an `ingest` call concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Transcript and summary were folded into the session
    Ingested,
    /// The upload or conversion failed; an error turn was applied
    Failed,
}

/// Mutable session state
///
/// Mutated only through engine operations; never handed out by reference.
#[derive(Debug, Default)]
struct SessionState {
    log: ConversationLog,
    input: String,
    context: ContextSnapshot,
    resources: ResourceRegistry,
    next_seq: u64,
    applied_seq: u64,
}

/// Read-only projection of session state for the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    /// All turns in the conversation log, in insertion order
    pub messages: Vec<Turn>,
    /// Current content of the shared input buffer
    pub input: String,
    /// Whether a speech-capture session is live
    pub is_listening: bool,
    /// Current content of record (last reply or ingested transcript)
    pub content: String,
    /// Recorded document-ingestion outcomes
    pub resources: Vec<Resource>,
}

/// The conversational session engine
///
/// Owns one session identity, one backend handle, one speech-capture
/// capability, and the session state. The engine is `Send + Sync` and is
/// typically shared behind an `Arc` so that dispatches may overlap.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use studyhall::backend::HttpBackend;
/// use studyhall::config::Config;
/// use studyhall::session::{SessionEngine, UnsupportedRecognizer};
///
/// # async fn example() -> studyhall::error::Result<()> {
/// let config = Config::default();
/// let backend = Arc::new(HttpBackend::new(&config.backend)?);
/// let engine = SessionEngine::new(backend, Box::new(UnsupportedRecognizer), None);
///
/// engine.submit("What is entropy?").await?;
/// for turn in engine.view()?.messages {
///     println!("{:?}: {}", turn.kind, turn.content);
/// }
/// # Ok(())
/// # }
/// ```
pub struct SessionEngine {
    session: Session,
    backend: Arc<dyn LearningBackend>,
    user_id: Option<String>,
    state: RwLock<SessionState>,
    capture: Mutex<SpeechCapture>,
}

impl SessionEngine {
    /// Create a new engine with a fresh session identity
    ///
    /// # Arguments
    ///
    /// * `backend` - The learning-platform backend to dispatch through
    /// * `recognizer` - The host speech-recognition capability
    /// * `user_id` - Optional identifier forwarded with every dispatch
    pub fn new(
        backend: Arc<dyn LearningBackend>,
        recognizer: Box<dyn SpeechRecognizer>,
        user_id: Option<String>,
    ) -> Self {
        let session = Session::new();
        tracing::info!("Starting session {}", session.id);

        Self {
            session,
            backend,
            user_id,
            state: RwLock::new(SessionState::default()),
            capture: Mutex::new(SpeechCapture::new(recognizer)),
        }
    }

    /// The session identity minted at construction
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Replace the shared input buffer with manually typed text
    pub fn set_input(&self, text: impl Into<String>) -> Result<()> {
        self.write_state()?.input = text.into();
        Ok(())
    }

    /// Whether a speech-capture session is live
    pub fn is_listening(&self) -> Result<bool> {
        Ok(self.lock_capture()?.is_active())
    }

    /// Toggle speech capture
    ///
    /// Starts the recognition stream if capture is inactive; stops it and
    /// leaves the last transcript in the input buffer for manual editing if
    /// active.
    ///
    /// # Returns
    ///
    /// Returns the new listening state
    ///
    /// # Errors
    ///
    /// Returns error if the recognition capability refuses the transition;
    /// the listening state is unchanged in that case
    pub fn toggle_capture(&self) -> Result<bool> {
        let mut capture = self.lock_capture()?;
        if capture.is_active() {
            capture.release()?;
            tracing::debug!("Speech capture stopped");
            Ok(false)
        } else {
            capture.acquire()?;
            tracing::debug!("Speech capture started");
            Ok(true)
        }
    }

    /// Fold a recognition event into the input buffer
    ///
    /// The buffer is replaced with the event's full running transcript.
    /// Events arriving while capture is inactive are dropped so a stopped
    /// stream's trailing flush cannot overwrite manual edits.
    pub fn apply_recognition(&self, event: &RecognitionEvent) -> Result<()> {
        if !self.is_listening()? {
            tracing::debug!("Dropping recognition event while capture is inactive");
            return Ok(());
        }
        self.write_state()?.input = event.full_transcript();
        Ok(())
    }

    /// Dispatch one conversation turn
    ///
    /// Blank input (after trimming) is silently ignored. Otherwise the user
    /// turn is appended, the input buffer cleared, and the request built in
    /// one critical section, so the payload snapshot always matches the log
    /// at dispatch time. Exactly one request is sent per call; concurrent
    /// calls proceed independently.
    ///
    /// On success an assistant turn is appended and the context snapshot
    /// replaced with the reply. On failure a single error turn with a fixed
    /// message is appended; the user turn is not rolled back and the
    /// context snapshot is untouched. A response that arrives after a later
    /// dispatch has been applied is dropped entirely.
    ///
    /// # Errors
    ///
    /// Returns error only on poisoned session state; dispatch failures are
    /// reported through the returned outcome and the log
    pub async fn submit(&self, text: &str) -> Result<SubmitOutcome> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::debug!("Ignoring blank submission");
            return Ok(SubmitOutcome::Ignored);
        }

        let (seq, request) = {
            let mut state = self.write_state()?;
            state.next_seq += 1;
            let seq = state.next_seq;
            let messages = state.log.chat_payload(trimmed);
            state.log.append(Turn::user(trimmed));
            state.input.clear();
            let request = ChatRequest {
                messages,
                transcript: state.context.content().to_string(),
                user_id: self.user_id.clone(),
            };
            (seq, request)
        };

        tracing::debug!(
            "Dispatching turn {} with {} messages",
            seq,
            request.messages.len()
        );
        let outcome = self.backend.send_chat(&request).await;

        let mut state = self.write_state()?;
        if seq < state.applied_seq {
            tracing::warn!(
                "Dropping out-of-order chat response: seq={}, applied={}",
                seq,
                state.applied_seq
            );
            return Ok(SubmitOutcome::Superseded);
        }
        state.applied_seq = seq;

        match outcome {
            Ok(reply) => {
                state.context.replace(reply.message.clone());
                state.log.append(Turn::assistant(reply.message));
                Ok(SubmitOutcome::Replied)
            }
            Err(err) => {
                tracing::warn!("Chat dispatch {} failed: {}", seq, err);
                state.log.append(Turn::error(CHAT_FAILURE_MESSAGE));
                Ok(SubmitOutcome::Failed)
            }
        }
    }

    /// Ingest one document through the conversion service
    ///
    /// On success the transcript is appended as an assistant turn (so it
    /// participates in later chat payloads), a system banner with the
    /// summary follows it, the context snapshot is replaced with the
    /// transcript, and the outcome is recorded in the resource registry.
    /// On failure a single error turn carries the reason; context and
    /// registry are untouched. Concurrent ingests run independently and
    /// apply in receipt order.
    ///
    /// # Errors
    ///
    /// Returns error only on poisoned session state; conversion failures
    /// are reported through the returned outcome and the log
    pub async fn ingest(&self, upload: DocumentUpload) -> Result<IngestOutcome> {
        let file_name = upload.file_name.clone();
        tracing::debug!("Ingesting document {}", file_name);

        match self.backend.process_document(upload).await {
            Ok(outcome) => {
                let mut state = self.write_state()?;
                state.context.replace(outcome.transcript.clone());
                state.log.append(Turn::assistant(outcome.transcript));
                state.log.append(Turn::system(format!(
                    "Successfully processed {}. Here's the summary:\n\n{}",
                    file_name, outcome.summary
                )));
                state.resources.record(file_name, ResourceStatus::Ingested);
                Ok(IngestOutcome::Ingested)
            }
            Err(err) => {
                tracing::warn!("Ingestion of {} failed: {}", file_name, err);
                let reason = match err.downcast_ref::<StudyhallError>() {
                    Some(StudyhallError::DocumentRejected(reason)) => reason.clone(),
                    _ => err.to_string(),
                };
                let mut state = self.write_state()?;
                state
                    .log
                    .append(Turn::error(format!("Error processing PDF: {}", reason)));
                Ok(IngestOutcome::Failed)
            }
        }
    }

    /// Produce the read-only projection of the current session state
    pub fn view(&self) -> Result<SessionView> {
        let is_listening = self.is_listening()?;
        let state = self.read_state()?;
        Ok(SessionView {
            messages: state.log.turns().to_vec(),
            input: state.input.clone(),
            is_listening,
            content: state.context.content().to_string(),
            resources: state.resources.entries().to_vec(),
        })
    }

    fn read_state(&self) -> Result<RwLockReadGuard<'_, SessionState>> {
        self.state.read().map_err(|_| {
            StudyhallError::Session("Failed to acquire read lock on session state".to_string())
                .into()
        })
    }

    fn write_state(&self) -> Result<RwLockWriteGuard<'_, SessionState>> {
        self.state.write().map_err(|_| {
            StudyhallError::Session("Failed to acquire write lock on session state".to_string())
                .into()
        })
    }

    fn lock_capture(&self) -> Result<MutexGuard<'_, SpeechCapture>> {
        self.capture.lock().map_err(|_| {
            StudyhallError::Session("Failed to acquire lock on speech capture".to_string()).into()
        })
    }
}
