//! Speech capture for the input multiplexer
//!
//! Wraps the platform speech-recognition capability as a single owned
//! object with explicit acquire/release semantics. At most one capture
//! session is live at a time; the recognition stream feeds the shared
//! input buffer through `SessionEngine::apply_recognition`.

use crate::error::{Result, StudyhallError};

/// One segment of the running recognition stream
///
/// Candidate transcripts are ranked best-first, the way the platform
/// service reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecognitionResult {
    /// Candidate transcripts, best first
    pub alternatives: Vec<String>,
}

impl RecognitionResult {
    /// Creates a result from ranked alternatives
    pub fn new(alternatives: Vec<String>) -> Self {
        Self { alternatives }
    }

    /// The top-ranked transcript, or empty if the service produced none
    pub fn best(&self) -> &str {
        self.alternatives.first().map(String::as_str).unwrap_or("")
    }
}

/// One recognition event
///
/// Every event carries the full current result list, not an incremental
/// delta; the concatenated top transcripts form the complete running
/// transcript of the capture session so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecognitionEvent {
    /// Current results in stream order
    pub results: Vec<RecognitionResult>,
}

impl RecognitionEvent {
    /// Creates an event from the current result list
    pub fn new(results: Vec<RecognitionResult>) -> Self {
        Self { results }
    }

    /// Concatenated top-ranked transcript of every current result
    ///
    /// # Examples
    ///
    /// ```
    /// use studyhall::session::capture::{RecognitionEvent, RecognitionResult};
    ///
    /// let event = RecognitionEvent::new(vec![
    ///     RecognitionResult::new(vec!["what is ".to_string()]),
    ///     RecognitionResult::new(vec!["entropy".to_string(), "atrophy".to_string()]),
    /// ]);
    /// assert_eq!(event.full_transcript(), "what is entropy");
    /// ```
    pub fn full_transcript(&self) -> String {
        self.results.iter().map(RecognitionResult::best).collect()
    }
}

/// Platform speech-recognition capability
///
/// Implementations bridge a host speech service; the engine only starts and
/// stops the stream and consumes its events.
pub trait SpeechRecognizer: Send + Sync {
    /// Begin emitting recognition events
    ///
    /// # Errors
    ///
    /// Returns error if the capability refuses to start
    fn start(&mut self) -> Result<()>;

    /// Stop the stream
    ///
    /// The platform may still flush a trailing event after this returns.
    ///
    /// # Errors
    ///
    /// Returns error if the capability refuses to stop
    fn stop(&mut self) -> Result<()>;
}

/// Owned handle to the shared recognition capability
///
/// The capability is non-reentrant: acquiring while already held is
/// refused, so at most one capture session is live.
pub struct SpeechCapture {
    recognizer: Box<dyn SpeechRecognizer>,
    active: bool,
}

impl SpeechCapture {
    /// Wrap a recognizer as the session's capture capability
    pub fn new(recognizer: Box<dyn SpeechRecognizer>) -> Self {
        Self {
            recognizer,
            active: false,
        }
    }

    /// Whether a capture session is currently live
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start the recognition stream and mark the capability held
    ///
    /// # Errors
    ///
    /// Returns error if capture is already active or the recognizer
    /// refuses to start
    pub fn acquire(&mut self) -> Result<()> {
        if self.active {
            return Err(
                StudyhallError::Capture("Speech capture is already active".to_string()).into(),
            );
        }
        self.recognizer.start()?;
        self.active = true;
        Ok(())
    }

    /// Stop the recognition stream and release the capability
    ///
    /// # Errors
    ///
    /// Returns error if capture is not active or the recognizer refuses
    /// to stop
    pub fn release(&mut self) -> Result<()> {
        if !self.active {
            return Err(StudyhallError::Capture("Speech capture is not active".to_string()).into());
        }
        self.recognizer.stop()?;
        self.active = false;
        Ok(())
    }
}

/// Recognizer for hosts without a speech service
///
/// `start` always fails, so capture stays released and typed input remains
/// the only channel. This is the CLI default.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedRecognizer;

impl SpeechRecognizer for UnsupportedRecognizer {
    fn start(&mut self) -> Result<()> {
        Err(StudyhallError::Capture(
            "Speech recognition is not available on this host".to_string(),
        )
        .into())
    }

    fn stop(&mut self) -> Result<()> {
        Ok(())
    }
}
