//! Session identity allocation
//!
//! Mints the ephemeral, process-local token that identifies one client
//! engine instance for its lifetime.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const TOKEN_LEN: usize = 7;

/// Mint a short random session token
///
/// Unique enough to disambiguate concurrent client instances; not
/// cryptographically secure.
///
/// # Examples
///
/// ```
/// use studyhall::session::token::mint_session_token;
///
/// let token = mint_session_token();
/// assert_eq!(token.len(), 7);
/// ```
pub fn mint_session_token() -> String {
    let mut rng = rand::rng();
    (0..TOKEN_LEN)
        .map(|_| TOKEN_ALPHABET[rng.random_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}

/// The lifetime-scoped identity of one client engine instance
///
/// Created once per engine; the id is never regenerated, persisted, or
/// rotated.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    /// Session token
    pub id: String,
    /// Instant the session was created
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create a fresh session identity
    pub fn new() -> Self {
        Self {
            id: mint_session_token(),
            created_at: Utc::now(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length() {
        assert_eq!(mint_session_token().len(), TOKEN_LEN);
    }

    #[test]
    fn test_token_charset_is_lowercase_base36() {
        let token = mint_session_token();
        assert!(token
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_tokens_disambiguate_instances() {
        let tokens: std::collections::HashSet<String> =
            (0..100).map(|_| mint_session_token()).collect();
        // 36^7 possibilities; 100 draws colliding would indicate a broken rng
        assert!(tokens.len() > 95);
    }

    #[test]
    fn test_session_new_sets_timestamp() {
        let session = Session::new();
        let age = Utc::now() - session.created_at;
        assert!(age.num_seconds() < 2);
        assert_eq!(session.id.len(), TOKEN_LEN);
    }
}
