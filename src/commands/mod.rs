//! Command handlers for Studyhall
//!
//! Each CLI subcommand gets a handler module here.

pub mod chat;
