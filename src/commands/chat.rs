//! Interactive chat command
//!
//! Runs the terminal front end over the session engine: a line-edited
//! prompt for questions, plus slash-commands for the non-text actions the
//! engine exposes (speech capture, document upload, resource listing).

use std::sync::Arc;

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::backend::{DocumentUpload, HttpBackend};
use crate::config::Config;
use crate::error::Result;
use crate::session::{SessionEngine, TurnKind, UnsupportedRecognizer};

/// What the REPL should do after handling a line
enum Flow {
    Continue,
    Quit,
}

/// Run the interactive chat session
///
/// # Arguments
///
/// * `config` - Validated configuration
///
/// # Errors
///
/// Returns error if the backend client or the line editor cannot be
/// initialized; dispatch failures surface as error turns in the
/// conversation, not as process errors
pub async fn run_chat(config: Config) -> Result<()> {
    let backend = Arc::new(HttpBackend::new(&config.backend)?);
    let engine = SessionEngine::new(
        backend,
        Box::new(UnsupportedRecognizer),
        config.backend.user_id.clone(),
    );

    println!(
        "{} session {} - type a question, or {} for commands",
        "studyhall".cyan().bold(),
        engine.session().id.bold(),
        "/help".green()
    );

    let mut editor = DefaultEditor::new()?;
    let mut rendered = 0usize;

    loop {
        let line = match editor.readline("you> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(&line);

        if let Some(rest) = line.strip_prefix('/') {
            match handle_command(&engine, rest).await? {
                Flow::Continue => {
                    render_new_turns(&engine, &mut rendered, &config)?;
                    continue;
                }
                Flow::Quit => break,
            }
        }

        // the user's own turn needs no echo; skip it before rendering
        engine.submit(&line).await?;
        rendered += 1;
        render_new_turns(&engine, &mut rendered, &config)?;
    }

    println!("{}", "Session ended.".dimmed());
    Ok(())
}

async fn handle_command(engine: &SessionEngine, command: &str) -> Result<Flow> {
    let mut parts = command.splitn(2, ' ');
    let name = parts.next().unwrap_or_default();
    let argument = parts.next().map(str::trim).unwrap_or_default();

    match name {
        "help" => {
            print_help();
        }
        "voice" => match engine.toggle_capture() {
            Ok(true) => println!("{}", "Listening... use /voice again to stop.".green()),
            Ok(false) => println!("{}", "Stopped listening.".yellow()),
            Err(e) => println!("{} {}", "Cannot toggle speech capture:".red(), e),
        },
        "upload" => {
            if argument.is_empty() {
                println!("{}", "Usage: /upload <path-to-document>".yellow());
            } else {
                match DocumentUpload::from_path(argument) {
                    Ok(upload) => {
                        engine.ingest(upload).await?;
                    }
                    Err(e) => println!("{} {}", "Cannot read file:".red(), e),
                }
            }
        }
        "resources" => {
            let view = engine.view()?;
            if view.resources.is_empty() {
                println!("{}", "No documents ingested yet.".dimmed());
            }
            for resource in &view.resources {
                println!("  {} ({:?})", resource.name, resource.status);
            }
        }
        "session" => {
            let session = engine.session();
            println!("  id: {}", session.id);
            println!("  started: {}", session.created_at.to_rfc3339());
        }
        "quit" | "exit" => return Ok(Flow::Quit),
        other => {
            println!(
                "{} /{} - type {} for the command list",
                "Unknown command:".yellow(),
                other,
                "/help".green()
            );
        }
    }

    Ok(Flow::Continue)
}

fn render_new_turns(engine: &SessionEngine, rendered: &mut usize, config: &Config) -> Result<()> {
    let view = engine.view()?;
    for turn in view.messages.iter().skip(*rendered) {
        let preview = truncate(&turn.content, config.chat.transcript_preview_chars);
        match turn.kind {
            TurnKind::User => {}
            TurnKind::Assistant => println!("{} {}", "tutor>".cyan().bold(), preview),
            TurnKind::System => println!("{} {}", "note>".purple(), preview),
            TurnKind::Error => println!("{} {}", "error>".red().bold(), preview),
        }
    }
    *rendered = view.messages.len();
    Ok(())
}

fn print_help() {
    println!("  /voice               toggle speech capture");
    println!("  /upload <path>       ingest a document into the session");
    println!("  /resources           list ingested documents");
    println!("  /session             show session identity");
    println!("  /quit                end the session");
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut)
}
