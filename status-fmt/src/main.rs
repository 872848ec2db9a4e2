//! status-fmt - Format a status update and optionally copy it

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use libstatusmaker::logging::{format_from_env, level_from_env, LoggingConfig};
use libstatusmaker::service::StatusmakerService;
use libstatusmaker::{Config, StatusBoard, StatusEntry, StatusError, StatusmakerError};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "status-fmt")]
#[command(version, about = "Format a status update for chat")]
#[command(long_about = r#"Format a multi-part status update: a bold headline followed by
emoji/title/body entries, ready to paste into Slack-style chat.

The status comes from a TOML or JSON document, from --entry flags, or both
(flag entries are appended after the document's).

EXAMPLES:
    # Entries from flags
    status-fmt --headline "Weekly" -e "🚀|Shipped search|Rolled out to everyone"

    # Multi-line bodies use \n
    status-fmt -e "🐛|Fixed login|Root cause: stale cache\nPatched in 1.4.2"

    # From a document, or stdin
    status-fmt status.toml
    cat status.json | status-fmt

    # Copy the result instead of pasting it yourself
    status-fmt status.toml --copy

    # JSON output for scripting
    status-fmt status.toml --format json | jq -r .result

DOCUMENT FORMAT (TOML):
    headline = "Weekly"

    [[entries]]
    emoji = "🚀"
    title = "Shipped search"
    body = "Rolled out to everyone"

EXIT CODES:
    0 - Success
    1 - General error (unreadable file, bad config)
    2 - Clipboard error
    3 - Invalid input (no entries, malformed document or flag)
"#)]
struct Cli {
    /// Status document (TOML or JSON); "-" reads stdin
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Headline text (overrides the document's)
    #[arg(long, value_name = "TEXT", conflicts_with = "no_headline")]
    headline: Option<String>,

    /// Leave the headline out
    #[arg(long)]
    no_headline: bool,

    /// Append an entry as "EMOJI|TITLE|BODY" (body optional)
    #[arg(short, long = "entry", value_name = "ENTRY")]
    entries: Vec<String>,

    /// Copy the formatted status to the clipboard
    #[arg(long)]
    copy: bool,

    /// Output format
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    #[arg(value_parser = ["text", "json"])]
    format: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Status document as read from a file or stdin
#[derive(Debug, Default, Deserialize)]
struct Document {
    headline: Option<String>,
    #[serde(default)]
    entries: Vec<StatusEntry>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Stderr target cannot fail to open
    let _ = LoggingConfig::new(format_from_env(), level_from_env("warn"), cli.verbose).init();

    tracing::debug!("status-fmt started with args: {:?}", cli);

    // Run the main logic and handle errors
    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code(&e));
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load().context("Failed to load configuration")?;

    let document = match read_input(cli.file.as_ref())? {
        Some(text) => parse_document(&text)?,
        None => Document::default(),
    };

    let headline = if cli.no_headline {
        String::new()
    } else {
        cli.headline
            .or(document.headline)
            .unwrap_or_else(|| config.defaults.headline.clone())
    };

    let mut entries = document.entries;
    for flag in &cli.entries {
        entries.push(parse_entry(flag)?);
    }

    let board = StatusBoard::from_parts(headline, entries).map_err(|e| match e {
        StatusError::EmptyList => StatusmakerError::InvalidInput(
            "No entries given. Pass a document or at least one --entry".to_string(),
        ),
        other => other.into(),
    })?;
    let result = board.render();

    match cli.format.as_str() {
        "json" => {
            let output = serde_json::json!({
                "result": result,
                "headline": board.headline,
                "entries": board.entries,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => println!("{}", result),
    }

    if cli.copy {
        // The escape sequence only means something to a terminal
        config.clipboard.osc52_fallback &= atty::is(atty::Stream::Stderr);

        let service = StatusmakerService::with_terminal(config, std::io::stderr());
        let mut events = service.subscribe();
        let copied = service.copy().copy(&result).await;

        while let Ok(event) = events.try_recv() {
            tracing::debug!("Copy event: {}", serde_json::to_string(&event)?);
        }

        let outcome = copied?;
        tracing::debug!(provider = %outcome.provider, chars = outcome.chars, "Copied");
        eprintln!("Copied to clipboard");
    }

    Ok(())
}

/// Document text from FILE, "-" or piped stdin; `None` when there is none
fn read_input(file: Option<&PathBuf>) -> Result<Option<String>> {
    match file {
        Some(path) if path.as_os_str() == "-" => read_stdin().map(Some),
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))
            .map(Some),
        None if atty::is(atty::Stream::Stdin) => Ok(None),
        None => {
            let text = read_stdin()?;
            Ok(Some(text).filter(|t| !t.trim().is_empty()))
        }
    }
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    Ok(text)
}

/// JSON when it looks like an object, TOML otherwise
fn parse_document(text: &str) -> Result<Document> {
    let parsed: std::result::Result<Document, String> = if text.trim_start().starts_with('{') {
        serde_json::from_str(text).map_err(|e| e.to_string())
    } else {
        toml::from_str(text).map_err(|e| e.to_string())
    };

    parsed.map_err(|e| StatusmakerError::InvalidInput(format!("Malformed status document: {}", e)).into())
}

/// Parse "EMOJI|TITLE|BODY"; body may contain `\n` escapes
fn parse_entry(flag: &str) -> Result<StatusEntry> {
    let mut parts = flag.splitn(3, '|');
    let emoji = parts.next().unwrap_or_default();
    let Some(title) = parts.next() else {
        return Err(StatusmakerError::InvalidInput(format!(
            "Entry '{}' must look like EMOJI|TITLE|BODY",
            flag
        ))
        .into());
    };
    let body = parts.next().unwrap_or_default().replace("\\n", "\n");

    Ok(StatusEntry {
        emoji: emoji.trim().to_string(),
        title: title.trim().to_string(),
        body,
    })
}

/// Exit code for library errors, 1 for everything else
fn exit_code(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<StatusmakerError>()
        .map(StatusmakerError::exit_code)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry() {
        let entry = parse_entry("🚀|Shipped|Line one\\nLine two").unwrap();
        assert_eq!(entry.emoji, "🚀");
        assert_eq!(entry.title, "Shipped");
        assert_eq!(entry.body, "Line one\nLine two");
    }

    #[test]
    fn test_parse_entry_without_body() {
        let entry = parse_entry("✅ | Done").unwrap();
        assert_eq!(entry.emoji, "✅");
        assert_eq!(entry.title, "Done");
        assert_eq!(entry.body, "");
    }

    #[test]
    fn test_parse_entry_keeps_pipes_in_body() {
        let entry = parse_entry("🔧|Tooling|a | b").unwrap();
        assert_eq!(entry.body, "a | b");
    }

    #[test]
    fn test_parse_entry_needs_title() {
        let err = parse_entry("🚀").unwrap_err();
        assert_eq!(exit_code(&err), 3);
    }

    #[test]
    fn test_parse_toml_document() {
        let doc = parse_document(
            r#"
headline = "Weekly"

[[entries]]
emoji = "🚀"
title = "Shipped"
"#,
        )
        .unwrap();

        assert_eq!(doc.headline.as_deref(), Some("Weekly"));
        assert_eq!(doc.entries.len(), 1);
        assert_eq!(doc.entries[0].body, "");
    }

    #[test]
    fn test_parse_json_document() {
        let doc = parse_document(r#"{"entries": [{"emoji": "🎉", "title": "Launch", "body": "Today"}]}"#).unwrap();

        assert!(doc.headline.is_none());
        assert_eq!(doc.entries[0].title, "Launch");
    }

    #[test]
    fn test_malformed_document_is_invalid_input() {
        let err = parse_document("entries = [").unwrap_err();
        assert_eq!(exit_code(&err), 3);
    }

    #[test]
    fn test_exit_code_defaults_to_one() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code(&err), 1);
    }
}
