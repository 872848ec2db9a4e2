//! Clipboard providers
//!
//! - `SystemClipboard`: the desktop clipboard through `cli-clipboard`
//! - `CommandClipboard`: pipes text into a configured command such as
//!   `xclip -selection clipboard`
//! - `Osc52Clipboard`: writes an OSC 52 escape sequence so the terminal
//!   itself sets the clipboard; used when there is no system clipboard
//! - `MemoryClipboard`: in-process clipboard for tests and dry runs

use std::io::Write;
use std::process::Stdio;
use std::sync::Mutex;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use cli_clipboard::{ClipboardContext, ClipboardProvider as _};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::ClipboardError;

/// Something that can take a string and put it on a clipboard
#[async_trait]
pub trait ClipboardProvider: Send + Sync {
    /// Short name for logs and status messages
    fn name(&self) -> &str;

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Desktop clipboard (pasteboard, Wayland, X11 or Windows)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// `Some` when a clipboard context can be opened in this session
    pub fn detect() -> Option<Self> {
        match ClipboardContext::new() {
            Ok(_) => Some(Self),
            Err(e) => {
                tracing::debug!("No system clipboard: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl ClipboardProvider for SystemClipboard {
    fn name(&self) -> &str {
        "system"
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_string();

        // The backends block on the display server
        tokio::task::spawn_blocking(move || {
            let mut ctx = ClipboardContext::new().map_err(|e| e.to_string())?;
            ctx.set_contents(text).map_err(|e| e.to_string())
        })
        .await
        .map_err(|e| ClipboardError::System(e.to_string()))?
        .map_err(ClipboardError::System)
    }
}

/// Clipboard command fed through stdin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Parse a configured command line such as `"xclip -selection clipboard"`
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

#[async_trait]
impl ClipboardProvider for CommandClipboard {
    fn name(&self) -> &str {
        &self.program
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        // Only stdin is piped: xclip and friends fork a daemon that keeps
        // inherited output pipes open
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                command: self.program.clone(),
                source,
            })?;

        let mut written = Ok(());
        if let Some(mut stdin) = child.stdin.take() {
            written = stdin.write_all(text.as_bytes()).await;
            if written.is_ok() {
                written = stdin.shutdown().await;
            }
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(ClipboardError::CommandFailed {
                command: self.program.clone(),
                reason: status.to_string(),
            });
        }

        match written {
            Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// Asks the terminal to set the clipboard via OSC 52
pub struct Osc52Clipboard<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// `ESC ] 52 ; c ; <base64> BEL`
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

#[async_trait]
impl<W: Write + Send> ClipboardProvider for Osc52Clipboard<W> {
    fn name(&self) -> &str {
        "osc52"
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let sequence = osc52_sequence(text);
        let mut out = self
            .out
            .lock()
            .map_err(|_| ClipboardError::Unavailable)?;
        out.write_all(sequence.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Clipboard that only remembers the last text written
#[derive(Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

#[async_trait]
impl ClipboardProvider for MemoryClipboard {
    fn name(&self) -> &str {
        "memory"
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|_| ClipboardError::Unavailable)?;
        *contents = Some(text.to_string());
        Ok(())
    }
}
