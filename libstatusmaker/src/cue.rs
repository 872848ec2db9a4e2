//! Audible "pop" cue played on add and copy
//!
//! Cues are best effort: a failing cue never blocks a state update.

use std::io::Write;
use std::sync::Mutex;

/// A fire-and-forget UI cue
pub trait Cue: Send + Sync {
    fn play(&self);
}

/// Rings the terminal bell on the wrapped writer
pub struct TerminalBell<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> TerminalBell<W> {
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

impl TerminalBell<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> Cue for TerminalBell<W> {
    fn play(&self) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(e) = out.write_all(b"\x07").and_then(|_| out.flush()) {
            tracing::debug!("Pop cue failed: {}", e);
        }
    }
}

/// Cue used when sound is disabled
pub struct SilentCue;

impl Cue for SilentCue {
    fn play(&self) {}
}
