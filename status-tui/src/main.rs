//! status-tui - Terminal UI for Statusmaker
//!
//! Interactive composer for multi-part status updates: edit a headline and
//! emoji/title/body entries, reorder them, watch the formatted preview and
//! copy it to the clipboard.

use std::path::PathBuf;
use std::time::Instant;

use crossbeam_channel::{Receiver, TryRecvError};
use libstatusmaker::logging::{format_from_env, level_from_env, LogTarget, LoggingConfig};
use libstatusmaker::Config;
use status_tui::{
    app::{event::EventHandler, event::TuiEvent, map_key, reduce, Action, AppState, UiConfig},
    error::Result,
    services::{copy_result_action, CopyResult, ServiceHandle},
    terminal::{install_panic_hook, TerminalSession, Tui},
    ui::{self, FieldEditor},
};

fn main() -> Result<()> {
    init_logging()?;

    let config = Config::load()?;
    let mut services = ServiceHandle::new(config)?;

    let board = services.new_board();
    let ui_config = UiConfig::from_settings(&services.config().ui);
    let state = AppState::with_config(board, ui_config);

    // Install panic hook to restore terminal on panic
    install_panic_hook();

    let mut session = TerminalSession::start()?;
    let result = run_app(session.terminal(), state, &mut services);
    session.restore()?;

    result
}

/// Log to `STATUSMAKER_LOG_FILE` when set; stderr belongs to the UI
fn init_logging() -> Result<()> {
    if let Some(path) = std::env::var_os("STATUSMAKER_LOG_FILE") {
        LoggingConfig::new(format_from_env(), level_from_env("info"), false)
            .with_target(LogTarget::File(PathBuf::from(path)))
            .init()?;
    }
    Ok(())
}

fn run_app(terminal: &mut Tui, mut state: AppState, services: &mut ServiceHandle) -> Result<()> {
    let mut editor = FieldEditor::new(&state);
    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    // Clipboard write in flight, if any
    let mut pending_copy: Option<Receiver<CopyResult>> = None;

    tracing::info!(entries = state.board.len(), "Composer started");

    // Main event loop
    loop {
        editor.sync(&state);
        terminal.draw(|frame| ui::render(frame, &state, &editor))?;

        let action = match event_handler.next(state.copied.deadline())? {
            TuiEvent::Key(key) => match map_key(&state, key) {
                Some(action) => Some(action),
                // Unbound keys are text for the focused field
                None if state.accepts_text() => editor.input(key).map(Action::FieldChanged),
                None => None,
            },
            other => Some(other.into()),
        };

        if let Some(action) = action {
            state = dispatch(state, action, services, &mut pending_copy);
        }

        if let Some(rx) = pending_copy.as_ref() {
            match rx.try_recv() {
                Ok(result) => {
                    pending_copy = None;
                    if result.is_ok() {
                        services.pop();
                    }
                    state = reduce(state, copy_result_action(result, Instant::now()));
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    pending_copy = None;
                    state = reduce(
                        state,
                        Action::CopyFailed {
                            error: "Clipboard task stopped unexpectedly".to_string(),
                        },
                    );
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    tracing::info!("Composer closed");
    Ok(())
}

/// Reduce `action`, then run the side effect it asks for and feed back the outcome
fn dispatch(
    state: AppState,
    action: Action,
    services: &mut ServiceHandle,
    pending_copy: &mut Option<Receiver<CopyResult>>,
) -> AppState {
    let state = reduce(state, action.clone());

    match action {
        Action::AddRequested => {
            let emoji = services.next_emoji();
            services.pop();
            reduce(state, Action::EntryAdded { emoji })
        }
        Action::RerollRequested => {
            let emoji = services.next_emoji();
            reduce(state, Action::EmojiRerolled { emoji })
        }
        Action::CopyRequested if pending_copy.is_none() => {
            let text = state.result();
            let state = reduce(state, Action::CopyStarted);
            *pending_copy = Some(services.copy(text));
            state
        }
        _ => state,
    }
}
