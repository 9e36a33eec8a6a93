use std::sync::mpsc::{self, Sender};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::runtime::Handle;
use tracing::debug;

use crate::api::UserApi;
use crate::app::AppState;
use crate::app::keymap::KeyAction;
use crate::error::FetchError;
use crate::filter::FilterField;
use crate::model::User;
use crate::store::{Action, RequestStatus};
use crate::ui;

/// Settled result of one user list request, sent back to the UI loop.
pub type FetchOutcome = std::result::Result<Vec<User>, FetchError>;

/// Side effects requested by key handling, executed by the loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Fetch,
}

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    runtime: &Handle,
    api: &UserApi,
    mut app: AppState,
) -> Result<()> {
    let (tx, rx) = mpsc::channel::<FetchOutcome>();

    loop {
        if app.mount() {
            start_fetch(&mut app, runtime, api, &tx);
        }
        while let Ok(outcome) = rx.try_recv() {
            apply_fetch_outcome(&mut app, outcome);
        }

        terminal
            .draw(|f| {
                ui::render(f, &mut app);
            })
            .context("draw frame")?;

        if app.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(Command::Fetch) = handle_key(&mut app, key) {
                        start_fetch(&mut app, runtime, api, &tx);
                    }
                }
            }
        }
    }

    Ok(())
}

/// Mark the store as loading and run the request on the tokio runtime.
fn start_fetch(app: &mut AppState, runtime: &Handle, api: &UserApi, tx: &Sender<FetchOutcome>) {
    app.store.dispatch(Action::FetchStarted);
    let api = api.clone();
    let tx = tx.clone();
    runtime.spawn(async move {
        let outcome = api.fetch_users().await;
        // a closed receiver means the UI has already exited
        let _ = tx.send(outcome);
    });
}

pub fn apply_fetch_outcome(app: &mut AppState, outcome: FetchOutcome) {
    app.store.dispatch(Action::from_fetch(outcome));
    app.clamp_selection();
}

/// Forward a raw input value to the store, unless the field rejects it.
pub fn edit_filter(app: &mut AppState, field: FilterField, value: String) {
    if !field.accepts(&value) {
        debug!(?field, %value, "input rejected");
        return;
    }
    app.store.dispatch(Action::SetFilter { field, value });
    app.clamp_selection();
}

pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Option<Command> {
    let action = app.keymap.resolve(&key);

    if app.show_help {
        match (action, key.code) {
            (Some(KeyAction::ToggleHelp), _) | (_, KeyCode::Esc) | (_, KeyCode::Enter) => {
                app.show_help = false;
            }
            (Some(KeyAction::Quit), _) => app.should_quit = true,
            _ => {}
        }
        return None;
    }

    let status = app.store.state().status().clone();
    match (action, status) {
        (Some(KeyAction::Quit), _) => {
            app.should_quit = true;
            None
        }
        (_, RequestStatus::Loading) => None,
        (Some(KeyAction::Refetch), _) => Some(Command::Fetch),
        (None, RequestStatus::Failed(_)) if key.code == KeyCode::Enter => Some(Command::Fetch),
        (_, RequestStatus::Failed(_)) => None,
        (Some(action), RequestStatus::Idle | RequestStatus::Loaded) => {
            handle_table_action(app, action);
            None
        }
        (None, RequestStatus::Idle | RequestStatus::Loaded) => {
            if let KeyCode::Char(c) = key.code {
                if is_text_input(key.modifiers) {
                    let field = app.focus;
                    let mut value = app.store.state().filters().get(field).to_string();
                    value.push(c);
                    edit_filter(app, field, value);
                }
            }
            None
        }
    }
}

/// Plain or shifted characters, plus AltGr, which Windows terminals report as Ctrl+Alt.
fn is_text_input(mods: KeyModifiers) -> bool {
    let mods = mods.difference(KeyModifiers::SHIFT);
    mods.is_empty() || mods == KeyModifiers::CONTROL | KeyModifiers::ALT
}

fn handle_table_action(app: &mut AppState, action: KeyAction) {
    let len = app.store.state().filtered_users().len();
    let rpp = app.rows_per_page.max(1);
    match action {
        KeyAction::NextField => app.focus = app.focus.next(),
        KeyAction::PrevField => app.focus = app.focus.prev(),
        KeyAction::DeleteChar => {
            let field = app.focus;
            let mut value = app.store.state().filters().get(field).to_string();
            if value.pop().is_some() {
                edit_filter(app, field, value);
            }
        }
        KeyAction::MoveUp => app.selected_index = app.selected_index.saturating_sub(1),
        KeyAction::MoveDown => {
            if app.selected_index + 1 < len {
                app.selected_index += 1;
            }
        }
        KeyAction::PageUp => app.selected_index = app.selected_index.saturating_sub(rpp),
        KeyAction::PageDown => {
            app.selected_index = app
                .selected_index
                .saturating_add(rpp)
                .min(len.saturating_sub(1));
        }
        KeyAction::ToggleHelp => app.show_help = true,
        KeyAction::Quit | KeyAction::Refetch => {}
    }
}
