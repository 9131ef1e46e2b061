use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent};

use super::action_queue::{Action, ActionTx};

mod confirm_delete;
mod form;
mod list;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if app.is_loading {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
            app.quit();
        }
        return;
    }

    if app.load_error.is_some() {
        handle_load_error_key(key, app, action_tx);
        return;
    }

    match app.current_view {
        View::List => list::handle_list_key(key, app, action_tx),
        View::Form => form::handle_form_key(key, app, action_tx),
        View::ConfirmDelete => confirm_delete::handle_confirm_delete_key(key, app, action_tx),
    }
}

fn handle_load_error_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => {
            enqueue_action(action_tx, Action::Reload);
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}
