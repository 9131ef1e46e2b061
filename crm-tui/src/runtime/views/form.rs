use crate::app::{App, FormField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_form_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let Some(is_submitting) = app.form.as_ref().map(|f| f.is_submitting) else {
        app.close_form();
        return;
    };

    // Inputs are locked while a save is in flight.
    if is_submitting {
        return;
    }

    match key.code {
        KeyCode::Esc => {
            app.close_form();
            return;
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            submit(app, action_tx);
            return;
        }
        KeyCode::Enter if !key.modifiers.contains(KeyModifiers::ALT) => {
            submit(app, action_tx);
            return;
        }
        _ => {}
    }

    let App {
        form,
        contacts,
        deals,
        ..
    } = app;
    let Some(form) = form.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Enter => form.input_newline(),
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_previous(),
        KeyCode::Left if form.focused_field.is_select() => {
            form.cycle_option(false, &*contacts, &*deals);
        }
        KeyCode::Right | KeyCode::Char(' ') if form.focused_field.is_select() => {
            form.cycle_option(true, &*contacts, &*deals);
        }
        KeyCode::Left => form.input_move_cursor(true),
        KeyCode::Right => form.input_move_cursor(false),
        KeyCode::Backspace if form.focused_field.is_select() => form.clear_option(),
        KeyCode::Backspace => form.input_backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.input_char(c);
        }
        _ => {}
    }
}

/// Validate and, when the form is complete, hand the payload to the runtime.
fn submit(app: &mut App, action_tx: &ActionTx) {
    let offset = app.display_offset;
    let Some(form) = app.form.as_mut() else {
        return;
    };

    match form.validate(offset) {
        Some(payload) => {
            form.is_submitting = true;
            let editing_id = form.editing_id;
            enqueue_action(action_tx, Action::SaveActivity { editing_id, payload });
        }
        None => app.notify_error("Please fill in all required fields"),
    }
}
