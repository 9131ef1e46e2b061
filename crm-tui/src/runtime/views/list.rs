use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_list_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.search_focused {
        handle_search_key(key, app);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('n') | KeyCode::Char('a') => {
            app.open_create_form(time::OffsetDateTime::now_utc());
        }
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_form(),
        KeyCode::Char('d') | KeyCode::Delete => app.enter_delete_confirm(),
        KeyCode::Char('t') | KeyCode::Right | KeyCode::Tab => app.cycle_type_filter(true),
        KeyCode::Char('T') | KeyCode::Left | KeyCode::BackTab => app.cycle_type_filter(false),
        KeyCode::Char('/') => app.search_focused = true,
        KeyCode::Char('c') => app.clear_filters(),
        KeyCode::Char('r') => enqueue_action(action_tx, Action::Reload),
        _ => {}
    }
}

fn handle_search_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input_clear();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input_char(c);
        }
        KeyCode::Backspace => app.search_input_backspace(),
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
            app.search_focused = false;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::action_queue::channel;
    use super::*;
    use crate::app::tests::loaded_app;
    use crate::app::{TypeFilter, View};
    use crm_api::domain::ActivityType;

    fn press(app: &mut App, code: KeyCode) -> Option<Action> {
        let (tx, mut rx) = channel();
        handle_list_key(KeyEvent::new(code, KeyModifiers::NONE), app, &tx);
        rx.try_recv().ok()
    }

    #[test]
    fn typing_in_search_filters_list() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('/'));
        assert!(app.search_focused);

        for c in "PRICING".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        // 'q' while searching is text, not quit
        press(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Esc);

        assert!(!app.search_focused);
        let ids: Vec<i64> = app.visible_activities().iter().map(|a| a.id).collect();
        assert_eq!(ids, [2, 3]);
    }

    #[test]
    fn type_filter_keys_cycle_and_clear() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.type_filter, TypeFilter::Only(ActivityType::Call));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.type_filter, TypeFilter::All);
        press(&mut app, KeyCode::Char('T'));
        assert_eq!(app.type_filter, TypeFilter::Only(ActivityType::Task));
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.type_filter, TypeFilter::All);
    }

    #[test]
    fn add_edit_delete_open_their_views() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.current_view, View::Form);
        assert!(app.form.as_ref().is_some_and(|f| !f.is_editing()));

        app.close_form();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.form.as_ref().and_then(|f| f.editing_id), Some(2));

        app.close_form();
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.current_view, View::ConfirmDelete);
    }

    #[test]
    fn ctrl_c_quits_instead_of_clearing_filters() {
        let mut app = loaded_app();
        app.cycle_type_filter(true);
        let (tx, _rx) = channel();

        handle_list_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &mut app, &tx);

        assert!(!app.running);
        assert_eq!(app.type_filter, TypeFilter::Only(ActivityType::Call));
    }

    #[test]
    fn ctrl_c_quits_while_searching() {
        let mut app = loaded_app();
        app.search_focused = true;
        let (tx, _rx) = channel();

        handle_list_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &mut app, &tx);

        assert!(!app.running);
        assert!(app.search_input.value.is_empty());
    }

    #[test]
    fn reload_key_enqueues_action() {
        let mut app = loaded_app();
        assert!(matches!(press(&mut app, KeyCode::Char('r')), Some(Action::Reload)));
    }
}
