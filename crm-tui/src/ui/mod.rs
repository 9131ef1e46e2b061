use crate::app::{App, NotificationLevel, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap},
    Frame,
};

mod activity_card;
mod delete_dialog;
mod form_dialog;
mod list_view;
mod status_views;
pub(super) mod utils;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    let body = root[0];
    if app.is_loading {
        status_views::render_loading(frame, app, body);
    } else if let Some(message) = app.load_error.clone() {
        status_views::render_load_error(frame, &message, body);
    } else {
        list_view::render_list_view(frame, app, body);
        match app.current_view {
            View::List => {}
            View::Form => form_dialog::render_form_dialog(frame, app),
            View::ConfirmDelete => delete_dialog::render_delete_confirm_dialog(frame, app),
        }
    }

    render_footer(frame, app, root[1]);
}

/// Notification when one is showing, otherwise key hints for the current view.
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.notification {
        Some(n) => {
            let (icon, color) = match n.level {
                NotificationLevel::Success => ("✔", Color::Green),
                NotificationLevel::Error => ("✖", Color::Red),
            };
            Line::from(Span::styled(
                format!(" {} {}", icon, n.message),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        }
        None => Line::from(key_hints(app)),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn hint(key: &'static str, label: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::styled(label, Style::default().fg(Color::DarkGray)),
    ]
}

fn key_hints(app: &App) -> Vec<Span<'static>> {
    let pairs: &[(&str, &str)] = if app.is_loading {
        &[(" q", ": Quit")]
    } else if app.load_error.is_some() {
        &[(" r", ": Retry  "), ("q", ": Quit")]
    } else {
        match app.current_view {
            View::List if app.search_focused => &[
                (" type", ": Search  "),
                ("Ctrl+x", ": Clear  "),
                ("Esc/Enter", ": Done"),
            ],
            View::List => &[
                (" ↑↓", ": Navigate  "),
                ("n", ": Add  "),
                ("e", ": Edit  "),
                ("d", ": Delete  "),
                ("/", ": Search  "),
                ("t/T", ": Type  "),
                ("c", ": Clear Filters  "),
                ("r", ": Reload  "),
                ("q", ": Quit"),
            ],
            View::Form => &[
                (" Tab", ": Next field  "),
                ("←→", ": Change option  "),
                ("Alt+Enter", ": New line  "),
                ("Enter", ": Save  "),
                ("Esc", ": Cancel"),
            ],
            View::ConfirmDelete => &[(" y", ": Delete  "), ("n", ": Cancel")],
        }
    };

    pairs
        .iter()
        .flat_map(|&(key, label)| hint(key, label))
        .collect()
}
