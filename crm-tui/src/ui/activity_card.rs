use crm_api::domain::{Activity, ActivityType};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

use crate::app::App;
use crate::time_utils::format_card_date;

const INDENT: &str = "    ";

pub fn type_glyph(activity_type: ActivityType) -> &'static str {
    match activity_type {
        ActivityType::Call => "☎",
        ActivityType::Email => "✉",
        ActivityType::Meeting => "▦",
        ActivityType::Note => "✎",
        ActivityType::Task => "☑",
    }
}

pub fn type_color(activity_type: ActivityType) -> Color {
    match activity_type {
        ActivityType::Call => Color::Blue,
        ActivityType::Email => Color::Green,
        ActivityType::Meeting => Color::Magenta,
        ActivityType::Note => Color::Gray,
        ActivityType::Task => Color::Rgb(234, 88, 12),
    }
}

/// Multi-line list entry for one activity: type badge and date, the
/// description, then the contact and deal it belongs to.
pub fn build_card(app: &App, activity: &Activity, width: u16) -> ListItem<'static> {
    let color = type_color(activity.activity_type);
    let date = format_card_date(activity.date.to_offset(app.display_offset));

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{} ", type_glyph(activity.activity_type)),
            Style::default().fg(color),
        ),
        Span::styled(
            format!(" {} ", activity.activity_type.label()),
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(date, Style::default().fg(Color::DarkGray)),
    ])];

    let text_width = (width as usize).saturating_sub(INDENT.len() + 4).max(10);
    let description = activity.description.as_deref().unwrap_or_default();
    for line in description.lines() {
        for chunk in wrap_line(line, text_width) {
            lines.push(Line::from(Span::styled(
                format!("{}{}", INDENT, chunk),
                Style::default().fg(Color::White),
            )));
        }
    }

    let mut refs = vec![
        Span::raw(INDENT),
        Span::styled("◉ ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.contact_name(activity), Style::default().fg(Color::Cyan)),
    ];
    if let Some(deal) = app.deal_name(activity) {
        refs.push(Span::styled("   $ ", Style::default().fg(Color::DarkGray)));
        refs.push(Span::styled(deal, Style::default().fg(Color::Green)));
    }
    lines.push(Line::from(refs));
    lines.push(Line::from(""));

    ListItem::new(lines)
}

/// Word-wrap a single line to `width` characters. Words longer than the
/// width are split.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if line.trim().is_empty() {
        return vec![String::new()];
    }

    let mut out = Vec::new();
    let mut current = String::new();
    for word in line.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            out.push(word.drain(..width).collect());
        }
        let word: String = word.into_iter().collect();
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap_line("the quick brown fox jumps", 10),
            ["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn splits_words_longer_than_width() {
        assert_eq!(wrap_line("abcdefghij xy", 4), ["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn keeps_blank_lines() {
        assert_eq!(wrap_line("   ", 10), [""]);
    }
}
