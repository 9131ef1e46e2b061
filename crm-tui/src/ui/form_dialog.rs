use super::activity_card::{type_color, type_glyph};
use super::utils::centered_rect;
use super::*;
use crate::app::{ActivityForm, FormField, TextInput};

pub fn render_form_dialog(frame: &mut Frame, app: &App) {
    let Some(form) = &app.form else {
        return;
    };

    let area = centered_rect(72, 26, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = Vec::new();
    for field in FormField::ALL {
        lines.extend(field_lines(app, form, field));
    }

    lines.push(Line::from(""));
    let submit_style = if form.is_submitting {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(vec![
        Span::styled("[Esc] Cancel", Style::default().fg(Color::White)),
        Span::raw("    "),
        Span::styled(format!("[Enter] {}", form.submit_label()), submit_style),
    ]));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(Span::styled(
                format!(" {} ", form.title()),
                Style::default().fg(Color::Yellow),
            ))
            .padding(Padding::horizontal(2)),
    );

    frame.render_widget(paragraph, area);
}

fn field_lines(app: &App, form: &ActivityForm, field: FormField) -> Vec<Line<'static>> {
    let focused = form.focused_field == field;
    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut label = vec![
        Span::styled(if focused { "› " } else { "  " }, label_style),
        Span::styled(field.label(), label_style),
    ];
    if field.is_required() {
        label.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }

    let mut lines = vec![Line::from(label)];
    lines.extend(value_lines(app, form, field, focused));

    if let Some(error) = form.error(field) {
        lines.push(Line::from(Span::styled(
            format!("    {}", error),
            Style::default().fg(Color::Red),
        )));
    }
    lines
}

fn value_lines(app: &App, form: &ActivityForm, field: FormField, focused: bool) -> Vec<Line<'static>> {
    let value_style = if form.error(field).is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    };

    match field {
        FormField::Type => {
            let line = match form.activity_type {
                Some(ty) => Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("{} ", type_glyph(ty)), Style::default().fg(type_color(ty))),
                    Span::styled(ty.label().to_string(), value_style),
                ]),
                None => placeholder("Select Type"),
            };
            vec![select_line(line, focused)]
        }
        FormField::Contact => {
            let line = match form.contact_id {
                Some(id) => {
                    let name = app
                        .contacts
                        .iter()
                        .find(|c| c.id == id)
                        .map(|c| c.name.clone())
                        .unwrap_or_else(|| format!("Contact #{}", id));
                    Line::from(vec![Span::raw("    "), Span::styled(name, value_style)])
                }
                None => placeholder("Select Contact"),
            };
            vec![select_line(line, focused)]
        }
        FormField::Deal => {
            let line = match form.deal_id {
                Some(id) => {
                    let name = app
                        .deals
                        .iter()
                        .find(|d| d.id == id)
                        .map(|d| d.name.clone())
                        .unwrap_or_else(|| format!("Deal #{}", id));
                    Line::from(vec![Span::raw("    "), Span::styled(name, value_style)])
                }
                None => placeholder("No Deal (Optional)"),
            };
            vec![select_line(line, focused)]
        }
        FormField::Date => text_lines(&form.date_input, focused, value_style, "YYYY-MM-DD HH:MM"),
        FormField::Description => text_lines(
            &form.description_input,
            focused,
            value_style,
            "Enter activity description...",
        ),
    }
}

fn placeholder(text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::raw("    "),
        Span::styled(text, Style::default().fg(Color::DarkGray)),
    ])
}

fn select_line(mut line: Line<'static>, focused: bool) -> Line<'static> {
    if focused {
        line.spans
            .push(Span::styled("  ◀ ▶", Style::default().fg(Color::DarkGray)));
    }
    line
}

/// Text value with a block cursor when focused. Embedded newlines become
/// separate lines.
fn text_lines(
    input: &TextInput,
    focused: bool,
    style: Style,
    placeholder_text: &'static str,
) -> Vec<Line<'static>> {
    if input.value.is_empty() && !focused {
        return vec![placeholder(placeholder_text)];
    }

    let display = if focused {
        let (before, after) = input.split_at_cursor();
        format!("{}█{}", before, after)
    } else {
        input.value.clone()
    };

    display
        .split('\n')
        .map(|line| Line::from(Span::styled(format!("    {}", line), style)))
        .collect()
}
