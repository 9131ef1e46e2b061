use super::utils::centered_rect;
use super::*;

pub fn render_delete_confirm_dialog(frame: &mut Frame, app: &App) {
    let label = app
        .delete_context
        .as_ref()
        .map(|ctx| ctx.display_label.clone())
        .unwrap_or_default();

    let area = centered_rect(60, 10, frame.area());
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Are you sure you want to delete this activity?",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "This action cannot be undone.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] Delete", Style::default().fg(Color::Red)),
            Span::raw("    "),
            Span::styled("[n] Cancel", Style::default().fg(Color::White)),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Delete Activity ")
                .padding(Padding::horizontal(1)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
