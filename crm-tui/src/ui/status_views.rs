use super::utils::centered_rect;
use super::*;

pub fn render_loading(frame: &mut Frame, app: &mut App, body: Rect) {
    let area = centered_rect(30, 1, body);
    let throbber = throbber_widgets_tui::Throbber::default()
        .label("Loading activities...")
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(throbber_widgets_tui::WhichUse::Spin);
    frame.render_stateful_widget(throbber, area, &mut app.throbber_state);
}

pub fn render_load_error(frame: &mut Frame, message: &str, body: Rect) {
    let area = centered_rect(64, 9, body);
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Something went wrong",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[r] Retry", Style::default().fg(Color::Yellow)),
            Span::raw("    "),
            Span::styled("[q] Quit", Style::default().fg(Color::White)),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Error ")
                .padding(Padding::horizontal(1)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
