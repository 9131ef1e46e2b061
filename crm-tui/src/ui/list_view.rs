use super::activity_card::build_card;
use super::*;

pub fn render_list_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(body);

    render_header(frame, app, chunks[0]);
    render_filter_bar(frame, app, chunks[1]);
    render_cards(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Activities",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Track all interactions with contacts and deals",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(Block::default().padding(Padding::new(1, 1, 1, 0)));
    frame.render_widget(title, cols[0]);

    let border_color = if app.search_focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let search_text = if app.search_input.value.is_empty() && !app.search_focused {
        Span::styled("Search activities... (/)", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            app.search_input.value.clone(),
            Style::default().fg(Color::White),
        )
    };
    let search = Paragraph::new(Line::from(search_text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Search "),
    );
    frame.render_widget(search, cols[1]);

    if app.search_focused {
        let (before, _) = app.search_input.split_at_cursor();
        let x = cols[1].x + 1 + before.chars().count() as u16;
        let max_x = cols[1].x + cols[1].width.saturating_sub(2);
        frame.set_cursor_position((x.min(max_x), cols[1].y + 1));
    }
}

fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let filter_color = if app.type_filter.is_active() {
        Color::Yellow
    } else {
        Color::White
    };
    let total = app.activities.len();
    let shown = app.visible_activities().len();

    let line = Line::from(vec![
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.type_filter.label(),
            Style::default().fg(filter_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
        Span::raw("    "),
        Span::styled("[c]", Style::default().fg(Color::Yellow)),
        Span::styled(" Clear Filters", Style::default().fg(Color::DarkGray)),
        Span::raw("    "),
        Span::styled(
            format!("{} of {} activities", shown, total),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let bar = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Filter by Type ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(bar, area);
}

fn render_cards(frame: &mut Frame, app: &App, area: Rect) {
    let visible = app.visible_activities();
    if visible.is_empty() {
        render_empty_state(frame, app, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|activity| build_card(app, activity, area.width))
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(app.focused_index.min(visible.len() - 1)));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        )
        .highlight_symbol("▌ ")
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_empty_state(frame: &mut Frame, app: &App, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No activities found",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.empty_state_message(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[n]", Style::default().fg(Color::Yellow)),
            Span::raw(" Add Activity"),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
