use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    // Header
    let filter: Vec<&str> = app.controller.filter().iter().collect();
    let filter_label = if filter.is_empty() {
        "all languages".to_string()
    } else {
        filter.join(", ")
    };
    let header = Line::from(vec![
        Span::styled("Folio", Style::default().fg(Color::Black).bg(Color::White)),
        Span::raw("  "),
        Span::styled(app.account.as_str(), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::raw(format!(
            "{} projects, fetched {}",
            app.controller.projects().len(),
            fmt_clock(app.fetched_at)
        )),
        Span::raw("  "),
        Span::styled(filter_label, Style::default().fg(Color::Yellow)),
    ]);
    frame.render_widget(
        Paragraph::new(header).block(Block::default().borders(Borders::BOTTOM)),
        chunks[0],
    );

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(0)])
        .split(chunks[1]);

    draw_languages(frame, app, body[0]);
    draw_cards(frame, app, body[1]);

    // Footer
    let mut hints = vec![
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" select  "),
        Span::styled("space", Style::default().fg(Color::Yellow)),
        Span::raw(" toggle  "),
        Span::styled("PgUp/PgDn", Style::default().fg(Color::Yellow)),
        Span::raw(" scroll  "),
    ];
    if app.surface.show_more_visible {
        hints.push(Span::styled("m", Style::default().fg(Color::Green)));
        hints.push(Span::raw(" show more  "));
    }
    hints.push(Span::styled("q", Style::default().fg(Color::Yellow)));
    hints.push(Span::raw(" quit"));
    frame.render_widget(
        Paragraph::new(Line::from(hints)).block(Block::default().borders(Borders::TOP)),
        chunks[2],
    );
}

fn draw_languages(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let lines: Vec<Line> = app
        .controller
        .selectors()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let mark = if s.checked { "[x] " } else { "[ ] " };
            let style = if i == app.selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(mark, style.fg(Color::Green)),
                Span::styled(s.tag.as_str(), style),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Languages")),
        area,
    );
}

fn draw_cards(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let title = format!(
        "Projects  {}/{}",
        app.visible_cards().len(),
        app.surface.cards.len()
    );
    let block = Block::default().borders(Borders::ALL).title(title);

    if let Some(msg) = &app.surface.placeholder {
        let p = Paragraph::new(Line::from(Span::styled(
            msg.as_str(),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )))
        .block(block);
        frame.render_widget(p, area);
        return;
    }

    let mut lines = Vec::new();
    for card in app.visible_cards() {
        let mut head = vec![Span::styled(
            card.title.as_str(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )];
        if let Some(lang) = &card.language {
            head.push(Span::raw("  "));
            head.push(Span::styled(lang.as_str(), Style::default().fg(Color::Cyan)));
        }
        lines.push(Line::from(head));
        if !card.description.is_empty() {
            lines.push(Line::from(card.description.as_str()));
        }
        lines.push(Line::from(vec![
            Span::styled("repo  ", Style::default().fg(Color::Gray)),
            Span::raw(card.repo_url.as_str()),
        ]));
        if let Some(demo) = &card.demo_url {
            lines.push(Line::from(vec![
                Span::styled("demo  ", Style::default().fg(Color::Gray)),
                Span::styled(demo.as_str(), Style::default().fg(Color::Green)),
            ]));
        }
        lines.push(Line::from(vec![
            Span::styled("image ", Style::default().fg(Color::Gray)),
            Span::styled(
                card.image.as_str(),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((app.scroll, 0))
            .block(block),
        area,
    );
}
