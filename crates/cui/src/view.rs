use crate::app::{App, ModalKind, ResultsView};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Alignment, Color, Line, Modifier, Style, Stylize};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use shoecount_core::{CountingSystem, Suit, TallySummary};

pub fn draw(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(12),
            Constraint::Length(8),
        ])
        .split(frame.area());

    draw_header(frame, root[0], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(root[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(4)])
        .split(middle[0]);

    draw_setup_or_run(frame, left[0], app);
    draw_results(frame, left[1], app);
    draw_card(frame, middle[1], app);
    draw_events(frame, root[2], app);

    if app.show_help {
        draw_help_popup(frame);
    }
    if app.modal.is_some() {
        draw_modal(frame, app);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!("Shoecount | Card Counting Practice | Hint: {}", app.hint());
    let summary = if app.session.is_active() {
        format!(
            "System: {}  Shoe: {} cards ({} decks)",
            app.session.system().label(),
            app.session.shoe_size(),
            app.session.shoe_size() / 52
        )
    } else {
        format!(
            "Decks: {}  System: {}",
            app.deck_entry,
            app.selected_system().label()
        )
    };
    let lines = vec![
        Line::from(title.bold()),
        Line::from(summary),
        Line::from(format!("Seed {} | Status: {}", app.seed, app.status_line)),
    ];
    let block = Block::default().borders(Borders::ALL).title("Overview");
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(paragraph, area);
}

fn draw_setup_or_run(frame: &mut Frame, area: Rect, app: &App) {
    if app.session.is_active() {
        let lines = vec![
            Line::from(format!("System: {}", app.session.system().label())),
            Line::from(format!("Shoe size: {}", app.session.shoe_size())),
            Line::from(""),
            Line::from("n  next card"),
            Line::from("r  show/hide results"),
            Line::from("q  quit"),
        ];
        let block = Block::default().borders(Borders::ALL).title("Run");
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(5)])
        .split(inner(area));
    let block = Block::default().borders(Borders::ALL).title("Setup");
    frame.render_widget(block, area);

    let entry = Paragraph::new(vec![
        Line::from(format!("Number of Decks: {}_", app.deck_entry)),
        Line::from("Counting System:"),
    ]);
    frame.render_widget(entry, rows[0]);

    let items: Vec<ListItem<'_>> = CountingSystem::ALL
        .iter()
        .map(|system| ListItem::new(system.label()))
        .collect();
    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");
    let mut state = ListState::default();
    state.select(Some(app.system_cursor));
    frame.render_stateful_widget(list, rows[1], &mut state);
}

fn draw_card(frame: &mut Frame, area: Rect, app: &App) {
    let label = match app.revealed {
        Some(card) => format!("Revealed Card: {card}"),
        None => "-".to_string(),
    };
    let face_style = match app.revealed.map(|card| card.suit) {
        Some(Suit::Hearts) | Some(Suit::Diamonds) => Style::default().fg(Color::Red),
        Some(_) => Style::default(),
        None => Style::default().fg(Color::DarkGray),
    };
    let mut lines = vec![Line::from(label), Line::from("")];
    for row in app.card_face_lines() {
        lines.push(Line::styled(row, face_style));
    }
    let block = Block::default().borders(Borders::ALL).title("Card");
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn draw_results(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Results");
    let lines = match app.results {
        None => vec![Line::from("hidden (press r)")],
        Some(ResultsView::Live) => live_lines(app.live_summary()),
        Some(ResultsView::Final(summary)) => final_lines(summary),
    };
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn live_lines(summary: TallySummary) -> Vec<Line<'static>> {
    vec![
        Line::from(format!("Running Count: {}", summary.running_count)),
        Line::from(format!("True Count: {:.2}", summary.true_count)),
        Line::from(format!("Cards Dealt: {}", summary.cards_dealt)),
        Line::from(format!("Cards Remaining: {}", summary.cards_remaining)),
    ]
}

fn final_lines(summary: TallySummary) -> Vec<Line<'static>> {
    vec![
        Line::from("Practice Complete!".bold()),
        Line::from(format!("Cards Dealt: {}", summary.cards_dealt)),
        Line::from(format!("Cards Remaining: {}", summary.cards_remaining)),
        Line::from(format!("Running Count: {}", summary.running_count)),
        Line::from(format!("True Count: {:.2}", summary.true_count)),
    ]
}

fn draw_events(frame: &mut Frame, area: Rect, app: &App) {
    let capacity = area.height.saturating_sub(2) as usize;
    let start = app.event_log.len().saturating_sub(capacity);
    let lines: Vec<Line<'_>> = app
        .event_log
        .iter()
        .skip(start)
        .map(|line| Line::from(line.clone()))
        .collect();
    let block = Block::default().borders(Borders::ALL).title("Events");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 50, frame.area());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from("q quit | ? help"),
        Line::from("idle: 0-9 edit deck count | up/down pick system | enter start"),
        Line::from("running: n/space/enter next card | r show or hide results"),
        Line::from("any key dismisses a notice"),
    ];
    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_modal(frame: &mut Frame, app: &App) {
    let Some(modal) = app.modal.as_ref() else {
        return;
    };
    let area = centered_rect(50, 28, frame.area());
    frame.render_widget(Clear, area);
    let border = match modal.kind {
        ModalKind::Info => Style::default().fg(Color::Green),
        ModalKind::Error => Style::default().fg(Color::Red),
    };
    let lines = vec![
        Line::from(modal.body.clone()),
        Line::from(""),
        Line::from("press any key"),
    ];
    let block = Block::default()
        .title(modal.title.clone())
        .borders(Borders::ALL)
        .border_style(border);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
