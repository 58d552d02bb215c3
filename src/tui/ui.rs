//! UI rendering for the TUI.

use std::time::Instant;

use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

use crate::core::Entry;
use crate::features::breathing::Phase;
use crate::features::mood::Mood;
use crate::tui::app::{on_off, App, Tab};

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let input_height = if app.input.is_some() { 3 } else { 0 };

    // Create layout: header, body, input, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(0),               // Body
            Constraint::Length(input_height), // Input
            Constraint::Length(1),            // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    match app.tab {
        Tab::Breathe => render_breathe(frame, app, chunks[1]),
        Tab::Mood => render_mood(frame, app, chunks[1]),
        Tab::Journal => render_journal(frame, app, chunks[1]),
        Tab::Gratitude => render_gratitude(frame, app, chunks[1]),
    }
    render_input(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

/// Color used for each phase.
const fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Inhale => Color::Cyan,
        Phase::Hold => Color::Yellow,
        Phase::Exhale => Color::Green,
    }
}

/// Render the tab bar.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let titles: Vec<&str> = Tab::ALL.iter().map(|t| t.title()).collect();

    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" mindful ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(tabs, area);
}

/// Render the breathing tab: phase, progress and saved sessions.
fn render_breathe(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Phase
            Constraint::Length(3), // Progress
            Constraint::Min(0),    // History
        ])
        .split(area);

    render_phase(frame, app, chunks[0]);
    render_progress(frame, app, chunks[1]);
    render_history(frame, app, chunks[2]);
}

/// Render the current phase, its prompt and the seconds left.
fn render_phase(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let controller = app.state.breathing();
    let snapshot = controller.snapshot();
    let cues = controller.cues();
    let color = phase_color(snapshot.phase);

    let border_style = if cues.is_flashing(Instant::now()) {
        Style::default().fg(Color::Black).bg(color)
    } else {
        Style::default().fg(color)
    };

    let state = if snapshot.active { "" } else { "  (paused)" };
    let lines = vec![
        Line::from(Span::styled(
            format!("{}{state}", snapshot.phase.display_name()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(snapshot.phase.prompt()),
        Line::from(Span::styled(
            format!(
                "{}s left  |  cycles {}",
                snapshot.remaining, snapshot.cycles
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            format!(
                "sound {}  |  vibration {}",
                on_off(cues.sound()),
                on_off(cues.vibration())
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let title = format!(
        " {}  ({}s cycle) ",
        snapshot.config,
        snapshot.config.cycle_seconds()
    );
    let phase = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(phase, area);
}

/// Render the phase progress gauge.
fn render_progress(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let snapshot = app.state.breathing().snapshot();
    let duration = snapshot.config.duration(snapshot.phase);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(phase_color(snapshot.phase)))
        .ratio(snapshot.progress.clamp(0.0, 1.0))
        .label(format!("{}/{duration}s", snapshot.elapsed));

    frame.render_widget(gauge, area);
}

/// Render saved sessions.
fn render_history(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let history = app.state.breathing_sessions();
    let items: Vec<ListItem<'_>> = history
        .iter()
        .map(|record| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}  ", record.saved_at_local().format("%H:%M:%S")),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(record.summary()),
            ]))
        })
        .collect();

    render_list(
        frame,
        app,
        area,
        items,
        format!(" Session History ({}) ", history.len()),
    );
}

/// Render the mood picker and check-ins.
fn render_mood(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let picker: Vec<Span<'_>> = Mood::ALL
        .iter()
        .map(|&mood| {
            let style = if mood == app.mood_choice {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Span::styled(format!(" {mood} "), style)
        })
        .collect();
    let title = app.state.moods().latest().map_or_else(
        || " How are you feeling? ".to_string(),
        |last| format!(" How are you feeling? (last: {}) ", last.mood),
    );
    let picker = Paragraph::new(Line::from(picker))
        .alignment(Alignment::Center)
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(picker, chunks[0]);

    let items: Vec<ListItem<'_>> = app
        .state
        .moods()
        .entries()
        .iter()
        .map(|entry| {
            let mut spans = vec![
                Span::styled(
                    format!("{}  ", entry.display_date()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(entry.mood.to_string()),
            ];
            if let Some(note) = &entry.note {
                spans.push(Span::raw(format!("  {note}")));
            }
            push_tags(&mut spans, &entry.tags);
            ListItem::new(Line::from(spans))
        })
        .collect();

    let summary = app.state.mood_summary();
    let title = match (summary.average, summary.most_common) {
        (Some(average), Some(mood)) => format!(
            " Check-ins ({})  average {average:.1}, mostly {mood} ",
            summary.count
        ),
        _ => " Check-ins (0) ".to_string(),
    };
    render_list(frame, app, chunks[1], items, title);
}

/// Render the journal, filtered by the active search.
fn render_journal(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let mood = app
        .journal_mood
        .map_or_else(|| "none".to_string(), |m| m.to_string());
    let filter = if app.journal_query.is_empty() {
        "all entries".to_string()
    } else {
        format!("matching \"{}\"", app.journal_query)
    };
    let info = Paragraph::new(format!("Mood for new entries: {mood}  |  Showing {filter}"))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(info, chunks[0]);

    let journal = app.state.journal();
    let items: Vec<ListItem<'_>> = app
        .journal_matches()
        .into_iter()
        .filter_map(|i| journal.entries().get(i))
        .map(|entry| {
            let mut spans = vec![Span::styled(
                format!("{}  ", entry.display_date()),
                Style::default().fg(Color::DarkGray),
            )];
            if let Some(mood) = entry.mood {
                spans.push(Span::raw(format!("{}  ", mood.emoji())));
            }
            spans.push(Span::raw(entry.text.clone()));
            push_tags(&mut spans, &entry.tags);
            ListItem::new(Line::from(spans))
        })
        .collect();

    render_list(
        frame,
        app,
        chunks[1],
        items,
        format!(" Journal ({}) ", journal.len()),
    );
}

/// Render the gratitude log with today's count and the top tags.
fn render_gratitude(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let gratitude = app.state.gratitude();
    let today = gratitude.on_date(Local::now().date_naive()).count();
    let mut tags: Vec<(String, usize)> = gratitude.tag_counts().into_iter().collect();
    tags.sort_by(|a, b| b.1.cmp(&a.1));
    let top = tags
        .iter()
        .take(3)
        .map(|(tag, count)| format!("#{tag} ({count})"))
        .collect::<Vec<_>>()
        .join(", ");
    let info = Paragraph::new(format!(
        "Today: {today}  |  Top tags: {}",
        if top.is_empty() { "none" } else { top.as_str() }
    ))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(info, chunks[0]);

    let items: Vec<ListItem<'_>> = gratitude
        .entries()
        .iter()
        .map(|entry| {
            let mut spans = vec![
                Span::styled(
                    format!("{}  ", entry.display_date()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(entry.text.clone()),
            ];
            push_tags(&mut spans, &entry.tags);
            ListItem::new(Line::from(spans))
        })
        .collect();

    render_list(
        frame,
        app,
        chunks[1],
        items,
        format!(" Grateful for ({}) ", gratitude.len()),
    );
}

/// Append tags in blue.
fn push_tags(spans: &mut Vec<Span<'_>>, tags: &[String]) {
    if !tags.is_empty() {
        let tags_str = tags
            .iter()
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join(" ");
        spans.push(Span::styled(
            format!("  {tags_str}"),
            Style::default().fg(Color::Blue),
        ));
    }
}

/// Render a bordered list with the selected row highlighted.
fn render_list(
    frame: &mut Frame<'_>,
    app: &App,
    area: Rect,
    items: Vec<ListItem<'_>>,
    title: String,
) {
    let has_items = !items.is_empty();
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    // Create list state for scrolling
    let mut state = ListState::default();
    if has_items {
        state.select(Some(app.selected));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the text input line.
fn render_input(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(input) = &app.input else {
        return;
    };

    let line = Paragraph::new(format!("{}_", input.buffer)).block(
        Block::default()
            .title(input.purpose.prompt())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );

    frame.render_widget(line, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or_else(|| app.tab.help());

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
