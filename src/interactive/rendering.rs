//! TUI rendering with ratatui
//!
//! Candidate list on the left, letter inputs on the right.

use super::app::{App, Field, MessageStyle};
use crate::core::WORD_LENGTH;
use crate::engine::FetchStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30), // Word list
            Constraint::Percentage(70), // Letters
        ])
        .split(chunks[1]);

    render_word_list(f, app, main_chunks[0]);
    render_letters_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔎 WORDLE FILTER")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_word_list(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(" Available Words ({}) ", app.status_line());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::Green));

    let engine = &app.engine;
    if engine.full_words().is_empty() {
        let (text, color) = match engine.fetch_status() {
            FetchStatus::Failed(err) => (format!("FAILED: {err}"), Color::Red),
            _ => ("LOADING".to_string(), Color::DarkGray),
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let visible = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = engine
        .filtered_words()
        .skip(app.scroll)
        .take(visible)
        .map(|word| {
            ListItem::new(word.text().to_uppercase()).style(Style::default().fg(Color::White))
        })
        .collect();

    let list = if items.is_empty() {
        List::new(vec![
            ListItem::new("No matching words").style(Style::default().fg(Color::Red)),
        ])
    } else {
        List::new(items)
    };

    f.render_widget(list.block(block), area);
}

fn render_letters_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Grey
            Constraint::Length(3), // Green
            Constraint::Length(3), // Orange
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_field(f, app, Field::Grey, " Grey Letters ", Color::Gray, chunks[0]);
    render_slot_row(f, app, Field::Green, " Green ", Color::Green, chunks[1]);
    render_slot_row(f, app, Field::Orange, " Orange ", Color::Yellow, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_slot_row(
    f: &mut Frame,
    app: &App,
    field: fn(usize) -> Field,
    label: &str,
    color: Color,
    area: Rect,
) {
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, WORD_LENGTH as u32); WORD_LENGTH])
        .split(area);

    for (position, slot) in slots.iter().enumerate() {
        let title = format!("{label}{} ", position + 1);
        render_field(f, app, field(position), &title, color, *slot);
    }
}

fn render_field(f: &mut Frame, app: &App, field: Field, title: &str, color: Color, area: Rect) {
    let focused = app.focus == field;
    let border = if focused {
        BorderType::Double
    } else {
        BorderType::Rounded
    };
    let mut text = vec![Span::styled(
        app.field_text(field).to_uppercase(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if focused {
        text.push(Span::styled("▏", Style::default().fg(Color::White)));
    }

    let paragraph = Paragraph::new(Line::from(text)).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_type(border)
            .style(Style::default().fg(if focused { Color::White } else { color })),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let source = Paragraph::new(format!("Source: {}", app.source_description()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(source, chunks[0]);

    let help = Paragraph::new("TAB/←→: Field | ↑↓ PgUp PgDn: Scroll | Ctrl-R: Reload | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
