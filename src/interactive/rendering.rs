//! TUI rendering with ratatui
//!
//! Single screen: width selector, score, target digits and the answer field.

use super::app::{App, InputState, MessageStyle};
use crate::core::BitWidth;
use crate::output::formatters::place_values;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Width of one digit column in the target panel
const CELL: usize = 5;

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Target
            Constraint::Percentage(40), // Messages and stats
        ])
        .split(chunks[1]);

    render_target(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let width = app.engine.bit_width();
    let left = if width == BitWidth::MIN { " " } else { "◀" };
    let right = if width == BitWidth::MAX { " " } else { "▶" };

    let content = Line::from(vec![
        Span::styled(
            "🎯 BINARY QUIZ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{left} {width} {right}"),
            Style::default().fg(Color::Yellow),
        ),
    ]);

    let header = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_target<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let digits = app.engine.binary();
    let places = place_values(digits.len());

    let digit_spans: Vec<Span> = digits
        .chars()
        .map(|ch| {
            let style = if ch == '1' {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!("{ch:^CELL$}"), style)
        })
        .collect();

    let place_spans: Vec<Span> = places
        .iter()
        .map(|p| Span::styled(format!("{p:^CELL$}"), Style::default().fg(Color::DarkGray)))
        .collect();

    let content = vec![
        Line::from(format!("Score: {}", app.engine.score())).alignment(Alignment::Center),
        Line::from(""),
        Line::from(digit_spans).alignment(Alignment::Center),
        Line::from(place_spans).alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Range {}..={}",
                app.engine.range().start(),
                app.engine.range().end()
            ),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Target ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Accuracy gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_accuracy(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_accuracy<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let accuracy = app.stats.accuracy();

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Accuracy ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(accuracy.clamp(0.0, 100.0) as u16)
        .label(format!(
            "{accuracy:.0}% | {} of {} correct",
            app.stats.correct,
            app.stats.correct + app.stats.wrong
        ));

    f.render_widget(gauge, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
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

fn render_input<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (title, color) = match app.input_state {
        InputState::Neutral => (" Decimal number | Enter to check ", Color::Cyan),
        InputState::Wrong => (" Not quite - try again ", Color::Red),
        InputState::NotANumber => (" Digits only, please ", Color::Yellow),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let streak_text = format!(
        "Streak: {} | Best: {}",
        app.stats.streak, app.stats.best_streak
    );
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[0]);

    let attempts_text = format!("Attempts: {}", app.stats.attempts);
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[1]);

    let help = Paragraph::new("q/Esc: Quit | ←/→ or -/+: Bits | n: Skip | Enter: Check")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GuessEngine;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_header_and_score() {
        let app = App::new(GuessEngine::seeded(BitWidth::DEFAULT, 5));
        let text = screen_text(&app);

        assert!(text.contains("BINARY QUIZ"));
        assert!(text.contains("5 bits"));
        assert!(text.contains("Score: 0"));
        assert!(text.contains("Range 3..=15"));
    }

    #[test]
    fn renders_place_values_for_width() {
        let mut engine = GuessEngine::seeded(BitWidth::DEFAULT, 5);
        engine.configure(8).unwrap();
        let app = App::new(engine);
        let text = screen_text(&app);

        assert!(text.contains("128"));
        assert!(text.contains("64"));
    }

    #[test]
    fn renders_wrong_answer_title() {
        let mut app = App::new(GuessEngine::seeded(BitWidth::DEFAULT, 5));
        app.input_buffer = "0".to_string();
        app.submit();

        let text = screen_text(&app);
        assert!(text.contains("Not quite - try again"));
    }
}
