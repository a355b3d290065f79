//! TUI rendering with ratatui
//!
//! Layout: gallows on the left, word and score on the right, the letter
//! board underneath, then the message log and a key-hint bar.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterState, MAX_MISSES, Outcome};
use crate::output::formatters::{gallows_frame, lives_display, spaced_mask};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(9),    // Gallows + word
            Constraint::Length(5), // Letter board
            Constraint::Length(5), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Gallows
            Constraint::Percentage(60), // Word + score
        ])
        .split(chunks[1]);

    render_gallows(f, app, main_chunks[0]);
    render_word_panel(f, app, main_chunks[1]);

    render_letter_board(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    // Round-over popup on top of everything
    if app.input_mode == InputMode::RoundOver {
        render_round_over_popup(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎩 HANGMAN")
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

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let misses = app.round.misses();

    // Drawing turns red as the figure nears completion
    let color = if misses >= MAX_MISSES - 1 {
        Color::Red
    } else if misses >= MAX_MISSES / 2 {
        Color::Yellow
    } else {
        Color::White
    };

    let paragraph = Paragraph::new(gallows_frame(misses))
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Gallows ({misses}/{MAX_MISSES}) "))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(paragraph, area);
}

fn render_word_panel(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "Hidden word",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            spaced_mask(&app.round.masked()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Lives: {}", lives_display(app.round.misses()))),
        Line::from(""),
        Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                app.session.score().to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "   ({} won, {} lost)",
                app.session.wins(),
                app.session.losses()
            )),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Round ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_letter_board(f: &mut Frame, app: &App, area: Rect) {
    // Three rows, like the original's letter-button grid
    let rows = ["abcdefghi", "jklmnopqr", "stuvwxyz"];

    let lines: Vec<Line> = rows
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|letter| {
                    let style = match app.round.letter_state(letter) {
                        LetterState::Hit => Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                        LetterState::Miss => Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT),
                        LetterState::Unused => Style::default().fg(Color::White),
                    };
                    [
                        Span::styled(letter.to_ascii_uppercase().to_string(), style),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .map(|m| {
            let style = match m.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Line::from(Span::styled(m.text.clone(), style)))
        })
        .collect();

    let list = List::new(messages).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let hint = match app.input_mode {
        InputMode::Guessing => "Type a letter to guess | Esc to quit",
        InputMode::RoundOver => "'n'/Enter: play again | 'q': quit",
    };

    let status = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(status, area);
}

fn render_round_over_popup(f: &mut Frame, app: &App) {
    let Some(summary) = &app.last_summary else {
        return;
    };

    let (title, verdict, color) = match summary.outcome {
        Outcome::Victory => (" You won! ", "🎉 Victory!", Color::Green),
        _ => (" Game over! ", "💀 Out of tries!", Color::Red),
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            verdict,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("The word was "),
            Span::styled(
                format!("\"{}\"", summary.word.to_uppercase()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(format!(
            "Score: {} ({})",
            app.session.score(),
            if summary.score_delta >= 0 { "+1" } else { "-1" }
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Play again? 'n'/Enter for a new round, 'q' to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let area = centered_rect(50, 11, f.area());
    let popup = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Center a fixed-size rect inside `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
