//! TUI rendering with ratatui
//!
//! Lays out the game screen from the shared components.

use super::app::{App, MessageStyle};
use super::components::{Button, ButtonSize, ButtonVariant, Card, CardVariant, Navbar};
use crate::core::{MAX_GUESS_LENGTH, RoundState, Verdict};
use crate::output::formatters::spaced_letters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navbar
            Constraint::Min(14),   // Game card
            Constraint::Length(7), // Messages and stats
            Constraint::Length(1), // Help line
        ])
        .split(f.area());

    render_navbar(f, app, chunks[0]);
    render_game_card(f, app, chunks[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);

    render_messages(f, app, bottom[0]);
    render_stats(f, app, bottom[1]);
    render_help(f, chunks[3]);
}

fn render_navbar(f: &mut Frame, app: &App, area: Rect) {
    let tagline = format!(
        "Unscramble the letters · {}",
        app.controller.vocabulary()
    );
    let navbar = Navbar::new("Word Scramble Challenge")
        .tagline(&tagline)
        .action(Span::styled("F1 hint", Style::default().fg(Color::DarkGray)))
        .action(Span::styled("Esc quit", Style::default().fg(Color::DarkGray)));
    f.render_widget(navbar, area);
}

fn render_game_card(f: &mut Frame, app: &App, area: Rect) {
    let round_label = format!("round {}", app.controller.stats().rounds_started);
    let card = Card::new()
        .title("Puzzle")
        .subtitle(&round_label)
        .variant(CardVariant::from_name("elevated"));
    let block = card.block();
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Scrambled word
            Constraint::Length(1), // Hint
            Constraint::Length(3), // Guess box
            Constraint::Length(1), // Buttons
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Feedback
        ])
        .split(inner);

    render_scrambled(f, app, chunks[0]);
    render_hint(f, app, chunks[1]);
    render_guess_box(f, app, chunks[2]);
    render_buttons(f, app, chunks[3]);
    render_feedback(f, app, chunks[5]);
}

fn render_scrambled(f: &mut Frame, app: &App, area: Rect) {
    let scrambled = app.controller.scrambled();
    let text = if scrambled.is_empty() {
        Line::from(Span::styled(
            "No words available",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            spaced_letters(scrambled),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let paragraph = Paragraph::new(vec![Line::default(), text]).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let line = app.hint.as_ref().map_or_else(
        || {
            Line::from(Span::styled(
                "Unscramble the word above.",
                Style::default().fg(Color::DarkGray),
            ))
        },
        |hint| {
            Line::from(vec![
                Span::styled(
                    format!("Hint ({}): ", hint.mode),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(hint.text.clone(), Style::default().fg(Color::Yellow)),
            ])
        },
    );
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_guess_box(f: &mut Frame, app: &App, area: Rect) {
    let accent = if app.guess_rejected() {
        Color::Red
    } else if app.controller.is_solved() {
        Color::Cyan
    } else {
        Color::Blue
    };

    let counter = format!(
        "{}/{MAX_GUESS_LENGTH}",
        app.controller.guess().chars().count()
    );
    let card = Card::new()
        .title("Your guess")
        .footer(&counter)
        .variant(CardVariant::from_name("outlined"))
        .accent(accent);

    let cursor = if app.controller.is_solved() { "" } else { "▏" };
    let input = Paragraph::new(Line::from(vec![
        Span::styled(
            app.controller.guess().to_string(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(cursor, Style::default().fg(Color::DarkGray)),
    ]))
    .block(card.block());

    f.render_widget(input, area);
}

fn render_buttons(f: &mut Frame, app: &App, area: Rect) {
    let submit = Button::new("Submit Guess ⏎").disabled(!app.controller.can_submit());
    let another = Button::new("Try another word ⇥")
        .variant(ButtonVariant::from_name("secondary"))
        .size(ButtonSize::from_name("sm"))
        .outline(true);

    let line = Line::from(vec![submit.span(), Span::raw("   "), another.span()]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_feedback(f: &mut Frame, app: &App, area: Rect) {
    let Some(feedback) = app.controller.feedback() else {
        return;
    };

    let color = match app.controller.state() {
        RoundState::Resolved(Verdict::Correct) => Color::Cyan,
        RoundState::Resolved(Verdict::Incorrect) => Color::Red,
        RoundState::AwaitingGuess => Color::Gray,
    };

    let mut lines = vec![Line::from(Span::styled(
        feedback,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    if let Some(score) = app.controller.score() {
        lines.push(Line::from(format!("+{score} points")));
    }

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
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

    let list = List::new(messages).block(Card::new().title("Messages").padded(false).block());
    f.render_widget(list, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.controller.stats();
    let best = stats
        .best_attempts
        .map_or_else(|| "-".to_string(), |best| best.to_string());

    let content = vec![
        Line::from(format!(
            "Solved:   {}/{}",
            stats.rounds_solved, stats.rounds_started
        )),
        Line::from(format!("Rate:     {:.0}%", stats.solve_rate())),
        Line::from(vec![
            Span::raw("Score:    "),
            Span::styled(
                stats.total_score.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Best:     {best} attempts")),
        Line::from(format!("Attempts: {}", app.controller.attempts())),
    ];

    let paragraph = Paragraph::new(content).block(Card::new().title("Session").block());
    f.render_widget(paragraph, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help =
        Paragraph::new("Enter: Submit | Ctrl+U: Clear | Tab: New Word | F1: Hint | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
