//! Flashcard viewer screen
//!
//! Shows one card at a time with its position in the deck, a progress bar
//! and the navigation controls. The back side is revealed by flipping.

use crate::app::state::ViewState;
use crate::models::{language_name, Flashcard};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Viewer screen component; all data comes from [`ViewState`]
#[derive(Debug, Default)]
pub struct ViewerScreen;

impl ViewerScreen {
    pub fn new() -> Self {
        Self
    }

    /// Header line, e.g. "English → Spanish • 7 cards"
    pub fn deck_summary(state: &ViewState) -> String {
        format!(
            "{} → {} • {} cards",
            language_name(state.source_language()),
            language_name(state.target_language()),
            state.cards().len()
        )
    }

    /// Position line, e.g. "Card 3 of 7"
    pub fn position_label(state: &ViewState) -> String {
        format!(
            "Card {} of {}",
            state.current_index() + 1,
            state.cards().len()
        )
    }

    /// Render the viewer
    pub fn render(&self, f: &mut Frame, state: &ViewState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(4), // Title and summary
                Constraint::Length(1), // Position
                Constraint::Min(8),    // Card
                Constraint::Length(3), // Navigation
                Constraint::Length(3), // Progress
                Constraint::Length(3), // Help
            ])
            .split(f.size());

        self.render_title(f, chunks[0], state);

        match state.current_card() {
            Some(card) => {
                let position = Paragraph::new(Self::position_label(state))
                    .style(Style::default().fg(Color::Gray))
                    .alignment(Alignment::Center);
                f.render_widget(position, chunks[1]);
                self.render_card(f, chunks[2], card, state.is_flipped());
                self.render_navigation(f, chunks[3], state);
                self.render_progress(f, chunks[4], state);
            }
            None => self.render_empty_deck(f, chunks[2]),
        }

        self.render_help(f, chunks[5]);
    }

    fn render_title(&self, f: &mut Frame, area: Rect, state: &ViewState) {
        let text = vec![
            Line::from(Span::styled(
                "Your Generated Flashcards",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(Self::deck_summary(state)),
        ];
        let title = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(title, area);
    }

    fn render_card(&self, f: &mut Frame, area: Rect, card: &Flashcard, flipped: bool) {
        let mut lines = vec![Line::from("")];
        let (title, border) = if flipped {
            lines.push(Line::from(Span::styled(
                card.back.as_str(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )));
            if let Some(example) = card.example() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    example,
                    Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
                )));
            }
            ("Back", Color::Green)
        } else {
            lines.push(Line::from(Span::styled(
                card.front.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Press Space to reveal translation",
                Style::default().fg(Color::DarkGray),
            )));
            ("Front", Color::Cyan)
        };

        let card_widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            );
        f.render_widget(card_widget, area);
    }

    fn render_navigation(&self, f: &mut Frame, area: Rect, state: &ViewState) {
        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(50),
                Constraint::Percentage(25),
            ])
            .split(area);

        let button = |label: &'static str, enabled: bool| {
            let style = if enabled {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Paragraph::new(label)
                .style(style)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(style))
        };

        f.render_widget(button("← Prev", !state.is_first_card()), buttons[0]);
        f.render_widget(button("Flip Card", true), buttons[1]);
        f.render_widget(button("Next →", !state.is_last_card()), buttons[2]);
    }

    fn render_progress(&self, f: &mut Frame, area: Rect, state: &ViewState) {
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(state.progress().clamp(0.0, 1.0))
            .label(Self::position_label(state));
        f.render_widget(gauge, area);
    }

    fn render_empty_deck(&self, f: &mut Frame, area: Rect) {
        let text = vec![
            Line::from(""),
            Line::from("The service did not return any flashcards."),
            Line::from(""),
            Line::from(Span::styled(
                "Press Esc to go back and try a different topic",
                Style::default().fg(Color::Yellow),
            )),
        ];
        let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(paragraph, area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let key = |k: &'static str| {
            Span::styled(k, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        };
        let help_text = vec![Line::from(vec![
            key("←→"),
            Span::raw(" Navigate  "),
            key("Space"),
            Span::raw(" Flip  "),
            key("Esc"),
            Span::raw(" Back to Generator  "),
            key("Q"),
            Span::raw(" Quit"),
        ])];

        let help = Paragraph::new(help_text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        f.render_widget(help, area);
    }
}
