//! Application state management
//!
//! Owns the view state shared by every front end: which screen is showing,
//! the deck being studied, the viewer position and the generation status.
//! Also maps keyboard events to navigation actions.

use crate::error::user_friendly_message;
use crate::models::{Flashcard, GenerationRequest};
use crate::{LingoError, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, error, info, warn};

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Generation form
    #[default]
    Generator,
    /// Card viewer
    Flashcards,
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Move selection left (arrow left, h)
    Left,
    /// Move selection right (arrow right, l)
    Right,
    /// Confirm selection (Enter, Space)
    Select,
    /// Go back/cancel (Esc, Backspace)
    Back,
    /// Next item (Tab)
    Next,
    /// Previous item (Shift+Tab)
    Previous,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// View state controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    screen: Screen,
    cards: Vec<Flashcard>,
    current_index: usize,
    is_flipped: bool,
    error_message: Option<String>,
    is_generating: bool,
    source_language: String,
    target_language: String,
    should_quit: bool,
}

impl ViewState {
    /// Create a view state on the generator screen with the given languages
    pub fn new(source_language: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            screen: Screen::Generator,
            cards: Vec::new(),
            current_index: 0,
            is_flipped: false,
            error_message: None,
            is_generating: false,
            source_language: source_language.into(),
            target_language: target_language.into(),
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_flipped(&self) -> bool {
        self.is_flipped
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Card under the viewer, if the deck is not empty
    pub fn current_card(&self) -> Option<&Flashcard> {
        match self.screen {
            Screen::Flashcards => self.cards.get(self.current_index),
            Screen::Generator => None,
        }
    }

    pub fn is_first_card(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last_card(&self) -> bool {
        self.current_index + 1 >= self.cards.len()
    }

    /// Fraction of the deck reached, counting the current card
    pub fn progress(&self) -> f64 {
        if self.cards.is_empty() {
            0.0
        } else {
            (self.current_index + 1) as f64 / self.cards.len() as f64
        }
    }

    /// Accept a submission. Refused while another request is pending.
    ///
    /// Clears any previous error and records the request's languages for
    /// the viewer header.
    pub fn begin_generation(&mut self, request: &GenerationRequest) -> bool {
        if self.is_generating {
            debug!("submission ignored, a request is already pending");
            return false;
        }
        if self.screen != Screen::Generator {
            return false;
        }

        self.is_generating = true;
        self.error_message = None;
        self.source_language = request.source_language.clone();
        self.target_language = request.target_language.clone();
        true
    }

    /// Apply the submitter's outcome
    pub fn finish_generation(&mut self, outcome: Result<Vec<Flashcard>>) {
        self.is_generating = false;
        match outcome {
            Ok(cards) => {
                info!(cards = cards.len(), "entering flashcard viewer");
                self.show_cards(cards);
            }
            Err(err) => self.record_failure(&err),
        }
    }

    fn show_cards(&mut self, cards: Vec<Flashcard>) {
        self.cards = cards;
        self.current_index = 0;
        self.is_flipped = false;
        self.screen = Screen::Flashcards;
    }

    fn record_failure(&mut self, err: &LingoError) {
        if crate::error::is_server_reported(err) {
            warn!(error = %err, "flashcard generation failed");
        } else {
            error!(error = %err, "flashcard generation failed");
        }
        self.error_message = Some(user_friendly_message(err));
        self.screen = Screen::Generator;
    }

    /// Advance to the next card; no-op at the last card
    pub fn next_card(&mut self) {
        if self.screen == Screen::Flashcards && !self.is_last_card() {
            self.current_index += 1;
            self.is_flipped = false;
        }
    }

    /// Go back one card; no-op at the first card
    pub fn previous_card(&mut self) {
        if self.screen == Screen::Flashcards && !self.is_first_card() {
            self.current_index -= 1;
            self.is_flipped = false;
        }
    }

    pub fn flip_card(&mut self) {
        if self.screen == Screen::Flashcards {
            self.is_flipped = !self.is_flipped;
        }
    }

    /// Leave the viewer, discarding the deck
    pub fn back_to_generator(&mut self) {
        self.screen = Screen::Generator;
        self.error_message = None;
        self.cards.clear();
        self.current_index = 0;
        self.is_flipped = false;
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            // Quit keys
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            // Navigation keys
            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
            KeyCode::Left | KeyCode::Char('h') => NavigationAction::Left,
            KeyCode::Right | KeyCode::Char('l') => NavigationAction::Right,

            // Selection and confirmation
            KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,

            // Back/cancel
            KeyCode::Esc | KeyCode::Backspace => NavigationAction::Back,

            // Tab navigation
            KeyCode::Tab => NavigationAction::Next,
            KeyCode::BackTab => NavigationAction::Previous,

            _ => NavigationAction::None,
        }
    }

    /// Apply a navigation action while the viewer is showing
    pub fn handle_viewer_navigation(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Quit => self.quit(),
            NavigationAction::Back => self.back_to_generator(),
            NavigationAction::Right | NavigationAction::Down | NavigationAction::Next => {
                self.next_card()
            }
            NavigationAction::Left | NavigationAction::Up | NavigationAction::Previous => {
                self.previous_card()
            }
            NavigationAction::Select => self.flip_card(),
            NavigationAction::None => {}
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new("en", "es")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentFocus;

    fn request(source: &str, target: &str) -> GenerationRequest {
        GenerationRequest::new("travel", source, target, 7, ContentFocus::Vocabulary).unwrap()
    }

    fn deck(n: usize) -> Vec<Flashcard> {
        (0..n)
            .map(|i| Flashcard::new(format!("front {}", i), format!("back {}", i)))
            .collect()
    }

    fn browsing(n: usize) -> ViewState {
        let mut state = ViewState::default();
        assert!(state.begin_generation(&request("en", "es")));
        state.finish_generation(Ok(deck(n)));
        state
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::default();
        assert_eq!(state.screen(), Screen::Generator);
        assert!(state.cards().is_empty());
        assert_eq!(state.current_index(), 0);
        assert!(!state.is_flipped());
        assert!(state.error_message().is_none());
        assert!(!state.is_generating());
        assert_eq!(state.source_language(), "en");
        assert_eq!(state.target_language(), "es");
    }

    #[test]
    fn test_success_enters_viewer() {
        let mut state = ViewState::default();
        assert!(state.begin_generation(&request("en", "hi")));
        assert!(state.is_generating());
        assert_eq!(state.target_language(), "hi");

        state.finish_generation(Ok(deck(3)));
        assert!(!state.is_generating());
        assert_eq!(state.screen(), Screen::Flashcards);
        assert_eq!(state.cards().len(), 3);
        assert_eq!(state.current_card(), Some(&deck(3)[0]));
    }

    #[test]
    fn test_failure_stays_on_generator() {
        let mut state = ViewState::default();
        state.begin_generation(&request("en", "es"));
        state.finish_generation(Err(LingoError::RequestFailure {
            status: 401,
            message: "bad key".to_string(),
        }));

        assert_eq!(state.screen(), Screen::Generator);
        assert!(!state.is_generating());
        assert!(state.cards().is_empty());
        assert!(state.error_message().unwrap().contains("bad key"));
    }

    #[test]
    fn test_new_submission_clears_error() {
        let mut state = ViewState::default();
        state.begin_generation(&request("en", "es"));
        state.finish_generation(Err(LingoError::TransportFailure("refused".to_string())));
        assert!(state.error_message().is_some());

        state.begin_generation(&request("en", "es"));
        assert!(state.error_message().is_none());
    }

    #[test]
    fn test_busy_flag_refuses_second_submission() {
        let mut state = ViewState::default();
        assert!(state.begin_generation(&request("en", "es")));
        assert!(!state.begin_generation(&request("en", "fr")));
        assert_eq!(state.target_language(), "es");

        state.finish_generation(Ok(deck(1)));
        state.back_to_generator();
        assert!(state.begin_generation(&request("en", "fr")));
    }

    #[test]
    fn test_advance_stops_at_last_card() {
        let mut state = browsing(7);
        for _ in 0..10 {
            state.next_card();
        }
        assert_eq!(state.current_index(), 6);
        assert!(state.is_last_card());

        state.next_card();
        assert_eq!(state.current_index(), 6);
    }

    #[test]
    fn test_retreat_from_first_is_noop() {
        let mut state = browsing(7);
        state.previous_card();
        assert_eq!(state.current_index(), 0);

        state.next_card();
        state.next_card();
        state.previous_card();
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn test_flip_twice_restores() {
        let mut state = browsing(2);
        state.flip_card();
        assert!(state.is_flipped());
        state.flip_card();
        assert!(!state.is_flipped());
    }

    #[test]
    fn test_index_change_unflips() {
        let mut state = browsing(3);
        state.flip_card();
        state.next_card();
        assert!(!state.is_flipped());

        state.flip_card();
        state.previous_card();
        assert!(!state.is_flipped());
    }

    #[test]
    fn test_noop_navigation_keeps_flip() {
        let mut state = browsing(1);
        state.flip_card();
        state.next_card();
        state.previous_card();
        assert!(state.is_flipped());
    }

    #[test]
    fn test_back_to_generator_resets_viewer() {
        let mut state = browsing(4);
        state.next_card();
        state.flip_card();

        state.back_to_generator();
        assert_eq!(state.screen(), Screen::Generator);
        assert!(state.cards().is_empty());
        assert_eq!(state.current_index(), 0);
        assert!(!state.is_flipped());
        assert!(state.error_message().is_none());
        assert!(state.current_card().is_none());
    }

    #[test]
    fn test_empty_deck() {
        let mut state = browsing(0);
        assert_eq!(state.screen(), Screen::Flashcards);
        assert!(state.current_card().is_none());
        state.next_card();
        state.previous_card();
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn test_progress() {
        let mut state = browsing(4);
        assert_eq!(state.progress(), 0.25);
        state.next_card();
        state.next_card();
        state.next_card();
        assert_eq!(state.progress(), 1.0);
    }

    #[test]
    fn test_viewer_navigation() {
        let mut state = browsing(3);
        state.handle_viewer_navigation(NavigationAction::Right);
        assert_eq!(state.current_index(), 1);
        state.handle_viewer_navigation(NavigationAction::Select);
        assert!(state.is_flipped());
        state.handle_viewer_navigation(NavigationAction::Left);
        assert_eq!(state.current_index(), 0);
        state.handle_viewer_navigation(NavigationAction::Back);
        assert_eq!(state.screen(), Screen::Generator);
        state.handle_viewer_navigation(NavigationAction::Quit);
        assert!(state.should_quit());
    }

    #[test]
    fn test_key_to_navigation() {
        assert_eq!(
            ViewState::key_to_navigation(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            NavigationAction::Quit
        );
        assert_eq!(
            ViewState::key_to_navigation(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            NavigationAction::Quit
        );
        assert_eq!(
            ViewState::key_to_navigation(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)),
            NavigationAction::Right
        );
        assert_eq!(
            ViewState::key_to_navigation(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE)),
            NavigationAction::Left
        );
        assert_eq!(
            ViewState::key_to_navigation(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)),
            NavigationAction::Select
        );
        assert_eq!(
            ViewState::key_to_navigation(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            NavigationAction::Back
        );
        assert_eq!(
            ViewState::key_to_navigation(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            NavigationAction::Next
        );
        assert_eq!(
            ViewState::key_to_navigation(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            NavigationAction::Previous
        );
        assert_eq!(
            ViewState::key_to_navigation(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
            NavigationAction::None
        );
    }
}
