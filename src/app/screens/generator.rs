//! Generator screen implementation
//!
//! The flashcard request form: free text input, language selectors with
//! drop-down menus, card count and content focus.

use crate::app::state::ViewState;
use crate::models::{
    language_index, language_name, ContentFocus, GenerationRequest, LANGUAGES, MAX_CARD_COUNT,
    MIN_CARD_COUNT,
};
use crate::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

const DEFAULT_CARD_COUNT: u8 = 10;

/// Represents a single selectable field in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Text,
    SourceLanguage,
    TargetLanguage,
    CardCount,
    Focus,
    Generate,
}

impl FormField {
    fn all() -> Vec<Self> {
        vec![
            Self::Text,
            Self::SourceLanguage,
            Self::TargetLanguage,
            Self::CardCount,
            Self::Focus,
            Self::Generate,
        ]
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Text => "Topic, Words, or Text",
            Self::SourceLanguage => "Source Language",
            Self::TargetLanguage => "Target Language",
            Self::CardCount => "Number of Flashcards",
            Self::Focus => "Content Focus",
            Self::Generate => "Generate Flashcards",
        }
    }

    fn has_dropdown(&self) -> bool {
        matches!(
            self,
            Self::SourceLanguage | Self::TargetLanguage | Self::Focus
        )
    }
}

/// What the form asks the application to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorEvent {
    /// Submit this request
    Submit(GenerationRequest),
    /// Leave the application
    Quit,
}

/// Generator form component
#[derive(Debug)]
pub struct GeneratorScreen {
    input_text: String,
    source_language: String,
    target_language: String,
    card_count: u8,
    focus: ContentFocus,
    fields: Vec<FormField>,
    selected_field_index: usize,
    dropdown_state: ListState,
    is_dropdown_active: bool,
}

impl GeneratorScreen {
    /// Create a form with its own defaults (English to Hindi, ten cards)
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            source_language: "en".to_string(),
            target_language: "hi".to_string(),
            card_count: DEFAULT_CARD_COUNT,
            focus: ContentFocus::default(),
            fields: FormField::all(),
            selected_field_index: 0,
            dropdown_state: ListState::default(),
            is_dropdown_active: false,
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    pub fn card_count(&self) -> u8 {
        self.card_count
    }

    pub fn focus(&self) -> ContentFocus {
        self.focus
    }

    pub fn selected_field(&self) -> FormField {
        self.fields[self.selected_field_index]
    }

    /// Submission needs some text and no request in flight
    pub fn can_submit(&self, is_generating: bool) -> bool {
        !self.input_text.trim().is_empty() && !is_generating
    }

    /// Build a fresh request from the current field values
    pub fn to_request(&self) -> Result<GenerationRequest> {
        GenerationRequest::new(
            self.input_text.clone(),
            self.source_language.clone(),
            self.target_language.clone(),
            self.card_count,
            self.focus,
        )
    }

    /// Handle key events for the form
    pub fn handle_key_event(&mut self, key: KeyEvent, is_generating: bool) -> Option<GeneratorEvent> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(GeneratorEvent::Quit);
        }

        if self.is_dropdown_active {
            self.handle_dropdown_events(key);
            return None;
        }

        match key.code {
            KeyCode::Up | KeyCode::BackTab => self.select_previous_field(),
            KeyCode::Down | KeyCode::Tab => self.select_next_field(),
            KeyCode::Esc => return Some(GeneratorEvent::Quit),
            KeyCode::Left => self.adjust_selected(false),
            KeyCode::Right => self.adjust_selected(true),
            KeyCode::Enter
                if key.modifiers.contains(KeyModifiers::ALT)
                    && self.selected_field() == FormField::Text =>
            {
                self.input_text.push('\n');
            }
            KeyCode::Enter => return self.activate_selected(is_generating),
            KeyCode::Backspace if self.selected_field() == FormField::Text => {
                self.input_text.pop();
            }
            // Control and Alt chords are shortcuts, not text
            KeyCode::Char(c)
                if self.selected_field() == FormField::Text
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input_text.push(c);
            }
            _ => {}
        }
        None
    }

    fn activate_selected(&mut self, is_generating: bool) -> Option<GeneratorEvent> {
        let field = self.selected_field();
        match field {
            FormField::Text | FormField::CardCount => self.select_next_field(),
            _ if field.has_dropdown() => self.open_dropdown(),
            FormField::Generate => {
                if !self.can_submit(is_generating) {
                    return None;
                }
                return self.to_request().ok().map(GeneratorEvent::Submit);
            }
            _ => {}
        }
        None
    }

    fn handle_dropdown_events(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.select_previous_option(),
            KeyCode::Down => self.select_next_option(),
            KeyCode::Enter => self.confirm_selection(),
            KeyCode::Esc => self.is_dropdown_active = false,
            _ => {}
        }
    }

    fn select_previous_field(&mut self) {
        if self.selected_field_index > 0 {
            self.selected_field_index -= 1;
        }
    }

    fn select_next_field(&mut self) {
        if self.selected_field_index < self.fields.len() - 1 {
            self.selected_field_index += 1;
        }
    }

    fn open_dropdown(&mut self) {
        let current = match self.selected_field() {
            FormField::SourceLanguage => language_index(&self.source_language),
            FormField::TargetLanguage => language_index(&self.target_language),
            FormField::Focus => ContentFocus::all().iter().position(|f| *f == self.focus),
            _ => None,
        };
        self.dropdown_state.select(Some(current.unwrap_or(0)));
        self.is_dropdown_active = true;
    }

    fn select_previous_option(&mut self) {
        let selected = self.dropdown_state.selected().unwrap_or(0);
        if selected > 0 {
            self.dropdown_state.select(Some(selected - 1));
        }
    }

    fn select_next_option(&mut self) {
        let count = self.get_current_options().len();
        let selected = self.dropdown_state.selected().unwrap_or(0);
        if selected + 1 < count {
            self.dropdown_state.select(Some(selected + 1));
        }
    }

    fn confirm_selection(&mut self) {
        let selected_index = self.dropdown_state.selected().unwrap_or(0);
        match self.selected_field() {
            FormField::SourceLanguage => {
                if let Some(lang) = LANGUAGES.get(selected_index) {
                    self.source_language = lang.code.to_string();
                }
            }
            FormField::TargetLanguage => {
                if let Some(lang) = LANGUAGES.get(selected_index) {
                    self.target_language = lang.code.to_string();
                }
            }
            FormField::Focus => {
                if let Some(focus) = ContentFocus::all().get(selected_index) {
                    self.focus = *focus;
                }
            }
            _ => {}
        }
        self.is_dropdown_active = false;
    }

    /// Left/Right changes the card count by one or cycles a selector
    fn adjust_selected(&mut self, forward: bool) {
        match self.selected_field() {
            FormField::CardCount => {
                self.card_count = if forward {
                    (self.card_count + 1).min(MAX_CARD_COUNT)
                } else {
                    self.card_count.saturating_sub(1).max(MIN_CARD_COUNT)
                };
            }
            FormField::SourceLanguage => {
                self.source_language = cycle_language(&self.source_language, forward);
            }
            FormField::TargetLanguage => {
                self.target_language = cycle_language(&self.target_language, forward);
            }
            FormField::Focus => {
                let options = ContentFocus::all();
                let current = options.iter().position(|f| *f == self.focus).unwrap_or(0);
                self.focus = options[step(current, options.len(), forward)];
            }
            _ => {}
        }
    }

    fn get_current_options(&self) -> Vec<String> {
        match self.selected_field() {
            FormField::SourceLanguage | FormField::TargetLanguage => {
                LANGUAGES.iter().map(|l| l.name.to_string()).collect()
            }
            FormField::Focus => ContentFocus::all()
                .iter()
                .map(|f| f.label().to_string())
                .collect(),
            _ => Vec::new(),
        }
    }

    fn get_field_value(&self, field: FormField) -> String {
        match field {
            FormField::Text => self.input_text.clone(),
            FormField::SourceLanguage => language_name(&self.source_language).to_string(),
            FormField::TargetLanguage => language_name(&self.target_language).to_string(),
            FormField::CardCount => format!(
                "< {} >   ({}-{})",
                self.card_count, MIN_CARD_COUNT, MAX_CARD_COUNT
            ),
            FormField::Focus => self.focus.label().to_string(),
            FormField::Generate => String::new(),
        }
    }

    /// Render the generator screen
    pub fn render(&mut self, frame: &mut Frame, state: &ViewState) {
        let banner_height = if state.error_message().is_some() { 3 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(4),             // Title
                Constraint::Length(banner_height), // Error banner
                Constraint::Min(0),                // Form
                Constraint::Length(3),             // Help text
            ])
            .split(frame.size());

        self.render_title(frame, chunks[0]);
        if let Some(message) = state.error_message() {
            render_error(frame, chunks[1], message);
        }
        self.render_fields(frame, chunks[2], state.is_generating());
        self.render_help(frame, chunks[3]);

        if self.is_dropdown_active {
            self.render_dropdown(frame, chunks[2]);
        }
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let text = vec![
            Line::from(Span::styled(
                "Multilingual Flashcard Generator",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from("Generate multilingual flashcards with AI-powered translations"),
        ];
        let title = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title, area);
    }

    fn render_fields(&self, frame: &mut Frame, area: Rect, is_generating: bool) {
        let constraints: Vec<Constraint> = self
            .fields
            .iter()
            .map(|f| match f {
                FormField::Text => Constraint::Min(5),
                _ => Constraint::Length(3),
            })
            .collect();
        let field_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (i, field) in self.fields.iter().enumerate() {
            let selected = i == self.selected_field_index;
            let border_style = if selected {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };

            let widget = match field {
                FormField::Generate => {
                    let (label, style) = if is_generating {
                        ("Generating Flashcards...", Style::default().fg(Color::Yellow))
                    } else if self.can_submit(false) {
                        let style = if selected {
                            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().add_modifier(Modifier::BOLD)
                        };
                        (field.title(), style)
                    } else {
                        (field.title(), Style::default().fg(Color::DarkGray))
                    };
                    Paragraph::new(label)
                        .style(style)
                        .alignment(Alignment::Center)
                        .block(Block::default().borders(Borders::ALL).border_style(border_style))
                }
                FormField::Text => {
                    let mut value = self.get_field_value(*field);
                    if selected {
                        value.push('_');
                    }
                    let placeholder = value.is_empty();
                    let text = if placeholder {
                        "Enter a topic (e.g., 'travel vocabulary'), list of words, or a paragraph of text...".to_string()
                    } else {
                        value
                    };
                    Paragraph::new(text)
                        .style(if placeholder {
                            Style::default().fg(Color::DarkGray)
                        } else {
                            Style::default()
                        })
                        .wrap(Wrap { trim: false })
                        .block(
                            Block::default()
                                .borders(Borders::ALL)
                                .border_style(border_style)
                                .title(field.title()),
                        )
                }
                _ => Paragraph::new(self.get_field_value(*field)).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border_style)
                        .title(field.title()),
                ),
            };
            frame.render_widget(widget, field_chunks[i]);
        }
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let help_text = match self.selected_field() {
            FormField::Text => "Type to edit | Alt+Enter: New line | ↑↓/Tab: Navigate | Enter: Next field | Esc: Quit",
            FormField::CardCount => "←→: Adjust | ↑↓/Tab: Navigate | Esc: Quit",
            FormField::Generate => "Enter: Generate | ↑↓/Tab: Navigate | Esc: Quit",
            _ => "Enter: Choose | ←→: Cycle | ↑↓/Tab: Navigate | Esc: Quit",
        };
        let help = Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        frame.render_widget(help, area);
    }

    fn render_dropdown(&mut self, frame: &mut Frame, area: Rect) {
        let options = self.get_current_options();
        let items: Vec<ListItem> = options.iter().map(|o| ListItem::new(o.as_str())).collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.selected_field().title()),
            )
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");

        let list_height = (options.len() + 2).min(12) as u16;
        let list_area = centered_rect(50, list_height, area);

        frame.render_widget(Clear, list_area);
        frame.render_stateful_widget(list, list_area, &mut self.dropdown_state);
    }
}

impl Default for GeneratorScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let banner = Paragraph::new(format!("! {}", message))
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(banner, area);
}

fn step(current: usize, len: usize, forward: bool) -> usize {
    if forward {
        (current + 1) % len
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

fn cycle_language(code: &str, forward: bool) -> String {
    let current = language_index(code).unwrap_or(0);
    LANGUAGES[step(current, LANGUAGES.len(), forward)]
        .code
        .to_string()
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(screen: &mut GeneratorScreen, code: KeyCode) -> Option<GeneratorEvent> {
        screen.handle_key_event(KeyEvent::from(code), false)
    }

    fn type_text(screen: &mut GeneratorScreen, text: &str) {
        for c in text.chars() {
            press(screen, KeyCode::Char(c));
        }
    }

    fn go_to(screen: &mut GeneratorScreen, field: FormField) {
        while screen.selected_field() != field {
            press(screen, KeyCode::Down);
        }
    }

    #[test]
    fn test_form_defaults() {
        let screen = GeneratorScreen::new();
        assert_eq!(screen.source_language(), "en");
        assert_eq!(screen.target_language(), "hi");
        assert_eq!(screen.card_count(), 10);
        assert_eq!(screen.focus(), ContentFocus::Vocabulary);
        assert_eq!(screen.selected_field(), FormField::Text);
    }

    #[test]
    fn test_typing_edits_text() {
        let mut screen = GeneratorScreen::new();
        type_text(&mut screen, "travel vocabularyq");
        press(&mut screen, KeyCode::Backspace);
        assert_eq!(screen.input_text(), "travel vocabulary");
    }

    #[test]
    fn test_alt_enter_inserts_newline() {
        let mut screen = GeneratorScreen::new();
        type_text(&mut screen, "hello");
        let alt_enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT);
        assert_eq!(screen.handle_key_event(alt_enter, false), None);
        type_text(&mut screen, "goodbye");
        assert_eq!(screen.input_text(), "hello\ngoodbye");
        assert_eq!(screen.selected_field(), FormField::Text);

        press(&mut screen, KeyCode::Enter);
        assert_eq!(screen.selected_field(), FormField::SourceLanguage);
    }

    #[test]
    fn test_control_chords_do_not_type() {
        let mut screen = GeneratorScreen::new();
        type_text(&mut screen, "abc");
        screen.handle_key_event(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL), false);
        screen.handle_key_event(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT), false);
        assert_eq!(screen.input_text(), "abc");

        screen.handle_key_event(KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT), false);
        assert_eq!(screen.input_text(), "abcD");
    }

    #[test]
    fn test_input_survives_submit() {
        let mut screen = GeneratorScreen::new();
        type_text(&mut screen, "market");
        go_to(&mut screen, FormField::Generate);
        assert!(matches!(
            press(&mut screen, KeyCode::Enter),
            Some(GeneratorEvent::Submit(_))
        ));
        assert_eq!(screen.input_text(), "market");
        assert_eq!(screen.target_language(), "hi");
    }

    #[test]
    fn test_submit_requires_text() {
        let mut screen = GeneratorScreen::new();
        assert!(!screen.can_submit(false));
        go_to(&mut screen, FormField::Generate);
        assert_eq!(press(&mut screen, KeyCode::Enter), None);
    }

    #[test]
    fn test_submit_disabled_while_generating() {
        let mut screen = GeneratorScreen::new();
        type_text(&mut screen, "food");
        assert!(screen.can_submit(false));
        assert!(!screen.can_submit(true));

        go_to(&mut screen, FormField::Generate);
        let event = screen.handle_key_event(KeyEvent::from(KeyCode::Enter), true);
        assert_eq!(event, None);
    }

    #[test]
    fn test_submit_builds_request() {
        let mut screen = GeneratorScreen::new();
        type_text(&mut screen, "at the market");
        go_to(&mut screen, FormField::Generate);

        match press(&mut screen, KeyCode::Enter) {
            Some(GeneratorEvent::Submit(request)) => {
                assert_eq!(request.input_text, "at the market");
                assert_eq!(request.source_language, "en");
                assert_eq!(request.target_language, "hi");
                assert_eq!(request.card_count, 10);
                assert_eq!(request.focus, ContentFocus::Vocabulary);
            }
            other => panic!("expected submit, got {:?}", other),
        }
    }

    #[test]
    fn test_card_count_is_clamped() {
        let mut screen = GeneratorScreen::new();
        go_to(&mut screen, FormField::CardCount);
        for _ in 0..30 {
            press(&mut screen, KeyCode::Right);
        }
        assert_eq!(screen.card_count(), MAX_CARD_COUNT);
        for _ in 0..30 {
            press(&mut screen, KeyCode::Left);
        }
        assert_eq!(screen.card_count(), MIN_CARD_COUNT);
    }

    #[test]
    fn test_language_dropdown_selection() {
        let mut screen = GeneratorScreen::new();
        go_to(&mut screen, FormField::TargetLanguage);
        press(&mut screen, KeyCode::Enter);
        assert!(screen.is_dropdown_active);
        assert_eq!(screen.dropdown_state.selected(), language_index("hi"));

        // Hindi -> Spanish
        press(&mut screen, KeyCode::Down);
        press(&mut screen, KeyCode::Enter);
        assert!(!screen.is_dropdown_active);
        assert_eq!(screen.target_language(), "es");
    }

    #[test]
    fn test_dropdown_escape_keeps_value() {
        let mut screen = GeneratorScreen::new();
        go_to(&mut screen, FormField::Focus);
        press(&mut screen, KeyCode::Enter);
        press(&mut screen, KeyCode::Down);
        assert_eq!(press(&mut screen, KeyCode::Esc), None);
        assert_eq!(screen.focus(), ContentFocus::Vocabulary);
    }

    #[test]
    fn test_focus_cycles_with_arrows() {
        let mut screen = GeneratorScreen::new();
        go_to(&mut screen, FormField::Focus);
        press(&mut screen, KeyCode::Left);
        assert_eq!(screen.focus(), ContentFocus::Conversation);
        press(&mut screen, KeyCode::Right);
        assert_eq!(screen.focus(), ContentFocus::Vocabulary);
    }

    #[test]
    fn test_escape_and_ctrl_c_quit() {
        let mut screen = GeneratorScreen::new();
        assert_eq!(press(&mut screen, KeyCode::Esc), Some(GeneratorEvent::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(screen.handle_key_event(ctrl_c, false), Some(GeneratorEvent::Quit));
    }
}
