//! Main application controller
//!
//! Runs the draw/event loop, forwards key presses to the active screen and
//! runs generation requests on a background task.

use crate::{
    app::{
        screens::{GeneratorEvent, GeneratorScreen, ViewerScreen},
        state::{Screen, ViewState},
        tui::Tui,
    },
    client::FlashcardClient,
    config::AppConfig,
    models::{Flashcard, GenerationRequest},
    LingoError, Result,
};
use crossterm::event::KeyEvent;
use tokio::sync::mpsc;
use tracing::{debug, info};

type Outcome = Result<Vec<Flashcard>>;

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Screen, deck and viewer position
    state: ViewState,
    /// Screen components
    generator_screen: GeneratorScreen,
    viewer_screen: ViewerScreen,
    /// Generation service client
    client: FlashcardClient,
    /// Completed generation requests
    outcome_tx: mpsc::Sender<Outcome>,
    outcome_rx: mpsc::Receiver<Outcome>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: &AppConfig) -> Result<Self> {
        let (outcome_tx, outcome_rx) = mpsc::channel(1);
        Ok(Self {
            tui: Tui::new()?,
            state: ViewState::new(&config.source_language, &config.target_language),
            generator_screen: GeneratorScreen::new(),
            viewer_screen: ViewerScreen::new(),
            client: FlashcardClient::new(&config.endpoint)?,
            outcome_tx,
            outcome_rx,
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui
            .init()
            .map_err(|e| LingoError::TuiError(format!("Failed to initialize terminal: {}", e)))
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        info!(endpoint = %self.client.endpoint(), "starting interactive session");
        while !self.state.should_quit() {
            if let Ok(outcome) = self.outcome_rx.try_recv() {
                self.state.finish_generation(outcome);
            }
            self.draw()?;
            if let Some(key) = self.tui.next_key()? {
                self.handle_key(key);
            }
        }
        self.tui.restore()?;
        Ok(())
    }

    /// Draw the current screen
    fn draw(&mut self) -> Result<()> {
        let state = &self.state;
        let generator = &mut self.generator_screen;
        let viewer = &self.viewer_screen;
        self.tui.draw(|f| match state.screen() {
            Screen::Generator => generator.render(f, state),
            Screen::Flashcards => viewer.render(f, state),
        })?;
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.state.screen() {
            Screen::Generator => {
                match self
                    .generator_screen
                    .handle_key_event(key, self.state.is_generating())
                {
                    Some(GeneratorEvent::Submit(request)) => self.submit(request),
                    Some(GeneratorEvent::Quit) => self.state.quit(),
                    None => {}
                }
            }
            Screen::Flashcards => {
                let action = ViewState::key_to_navigation(key);
                self.state.handle_viewer_navigation(action);
            }
        }
    }

    /// Start a generation request unless one is already pending
    fn submit(&mut self, request: GenerationRequest) {
        if !self.state.begin_generation(&request) {
            return;
        }

        debug!(focus = ?request.focus, "spawning generation request");
        let client = self.client.clone();
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = client.generate(&request).await;
            // Receiver only goes away when the app is shutting down
            let _ = tx.send(outcome).await;
        });
    }
}
