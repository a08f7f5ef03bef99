//! Prompt-driven mode for terminals without full-screen support.
//!
//! Asks for the generation parameters on stdin, shows a spinner while the
//! request is pending, then steps through the deck line by line.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::app::state::{NavigationAction, Screen, ViewState};
use crate::client::FlashcardClient;
use crate::models::{
    language_name, ContentFocus, GenerationRequest, LANGUAGES, MAX_CARD_COUNT, MIN_CARD_COUNT,
};
use crate::Result;

/// Read one trimmed line, `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask for every request field, keeping defaults on empty answers
pub fn ask_request<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<GenerationRequest>> {
    let codes: Vec<&str> = LANGUAGES.iter().map(|l| l.code).collect();
    writeln!(out, "Languages: {}", codes.join(", "))?;

    let text = loop {
        match prompt(input, out, "Topic, words, or text: ")? {
            None => return Ok(None),
            Some(text) if text.is_empty() => writeln!(out, "Please enter something to learn.")?,
            Some(text) => break text,
        }
    };

    let source = prompt(input, out, "Source language (default en): ")?
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "en".to_string());
    let target = prompt(input, out, "Target language (default hi): ")?
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "hi".to_string());

    let count_label = format!(
        "Number of flashcards {}-{} (default 10): ",
        MIN_CARD_COUNT, MAX_CARD_COUNT
    );
    let card_count = prompt(input, out, &count_label)?
        .and_then(|s| s.parse::<u8>().ok())
        .map(|n| n.clamp(MIN_CARD_COUNT, MAX_CARD_COUNT))
        .unwrap_or(10);

    let options = ContentFocus::all();
    for (i, focus) in options.iter().enumerate() {
        writeln!(out, "  {}: {}", i + 1, focus.label())?;
    }
    let focus = prompt(input, out, "Content focus (default 1): ")?
        .and_then(|s| s.parse::<usize>().ok())
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| options.get(i).copied())
        .unwrap_or_default();

    GenerationRequest::new(text, source, target, card_count, focus).map(Some)
}

fn print_card<W: Write>(out: &mut W, state: &ViewState) -> Result<()> {
    let Some(card) = state.current_card() else {
        writeln!(out, "The service did not return any flashcards.")?;
        return Ok(());
    };

    writeln!(out)?;
    writeln!(
        out,
        "Card {} of {}",
        state.current_index() + 1,
        state.cards().len()
    )?;
    if state.is_flipped() {
        writeln!(out, "  {}", card.back)?;
        if let Some(example) = card.example() {
            writeln!(out, "  ({})", example)?;
        }
    } else {
        writeln!(out, "  {}", card.front)?;
    }
    Ok(())
}

/// Step through the deck until the user goes back or quits
pub fn browse<R: BufRead, W: Write>(state: &mut ViewState, input: &mut R, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "\n{} → {} • {} cards",
        language_name(state.source_language()),
        language_name(state.target_language()),
        state.cards().len()
    )?;

    while state.screen() == Screen::Flashcards && !state.should_quit() {
        print_card(out, state)?;
        let Some(command) = prompt(input, out, "[n]ext [p]rev [f]lip [b]ack [q]uit: ")? else {
            state.quit();
            break;
        };
        let action = match command.as_str() {
            "n" | "" => NavigationAction::Right,
            "p" => NavigationAction::Left,
            "f" => NavigationAction::Select,
            "b" => NavigationAction::Back,
            "q" => NavigationAction::Quit,
            _ => NavigationAction::None,
        };
        state.handle_viewer_navigation(action);
    }
    Ok(())
}

/// Run the prompt-driven session on stdin/stdout
pub async fn run(client: &FlashcardClient, state: &mut ViewState) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    while !state.should_quit() {
        let Some(request) = ask_request(&mut input, &mut out)? else {
            break;
        };
        if !state.begin_generation(&request) {
            continue;
        }

        let spinner = indicatif::ProgressBar::new_spinner();
        spinner.set_message("Generating flashcards...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        let outcome = client.generate(&request).await;
        spinner.finish_and_clear();

        state.finish_generation(outcome);
        if let Some(message) = state.error_message() {
            writeln!(out, "{}", message)?;
            continue;
        }
        browse(state, &mut input, &mut out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Flashcard;
    use std::io::Cursor;

    fn browsing(cards: Vec<Flashcard>) -> ViewState {
        let mut state = ViewState::default();
        let request = GenerationRequest::new("x", "en", "es", 5, ContentFocus::Vocabulary).unwrap();
        state.begin_generation(&request);
        state.finish_generation(Ok(cards));
        state
    }

    #[test]
    fn test_ask_request_defaults() {
        let mut input = Cursor::new("kitchen\n\n\n\n\n");
        let mut out = Vec::new();
        let request = ask_request(&mut input, &mut out).unwrap().unwrap();
        assert_eq!(request.input_text, "kitchen");
        assert_eq!(request.source_language, "en");
        assert_eq!(request.target_language, "hi");
        assert_eq!(request.card_count, 10);
        assert_eq!(request.focus, ContentFocus::Vocabulary);
    }

    #[test]
    fn test_ask_request_overrides_and_clamps() {
        let mut input = Cursor::new("\nweather\nfr\nde\n50\n3\n");
        let mut out = Vec::new();
        let request = ask_request(&mut input, &mut out).unwrap().unwrap();
        assert_eq!(request.input_text, "weather");
        assert_eq!(request.source_language, "fr");
        assert_eq!(request.target_language, "de");
        assert_eq!(request.card_count, MAX_CARD_COUNT);
        assert_eq!(request.focus, ContentFocus::Grammar);
        assert!(String::from_utf8(out).unwrap().contains("Please enter something"));
    }

    #[test]
    fn test_ask_request_end_of_input() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        assert!(ask_request(&mut input, &mut out).unwrap().is_none());
    }

    #[test]
    fn test_browse_commands() {
        let mut state = browsing(vec![
            Flashcard::new("hello", "hola").with_example("Hola, ¿qué tal?"),
            Flashcard::new("bye", "adiós"),
        ]);
        let mut input = Cursor::new("f\nn\nn\nb\n");
        let mut out = Vec::new();
        browse(&mut state, &mut input, &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("English → Spanish • 2 cards"));
        assert!(printed.contains("hola"));
        assert!(printed.contains("(Hola, ¿qué tal?)"));
        assert!(printed.contains("Card 2 of 2"));
        assert_eq!(state.screen(), Screen::Generator);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_browse_quit_and_eof() {
        let mut state = browsing(vec![Flashcard::new("a", "b")]);
        let mut out = Vec::new();
        browse(&mut state, &mut Cursor::new("q\n"), &mut out).unwrap();
        assert!(state.should_quit());

        let mut state = browsing(vec![Flashcard::new("a", "b")]);
        browse(&mut state, &mut Cursor::new(""), &mut out).unwrap();
        assert!(state.should_quit());
    }
}
