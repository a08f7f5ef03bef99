//! Data models module
//!
//! Contains the generation request sent to the service, the flashcards it
//! returns, and the language and focus tables used by the form.

pub mod card;
pub mod language;
pub mod request;

// Re-export commonly used types
pub use card::Flashcard;
pub use language::{language_index, language_name, Language, LANGUAGES};
pub use request::{ContentFocus, GenerationRequest, MAX_CARD_COUNT, MIN_CARD_COUNT};
