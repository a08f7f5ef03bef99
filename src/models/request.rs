//! Generation request model
//!
//! The parameter bundle posted to the flashcard generation service.

use crate::{LingoError, Result};
use serde::{Deserialize, Serialize};

/// Smallest deck the service is asked for
pub const MIN_CARD_COUNT: u8 = 5;
/// Largest deck the service is asked for
pub const MAX_CARD_COUNT: u8 = 20;

/// What kind of material the generated cards should concentrate on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFocus {
    #[default]
    Vocabulary,
    Phrases,
    Grammar,
    Conversation,
}

impl ContentFocus {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Vocabulary,
            Self::Phrases,
            Self::Grammar,
            Self::Conversation,
        ]
    }

    /// Human-readable label for the focus selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::Vocabulary => "Vocabulary",
            Self::Phrases => "Common Phrases",
            Self::Grammar => "Grammar Patterns",
            Self::Conversation => "Conversation",
        }
    }
}

/// Request body sent to the generation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Topic, word list or paragraph to build cards from
    pub input_text: String,
    /// Language code of the card fronts
    pub source_language: String,
    /// Language code of the card backs
    pub target_language: String,
    /// Number of cards to generate
    pub card_count: u8,
    /// Content focus
    pub focus: ContentFocus,
}

impl GenerationRequest {
    /// Build a request, rejecting blank input and out-of-range card counts
    pub fn new(
        input_text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        card_count: u8,
        focus: ContentFocus,
    ) -> Result<Self> {
        let request = Self {
            input_text: input_text.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
            card_count,
            focus,
        };
        request.validate()?;
        Ok(request)
    }

    /// Validate the request parameters
    pub fn validate(&self) -> Result<()> {
        if self.input_text.trim().is_empty() {
            return Err(LingoError::InvalidRequest(
                "Enter a topic, some words or a paragraph of text".to_string(),
            ));
        }

        if !(MIN_CARD_COUNT..=MAX_CARD_COUNT).contains(&self.card_count) {
            return Err(LingoError::InvalidRequest(format!(
                "Card count must be between {} and {} (got {})",
                MIN_CARD_COUNT, MAX_CARD_COUNT, self.card_count
            )));
        }

        if self.source_language.is_empty() || self.target_language.is_empty() {
            return Err(LingoError::InvalidRequest(
                "Source and target language are required".to_string(),
            ));
        }

        Ok(())
    }
}
