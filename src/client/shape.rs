//! Response shape decoding
//!
//! The generation service does not always answer with a bare array of
//! cards. [`ResponseShape`] names every encoding we accept, tried in a
//! fixed order, so the fallback chain is visible in one place.

use crate::models::Flashcard;
use serde_json::Value;
use tracing::{debug, warn};

/// Field that carries the cards when the reply is wrapped in an object
pub const FLASHCARDS_KEY: &str = "flashcards";

/// Recognized encodings of a successful reply
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// The body is itself an array
    Bare(Vec<Value>),
    /// The body is an object with a `flashcards` array
    Named(Vec<Value>),
    /// The first card-like array found among the object's fields
    Scanned { key: String, items: Vec<Value> },
    /// Nothing card-like was found; the body is kept for diagnostics
    Unrecognized(Value),
}

impl ResponseShape {
    /// Classify a parsed reply body
    pub fn classify(body: Value) -> Self {
        let mut fields = match body {
            Value::Array(items) => return Self::Bare(items),
            Value::Object(fields) => fields,
            other => return Self::Unrecognized(other),
        };

        if matches!(fields.get(FLASHCARDS_KEY), Some(Value::Array(_))) {
            if let Some(Value::Array(items)) = fields.remove(FLASHCARDS_KEY) {
                return Self::Named(items);
            }
        }

        // Document order decides between several candidates
        let key = fields
            .iter()
            .find(|(_, value)| looks_like_cards(value))
            .map(|(key, _)| key.clone());

        match key {
            Some(key) => match fields.remove(&key) {
                Some(Value::Array(items)) => Self::Scanned { key, items },
                _ => Self::Unrecognized(Value::Object(fields)),
            },
            None => Self::Unrecognized(Value::Object(fields)),
        }
    }

    /// Short name used in diagnostics
    pub fn describe(&self) -> String {
        match self {
            Self::Bare(_) => "bare array".to_string(),
            Self::Named(_) => format!("\"{}\" field", FLASHCARDS_KEY),
            Self::Scanned { key, .. } => format!("\"{}\" field (scanned)", key),
            Self::Unrecognized(_) => "unrecognized".to_string(),
        }
    }

    /// Decode the selected array into cards.
    ///
    /// Entries that are not valid cards are skipped. An unrecognized shape
    /// yields an empty deck rather than an error.
    pub fn into_cards(self) -> Vec<Flashcard> {
        let shape = self.describe();
        let items = match self {
            Self::Bare(items) | Self::Named(items) | Self::Scanned { items, .. } => items,
            Self::Unrecognized(body) => {
                warn!(body = %body, "unexpected response format, no flashcards found");
                return Vec::new();
            }
        };

        let total = items.len();
        let cards: Vec<Flashcard> = items
            .into_iter()
            .enumerate()
            .filter_map(|(i, item)| match serde_json::from_value(item) {
                Ok(card) => Some(card),
                Err(e) => {
                    warn!(index = i, error = %e, "skipping malformed flashcard entry");
                    None
                }
            })
            .collect();

        debug!(shape = %shape, total, decoded = cards.len(), "decoded flashcards");
        cards
    }
}

/// Extract the flashcards from a successful reply body
pub fn extract_flashcards(body: Value) -> Vec<Flashcard> {
    ResponseShape::classify(body).into_cards()
}

/// A non-empty array whose first element has both `front` and `back`
fn looks_like_cards(value: &Value) -> bool {
    match value.as_array().and_then(|items| items.first()) {
        Some(Value::Object(first)) => first.contains_key("front") && first.contains_key("back"),
        _ => false,
    }
}
