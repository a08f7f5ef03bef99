use serde::{Deserialize, Serialize};

/// A front/back language pair with an optional usage example.
///
/// Cards are produced by the generation service and never modified
/// locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl Flashcard {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            example: None,
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Example sentence, ignoring blank strings sent by the service
    pub fn example(&self) -> Option<&str> {
        self.example
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_example() {
        let card: Flashcard = serde_json::from_str(r#"{"front":"hello","back":"hola"}"#).unwrap();
        assert_eq!(card, Flashcard::new("hello", "hola"));
        assert!(card.example().is_none());
    }

    #[test]
    fn test_blank_example_is_hidden() {
        let card = Flashcard::new("cat", "gato").with_example("   ");
        assert!(card.example().is_none());

        let card = Flashcard::new("cat", "gato").with_example("El gato duerme.");
        assert_eq!(card.example(), Some("El gato duerme."));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let card: Flashcard = serde_json::from_str(
            r#"{"front":"dog","back":"perro","difficulty":"easy","example":"Mi perro."}"#,
        )
        .unwrap();
        assert_eq!(card.example(), Some("Mi perro."));
    }
}
