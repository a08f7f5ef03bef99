//! Supported language codes and their display names

/// A selectable language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

const fn lang(code: &'static str, name: &'static str) -> Language {
    Language { code, name }
}

/// Languages offered by the generator form, in display order
pub const LANGUAGES: &[Language] = &[
    lang("en", "English"),
    lang("hi", "Hindi"),
    lang("es", "Spanish"),
    lang("fr", "French"),
    lang("de", "German"),
    lang("it", "Italian"),
    lang("pt", "Portuguese"),
    lang("ja", "Japanese"),
    lang("ko", "Korean"),
    lang("zh", "Chinese"),
    lang("ar", "Arabic"),
    lang("ru", "Russian"),
    lang("bn", "Bengali"),
    lang("ta", "Tamil"),
    lang("te", "Telugu"),
    lang("mr", "Marathi"),
    lang("gu", "Gujarati"),
    lang("kn", "Kannada"),
    lang("ml", "Malayalam"),
    lang("pa", "Punjabi"),
];

/// Display name for a language code, falling back to the code itself
pub fn language_name(code: &str) -> &str {
    LANGUAGES
        .iter()
        .find(|l| l.code == code)
        .map(|l| l.name)
        .unwrap_or(code)
}

/// Position of a code in [`LANGUAGES`]
pub fn language_index(code: &str) -> Option<usize> {
    LANGUAGES.iter().position(|l| l.code == code)
}
