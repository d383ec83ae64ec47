use crate::core::map::TransliterationMap;
use tracing::trace;

/// The Cyrillic Unicode block.
const CYRILLIC_BLOCK: std::ops::RangeInclusive<char> = '\u{0400}'..='\u{04FF}';

/// Which conversion path a piece of text takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Cyrillic,
    Latin,
}

/// True if any character of `text` lies in the Cyrillic block.
pub fn contains_cyrillic(text: &str) -> bool {
    text.chars().any(|c| CYRILLIC_BLOCK.contains(&c))
}

/// Classifies the whole text: one Cyrillic character is enough to send
/// everything down the Cyrillic path.
pub fn detect_script(text: &str) -> Script {
    if contains_cyrillic(text) {
        Script::Cyrillic
    } else {
        Script::Latin
    }
}

/// A bidirectional Bulgarian Cyrillic/Latin converter.
#[derive(Clone, Copy)]
pub struct Transliterator {
    map: &'static TransliterationMap,
}

impl Transliterator {
    pub fn new() -> Self {
        Self { map: TransliterationMap::global() }
    }

    /// Auto-detects the direction: Cyrillic text comes out Latin, anything
    /// else is read as Latin and comes out Cyrillic.
    pub fn transliterate(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let script = detect_script(text);
        trace!(?script, len = text.len(), "transliterate");
        match script {
            Script::Cyrillic => self.to_latin(text),
            Script::Latin => self.to_cyrillic(text),
        }
    }

    /// Letter-by-letter substitution; unmapped characters pass through.
    pub fn to_latin(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        for c in text.chars() {
            match self.map.to_latin(c) {
                Some(lat) => result.push_str(lat),
                None => result.push(c),
            }
        }
        result
    }

    /// Greedy longest-match tokenization over the Latin keys.
    pub fn to_cyrillic(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len() * 2);
        let mut rest = text;
        while let Some(c) = rest.chars().next() {
            // Keys are ASCII, so a matched length always ends on a char boundary.
            let advance = match self.map.longest_match(rest) {
                Some((cyr, len)) => {
                    result.push(cyr);
                    len
                }
                None => {
                    result.push(c);
                    c.len_utf8()
                }
            };
            rest = &rest[advance..];
        }
        result
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new()
    }
}

/// Transliterates with the shared table. Never fails; empty in, empty out.
pub fn transliterate(text: &str) -> String {
    Transliterator::new().transliterate(text)
}

/// Like [`transliterate`], with a missing value treated as empty.
pub fn transliterate_opt(text: Option<&str>) -> String {
    text.map(transliterate).unwrap_or_default()
}
