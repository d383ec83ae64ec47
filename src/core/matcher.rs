use crate::core::converter::{contains_cyrillic, Transliterator};

/// Whitespace at the ends of a query, byte order mark included.
fn is_edge_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Lowercases and trims the ends; inner whitespace is kept.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().trim_matches(is_edge_blank).to_string()
}

/// Prefix matcher that accepts a query in either script against a stored name.
#[derive(Clone, Copy, Default)]
pub struct BilingualMatcher {
    transliterator: Transliterator,
}

impl BilingualMatcher {
    pub fn new() -> Self {
        Self { transliterator: Transliterator::new() }
    }

    /// Tries, in order: same-script prefix, a Latin query moved to Cyrillic,
    /// then the candidate moved to Latin for a Cyrillic query.
    /// A query that is blank after normalization matches nothing.
    pub fn matches(&self, candidate: &str, query: &str) -> bool {
        let name = normalize(candidate);
        let wanted = normalize(query);
        if name.is_empty() || wanted.is_empty() {
            return false;
        }

        if name.starts_with(&wanted) {
            return true;
        }

        if contains_cyrillic(query) {
            let latin_name = normalize(&self.transliterator.transliterate(candidate));
            latin_name.starts_with(&wanted)
        } else {
            let cyrillic_query = normalize(&self.transliterator.transliterate(query));
            name.starts_with(&cyrillic_query)
        }
    }
}

/// [`BilingualMatcher::matches`] with the shared table.
pub fn matches(candidate: &str, query: &str) -> bool {
    BilingualMatcher::new().matches(candidate, query)
}
