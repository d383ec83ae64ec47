// File: src/core/map.rs
use crate::core::trie::LatinTrie;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Bulgarian streamlined system (Transliteration Act, 2009), Cyrillic to Latin.
/// Order matters for the reverse direction: when two letters share a Latin
/// image, the one listed first owns it (`А` over `Ъ`, `Й` over `Ь`).
const CYRILLIC_TO_LATIN: [(char, &str); 60] = [
    ('А', "A"), ('Б', "B"), ('В', "V"), ('Г', "G"), ('Д', "D"),
    ('Е', "E"), ('Ж', "Zh"), ('З', "Z"), ('И', "I"), ('Й', "Y"),
    ('К', "K"), ('Л', "L"), ('М', "M"), ('Н', "N"), ('О', "O"),
    ('П', "P"), ('Р', "R"), ('С', "S"), ('Т', "T"), ('У', "U"),
    ('Ф', "F"), ('Х', "H"), ('Ц', "Ts"), ('Ч', "Ch"), ('Ш', "Sh"),
    ('Щ', "Sht"), ('Ъ', "A"), ('Ь', "Y"), ('Ю', "Yu"), ('Я', "Ya"),
    ('а', "a"), ('б', "b"), ('в', "v"), ('г', "g"), ('д', "d"),
    ('е', "e"), ('ж', "zh"), ('з', "z"), ('и', "i"), ('й', "y"),
    ('к', "k"), ('л', "l"), ('м', "m"), ('н', "n"), ('о', "o"),
    ('п', "p"), ('р', "r"), ('с', "s"), ('т', "t"), ('у', "u"),
    ('ф', "f"), ('х', "h"), ('ц', "ts"), ('ч', "ch"), ('ш', "sh"),
    ('щ', "sht"), ('ъ', "a"), ('ь', "y"), ('ю', "yu"), ('я', "ya"),
];

/// The immutable bidirectional glyph table shared by every transliterator.
pub struct TransliterationMap {
    forward: HashMap<char, &'static str>,
    reverse: HashMap<&'static str, char>,
    /// Reverse keys, longest first. Equal lengths are ordered lexically so the
    /// scan order is deterministic.
    latin_keys: Vec<&'static str>,
    trie: LatinTrie,
}

impl TransliterationMap {
    fn build() -> Self {
        let mut forward = HashMap::with_capacity(CYRILLIC_TO_LATIN.len());
        let mut reverse = HashMap::with_capacity(CYRILLIC_TO_LATIN.len());
        for &(cyr, lat) in CYRILLIC_TO_LATIN.iter() {
            forward.insert(cyr, lat);
            reverse.entry(lat).or_insert(cyr);
        }

        let mut latin_keys: Vec<&'static str> = reverse.keys().copied().collect();
        latin_keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let mut trie = LatinTrie::new();
        for (&lat, &cyr) in reverse.iter() {
            trie.insert(lat, cyr);
        }

        Self { forward, reverse, latin_keys, trie }
    }

    /// The process-wide table, built on first use.
    pub fn global() -> &'static TransliterationMap {
        static MAP: OnceLock<TransliterationMap> = OnceLock::new();
        MAP.get_or_init(Self::build)
    }

    pub fn to_latin(&self, letter: char) -> Option<&'static str> {
        self.forward.get(&letter).copied()
    }

    pub fn to_cyrillic(&self, latin: &str) -> Option<char> {
        self.reverse.get(latin).copied()
    }

    pub fn latin_keys(&self) -> &[&'static str] {
        &self.latin_keys
    }

    /// Longest reverse key that `text` starts with, found by scanning the
    /// length-sorted key list. Returns the Cyrillic letter and the key length.
    pub fn scan_longest(&self, text: &str) -> Option<(char, usize)> {
        self.latin_keys
            .iter()
            .find(|key| text.starts_with(**key))
            .map(|key| (self.reverse[key], key.len()))
    }

    /// Same result as [`scan_longest`](Self::scan_longest), walked through the trie.
    pub fn longest_match(&self, text: &str) -> Option<(char, usize)> {
        self.trie.longest_match(text)
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
