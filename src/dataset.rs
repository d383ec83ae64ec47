// File: src/dataset.rs
use crate::config::{DATE_KEY_FORMAT, KEY_VALIDATION_YEAR};
use crate::core::converter::Transliterator;
use crate::core::matcher::BilingualMatcher;
use crate::core::types::{NameDayEntry, NameDayRecord, NameMatch};
use crate::error::{NameDayError, Result};
use chrono::{Datelike, Local, NaiveDate};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, instrument};

const BUILTIN_JSON: &str = include_str!("data/name_days.json");

/// Formats a date as a dataset key, "MM-DD".
pub fn format_date<D: Datelike>(date: &D) -> String {
    format!("{:02}-{:02}", date.month(), date.day())
}

fn validate_key(key: &str) -> Result<()> {
    let bytes = key.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[2] == b'-'
        && bytes[..2].iter().chain(&bytes[3..]).all(u8::is_ascii_digit);
    if !well_formed {
        return Err(NameDayError::InvalidDateKey(key.to_string()));
    }
    let with_year = format!("{KEY_VALIDATION_YEAR}-{key}");
    NaiveDate::parse_from_str(&with_year, &format!("%Y-{DATE_KEY_FORMAT}"))
        .map(|_| ())
        .map_err(|_| NameDayError::InvalidDateKey(key.to_string()))
}

/// Every `"MM-DD": entry` pair in document order, repeats included.
/// Deserializing straight into a map would silently keep the last repeat.
struct RawEntries(Vec<(String, NameDayEntry)>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from MM-DD keys to name-day entries")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<RawEntries, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(pair) = map.next_entry::<String, NameDayEntry>()? {
                    pairs.push(pair);
                }
                Ok(RawEntries(pairs))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// The name-day calendar: "MM-DD" keys in calendar order. Read-only once built.
#[derive(Debug, Clone)]
pub struct NameDays {
    entries: BTreeMap<String, NameDayEntry>,
}

impl NameDays {
    /// The dataset compiled into the crate, parsed on first use.
    ///
    /// # Panics
    /// If the embedded JSON is invalid, which the test suite rules out.
    pub fn builtin() -> &'static NameDays {
        static BUILTIN: OnceLock<NameDays> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            NameDays::from_json(BUILTIN_JSON).expect("embedded name-day dataset is valid")
        })
    }

    /// Parses `{ "MM-DD": { "holiday": "...", "names": [...] } }`.
    pub fn from_json(json: &str) -> Result<Self> {
        let RawEntries(pairs) = serde_json::from_str(json)?;
        let mut entries = BTreeMap::new();
        for (date, entry) in pairs {
            validate_key(&date)?;
            if entry.names.iter().any(|n| n.trim().is_empty()) {
                return Err(NameDayError::EmptyName { date });
            }
            match entries.entry(date) {
                Entry::Vacant(slot) => {
                    slot.insert(entry);
                }
                Entry::Occupied(slot) => {
                    return Err(NameDayError::DuplicateDateKey(slot.key().clone()));
                }
            }
        }
        let dataset = Self { entries };
        debug!(
            dates = dataset.entries.len(),
            names = dataset.name_count(),
            "name-day dataset loaded"
        );
        Ok(dataset)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| NameDayError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Number of calendar days with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct names across all days.
    pub fn name_count(&self) -> usize {
        self.names().map(|(_, _, name)| name).collect::<HashSet<_>>().len()
    }

    fn names(&self) -> impl Iterator<Item = (&String, &NameDayEntry, &String)> {
        self.entries
            .iter()
            .flat_map(|(date, entry)| entry.names.iter().map(move |name| (date, entry, name)))
    }

    /// The first day, in calendar order, celebrating `name`. The name may be
    /// given in Latin; comparison ignores case.
    #[instrument(level = "debug", skip(self))]
    pub fn name_day(&self, name: &str) -> Option<NameDayRecord> {
        if name.trim().is_empty() {
            return None;
        }
        let wanted = name.to_lowercase();
        let wanted_cyrillic = Transliterator::new().transliterate(name).to_lowercase();
        let matcher = BilingualMatcher::new();

        let hit = self.names().find(|(_, _, stored)| {
            let stored_lower = stored.to_lowercase();
            (matcher.matches(stored, name) && stored_lower == wanted)
                || stored_lower == wanted_cyrillic
        });

        match hit {
            Some((date, entry, _)) => {
                debug!(date = %date, "name day found");
                Some(NameDayRecord::from_entry(date, entry))
            }
            None => {
                debug!("no name day");
                None
            }
        }
    }

    /// Exact lookup by "MM-DD" key.
    pub fn names_by_date(&self, key: &str) -> Option<NameDayRecord> {
        self.entries
            .get(key)
            .map(|entry| NameDayRecord::from_entry(key, entry))
    }

    pub fn names_on<D: Datelike>(&self, date: &D) -> Option<NameDayRecord> {
        self.names_by_date(&format_date(date))
    }

    /// Names celebrating on the local calendar day.
    pub fn today(&self) -> Option<NameDayRecord> {
        self.names_on(&Local::now().date_naive())
    }

    /// Every stored name the query prefixes, in either script. Each name is
    /// reported once, at its first date.
    #[instrument(level = "debug", skip(self))]
    pub fn search(&self, query: &str) -> Vec<NameMatch> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let matcher = BilingualMatcher::new();
        let mut seen = HashSet::new();
        let results: Vec<NameMatch> = self
            .names()
            .filter(|&(_, _, name)| matcher.matches(name, query))
            .filter(|&(_, _, name)| seen.insert(name.as_str()))
            .map(|(date, entry, name)| NameMatch {
                name: name.clone(),
                date: date.clone(),
                holiday: entry.holiday.clone(),
            })
            .collect();
        debug!(hits = results.len(), "search done");
        results
    }

    /// A deep copy of the whole calendar.
    pub fn all(&self) -> BTreeMap<String, NameDayEntry> {
        self.entries.clone()
    }
}
