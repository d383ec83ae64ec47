// src/lib.rs

pub mod config;
pub mod core;
pub mod dataset;
pub mod error;

pub use crate::core::converter::{transliterate, transliterate_opt, Transliterator};
pub use crate::core::matcher::{matches, normalize, BilingualMatcher};
pub use crate::core::types::{NameDayEntry, NameDayRecord, NameMatch};
pub use crate::dataset::{format_date, NameDays};
pub use crate::error::{NameDayError, Result};
