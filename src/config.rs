//! Defaults for the name-day tools.
//!
//! These are compile-time constants; runtime configuration is handled via CLI
//! arguments and environment variables in `bin/main.rs`.

/// `chrono` format of a dataset key.
pub const DATE_KEY_FORMAT: &str = "%m-%d";

/// Maximum number of search hits printed by the CLI (0 = unlimited).
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Environment variable holding the log filter. `RUST_LOG` is the fallback.
pub const LOG_ENV: &str = "NAMEDAY_LOG";

/// Environment variable pointing at an external JSON dataset.
pub const DATA_ENV: &str = "NAMEDAY_DATA";

/// Filter used when neither log variable is set.
pub const DEFAULT_LOG_DIRECTIVE: &str = "nameday_core=warn";

/// Leap year used to validate "MM-DD" keys, so that 02-29 is accepted.
pub const KEY_VALIDATION_YEAR: i32 = 2024;
