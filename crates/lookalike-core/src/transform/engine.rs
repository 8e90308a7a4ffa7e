// Lookalike Transliteration Engine
// Per-word qualification and look-alike substitution

use std::fmt;
use std::str::FromStr;

use crate::alphabet;
use crate::mapping::{SubstitutionTable, TableKind};

/// Default maximum word length in code points
pub const DEFAULT_MAX_LENGTH: usize = 8;

/// Maximum word length for California plates.
///
/// Some custom plates there allow more characters, but most are limited
/// to seven (plus a half-space).
pub const CALIFORNIA_MAX_LENGTH: usize = 7;

/// Default minimum word length in code points
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Filter errors
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid length bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: usize, max: usize },

    #[error("Unexpected character {ch:?} in word {word:?} on line {line}")]
    Anomaly { line: usize, word: String, ch: char },
}

/// What to do with words containing code points outside the alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnomalyPolicy {
    /// Log a warning and skip the word
    #[default]
    Warn,
    /// Skip the word, only visible at debug level
    Ignore,
    /// Stop processing with an error
    Fail,
}

impl AnomalyPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Ignore => "ignore",
            Self::Fail => "fail",
        }
    }
}

impl fmt::Display for AnomalyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnomalyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "warn" | "warning" => Ok(Self::Warn),
            "ignore" | "skip" => Ok(Self::Ignore),
            "fail" | "error" => Ok(Self::Fail),
            _ => Err(format!("Unknown anomaly policy: {}", s)),
        }
    }
}

/// Resolved filter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Use the extended (strict + weird) table
    pub include_weird: bool,
    /// Inclusive lower bound on word length
    pub min_length: usize,
    /// Inclusive upper bound on word length
    pub max_length: usize,
    pub anomaly_policy: AnomalyPolicy,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            include_weird: false,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            anomaly_policy: AnomalyPolicy::default(),
        }
    }
}

impl FilterConfig {
    /// Default configuration with the California length limit
    pub fn california() -> Self {
        Self {
            max_length: CALIFORNIA_MAX_LENGTH,
            ..Self::default()
        }
    }

    pub fn table_kind(&self) -> TableKind {
        TableKind::from_include_weird(self.include_weird)
    }
}

/// Outcome of converting one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// Every letter was substituted
    Converted(String),
    /// Length outside the configured bounds
    LengthOutOfBounds,
    /// A valid letter with no look-alike in the active table
    Unmapped(char),
    /// A code point outside the Cyrillic alphabet
    Anomaly(char),
}

impl Conversion {
    /// The converted text, if any
    pub fn into_converted(self) -> Option<String> {
        match self {
            Self::Converted(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_anomaly(&self) -> bool {
        matches!(self, Self::Anomaly(_))
    }
}

/// Converts words using a fixed substitution table and length bounds
#[derive(Debug, Clone)]
pub struct Transliterator {
    config: FilterConfig,
    table: &'static SubstitutionTable,
}

impl Transliterator {
    /// Create a transliterator, rejecting inverted length bounds
    pub fn new(config: FilterConfig) -> Result<Self, FilterError> {
        if config.min_length > config.max_length {
            return Err(FilterError::InvalidBounds {
                min: config.min_length,
                max: config.max_length,
            });
        }

        let table = SubstitutionTable::get(config.table_kind());
        log::debug!(
            "Using {} table ({} letters), length bounds {}..={}",
            table.kind(),
            table.mappings().len(),
            config.min_length,
            config.max_length
        );

        Ok(Self { config, table })
    }

    /// Get the configuration
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Get the active table
    pub fn table(&self) -> &SubstitutionTable {
        self.table
    }

    /// Qualify a word and convert it to its look-alike form.
    ///
    /// The length check runs first, so a too-long word with foreign
    /// characters is out of bounds rather than an anomaly. Otherwise the
    /// first offending code point decides the outcome.
    pub fn qualify_and_convert(&self, word: &str) -> Conversion {
        let length = word.chars().count();
        if length < self.config.min_length || length > self.config.max_length {
            return Conversion::LengthOutOfBounds;
        }

        let mut result = String::with_capacity(length);
        for c in word.chars() {
            if !alphabet::is_letter(c) {
                return Conversion::Anomaly(c);
            }
            match self.table.lookup(c) {
                Some(replacement) => result.push_str(replacement),
                None => return Conversion::Unmapped(c),
            }
        }

        Conversion::Converted(result)
    }

    /// Convert a word, discarding the rejection reason
    pub fn convert(&self, word: &str) -> Option<String> {
        self.qualify_and_convert(word).into_converted()
    }
}
