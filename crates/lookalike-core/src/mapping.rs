// Lookalike Substitution Tables
// Cyrillic letter -> visually similar Latin letter or digit

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Near-identical pairs
const STRICT_PAIRS: [(char, &str); 13] = [
    ('в', "B"),
    ('з', "3"),
    ('к', "K"),
    ('м', "M"),
    ('н', "H"),
    ('р', "P"),
    ('с', "C"),
    ('т', "T"),
    ('х', "X"),
    ('а', "A"),
    ('е', "E"),
    ('о', "O"),
    ('у', "Y"),
];

/// Low-similarity pairs, only used by the extended table
const WEIRD_PAIRS: [(char, &str); 5] = [
    // Mixes upper and lower case shapes
    ('б', "6"),
    ('ч', "4"),
    // Handwritten uppercase Д resembles D
    ('д', "D"),
    ('ш', "W"),
    ('и', "N"),
];

/// Which substitution table is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TableKind {
    /// High visual-similarity pairs only
    #[default]
    Strict,
    /// Strict pairs plus the weird ones
    Extended,
}

impl TableKind {
    /// Pick the table kind for the `include_weird` flag
    pub fn from_include_weird(include_weird: bool) -> Self {
        if include_weird {
            Self::Extended
        } else {
            Self::Strict
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Extended => "extended",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Letter-to-replacement mapping
#[derive(Debug, Clone)]
pub struct SubstitutionTable {
    kind: TableKind,
    mappings: HashMap<char, &'static str>,
}

impl SubstitutionTable {
    /// Build a table of the given kind.
    ///
    /// The extended table is the union of the strict and weird pairs.
    /// Weird pairs never replace a strict entry.
    pub fn build(kind: TableKind) -> Self {
        let mut mappings: HashMap<char, &'static str> = STRICT_PAIRS.into_iter().collect();

        if kind == TableKind::Extended {
            for (letter, replacement) in WEIRD_PAIRS {
                mappings.entry(letter).or_insert(replacement);
            }
        }

        Self { kind, mappings }
    }

    /// Shared static instance of a table
    pub fn get(kind: TableKind) -> &'static SubstitutionTable {
        static STRICT: OnceLock<SubstitutionTable> = OnceLock::new();
        static EXTENDED: OnceLock<SubstitutionTable> = OnceLock::new();

        match kind {
            TableKind::Strict => STRICT.get_or_init(|| Self::build(TableKind::Strict)),
            TableKind::Extended => EXTENDED.get_or_init(|| Self::build(TableKind::Extended)),
        }
    }

    /// Get the table kind
    pub fn kind(&self) -> TableKind {
        self.kind
    }

    /// Get the mappings
    pub fn mappings(&self) -> &HashMap<char, &'static str> {
        &self.mappings
    }

    /// Get the replacement for a letter
    pub fn lookup(&self, letter: char) -> Option<&'static str> {
        self.mappings.get(&letter).copied()
    }
}
