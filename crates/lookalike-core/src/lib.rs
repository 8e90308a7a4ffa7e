// Lookalike Core Library
// Cyrillic words rewritten with visually similar Latin letters and digits

pub mod alphabet;
pub mod mapping;
pub mod output;
pub mod transform;

#[cfg(feature = "settings")]
pub mod settings;

pub use mapping::{SubstitutionTable, TableKind};
pub use output::{write_records, OutputError, OutputFile};
pub use transform::{
    process_reader, process_stream, sort_records, AnomalyPolicy, Conversion, FilterConfig,
    FilterError, Record, StreamOutcome, StreamStats, Transliterator,
};

#[cfg(feature = "settings")]
pub use settings::{default_settings_content, Settings, SettingsError};
