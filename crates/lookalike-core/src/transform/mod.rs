// Lookalike Transform Module
// Word qualification, substitution and stream processing

pub mod engine;
pub mod stream;

pub use engine::{
    AnomalyPolicy, Conversion, FilterConfig, FilterError, Transliterator, CALIFORNIA_MAX_LENGTH,
    DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH,
};
pub use stream::{process_reader, process_stream, sort_records, Record, StreamOutcome, StreamStats};
