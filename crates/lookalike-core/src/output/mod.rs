// Lookalike Output Layer
// Record formatting and output file writing

mod writer;

pub use writer::{write_records, OutputError, OutputFile};
