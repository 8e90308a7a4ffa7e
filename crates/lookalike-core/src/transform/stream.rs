// Lookalike Stream Processing
// Filter every input line, collect converted pairs, sort by emitted record

use std::fmt;
use std::io::BufRead;

use super::engine::{AnomalyPolicy, Conversion, FilterError, Transliterator};

/// One converted word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub original: String,
    pub converted: String,
}

impl Record {
    pub fn new(original: impl Into<String>, converted: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            converted: converted.into(),
        }
    }

    /// The exact line written to the output file, including the newline
    pub fn line(&self) -> String {
        format!("{} {}\n", self.original, self.converted)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.original, self.converted)
    }
}

/// Per-run counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    pub lines: usize,
    pub converted: usize,
    pub out_of_bounds: usize,
    pub unmapped: usize,
    pub anomalies: usize,
}

impl StreamStats {
    fn record(&mut self, conversion: &Conversion) {
        self.lines += 1;
        match conversion {
            Conversion::Converted(_) => self.converted += 1,
            Conversion::LengthOutOfBounds => self.out_of_bounds += 1,
            Conversion::Unmapped(_) => self.unmapped += 1,
            Conversion::Anomaly(_) => self.anomalies += 1,
        }
    }
}

/// Sorted records plus the counters gathered while producing them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamOutcome {
    pub records: Vec<Record>,
    pub stats: StreamStats,
}

/// Sort records by their emitted line.
///
/// The sort is stable, so byte-identical records keep input order.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by_cached_key(Record::line);
}

/// Accumulates records line by line
struct Collector<'a> {
    transliterator: &'a Transliterator,
    outcome: StreamOutcome,
}

impl<'a> Collector<'a> {
    fn new(transliterator: &'a Transliterator) -> Self {
        Self {
            transliterator,
            outcome: StreamOutcome::default(),
        }
    }

    /// Feed one line; `line_number` is 1-based
    fn feed(&mut self, line_number: usize, word: &str) -> Result<(), FilterError> {
        let conversion = self.transliterator.qualify_and_convert(word);
        self.outcome.stats.record(&conversion);

        match conversion {
            Conversion::Converted(converted) => {
                log::debug!("Line {}: {} -> {}", line_number, word, converted);
                self.outcome.records.push(Record::new(word, converted));
            }
            Conversion::Anomaly(ch) => match self.transliterator.config().anomaly_policy {
                AnomalyPolicy::Warn => {
                    log::warn!(
                        "Error in parsing line {}: {:?} (unexpected character {:?})",
                        line_number,
                        word,
                        ch
                    );
                }
                AnomalyPolicy::Ignore => {
                    log::debug!("Skipping line {} with character {:?}", line_number, ch);
                }
                AnomalyPolicy::Fail => {
                    return Err(FilterError::Anomaly {
                        line: line_number,
                        word: word.to_string(),
                        ch,
                    });
                }
            },
            Conversion::LengthOutOfBounds | Conversion::Unmapped(_) => {
                log::trace!("Line {} not convertible: {:?}", line_number, word);
            }
        }

        Ok(())
    }

    fn finish(mut self) -> StreamOutcome {
        sort_records(&mut self.outcome.records);
        let stats = &self.outcome.stats;
        log::debug!(
            "Processed {} lines: {} converted, {} out of bounds, {} unmapped, {} anomalies",
            stats.lines,
            stats.converted,
            stats.out_of_bounds,
            stats.unmapped,
            stats.anomalies
        );
        self.outcome
    }
}

/// Convert every line and return the qualifying pairs sorted by emitted record.
///
/// Anomalies are handled according to the configured [`AnomalyPolicy`];
/// only [`AnomalyPolicy::Fail`] makes this return an error.
pub fn process_stream<I, S>(
    transliterator: &Transliterator,
    lines: I,
) -> Result<StreamOutcome, FilterError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut collector = Collector::new(transliterator);
    for (index, line) in lines.into_iter().enumerate() {
        collector.feed(index + 1, line.as_ref())?;
    }
    Ok(collector.finish())
}

/// Same as [`process_stream`], reading lines from a reader.
///
/// `\n` and `\r\n` terminators are stripped. Read failures, including
/// invalid UTF-8, are returned as [`FilterError::Io`].
pub fn process_reader<R: BufRead>(
    transliterator: &Transliterator,
    reader: R,
) -> Result<StreamOutcome, FilterError> {
    let mut collector = Collector::new(transliterator);
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        collector.feed(index + 1, &line)?;
    }
    Ok(collector.finish())
}
