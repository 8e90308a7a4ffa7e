// Lookalike Output Writer
// Writes sorted records as "<original> <converted>" lines

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::transform::Record;

/// Error types for output operations
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to create output file {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

/// Write every record in order, then flush.
///
/// Returns the number of records written.
pub fn write_records<W: Write>(writer: &mut W, records: &[Record]) -> Result<usize, OutputError> {
    for record in records {
        writer.write_all(record.line().as_bytes())?;
    }
    writer.flush()?;
    Ok(records.len())
}

/// A truncated output file opened for writing
#[derive(Debug)]
pub struct OutputFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl OutputFile {
    /// Create (or truncate) the output file
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, OutputError> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| OutputError::Create {
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    /// Write all records and flush the file
    pub fn write_records(mut self, records: &[Record]) -> Result<usize, OutputError> {
        let written = write_records(&mut self.writer, records)?;
        log::debug!("Wrote {} records to {}", written, self.path.display());
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_records_to_buffer() {
        let records = vec![Record::new("кот", "KOT"), Record::new("трактор", "TPAKTOP")];
        let mut buffer = Vec::new();

        let written = write_records(&mut buffer, &records).unwrap();

        assert_eq!(written, 2);
        assert_eq!(String::from_utf8(buffer).unwrap(), "кот KOT\nтрактор TPAKTOP\n");
    }

    #[test]
    fn test_write_no_records() {
        let mut buffer = Vec::new();
        assert_eq!(write_records(&mut buffer, &[]).unwrap(), 0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_create_in_missing_directory_fails() {
        let path = std::env::temp_dir()
            .join("lookalike-missing-dir-for-test")
            .join("nested")
            .join("output.txt");
        let err = OutputFile::create(&path).unwrap_err();
        assert!(matches!(err, OutputError::Create { .. }));
        assert!(err.to_string().contains("output.txt"));
    }
}
