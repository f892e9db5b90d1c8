use crate::error::Result;
use crate::models::SurveyRecord;
use crate::utils::constants::{DEFAULT_BUFFER_SIZE, LINE_ENDING};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes survey records as separator-joined text lines
pub struct DelimitedWriter<W: Write> {
    writer: BufWriter<W>,
    separator: String,
    records_written: usize,
}

impl DelimitedWriter<File> {
    /// Create (or truncate) the output file
    pub fn create(path: &Path, separator: &str) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(file, separator))
    }
}

impl<W: Write> DelimitedWriter<W> {
    pub fn new(writer: W, separator: &str) -> Self {
        Self {
            writer: BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, writer),
            separator: separator.to_string(),
            records_written: 0,
        }
    }

    pub fn write_record(&mut self, record: &SurveyRecord) -> Result<()> {
        self.writer
            .write_all(record.to_delimited(&self.separator).as_bytes())?;
        self.writer.write_all(LINE_ENDING.as_bytes())?;
        self.records_written += 1;
        Ok(())
    }

    pub fn records_written(&self) -> usize {
        self.records_written
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}
