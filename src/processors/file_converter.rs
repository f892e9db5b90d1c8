use crate::error::{ConversionError, Result};
use crate::readers::{RecordLayout, UkoaReader, UkoaRecords};
use crate::utils::constants::DEFAULT_SEPARATOR;
use crate::utils::filename::{has_ukoa_extension, output_path_for};
use crate::utils::progress::ProgressReporter;
use crate::writers::DelimitedWriter;
use std::fs;
use std::path::{Path, PathBuf};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOptions {
    pub separator: String,
    pub layout: RecordLayout,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            layout: RecordLayout::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub records: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub files: Vec<FileSummary>,
}

impl ConversionSummary {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn total_records(&self) -> usize {
        self.files.iter().map(|f| f.records).sum()
    }

    pub fn summary(&self) -> String {
        format!(
            "Converted {} file(s), {} record(s)",
            self.file_count(),
            self.total_records()
        )
    }
}

pub struct FileConverter {
    options: ConversionOptions,
    reader: UkoaReader,
}

impl FileConverter {
    pub fn new(options: ConversionOptions) -> Self {
        let reader = UkoaReader::with_layout(options.layout);
        Self { options, reader }
    }

    /// Convert a single file or every `.uko` file directly inside a directory
    pub fn convert_path(
        &self,
        input: &Path,
        progress: &ProgressReporter,
    ) -> Result<ConversionSummary> {
        if input.is_file() {
            let file = self.convert_file(input, progress)?;
            Ok(ConversionSummary { files: vec![file] })
        } else if input.is_dir() {
            let files = Self::find_ukoa_files(input)?;
            self.convert_files(&files, progress)
        } else {
            Err(ConversionError::PathNotFound(input.to_path_buf()))
        }
    }

    /// Non-recursive scan for `.uko` files, sorted by file name
    pub fn find_ukoa_files(dir_path: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in fs::read_dir(dir_path)? {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() || !has_ukoa_extension(&path) {
                continue;
            }

            files.push(path);
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        debug!(
            "Found {} UKOA file(s) in {}",
            files.len(),
            dir_path.display()
        );

        Ok(files)
    }

    /// Convert files one after another, stopping at the first failure.
    /// Outputs written before the failure stay on disk.
    pub fn convert_files(
        &self,
        files: &[PathBuf],
        progress: &ProgressReporter,
    ) -> Result<ConversionSummary> {
        let mut summary = ConversionSummary::default();

        for path in files {
            progress.set_message(&format!("Converting {}", path.display()));
            summary.files.push(self.convert_file(path, progress)?);
            progress.increment(1);
        }

        Ok(summary)
    }

    /// Convert one UKOA file into its sibling `.csv`, overwriting any
    /// existing output
    pub fn convert_file(&self, input: &Path, progress: &ProgressReporter) -> Result<FileSummary> {
        let output = output_path_for(input);
        if output == input {
            return Err(ConversionError::Config(format!(
                "Refusing to overwrite input file: {}",
                input.display()
            )));
        }

        progress.println(&format!("Input: {}", input.display()));
        progress.println(&format!(
            "Separator: {}",
            self.options.separator.escape_default()
        ));
        progress.println(&format!("Output: {}", output.display()));

        let records = self
            .write_converted(input, &output)
            .map_err(|e| e.in_file(input))?;

        info!(
            "Converted {} record(s) from {} to {}",
            records,
            input.display(),
            output.display()
        );

        Ok(FileSummary {
            input: input.to_path_buf(),
            output,
            records,
        })
    }

    fn write_converted(&self, input: &Path, output: &Path) -> Result<usize> {
        let records = self.reader.read_records(input)?;
        let mut writer = DelimitedWriter::create(output, &self.options.separator)?;
        debug!(
            "Writing {} with layout {}",
            output.display(),
            self.reader.layout()
        );

        write_records(records, &mut writer)
    }
}

/// Copy records into the writer until the stream ends or a line fails.
/// Lines written before a failure are flushed; the failure itself is what
/// gets returned.
fn write_records<R: BufRead, W: Write>(
    records: UkoaRecords<R>,
    writer: &mut DelimitedWriter<W>,
) -> Result<usize> {
    for record in records {
        let written = record.and_then(|record| writer.write_record(&record));
        if let Err(e) = written {
            if let Err(flush_err) = writer.flush() {
                warn!("Failed to flush partial output: {}", flush_err);
            }
            return Err(e);
        }
    }

    writer.flush()?;
    Ok(writer.records_written())
}
