use crate::error::{ConversionError, Result};
use crate::models::SurveyRecord;
use crate::utils::constants::{COORDINATE_SUFFIX_LEN, DEFAULT_BUFFER_SIZE, LATITUDE_FIELD_LEN};
use crate::utils::coordinates::ukoa_to_decimal;
use encoding_rs::UTF_8;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// How the leading fields and the coordinate pair are cut out of a line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RecordLayout {
    /// Last 21 characters hold the coordinates (10 latitude, 11 longitude)
    #[default]
    FixedOffset,
    /// Whitespace tokens; the latitude is glued to the end of the shot number
    WhitespaceSplit,
}

impl std::fmt::Display for RecordLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordLayout::FixedOffset => write!(f, "fixed-offset"),
            RecordLayout::WhitespaceSplit => write!(f, "whitespace-split"),
        }
    }
}

pub struct UkoaReader {
    layout: RecordLayout,
}

impl UkoaReader {
    pub fn new() -> Self {
        Self {
            layout: RecordLayout::default(),
        }
    }

    pub fn with_layout(layout: RecordLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> RecordLayout {
        self.layout
    }

    /// Open a UKOA file and iterate over its records lazily
    pub fn read_records(&self, path: &Path) -> Result<UkoaRecords<BufReader<File>>> {
        let file = File::open(path)?;
        let reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        Ok(self.records_from(reader))
    }

    pub fn records_from<R: BufRead>(&self, reader: R) -> UkoaRecords<R> {
        UkoaRecords {
            lines: UkoaLines::new(reader),
            layout: self.layout,
        }
    }

    /// Parse a single line into a record. `line_number` is 1-based and only
    /// used for error reporting.
    pub fn parse_line(&self, line: &str, line_number: usize) -> Result<SurveyRecord> {
        parse_line_with_layout(line, line_number, self.layout)
    }
}

impl Default for UkoaReader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_line_with_layout(
    line: &str,
    line_number: usize,
    layout: RecordLayout,
) -> Result<SurveyRecord> {
    let line = line.trim();

    let (profile, shot, north_south, east_west) = match layout {
        RecordLayout::FixedOffset => split_fixed_offset(line, line_number)?,
        RecordLayout::WhitespaceSplit => split_whitespace(line, line_number)?,
    };

    let to_record_error = |e: ConversionError| ConversionError::InvalidRecord {
        line: line_number,
        message: e.to_string(),
    };
    let north_south_degrees = ukoa_to_decimal(north_south).map_err(to_record_error)?;
    let east_west_degrees = ukoa_to_decimal(east_west).map_err(to_record_error)?;

    Ok(SurveyRecord::new(
        profile.to_string(),
        shot.to_string(),
        north_south_degrees,
        east_west_degrees,
    ))
}

// Expected format: RAE52-01               0645929.40S 655311.90E
fn split_fixed_offset(line: &str, line_number: usize) -> Result<(&str, &str, &str, &str)> {
    let suffix_start = line
        .char_indices()
        .rev()
        .nth(COORDINATE_SUFFIX_LEN - 1)
        .map(|(idx, _)| idx)
        .ok_or_else(|| ConversionError::InvalidRecord {
            line: line_number,
            message: format!(
                "Line is shorter than the {}-character coordinate suffix: '{}'",
                COORDINATE_SUFFIX_LEN, line
            ),
        })?;

    let (head, suffix) = line.split_at(suffix_start);
    let split = suffix
        .char_indices()
        .nth(LATITUDE_FIELD_LEN)
        .map_or(suffix.len(), |(idx, _)| idx);
    let (north_south, east_west) = suffix.split_at(split);

    let mut tokens = head.split_whitespace();
    let profile = tokens.next().ok_or_else(|| ConversionError::InvalidRecord {
        line: line_number,
        message: format!("Missing profile number: '{}'", line),
    })?;
    let shot = tokens.next().unwrap_or("");

    Ok((profile, shot, north_south, east_west))
}

// Expected tokens: RAE52-01 | 0645929.40S | 655311.90E
fn split_whitespace(line: &str, line_number: usize) -> Result<(&str, &str, &str, &str)> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.len() < 3 {
        return Err(ConversionError::InvalidRecord {
            line: line_number,
            message: format!(
                "Expected at least 3 whitespace-separated fields, found {}: '{}'",
                parts.len(),
                line
            ),
        });
    }

    let shot_and_latitude = parts[1];
    let split = shot_and_latitude
        .char_indices()
        .rev()
        .nth(LATITUDE_FIELD_LEN - 1)
        .map(|(idx, _)| idx)
        .ok_or_else(|| ConversionError::InvalidRecord {
            line: line_number,
            message: format!(
                "Second field must end with a {}-character latitude: '{}'",
                LATITUDE_FIELD_LEN, shot_and_latitude
            ),
        })?;
    let (shot, north_south) = shot_and_latitude.split_at(split);

    Ok((parts[0], shot, north_south, parts[2]))
}

/// Lazy line iterator over a UKOA stream.
///
/// Lines are decoded as UTF-8 with a leading BOM removed and malformed
/// sequences replaced, and come back without their terminator.
pub struct UkoaLines<R> {
    reader: R,
    buffer: Vec<u8>,
    line_number: usize,
}

impl<R: BufRead> UkoaLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            line_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for UkoaLines<R> {
    type Item = Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();

        match self.reader.read_until(b'\n', &mut self.buffer) {
            Ok(0) => None,
            Ok(_) => {
                if self.buffer.ends_with(b"\n") {
                    self.buffer.pop();
                    if self.buffer.ends_with(b"\r") {
                        self.buffer.pop();
                    }
                }

                self.line_number += 1;
                let (text, _) = if self.line_number == 1 {
                    UTF_8.decode_with_bom_removal(&self.buffer)
                } else {
                    UTF_8.decode_without_bom_handling(&self.buffer)
                };

                Some(Ok((self.line_number, text.into_owned())))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}

/// Records parsed from a [`UkoaLines`] stream, in input order
pub struct UkoaRecords<R> {
    lines: UkoaLines<R>,
    layout: RecordLayout,
}

impl<R: BufRead> Iterator for UkoaRecords<R> {
    type Item = Result<SurveyRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let layout = self.layout;
        self.lines.next().map(|line| {
            line.and_then(|(line_number, text)| parse_line_with_layout(&text, line_number, layout))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    const SAMPLE_LINE: &str = "RAE52-01               0645929.40S 655311.90E";

    #[test]
    fn test_parse_fixed_offset_line() {
        let reader = UkoaReader::new();
        let record = reader.parse_line(SAMPLE_LINE, 1).unwrap();

        assert_eq!(record.profile_number, "RAE52-01");
        assert_eq!(record.shot_number, "0");
        assert!((record.north_south_degrees - -64.9915).abs() < 0.000001);
        assert!((record.east_west_degrees - 65.886639).abs() < 0.000001);
    }

    #[test]
    fn test_parse_whitespace_split_line() {
        let reader = UkoaReader::with_layout(RecordLayout::WhitespaceSplit);
        let record = reader.parse_line(SAMPLE_LINE, 1).unwrap();

        assert_eq!(record.profile_number, "RAE52-01");
        assert_eq!(record.shot_number, "0");
        assert_eq!(record.to_delimited("\t"), "RAE52-01\t0\t-64.991500\t65.886639");
    }

    #[test]
    fn test_layouts_agree_on_wide_shot_numbers() {
        let line = "  LINE-7    1042 515520.15N0013015.50W  ";
        let fixed = UkoaReader::new().parse_line(line, 1).unwrap();
        let split = UkoaReader::with_layout(RecordLayout::WhitespaceSplit)
            .parse_line("LINE-7 1042515520.15N 0013015.50W", 1)
            .unwrap();

        assert_eq!(fixed.profile_number, "LINE-7");
        assert_eq!(fixed.shot_number, "1042");
        assert_eq!(fixed, split);
        assert!(fixed.east_west_degrees < 0.0);
        assert!(fixed.north_south_degrees > 0.0);
    }

    #[test]
    fn test_fixed_offset_without_shot_number() {
        let record = UkoaReader::new()
            .parse_line("P7 515520.15N0013015.50W", 1)
            .unwrap();

        assert_eq!(record.profile_number, "P7");
        assert_eq!(record.shot_number, "");
    }

    #[test]
    fn test_short_line_is_rejected() {
        let err = UkoaReader::new().parse_line("RAE52-01 0645929.40S", 4).unwrap_err();

        match err {
            ConversionError::InvalidRecord { line, .. } => assert_eq!(line, 4),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_line_is_rejected() {
        assert!(UkoaReader::new().parse_line("", 2).is_err());
        assert!(UkoaReader::new().parse_line("    ", 2).is_err());
        assert!(UkoaReader::with_layout(RecordLayout::WhitespaceSplit)
            .parse_line("", 2)
            .is_err());
    }

    #[test]
    fn test_missing_profile_is_rejected() {
        assert!(UkoaReader::new().parse_line("515520.15N0013015.50W", 1).is_err());
    }

    #[test]
    fn test_whitespace_split_needs_three_fields() {
        let reader = UkoaReader::with_layout(RecordLayout::WhitespaceSplit);
        assert!(reader.parse_line("RAE52-01 0645929.40S", 1).is_err());
        assert!(reader.parse_line("RAE52-01 929.40S 655311.90E", 1).is_err());
    }

    #[test]
    fn test_bad_coordinate_reports_line() {
        let err = UkoaReader::new()
            .parse_line("RAE52-01      0 0645929.40X 655311.90E", 9)
            .unwrap_err();

        assert!(err.is_parse_error());
        assert!(err.to_string().contains("line 9"));
        assert!(err.to_string().contains("hemisphere"));
    }

    #[test]
    fn test_lines_strip_terminators_and_bom() {
        let input = b"\xEF\xBB\xBFfirst\r\nsecond\n\nfourth".to_vec();
        let lines: Vec<(usize, String)> = UkoaLines::new(Cursor::new(input))
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(
            lines,
            vec![
                (1, "first".to_string()),
                (2, "second".to_string()),
                (3, String::new()),
                (4, "fourth".to_string()),
            ]
        );
    }

    #[test]
    fn test_lines_replace_invalid_utf8() {
        let input = b"caf\xE9 line\n".to_vec();
        let lines: Vec<(usize, String)> = UkoaLines::new(Cursor::new(input))
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(lines, vec![(1, "caf\u{FFFD} line".to_string())]);
    }

    #[test]
    fn test_read_records_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "{}", SAMPLE_LINE)?;
        writeln!(temp_file, "RAE52-01              10645930.10S 655312.40E")?;

        let reader = UkoaReader::new();
        let records: Vec<SurveyRecord> = reader
            .read_records(temp_file.path())?
            .collect::<Result<_>>()?;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].shot_number, "0");
        assert_eq!(records[1].shot_number, "1");

        Ok(())
    }

    #[test]
    fn test_records_stop_at_first_bad_line() {
        let input = format!("{}\nshort\n{}\n", SAMPLE_LINE, SAMPLE_LINE);
        let mut records = UkoaReader::new().records_from(Cursor::new(input));

        assert!(records.next().unwrap().is_ok());
        let err = records.next().unwrap().unwrap_err();
        assert!(matches!(err, ConversionError::InvalidRecord { line: 2, .. }));
    }
}
