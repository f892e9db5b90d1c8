use crate::error::{ConversionError, Result};
use crate::processors::ConversionOptions;
use crate::readers::RecordLayout;
use crate::utils::constants::{DEFAULT_SEPARATOR, SEPARATOR_ENV_VAR};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ukoa-converter")]
#[command(about = "Convert UKOA survey files to delimited text with decimal-degree coordinates")]
#[command(version)]
pub struct Cli {
    #[arg(
        short,
        long,
        help = "Input .uko file or directory of .uko files. Output gets the same name with a .csv extension; existing files are overwritten"
    )]
    pub input: PathBuf,

    #[arg(
        short,
        long,
        default_value = DEFAULT_SEPARATOR,
        hide_default_value = true,
        env = SEPARATOR_ENV_VAR,
        help = "Output field separator, tab is default. A literal \\t is read as tab"
    )]
    pub separator: String,

    #[arg(short, long, value_enum, default_value_t = RecordLayout::FixedOffset)]
    pub layout: RecordLayout,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, help = "Suppress console output and progress")]
    pub quiet: bool,
}

impl Cli {
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }

    pub fn conversion_options(&self) -> Result<ConversionOptions> {
        Ok(ConversionOptions {
            separator: unescape_separator(&self.separator)?,
            layout: self.layout,
        })
    }
}

/// Turn shell-friendly escapes (`\t`, `\\`) into the characters they name
pub fn unescape_separator(raw: &str) -> Result<String> {
    if raw.is_empty() {
        return Err(ConversionError::Config(
            "Separator must not be empty".to_string(),
        ));
    }

    let mut separator = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            separator.push(c);
            continue;
        }

        match chars.next() {
            Some('t') => separator.push('\t'),
            Some('\\') => separator.push('\\'),
            Some(other) => {
                separator.push('\\');
                separator.push(other);
            }
            None => separator.push('\\'),
        }
    }

    Ok(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["ukoa-converter", "-i", "survey.uko"]).unwrap();

        assert_eq!(cli.input, PathBuf::from("survey.uko"));
        assert_eq!(cli.layout, RecordLayout::FixedOffset);
        assert!(!cli.verbose);

        let options = cli.conversion_options().unwrap();
        assert_eq!(options.layout, RecordLayout::FixedOffset);
        assert_eq!(options.separator, "\t");
    }

    #[test]
    fn test_input_is_required() {
        let err = Cli::try_parse_from(["ukoa-converter", "-s", ","]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_layout_and_separator_flags() {
        let cli = Cli::try_parse_from([
            "ukoa-converter",
            "--input",
            "lines",
            "--separator",
            ",",
            "--layout",
            "whitespace-split",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.separator, ",");
        assert_eq!(cli.layout, RecordLayout::WhitespaceSplit);
        assert_eq!(cli.get_log_level(), "debug");
    }

    #[test]
    fn test_unescape_separator() {
        assert_eq!(unescape_separator("\\t").unwrap(), "\t");
        assert_eq!(unescape_separator(",").unwrap(), ",");
        assert_eq!(unescape_separator("\\\\").unwrap(), "\\");
        assert_eq!(unescape_separator("a\\tb").unwrap(), "a\tb");
        assert_eq!(unescape_separator("\\x").unwrap(), "\\x");
        assert_eq!(unescape_separator("\\").unwrap(), "\\");
        assert!(unescape_separator("").is_err());
    }
}
