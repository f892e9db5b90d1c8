pub mod file_converter;

pub use file_converter::{ConversionOptions, ConversionSummary, FileConverter, FileSummary};
