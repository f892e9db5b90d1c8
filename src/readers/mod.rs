pub mod ukoa_reader;

pub use ukoa_reader::{RecordLayout, UkoaLines, UkoaReader, UkoaRecords};
