use crate::utils::constants::{OUTPUT_EXTENSION, UKOA_EXTENSION};
use std::path::{Path, PathBuf};

/// Output path for a converted file: same directory, extension replaced by `.csv`
pub fn output_path_for(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

/// Whether the path carries the `.uko` extension (ASCII case-insensitive)
pub fn has_ukoa_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case(UKOA_EXTENSION))
}
