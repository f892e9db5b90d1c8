/// File extensions
pub const UKOA_EXTENSION: &str = "uko";
pub const OUTPUT_EXTENSION: &str = "csv";

/// Output defaults
pub const DEFAULT_SEPARATOR: &str = "\t";
pub const DECIMAL_PRECISION: usize = 6;

/// Coordinate field widths at the end of a fixed-offset record
pub const COORDINATE_SUFFIX_LEN: usize = 21;
pub const LATITUDE_FIELD_LEN: usize = 10;
pub const LONGITUDE_FIELD_LEN: usize = 11;

/// Sexagesimal sub-field widths, counted from the right
pub const HEMISPHERE_LEN: usize = 1;
pub const SECONDS_LEN: usize = 5;
pub const MINUTES_LEN: usize = 2;
pub const MAX_DEGREES_LEN: usize = 3;
pub const MIN_COORDINATE_LEN: usize = HEMISPHERE_LEN + SECONDS_LEN + MINUTES_LEN;

/// Processing defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Environment variable consulted for the output separator
pub const SEPARATOR_ENV_VAR: &str = "UKOA_SEPARATOR";
