pub mod constants;
pub mod coordinates;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use coordinates::{decimal_to_dms, dms_to_decimal, parse_sexagesimal, ukoa_to_decimal};
pub use filename::{has_ukoa_extension, output_path_for};
pub use progress::ProgressReporter;
