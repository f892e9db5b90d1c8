pub mod coordinate;
pub mod record;

pub use coordinate::{Axis, Hemisphere, SexagesimalCoordinate};
pub use record::{format_decimal_degrees, SurveyRecord};
