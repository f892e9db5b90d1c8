use crate::utils::constants::DECIMAL_PRECISION;

/// One converted line of a UKOA file
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyRecord {
    pub profile_number: String,
    pub shot_number: String,
    pub north_south_degrees: f64,
    pub east_west_degrees: f64,
}

impl SurveyRecord {
    pub fn new(
        profile_number: String,
        shot_number: String,
        north_south_degrees: f64,
        east_west_degrees: f64,
    ) -> Self {
        Self {
            profile_number,
            shot_number,
            north_south_degrees,
            east_west_degrees,
        }
    }

    /// The four output fields in column order
    pub fn fields(&self) -> [String; 4] {
        [
            self.profile_number.clone(),
            self.shot_number.clone(),
            format_decimal_degrees(self.north_south_degrees),
            format_decimal_degrees(self.east_west_degrees),
        ]
    }

    pub fn to_delimited(&self, separator: &str) -> String {
        self.fields().join(separator)
    }
}

/// Render decimal degrees with six fractional digits and at least two
/// integer digits (`05.500000`, `-64.991500`). Always uses `.`.
pub fn format_decimal_degrees(value: f64) -> String {
    let magnitude = format!("{:.*}", DECIMAL_PRECISION, value.abs());
    let padded = if magnitude.find('.').unwrap_or(magnitude.len()) < 2 {
        format!("0{}", magnitude)
    } else {
        magnitude
    };

    let rounds_to_zero = padded.bytes().all(|b| b == b'0' || b == b'.');
    if value < 0.0 && !rounds_to_zero {
        format!("-{}", padded)
    } else {
        padded
    }
}
