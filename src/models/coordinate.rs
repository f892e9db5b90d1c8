use crate::error::{ConversionError, Result};

/// Which way a coordinate runs on the globe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    pub fn from_char(letter: char) -> Result<Self> {
        match letter {
            'N' => Ok(Hemisphere::North),
            'S' => Ok(Hemisphere::South),
            'E' => Ok(Hemisphere::East),
            'W' => Ok(Hemisphere::West),
            _ => Err(ConversionError::InvalidCoordinate(format!(
                "Unknown hemisphere letter: '{}'. Expected one of N, S, E, W",
                letter
            ))),
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }

    /// South and West map to negative decimal degrees
    pub fn is_negative(&self) -> bool {
        matches!(self, Hemisphere::South | Hemisphere::West)
    }

    pub fn for_value(axis: Axis, decimal: f64) -> Self {
        match (axis, decimal < 0.0) {
            (Axis::Latitude, false) => Hemisphere::North,
            (Axis::Latitude, true) => Hemisphere::South,
            (Axis::Longitude, false) => Hemisphere::East,
            (Axis::Longitude, true) => Hemisphere::West,
        }
    }
}

impl std::fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An angle as written in a UKOA record, e.g. `0645929.40S`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SexagesimalCoordinate {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
    pub hemisphere: Hemisphere,
}

impl SexagesimalCoordinate {
    pub fn new(degrees: u32, minutes: u32, seconds: f64, hemisphere: Hemisphere) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
            hemisphere,
        }
    }

    /// Signed decimal degrees
    pub fn to_decimal(&self) -> f64 {
        let decimal = self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0;

        if self.hemisphere.is_negative() {
            -decimal
        } else {
            decimal
        }
    }
}
