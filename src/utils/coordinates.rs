use crate::error::{ConversionError, Result};
use crate::models::{Axis, Hemisphere, SexagesimalCoordinate};
use crate::utils::constants::{
    HEMISPHERE_LEN, MAX_DEGREES_LEN, MINUTES_LEN, MIN_COORDINATE_LEN, SECONDS_LEN,
};

/// Parse a UKOA coordinate field (`DDDMMSS.SSh`) into its components.
///
/// The field is read right to left: hemisphere letter, five characters of
/// seconds, two of minutes, and whatever remains is degrees.
///
/// # Examples
/// ```
/// use ukoa_converter::models::Hemisphere;
/// use ukoa_converter::utils::coordinates::parse_sexagesimal;
///
/// let coord = parse_sexagesimal("0645929.40S").unwrap();
/// assert_eq!(coord.degrees, 64);
/// assert_eq!(coord.minutes, 59);
/// assert_eq!(coord.hemisphere, Hemisphere::South);
/// ```
pub fn parse_sexagesimal(field: &str) -> Result<SexagesimalCoordinate> {
    let trimmed = field.trim();

    if !trimmed.is_ascii() {
        return Err(ConversionError::InvalidCoordinate(format!(
            "Non-ASCII characters in coordinate: '{}'",
            field
        )));
    }

    if trimmed.len() < MIN_COORDINATE_LEN {
        return Err(ConversionError::InvalidCoordinate(format!(
            "Coordinate too short: '{}'. Expected format: 'DDDMMSS.SSh'",
            field
        )));
    }

    let (rest, hemisphere) = trimmed.split_at(trimmed.len() - HEMISPHERE_LEN);
    // is_ascii above guarantees exactly one char here
    let hemisphere = Hemisphere::from_char(hemisphere.chars().next().unwrap_or(' '))?;

    let (rest, seconds) = rest.split_at(rest.len() - SECONDS_LEN);
    let (degrees, minutes) = rest.split_at(rest.len() - MINUTES_LEN);

    let seconds = parse_seconds(seconds)?;
    let minutes = parse_whole(minutes, "minutes")?;

    let degrees = degrees.trim();
    if degrees.len() > MAX_DEGREES_LEN {
        return Err(ConversionError::InvalidCoordinate(format!(
            "Degrees value too long: '{}'",
            degrees
        )));
    }
    let degrees = parse_whole(degrees, "degrees")?;

    Ok(SexagesimalCoordinate::new(degrees, minutes, seconds, hemisphere))
}

/// Convert a UKOA coordinate field straight to signed decimal degrees
///
/// # Examples
/// ```
/// use ukoa_converter::utils::ukoa_to_decimal;
///
/// let decimal = ukoa_to_decimal("0645929.40S").unwrap();
/// assert!((decimal - -64.9915).abs() < 0.000001);
/// ```
pub fn ukoa_to_decimal(field: &str) -> Result<f64> {
    Ok(parse_sexagesimal(field)?.to_decimal())
}

/// Convert degrees, minutes and seconds to signed decimal degrees
pub fn dms_to_decimal(degrees: u32, minutes: u32, seconds: f64, hemisphere: Hemisphere) -> f64 {
    SexagesimalCoordinate::new(degrees, minutes, seconds, hemisphere).to_decimal()
}

/// Convert decimal degrees to a UKOA coordinate field.
///
/// Latitudes get two degree digits (10 characters), longitudes three
/// (11 characters), matching the fixed-offset record layout.
pub fn decimal_to_dms(decimal: f64, axis: Axis) -> String {
    let hemisphere = Hemisphere::for_value(axis, decimal);

    // Work in hundredths of a second so rounding carries into minutes/degrees
    let hundredths = (decimal.abs() * 360_000.0).round() as u64;
    let degrees = hundredths / 360_000;
    let minutes = (hundredths % 360_000) / 6_000;
    let seconds = (hundredths % 6_000) as f64 / 100.0;

    match axis {
        Axis::Latitude => format!("{:02}{:02}{:05.2}{}", degrees, minutes, seconds, hemisphere),
        Axis::Longitude => format!("{:03}{:02}{:05.2}{}", degrees, minutes, seconds, hemisphere),
    }
}

fn parse_seconds(value: &str) -> Result<f64> {
    // SS.ss, the tens digit may be blank
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == SECONDS_LEN
        && bytes[2] == b'.'
        && (bytes[0].is_ascii_digit() || bytes[0] == b' ')
        && [bytes[1], bytes[3], bytes[4]].iter().all(u8::is_ascii_digit);

    if !well_formed {
        return Err(ConversionError::InvalidCoordinate(format!(
            "Invalid seconds value: '{}'. Expected format: 'SS.ss'",
            value
        )));
    }

    value.trim().parse::<f64>().map_err(|_| {
        ConversionError::InvalidCoordinate(format!("Invalid seconds value: '{}'", value))
    })
}

fn parse_whole(value: &str, name: &str) -> Result<u32> {
    let trimmed = value.trim();

    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConversionError::InvalidCoordinate(format!(
            "Invalid {} value: '{}'",
            name, value
        )));
    }

    trimmed.parse::<u32>().map_err(|_| {
        ConversionError::InvalidCoordinate(format!("Invalid {} value: '{}'", name, value))
    })
}
