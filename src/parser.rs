//! This module provides decoders for the *GLL* and *MWV* sentences of the
//! *NMEA 0183* protocol.
//!
//! Decoding is lazy: [`parse`](fn.parse.html) only splits the sentence and
//! verifies its checksum, and the per-sentence decoders convert single
//! fields on demand.

use chrono::NaiveTime;
use std::str::FromStr;

use checksum;
use err::{FormatError, InvalidValueError, ParseError};
use lexer::{self, NmeaMessage};

/// Separators a sentence may use, in resolution order.
const SEPARATORS: [char; 3] = [',', ';', ':'];

const LAT_SPLIT: usize = 2;
const ABS_MAX_LAT: f64 = 90.0;
const LONG_SPLIT: usize = 3;
const ABS_MAX_LONG: f64 = 180.0;
const MAX_WIND_ANGLE: f64 = 360.0;
const MAX_WIND_SPEED: f64 = 100.0;
const UTC_LENGTH: usize = 9;
const UTC_FORMAT: &'static str = "%H%M%S%.f";

/// Parse `sentence` into an [`NmeaMessage`](../struct.NmeaMessage.html),
/// verifying its checksum.
///
/// The returned message carries the raw field values; use
/// [`GllParser`](struct.GllParser.html) or
/// [`MwvParser`](struct.MwvParser.html) to decode them. A sentence without
/// a well-formed, matching checksum is rejected, so a partially valid
/// message is never returned.
pub fn parse(sentence: &str, separator: char) -> Result<NmeaMessage, ParseError> {
    let mut msg = lexer::tokenize(sentence, separator)?;
    msg.set_checksum(checksum::extract(sentence));
    checksum::validate(sentence, msg.checksum())?;
    Ok(msg)
}

/// Find which of the separators `,`, `;`, `:` the sentence uses.
///
/// The candidates are tried in order and the first one present in the text
/// wins. Callers that already know their separator can skip this and call
/// [`parse`](fn.parse.html) directly.
pub fn determine_separator(sentence: &str) -> Result<char, ParseError> {
    for &sep in SEPARATORS.iter() {
        if sentence.contains(sep) {
            return Ok(sep);
        }
    }
    Err(FormatError::UnknownSeparator.into())
}

/// The cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardDir {
    North,
    South,
    East,
    West,
}

impl CardDir {
    #[inline]
    pub fn get_sign(&self) -> isize {
        match *self {
            CardDir::North | CardDir::East => 1,
            CardDir::South | CardDir::West => -1,
        }
    }
}

/// Status of the data carried by a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// `A`, data valid.
    Valid,
    /// `V`, data void.
    Void,
}

/// Positioning system mode indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeIndicator {
    Autonomous,
    Differential,
    Estimated,
    NotValid,
    Simulated,
}

/// Reference frame of a wind angle measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindReference {
    /// `R`, relative to the vessel.
    Relative,
    /// `T`, theoretical (true) wind.
    Theoretical,
}

/// Unit of a wind speed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindSpeedUnit {
    KilometersPerHour,
    MetersPerSecond,
    Knots,
    StatuteMilesPerHour,
}

/// Preconditions shared by every sentence decoder.
fn validate_message(msg: &NmeaMessage) -> Result<(), FormatError> {
    if msg.header().is_empty() {
        return Err(FormatError::EmptyHeader);
    }
    if msg.fields().is_empty() {
        return Err(FormatError::NoFields);
    }
    Ok(())
}

/// Get the raw value of the 1-based field `position`, or report which field
/// the sentence is missing.
fn field_at<'a>(
    msg: &'a NmeaMessage,
    position: usize,
    sentence: &'static str,
    name: &'static str,
) -> Result<&'a str, FormatError> {
    match msg.fields().get(position - 1) {
        Some(field) => Ok(field),
        None => Err(FormatError::MissingField(sentence, name)),
    }
}

/// Parse a coordinate packed as degrees followed by decimal minutes, e.g.
/// `5057.970`. `deg_split` is the number of leading characters that make up
/// the degrees, `abs_max` the maximum absolute value in degrees.
///
/// The hemisphere sign is not applied here; the direction indicator is a
/// separate field with its own accessor.
fn parse_coord(raw: &str, deg_split: usize, abs_max: f64) -> Result<f64, ParseError> {
    if raw.len() < deg_split || !raw.is_char_boundary(deg_split) {
        return Err(FormatError::CoordinateLength.into());
    }
    let (deg, min) = raw.split_at(deg_split);
    let degrees = parse_f64(deg)?;
    let minutes = parse_f64(min)?;
    let coord = degrees + minutes / 60.0;
    if !(coord.abs() <= abs_max) {
        return Err(InvalidValueError::Coordinate(coord, abs_max).into());
    }
    Ok(coord)
}

#[inline]
fn parse_f64(raw: &str) -> Result<f64, FormatError> {
    Ok(f64::from_str(raw)?)
}

/// Field decoder for the *GLL* (geographic position) sentence.
///
/// Wraps an already tokenized message; every accessor independently checks
/// that its field is present, converts it and range checks the result.
#[derive(Debug)]
pub struct GllParser<'a> {
    msg: &'a NmeaMessage,
}

impl<'a> GllParser<'a> {
    /// Create a decoder over `msg`, checking that it has a header and at
    /// least one field.
    pub fn new(msg: &'a NmeaMessage) -> Result<Self, ParseError> {
        validate_message(msg)?;
        Ok(GllParser { msg })
    }

    fn field(&self, position: usize, name: &'static str) -> Result<&'a str, FormatError> {
        field_at(self.msg, position, "GLL", name)
    }

    /// Latitude in unsigned decimal degrees, in `-90..=90`.
    pub fn latitude(&self) -> Result<f64, ParseError> {
        let raw = self.field(1, "latitude")?;
        parse_coord(raw, LAT_SPLIT, ABS_MAX_LAT)
    }

    /// Hemisphere of the latitude, `N` or `S`.
    pub fn ns_indicator(&self) -> Result<CardDir, ParseError> {
        match self.field(2, "N/S Indicator")? {
            "N" => Ok(CardDir::North),
            "S" => Ok(CardDir::South),
            _ => Err(FormatError::InvalidCode("N/S Indicator").into()),
        }
    }

    /// Longitude in unsigned decimal degrees, in `-180..=180`.
    pub fn longitude(&self) -> Result<f64, ParseError> {
        let raw = self.field(3, "longitude")?;
        parse_coord(raw, LONG_SPLIT, ABS_MAX_LONG)
    }

    /// Hemisphere of the longitude, `E` or `W`.
    pub fn ew_indicator(&self) -> Result<CardDir, ParseError> {
        match self.field(4, "E/W Indicator")? {
            "E" => Ok(CardDir::East),
            "W" => Ok(CardDir::West),
            _ => Err(FormatError::InvalidCode("E/W Indicator").into()),
        }
    }

    /// Time of the fix as UTC time of day. The raw field has to be exactly
    /// nine characters in the form `HHMMSS.ff`.
    pub fn utc_time(&self) -> Result<NaiveTime, ParseError> {
        let raw = self.field(5, "UTC time")?;
        if raw.chars().count() != UTC_LENGTH {
            return Err(FormatError::TimeLength.into());
        }
        let utc = NaiveTime::parse_from_str(raw, UTC_FORMAT).map_err(FormatError::from)?;
        Ok(utc)
    }

    /// Data status, `A` (valid) or `V` (void).
    pub fn status(&self) -> Result<Status, ParseError> {
        match self.field(6, "status")? {
            "A" => Ok(Status::Valid),
            "V" => Ok(Status::Void),
            _ => Err(FormatError::InvalidCode("Status").into()),
        }
    }

    /// Positioning system mode indicator.
    pub fn mode_indicator(&self) -> Result<ModeIndicator, ParseError> {
        match self.field(7, "Mode Indicator")? {
            "A" => Ok(ModeIndicator::Autonomous),
            "D" => Ok(ModeIndicator::Differential),
            "E" => Ok(ModeIndicator::Estimated),
            "N" => Ok(ModeIndicator::NotValid),
            "S" => Ok(ModeIndicator::Simulated),
            _ => Err(FormatError::InvalidCode("Mode Indicator").into()),
        }
    }

    /// Latitude and longitude in signed decimal degrees.
    ///
    /// Combines the coordinate fields with their hemisphere indicators. A
    /// positive latitude is in the northern hemisphere, a positive
    /// longitude in the eastern.
    pub fn position(&self) -> Result<(f64, f64), ParseError> {
        let lat = self.latitude()? * self.ns_indicator()?.get_sign() as f64;
        let long = self.longitude()? * self.ew_indicator()?.get_sign() as f64;
        Ok((lat, long))
    }
}

/// Field decoder for the *MWV* (wind speed and angle) sentence.
#[derive(Debug)]
pub struct MwvParser<'a> {
    msg: &'a NmeaMessage,
}

impl<'a> MwvParser<'a> {
    /// Create a decoder over `msg`, checking that it has a header and at
    /// least one field.
    pub fn new(msg: &'a NmeaMessage) -> Result<Self, ParseError> {
        validate_message(msg)?;
        Ok(MwvParser { msg })
    }

    fn field(&self, position: usize, name: &'static str) -> Result<&'a str, FormatError> {
        field_at(self.msg, position, "MWV", name)
    }

    /// Wind angle in degrees, in `0..360`.
    pub fn wind_angle(&self) -> Result<f64, ParseError> {
        let raw = self.field(1, "wind angle")?;
        let angle = parse_f64(raw)?;
        if !(angle >= 0.0 && angle < MAX_WIND_ANGLE) {
            return Err(InvalidValueError::WindAngle(angle).into());
        }
        Ok(angle)
    }

    /// Reference frame of the wind angle, `R` or `T`.
    pub fn reference(&self) -> Result<WindReference, ParseError> {
        match self.field(2, "reference")? {
            "R" => Ok(WindReference::Relative),
            "T" => Ok(WindReference::Theoretical),
            _ => Err(FormatError::InvalidCode("Reference").into()),
        }
    }

    /// Wind speed, in `0..=100`. The bound is applied independently of the
    /// units field.
    pub fn wind_speed(&self) -> Result<f64, ParseError> {
        let raw = self.field(3, "wind speed")?;
        let speed = parse_f64(raw)?;
        if !(speed >= 0.0 && speed <= MAX_WIND_SPEED) {
            return Err(InvalidValueError::WindSpeed(speed).into());
        }
        Ok(speed)
    }

    /// Unit of the wind speed, one of `K`, `M`, `N`, `S`.
    pub fn wind_speed_units(&self) -> Result<WindSpeedUnit, ParseError> {
        match self.field(4, "Wind Speed Units")? {
            "K" => Ok(WindSpeedUnit::KilometersPerHour),
            "M" => Ok(WindSpeedUnit::MetersPerSecond),
            "N" => Ok(WindSpeedUnit::Knots),
            "S" => Ok(WindSpeedUnit::StatuteMilesPerHour),
            _ => Err(FormatError::InvalidCode("Wind Speed Units").into()),
        }
    }

    /// Data status, `A` (valid) or `V` (void).
    pub fn status(&self) -> Result<Status, ParseError> {
        match self.field(5, "status")? {
            "A" => Ok(Status::Valid),
            "V" => Ok(Status::Void),
            _ => Err(FormatError::InvalidCode("Status").into()),
        }
    }
}
