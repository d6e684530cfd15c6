//! Unit-tagged numeric input.
//!
//! Every parser returns the canonical SI value for its quantity:
//!
//! | quantity          | canonical unit |
//! |-------------------|----------------|
//! | Temperature       | K              |
//! | Pressure          | Pa (absolute)  |
//! | Length            | m              |
//! | Dimensionless     | 1              |

use crate::convert;
use std::fmt;
use thiserror::Error;

/// Dimension/quantity family for a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Temperature (canonical: Kelvin)
    Temperature,
    /// Absolute pressure (canonical: Pa)
    Pressure,
    /// Altitude (canonical: m)
    Length,
    /// Pressure ratios (canonical: as-is, may include %)
    Dimensionless,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::Pressure => write!(f, "Absolute Pressure"),
            Self::Length => write!(f, "Length"),
            Self::Dimensionless => write!(f, "Dimensionless"),
        }
    }
}

/// Error in unit parsing or conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Input text did not parse to a number + optional unit
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Unit not recognized for this quantity
    #[error("Unknown unit '{unit}' for {quantity}")]
    UnknownUnit { unit: String, quantity: Quantity },
    /// Unit not allowed for this quantity (e.g. plain "psi" requires "psia")
    #[error("Ambiguous unit '{unit}': {reason}")]
    AmbiguousUnit { unit: String, reason: &'static str },
    /// Value out of physical range (e.g. negative absolute temperature)
    #[error("Value {value} out of range: {reason}")]
    OutOfRange { value: f64, reason: &'static str },
}

/// Parse a quantity value from user input text into canonical SI units.
///
/// A bare number (no unit tag) is taken to already be in the canonical unit.
pub fn parse_quantity(raw_text: &str, quantity: Quantity) -> Result<f64, UnitError> {
    let trimmed = raw_text.trim();

    match quantity {
        Quantity::Temperature => parse_temperature(trimmed),
        Quantity::Pressure => parse_pressure(trimmed),
        Quantity::Length => parse_length(trimmed),
        Quantity::Dimensionless => parse_dimensionless(trimmed),
    }
}

fn unknown(unit: &str, quantity: Quantity) -> UnitError {
    UnitError::UnknownUnit {
        unit: unit.to_string(),
        quantity,
    }
}

/// Parse temperature in various units, return Kelvin.
fn parse_temperature(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let kelvin = match unit.to_lowercase().as_str() {
        "" | "k" | "kelvin" => value,
        "c" | "°c" | "celsius" => convert::c_to_k(value),
        "f" | "°f" | "fahrenheit" => convert::f_to_k(value),
        "r" | "°r" | "rankine" => convert::r_to_k(value),
        _ => return Err(unknown(&unit, Quantity::Temperature)),
    };

    if kelvin <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: kelvin,
            reason: "Absolute temperature must be > 0 K",
        });
    }

    Ok(kelvin)
}

/// Parse absolute pressure in various units, return Pa.
fn parse_pressure(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let pa = match unit.to_lowercase().as_str() {
        "" | "pa" | "pascal" => value,
        "kpa" => value * 1e3,
        "mpa" => value * 1e6,
        "bar" => value * 1e5,
        "mbar" | "millibar" | "hpa" => value * 100.0,
        "atm" => convert::atm_to_kpa(value) * 1e3,
        "psia" => convert::psia_to_pa(value),
        "psf" => convert::psf_to_pa(value),
        "psi" => {
            return Err(UnitError::AmbiguousUnit {
                unit: "psi".to_string(),
                reason: "Use 'psia' (absolute); ambient pressure is never gauge",
            });
        }
        _ => return Err(unknown(&unit, Quantity::Pressure)),
    };

    if pa < 0.0 {
        return Err(UnitError::OutOfRange {
            value: pa,
            reason: "Absolute pressure cannot be negative",
        });
    }

    Ok(pa)
}

/// Parse length/altitude, return m.
fn parse_length(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    match unit.to_lowercase().as_str() {
        "" | "m" | "meter" | "meters" => Ok(value),
        "km" => Ok(value * 1e3),
        "ft" | "feet" => Ok(convert::feet_to_meters(value)),
        "kft" => Ok(convert::feet_to_meters(value * 1e3)),
        _ => Err(unknown(&unit, Quantity::Length)),
    }
}

/// Parse dimensionless, accepting plain numbers or percent.
fn parse_dimensionless(input: &str) -> Result<f64, UnitError> {
    let trimmed = input.trim();
    let (num_str, scale) = match trimmed.strip_suffix('%') {
        Some(rest) => (rest.trim(), 0.01),
        None => (trimmed, 1.0),
    };

    let value: f64 = num_str.parse().map_err(|_| {
        UnitError::ParseError(format!("Could not parse dimensionless value from '{}'", input))
    })?;

    Ok(value * scale)
}

/// Split a value+unit string into (numeric_value, unit_string).
///
/// Examples:
/// - "-69.7F" -> (-69.7, "F")
/// - "30.8 kPa" -> (30.8, "kPa")
/// - "1670" -> (1670.0, "")
fn split_value_and_unit(input: &str) -> Result<(f64, String), UnitError> {
    let trimmed = input.trim();

    let split_idx = numeric_prefix_len(trimmed);
    let (num_part, unit_part) = trimmed.split_at(split_idx);

    let value: f64 = num_part.trim().parse().map_err(|_| {
        UnitError::ParseError(format!("Could not parse numeric value from '{}'", input))
    })?;

    Ok((value, unit_part.trim().to_string()))
}

/// Length of the leading numeric literal, allowing an exponent only when it is
/// followed by digits (so "5e3" is numeric but the 'e' in "2ft" style tags never is).
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
        i += 1;
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }
    i
}
