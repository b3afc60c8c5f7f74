use std::fmt;

use bevy::prelude::*;
use thiserror::Error;

/// Smallest accepted pendulum count.
pub const MIN_BALL_COUNT: u32 = 1;

/// The three live controls of the configurator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamField {
    BallCount,
    Spacing,
    RopeLength,
}

impl fmt::Display for ParamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParamField::BallCount => "ball count",
            ParamField::Spacing => "spacing",
            ParamField::RopeLength => "rope length",
        })
    }
}

/// A supplied value that cannot drive a rebuild. The previous parameters and
/// the live composite stay untouched whenever this is returned.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {field}: {value:?} ({hint})")]
pub struct InvalidParameter {
    pub field: ParamField,
    pub value: String,
    pub hint: &'static str,
}

impl InvalidParameter {
    fn new(field: ParamField, value: &str) -> Self {
        let hint = match field {
            ParamField::BallCount => "expected a whole number of at least 1",
            ParamField::Spacing | ParamField::RopeLength => "expected a non-negative number",
        };
        Self {
            field,
            value: value.to_owned(),
            hint,
        }
    }
}

/// The validated scene parameters. Every value in this resource has passed
/// [`CradleParams::parse`] or [`CradleParams::checked`]; geometry code may
/// rely on that without re-checking.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CradleParams {
    pub ball_count: u32,
    pub spacing: f32,
    pub rope_length: f32,
}

impl Default for CradleParams {
    fn default() -> Self {
        Self {
            ball_count: 5,
            spacing: 10.0,
            rope_length: 200.0,
        }
    }
}

impl CradleParams {
    /// Parses the three raw text values (slider/CLI form) into parameters.
    /// Fails without partial effect: either all three are valid or none apply.
    pub fn parse(count: &str, spacing: &str, rope: &str) -> Result<Self, InvalidParameter> {
        Ok(Self {
            ball_count: parse_count(count)?,
            spacing: parse_non_negative(ParamField::Spacing, spacing)?,
            rope_length: parse_non_negative(ParamField::RopeLength, rope)?,
        })
    }

    /// Validates already-numeric values (config / hot-reload path).
    pub fn checked(ball_count: u32, spacing: f32, rope_length: f32) -> Result<Self, InvalidParameter> {
        if ball_count < MIN_BALL_COUNT {
            return Err(InvalidParameter::new(
                ParamField::BallCount,
                &ball_count.to_string(),
            ));
        }
        check_non_negative(ParamField::Spacing, spacing)?;
        check_non_negative(ParamField::RopeLength, rope_length)?;
        Ok(Self {
            ball_count,
            spacing,
            rope_length,
        })
    }

    /// Returns a copy with one field replaced by a parsed raw value. This is
    /// the single-control update used for change notifications.
    pub fn with_field(mut self, field: ParamField, raw: &str) -> Result<Self, InvalidParameter> {
        match field {
            ParamField::BallCount => self.ball_count = parse_count(raw)?,
            ParamField::Spacing => self.spacing = parse_non_negative(field, raw)?,
            ParamField::RopeLength => self.rope_length = parse_non_negative(field, raw)?,
        }
        Ok(self)
    }
}

fn parse_count(raw: &str) -> Result<u32, InvalidParameter> {
    let n: u32 = raw
        .trim()
        .parse()
        .map_err(|_| InvalidParameter::new(ParamField::BallCount, raw))?;
    if n < MIN_BALL_COUNT {
        return Err(InvalidParameter::new(ParamField::BallCount, raw));
    }
    Ok(n)
}

fn parse_non_negative(field: ParamField, raw: &str) -> Result<f32, InvalidParameter> {
    let v: f32 = raw
        .trim()
        .parse()
        .map_err(|_| InvalidParameter::new(field, raw))?;
    check_non_negative(field, v).map_err(|_| InvalidParameter::new(field, raw))?;
    Ok(v)
}

fn check_non_negative(field: ParamField, v: f32) -> Result<(), InvalidParameter> {
    if !v.is_finite() || v < 0.0 {
        return Err(InvalidParameter::new(field, &v.to_string()));
    }
    Ok(())
}
