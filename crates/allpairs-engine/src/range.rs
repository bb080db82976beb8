//! Numeric sub-range values.
//!
//! In range-sampling mode a value such as `[2,8]` or `1,5,10` stands for a
//! continuous interval between its smallest and largest number, and each
//! rendered case draws a fresh value from it.

use rand::Rng;

/// Draws before a sample is declared impossible.
const MAX_DRAWS: usize = 64;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RangeError {
    #[error("value {value:?} is not a numeric range (expected e.g. [min,max])")]
    NotARange { value: String },

    #[error("value {value:?} has an invalid number {token:?}")]
    InvalidNumber { value: String, token: String },

    #[error("range {value:?} has min {min} >= max {max}")]
    Degenerate { value: String, min: f64, max: f64 },

    #[error("no sample within range {value:?} after {MAX_DRAWS} draws")]
    RejectionExhausted { value: String },
}

/// True if `value` uses range syntax (any of `[`, `,`, `]`).
pub fn is_range_syntax(value: &str) -> bool {
    value.contains(&['[', ',', ']'][..])
}

/// A closed numeric interval parsed from a range value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Parse a range value. Only digits, `-`, `,` and `.` are kept; the
    /// remaining text is split on `,` and the extremes become the bounds.
    pub fn parse(value: &str) -> Result<Self, RangeError> {
        if !value.contains(',') || !value.chars().any(|ch| ch.is_ascii_digit()) {
            return Err(RangeError::NotARange {
                value: value.to_string(),
            });
        }

        let cleaned: String = value
            .chars()
            .filter(|ch| ch.is_ascii_digit() || matches!(ch, '-' | ',' | '.'))
            .collect();

        let mut numbers = Vec::new();
        for token in cleaned.split(',').filter(|t| !t.is_empty()) {
            let number: f64 = token.parse().map_err(|_| RangeError::InvalidNumber {
                value: value.to_string(),
                token: token.to_string(),
            })?;
            numbers.push(number);
        }
        if numbers.len() < 2 {
            return Err(RangeError::NotARange {
                value: value.to_string(),
            });
        }

        let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
        let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if min >= max {
            return Err(RangeError::Degenerate {
                value: value.to_string(),
                min,
                max,
            });
        }
        Ok(Self { min, max })
    }

    /// Draw a value uniformly within `[min, max]`, redrawing on the rare
    /// rounding miss.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<f64> {
        (0..MAX_DRAWS)
            .map(|_| self.min + (self.max - self.min) * rng.gen::<f64>())
            .find(|r| (self.min..=self.max).contains(r))
    }
}

/// Parse `value` and draw one sample from it.
pub fn sample_value<R: Rng>(value: &str, rng: &mut R) -> Result<f64, RangeError> {
    ValueRange::parse(value)?
        .sample(rng)
        .ok_or_else(|| RangeError::RejectionExhausted {
            value: value.to_string(),
        })
}
