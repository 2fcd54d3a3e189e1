use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Per-step brightness multiplier used by [`Rgb::darker`].
pub const DARKER_STEP: f32 = 0.7;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("color must have 3 or 6 hex digits: {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in color: {0:?}")]
    BadDigit(String),
}

/// 8-bit sRGB color. Serialized as `#rrggbb`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Multiplies each channel by `0.7^k`. Deterministic and monotonic in `k`:
    /// a larger `k` never yields a brighter channel. `k <= 0` returns `self`.
    pub fn darker(self, k: f32) -> Rgb {
        if k <= 0.0 {
            return self;
        }
        let f = DARKER_STEP.powf(k);
        let scale = |c: u8| -> u8 { (c as f32 * f).round().clamp(0.0, 255.0) as u8 };
        Rgb::new(scale(self.r), scale(self.g), scale(self.b))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Rec. 601 luma, used to order shades in tests and legends.
    pub fn luma(self) -> f32 {
        0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        let digit = |c: u8| -> Result<u8, ColorParseError> {
            (c as char)
                .to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(|| ColorParseError::BadDigit(s.to_string()))
        };
        let bytes = hex.as_bytes();
        match bytes.len() {
            // #rgb expands each nibble: #f40 == #ff4400
            3 => {
                let r = digit(bytes[0])?;
                let g = digit(bytes[1])?;
                let b = digit(bytes[2])?;
                Ok(Rgb::new(r * 17, g * 17, b * 17))
            }
            6 => {
                let pair = |i: usize| -> Result<u8, ColorParseError> {
                    Ok(digit(bytes[i])? * 16 + digit(bytes[i + 1])?)
                };
                Ok(Rgb::new(pair(0)?, pair(2)?, pair(4)?))
            }
            _ => Err(ColorParseError::BadLength(s.to_string())),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
