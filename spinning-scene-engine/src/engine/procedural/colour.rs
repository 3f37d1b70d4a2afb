use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 8-bit sRGB triple, encoded as `rgb(r,g,b)` wherever it leaves the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct RgbColour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColourParseError {
    #[error("expected `rgb(r,g,b)`, got `{0}`")]
    Malformed(String),
    #[error("channel `{0}` is not an integer in 0..=255")]
    Channel(String),
}

impl RgbColour {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_color(self) -> Color {
        Color::srgb_u8(self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl FromStr for RgbColour {
    type Err = ColourParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ColourParseError::Malformed(s.to_string()))?;

        let channels = inner
            .split(',')
            .map(|channel| {
                let channel = channel.trim();
                channel
                    .parse::<u8>()
                    .map_err(|_| ColourParseError::Channel(channel.to_string()))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        match channels.as_slice() {
            [r, g, b] => Ok(Self::new(*r, *g, *b)),
            _ => Err(ColourParseError::Malformed(s.to_string())),
        }
    }
}

impl From<RgbColour> for String {
    fn from(colour: RgbColour) -> Self {
        colour.to_string()
    }
}

impl TryFrom<String> for RgbColour {
    type Error = ColourParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
