use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CodeError;

use super::band::Tone;

/// Two-letter country code, always stored upper-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    /// Build a code from a literal in the static tables.
    pub const fn from_static(code: &'static str) -> Self {
        let bytes = code.as_bytes();
        assert!(bytes.len() == 2, "country code must have two letters");
        assert!(bytes[0].is_ascii_uppercase() && bytes[1].is_ascii_uppercase());
        Self([bytes[0], bytes[1]])
    }

    pub fn parse(raw: &str) -> Result<Self, CodeError> {
        let trimmed = raw.trim();
        let bytes = trimmed.as_bytes();
        if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(CodeError::Malformed(raw.to_string()));
        }
        Ok(Self([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
        ]))
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CountryCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Up => "improving",
            Trend::Down => "declining",
            Trend::Stable => "stable",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Trend::Up => Tone::Good,
            Trend::Down => Tone::Danger,
            Trend::Stable => Tone::Warning,
        }
    }
}

/// One row of the scalar score table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryProfile {
    pub code: CountryCode,
    pub name: &'static str,
    pub democracy: u8,
    pub freedom: u8,
    pub authoritarian: u8,
    pub press_freedom: u8,
    pub trend: Trend,
}
