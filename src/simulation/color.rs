//! Display color attached to a body
//!
//! Colors are carried by name so they survive a save/load cycle unchanged.
//! Any CSS color name or hex form accepted by `css_color_parser` is valid;
//! names are matched case-insensitively and stored lowercase.

use std::fmt;
use std::str::FromStr;

use css_color_parser::Color as CssColor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    name: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    /// Parse a color name (e.g. `"Yellow"`, `"dodgerblue"`, `"#ff0000"`)
    pub fn parse(name: &str) -> Result<Self, Error> {
        let name = name.trim().to_lowercase();
        let css = name
            .parse::<CssColor>()
            .map_err(|_| Error::UnknownColor(name.clone()))?;

        Ok(Self {
            name,
            r: css.r,
            g: css.g,
            b: css.b,
            a: css.a,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Channels normalized to [0, 1]
    pub fn rgba(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a,
        ]
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Color::parse(&name).map_err(serde::de::Error::custom)
    }
}
