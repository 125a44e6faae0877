use std::fmt::{self, Display};

use regex::Regex;
use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{PaletteError, Result};

lazy_static::lazy_static! {
    static ref HEX_COLOR_REGEX: Regex = Regex::new(r"^\s*(?:#|0[xX])?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})\s*$").unwrap();
}

/// A 24-bit RGB color, 8 bits per channel.
///
/// The packed form is `R << 16 | G << 8 | B`. Anything above the low 24 bits
/// of a packed value is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Color: r={:02X}, g={:02X}, b={:02X}}}", self.r, self.g, self.b)
    }
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Splits a packed `0xRRGGBB` value into its channels.
    pub const fn from_u32(color: u32) -> Self {
        Color {
            r: ((color >> 16) & 0xFF) as u8,
            g: ((color >> 8) & 0xFF) as u8,
            b: (color & 0xFF) as u8,
        }
    }

    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub fn r(&self) -> u8 {
        self.r
    }

    pub fn g(&self) -> u8 {
        self.g
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    pub fn get_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parses `rrggbb`, `#rrggbb` or `0xrrggbb`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidHexColor`] if the text is not one of the
    /// accepted forms.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let Some(cap) = HEX_COLOR_REGEX.captures(hex) else {
            return Err(PaletteError::InvalidHexColor { value: hex.to_string() });
        };
        let (_, [r, g, b]) = cap.extract();
        Ok(Color::new(u8::from_str_radix(r, 16)?, u8::from_str_radix(g, 16)?, u8::from_str_radix(b, 16)?))
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Color::from_u32(value)
    }
}

impl From<Color> for u32 {
    fn from(value: Color) -> u32 {
        value.to_u32()
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8)) -> Self {
        Color::new(value.0, value.1, value.2)
    }
}

impl From<Color> for (u8, u8, u8) {
    fn from(value: Color) -> (u8, u8, u8) {
        (value.r, value.g, value.b)
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        Color::new(value[0], value[1], value[2])
    }
}

impl From<Color> for [u8; 3] {
    fn from(value: Color) -> [u8; 3] {
        [value.r, value.g, value.b]
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ColorVisitor;

        impl Visitor<'_> for ColorVisitor {
            type Value = Color;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a color string like '#00ff00' or a packed 0xRRGGBB integer")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Color::from_hex(value).map_err(E::custom)
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value > 0xFF_FFFF {
                    return Err(E::custom(format!("color value {value:#x} exceeds 24 bits")));
                }
                Ok(Color::from_u32(value as u32))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                let Ok(value) = u64::try_from(value) else {
                    return Err(E::custom(format!("negative color value {value}")));
                };
                self.visit_u64(value)
            }
        }

        deserializer.deserialize_any(ColorVisitor)
    }
}
