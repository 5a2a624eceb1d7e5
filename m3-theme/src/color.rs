//! Opaque sRGB color codes and their `#rrggbb` form.

use std::{fmt, str::FromStr};

use material_color_utilities::utils::string::{argb_from_hex, hex_from_argb};

use crate::error::ColorError;

/// A color packed as `0xAARRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Argb(pub u32);

impl Argb {
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);

    /// Packs opaque red, green and blue channels.
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(0xFF00_0000 | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    pub const fn red(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    pub const fn blue(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Parses `#rrggbb` or the `#rgb` shorthand. The leading `#` is optional.
    ///
    /// Alpha is not accepted; parsed colors are always opaque.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(hex.to_string());
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !matches!(digits.len(), 3 | 6) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        argb_from_hex(&format!("#{digits}"))
            .map(Self)
            .map_err(|_| invalid())
    }

    /// Formats as lowercase `#rrggbb`, dropping alpha.
    pub fn to_hex(self) -> String {
        hex_from_argb(self.0)
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Argb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Argb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        let argb = Argb::from_hex("#6750A4").unwrap();
        assert_eq!(argb, Argb(0xFF67_50A4));
        assert_eq!((argb.red(), argb.green(), argb.blue()), (0x67, 0x50, 0xA4));
    }

    #[test]
    fn parses_without_hash_and_shorthand() {
        assert_eq!(Argb::from_hex("6750a4").unwrap(), Argb(0xFF67_50A4));
        assert_eq!(Argb::from_hex("#fa0").unwrap(), Argb(0xFFFF_AA00));
        assert_eq!("#0B57D0".parse::<Argb>().unwrap(), Argb(0xFF0B_57D0));
    }

    #[test]
    fn rejects_malformed_hex() {
        for input in [
            "not-a-color",
            "",
            "#",
            "#12345",
            "#6750A4FF",
            "#fa0f",
            "#gg0000",
            "#+12345",
            "red",
        ] {
            assert_eq!(
                Argb::from_hex(input),
                Err(ColorError::InvalidHex(input.to_string())),
                "{input}"
            );
        }
    }

    #[test]
    fn hex_formatting_ignores_alpha_and_pads() {
        assert_eq!(Argb(0x0001_0203).to_hex(), "#010203");
        assert_eq!(Argb(0x80AB_CDEF).to_hex(), "#abcdef");
        assert_eq!(Argb::WHITE.to_string(), "#ffffff");
    }

    #[test]
    fn hex_round_trip_preserves_channels() {
        for value in [0xFF00_0000u32, 0xFFFF_FFFF, 0xFF67_50A4, 0xFF12_3456, 0xFFFE_DCBA] {
            let argb = Argb(value);
            assert_eq!(Argb::from_hex(&argb.to_hex()).unwrap(), argb);
        }
    }
}
