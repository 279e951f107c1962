use std::fmt;
use std::str::FromStr;

use crate::error::LoreError;

/// Represents a 24-bit RGB color
///
/// Formats as the canonical `#RRGGBB` form used by lore text components.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct RgbColor(pub u8, pub u8, pub u8);

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor(0, 0, 0);
    pub const WHITE: RgbColor = RgbColor(255, 255, 255);
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for RgbColor {
    type Err = LoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.is_ascii())
            .ok_or_else(|| LoreError::InvalidColor(s.to_string()))?;

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| LoreError::InvalidColor(s.to_string()))
        };

        Ok(RgbColor(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl From<image::Rgb<u8>> for RgbColor {
    fn from(p: image::Rgb<u8>) -> Self {
        let [r, g, b] = p.0;
        RgbColor(r, g, b)
    }
}

impl From<RgbColor> for image::Rgb<u8> {
    fn from(c: RgbColor) -> Self {
        image::Rgb([c.0, c.1, c.2])
    }
}
