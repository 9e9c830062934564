//! Color values carried in markup attributes.
//!
//! Colors resolve eagerly to RGB so that two spellings of the same color
//! (`red`, `#f00`, `rgb(255, 0, 0)`) compare equal in the output.

use std::fmt;

use phf::phf_map;

use crate::error::ColorParseError;

/// Named colors, lowercase, mapped to their RGB components.
static NAMED_COLORS: phf::Map<&'static str, (u8, u8, u8)> = phf_map! {
    "black" => (0, 0, 0),
    "white" => (255, 255, 255),
    "red" => (255, 0, 0),
    "green" => (0, 128, 0),
    "lime" => (0, 255, 0),
    "blue" => (0, 0, 255),
    "yellow" => (255, 255, 0),
    "cyan" => (0, 255, 255),
    "aqua" => (0, 255, 255),
    "magenta" => (255, 0, 255),
    "fuchsia" => (255, 0, 255),
    "gray" => (128, 128, 128),
    "grey" => (128, 128, 128),
    "silver" => (192, 192, 192),
    "maroon" => (128, 0, 0),
    "olive" => (128, 128, 0),
    "navy" => (0, 0, 128),
    "purple" => (128, 0, 128),
    "teal" => (0, 128, 128),
    "orange" => (255, 165, 0),
    "pink" => (255, 192, 203),
    "brown" => (165, 42, 42),
    "coral" => (255, 127, 80),
    "gold" => (255, 215, 0),
    "indigo" => (75, 0, 130),
    "violet" => (238, 130, 238),
    "crimson" => (220, 20, 60),
    "darkgray" => (169, 169, 169),
    "darkgrey" => (169, 169, 169),
    "lightgray" => (211, 211, 211),
    "lightgrey" => (211, 211, 211),
    "darkblue" => (0, 0, 139),
    "darkred" => (139, 0, 0),
    "darkgreen" => (0, 100, 0),
    "skyblue" => (135, 206, 235),
    "tomato" => (255, 99, 71),
    "salmon" => (250, 128, 114),
    "khaki" => (240, 230, 140),
    "turquoise" => (64, 224, 208),
    "chocolate" => (210, 105, 30),
};

/// An RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a color from a string.
    ///
    /// Supports:
    /// - Named colors: `red`, `navy`, `skyblue`, etc.
    /// - Hex colors: `#RGB`, `#RRGGBB`
    /// - RGB function: `rgb(r, g, b)`
    ///
    /// # Examples
    ///
    /// ```
    /// use tagmark::Color;
    ///
    /// assert_eq!(Color::parse("red").unwrap(), Color::rgb(255, 0, 0));
    /// assert_eq!(Color::parse("#f00").unwrap(), Color::rgb(255, 0, 0));
    /// assert_eq!(Color::parse("rgb(255, 0, 0)").unwrap(), Color::rgb(255, 0, 0));
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();

        if let Some(hex) = input.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        let lower = input.to_ascii_lowercase();
        if let Some(args) = lower
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_rgb_func(args);
        }

        NAMED_COLORS
            .get(lower.as_str())
            .map(|&(r, g, b)| Color::rgb(r, g, b))
            .ok_or_else(|| ColorParseError::UnknownName(input.to_string()))
    }

    /// Look up a named color.
    pub fn named(name: &str) -> Option<Self> {
        NAMED_COLORS
            .get(name.to_ascii_lowercase().as_str())
            .map(|&(r, g, b)| Color::rgb(r, g, b))
    }

    /// Parse a hex color (without the # prefix).
    fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHex(format!("#{}", hex));

        let digits = hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(invalid)?;

        match digits.as_slice() {
            // #RGB
            &[r, g, b] => Ok(Color::rgb(r * 17, g * 17, b * 17)),
            // #RRGGBB
            &[r1, r2, g1, g2, b1, b2] => Ok(Color::rgb(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2)),
            _ => Err(invalid()),
        }
    }

    /// Parse an RGB function (the part inside the parentheses).
    fn parse_rgb_func(args: &str) -> Result<Self, ColorParseError> {
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();

        let [r, g, b] = parts.as_slice() else {
            return Err(ColorParseError::InvalidRgb(format!("rgb({})", args)));
        };

        let component = |name: &str, part: &str| {
            part.parse::<u8>()
                .map_err(|_| ColorParseError::InvalidRgb(format!("invalid {}: {}", name, part)))
        };

        Ok(Color::rgb(
            component("red", *r)?,
            component("green", *g)?,
            component("blue", *b)?,
        ))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_named_is_case_insensitive() {
        assert_eq!(Color::parse("Red").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::parse("  NAVY ").unwrap(), Color::rgb(0, 0, 128));
    }

    #[test]
    fn parse_short_and_long_hex() {
        assert_eq!(Color::parse("#abc").unwrap(), Color::rgb(0xaa, 0xbb, 0xcc));
        assert_eq!(Color::parse("#FF5733").unwrap(), Color::rgb(255, 87, 51));
    }

    #[test]
    fn parse_rgb_function() {
        assert_eq!(
            Color::parse("RGB( 1, 2 ,3 )").unwrap(),
            Color::rgb(1, 2, 3)
        );
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            Color::parse("notacolor"),
            Err(ColorParseError::UnknownName(_))
        ));
        assert!(matches!(
            Color::parse("#12"),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            Color::parse("#ggg"),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            Color::parse("rgb(1, 2)"),
            Err(ColorParseError::InvalidRgb(_))
        ));
        assert!(matches!(
            Color::parse("rgb(1, 2, 300)"),
            Err(ColorParseError::InvalidRgb(_))
        ));
    }

    #[test]
    fn display_as_hex() {
        assert_eq!(Color::rgb(255, 87, 51).to_string(), "#ff5733");
    }
}
