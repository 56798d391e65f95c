//! RGBA colors as renderers receive them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// An sRGB color with straight alpha in `[0, 1]`.
///
/// Serializes as a CSS color string: `rgba(r, g, b, a)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// `#RRGGBB`, alpha dropped. Used where renderers want hex strokes.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = String;

    /// Accepts `#RRGGBB` and `rgba(r, g, b, a)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(format!("Invalid hex color: {}", s));
            }
            let channel = |i: usize| {
                u8::from_str_radix(&hex[i..i + 2], 16)
                    .map_err(|e| format!("Invalid hex color {}: {}", s, e))
            };
            return Ok(Self::opaque(channel(0)?, channel(2)?, channel(4)?));
        }

        let inner = s
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| format!("Unsupported color syntax: {}", s))?;
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(format!("Expected 4 rgba components: {}", s));
        }
        let channel = |p: &str| p.parse::<u8>().map_err(|e| format!("{}: {}", s, e));
        let a = parts[3]
            .parse::<f32>()
            .map_err(|e| format!("{}: {}", s, e))?;
        if !(0.0..=1.0).contains(&a) {
            return Err(format!("Alpha out of range: {}", s));
        }
        Ok(Self::new(
            channel(parts[0])?,
            channel(parts[1])?,
            channel(parts[2])?,
            a,
        ))
    }
}

impl Serialize for Rgba {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Rgba::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_css() {
        assert_eq!(Rgba::new(75, 192, 192, 1.0).to_string(), "rgba(75, 192, 192, 1)");
        assert_eq!(Rgba::new(153, 102, 255, 0.6).to_string(), "rgba(153, 102, 255, 0.6)");
    }

    #[test]
    fn test_parse_hex() {
        let c: Rgba = "#26A69A".parse().unwrap();
        assert_eq!(c, Rgba::opaque(0x26, 0xA6, 0x9A));
        assert_eq!(c.to_hex(), "#26A69A");
    }

    #[test]
    fn test_parse_rgba() {
        let c: Rgba = "rgba(255, 206, 86, 0.6)".parse().unwrap();
        assert_eq!(c, Rgba::new(255, 206, 86, 0.6));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("teal".parse::<Rgba>().is_err());
        assert!("#12345".parse::<Rgba>().is_err());
        assert!("#aééa".parse::<Rgba>().is_err());
        assert!("#12345g".parse::<Rgba>().is_err());
        assert!("rgba(1, 2, 3)".parse::<Rgba>().is_err());
        assert!("rgba(1, 2, 3, 1.5)".parse::<Rgba>().is_err());
    }

    #[test]
    fn test_serde_as_css_string() {
        let c = Rgba::new(54, 162, 235, 0.6);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"rgba(54, 162, 235, 0.6)\"");
        let back: Rgba = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
