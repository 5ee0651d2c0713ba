//! Category → color table shared by all three charts.
//!
//! The table is plain data: an ordered list of `(category, color, legend label)`
//! entries plus one fallback entry. Lookup is an exact, case-sensitive match and
//! the first matching entry wins; every other category gets the fallback color.
//! Because the table is the only source of colors, marks and legends of the bar,
//! line and scatter charts always agree.
//!
//! # Example
//!
//! ```rust
//! use econ_charts::style::{CategoryPalette, Rgb};
//!
//! let palette = CategoryPalette::default();
//! assert_eq!(palette.color_for("Japan"), Rgb::rgb(0xE6, 0x9F, 0x00));
//! assert_eq!(palette.color_for("Brazil"), palette.fallback_color());
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Opaque RGB color, serialized as `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&s).ok_or_else(|| format!("invalid color {s:?}, expected #RRGGBB"))
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_hex()
    }
}

/// One row of the color table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Category name as it appears in the data (`"Japan"`).
    pub name: String,
    /// Short legend text (`"Jpn"`).
    pub label: String,
    pub color: Rgb,
}

impl PaletteEntry {
    pub fn new(name: &str, label: &str, color: Rgb) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            color,
        }
    }
}

/// Ordered category table with a fallback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryPalette {
    pub entries: Vec<PaletteEntry>,
    /// Used for any category without an entry. Its `name` is informational.
    pub fallback: PaletteEntry,
}

/// Okabe-Ito colors; Singapore is drawn with the fallback blue.
impl Default for CategoryPalette {
    fn default() -> Self {
        Self {
            entries: vec![
                PaletteEntry::new("Japan", "Jpn", Rgb::rgb(0xE6, 0x9F, 0x00)),
                PaletteEntry::new("Korea", "Kor", Rgb::rgb(0x56, 0xB4, 0xE9)),
                PaletteEntry::new("Indonesia", "Ind", Rgb::rgb(0x00, 0x9E, 0x73)),
                PaletteEntry::new("China", "Chn", Rgb::rgb(0xF0, 0xE4, 0x42)),
            ],
            fallback: PaletteEntry::new("Singapore", "Sing", Rgb::rgb(0x00, 0x72, 0xB2)),
        }
    }
}

impl CategoryPalette {
    /// Color of `category`; total over all strings.
    pub fn color_for(&self, category: &str) -> Rgb {
        self.entries
            .iter()
            .find(|e| e.name == category)
            .map(|e| e.color)
            .unwrap_or(self.fallback.color)
    }

    pub fn fallback_color(&self) -> Rgb {
        self.fallback.color
    }

    /// Categories with their own color, in table order.
    pub fn known_categories(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// `(label, color)` pairs for the legend: every entry, then the fallback.
    pub fn legend_entries(&self) -> Vec<(String, Rgb)> {
        self.entries
            .iter()
            .chain(std::iter::once(&self.fallback))
            .map(|e| (e.label.clone(), e.color))
            .collect()
    }

    /// Load a table from JSON (same shape as the serialized default).
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read palette {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parse palette {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip_and_rejects() {
        let c = Rgb::from_hex("#56B4E9").unwrap();
        assert_eq!(c, Rgb::rgb(0x56, 0xB4, 0xE9));
        assert_eq!(c.to_hex(), "#56B4E9");
        assert_eq!(Rgb::from_hex("009e73"), Some(Rgb::rgb(0, 0x9E, 0x73)));
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#GG0000"), None);
    }

    #[test]
    fn first_match_wins() {
        let mut p = CategoryPalette::default();
        p.entries
            .push(PaletteEntry::new("Japan", "J2", Rgb::rgb(1, 2, 3)));
        assert_eq!(p.color_for("Japan"), Rgb::rgb(0xE6, 0x9F, 0x00));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let p = CategoryPalette::default();
        assert_eq!(p.color_for("japan"), p.fallback_color());
        assert_eq!(p.color_for(""), p.fallback_color());
    }

    #[test]
    fn legend_lists_fallback_last() {
        let p = CategoryPalette::default();
        let labels: Vec<String> = p.legend_entries().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, ["Jpn", "Kor", "Ind", "Chn", "Sing"]);
    }

    #[test]
    fn serde_uses_hex_strings() {
        let p = CategoryPalette::default();
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"#E69F00\""));
        let back: CategoryPalette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
