//! Font and color table entries.

use super::symbols::Minor;
use crate::common::encoding::charset_to_codepage;

/// Font family categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    /// Nil (unknown or default)
    #[default]
    Nil,
    /// Roman (serif) fonts
    Roman,
    /// Swiss (sans-serif) fonts
    Swiss,
    /// Modern (monospace) fonts
    Modern,
    /// Script fonts
    Script,
    /// Decorative fonts
    Decor,
    /// Technical, symbol, and mathematical fonts
    Tech,
    /// Arabic, Hebrew, or other bidirectional fonts
    Bidi,
}

impl FontFamily {
    /// Family named by a font-family control word.
    pub fn from_minor(minor: Minor) -> Option<Self> {
        Some(match minor {
            Minor::FamNil => FontFamily::Nil,
            Minor::FamRoman => FontFamily::Roman,
            Minor::FamSwiss => FontFamily::Swiss,
            Minor::FamModern => FontFamily::Modern,
            Minor::FamScript => FontFamily::Script,
            Minor::FamDecor => FontFamily::Decor,
            Minor::FamTech => FontFamily::Tech,
            Minor::FamBidi => FontFamily::Bidi,
            _ => return None,
        })
    }
}

/// Font definition from the font table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Font {
    /// Font number referenced by `\fN`
    pub num: i32,
    /// Font name
    pub name: String,
    /// Alternate name from `{\*\falt ...}`
    pub alt_name: Option<String>,
    /// Font family category
    pub family: FontFamily,
    /// `\fcharsetN`
    pub charset: Option<i32>,
    /// `\fprqN`
    pub pitch: Option<i32>,
    /// `\cpgN`
    pub codepage: Option<u16>,
    /// Set by `\fttruetype`
    pub truetype: bool,
}

impl Font {
    /// Create an empty font definition.
    #[inline]
    pub fn new(num: i32) -> Self {
        Self {
            num,
            ..Self::default()
        }
    }

    /// Codepage text in this font is encoded with.
    ///
    /// An explicit `\cpg` wins over the codepage implied by `\fcharset`.
    pub fn effective_codepage(&self) -> Option<u16> {
        self.codepage
            .filter(|&cp| cp != 0)
            .or_else(|| self.charset.and_then(charset_to_codepage))
    }
}

/// Font table containing document fonts.
#[derive(Debug, Clone, Default)]
pub struct FontTable {
    fonts: Vec<Font>,
}

impl FontTable {
    /// Create a new font table.
    #[inline]
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Add a font, replacing any earlier definition with the same number.
    pub fn insert(&mut self, font: Font) {
        match self.fonts.iter_mut().find(|f| f.num == font.num) {
            Some(existing) => *existing = font,
            None => self.fonts.push(font),
        }
    }

    /// Get a font by number.
    #[inline]
    pub fn get(&self, num: i32) -> Option<&Font> {
        self.fonts.iter().find(|f| f.num == num)
    }

    /// All fonts in definition order.
    #[inline]
    pub fn fonts(&self) -> &[Font] {
        &self.fonts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

/// Color table entry.
///
/// Components left out of the entry stay `None`; the customary empty first
/// entry (`;` alone) therefore means "automatic color".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    /// Index referenced by `\cfN` / `\cbN`
    pub num: usize,
    pub red: Option<u8>,
    pub green: Option<u8>,
    pub blue: Option<u8>,
}

impl Color {
    /// `true` when no component was given.
    #[inline]
    pub fn is_auto(&self) -> bool {
        self.red.is_none() && self.green.is_none() && self.blue.is_none()
    }

    /// Components with missing ones read as 0.
    #[inline]
    pub fn rgb(&self) -> (u8, u8, u8) {
        (
            self.red.unwrap_or(0),
            self.green.unwrap_or(0),
            self.blue.unwrap_or(0),
        )
    }
}

/// Color table containing document colors.
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    colors: Vec<Color>,
}

impl ColorTable {
    /// Create a new color table.
    #[inline]
    pub fn new() -> Self {
        Self { colors: Vec::new() }
    }

    /// Add a color to the table and return its index.
    #[inline]
    pub fn add(&mut self, mut color: Color) -> usize {
        let index = self.colors.len();
        color.num = index;
        self.colors.push(color);
        index
    }

    /// Get a color by index.
    #[inline]
    pub fn get(&self, num: usize) -> Option<&Color> {
        self.colors.get(num)
    }

    /// Get all colors in the table.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_replace_by_number() {
        let mut table = FontTable::new();
        table.insert(Font {
            name: "Arial".into(),
            ..Font::new(0)
        });
        table.insert(Font {
            name: "Courier".into(),
            ..Font::new(1)
        });
        table.insert(Font {
            name: "Helvetica".into(),
            ..Font::new(0)
        });
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0).map(|f| f.name.as_str()), Some("Helvetica"));
        assert!(table.get(7).is_none());
    }

    #[test]
    fn test_effective_codepage() {
        let mut font = Font::new(0);
        assert_eq!(font.effective_codepage(), None);
        font.charset = Some(204);
        assert_eq!(font.effective_codepage(), Some(1251));
        font.codepage = Some(1250);
        assert_eq!(font.effective_codepage(), Some(1250));
        font.codepage = Some(0);
        assert_eq!(font.effective_codepage(), Some(1251));
    }

    #[test]
    fn test_color_table_numbers_entries() {
        let mut table = ColorTable::new();
        assert_eq!(table.add(Color::default()), 0);
        let red = Color {
            red: Some(255),
            green: Some(0),
            blue: Some(0),
            ..Color::default()
        };
        assert_eq!(table.add(red), 1);
        assert!(table.get(0).unwrap().is_auto());
        assert_eq!(table.get(1).unwrap().rgb(), (255, 0, 0));
        assert_eq!(table.get(1).unwrap().num, 1);
    }
}
