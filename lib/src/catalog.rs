//! Compiled-in hex digit fonts.

use core::fmt;

/// Number of glyphs in every font: the hex digits 0 to F.
pub const GLYPHS: usize = 16;

const OCTO: &str = "octo";
const VIP: &str = "vip";
const DREAM6800: &str = "dream6800";
const ETI660: &str = "eti660";
const FISH: &str = "fish";
const SCHIP: &str = "schip";

/// Names of the small fonts, indexed like `SMALL_FONTS`.
pub const SMALL_FONT_NAMES: &[&str] = &[OCTO, VIP, DREAM6800, ETI660, FISH];
/// Names of the big fonts, indexed like `BIG_FONTS`.
pub const BIG_FONT_NAMES: &[&str] = &[OCTO, SCHIP, FISH];

pub struct Font {
    /// Display name, also used for selection by name.
    pub name: &'static str,
    /// Bitmap data, one byte per row, glyphs stored back to back.
    pub data: &'static [u8],
}

pub const SMALL_FONTS: &[Font] = &include!("font_small.rs");
pub const BIG_FONTS: &[Font] = &include!("font_big.rs");

/// The two font families of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    /// 8x5 pixel glyphs.
    Small,
    /// 8x10 pixel glyphs.
    Big,
}

impl FontSize {
    /// Bytes (= pixel rows) per glyph.
    pub const fn glyph_len(self) -> usize {
        match self {
            FontSize::Small => 5,
            FontSize::Big => 10,
        }
    }

    /// Bytes of a complete font.
    pub const fn block_len(self) -> usize {
        self.glyph_len() * GLYPHS
    }

    pub fn fonts(self) -> &'static [Font] {
        match self {
            FontSize::Small => SMALL_FONTS,
            FontSize::Big => BIG_FONTS,
        }
    }

    pub fn names(self) -> &'static [&'static str] {
        match self {
            FontSize::Small => SMALL_FONT_NAMES,
            FontSize::Big => BIG_FONT_NAMES,
        }
    }

    pub fn variant_count(self) -> usize {
        self.fonts().len()
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FontSize::Small => "small",
            FontSize::Big => "big",
        })
    }
}

/// Return the glyph block of font `index`, or None if there is no such font.
pub fn glyphs(size: FontSize, index: usize) -> Option<&'static [u8]> {
    size.fonts().get(index).map(|font| font.data)
}

/// Return the display name of font `index`.
pub fn name(size: FontSize, index: usize) -> Option<&'static str> {
    size.names().get(index).copied()
}

/// Look up a font by its exact (case-sensitive) name.
///
/// Names are unique within a size class; should that ever change, the last
/// matching entry wins.
pub fn index_of_name(size: FontSize, name: &str) -> Option<usize> {
    size.names().iter().rposition(|&n| n == name)
}

/// Selectable small fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmallFont {
    Octo,
    Vip,
    Dream6800,
    Eti660,
    Fish,
}

impl SmallFont {
    pub const ALL: [SmallFont; 5] = [
        SmallFont::Octo, SmallFont::Vip, SmallFont::Dream6800, SmallFont::Eti660, SmallFont::Fish,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        index_of_name(FontSize::Small, name).and_then(Self::from_index)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        SMALL_FONTS[self.index()].name
    }

    pub fn glyphs(self) -> &'static [u8] {
        SMALL_FONTS[self.index()].data
    }
}

impl Default for SmallFont {
    fn default() -> Self {
        SmallFont::Octo
    }
}

/// Selectable big fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigFont {
    Octo,
    Schip,
    Fish,
}

impl BigFont {
    pub const ALL: [BigFont; 3] = [BigFont::Octo, BigFont::Schip, BigFont::Fish];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        index_of_name(FontSize::Big, name).and_then(Self::from_index)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        BIG_FONTS[self.index()].name
    }

    pub fn glyphs(self) -> &'static [u8] {
        BIG_FONTS[self.index()].data
    }
}

impl Default for BigFont {
    fn default() -> Self {
        BigFont::Octo
    }
}
