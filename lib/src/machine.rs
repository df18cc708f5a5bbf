//! The part of the virtual machine the fonts live in.

use core::fmt;
use core::ops::Range;

use crate::catalog::{BigFont, FontSize, SmallFont};
use crate::error::FontError;

/// Start of the small font in memory.
pub const FONT_START: usize = 0x000;
/// Start of the big font, directly after the small one.
pub const HIGH_FONT_START: usize = FONT_START + FontSize::Small.block_len();

/// Where the two font regions are located in machine memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub font_start: usize,
    pub high_font_start: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self { font_start: FONT_START, high_font_start: HIGH_FONT_START }
    }
}

impl Layout {
    fn start(&self, size: FontSize) -> usize {
        match size {
            FontSize::Small => self.font_start,
            FontSize::Big => self.high_font_start,
        }
    }

    /// Memory range of the font of this size.  Only valid after `validate`.
    pub fn region(&self, size: FontSize) -> Range<usize> {
        let start = self.start(size);
        start..start + size.block_len()
    }

    /// Check that both regions fit into `mem_len` bytes without overlapping.
    pub fn validate(&self, mem_len: usize) -> Result<(), FontError> {
        for &size in &[FontSize::Small, FontSize::Big] {
            let start = self.start(size);
            match start.checked_add(size.block_len()) {
                Some(end) if end <= mem_len => {}
                _ => return Err(FontError::RegionOutOfBounds { size, start, mem_len }),
            }
        }
        let small = self.region(FontSize::Small);
        let big = self.region(FontSize::Big);
        if small.start < big.end && big.start < small.end {
            return Err(FontError::RegionsOverlap { small: small.start, big: big.start });
        }
        Ok(())
    }
}

/// The currently installed fonts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FontSelection {
    pub small: SmallFont,
    pub big: BigFont,
}

impl fmt::Display for FontSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SFONT: {}\tBFONT: {}", self.small.name(), self.big.name())
    }
}

/// Machine memory together with the font state that mirrors it.
pub struct Machine<'mem> {
    pub(crate) mem: &'mem mut [u8],
    pub(crate) layout: Layout,
    pub(crate) fonts: FontSelection,
}

impl<'mem> Machine<'mem> {
    /// Create a machine with the default layout, see `with_layout`.
    pub fn new(mem: &'mem mut [u8]) -> Result<Self, FontError> {
        Self::with_layout(mem, Layout::default())
    }

    /// Create a machine over `mem`, and install the default fonts.
    pub fn with_layout(mem: &'mem mut [u8], layout: Layout) -> Result<Self, FontError> {
        layout.validate(mem.len())?;
        let mut machine = Self { mem, layout, fonts: FontSelection::default() };
        machine.install_small(SmallFont::default());
        machine.install_big(BigFont::default());
        Ok(machine)
    }

    pub fn mem(&self) -> &[u8] {
        &self.mem
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn fonts(&self) -> FontSelection {
        self.fonts
    }

    pub fn low_font_region(&self) -> &[u8] {
        &self.mem[self.layout.region(FontSize::Small)]
    }

    pub fn high_font_region(&self) -> &[u8] {
        &self.mem[self.layout.region(FontSize::Big)]
    }

    /// Address of the glyph for the low nibble of `digit`.
    pub fn glyph_address(&self, size: FontSize, digit: u8) -> usize {
        self.layout.region(size).start + (digit & 0xf) as usize * size.glyph_len()
    }
}
