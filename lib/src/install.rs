//! Copying fonts into machine memory.

use tracing::debug;

use crate::catalog::{BigFont, FontSize, SmallFont};
use crate::error::FontError;
use crate::machine::Machine;
use crate::selector::FontSpec;

impl<'mem> Machine<'mem> {
    /// Install fonts by table index.
    ///
    /// `None` leaves that font unchanged.  Indices outside the table are
    /// ignored as well, this is not an error.
    pub fn set_fonts(&mut self, small: Option<usize>, big: Option<usize>) {
        if let Some(index) = small {
            match SmallFont::from_index(index) {
                Some(font) => self.install_small(font),
                None => debug!(index, "ignoring out of range small font index"),
            }
        }
        if let Some(index) = big {
            match BigFont::from_index(index) {
                Some(font) => self.install_big(font),
                None => debug!(index, "ignoring out of range big font index"),
            }
        }
    }

    pub fn install_small(&mut self, font: SmallFont) {
        let region = self.layout.region(FontSize::Small);
        self.mem[region].copy_from_slice(font.glyphs());
        self.fonts.small = font;
        debug!(font = font.name(), at = self.layout.font_start, "installed small font");
    }

    pub fn install_big(&mut self, font: BigFont) {
        let region = self.layout.region(FontSize::Big);
        self.mem[region].copy_from_slice(font.glyphs());
        self.fonts.big = font;
        debug!(font = font.name(), at = self.layout.high_font_start, "installed big font");
    }

    /// Install the small font called `name`.  Nothing changes if there is none.
    pub fn set_small_font(&mut self, name: &str) -> Result<SmallFont, FontError> {
        match SmallFont::from_name(name) {
            Some(font) => {
                self.install_small(font);
                Ok(font)
            }
            None => {
                debug!(font = name, "no such small font");
                Err(FontError::UnknownSmallFont(name.into()))
            }
        }
    }

    /// Install the big font called `name`.  Nothing changes if there is none.
    pub fn set_big_font(&mut self, name: &str) -> Result<BigFont, FontError> {
        match BigFont::from_name(name) {
            Some(font) => {
                self.install_big(font);
                Ok(font)
            }
            None => {
                debug!(font = name, "no such big font");
                Err(FontError::UnknownBigFont(name.into()))
            }
        }
    }

    /// Install fonts from a `small[,big]` name specification.
    ///
    /// The small font is installed before the big name is looked at, so it
    /// stays installed when the big name turns out to be invalid.
    pub fn set_fonts_from_spec(&mut self, spec: &str) -> Result<(), FontError> {
        let FontSpec { small, big } = FontSpec::parse(spec);
        self.set_small_font(small)?;
        if let Some(big) = big {
            self.set_big_font(big)?;
        }
        Ok(())
    }

    /// Names of the installed fonts, for diagnostics.
    pub fn describe_fonts(&self) -> String {
        self.fonts.to_string()
    }
}
