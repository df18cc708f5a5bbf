//! Hex digit fonts for CHIP-8 style virtual machines.
//!
//! Fonts come in two sizes: small 8x5 glyphs and big 8x10 glyphs (SCHIP and
//! later).  A `Machine` wraps the VM memory and keeps track of which font of
//! each size is installed there.

pub mod catalog;
pub mod error;
pub mod machine;
pub mod selector;
mod install;

pub use catalog::{BigFont, FontSize, SmallFont, BIG_FONT_NAMES, SMALL_FONT_NAMES};
pub use error::FontError;
pub use machine::{FontSelection, Layout, Machine};
pub use selector::FontSpec;

/// Default size of machine memory.
pub const MEM_SIZE: usize = 4096;
