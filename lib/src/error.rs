use thiserror::Error;

use crate::catalog::FontSize;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FontError {
    #[error("Invalid font: {0}")]
    UnknownSmallFont(String),
    #[error("Invalid font: {0}")]
    UnknownBigFont(String),
    #[error("{size} font region at {start:#05x} does not fit into {mem_len} bytes of memory")]
    RegionOutOfBounds { size: FontSize, start: usize, mem_len: usize },
    #[error("font regions at {small:#05x} and {big:#05x} overlap")]
    RegionsOverlap { small: usize, big: usize },
}

impl FontError {
    /// The font name that could not be resolved, if this is a name error.
    pub fn token(&self) -> Option<&str> {
        match self {
            FontError::UnknownSmallFont(name) | FontError::UnknownBigFont(name) => Some(name),
            _ => None,
        }
    }
}
