use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyWidthError {
    #[error("key width {width} is out of range: only {min} <= key_width <= {max} is supported")]
    OutOfRange { width: u32, min: u32, max: u32 },
}

/// Number of bits spanned by both the keys and the values of a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyWidth(u32);

impl KeyWidth {
    pub const MIN: u32 = 1;
    /// Wider keys would produce tables of more than 65536 entries.
    pub const MAX: u32 = 16;

    pub fn new(width: u32) -> Result<Self, KeyWidthError> {
        if (Self::MIN..=Self::MAX).contains(&width) {
            Ok(Self(width))
        } else {
            Err(KeyWidthError::OutOfRange {
                width,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Number of distinct keys, `2^bits`.
    pub fn n_entries(&self) -> usize {
        1usize << self.0
    }

    /// Largest representable key (all ones).
    pub fn max_value(&self) -> u32 {
        (1u32 << self.0) - 1
    }

    /// Iterate over all widths in the supported range.
    pub fn all() -> impl Iterator<Item = KeyWidth> {
        (Self::MIN..=Self::MAX).map(KeyWidth)
    }
}

impl TryFrom<u32> for KeyWidth {
    type Error = KeyWidthError;

    fn try_from(width: u32) -> Result<Self, Self::Error> {
        Self::new(width)
    }
}

impl fmt::Display for KeyWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
