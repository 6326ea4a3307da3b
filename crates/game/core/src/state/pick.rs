use crate::error::InvalidInput;

/// A hand shown by one side: an integer in `1..=6`.
///
/// Construction is the only place the range is checked; every `Pick` in the
/// engine is valid by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct Pick(u8);

impl Pick {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 6;

    /// Validates a raw caller-supplied value.
    pub fn new(value: u32) -> Result<Self, InvalidInput> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(InvalidInput::PickOutOfRange(value))
        }
    }

    pub const fn value(self) -> u32 {
        self.0 as u32
    }

    /// Every legal pick, in ascending order.
    pub fn all() -> impl Iterator<Item = Pick> {
        (Self::MIN..=Self::MAX).map(|v| Pick(v as u8))
    }
}

impl TryFrom<u32> for Pick {
    type Error = InvalidInput;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Pick> for u32 {
    fn from(pick: Pick) -> Self {
        pick.value()
    }
}

impl core::fmt::Display for Pick {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
