/// One of the two teams in a match.
///
/// In single-player mode `A` is the human and `B` the computer; in local
/// two-player mode `A` is Player 1 and `B` is Player 2. Results are always
/// reported from `A`'s perspective.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::A, Side::B];

    /// The opposing side.
    pub const fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Stable index used when deriving RNG seeds.
    pub const fn index(self) -> u32 {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}
