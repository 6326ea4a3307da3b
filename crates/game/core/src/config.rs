use crate::error::InvalidInput;
use crate::state::Side;
use crate::toss::TossOutcome;

/// Immutable match settings supplied to the engine at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchConfig {
    /// Overs per inning. Each over is [`MatchConfig::BALLS_PER_OVER`] balls.
    pub overs: u32,
    /// Wickets that close an inning.
    pub wickets_limit: u32,
    /// Side that bats in inning 1.
    pub batting_first: Side,
}

impl MatchConfig {
    // ===== rules constants =====
    pub const BALLS_PER_OVER: u32 = 6;
    /// Largest overs value whose ball count still fits in a `u32`.
    pub const MAX_OVERS: u32 = u32::MAX / Self::BALLS_PER_OVER;

    // ===== presets offered by frontends =====
    pub const OVER_PRESETS: [u32; 3] = [1, 3, 5];
    pub const WICKET_PRESETS: [u32; 3] = [1, 3, 5];
    pub const DEFAULT_OVERS: u32 = 1;
    pub const DEFAULT_WICKETS: u32 = 1;

    /// Builds a config without validation; [`MatchConfig::validate`] runs when
    /// the engine is constructed.
    pub const fn new(overs: u32, wickets_limit: u32, batting_first: Side) -> Self {
        Self {
            overs,
            wickets_limit,
            batting_first,
        }
    }

    /// Derives the batting order from a finished toss.
    pub fn from_toss(overs: u32, wickets_limit: u32, toss: &TossOutcome) -> Self {
        Self::new(overs, wickets_limit, toss.batting_first())
    }

    /// Rejects zero overs, overs beyond [`MatchConfig::MAX_OVERS`] or a zero
    /// wickets limit.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if self.overs == 0 {
            return Err(InvalidInput::ZeroOvers);
        }
        if self.overs > Self::MAX_OVERS {
            return Err(InvalidInput::TooManyOvers(self.overs));
        }
        if self.wickets_limit == 0 {
            return Err(InvalidInput::ZeroWickets);
        }
        Ok(())
    }

    /// Exact for any config that passed [`MatchConfig::validate`].
    pub const fn balls_per_inning(&self) -> u32 {
        self.overs.saturating_mul(Self::BALLS_PER_OVER)
    }

    pub const fn batting_second(&self) -> Side {
        self.batting_first.other()
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OVERS, Self::DEFAULT_WICKETS, Side::A)
    }
}

/// Who controls each side.
///
/// Side `A` is always driven by an external caller and is the perspective
/// results are reported from. Side `B` is either the computer or a second
/// person at the same device.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum MatchMode {
    /// Human (A) against the computer (B).
    #[default]
    SinglePlayer,
    /// Two people sharing one device; batter picks first, then bowler.
    LocalTwoPlayer,
}

impl MatchMode {
    /// The side whose per-ball picks are drawn by the engine, if any.
    pub const fn autonomous_picker(&self) -> Option<Side> {
        match self {
            MatchMode::SinglePlayer => Some(Side::B),
            MatchMode::LocalTwoPlayer => None,
        }
    }

    /// The side whose bat/bowl decision comes from explicit input when it
    /// wins the toss. The other side's decision is drawn at random in both
    /// modes.
    pub const fn toss_decider(&self) -> Side {
        Side::A
    }

    /// Side whose perspective the result is reported from.
    pub const fn primary_side(&self) -> Side {
        Side::A
    }
}
