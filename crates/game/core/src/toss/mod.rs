//! Pre-match toss: odd/even call, number draw, winner, bat/bowl decision.
//!
//! [`TossResolver`] is a small explicit state machine:
//!
//! ```text
//! AwaitingCall --call_parity--> AwaitingDraw --draw--> AwaitingDecision
//!     --record_decision / decide_autonomously--> Decided
//! ```
//!
//! Side A always makes the parity call and shows its number. Side B's number
//! is drawn from the injected [`RngOracle`]. Exactly one side (the *decider*)
//! chooses bat/bowl explicitly when it wins; when the other side wins, its
//! decision is drawn at random.

mod errors;

pub use errors::TossError;

use crate::env::{ROLL_TOSS_DECISION, ROLL_TOSS_DRAW, RngOracle, compute_seed};
use crate::state::{Pick, Side};

/// Side A's parity call.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TossChoice {
    Odd,
    Even,
}

impl TossChoice {
    /// Parity of a sum of two hands.
    pub const fn of_sum(sum: u32) -> Self {
        if sum % 2 == 0 {
            TossChoice::Even
        } else {
            TossChoice::Odd
        }
    }
}

/// What the toss winner elects to do first.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BatBowlDecision {
    Bat,
    Bowl,
}

/// Numbers shown by both sides and the resulting winner, before the
/// bat/bowl decision is known.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TossDraw {
    pub caller_choice: TossChoice,
    pub draw_a: Pick,
    pub draw_b: Pick,
    pub winner: Side,
}

impl TossDraw {
    fn resolve(caller_choice: TossChoice, draw_a: Pick, draw_b: Pick) -> Self {
        let parity = TossChoice::of_sum(draw_a.value() + draw_b.value());
        let winner = if parity == caller_choice {
            Side::A
        } else {
            Side::B
        };
        Self {
            caller_choice,
            draw_a,
            draw_b,
            winner,
        }
    }

    pub fn sum(&self) -> u32 {
        self.draw_a.value() + self.draw_b.value()
    }

    pub fn parity(&self) -> TossChoice {
        TossChoice::of_sum(self.sum())
    }
}

/// Final, immutable result of the toss.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TossOutcome {
    pub caller_choice: TossChoice,
    pub draw_a: Pick,
    pub draw_b: Pick,
    pub winner: Side,
    pub decision: BatBowlDecision,
}

impl TossOutcome {
    /// Winner bats first iff it chose to bat.
    pub fn batting_first(&self) -> Side {
        match self.decision {
            BatBowlDecision::Bat => self.winner,
            BatBowlDecision::Bowl => self.winner.other(),
        }
    }
}

/// Progress of a toss.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TossStage {
    AwaitingCall,
    AwaitingDraw { call: TossChoice },
    AwaitingDecision(TossDraw),
    Decided(TossOutcome),
}

impl TossStage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TossStage::AwaitingCall => "awaiting call",
            TossStage::AwaitingDraw { .. } => "awaiting draw",
            TossStage::AwaitingDecision(_) => "awaiting decision",
            TossStage::Decided(_) => "decided",
        }
    }
}

/// Resolves one toss.
#[derive(Clone, Debug)]
pub struct TossResolver {
    decider: Side,
    seed: u64,
    stage: TossStage,
}

impl TossResolver {
    /// Creates a resolver where side A drives its own decision.
    pub fn new(seed: u64) -> Self {
        Self::with_decider(Side::A, seed)
    }

    /// Creates a resolver where `decider` supplies its decision explicitly and
    /// the other side's decision is drawn at random.
    pub fn with_decider(decider: Side, seed: u64) -> Self {
        Self {
            decider,
            seed,
            stage: TossStage::AwaitingCall,
        }
    }

    pub fn stage(&self) -> &TossStage {
        &self.stage
    }

    /// Winner, once the numbers have been drawn.
    pub fn winner(&self) -> Option<Side> {
        match &self.stage {
            TossStage::AwaitingDecision(draw) => Some(draw.winner),
            TossStage::Decided(outcome) => Some(outcome.winner),
            _ => None,
        }
    }

    /// True when the drawn winner's decision must come from explicit input.
    pub fn awaits_external_decision(&self) -> bool {
        matches!(&self.stage, TossStage::AwaitingDecision(draw) if draw.winner == self.decider)
    }

    pub fn outcome(&self) -> Option<&TossOutcome> {
        match &self.stage {
            TossStage::Decided(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Records side A's odd/even call.
    pub fn call_parity(&mut self, choice: TossChoice) -> Result<(), TossError> {
        match self.stage {
            TossStage::AwaitingCall => {
                self.stage = TossStage::AwaitingDraw { call: choice };
                Ok(())
            }
            stage => Err(TossError::invalid_transition("call parity", stage.as_str())),
        }
    }

    /// Takes side A's number, draws side B's and determines the winner.
    pub fn draw<R>(&mut self, number_a: u32, rng: &R) -> Result<TossDraw, TossError>
    where
        R: RngOracle + ?Sized,
    {
        let call = match self.stage {
            TossStage::AwaitingDraw { call } => call,
            stage => return Err(TossError::invalid_transition("draw", stage.as_str())),
        };
        let draw_a = Pick::new(number_a)?;
        let draw_b = Pick::new(
            rng.roll_hand(compute_seed(self.seed, 0, Side::B.index(), ROLL_TOSS_DRAW)),
        )?;

        let draw = TossDraw::resolve(call, draw_a, draw_b);
        self.stage = TossStage::AwaitingDecision(draw);
        Ok(draw)
    }

    /// Finalizes the toss.
    ///
    /// `decision` is honoured only when the decider won; otherwise the
    /// winner's decision is drawn at random and `decision` is ignored.
    pub fn record_decision<R>(
        &mut self,
        decision: BatBowlDecision,
        rng: &R,
    ) -> Result<TossOutcome, TossError>
    where
        R: RngOracle + ?Sized,
    {
        let draw = self.pending_draw("record decision")?;
        let decision = if draw.winner == self.decider {
            decision
        } else {
            self.autonomous_decision(draw.winner, rng)
        };
        Ok(self.finish(draw, decision))
    }

    /// Finalizes the toss when the autonomous side won.
    pub fn decide_autonomously<R>(&mut self, rng: &R) -> Result<TossOutcome, TossError>
    where
        R: RngOracle + ?Sized,
    {
        let draw = self.pending_draw("decide autonomously")?;
        if draw.winner == self.decider {
            return Err(TossError::DecisionNotAutonomous {
                winner: draw.winner,
            });
        }
        let decision = self.autonomous_decision(draw.winner, rng);
        Ok(self.finish(draw, decision))
    }

    fn pending_draw(&self, operation: &'static str) -> Result<TossDraw, TossError> {
        match self.stage {
            TossStage::AwaitingDecision(draw) => Ok(draw),
            stage => Err(TossError::invalid_transition(operation, stage.as_str())),
        }
    }

    fn autonomous_decision<R>(&self, winner: Side, rng: &R) -> BatBowlDecision
    where
        R: RngOracle + ?Sized,
    {
        if rng.flip(compute_seed(self.seed, 0, winner.index(), ROLL_TOSS_DECISION)) {
            BatBowlDecision::Bat
        } else {
            BatBowlDecision::Bowl
        }
    }

    fn finish(&mut self, draw: TossDraw, decision: BatBowlDecision) -> TossOutcome {
        let outcome = TossOutcome {
            caller_choice: draw.caller_choice,
            draw_a: draw.draw_a,
            draw_b: draw.draw_b,
            winner: draw.winner,
            decision,
        };
        self.stage = TossStage::Decided(outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    /// Oracle returning a fixed raw value for every roll.
    struct FixedRng(u32);

    impl RngOracle for FixedRng {
        fn next_u32(&self, _seed: u64) -> u32 {
            self.0
        }
    }

    // FixedRng(n): roll_hand = n % 6 + 1, flip = n & 1
    fn drawn(call: TossChoice, number_a: u32, rng: &impl RngOracle) -> TossResolver {
        let mut toss = TossResolver::new(11);
        toss.call_parity(call).unwrap();
        toss.draw(number_a, rng).unwrap();
        toss
    }

    #[test]
    fn caller_wins_when_parity_matches() {
        // B shows 2 (raw 1 -> 1 % 6 + 1)
        let rng = FixedRng(1);
        let toss = drawn(TossChoice::Even, 4, &rng);
        assert_eq!(toss.winner(), Some(Side::A));
        assert!(toss.awaits_external_decision());

        let toss = drawn(TossChoice::Odd, 4, &rng);
        assert_eq!(toss.winner(), Some(Side::B));
        assert!(!toss.awaits_external_decision());
    }

    #[test]
    fn draw_reports_sum_and_parity() {
        let rng = FixedRng(2); // B shows 3
        let mut toss = TossResolver::new(0);
        toss.call_parity(TossChoice::Odd).unwrap();
        let draw = toss.draw(6, &rng).unwrap();
        assert_eq!(draw.draw_b.value(), 3);
        assert_eq!(draw.sum(), 9);
        assert_eq!(draw.parity(), TossChoice::Odd);
        assert_eq!(draw.winner, Side::A);
    }

    #[test]
    fn decider_choice_is_honoured() {
        let rng = FixedRng(1);
        let mut toss = drawn(TossChoice::Even, 4, &rng);
        let outcome = toss.record_decision(BatBowlDecision::Bowl, &rng).unwrap();
        assert_eq!(outcome.winner, Side::A);
        assert_eq!(outcome.decision, BatBowlDecision::Bowl);
        assert_eq!(outcome.batting_first(), Side::B);
        assert_eq!(toss.outcome(), Some(&outcome));
    }

    #[test]
    fn autonomous_winner_ignores_supplied_decision() {
        // raw 1: B shows 2, flip = true -> bat
        let rng = FixedRng(1);
        let mut toss = drawn(TossChoice::Odd, 4, &rng);
        let outcome = toss.record_decision(BatBowlDecision::Bowl, &rng).unwrap();
        assert_eq!(outcome.winner, Side::B);
        assert_eq!(outcome.decision, BatBowlDecision::Bat);
        assert_eq!(outcome.batting_first(), Side::B);
    }

    #[test]
    fn decide_autonomously_requires_autonomous_winner() {
        let rng = FixedRng(1);
        let mut toss = drawn(TossChoice::Even, 4, &rng);
        assert_eq!(
            toss.decide_autonomously(&rng),
            Err(TossError::DecisionNotAutonomous { winner: Side::A })
        );

        // raw 0: B shows 1, flip = false -> bowl
        let rng = FixedRng(0);
        let mut toss = drawn(TossChoice::Even, 4, &rng);
        let outcome = toss.decide_autonomously(&rng).unwrap();
        assert_eq!(outcome.winner, Side::B);
        assert_eq!(outcome.decision, BatBowlDecision::Bowl);
        assert_eq!(outcome.batting_first(), Side::A);
    }

    #[test]
    fn swapped_decider_drives_side_b() {
        let rng = FixedRng(1);
        let mut toss = TossResolver::with_decider(Side::B, 3);
        toss.call_parity(TossChoice::Odd).unwrap();
        toss.draw(4, &rng).unwrap();
        assert!(toss.awaits_external_decision());
        let outcome = toss.record_decision(BatBowlDecision::Bowl, &rng).unwrap();
        assert_eq!(outcome.decision, BatBowlDecision::Bowl);
    }

    #[test]
    fn rejects_out_of_range_number() {
        let mut toss = TossResolver::new(0);
        toss.call_parity(TossChoice::Odd).unwrap();
        assert_eq!(
            toss.draw(7, &PcgRng),
            Err(TossError::InvalidInput(
                crate::error::InvalidInput::PickOutOfRange(7)
            ))
        );
        // Still waiting for a valid number.
        assert!(matches!(toss.stage(), TossStage::AwaitingDraw { .. }));
    }

    #[test]
    fn rejects_out_of_order_calls() {
        let mut toss = TossResolver::new(0);
        assert!(matches!(
            toss.draw(3, &PcgRng),
            Err(TossError::InvalidTransition { .. })
        ));
        assert!(matches!(
            toss.record_decision(BatBowlDecision::Bat, &PcgRng),
            Err(TossError::InvalidTransition { .. })
        ));

        toss.call_parity(TossChoice::Odd).unwrap();
        assert!(matches!(
            toss.call_parity(TossChoice::Even),
            Err(TossError::InvalidTransition { .. })
        ));

        toss.draw(3, &PcgRng).unwrap();
        toss.record_decision(BatBowlDecision::Bat, &PcgRng).unwrap();
        assert!(matches!(
            toss.record_decision(BatBowlDecision::Bowl, &PcgRng),
            Err(TossError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn same_seed_same_toss() {
        let play = || {
            let mut toss = TossResolver::new(2024);
            toss.call_parity(TossChoice::Odd).unwrap();
            toss.draw(5, &PcgRng).unwrap();
            toss.record_decision(BatBowlDecision::Bat, &PcgRng).unwrap()
        };
        assert_eq!(play(), play());
    }
}
