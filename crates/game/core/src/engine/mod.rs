//! Ball-by-ball match execution.
//!
//! The [`MatchEngine`] is the authoritative reducer for [`MatchState`]. It
//! applies the per-ball rule, closes innings, computes the chase target and
//! freezes the [`MatchResult`]. Every operation checks the current
//! [`MatchPhase`] first and rejects out-of-order calls with a [`MatchError`]
//! instead of ignoring them.

mod delivery;
mod errors;
mod result;

pub use delivery::{BallOutcome, Delivery};
pub use errors::MatchError;
pub use result::{MatchResult, ResultType};

use crate::config::MatchConfig;
use crate::env::{ROLL_BALL_PICK, RngOracle, compute_seed};
use crate::state::{InningNumber, InningState, MatchPhase, MatchState, Pick, Side};

/// Match engine for one match.
///
/// Lifecycle:
///
/// ```text
/// AwaitingBall1 --resolve_ball*--> Inning1Over
///   --close_inning_and_compute_target, start_second_inning--> AwaitingBall2
///   --resolve_ball*--> Inning2Over --finalize--> Finalized
/// ```
///
/// The engine performs no locking or debouncing; callers gate input.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    state: MatchState,
}

impl MatchEngine {
    /// Side whose perspective results are reported from.
    pub const PRIMARY_SIDE: Side = Side::A;

    /// Creates an engine with inning 1 ready to start.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidInput` if overs or the wickets limit is zero.
    pub fn new(config: MatchConfig, match_seed: u64) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self {
            state: MatchState::new(config, match_seed),
        })
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn config(&self) -> &MatchConfig {
        &self.state.config
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.phase
    }

    pub fn target(&self) -> Option<u32> {
        self.state.target
    }

    pub fn current_inning(&self) -> &InningState {
        self.state.current_inning()
    }

    /// Resolves one ball with both picks supplied by the caller.
    ///
    /// # Errors
    ///
    /// - `InningClosed` if the current inning is over
    /// - `InvalidInput` if either pick is outside `1..=6`
    pub fn resolve_ball(
        &mut self,
        batting_pick: u32,
        bowling_pick: u32,
    ) -> Result<BallOutcome, MatchError> {
        self.ensure_accepts_ball()?;
        let batting_pick = Pick::new(batting_pick)?;
        let bowling_pick = Pick::new(bowling_pick)?;
        Ok(self.apply_ball(batting_pick, bowling_pick))
    }

    /// Resolves one ball against an autonomous opponent.
    ///
    /// `external_pick` belongs to `autonomous.other()`. The autonomous side's
    /// pick is drawn from `rng` and each pick goes to the batting or bowling
    /// slot depending on who is currently batting. The drawn pick is reported
    /// back in the outcome.
    pub fn resolve_ball_against<R>(
        &mut self,
        external_pick: u32,
        autonomous: Side,
        rng: &R,
    ) -> Result<BallOutcome, MatchError>
    where
        R: RngOracle + ?Sized,
    {
        self.ensure_accepts_ball()?;
        let external_pick = Pick::new(external_pick)?;

        let seed = compute_seed(
            self.state.match_seed,
            self.state.nonce,
            autonomous.index(),
            ROLL_BALL_PICK,
        );
        let drawn = Pick::new(rng.roll_hand(seed))?;

        if self.state.current_inning().batting_side == autonomous {
            Ok(self.apply_ball(drawn, external_pick))
        } else {
            Ok(self.apply_ball(external_pick, drawn))
        }
    }

    /// Computes the chase target once inning 1 is over.
    ///
    /// Repeating the call before the second inning starts recomputes the same
    /// value from the frozen inning.
    pub fn close_inning_and_compute_target(&mut self) -> Result<u32, MatchError> {
        if self.state.phase != MatchPhase::Inning1Over {
            return Err(MatchError::invalid_transition(
                "close inning and compute target",
                self.state.phase,
            ));
        }
        let target = self.state.first.runs + 1;
        self.state.target = Some(target);
        Ok(target)
    }

    /// Starts the chase with the other side batting.
    pub fn start_second_inning(&mut self) -> Result<&InningState, MatchError> {
        if self.state.phase != MatchPhase::Inning1Over || self.state.target.is_none() {
            return Err(MatchError::invalid_transition(
                "start second inning",
                self.state.phase,
            ));
        }

        let config = &self.state.config;
        let second = InningState::new(
            InningNumber::Second,
            config.batting_second(),
            config.balls_per_inning(),
        );
        self.state.phase = MatchPhase::AwaitingBall2;
        Ok(&*self.state.second.insert(second))
    }

    /// Freezes and returns the result.
    ///
    /// Calling again after the match is finalized returns the stored result
    /// unchanged.
    pub fn finalize(&mut self) -> Result<MatchResult, MatchError> {
        match self.state.phase {
            MatchPhase::Inning2Over => {
                let result = self.compute_result();
                self.state.result = Some(result);
                self.state.phase = MatchPhase::Finalized;
                Ok(result)
            }
            MatchPhase::Finalized => self
                .state
                .result
                .ok_or(MatchError::invalid_transition("finalize", MatchPhase::Finalized)),
            MatchPhase::AwaitingBall1 | MatchPhase::Inning1Over => {
                Err(MatchError::InningInProgress {
                    inning: InningNumber::First,
                })
            }
            MatchPhase::AwaitingBall2 => Err(MatchError::InningInProgress {
                inning: InningNumber::Second,
            }),
        }
    }

    fn ensure_accepts_ball(&self) -> Result<(), MatchError> {
        let inning = self.state.current_inning();
        if !self.state.phase.accepts_ball() || inning.is_over || inning.balls_remaining == 0 {
            return Err(MatchError::InningClosed {
                inning: inning.number,
            });
        }
        Ok(())
    }

    fn apply_ball(&mut self, batting_pick: Pick, bowling_pick: Pick) -> BallOutcome {
        let delivery = Delivery::resolve(batting_pick, bowling_pick);
        let wickets_limit = self.state.config.wickets_limit;
        let target = self.state.target;

        let inning = self.state.current_inning_mut();
        match delivery {
            Delivery::Dismissal => inning.wickets += 1,
            Delivery::Runs(runs) => inning.runs += runs,
        }
        inning.balls_remaining -= 1;
        inning.is_over = inning.should_close(wickets_limit, target);

        let outcome = BallOutcome {
            inning: inning.number,
            batting_side: inning.batting_side,
            batting_pick,
            bowling_pick,
            delivery,
            runs: inning.runs,
            wickets: inning.wickets,
            balls_remaining: inning.balls_remaining,
            inning_over: inning.is_over,
        };

        self.state.nonce += 1;
        if outcome.inning_over {
            self.state.phase = match outcome.inning {
                InningNumber::First => MatchPhase::Inning1Over,
                InningNumber::Second => MatchPhase::Inning2Over,
            };
        }

        outcome
    }

    fn compute_result(&self) -> MatchResult {
        let second_runs = self.state.second.as_ref().map_or(0, |inning| inning.runs);
        MatchResult::new(
            self.state.config.batting_first,
            self.state.first.runs,
            second_runs,
            Self::PRIMARY_SIDE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(overs: u32, wickets: u32, batting_first: Side) -> MatchEngine {
        MatchEngine::new(MatchConfig::new(overs, wickets, batting_first), 0).unwrap()
    }

    /// Oracle returning the same hand for every roll.
    struct ConstantHand(u32);

    impl RngOracle for ConstantHand {
        fn next_u32(&self, _seed: u64) -> u32 {
            self.0 - 1
        }
    }

    #[test]
    fn new_rejects_zero_overs_and_wickets() {
        assert!(matches!(
            MatchEngine::new(MatchConfig::new(0, 1, Side::A), 0),
            Err(MatchError::InvalidInput(_))
        ));
        assert!(matches!(
            MatchEngine::new(MatchConfig::new(1, 0, Side::A), 0),
            Err(MatchError::InvalidInput(_))
        ));
    }

    #[test]
    fn new_engine_starts_first_inning() {
        let engine = engine(3, 2, Side::B);
        let inning = engine.current_inning();
        assert_eq!(engine.phase(), MatchPhase::AwaitingBall1);
        assert_eq!(inning.batting_side, Side::B);
        assert_eq!(inning.balls_remaining, 18);
        assert_eq!(inning.runs, 0);
        assert_eq!(inning.wickets, 0);
        assert!(!inning.is_over);
        assert_eq!(engine.target(), None);
    }

    #[test]
    fn dismissal_adds_wicket_without_runs() {
        let mut engine = engine(1, 3, Side::A);
        engine.resolve_ball(4, 2).unwrap();
        let outcome = engine.resolve_ball(5, 5).unwrap();
        assert_eq!(outcome.delivery, Delivery::Dismissal);
        assert_eq!(outcome.runs, 4);
        assert_eq!(outcome.wickets, 1);
        assert_eq!(outcome.balls_remaining, 4);
        assert!(!outcome.inning_over);
    }

    #[test]
    fn invalid_picks_leave_state_untouched() {
        let mut engine = engine(1, 1, Side::A);
        let before = engine.state().clone();
        assert!(matches!(
            engine.resolve_ball(0, 3),
            Err(MatchError::InvalidInput(_))
        ));
        assert!(matches!(
            engine.resolve_ball(3, 7),
            Err(MatchError::InvalidInput(_))
        ));
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn closed_inning_rejects_balls() {
        let mut engine = engine(1, 1, Side::A);
        engine.resolve_ball(2, 2).unwrap();
        assert_eq!(engine.phase(), MatchPhase::Inning1Over);
        assert_eq!(
            engine.resolve_ball(1, 2),
            Err(MatchError::InningClosed {
                inning: InningNumber::First
            })
        );
    }

    #[test]
    fn inning_closes_when_balls_run_out() {
        let mut engine = engine(1, 5, Side::A);
        for ball in 0..6 {
            let outcome = engine.resolve_ball(1, 2).unwrap();
            assert_eq!(outcome.inning_over, ball == 5);
        }
        assert_eq!(engine.current_inning().runs, 6);
        assert_eq!(engine.phase(), MatchPhase::Inning1Over);
    }

    #[test]
    fn second_inning_requires_target() {
        let mut engine = engine(1, 1, Side::A);
        assert!(matches!(
            engine.start_second_inning(),
            Err(MatchError::InvalidTransition { .. })
        ));
        assert!(matches!(
            engine.close_inning_and_compute_target(),
            Err(MatchError::InvalidTransition { .. })
        ));

        engine.resolve_ball(6, 6).unwrap();
        assert!(matches!(
            engine.start_second_inning(),
            Err(MatchError::InvalidTransition { .. })
        ));

        assert_eq!(engine.close_inning_and_compute_target(), Ok(1));
        assert_eq!(engine.close_inning_and_compute_target(), Ok(1));

        let second = engine.start_second_inning().unwrap();
        assert_eq!(second.batting_side, Side::B);
        assert_eq!(second.balls_remaining, 6);
        assert_eq!(engine.phase(), MatchPhase::AwaitingBall2);

        assert!(matches!(
            engine.close_inning_and_compute_target(),
            Err(MatchError::InvalidTransition { .. })
        ));
        assert!(matches!(
            engine.start_second_inning(),
            Err(MatchError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn finalize_before_second_inning_ends_is_rejected() {
        let mut engine = engine(1, 1, Side::A);
        assert_eq!(
            engine.finalize(),
            Err(MatchError::InningInProgress {
                inning: InningNumber::First
            })
        );
        engine.resolve_ball(3, 3).unwrap();
        engine.close_inning_and_compute_target().unwrap();
        engine.start_second_inning().unwrap();
        assert_eq!(
            engine.finalize(),
            Err(MatchError::InningInProgress {
                inning: InningNumber::Second
            })
        );
    }

    #[test]
    fn autonomous_pick_fills_bowling_slot_when_external_side_bats() {
        let mut engine = engine(1, 1, Side::A);
        let outcome = engine
            .resolve_ball_against(4, Side::B, &ConstantHand(2))
            .unwrap();
        assert_eq!(outcome.batting_pick.value(), 4);
        assert_eq!(outcome.bowling_pick.value(), 2);
        assert_eq!(outcome.delivery, Delivery::Runs(4));
    }

    #[test]
    fn autonomous_pick_fills_batting_slot_when_autonomous_side_bats() {
        let mut engine = engine(1, 1, Side::B);
        let outcome = engine
            .resolve_ball_against(4, Side::B, &ConstantHand(2))
            .unwrap();
        assert_eq!(outcome.batting_side, Side::B);
        assert_eq!(outcome.batting_pick.value(), 2);
        assert_eq!(outcome.bowling_pick.value(), 4);
        assert_eq!(outcome.delivery, Delivery::Runs(2));

        let outcome = engine
            .resolve_ball_against(2, Side::B, &ConstantHand(2))
            .unwrap();
        assert_eq!(outcome.delivery, Delivery::Dismissal);
        assert!(outcome.inning_over);
    }

    #[test]
    fn nonce_advances_per_ball() {
        let mut engine = engine(1, 3, Side::A);
        engine.resolve_ball(1, 2).unwrap();
        engine.resolve_ball(3, 3).unwrap();
        assert_eq!(engine.state().nonce, 2);
    }
}
