//! Match orchestration.
//!
//! A [`MatchSession`] walks one match from the toss to the recorded result:
//! it owns the [`TossResolver`] and then the [`MatchEngine`], gates ball input
//! against presentation, publishes [`MatchEvent`]s and appends the final
//! record to the leaderboard.

use std::sync::Arc;

use chrono::Utc;
use cricket_core::{
    BallOutcome, BatBowlDecision, InningNumber, InningState, MatchConfig, MatchEngine, MatchError,
    MatchMode, MatchPhase, MatchResult, PcgRng, RngOracle, Side, TossChoice, TossDraw,
    TossOutcome, TossResolver, compute_seed,
};
use tracing::{debug, info, warn};

use crate::error::{Result, SessionError};
use crate::events::{EventBus, MatchEvent};
use crate::gate::InputGate;
use crate::leaderboard::MatchRecord;
use crate::repository::LeaderboardRepository;
use crate::settings::{PlayerNames, PlayerSettings};

enum Stage {
    Toss(TossResolver),
    Match {
        toss: TossOutcome,
        engine: MatchEngine,
        published: bool,
        recorded: bool,
    },
}

/// Drives toss, innings and result for one match at a time.
///
/// Lifecycle:
///
/// ```text
/// call_toss → draw_toss → decide_toss | decide_toss_autonomously
///   → submit_pick(s)* (release_input after each) → start_second_inning
///   → submit_pick(s)* → finish → restart ...
/// ```
pub struct MatchSession<R = PcgRng> {
    mode: MatchMode,
    settings: PlayerSettings,
    base_seed: u64,
    round: u64,
    rng: R,
    gate: InputGate,
    events: EventBus,
    leaderboard: Option<Arc<dyn LeaderboardRepository>>,
    stage: Stage,
}

impl MatchSession<PcgRng> {
    /// Creates a session using the built-in PCG generator.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Match` if the overs or wickets setting is zero.
    pub fn new(mode: MatchMode, settings: PlayerSettings, seed: u64) -> Result<Self> {
        Self::with_rng(mode, settings, seed, PcgRng)
    }
}

impl<R: RngOracle> MatchSession<R> {
    pub fn with_rng(mode: MatchMode, settings: PlayerSettings, seed: u64, rng: R) -> Result<Self> {
        MatchConfig::new(settings.overs, settings.wickets, Side::A)
            .validate()
            .map_err(MatchError::from)?;

        let stage = Stage::Toss(TossResolver::with_decider(
            mode.toss_decider(),
            round_seed(seed, 0),
        ));
        info!(
            %mode,
            overs = settings.overs,
            wickets = settings.wickets,
            "Match session created"
        );

        Ok(Self {
            mode,
            settings,
            base_seed: seed,
            round: 0,
            rng,
            gate: InputGate::new(),
            events: EventBus::new(),
            leaderboard: None,
            stage,
        })
    }

    /// Append every finished match to `leaderboard`.
    pub fn with_leaderboard(mut self, leaderboard: Arc<dyn LeaderboardRepository>) -> Self {
        self.leaderboard = Some(leaderboard);
        self
    }

    // ===== accessors =====

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    pub fn names(&self) -> &PlayerNames {
        &self.settings.names
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<MatchEvent> {
        self.events.subscribe()
    }

    /// Number of restarts so far.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Seed of the current match, derived from the session seed and round.
    pub fn match_seed(&self) -> u64 {
        round_seed(self.base_seed, self.round)
    }

    /// The toss resolver while the toss is still undecided.
    pub fn toss(&self) -> Option<&TossResolver> {
        match &self.stage {
            Stage::Toss(resolver) => Some(resolver),
            Stage::Match { .. } => None,
        }
    }

    pub fn toss_outcome(&self) -> Option<&TossOutcome> {
        match &self.stage {
            Stage::Toss(_) => None,
            Stage::Match { toss, .. } => Some(toss),
        }
    }

    pub fn engine(&self) -> Option<&MatchEngine> {
        match &self.stage {
            Stage::Toss(_) => None,
            Stage::Match { engine, .. } => Some(engine),
        }
    }

    pub fn phase(&self) -> Option<MatchPhase> {
        self.engine().map(MatchEngine::phase)
    }

    pub fn current_inning(&self) -> Option<&InningState> {
        self.engine().map(MatchEngine::current_inning)
    }

    pub fn target(&self) -> Option<u32> {
        self.engine().and_then(MatchEngine::target)
    }

    /// The frozen result once [`MatchSession::finish`] has run.
    pub fn result(&self) -> Option<MatchResult> {
        self.engine().and_then(|engine| engine.state().result)
    }

    pub fn input_pending(&self) -> bool {
        self.gate.is_held()
    }

    // ===== toss =====

    pub fn call_toss(&mut self, choice: TossChoice) -> Result<()> {
        self.resolver_mut("call toss")?.call_parity(choice)?;
        debug!(%choice, "Toss called");
        Ok(())
    }

    /// Submits player 1's number and draws player 2's.
    pub fn draw_toss(&mut self, number: u32) -> Result<TossDraw> {
        let Stage::Toss(resolver) = &mut self.stage else {
            return Err(SessionError::MatchStarted {
                operation: "draw toss",
            });
        };
        let draw = resolver.draw(number, &self.rng).inspect_err(|err| {
            warn!(number, "Toss number rejected: {}", err);
        })?;

        info!(
            draw_a = draw.draw_a.value(),
            draw_b = draw.draw_b.value(),
            winner = %draw.winner,
            "Toss drawn"
        );
        Ok(draw)
    }

    /// True when the toss winner must supply the bat/bowl decision.
    pub fn toss_awaits_decision(&self) -> bool {
        self.toss()
            .is_some_and(TossResolver::awaits_external_decision)
    }

    /// Finalizes the toss and starts inning 1.
    ///
    /// `decision` is ignored when the autonomous side won the toss.
    pub fn decide_toss(&mut self, decision: BatBowlDecision) -> Result<TossOutcome> {
        let Stage::Toss(resolver) = &mut self.stage else {
            return Err(SessionError::MatchStarted {
                operation: "decide toss",
            });
        };
        let outcome = resolver.record_decision(decision, &self.rng)?;
        self.begin_match(outcome)
    }

    /// Finalizes the toss with a random decision when the autonomous side won.
    pub fn decide_toss_autonomously(&mut self) -> Result<TossOutcome> {
        let Stage::Toss(resolver) = &mut self.stage else {
            return Err(SessionError::MatchStarted {
                operation: "decide toss",
            });
        };
        let outcome = resolver.decide_autonomously(&self.rng)?;
        self.begin_match(outcome)
    }

    fn resolver_mut(&mut self, operation: &'static str) -> Result<&mut TossResolver> {
        match &mut self.stage {
            Stage::Toss(resolver) => Ok(resolver),
            Stage::Match { .. } => Err(SessionError::MatchStarted { operation }),
        }
    }

    fn begin_match(&mut self, toss: TossOutcome) -> Result<TossOutcome> {
        let config = MatchConfig::from_toss(self.settings.overs, self.settings.wickets, &toss);
        let engine = MatchEngine::new(config, self.match_seed())?;

        info!(
            winner = %toss.winner,
            decision = %toss.decision,
            batting_first = %config.batting_first,
            "Toss resolved"
        );
        self.stage = Stage::Match {
            toss,
            engine,
            published: false,
            recorded: false,
        };
        self.events
            .publish(MatchEvent::TossResolved { outcome: toss, config });
        Ok(toss)
    }

    // ===== balls =====

    /// Submits player 1's pick against the computer.
    ///
    /// The computer's pick is drawn and goes to whichever slot it occupies.
    pub fn submit_pick(&mut self, pick: u32) -> Result<BallOutcome> {
        let Some(autonomous) = self.mode.autonomous_picker() else {
            return Err(self.mode_mismatch("submit a single pick"));
        };
        self.play_ball(|engine, rng| engine.resolve_ball_against(pick, autonomous, rng))
    }

    /// Submits both picks in two-player mode, batter's first.
    pub fn submit_picks(&mut self, batting_pick: u32, bowling_pick: u32) -> Result<BallOutcome> {
        if self.mode.autonomous_picker().is_some() {
            return Err(self.mode_mismatch("submit both picks"));
        }
        self.play_ball(|engine, _| engine.resolve_ball(batting_pick, bowling_pick))
    }

    /// Marks the last ball as presented so the next one can be submitted.
    pub fn release_input(&mut self) {
        self.gate.release();
    }

    fn mode_mismatch(&self, operation: &'static str) -> SessionError {
        warn!(mode = %self.mode, "Rejected {}", operation);
        SessionError::ModeMismatch {
            operation,
            mode: self.mode,
        }
    }

    fn play_ball<F>(&mut self, resolve: F) -> Result<BallOutcome>
    where
        F: FnOnce(&mut MatchEngine, &R) -> std::result::Result<BallOutcome, MatchError>,
    {
        if self.gate.is_held() {
            warn!("Ball submitted while the previous one is still being presented");
            return Err(SessionError::InputPending);
        }
        let Stage::Match { engine, .. } = &mut self.stage else {
            return Err(SessionError::TossPending {
                operation: "play a ball",
            });
        };

        let outcome = resolve(engine, &self.rng).inspect_err(|err| {
            warn!("Ball rejected: {}", err);
        })?;
        self.gate.try_acquire();

        debug!(
            inning = outcome.inning.as_u8(),
            bat = outcome.batting_pick.value(),
            bowl = outcome.bowling_pick.value(),
            runs = outcome.runs,
            wickets = outcome.wickets,
            balls_remaining = outcome.balls_remaining,
            "Ball resolved"
        );
        self.events.publish(MatchEvent::BallResolved(outcome));

        if outcome.inning_over {
            let target = match outcome.inning {
                InningNumber::First => Some(engine.close_inning_and_compute_target()?),
                InningNumber::Second => None,
            };
            info!(
                inning = outcome.inning.as_u8(),
                batting_side = %outcome.batting_side,
                runs = outcome.runs,
                wickets = outcome.wickets,
                ?target,
                "Inning closed"
            );
            self.events.publish(MatchEvent::InningClosed {
                inning: outcome.inning,
                batting_side: outcome.batting_side,
                runs: outcome.runs,
                target,
            });
        }

        Ok(outcome)
    }

    // ===== innings and result =====

    /// Starts the chase after the first inning has closed.
    pub fn start_second_inning(&mut self) -> Result<InningState> {
        let Stage::Match { engine, .. } = &mut self.stage else {
            return Err(SessionError::TossPending {
                operation: "start the second inning",
            });
        };
        let inning = engine.start_second_inning()?.clone();
        info!(
            batting_side = %inning.batting_side,
            target = ?engine.target(),
            "Second inning started"
        );
        Ok(inning)
    }

    /// Freezes the result, publishes it and records it once.
    ///
    /// Calling again returns the same result without publishing or recording
    /// twice. If the leaderboard append fails, a later call retries only the
    /// append.
    pub fn finish(&mut self) -> Result<MatchResult> {
        let Stage::Match {
            engine,
            published,
            recorded,
            ..
        } = &mut self.stage
        else {
            return Err(SessionError::TossPending { operation: "finish" });
        };
        let result = engine.finalize()?;

        if !*published {
            info!(
                result = %result.result_type,
                margin = result.win_margin,
                primary_runs = result.primary_runs,
                opponent_runs = result.opponent_runs,
                "Match finalized"
            );
            self.events.publish(MatchEvent::MatchFinalized(result));
            *published = true;
        }

        if !*recorded {
            if let Some(leaderboard) = &self.leaderboard {
                let record =
                    MatchRecord::from_result(&result, self.mode, &self.settings.names, Utc::now());
                leaderboard.append(&record).inspect_err(|err| {
                    warn!("Failed to record match result: {}", err);
                })?;
            }
            *recorded = true;
        }
        Ok(result)
    }

    /// Discards the current match and starts a fresh toss with the same
    /// settings and a new derived seed.
    pub fn restart(&mut self) {
        self.round += 1;
        self.gate.release();
        self.stage = Stage::Toss(TossResolver::with_decider(
            self.mode.toss_decider(),
            self.match_seed(),
        ));
        info!(round = self.round, "Match restarted");
    }
}

fn round_seed(base_seed: u64, round: u64) -> u64 {
    compute_seed(base_seed, round, 0, 0)
}
