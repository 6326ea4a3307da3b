use cricket_core::{
    BatBowlDecision, Delivery, MatchConfig, MatchEngine, MatchError, MatchPhase, PcgRng,
    ResultType, Side, TossChoice, TossResolver,
};

/// Plays inning 1 from `balls`, closes it and starts the chase.
fn engine_after_first_inning(config: MatchConfig, balls: &[(u32, u32)]) -> MatchEngine {
    let mut engine = MatchEngine::new(config, 1).unwrap();
    for &(bat, bowl) in balls {
        engine.resolve_ball(bat, bowl).unwrap();
    }
    assert_eq!(engine.phase(), MatchPhase::Inning1Over);
    engine.close_inning_and_compute_target().unwrap();
    engine.start_second_inning().unwrap();
    engine
}

#[test]
fn first_inning_ends_on_wicket_limit_and_sets_target() {
    let mut engine = MatchEngine::new(MatchConfig::new(1, 1, Side::A), 1).unwrap();

    let ball = engine.resolve_ball(4, 2).unwrap();
    assert_eq!(ball.delivery, Delivery::Runs(4));
    assert_eq!(ball.runs, 4);
    assert_eq!(ball.balls_remaining, 5);
    assert!(!ball.inning_over);

    let ball = engine.resolve_ball(3, 3).unwrap();
    assert_eq!(ball.delivery, Delivery::Dismissal);
    assert_eq!(ball.wickets, 1);
    assert_eq!(ball.runs, 4);
    assert!(ball.inning_over);

    assert_eq!(engine.target(), None);
    assert_eq!(engine.close_inning_and_compute_target(), Ok(5));
    assert_eq!(engine.target(), Some(5));
}

#[test]
fn chase_ends_the_moment_target_is_reached() {
    let mut engine = engine_after_first_inning(MatchConfig::new(1, 1, Side::A), &[(4, 2), (3, 3)]);
    assert_eq!(engine.target(), Some(5));

    let ball = engine.resolve_ball(5, 1).unwrap();
    assert_eq!(ball.batting_side, Side::B);
    assert_eq!(ball.runs, 5);
    assert_eq!(ball.balls_remaining, 5);
    assert!(ball.inning_over);
    assert_eq!(engine.phase(), MatchPhase::Inning2Over);

    let result = engine.finalize().unwrap();
    assert_eq!(result.batting_first_runs, 4);
    assert_eq!(result.batting_second_runs, 5);
    // Side A batted first and lost the chase by one run.
    assert_eq!(result.result_type, ResultType::Lose);
    assert_eq!(result.win_margin, 1);
    assert_eq!(result.winner(), Some(Side::B));
    assert_eq!(result.result_for(Side::B), ResultType::Victory);
}

#[test]
fn chasing_primary_side_wins_on_reaching_target() {
    let mut engine = engine_after_first_inning(
        MatchConfig::new(1, 2, Side::B),
        &[(6, 1), (6, 6), (1, 1)],
    );
    assert_eq!(engine.target(), Some(7));

    engine.resolve_ball(6, 2).unwrap();
    let ball = engine.resolve_ball(1, 2).unwrap();
    assert!(ball.inning_over);

    let result = engine.finalize().unwrap();
    assert_eq!(result.primary, Side::A);
    assert_eq!(result.primary_runs, 7);
    assert_eq!(result.opponent_runs, 6);
    assert_eq!(result.result_type, ResultType::Victory);
    assert_eq!(result.win_margin, 1);
}

#[test]
fn chase_falling_short_loses() {
    let mut engine = engine_after_first_inning(MatchConfig::new(1, 1, Side::B), &[(5, 1), (2, 2)]);
    assert_eq!(engine.target(), Some(6));

    engine.resolve_ball(2, 1).unwrap();
    let ball = engine.resolve_ball(4, 4).unwrap();
    assert!(ball.inning_over);
    assert_eq!(ball.runs, 2);

    let result = engine.finalize().unwrap();
    assert_eq!(result.result_type, ResultType::Lose);
    assert_eq!(result.win_margin, 3);
}

#[test]
fn equal_totals_draw() {
    // Inning 1: 3 runs. Chase: 3 runs, then out -> equal totals.
    let mut engine = engine_after_first_inning(MatchConfig::new(1, 1, Side::A), &[(3, 1), (2, 2)]);
    engine.resolve_ball(3, 6).unwrap();
    let ball = engine.resolve_ball(5, 5).unwrap();
    assert!(ball.inning_over);

    let result = engine.finalize().unwrap();
    assert_eq!(result.batting_first_runs, 3);
    assert_eq!(result.batting_second_runs, 3);
    assert_eq!(result.result_type, ResultType::Draw);
    assert_eq!(result.win_margin, 0);
}

#[test]
fn final_ball_can_exhaust_balls_and_reach_target_together() {
    let mut engine = engine_after_first_inning(
        MatchConfig::new(1, 3, Side::A),
        &[(1, 2), (1, 2), (1, 2), (1, 2), (1, 2), (1, 2)],
    );
    assert_eq!(engine.target(), Some(7));

    for _ in 0..5 {
        let ball = engine.resolve_ball(1, 2).unwrap();
        assert!(!ball.inning_over);
    }
    let ball = engine.resolve_ball(2, 1).unwrap();
    assert_eq!(ball.balls_remaining, 0);
    assert_eq!(ball.runs, 7);
    assert!(ball.inning_over);
    assert_eq!(engine.finalize().unwrap().result_type, ResultType::Lose);
}

#[test]
fn finalize_is_idempotent() {
    let mut engine = engine_after_first_inning(MatchConfig::new(1, 1, Side::A), &[(2, 2)]);
    engine.resolve_ball(1, 1).unwrap();

    let first = engine.finalize().unwrap();
    let second = engine.finalize().unwrap();
    assert_eq!(first, second);
    assert_eq!(engine.phase(), MatchPhase::Finalized);
    assert!(matches!(
        engine.resolve_ball(1, 2),
        Err(MatchError::InningClosed { .. })
    ));
}

#[test]
fn balls_decrement_by_one_whatever_the_outcome() {
    let mut engine = MatchEngine::new(MatchConfig::new(2, 10, Side::A), 9).unwrap();
    let mut expected = 12;
    for (bat, bowl) in [(1, 1), (2, 3), (6, 6), (4, 5), (5, 4)] {
        let ball = engine.resolve_ball(bat, bowl).unwrap();
        expected -= 1;
        assert_eq!(ball.balls_remaining, expected);
    }
}

#[test]
fn toss_feeds_match_config() {
    let mut toss = TossResolver::new(77);
    toss.call_parity(TossChoice::Even).unwrap();
    let draw = toss.draw(3, &PcgRng).unwrap();
    let outcome = toss.record_decision(BatBowlDecision::Bat, &PcgRng).unwrap();
    assert_eq!(outcome.winner, draw.winner);

    let config = MatchConfig::from_toss(3, 3, &outcome);
    let engine = MatchEngine::new(config, 77).unwrap();
    assert_eq!(engine.current_inning().batting_side, outcome.batting_first());
    assert_eq!(engine.current_inning().balls_remaining, 18);
}

#[test]
fn single_player_match_is_reproducible_from_seed() {
    let play = |seed: u64| {
        let mut engine = MatchEngine::new(MatchConfig::new(1, 2, Side::A), seed).unwrap();
        let mut picks = [3u32, 5, 1, 6, 2, 4].into_iter().cycle();
        while engine.phase().accepts_ball() {
            engine
                .resolve_ball_against(picks.next().unwrap(), Side::B, &PcgRng)
                .unwrap();
        }
        engine.close_inning_and_compute_target().unwrap();
        engine.start_second_inning().unwrap();
        while engine.phase().accepts_ball() {
            engine
                .resolve_ball_against(picks.next().unwrap(), Side::B, &PcgRng)
                .unwrap();
        }
        engine.finalize().unwrap()
    };

    assert_eq!(play(42), play(42));
}
