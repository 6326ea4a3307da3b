//! Plain-text rendering of match state.
use cricket_core::{
    BallOutcome, Delivery, InningState, MatchResult, MatchState, TossDraw, TossOutcome,
};
use runtime::{MatchRecord, PlayerNames, Standing};

fn runs(n: u32) -> String {
    if n == 1 {
        "1 run".to_owned()
    } else {
        format!("{n} runs")
    }
}

fn balls(n: u32) -> String {
    if n == 1 {
        "1 ball".to_owned()
    } else {
        format!("{n} balls")
    }
}

/// `You 12/1 (1.4/3 ov)`, plus the chase equation in inning 2.
pub fn scoreboard(state: &MatchState, names: &PlayerNames) -> String {
    let inning = state.current_inning();
    let mut line = format!(
        "{} {}/{} ({} ov)",
        names.name_of(inning.batting_side),
        inning.runs,
        inning.wickets,
        inning.overs_display(&state.config)
    );
    if let (Some(target), Some(needed)) = (state.target, state.runs_needed()) {
        line.push_str(&format!(
            " | target {target}, need {} from {}",
            runs(needed),
            balls(inning.balls_remaining)
        ));
    }
    line
}

pub fn toss_draw(draw: &TossDraw, names: &PlayerNames) -> String {
    format!(
        "{} showed {}, {} showed {}: {} is {}. {} wins the toss.",
        names.player1,
        draw.draw_a,
        names.player2,
        draw.draw_b,
        draw.sum(),
        draw.parity(),
        names.name_of(draw.winner)
    )
}

pub fn toss_decision(outcome: &TossOutcome, names: &PlayerNames) -> String {
    format!(
        "{} chose to {}. {} bats first.",
        names.name_of(outcome.winner),
        outcome.decision,
        names.name_of(outcome.batting_first())
    )
}

/// `You 4 vs Computer 2: 4 runs` or `... OUT!`.
pub fn ball(outcome: &BallOutcome, names: &PlayerNames) -> String {
    let verdict = match outcome.delivery {
        Delivery::Dismissal => "OUT!".to_owned(),
        Delivery::Runs(n) => runs(n),
    };
    format!(
        "{} {} vs {} {}: {}",
        names.name_of(outcome.batting_side),
        outcome.batting_pick,
        names.name_of(outcome.batting_side.other()),
        outcome.bowling_pick,
        verdict
    )
}

pub fn inning_closed(inning: &InningState, target: Option<u32>, names: &PlayerNames) -> String {
    let batting = names.name_of(inning.batting_side);
    let mut line = format!(
        "End of inning {}: {} {}/{}.",
        inning.number, batting, inning.runs, inning.wickets
    );
    if let Some(target) = target {
        line.push_str(&format!(
            " {} needs {} to win.",
            names.name_of(inning.bowling_side()),
            target
        ));
    }
    line
}

pub fn result(result: &MatchResult, names: &PlayerNames) -> String {
    match result.winner() {
        Some(side) => format!("{} won by {}!", names.name_of(side), runs(result.win_margin)),
        None => format!("Match drawn, {} each.", result.primary_runs),
    }
}

pub fn leaderboard(recent: &[MatchRecord], standings: &[Standing]) -> String {
    if recent.is_empty() {
        return "No matches recorded yet.".to_owned();
    }

    let mut out = String::from("Recent matches\n");
    for record in recent {
        out.push_str(&format!(
            "  {}  {:<14} {} {}-{} {}  {}\n",
            record.played_at.format("%Y-%m-%d %H:%M"),
            record.mode.as_ref(),
            record.player1,
            record.player1_runs,
            record.player2_runs,
            record.player2,
            record.summary()
        ));
    }

    out.push_str("\nStandings\n");
    out.push_str(&format!(
        "  {:<16} {:>6} {:>4} {:>4} {:>4} {:>5}\n",
        "Player", "Played", "Won", "Lost", "Drew", "Best"
    ));
    for standing in standings {
        out.push_str(&format!(
            "  {:<16} {:>6} {:>4} {:>4} {:>4} {:>5}\n",
            standing.player,
            standing.played,
            standing.won,
            standing.lost,
            standing.drawn,
            standing.best_margin
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cricket_core::{MatchConfig, MatchEngine, MatchMode, Side};

    fn names() -> PlayerNames {
        PlayerNames::defaults_for(MatchMode::SinglePlayer)
    }

    #[test]
    fn scoreboard_shows_partial_overs_and_chase() {
        let config = MatchConfig::new(1, 1, Side::A);
        let mut engine = MatchEngine::new(config, 0).unwrap();
        engine.resolve_ball(4, 2).unwrap();
        assert_eq!(scoreboard(engine.state(), &names()), "You 4/0 (0.1/1 ov)");

        engine.resolve_ball(3, 3).unwrap();
        engine.close_inning_and_compute_target().unwrap();
        assert_eq!(scoreboard(engine.state(), &names()), "You 4/1 (0.2/1 ov)");

        engine.start_second_inning().unwrap();
        engine.resolve_ball(4, 1).unwrap();
        assert_eq!(
            scoreboard(engine.state(), &names()),
            "Computer 4/0 (0.1/1 ov) | target 5, need 1 run from 5 balls"
        );
    }

    #[test]
    fn ball_lines() {
        let mut engine = MatchEngine::new(MatchConfig::new(1, 2, Side::B), 0).unwrap();
        let scored = engine.resolve_ball(6, 1).unwrap();
        assert_eq!(ball(&scored, &names()), "Computer 6 vs You 1: 6 runs");
        let out = engine.resolve_ball(2, 2).unwrap();
        assert_eq!(ball(&out, &names()), "Computer 2 vs You 2: OUT!");
    }

    #[test]
    fn inning_and_result_lines() {
        let mut engine = MatchEngine::new(MatchConfig::new(1, 1, Side::A), 0).unwrap();
        engine.resolve_ball(1, 2).unwrap();
        engine.resolve_ball(5, 5).unwrap();
        let target = engine.close_inning_and_compute_target().unwrap();
        assert_eq!(
            inning_closed(engine.current_inning(), Some(target), &names()),
            "End of inning 1: You 1/1. Computer needs 2 to win."
        );

        engine.start_second_inning().unwrap();
        engine.resolve_ball(1, 3).unwrap();
        engine.resolve_ball(4, 4).unwrap();
        let drawn = engine.finalize().unwrap();
        assert_eq!(result(&drawn, &names()), "Match drawn, 1 each.");
    }

    #[test]
    fn empty_leaderboard() {
        assert_eq!(leaderboard(&[], &[]), "No matches recorded yet.");
    }
}
