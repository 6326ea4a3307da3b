//! Game loop and the non-interactive commands.
use std::io::Write;

use anyhow::{Context, Result};
use console::style;
use cricket_core::{InningNumber, MatchMode, MatchResult, RngOracle, Side};
use runtime::{
    LeaderboardRepository, MatchSession, PlayerSettings, SessionError, SettingsRepository,
    save_names, standings,
};

use crate::prompt::{LineSource, Prompter};
use crate::render;

/// Plays matches until the user declines a rematch.
pub fn run_session<R, S, W>(
    session: &mut MatchSession<R>,
    prompter: &mut Prompter<S, W>,
) -> Result<()>
where
    R: RngOracle,
    S: LineSource,
    W: Write,
{
    loop {
        play_match(session, prompter)?;
        prompter.blank()?;
        if !prompter.confirm("Play again? [y/n]")? {
            return Ok(());
        }
        session.restart();
    }
}

/// Plays one match from the toss to the recorded result.
pub fn play_match<R, S, W>(
    session: &mut MatchSession<R>,
    prompter: &mut Prompter<S, W>,
) -> Result<MatchResult>
where
    R: RngOracle,
    S: LineSource,
    W: Write,
{
    let names = session.names().clone();
    prompter.say(style(format!("{} vs {}", names.player1, names.player2)).bold())?;
    prompter.say(format!(
        "{} over(s), {} wicket(s) per inning",
        session.settings().overs,
        session.settings().wickets
    ))?;

    let choice = prompter.ask_toss_choice(format!("{}, call odd or even:", names.player1))?;
    session.call_toss(choice)?;
    let number = prompter.ask_pick(format!("{}, show a number (1-6):", names.player1), false)?;
    let draw = session.draw_toss(number)?;
    prompter.say(render::toss_draw(&draw, &names))?;

    let outcome = if session.toss_awaits_decision() {
        let decision = prompter.ask_decision(format!(
            "{}, bat or bowl?",
            names.name_of(draw.winner)
        ))?;
        session.decide_toss(decision)?
    } else {
        session.decide_toss_autonomously()?
    };
    prompter.say(render::toss_decision(&outcome, &names))?;

    play_inning(session, prompter)?;
    session
        .start_second_inning()
        .context("Failed to start the chase")?;
    play_inning(session, prompter)?;

    let result = session.finish().context("Failed to record the result")?;
    prompter.blank()?;
    prompter.say(style(render::result(&result, &names)).green().bold())?;
    Ok(result)
}

fn play_inning<R, S, W>(session: &mut MatchSession<R>, prompter: &mut Prompter<S, W>) -> Result<()>
where
    R: RngOracle,
    S: LineSource,
    W: Write,
{
    let names = session.names().clone();
    prompter.blank()?;

    loop {
        let (Some(engine), Some(phase)) = (session.engine(), session.phase()) else {
            return Ok(());
        };
        let inning = engine.current_inning().clone();
        if !phase.accepts_ball() {
            let target = session
                .target()
                .filter(|_| inning.number == InningNumber::First);
            prompter.say(render::inning_closed(&inning, target, &names))?;
            return Ok(());
        }
        prompter.say(render::scoreboard(engine.state(), &names))?;

        let submitted = match session.mode() {
            MatchMode::SinglePlayer => {
                let role = if inning.batting_side == Side::A {
                    "bat"
                } else {
                    "bowl"
                };
                let pick =
                    prompter.ask_pick(format!("{}, {} (1-6):", names.player1, role), false)?;
                session.submit_pick(pick)
            }
            MatchMode::LocalTwoPlayer => {
                let batter = names.name_of(inning.batting_side);
                let bowler = names.name_of(inning.bowling_side());
                let bat = prompter.ask_pick(format!("{batter}, bat (1-6, hidden):"), true)?;
                let bowl = prompter.ask_pick(format!("{bowler}, bowl (1-6, hidden):"), true)?;
                session.submit_picks(bat, bowl)
            }
        };

        match submitted {
            Ok(outcome) => {
                let line = render::ball(&outcome, &names);
                if outcome.delivery.is_dismissal() {
                    prompter.say(style(line).red())?;
                } else {
                    prompter.say(line)?;
                }
                session.release_input();
            }
            Err(err) if err.is_retryable_input() => prompter.warn(err)?,
            Err(err) => return Err(err.into()),
        }
    }
}

/// Prints recent matches and standings, or clears the history.
pub fn show_leaderboard<S, W>(
    leaderboard: &dyn LeaderboardRepository,
    limit: usize,
    clear: bool,
    prompter: &mut Prompter<S, W>,
) -> Result<()>
where
    S: LineSource,
    W: Write,
{
    if clear {
        leaderboard.clear().context("Failed to clear leaderboard")?;
        tracing::info!("Leaderboard cleared");
        return prompter.say("Leaderboard cleared.");
    }

    let records = leaderboard.list().context("Failed to read leaderboard")?;
    let table = standings(&records);
    let recent = leaderboard.recent(limit)?;
    prompter.say(render::leaderboard(&recent, &table).trim_end())
}

/// Stores new display names, or prints the current ones when none are given.
pub fn manage_names<S, W>(
    settings: &dyn SettingsRepository,
    player1: Option<&str>,
    player2: Option<&str>,
    prompter: &mut Prompter<S, W>,
) -> Result<()>
where
    S: LineSource,
    W: Write,
{
    if player1.is_some() || player2.is_some() {
        save_names(settings, player1, player2).context("Failed to save names")?;
    }

    let names = PlayerSettings::load(settings, MatchMode::LocalTwoPlayer)?.names;
    prompter.say(format!("Player 1: {}", names.player1))?;
    prompter.say(format!("Player 2: {}", names.player2))
}

/// Maps a session error to a user-facing message for the top level.
pub fn describe(err: &anyhow::Error) -> String {
    match err.downcast_ref::<SessionError>() {
        Some(SessionError::Repository(inner)) => format!("storage failure: {inner}"),
        _ => format!("{err:#}"),
    }
}
