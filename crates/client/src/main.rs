//! Hand cricket terminal client.
//!
//! This binary is the composition root: it reads configuration from the
//! environment and the command line, opens the settings and leaderboard
//! stores, and hands a [`runtime::MatchSession`] to the prompt-driven game
//! loop.
//!
//! # Examples
//!
//! ```bash
//! # Single player against the computer with stored defaults
//! cargo run -p hand-cricket
//!
//! # Two players sharing the terminal, 2 overs and 3 wickets
//! cargo run -p hand-cricket -- play --mode two-player --overs 2 --wickets 3
//! ```
mod app;
mod cli;
mod config;
mod logging;
mod prompt;
mod render;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use cricket_core::MatchMode;
use runtime::{MatchSession, PlayerSettings, RuntimeConfig};

use crate::cli::{Cli, Command, PlayArgs};
use crate::config::CliConfig;
use crate::prompt::{Prompter, TerminalSource};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Held until exit so buffered log lines reach the file.
    let _guard = match logging::init(&CliConfig::from_env()) {
        Ok(guard) => guard,
        Err(err) => return fail(&err),
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&err),
    }
}

fn fail(err: &anyhow::Error) -> ExitCode {
    eprintln!("{} {}", style("error:").red().bold(), app::describe(err));
    ExitCode::FAILURE
}

fn run(cli: Cli) -> Result<()> {
    let mut runtime_config = RuntimeConfig::from_env();
    let command = cli.into_command();
    if let Command::Play(PlayArgs {
        seed: Some(seed), ..
    }) = &command
    {
        runtime_config = runtime_config.with_seed(*seed);
    }

    tracing::info!(
        data_dir = %runtime_config.data_dir.display(),
        persistence = runtime_config.persistence,
        "Starting hand cricket"
    );

    let settings_repo = runtime_config
        .settings_repository()
        .context("Failed to open settings")?;
    let leaderboard_repo = runtime_config
        .leaderboard_repository()
        .context("Failed to open leaderboard")?;
    let mut prompter = Prompter::new(TerminalSource::new(), std::io::stdout());

    match command {
        Command::Play(args) => {
            let mode = MatchMode::from(args.mode);
            let mut settings = PlayerSettings::load(settings_repo.as_ref(), mode)
                .context("Failed to load settings")?;
            if args.overs.is_some() || args.wickets.is_some() {
                settings.overs = args.overs.unwrap_or(settings.overs);
                settings.wickets = args.wickets.unwrap_or(settings.wickets);
                settings
                    .save_selection(settings_repo.as_ref())
                    .context("Failed to save match settings")?;
            }

            let mut session = MatchSession::new(mode, settings, runtime_config.seed)?
                .with_leaderboard(leaderboard_repo);
            app::run_session(&mut session, &mut prompter)?;
        }
        Command::Leaderboard(args) => {
            app::show_leaderboard(
                leaderboard_repo.as_ref(),
                args.limit,
                args.clear,
                &mut prompter,
            )?;
        }
        Command::Names(args) => {
            app::manage_names(
                settings_repo.as_ref(),
                args.player1.as_deref(),
                args.player2.as_deref(),
                &mut prompter,
            )?;
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
