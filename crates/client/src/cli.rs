//! Command line definition.
use clap::{Args, Parser, Subcommand, ValueEnum};
use cricket_core::{MatchConfig, MatchMode};

/// Hand cricket in the terminal
#[derive(Parser, Debug)]
#[command(name = "hand-cricket")]
#[command(about = "Play hand cricket against the computer or a friend", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The subcommand to run; a bare invocation starts a single-player match.
    pub fn into_command(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Play(PlayArgs::default()))
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play matches until you decline a rematch
    Play(PlayArgs),

    /// Show recent results and standings
    Leaderboard(LeaderboardArgs),

    /// Show or change player display names
    Names(NamesArgs),
}

#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Opponent: the computer or a second player at this terminal
    #[arg(long, value_enum, default_value_t)]
    pub mode: ModeArg,

    /// Overs per inning, usually 1, 3 or 5 (stored as the new default)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MatchConfig::MAX_OVERS as i64))]
    pub overs: Option<u32>,

    /// Wickets per inning, usually 1, 3 or 5 (stored as the new default)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub wickets: Option<u32>,

    /// Fixed seed for reproducible computer picks
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeArg {
    #[default]
    Single,
    TwoPlayer,
}

impl From<ModeArg> for MatchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Single => MatchMode::SinglePlayer,
            ModeArg::TwoPlayer => MatchMode::LocalTwoPlayer,
        }
    }
}

#[derive(Args, Debug)]
pub struct LeaderboardArgs {
    /// Number of recent matches to list
    #[arg(long, default_value_t = 10)]
    pub limit: usize,

    /// Delete all recorded matches
    #[arg(long)]
    pub clear: bool,
}

#[derive(Args, Debug)]
pub struct NamesArgs {
    /// Name for player 1 (empty string restores the default)
    #[arg(long)]
    pub player1: Option<String>,

    /// Name for player 2 in two-player matches
    #[arg(long)]
    pub player2: Option<String>,
}
