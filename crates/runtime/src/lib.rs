//! Runtime orchestration for hand cricket matches.
//!
//! This crate wires the pure rules of `cricket-core` to everything around
//! them: input gating, event publication, persisted settings and the
//! leaderboard. Frontends embed a [`MatchSession`] and subscribe to its
//! [`EventBus`].
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the match orchestrator
//! - [`events`] carries match events to any number of subscribers
//! - [`gate`] serializes ball input against presentation
//! - [`settings`] and [`leaderboard`] model the persisted data
//! - [`repository`] stores it on disk or in memory
//! - [`config`] reads runtime settings from the environment
pub mod config;
pub mod error;
pub mod events;
pub mod gate;
pub mod leaderboard;
pub mod repository;
pub mod session;
pub mod settings;

pub use config::RuntimeConfig;
pub use error::{Result, SessionError};
pub use events::{EventBus, MatchEvent};
pub use gate::InputGate;
pub use leaderboard::{MatchRecord, Standing, standings};
pub use repository::{
    FileLeaderboardRepository, FileSettingsRepository, InMemoryLeaderboardRepo,
    InMemorySettingsRepo, LeaderboardRepository, RepositoryError, SettingsRepository,
};
pub use session::MatchSession;
pub use settings::{PlayerNames, PlayerSettings, save_names};
