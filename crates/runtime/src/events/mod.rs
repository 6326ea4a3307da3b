//! Match events and the bus that carries them to frontends.

mod bus;
mod types;

pub use bus::EventBus;
pub use types::MatchEvent;
