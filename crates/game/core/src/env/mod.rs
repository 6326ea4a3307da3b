//! Injected capabilities the rules depend on.
//!
//! The only environmental fact a match needs is randomness for the
//! autonomous side, exposed through [`RngOracle`].
mod rng;

pub use rng::{
    PcgRng, ROLL_BALL_PICK, ROLL_TOSS_DECISION, ROLL_TOSS_DRAW, RngOracle, compute_seed,
};
