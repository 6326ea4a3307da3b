//! RNG oracle for deterministic random number generation.
//!
//! The computer opponent's picks, the second toss number and the autonomous
//! bat/bowl decision all come from an [`RngOracle`]. The engine never owns a
//! random source; it derives a seed per roll and asks the oracle.
//!
//! # Determinism
//!
//! All RNG implementations must be deterministic: given the same seed,
//! they must produce the same value. A match replayed with the same match
//! seed and the same external picks produces the same scorecard.

/// Roll context for the autonomous side's toss number.
pub const ROLL_TOSS_DRAW: u32 = 0;
/// Roll context for the autonomous bat/bowl decision.
pub const ROLL_TOSS_DECISION: u32 = 1;
/// Roll context for an autonomous per-ball pick.
pub const ROLL_BALL_PICK: u32 = 2;

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a die with N sides (1-N inclusive).
    fn roll_die(&self, seed: u64, sides: u32) -> u32 {
        (self.next_u32(seed) % sides) + 1
    }

    /// Roll a six-sided hand (1-6 inclusive).
    fn roll_hand(&self, seed: u64) -> u32 {
        self.roll_die(seed, 6)
    }

    /// Flip a fair coin.
    fn flip(&self, seed: u64) -> bool {
        self.next_u32(seed) & 1 == 1
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 32-bit output from 64-bit state. Same seed always
/// produces the same output.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the PCG state by one step.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Compute a deterministic seed for one roll.
///
/// # Arguments
///
/// * `match_seed` - Base seed fixed when the match (or toss) is created
/// * `nonce` - Number of balls bowled so far in the match (0 for the toss)
/// * `side` - Index of the side the roll is made for
/// * `context` - One of the `ROLL_*` constants, so that two rolls made for the
///   same side at the same nonce stay independent
pub fn compute_seed(match_seed: u64, nonce: u64, side: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash multipliers
    let mut hash = match_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (side as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
    }

    #[test]
    fn hands_stay_in_range_and_cover_every_face() {
        let rng = PcgRng;
        let mut seen = [false; 6];
        for nonce in 0..600 {
            let hand = rng.roll_hand(compute_seed(7, nonce, 1, ROLL_BALL_PICK));
            assert!((1..=6).contains(&hand));
            seen[(hand - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&face| face));
    }

    #[test]
    fn roll_contexts_produce_distinct_seeds() {
        let draw = compute_seed(99, 0, 1, ROLL_TOSS_DRAW);
        let decision = compute_seed(99, 0, 1, ROLL_TOSS_DECISION);
        let ball = compute_seed(99, 0, 1, ROLL_BALL_PICK);
        assert_ne!(draw, decision);
        assert_ne!(decision, ball);
        assert_ne!(draw, ball);
    }
}
