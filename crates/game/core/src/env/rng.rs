//! RNG oracle for reproducible random draws.
//!
//! Puzzle picks, auto-reveal letters and consumable effects all draw through
//! [`RngOracle`]. Each draw derives its own seed from the session seed, a
//! draw counter and a [`DrawPurpose`], so a session replays identically from
//! the same seed and the same sequence of intents.

/// RNG oracle for stateless, seed-driven random numbers.
pub trait RngOracle {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Pick an index in `0..len`. Returns 0 when `len` is 0.
    fn pick(&self, seed: u64, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u32(seed) as usize) % len
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// - **Deterministic**: same seed always produces the same output
/// - **Fast**: single multiply + xorshift + rotate
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Distinguishes independent draws made for the same counter value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum DrawPurpose {
    Puzzle = 0,
    AutoReveal = 1,
    RevealConsumable = 2,
    Eliminate = 3,
}

/// Compute a per-draw seed from the session seed, draw counter and purpose.
pub fn compute_seed(session_seed: u64, nonce: u64, purpose: DrawPurpose) -> u64 {
    // SplitMix64 / FxHash style mixing
    let mut hash = session_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (purpose as u64).wrapping_mul(0x517cc1b727220a95);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Session-owned draw counter paired with the session seed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawState {
    pub seed: u64,
    pub nonce: u64,
}

impl DrawState {
    pub const fn new(seed: u64) -> Self {
        Self { seed, nonce: 0 }
    }

    /// Draws a uniform index in `0..len` and advances the counter.
    pub fn pick(&mut self, rng: &dyn RngOracle, purpose: DrawPurpose, len: usize) -> usize {
        let seed = compute_seed(self.seed, self.nonce, purpose);
        self.nonce = self.nonce.wrapping_add(1);
        rng.pick(seed, len)
    }
}
