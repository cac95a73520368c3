//! Deterministic randomness for combat rolls.
//!
//! Rolls never come from ambient thread-local generators. Each one is derived
//! from the encounter seed, a running roll counter and the kind of roll, so a
//! combat replayed with the same seed and the same player choices produces
//! the same damage, crits, AI choices and loot.
use crate::state::Side;

/// Source of seeded random values.
///
/// Implementations must be pure: the same seed always yields the same value.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + (u64::from(self.next_u32(seed)) % span) as u32
    }

    /// Uniform value in `[0, 1]` (both ends reachable).
    fn unit(&self, seed: u64) -> f64 {
        f64::from(self.next_u32(seed)) / f64::from(u32::MAX)
    }
}

/// PCG-XSH-RR: 64-bit LCG state, 32-bit permuted output.
///
/// Stateless here: the state is the seed handed in by [`compute_seed`].
/// See <https://www.pcg-random.org/>.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// Xorshift the high bits, then rotate by the top five bits.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Oracle that returns the same draw for every seed.
///
/// `FixedRng(0)` makes every range roll its minimum and every chance with a
/// positive probability succeed; `FixedRng(u32::MAX)` does the opposite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedRng(pub u32);

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

/// Mixes the encounter seed with the roll counter, the rolling side and the
/// roll kind into a single 64-bit seed.
///
/// Constants are the SplitMix64 / FxHash multipliers followed by the
/// MurmurHash3 finalizer.
pub fn compute_seed(game_seed: u64, nonce: u64, actor: u32, context: u32) -> u64 {
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(actor).wrapping_mul(0x517cc1b727220a95);
    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}

/// What a roll is for. Mixed into the seed so different rolls made at the
/// same point never collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[repr(u32)]
pub enum Roll {
    AttackDamage = 0,
    Critical = 1,
    PowerAttack = 2,
    Stun = 3,
    SpellSecondary = 4,
    Escape = 5,
    Flee = 6,
    AiBranch = 7,
    AbilityChance = 8,
    Loot = 9,
}

/// Seeded roll source for one encounter.
///
/// Every draw advances an internal counter, so the sequence depends only on
/// the seed and the order of rolls.
pub struct Dice<'a> {
    rng: &'a dyn RngOracle,
    seed: u64,
    nonce: u64,
}

impl<'a> Dice<'a> {
    pub fn new(rng: &'a dyn RngOracle, seed: u64) -> Self {
        Self {
            rng,
            seed,
            nonce: 0,
        }
    }

    /// Number of rolls made so far.
    pub fn rolls(&self) -> u64 {
        self.nonce
    }

    fn next_seed(&mut self, side: Side, roll: Roll) -> u64 {
        let seed = compute_seed(self.seed, self.nonce, side.seed_tag(), roll as u32);
        self.nonce += 1;
        seed
    }

    /// Raw 32-bit draw.
    pub fn raw(&mut self, side: Side, roll: Roll) -> u32 {
        let seed = self.next_seed(side, roll);
        self.rng.next_u32(seed)
    }

    /// Uniform integer in `[min, max]`.
    pub fn range(&mut self, side: Side, roll: Roll, min: u32, max: u32) -> u32 {
        let seed = self.next_seed(side, roll);
        self.rng.range(seed, min, max)
    }

    /// Uniform value in `[0, 1]`.
    pub fn unit(&mut self, side: Side, roll: Roll) -> f64 {
        let seed = self.next_seed(side, roll);
        self.rng.unit(seed)
    }

    /// True with probability `p` (a draw strictly below `p`).
    pub fn chance(&mut self, side: Side, roll: Roll, p: f64) -> bool {
        self.unit(side, roll) < p
    }
}
