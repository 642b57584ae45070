//! Dice and skill-draw randomness behind a substitutable source.
//!
//! All randomness the engine consumes flows through [`RandomSource`]:
//! die rolls for movement and sabotage, and skill draws on tile landings.
//! Production play uses the seeded [`GameRng`]; tests substitute
//! [`ScriptedRandom`] to drive exact sequences.
//!
//! ```
//! use snakes_ladders::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.roll_die(), b.roll_die());
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::skills::Skill;

/// The skill-draw pool had no values left after exclusions.
///
/// Unreachable with the full catalog, since the pool is strictly larger
/// than the per-player skill capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("skill pool exhausted after exclusions")]
pub struct PoolExhausted;

/// Source of die rolls and skill draws.
pub trait RandomSource {
    /// Roll a six-sided die, uniform in `[1, 6]`.
    fn roll_die(&mut self) -> u8;

    /// Draw one skill uniformly from `pool`, skipping values in `exclude`.
    ///
    /// Fails only when `pool` minus `exclude` is empty.
    fn pick_skill(&mut self, pool: &[Skill], exclude: &[Skill]) -> Result<Skill, PoolExhausted>;
}

/// Deterministic production RNG.
///
/// Uses ChaCha8 for speed with high-quality randomness. The same seed
/// produces an identical turn-by-turn sequence, and the state can be
/// captured and restored in O(1) for replays.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen();
        Self::new(seed)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Capture the current state for replay.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a captured state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    fn pick_skill(&mut self, pool: &[Skill], exclude: &[Skill]) -> Result<Skill, PoolExhausted> {
        let candidates: Vec<Skill> = pool
            .iter()
            .copied()
            .filter(|skill| !exclude.contains(skill))
            .collect();

        if candidates.is_empty() {
            return Err(PoolExhausted);
        }

        Ok(candidates[self.inner.gen_range(0..candidates.len())])
    }
}

/// Captured RNG state for replay checkpoints.
///
/// Uses the ChaCha8 word position for O(1) capture regardless of how many
/// values have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}

/// Scripted source for tests and harnesses.
///
/// Die rolls are consumed in order from the scripted list; skill draws take
/// the next scripted index modulo the candidate count, defaulting to the
/// first candidate once the script runs dry.
///
/// Panics if `roll_die` is called with no rolls left; a test that rolls
/// more than it scripted is a broken test.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    rolls: VecDeque<u8>,
    picks: VecDeque<usize>,
}

impl ScriptedRandom {
    /// Script the given die rolls, in order.
    #[must_use]
    pub fn with_rolls(rolls: &[u8]) -> Self {
        debug_assert!(rolls.iter().all(|r| (1..=6).contains(r)));
        Self {
            rolls: rolls.iter().copied().collect(),
            picks: VecDeque::new(),
        }
    }

    /// Script skill-draw indices (into the post-exclusion candidate list).
    #[must_use]
    pub fn with_picks(mut self, picks: &[usize]) -> Self {
        self.picks = picks.iter().copied().collect();
        self
    }

    /// Append one more roll to the script.
    pub fn push_roll(&mut self, roll: u8) {
        debug_assert!((1..=6).contains(&roll));
        self.rolls.push_back(roll);
    }

    /// Number of unconsumed rolls.
    #[must_use]
    pub fn remaining_rolls(&self) -> usize {
        self.rolls.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn roll_die(&mut self) -> u8 {
        self.rolls.pop_front().expect("scripted rolls exhausted")
    }

    fn pick_skill(&mut self, pool: &[Skill], exclude: &[Skill]) -> Result<Skill, PoolExhausted> {
        let candidates: Vec<Skill> = pool
            .iter()
            .copied()
            .filter(|skill| !exclude.contains(skill))
            .collect();

        if candidates.is_empty() {
            return Err(PoolExhausted);
        }

        let index = self.picks.pop_front().unwrap_or(0);
        Ok(candidates[index % candidates.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll_die(), rng2.roll_die());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll_die()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll_die()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_rolls_in_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let roll = rng.roll_die();
            assert!((1..=6).contains(&roll));
        }
    }

    #[test]
    fn test_pick_skill_respects_exclusions() {
        let mut rng = GameRng::new(42);
        let exclude = [Skill::Shield, Skill::Stun];

        for _ in 0..100 {
            let skill = rng.pick_skill(&Skill::CATALOG, &exclude).unwrap();
            assert!(!exclude.contains(&skill));
        }
    }

    #[test]
    fn test_pick_skill_exhausted() {
        let mut rng = GameRng::new(42);
        let result = rng.pick_skill(&[Skill::Swap], &[Skill::Swap]);
        assert_eq!(result, Err(PoolExhausted));
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);
        for _ in 0..37 {
            rng.roll_die();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.roll_die()).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.roll_die()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRng::new(9).state();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameRngState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }

    #[test]
    fn test_scripted_rolls() {
        let mut rng = ScriptedRandom::with_rolls(&[3, 6, 1]);
        assert_eq!(rng.roll_die(), 3);
        assert_eq!(rng.roll_die(), 6);
        assert_eq!(rng.roll_die(), 1);
        assert_eq!(rng.remaining_rolls(), 0);
    }

    #[test]
    #[should_panic(expected = "scripted rolls exhausted")]
    fn test_scripted_rolls_exhausted() {
        let mut rng = ScriptedRandom::with_rolls(&[2]);
        rng.roll_die();
        rng.roll_die();
    }

    #[test]
    fn test_scripted_picks() {
        let mut rng = ScriptedRandom::default().with_picks(&[1]);

        // Catalog minus Shield: [Stun, Swap, DiceControl, Anchor, Sabotage].
        let picked = rng.pick_skill(&Skill::CATALOG, &[Skill::Shield]).unwrap();
        assert_eq!(picked, Skill::Swap);

        // Script dry: falls back to the first candidate.
        let picked = rng.pick_skill(&Skill::CATALOG, &[Skill::Shield]).unwrap();
        assert_eq!(picked, Skill::Stun);
    }
}
