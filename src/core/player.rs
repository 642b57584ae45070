//! Player identity and per-player mutable state.
//!
//! A `Player` is owned exclusively by its `GameSession` and mutated only
//! through turn resolution. The type guards two invariants itself:
//! the skill list never exceeds [`MAX_SKILLS`], and the win flag is
//! monotonic (set once, never cleared).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::FINAL_CELL;
use crate::skills::Skill;

/// Maximum number of skills a player may hold at once.
pub const MAX_SKILLS: usize = 2;

/// Index of a player in the session roster (0-based, registration order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// The raw roster index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Mutable per-player game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    /// Board position in `[0, 100]`; 0 means not yet on the board.
    position: u8,
    skills: SmallVec<[Skill; MAX_SKILLS]>,
    stunned: bool,
    has_won: bool,
}

impl Player {
    /// Create a player at the start position with no skills.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: 0,
            skills: SmallVec::new(),
            stunned: false,
            has_won: false,
        }
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current board position.
    #[must_use]
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Skills currently held, in acquisition order.
    #[must_use]
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Whether the player's next turn is forfeit.
    #[must_use]
    pub fn is_stunned(&self) -> bool {
        self.stunned
    }

    /// Whether the player has reached the final cell.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.has_won
    }

    /// Whether another skill can be acquired without replacement.
    #[must_use]
    pub fn has_skill_capacity(&self) -> bool {
        self.skills.len() < MAX_SKILLS
    }

    pub(crate) fn set_position(&mut self, position: u8) {
        debug_assert!(position <= FINAL_CELL);
        self.position = position;
    }

    /// Move backward by `cells`, never below the start position.
    pub(crate) fn knock_back(&mut self, cells: u8) {
        self.position = self.position.saturating_sub(cells);
    }

    pub(crate) fn set_stunned(&mut self, stunned: bool) {
        self.stunned = stunned;
    }

    /// One-way: a player that has won stays won.
    pub(crate) fn mark_won(&mut self) {
        self.has_won = true;
    }

    pub(crate) fn add_skill(&mut self, skill: Skill) {
        debug_assert!(self.skills.len() < MAX_SKILLS);
        self.skills.push(skill);
    }

    /// Remove and return the skill at `index`.
    pub(crate) fn take_skill(&mut self, index: usize) -> Skill {
        self.skills.remove(index)
    }

    /// Swap the skill at `index` for `skill`, returning the old one.
    pub(crate) fn replace_skill(&mut self, index: usize, skill: Skill) -> Skill {
        std::mem::replace(&mut self.skills[index], skill)
    }

    /// Consume the first held instance of `skill`, if any.
    pub(crate) fn consume_skill(&mut self, skill: Skill) -> bool {
        match self.skills.iter().position(|&held| held == skill) {
            Some(index) => {
                self.skills.remove(index);
                true
            }
            None => false,
        }
    }

    /// Return to the initial state, keeping the name.
    pub(crate) fn reset(&mut self) {
        self.position = 0;
        self.skills.clear();
        self.stunned = false;
        self.has_won = false;
    }
}
