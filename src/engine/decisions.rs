//! Caller-supplied decisions for one turn.
//!
//! The presentation layer owns the actual prompt/suspend loop; the engine
//! only ever sees its results, bundled into a `TurnDecisions` value. Every
//! field is optional; an absent field means "decline".

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// The active player's choices for one `resolve_turn` call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnDecisions {
    /// Index into the active player's skill list to play, if any.
    pub use_skill: Option<usize>,

    /// Target for a targeted skill (`Stun`, `Swap`, `Sabotage`).
    pub skill_target: Option<PlayerId>,

    /// Chosen die value for `DiceControl`, in `[1, 6]`.
    pub dice_value: Option<u8>,

    /// At skill capacity on a skill tile: which slot to replace, if any.
    pub replace_skill_on_tile: Option<usize>,
}

impl TurnDecisions {
    /// Decline everything: just roll and move.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Play the skill at `index` with no further parameters.
    #[must_use]
    pub fn use_skill(index: usize) -> Self {
        Self {
            use_skill: Some(index),
            ..Self::default()
        }
    }

    /// Play the skill at `index` against `target`.
    #[must_use]
    pub fn use_skill_on(index: usize, target: PlayerId) -> Self {
        Self {
            use_skill: Some(index),
            skill_target: Some(target),
            ..Self::default()
        }
    }

    /// Play the `DiceControl` skill at `index`, choosing `value`.
    #[must_use]
    pub fn control_dice(index: usize, value: u8) -> Self {
        Self {
            use_skill: Some(index),
            dice_value: Some(value),
            ..Self::default()
        }
    }

    /// Elect to replace the skill in `slot` if this turn lands on a tile
    /// while at capacity.
    #[must_use]
    pub fn replacing_on_tile(mut self, slot: usize) -> Self {
        self.replace_skill_on_tile = Some(slot);
        self
    }
}
