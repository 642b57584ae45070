//! Structured results of one resolved turn.
//!
//! The engine emits these instead of rendered text; the presentation layer
//! turns them into whatever the table needs. Every trace records what
//! actually happened, including effects that were blocked.

use serde::{Deserialize, Serialize};

use crate::board::TeleportKind;
use crate::core::{InputRejected, PlayerId};
use crate::skills::Skill;

/// The die value used for movement this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollInfo {
    pub value: u8,
    /// True when the value came from `DiceControl` rather than the dice.
    pub controlled: bool,
}

/// A teleport triggered during movement, applied or intercepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeleportEvent {
    pub kind: TeleportKind,
    /// Where the teleport would have led (and did, unless blocked).
    pub dest: u8,
    /// The skill that intercepted a snake, if one did.
    pub blocked_by: Option<Skill>,
}

/// Cell-by-cell record of this turn's movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementTrace {
    /// Position at the start of the turn.
    pub start: u8,
    /// Position after the roll was applied (equals `start` on overshoot).
    pub after_roll: u8,
    /// Final position once any teleport settled.
    pub settled: u8,
    /// The roll would have passed the final cell; the move was forfeit.
    pub overshoot: bool,
    pub teleport: Option<TeleportEvent>,
}

/// What a played skill did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillUseTrace {
    Stun {
        target: PlayerId,
        /// The target's Shield absorbed it.
        blocked: bool,
    },
    Swap {
        target: PlayerId,
        /// User's position after the exchange.
        user_position: u8,
        /// Target's position after the exchange.
        target_position: u8,
    },
    Sabotage {
        target: PlayerId,
        /// The target's Shield absorbed it.
        blocked: bool,
        /// Knockback roll; `None` when blocked.
        roll: Option<u8>,
        /// Target's position after the knockback; `None` when blocked.
        target_position: Option<u8>,
    },
    DiceControl {
        /// The chosen die value.
        value: u8,
    },
}

/// Result of landing on a skill tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcquisitionTrace {
    /// A fresh skill was drawn into a free slot.
    Gained { skill: Skill },
    /// At capacity; the caller elected a slot and it was replaced.
    Replaced {
        slot: usize,
        dropped: Skill,
        gained: Skill,
    },
    /// At capacity and no replacement elected; the tile did nothing.
    AtCapacity,
}

/// Everything that happened in one `resolve_turn` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// The player whose turn this was.
    pub player: PlayerId,
    /// 1-based count of resolved turns, including this one.
    pub turn_number: u32,
    /// The player was stunned: no roll, no skill, flag cleared.
    pub skipped_stunned: bool,
    pub roll: Option<RollInfo>,
    pub movement: Option<MovementTrace>,
    pub skill_use: Option<SkillUseTrace>,
    pub acquisition: Option<AcquisitionTrace>,
    /// Inputs rejected this turn; each was treated as "decline".
    pub rejections: Vec<InputRejected>,
    /// The player reached the final cell this turn.
    pub won: bool,
    /// The race is decided; further calls are no-ops.
    pub session_finished: bool,
}

impl TurnOutcome {
    pub(crate) fn begin(player: PlayerId, turn_number: u32) -> Self {
        Self {
            player,
            turn_number,
            skipped_stunned: false,
            roll: None,
            movement: None,
            skill_use: None,
            acquisition: None,
            rejections: Vec::new(),
            won: false,
            session_finished: false,
        }
    }
}
