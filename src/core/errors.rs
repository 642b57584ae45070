//! Error taxonomy: roster setup and caller-input rejection.
//!
//! There is no fatal error path during play. `SetupError` is reported before
//! any session exists; `InputRejected` is folded into "decline" by the turn
//! engine and surfaced in the outcome so the caller can re-prompt.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;
use crate::skills::Skill;

/// A roster was rejected before a session could be created.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum SetupError {
    /// Player count outside the supported range of 2 to 4.
    #[error("unsupported player count {0} (expected 2 to 4)")]
    InvalidCount(usize),

    /// A player name was empty or whitespace-only.
    #[error("player name must not be empty")]
    EmptyName,

    /// Two players share a name, compared case-insensitively.
    #[error("duplicate player name {0:?}")]
    DuplicateName(String),
}

/// Caller input rejected during turn resolution.
///
/// A rejection never mutates state: the offending decision is treated as
/// "decline" and the rejection is recorded in the turn outcome.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum InputRejected {
    /// Skill index outside the holder's skill list.
    #[error("no skill at index {0}")]
    InvalidSkillIndex(usize),

    /// `Shield` and `Anchor` resolve on their own and cannot be played.
    #[error("{0} cannot be played directly")]
    SkillNotSelectable(Skill),

    /// A targeted skill was selected without naming a target.
    #[error("{0} requires a target")]
    MissingTarget(Skill),

    /// The target does not exist, already won, or is the user themself.
    #[error("{0} is not a valid target")]
    InvalidTarget(PlayerId),

    /// `DiceControl` was selected without choosing a die value.
    #[error("a die value must be chosen with Dice Control")]
    MissingDiceValue,

    /// Chosen die value outside 1..=6.
    #[error("die value {0} out of range 1..=6")]
    InvalidDiceValue(u8),

    /// Replacement slot outside the holder's skill list.
    #[error("no skill slot {0} to replace")]
    InvalidReplacementSlot(usize),
}
