//! The closed set of skills and their classification.
//!
//! Skill identity is the enum tag; display labels exist only for rendering.
//! Resolution behavior lives in [`crate::skills::resolution`] and the turn
//! engine. This module only answers "what kinds exist" and "how is each
//! kind played".

use serde::{Deserialize, Serialize};

/// A player ability.
///
/// Skills fall into three play styles:
/// - **Active** (`Stun`, `Swap`, `Sabotage`, `DiceControl`): selected at the
///   start of the holder's turn, consumed on selection.
/// - **Passive** (`Shield`): never selected; consumed automatically to cancel
///   the first incoming snake teleport, `Stun`, or `Sabotage`.
/// - **Reactive** (`Anchor`): consumed automatically to cancel a snake
///   teleport hitting its holder (snakes only).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    /// Cancels one incoming snake teleport, `Stun`, or `Sabotage`.
    Shield,
    /// Target skips their next turn.
    Stun,
    /// Exchange positions with a target.
    Swap,
    /// Choose the die value for this turn's movement.
    DiceControl,
    /// Cancels one snake teleport hitting the holder.
    Anchor,
    /// Knock a target backward by a fresh die roll.
    Sabotage,
}

impl Skill {
    /// The acquisition pool: every skill a tile draw can yield.
    pub const CATALOG: [Skill; 6] = [
        Skill::Shield,
        Skill::Stun,
        Skill::Swap,
        Skill::DiceControl,
        Skill::Anchor,
        Skill::Sabotage,
    ];

    /// Whether this skill resolves against another player.
    #[must_use]
    pub const fn needs_target(self) -> bool {
        matches!(self, Skill::Stun | Skill::Swap | Skill::Sabotage)
    }

    /// Whether the holder can select this skill at the start of a turn.
    ///
    /// `Shield` and `Anchor` resolve passively/reactively and are never
    /// directly playable.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        !matches!(self, Skill::Shield | Skill::Anchor)
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Skill::Shield => "Shield",
            Skill::Stun => "Stun",
            Skill::Swap => "Swap",
            Skill::DiceControl => "Dice Control",
            Skill::Anchor => "Anchor",
            Skill::Sabotage => "Sabotage",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_exhaustive_and_distinct() {
        for (i, a) in Skill::CATALOG.iter().enumerate() {
            for b in &Skill::CATALOG[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(Skill::CATALOG.len(), 6);
    }

    #[test]
    fn test_targeted_skills() {
        assert!(Skill::Stun.needs_target());
        assert!(Skill::Swap.needs_target());
        assert!(Skill::Sabotage.needs_target());
        assert!(!Skill::Shield.needs_target());
        assert!(!Skill::Anchor.needs_target());
        assert!(!Skill::DiceControl.needs_target());
    }

    #[test]
    fn test_playable_skills() {
        assert!(!Skill::Shield.is_playable());
        assert!(!Skill::Anchor.is_playable());
        assert!(Skill::Stun.is_playable());
        assert!(Skill::Swap.is_playable());
        assert!(Skill::DiceControl.is_playable());
        assert!(Skill::Sabotage.is_playable());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Skill::DiceControl).unwrap();
        let back: Skill = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Skill::DiceControl);
    }
}
