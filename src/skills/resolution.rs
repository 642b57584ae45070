//! Per-skill effect application.
//!
//! Targeted skills resolve here against player state; the turn engine owns
//! selection, validation, and consumption of the user's skill. Shield is
//! checked *inside* each blockable resolution so one consumed Shield cancels
//! exactly one incoming effect.

use crate::core::player::Player;
use crate::core::rng::RandomSource;
use crate::skills::Skill;

/// What a targeted skill did, with the data the turn trace needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TargetedOutcome {
    /// Target stunned; their next turn is forfeit.
    StunApplied,
    /// Target's Shield consumed; no stun.
    StunBlocked,
    /// Positions exchanged; fields are the positions after the exchange.
    Swapped {
        user_position: u8,
        target_position: u8,
    },
    /// Target knocked back by `roll`, landing on `target_position`.
    SabotageApplied { roll: u8, target_position: u8 },
    /// Target's Shield consumed; no knockback.
    SabotageBlocked,
}

pub(crate) fn resolve_stun(target: &mut Player) -> TargetedOutcome {
    if target.consume_skill(Skill::Shield) {
        tracing::debug!(player = target.name(), "stun blocked by shield");
        return TargetedOutcome::StunBlocked;
    }
    target.set_stunned(true);
    tracing::debug!(player = target.name(), "stunned, next turn forfeit");
    TargetedOutcome::StunApplied
}

/// Unconditional position exchange; Shield does not apply.
pub(crate) fn resolve_swap(user: &mut Player, target: &mut Player) -> TargetedOutcome {
    let user_position = target.position();
    let target_position = user.position();
    user.set_position(user_position);
    target.set_position(target_position);

    tracing::debug!(
        user = user.name(),
        other = target.name(),
        user_position,
        target_position,
        "positions swapped"
    );
    TargetedOutcome::Swapped {
        user_position,
        target_position,
    }
}

pub(crate) fn resolve_sabotage<R: RandomSource>(
    target: &mut Player,
    rng: &mut R,
) -> TargetedOutcome {
    if target.consume_skill(Skill::Shield) {
        tracing::debug!(player = target.name(), "sabotage blocked by shield");
        return TargetedOutcome::SabotageBlocked;
    }

    let roll = rng.roll_die();
    target.knock_back(roll);
    tracing::debug!(
        player = target.name(),
        roll,
        position = target.position(),
        "sabotaged backward"
    );
    TargetedOutcome::SabotageApplied {
        roll,
        target_position: target.position(),
    }
}

/// Try to cancel a snake teleport about to hit `player`.
///
/// Shield takes precedence (it auto-consumes on the first incoming effect);
/// Anchor fires only when no Shield was available. Returns the skill that
/// intercepted, if any.
pub(crate) fn intercept_snake(player: &mut Player) -> Option<Skill> {
    if player.consume_skill(Skill::Shield) {
        tracing::debug!(player = player.name(), "shield absorbed the snake");
        return Some(Skill::Shield);
    }
    if player.consume_skill(Skill::Anchor) {
        tracing::debug!(player = player.name(), "anchor held against the snake");
        return Some(Skill::Anchor);
    }
    None
}
