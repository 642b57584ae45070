//! The turn state machine.
//!
//! `resolve_turn` drives one full turn for the active player:
//!
//! ```text
//! TurnStart -> (stunned? SkipTurn -> TurnEnd)
//!           -> OptionalSkillUse -> DiceResolution -> MovementResolution
//!           -> SkillTileCheck -> WinCheck -> TurnEnd
//! ```
//!
//! The engine is a pure transition over `(session, decisions)`: all
//! interactive input arrives in `TurnDecisions`, all randomness comes from
//! the injected `RandomSource`, and the result leaves as a `TurnOutcome`.
//! Invalid input never corrupts state: it is recorded and treated as a
//! decline.

use crate::board::{BoardMap, TeleportKind, FINAL_CELL};
use crate::core::{GameSession, InputRejected, PlayerId, RandomSource};
use crate::skills::resolution::{self, TargetedOutcome};
use crate::skills::Skill;

use super::decisions::TurnDecisions;
use super::outcome::{
    AcquisitionTrace, MovementTrace, RollInfo, SkillUseTrace, TeleportEvent, TurnOutcome,
};

/// Result of a successfully played skill.
struct PlayedSkill {
    trace: SkillUseTrace,
    /// Set by `DiceControl`: replaces this turn's roll.
    forced_roll: Option<u8>,
}

/// Drives turns against a fixed board.
#[derive(Clone, Debug, Default)]
pub struct TurnEngine {
    board: BoardMap,
}

impl TurnEngine {
    /// Create an engine over a custom board.
    #[must_use]
    pub fn new(board: BoardMap) -> Self {
        Self { board }
    }

    /// Create an engine over the standard board.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(BoardMap::standard())
    }

    /// The board this engine plays on.
    #[must_use]
    pub fn board(&self) -> &BoardMap {
        &self.board
    }

    /// Resolve one turn for the active player and advance the turn cursor.
    ///
    /// Players who already won never receive a turn slot; the cursor moves
    /// past them silently. On a finished session this is a no-op whose
    /// outcome carries only the `session_finished` flag.
    pub fn resolve_turn<R: RandomSource>(
        &self,
        session: &mut GameSession,
        rng: &mut R,
        decisions: &TurnDecisions,
    ) -> TurnOutcome {
        if session.is_finished() {
            let mut outcome = TurnOutcome::begin(session.active_player(), session.turn_number());
            outcome.session_finished = true;
            return outcome;
        }

        // Won players are permanently out of the rotation.
        while session.player(session.active_player()).has_won() {
            session.advance_active();
        }

        let player_id = session.active_player();
        session.begin_turn();
        let mut outcome = TurnOutcome::begin(player_id, session.turn_number());

        // A stunned turn is forfeit in full: no roll, no skill, no tile.
        if session.player(player_id).is_stunned() {
            session.player_mut(player_id).set_stunned(false);
            outcome.skipped_stunned = true;
            tracing::debug!(
                player = session.player(player_id).name(),
                turn = outcome.turn_number,
                "stunned, turn skipped"
            );
            session.advance_active();
            return outcome;
        }

        let mut forced_roll = None;
        if let Some(index) = decisions.use_skill {
            match self.play_skill(session, rng, player_id, index, decisions) {
                Ok(played) => {
                    outcome.skill_use = Some(played.trace);
                    forced_roll = played.forced_roll;
                }
                Err(rejection) => {
                    tracing::debug!(%rejection, "skill input rejected, treated as decline");
                    outcome.rejections.push(rejection);
                }
            }
        }

        let roll = match forced_roll {
            Some(value) => RollInfo {
                value,
                controlled: true,
            },
            None => RollInfo {
                value: rng.roll_die(),
                controlled: false,
            },
        };
        outcome.roll = Some(roll);

        outcome.movement = Some(self.resolve_movement(session, player_id, roll.value));

        outcome.acquisition =
            self.check_skill_tile(session, rng, player_id, decisions, &mut outcome.rejections);

        if session.player(player_id).position() == FINAL_CELL {
            session.player_mut(player_id).mark_won();
            outcome.won = true;
            tracing::debug!(
                player = session.player(player_id).name(),
                turn = outcome.turn_number,
                "reached the final cell"
            );
            // A race needs two runners.
            if session.remaining_racers() < 2 {
                session.mark_finished();
            }
        }

        session.advance_active();
        outcome.session_finished = session.is_finished();
        outcome
    }

    /// Validate and apply a skill selection.
    ///
    /// The user's skill is consumed at selection, before its effect lands;
    /// a rejection leaves everything untouched.
    fn play_skill<R: RandomSource>(
        &self,
        session: &mut GameSession,
        rng: &mut R,
        user: PlayerId,
        index: usize,
        decisions: &TurnDecisions,
    ) -> Result<PlayedSkill, InputRejected> {
        let Some(&skill) = session.player(user).skills().get(index) else {
            return Err(InputRejected::InvalidSkillIndex(index));
        };
        if !skill.is_playable() {
            return Err(InputRejected::SkillNotSelectable(skill));
        }

        if skill == Skill::DiceControl {
            let value = decisions
                .dice_value
                .ok_or(InputRejected::MissingDiceValue)?;
            if !(1..=6).contains(&value) {
                return Err(InputRejected::InvalidDiceValue(value));
            }
            session.player_mut(user).take_skill(index);
            tracing::debug!(
                player = session.player(user).name(),
                value,
                "dice control replaces this turn's roll"
            );
            return Ok(PlayedSkill {
                trace: SkillUseTrace::DiceControl { value },
                forced_roll: Some(value),
            });
        }

        // Everything else playable takes a target still in the race.
        let target = decisions
            .skill_target
            .ok_or(InputRejected::MissingTarget(skill))?;
        if target == user
            || target.index() >= session.player_count()
            || session.player(target).has_won()
        {
            return Err(InputRejected::InvalidTarget(target));
        }

        session.player_mut(user).take_skill(index);

        let resolved = match skill {
            Skill::Stun => resolution::resolve_stun(session.player_mut(target)),
            Skill::Swap => {
                let (user_state, target_state) = session.pair_mut(user, target);
                resolution::resolve_swap(user_state, target_state)
            }
            Skill::Sabotage => resolution::resolve_sabotage(session.player_mut(target), rng),
            Skill::Shield | Skill::Anchor | Skill::DiceControl => {
                unreachable!("filtered before consumption")
            }
        };

        let trace = match resolved {
            TargetedOutcome::StunApplied => SkillUseTrace::Stun {
                target,
                blocked: false,
            },
            TargetedOutcome::StunBlocked => SkillUseTrace::Stun {
                target,
                blocked: true,
            },
            TargetedOutcome::Swapped {
                user_position,
                target_position,
            } => SkillUseTrace::Swap {
                target,
                user_position,
                target_position,
            },
            TargetedOutcome::SabotageApplied {
                roll,
                target_position,
            } => SkillUseTrace::Sabotage {
                target,
                blocked: false,
                roll: Some(roll),
                target_position: Some(target_position),
            },
            TargetedOutcome::SabotageBlocked => SkillUseTrace::Sabotage {
                target,
                blocked: true,
                roll: None,
                target_position: None,
            },
        };

        Ok(PlayedSkill {
            trace,
            forced_roll: None,
        })
    }

    /// Apply the roll: advance, forfeit on overshoot, settle one teleport.
    ///
    /// A teleport destination is never re-checked, so malformed chains can
    /// not loop.
    fn resolve_movement(
        &self,
        session: &mut GameSession,
        player_id: PlayerId,
        roll: u8,
    ) -> MovementTrace {
        let start = session.player(player_id).position();
        let landed = start + roll;

        if landed > FINAL_CELL {
            tracing::debug!(
                player = session.player(player_id).name(),
                start,
                roll,
                "overshoot, move forfeited"
            );
            return MovementTrace {
                start,
                after_roll: start,
                settled: start,
                overshoot: true,
                teleport: None,
            };
        }

        session.player_mut(player_id).set_position(landed);

        let mut settled = landed;
        let teleport = self.board.teleport_at(landed).map(|hop| {
            let blocked_by = match hop.kind {
                TeleportKind::Snake => resolution::intercept_snake(session.player_mut(player_id)),
                TeleportKind::Ladder => None,
            };
            if blocked_by.is_none() {
                settled = hop.dest;
                session.player_mut(player_id).set_position(hop.dest);
            }
            TeleportEvent {
                kind: hop.kind,
                dest: hop.dest,
                blocked_by,
            }
        });

        tracing::debug!(
            player = session.player(player_id).name(),
            start,
            roll,
            settled,
            "moved"
        );
        MovementTrace {
            start,
            after_roll: landed,
            settled,
            overshoot: false,
            teleport,
        }
    }

    /// Offer a skill draw when the settled position is a skill tile.
    fn check_skill_tile<R: RandomSource>(
        &self,
        session: &mut GameSession,
        rng: &mut R,
        player_id: PlayerId,
        decisions: &TurnDecisions,
        rejections: &mut Vec<InputRejected>,
    ) -> Option<AcquisitionTrace> {
        let position = session.player(player_id).position();
        if !self.board.is_skill_tile(position) {
            return None;
        }

        let held = session.player(player_id).skills().to_vec();

        if session.player(player_id).has_skill_capacity() {
            // The draw excludes held skills, so duplicates cannot occur.
            return match rng.pick_skill(&Skill::CATALOG, &held) {
                Ok(skill) => {
                    session.player_mut(player_id).add_skill(skill);
                    tracing::debug!(
                        player = session.player(player_id).name(),
                        %skill,
                        "skill acquired"
                    );
                    Some(AcquisitionTrace::Gained { skill })
                }
                Err(exhausted) => {
                    tracing::warn!(%exhausted, "skill draw yielded nothing");
                    None
                }
            };
        }

        // At capacity the tile does nothing unless the caller elected a
        // slot to replace.
        match decisions.replace_skill_on_tile {
            Some(slot) if slot < held.len() => match rng.pick_skill(&Skill::CATALOG, &held) {
                Ok(gained) => {
                    let dropped = session.player_mut(player_id).replace_skill(slot, gained);
                    tracing::debug!(
                        player = session.player(player_id).name(),
                        %dropped,
                        %gained,
                        "skill replaced"
                    );
                    Some(AcquisitionTrace::Replaced {
                        slot,
                        dropped,
                        gained,
                    })
                }
                Err(exhausted) => {
                    tracing::warn!(%exhausted, "skill draw yielded nothing");
                    None
                }
            },
            Some(slot) => {
                rejections.push(InputRejected::InvalidReplacementSlot(slot));
                Some(AcquisitionTrace::AtCapacity)
            }
            None => Some(AcquisitionTrace::AtCapacity),
        }
    }
}
