//! The game session: exclusive owner of the player roster.
//!
//! A `GameSession` is created once per play from validated names, mutated
//! only by the turn engine, and offered for a rematch via [`GameSession::reset`]
//! once the race is decided. No state is reachable except through the
//! session handle.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::errors::SetupError;
use super::player::{Player, PlayerId};
use crate::skills::Skill;

/// Smallest supported roster.
pub const MIN_PLAYERS: usize = 2;
/// Largest supported roster.
pub const MAX_PLAYERS: usize = 4;

/// One game in progress: players in fixed turn order plus the turn cursor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    players: Vec<Player>,
    active_index: usize,
    finished: bool,
    turn_number: u32,
}

impl GameSession {
    /// Create a session from player names.
    ///
    /// Turn order is registration order. Names must be non-empty after
    /// trimming and unique case-insensitively; the roster must hold
    /// [`MIN_PLAYERS`] to [`MAX_PLAYERS`] players.
    pub fn new<S, I>(names: I) -> Result<Self, SetupError>
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
            return Err(SetupError::InvalidCount(names.len()));
        }

        let mut seen = FxHashSet::default();
        for name in &names {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err(SetupError::EmptyName);
            }
            if !seen.insert(trimmed.to_lowercase()) {
                return Err(SetupError::DuplicateName(trimmed.to_string()));
            }
        }

        Ok(Self {
            players: names
                .into_iter()
                .map(|name| Player::new(name.trim().to_string()))
                .collect(),
            active_index: 0,
            finished: false,
            turn_number: 0,
        })
    }

    /// The roster in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of players in the roster.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Look up a player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Mutable access to two distinct players at once.
    pub(crate) fn pair_mut(&mut self, a: PlayerId, b: PlayerId) -> (&mut Player, &mut Player) {
        let (a, b) = (a.index(), b.index());
        debug_assert!(a != b);
        if a < b {
            let (left, right) = self.players.split_at_mut(b);
            (&mut left[a], &mut right[0])
        } else {
            let (left, right) = self.players.split_at_mut(a);
            (&mut right[0], &mut left[b])
        }
    }

    /// ID of the player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        PlayerId::new(self.active_index as u8)
    }

    /// Whether the race is decided.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of fully resolved turns so far.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// IDs of players `of` may target: everyone else still racing.
    pub fn targets_of(&self, of: PlayerId) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .enumerate()
            .filter(move |(index, player)| *index != of.index() && !player.has_won())
            .map(|(index, _)| PlayerId::new(index as u8))
    }

    /// Players still racing.
    #[must_use]
    pub fn remaining_racers(&self) -> usize {
        self.players.iter().filter(|p| !p.has_won()).count()
    }

    pub(crate) fn advance_active(&mut self) {
        self.active_index = (self.active_index + 1) % self.players.len();
    }

    pub(crate) fn begin_turn(&mut self) {
        self.turn_number += 1;
    }

    pub(crate) fn mark_finished(&mut self) {
        self.finished = true;
    }

    /// Read-only view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            players: self
                .players
                .iter()
                .map(|player| PlayerSnapshot {
                    name: player.name().to_string(),
                    position: player.position(),
                    skills: player.skills().to_vec(),
                    stunned: player.is_stunned(),
                    has_won: player.has_won(),
                })
                .collect(),
            active_index: self.active_index,
            finished: self.finished,
            turn_number: self.turn_number,
        }
    }

    /// Rematch with the same roster: every player back to the start,
    /// cursor and flags cleared.
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.active_index = 0;
        self.finished = false;
        self.turn_number = 0;
    }
}

/// Point-in-time view of a session for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub players: Vec<PlayerSnapshot>,
    pub active_index: usize,
    pub finished: bool,
    pub turn_number: u32,
}

/// Point-in-time view of one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub position: u8,
    pub skills: Vec<Skill>,
    pub stunned: bool,
    pub has_won: bool,
}
