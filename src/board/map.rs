//! Immutable board lookup tables and pure queries over them.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::layout;

/// The terminal winning cell.
pub const FINAL_CELL: u8 = 100;

/// What kind of teleport a cell triggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeleportKind {
    /// Backward move; interceptable by Shield or Anchor.
    Snake,
    /// Forward move; never blockable.
    Ladder,
}

/// A teleport triggered by landing on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teleport {
    pub kind: TeleportKind,
    /// Destination cell.
    pub dest: u8,
}

/// Static board data: snake and ladder teleports plus the skill-tile set.
///
/// All queries are pure. Invariants are checked once at construction;
/// a constructed map can never fault during play.
#[derive(Clone, Debug)]
pub struct BoardMap {
    snakes: FxHashMap<u8, u8>,
    ladders: FxHashMap<u8, u8>,
    skill_tiles: FxHashSet<u8>,
}

impl BoardMap {
    /// Build a board from explicit tables.
    ///
    /// # Panics
    ///
    /// Panics if any table entry breaks the board invariants: sources and
    /// destinations must lie in `[1, 100]`, cell 100 may not be a teleport
    /// source or a skill tile, snakes must move backward and ladders
    /// forward, no cell may key both tables, and skill tiles must be
    /// disjoint from teleport sources.
    #[must_use]
    pub fn new(snakes: &[(u8, u8)], ladders: &[(u8, u8)], skill_tiles: &[u8]) -> Self {
        let snakes: FxHashMap<u8, u8> = snakes.iter().copied().collect();
        let ladders: FxHashMap<u8, u8> = ladders.iter().copied().collect();
        let skill_tiles: FxHashSet<u8> = skill_tiles.iter().copied().collect();

        for (&head, &tail) in &snakes {
            assert!((1..FINAL_CELL).contains(&head), "snake head {head} out of range");
            assert!((1..=FINAL_CELL).contains(&tail), "snake tail {tail} out of range");
            assert!(head > tail, "snake {head} -> {tail} must move backward");
            assert!(
                !ladders.contains_key(&head),
                "cell {head} is both a snake head and a ladder foot"
            );
        }

        for (&foot, &top) in &ladders {
            assert!((1..FINAL_CELL).contains(&foot), "ladder foot {foot} out of range");
            assert!((1..=FINAL_CELL).contains(&top), "ladder top {top} out of range");
            assert!(foot < top, "ladder {foot} -> {top} must move forward");
        }

        for &tile in &skill_tiles {
            assert!((1..FINAL_CELL).contains(&tile), "skill tile {tile} out of range");
            assert!(
                !snakes.contains_key(&tile) && !ladders.contains_key(&tile),
                "skill tile {tile} overlaps a teleport source"
            );
        }

        Self {
            snakes,
            ladders,
            skill_tiles,
        }
    }

    /// The fixed standard layout.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(&layout::SNAKES, &layout::LADDERS, &layout::SKILL_TILES)
    }

    /// Where landing on `cell` leaves a piece: a snake head resolves to its
    /// tail, a ladder foot to its top, any other cell to itself.
    #[must_use]
    pub fn teleport(&self, cell: u8) -> u8 {
        self.teleport_at(cell).map_or(cell, |t| t.dest)
    }

    /// The teleport triggered at `cell`, if any, with its kind.
    ///
    /// The engine needs the kind: snakes can be intercepted, ladders cannot.
    #[must_use]
    pub fn teleport_at(&self, cell: u8) -> Option<Teleport> {
        if let Some(&tail) = self.snakes.get(&cell) {
            return Some(Teleport {
                kind: TeleportKind::Snake,
                dest: tail,
            });
        }
        if let Some(&top) = self.ladders.get(&cell) {
            return Some(Teleport {
                kind: TeleportKind::Ladder,
                dest: top,
            });
        }
        None
    }

    /// Whether landing on `cell` offers a skill draw.
    #[must_use]
    pub fn is_skill_tile(&self, cell: u8) -> bool {
        self.skill_tiles.contains(&cell)
    }
}

impl Default for BoardMap {
    fn default() -> Self {
        Self::standard()
    }
}
