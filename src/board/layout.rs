//! The standard 100-cell board layout.
//!
//! Snake heads always sit above their tails, ladder feet below their tops,
//! and skill tiles share no cell with either. `BoardMap::standard()` bakes
//! these tables in; custom layouts go through `BoardMap::new`.

/// Snake teleports as `(head, tail)` pairs.
pub(crate) const SNAKES: [(u8, u8); 10] = [
    (16, 6),
    (47, 26),
    (49, 11),
    (56, 53),
    (62, 19),
    (64, 60),
    (87, 24),
    (93, 73),
    (95, 75),
    (98, 78),
];

/// Ladder teleports as `(foot, top)` pairs.
pub(crate) const LADDERS: [(u8, u8); 9] = [
    (1, 38),
    (4, 14),
    (9, 31),
    (21, 42),
    (28, 84),
    (36, 44),
    (51, 67),
    (71, 91),
    (80, 100),
];

/// Cells that offer a skill draw on landing.
pub(crate) const SKILL_TILES: [u8; 9] = [10, 20, 30, 40, 50, 60, 70, 85, 90];
