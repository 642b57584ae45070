//! Board map: teleport tables, skill tiles, and pure queries.

mod layout;
mod map;

pub use map::{BoardMap, Teleport, TeleportKind, FINAL_CELL};
