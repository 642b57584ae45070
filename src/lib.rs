//! # snakes-ladders
//!
//! Turn engine for a snakes-and-ladders variant with a player-vs-player
//! skill system: stuns, position swaps, forced knockbacks, and controlled
//! dice.
//!
//! ## Design Principles
//!
//! 1. **Engine, not interface**: the crate resolves turns and emits
//!    structured outcomes. Rendering, prompting, and input loops belong to
//!    the caller.
//!
//! 2. **Decisions in, traces out**: `resolve_turn` is a transition over
//!    `(session, decisions)`. Every interactive choice (skill selection,
//!    target, die value) arrives as data; everything that happened leaves
//!    as data.
//!
//! 3. **Reproducible randomness**: dice and skill draws flow through the
//!    `RandomSource` trait, backed by a seeded `GameRng` in play and a
//!    `ScriptedRandom` under test.
//!
//! 4. **No global state**: one `GameSession` value owns the roster; nothing
//!    is reachable except through a handle passed explicitly.
//!
//! ## Modules
//!
//! - `board`: snake/ladder teleport tables, skill tiles, pure queries
//! - `skills`: the skill catalog and per-skill resolution rules
//! - `core`: players, the session, randomness, the error taxonomy
//! - `engine`: the turn state machine and its decision/outcome types
//!
//! ## Example
//!
//! ```
//! use snakes_ladders::{GameRng, GameSession, TurnDecisions, TurnEngine};
//!
//! let mut session = GameSession::new(["Ada", "Grace"]).unwrap();
//! let mut rng = GameRng::new(42);
//! let engine = TurnEngine::standard();
//!
//! while !session.is_finished() {
//!     let outcome = engine.resolve_turn(&mut session, &mut rng, &TurnDecisions::none());
//!     if outcome.won {
//!         println!("{} wins!", session.player(outcome.player).name());
//!     }
//! }
//! ```

pub mod board;
pub mod core;
pub mod engine;
pub mod skills;

// Re-export commonly used types
pub use crate::board::{BoardMap, Teleport, TeleportKind, FINAL_CELL};
pub use crate::core::{
    GameRng, GameRngState, GameSession, InputRejected, Player, PlayerId, PlayerSnapshot,
    PoolExhausted, RandomSource, ScriptedRandom, SessionSnapshot, SetupError, MAX_PLAYERS,
    MAX_SKILLS, MIN_PLAYERS,
};
pub use crate::engine::{
    AcquisitionTrace, MovementTrace, RollInfo, SkillUseTrace, TeleportEvent, TurnDecisions,
    TurnEngine, TurnOutcome,
};
pub use crate::skills::Skill;
