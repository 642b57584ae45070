//! Core types: players, the game session, randomness, errors.

pub mod errors;
pub mod player;
pub mod rng;
pub mod session;

pub use errors::{InputRejected, SetupError};
pub use player::{Player, PlayerId, MAX_SKILLS};
pub use rng::{GameRng, GameRngState, PoolExhausted, RandomSource, ScriptedRandom};
pub use session::{GameSession, PlayerSnapshot, SessionSnapshot, MAX_PLAYERS, MIN_PLAYERS};
