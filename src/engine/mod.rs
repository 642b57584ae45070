//! Turn engine: decision inputs, the state machine, and outcome traces.

mod decisions;
mod outcome;
mod turn;

pub use decisions::TurnDecisions;
pub use outcome::{
    AcquisitionTrace, MovementTrace, RollInfo, SkillUseTrace, TeleportEvent, TurnOutcome,
};
pub use turn::TurnEngine;
