//! Interpreter core for the CHIP-8 virtual machine.
//!
//! The crate owns the machine state and the single-step
//! fetch/decode/execute/timer-tick algorithm; presentation, input collection,
//! and pacing belong to an external driver that calls [`Machine::step`] at
//! whatever cadence it chooses.

pub use error::{Fault, LoadError};
pub use machine::Machine;
pub use state::{FrameBuffer, Keypad, Quirks, State};

pub mod constants;
mod error;
mod instruction;
mod machine;
mod opcode;
mod operations;
mod state;
