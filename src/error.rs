use std::io;

use thiserror::Error;

/// Why a program image could not be loaded.
///
/// Load failures are recoverable; the machine is left exactly as it was
/// before the attempt.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image does not fit above the reserved region.
    #[error("program image is {size} bytes but only {capacity} bytes are available")]
    TooLarge { size: usize, capacity: usize },
    /// The image source could not be read.
    #[error("program image could not be read")]
    Unreadable(#[from] io::Error),
}

/// A fault the interpreter cannot continue past.
///
/// Faults are signalled synchronously from within a step and there is no
/// automatic recovery; the driver decides whether to halt, reset, or reload.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// The fetched word matches no defined instruction encoding.
    #[error("unrecognised opcode {0:#06X}")]
    UnknownOpcode(u16),
    /// A subroutine call would nest deeper than the stack allows.
    #[error("subroutine call stack overflow")]
    StackOverflow,
}
