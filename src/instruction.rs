use crate::error::Fault;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::{Keypad, State};

/// The executable form of a decoded instruction.
pub type Operation = fn(op: &dyn Opcode, state: &State, keys: Keypad) -> Result<State, Fault>;

/// Selects the Operation encoded by an Opcode.
///
/// The match covers exactly the sixteen top-level families; a sub-opcode with
/// no defined meaning faults with the raw word rather than falling through.
pub fn decode(op: &dyn Opcode) -> Result<Operation, Fault> {
    let operation: Operation = match op.nibbles() {
        (0x0, 0x0, 0xE, 0x0) => clear,
        (0x0, 0x0, 0xE, 0xE) => ret,
        (0x1, ..) => jump,
        (0x2, ..) => call,
        (0x3, ..) => skip_eq,
        (0x4, ..) => skip_ne,
        (0x5, .., 0x0) => skip_eq_reg,
        (0x6, ..) => set,
        (0x7, ..) => add,
        (0x8, .., 0x0) => copy,
        (0x8, .., 0x1) => or,
        (0x8, .., 0x2) => and,
        (0x8, .., 0x3) => xor,
        (0x8, .., 0x4) => add_reg,
        (0x8, .., 0x5) => sub_reg,
        (0x8, .., 0x6) => shift_right,
        (0x8, .., 0x7) => sub_from,
        (0x8, .., 0xE) => shift_left,
        (0x9, .., 0x0) => skip_ne_reg,
        (0xA, ..) => set_index,
        (0xB, ..) => jump_offset,
        (0xC, ..) => random,
        (0xD, ..) => draw,
        (0xE, .., 0x9, 0xE) => skip_key,
        (0xE, .., 0xA, 0x1) => skip_no_key,
        (0xF, .., 0x0, 0x7) => read_delay,
        (0xF, .., 0x0, 0xA) => await_key,
        (0xF, .., 0x1, 0x5) => set_delay,
        (0xF, .., 0x1, 0x8) => set_sound,
        (0xF, .., 0x1, 0xE) => add_index,
        (0xF, .., 0x2, 0x9) => font_index,
        (0xF, .., 0x3, 0x3) => store_bcd,
        (0xF, .., 0x5, 0x5) => store_regs,
        (0xF, .., 0x6, 0x5) => load_regs,
        _ => return Err(Fault::UnknownOpcode(op.raw())),
    };
    Ok(operation)
}
