use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_SPRITES, MEMORY_SIZE, NUM_KEYS, NUM_REGISTERS,
    PROGRAM_START, STACK_DEPTH,
};

/// The framebuffer is indexed as [y][x]; cells hold 0 or 1.
pub type FrameBuffer = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// Pressed status of the sixteen keypad keys, indexed by key symbol.
pub type Keypad = [bool; NUM_KEYS];

/// Documented points of behavioral divergence between implementations of the
/// instruction set.
///
/// Each flag is fixed when the machine is built and never changes at runtime.
/// The defaults encode the reference behavior.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Quirks {
    /// Shift instructions read Vy and leave the shifted value in Vx instead
    /// of shifting Vx in place.
    pub shift_reads_vy: bool,
    /// The offset jump adds Vx, with X taken from the high nibble of the
    /// target address, instead of V0.
    pub jump_adds_vx: bool,
    /// Register store/load advances the index register past the copied range.
    pub increment_index: bool,
}

/// A snapshot of the machine's internal state
///
/// ## CPU
/// - (v) 16 8-bit registers; VF doubles as the carry/borrow/collision flag
/// - (i) a 16-bit index register addressing memory for sprite and data access
/// - (pc) a 16-bit program counter
/// - (sp) a stack pointer indexing the next free call stack slot
/// - (opcode) the word latched by the most recent fetch
///
/// ## Timers
/// - 2 8-bit counters (delay & sound), each decaying by one per executed
///   instruction while nonzero
/// - a nonzero sound timer means the driver should have a tone audible
///
/// ## Memory
/// - 4096 bytes of addressable memory; the font table occupies the bottom,
///   program images start at 0x200
/// - a 16-slot stack of subroutine return addresses
/// - a 64x32 framebuffer of on/off cells
///
/// Pure data; all behavior lives in the operation functions.
#[derive(Clone, Copy)]
pub struct State {
    pub v: [u8; NUM_REGISTERS],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub opcode: u16,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_DEPTH],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub quirks: Quirks,
}

impl State {
    pub fn new() -> Self {
        Self::with_quirks(Quirks::default())
    }

    pub fn with_quirks(quirks: Quirks) -> Self {
        // The font sprite table lives at the bottom of memory
        let mut memory = [0; MEMORY_SIZE];
        memory[..FONT_SPRITES.len()].copy_from_slice(&FONT_SPRITES);

        State {
            v: [0; NUM_REGISTERS],
            i: 0,
            // Program images are loaded and started at 0x200
            pc: PROGRAM_START as u16,
            sp: 0,
            opcode: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_DEPTH],
            memory,
            frame_buffer: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            draw_flag: false,
            quirks,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
