/// Total addressable memory in bytes.
pub const MEMORY_SIZE: usize = 4096;

/// Where program images are loaded and where execution begins.
/// Everything below this address is reserved for the interpreter.
pub const PROGRAM_START: usize = 0x200;

/// The largest program image that fits above the reserved region.
pub const MAX_PROGRAM_SIZE: usize = MEMORY_SIZE - PROGRAM_START;

/// Display width in pixels.
pub const DISPLAY_WIDTH: usize = 64;

/// Display height in pixels.
pub const DISPLAY_HEIGHT: usize = 32;

/// Maximum depth of nested subroutine calls.
pub const STACK_DEPTH: usize = 16;

/// Number of general purpose registers (V0..VF).
pub const NUM_REGISTERS: usize = 16;

/// Number of keypad keys, one per hex symbol.
pub const NUM_KEYS: usize = 16;

/// Bytes per font glyph.
pub const FONT_GLYPH_SIZE: usize = 5;

/// Sprites for the hex digits 0..F, five bytes per glyph, installed at the
/// bottom of memory.
///
/// ROMs locate these through the font-index instruction and depend on the
/// exact bit patterns, so the table is a compatibility requirement rather
/// than a design choice.
pub const FONT_SPRITES: [u8; NUM_KEYS * FONT_GLYPH_SIZE] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
