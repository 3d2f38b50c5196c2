//! bit-level decomposition of the first two bytes of an 8086 instruction.
//!
//! ```text
//!  first byte                    second byte ("modrm")
//! | 7 | 6 | 5 | 4 | 3 | 2 | 1 | 0 |   | 7 | 6 | 5 | 4 | 3 | 2 | 1 | 0 |
//! |        opcode         | d | w |   |  mod  |    reg    |    rm     |
//! ```
//!
//! every byte value is a valid decomposition; there are no error cases here.

/// `mod` field: memory, no displacement (except `rm = 0b110`, a direct address)
pub const MODE_MEMORY: u8 = 0b00;
/// `mod` field: memory, 8-bit displacement follows
pub const MODE_MEMORY_DISP8: u8 = 0b01;
/// `mod` field: memory, 16-bit displacement follows
pub const MODE_MEMORY_DISP16: u8 = 0b10;
/// `mod` field: register, no displacement
pub const MODE_REGISTER: u8 = 0b11;

/// the six-bit opcode in bits 7-2 of the first byte.
pub fn opcode(byte: u8) -> u8 {
    byte >> 2
}

/// the `d` bit: `1` if `reg` names the destination operand.
pub fn direction(byte: u8) -> u8 {
    (byte >> 1) & 0b1
}

/// the `w` bit: `0` for byte operands, `1` for word operands.
pub fn width(byte: u8) -> u8 {
    byte & 0b1
}

/// the two-bit `mod` field in bits 7-6 of the modrm byte.
pub fn mode(modrm: u8) -> u8 {
    modrm >> 6
}

/// the `reg` field in bits 5-3 of the modrm byte; always names a register.
pub fn reg(modrm: u8) -> u8 {
    (modrm >> 3) & 0b111
}

/// the `rm` field in bits 2-0 of the modrm byte; a register or a memory operand, depending on `mod`.
pub fn rm(modrm: u8) -> u8 {
    modrm & 0b111
}

/// the fields decoded from an instruction's opcode and modrm bytes.
///
/// `mode` is always in `[0, 3]`, `reg` and `rm` in `[0, 7]`, `direction` and `width` in `[0, 1]`.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Default)]
pub struct InstructionFields {
    opcode: u8,
    direction: u8,
    width: u8,
    mode: u8,
    reg: u8,
    rm: u8,
}

impl InstructionFields {
    /// decompose an opcode byte and its following modrm byte.
    pub fn new(opcode_byte: u8, modrm: u8) -> Self {
        InstructionFields {
            opcode: opcode(opcode_byte),
            direction: direction(opcode_byte),
            width: width(opcode_byte),
            mode: mode(modrm),
            reg: reg(modrm),
            rm: rm(modrm),
        }
    }

    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    pub fn direction(&self) -> u8 {
        self.direction
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn mode(&self) -> u8 {
        self.mode
    }

    pub fn reg(&self) -> u8 {
        self.reg
    }

    pub fn rm(&self) -> u8 {
        self.rm
    }

    /// how many displacement bytes follow the modrm byte for this `mode`/`rm` pair.
    pub fn displacement_len(&self) -> u8 {
        match self.mode {
            MODE_MEMORY if self.rm == 0b110 => 2,
            MODE_MEMORY_DISP8 => 1,
            MODE_MEMORY_DISP16 => 2,
            _ => 0,
        }
    }
}
