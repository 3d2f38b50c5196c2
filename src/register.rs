/// an 8086 general-purpose register, either one of the eight byte registers or one of the eight
/// word registers.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Ord, PartialOrd)]
pub enum Register {
    AL, CL, DL, BL, AH, CH, DH, BH,
    AX, CX, DX, BX, SP, BP, SI, DI,
}

/// registers selected by a `reg` (or register-mode `rm`) field, by `w` bit then index.
const REGISTERS: [[Register; 8]; 2] = [
    [Register::AL, Register::CL, Register::DL, Register::BL, Register::AH, Register::CH, Register::DH, Register::BH],
    [Register::AX, Register::CX, Register::DX, Register::BX, Register::SP, Register::BP, Register::SI, Register::DI],
];

impl Register {
    /// the register named by a three-bit register `index` at operand `width` (`0` for byte, `1`
    /// for word).
    ///
    /// both fields come out of the bit extractors already masked, so anything out of range here
    /// is a caller bug and panics.
    pub fn lookup(width: u8, index: u8) -> Register {
        assert!(width < 2, "width bit out of range: {}", width);
        assert!(index < 8, "register index out of range: {}", index);

        REGISTERS[width as usize][index as usize]
    }

    /// the inverse of [`Register::lookup`]: `(width, index)` for this register.
    pub fn encoding(&self) -> (u8, u8) {
        let n = *self as u8;
        (n / 8, n % 8)
    }

    /// the assembler mnemonic for this register, such as `"al"` or `"bp"`.
    pub fn name(&self) -> &'static str {
        match self {
            Register::AL => "al",
            Register::CL => "cl",
            Register::DL => "dl",
            Register::BL => "bl",
            Register::AH => "ah",
            Register::CH => "ch",
            Register::DH => "dh",
            Register::BH => "bh",
            Register::AX => "ax",
            Register::CX => "cx",
            Register::DX => "dx",
            Register::BX => "bx",
            Register::SP => "sp",
            Register::BP => "bp",
            Register::SI => "si",
            Register::DI => "di",
        }
    }
}

/// the base and index registers of a memory operand, as selected by a memory-mode `rm` field.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum BaseRegisters {
    BxSi,
    BxDi,
    BpSi,
    BpDi,
    Si,
    Di,
    Bp,
    Bx,
}

const BASES: [BaseRegisters; 8] = [
    BaseRegisters::BxSi,
    BaseRegisters::BxDi,
    BaseRegisters::BpSi,
    BaseRegisters::BpDi,
    BaseRegisters::Si,
    BaseRegisters::Di,
    BaseRegisters::Bp,
    BaseRegisters::Bx,
];

impl BaseRegisters {
    /// the base registers for memory-mode `rm`. `rm = 0b110` yields `bp`, which is only correct
    /// for modes `0b01` and `0b10`; mode `0b00` uses that encoding for a direct address instead.
    pub fn lookup(rm: u8) -> BaseRegisters {
        assert!(rm < 8, "rm out of range: {}", rm);

        BASES[rm as usize]
    }

    /// the registers summed to form the address, in assembler order.
    pub fn registers(&self) -> (Register, Option<Register>) {
        match self {
            BaseRegisters::BxSi => (Register::BX, Some(Register::SI)),
            BaseRegisters::BxDi => (Register::BX, Some(Register::DI)),
            BaseRegisters::BpSi => (Register::BP, Some(Register::SI)),
            BaseRegisters::BpDi => (Register::BP, Some(Register::DI)),
            BaseRegisters::Si => (Register::SI, None),
            BaseRegisters::Di => (Register::DI, None),
            BaseRegisters::Bp => (Register::BP, None),
            BaseRegisters::Bx => (Register::BX, None),
        }
    }
}
