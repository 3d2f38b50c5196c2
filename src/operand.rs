use yaxpeax_arch::Reader;

use crate::fields::{InstructionFields, MODE_MEMORY, MODE_MEMORY_DISP8, MODE_MEMORY_DISP16, MODE_REGISTER};
use crate::register::{BaseRegisters, Register};
use crate::DecodeError;

/// an operand for an 8086 instruction.
#[derive(Copy, Clone, Hash, PartialEq, Eq)]
pub enum Operand {
    /// no operand in this position.
    ///
    /// `Instruction::operand` yields this for indices past `Instruction::operand_count`.
    Nothing,
    /// a general-purpose register, byte or word sized.
    Register(Register),
    /// memory at the sum of the base registers and a signed displacement. the displacement is
    /// zero for mode `0b00`, sign-extended from one byte for mode `0b01`, and a full word for
    /// mode `0b10`.
    Memory(BaseRegisters, i16),
    /// memory at a direct 16-bit address (mode `0b00`, `rm = 0b110`).
    Absolute(u16),
}

/// read the displacement bytes `fields` calls for and build the instruction's operands in
/// assembler order, destination first.
///
/// displacement bytes are read all-or-nothing; if the input ends before all of them are
/// available, this is `DecodeError::ExhaustedInput`.
pub(crate) fn resolve<T: Reader<u32, u8>>(fields: &InstructionFields, words: &mut T) -> Result<[Operand; 2], DecodeError> {
    let mut disp = [0u8; 2];
    let disp_len = fields.displacement_len() as usize;
    words.next_n(&mut disp[..disp_len])?;

    let reg = Operand::Register(Register::lookup(fields.width(), fields.reg()));

    let rm = match fields.mode() {
        MODE_REGISTER => {
            Operand::Register(Register::lookup(fields.width(), fields.rm()))
        },
        MODE_MEMORY if fields.rm() == 0b110 => {
            Operand::Absolute(u16::from_le_bytes(disp))
        },
        MODE_MEMORY => {
            Operand::Memory(BaseRegisters::lookup(fields.rm()), 0)
        },
        MODE_MEMORY_DISP8 => {
            Operand::Memory(BaseRegisters::lookup(fields.rm()), disp[0] as i8 as i16)
        },
        MODE_MEMORY_DISP16 => {
            Operand::Memory(BaseRegisters::lookup(fields.rm()), i16::from_le_bytes(disp))
        },
        _ => {
            unreachable!("mode is a two-bit field");
        }
    };

    if fields.direction() == 1 {
        Ok([reg, rm])
    } else {
        Ok([rm, reg])
    }
}
