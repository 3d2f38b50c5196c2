//! # `yaxpeax-8086`, a decoder for the 8086 instruction set
//!
//! this crate decodes 16-bit real-mode 8086 machine code. coverage is intentionally narrow for
//! now: the register/memory `mov` family (`0b100010dw`, followed by a modrm byte and up to two
//! displacement bytes), in all four addressing modes. any other opcode byte decodes to
//! [`DecodeError::Undefined`] after consuming exactly that one byte, which is what lets
//! [`Listing`] step over bytes it does not understand and keep going.
//!
//! the modrm addressing modes are, by `mod`:
//! ```text
//! 00  memory, no displacement. rm=110 is instead a direct 16-bit address.
//! 01  memory, 8-bit signed displacement follows.
//! 10  memory, 16-bit signed displacement follows, little-endian.
//! 11  register, rm names a second register.
//! ```
//!
//! ## usage
//!
//! the fastest way to decode an 8086 instruction is through [`InstDecoder::decode_slice()`]:
//! ```
//! use yaxpeax_8086::InstDecoder;
//!
//! let inst = InstDecoder::decode_slice(&[0x89, 0xd9]).unwrap();
//!
//! assert_eq!("mov cx, bx", inst.to_string());
//! ```
//!
//! opcodes and operands are available on the decoded instruction, as well as its length and
//! the raw fields it was decoded from:
//! ```
//! use yaxpeax_8086::{BaseRegisters, InstDecoder, Opcode, Operand, Register};
//!
//! let inst = InstDecoder::decode_slice(&[0x8a, 0x56, 0x02]).unwrap();
//!
//! assert_eq!("mov dl, [bp+2]", inst.to_string());
//! assert_eq!(inst.opcode(), Opcode::Mov);
//! assert_eq!(inst.operand(0), Operand::Register(Register::DL));
//! assert_eq!(inst.operand(1), Operand::Memory(BaseRegisters::Bp, 2));
//! assert_eq!(inst.len(), 3);
//! assert_eq!(inst.fields().mode(), 0b01);
//! ```
//!
//! whole programs are disassembled with [`Listing`], or rendered to text with
//! [`write_listing`]:
//! ```
//! let mut text = String::new();
//! let count = yaxpeax_8086::write_listing(&[0x88, 0xe5], &mut text).unwrap();
//!
//! assert_eq!(count, 1);
//! assert_eq!(text, "bits 16\n\nmov ch, ah\n");
//! ```
//!
//! additionally, `yaxpeax-8086` implements `yaxpeax-arch` traits for generic use, such as
//! [`yaxpeax_arch::LengthedInstruction`]. [`yaxpeax_arch::Arch`] is implemented by the unit
//! struct [`I8086`].
//!
//! ## `#![no_std]`
//!
//! the decoder and listing support `no_std` usage; the `dis8086` binary is where files and
//! logging live. the binary and its dependencies sit behind the default `cli` feature, so
//! depend on this crate with `default-features = false` to get just the decoder.

#![no_std]

mod display;
mod fields;
mod listing;
mod operand;
mod reader;
mod register;

pub use display::{BinaryDump, DumpLine};
pub use fields::InstructionFields;
pub use listing::{write_listing, Listing, ListingError, HEADER};
pub use operand::Operand;
pub use reader::ByteReader;
pub use register::{BaseRegisters, Register};

use yaxpeax_arch::{AddressDiff, Arch, Decoder, LengthedInstruction, Reader};

/// a trivial struct for [`yaxpeax_arch::Arch`] to be implemented on. it's only interesting for the
/// associated type parameters.
#[derive(Hash, Eq, PartialEq, Debug, Copy, Clone)]
pub struct I8086;

impl Arch for I8086 {
    type Address = u32;
    type Word = u8;
    type Instruction = Instruction;
    type Decoder = InstDecoder;
    type DecodeError = DecodeError;
    type Operand = Operand;
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DecodeError {
    /// no input available but the instruction would require at least one more byte to decode
    ExhaustedInput,
    /// the opcode byte does not map to an instruction this decoder knows. exactly one byte has
    /// been consumed.
    Undefined,
}

impl From<yaxpeax_arch::ReadError> for DecodeError {
    fn from(_e: yaxpeax_arch::ReadError) -> Self {
        DecodeError::ExhaustedInput
    }
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use yaxpeax_arch::DecodeError;
        f.write_str(self.description())
    }
}

impl yaxpeax_arch::DecodeError for DecodeError {
    fn data_exhausted(&self) -> bool {
        *self == DecodeError::ExhaustedInput
    }
    fn bad_opcode(&self) -> bool {
        *self == DecodeError::Undefined
    }
    fn bad_operand(&self) -> bool {
        false
    }
    fn description(&self) -> &'static str {
        match self {
            DecodeError::ExhaustedInput => "exhausted input",
            DecodeError::Undefined => "undefined opcode",
        }
    }
}

/// top six bits of the first byte of a register/memory `mov`.
const MOV_REG_RM: u8 = 0b100010;

/// an 8086 instruction.
///
/// instructions have an [`Opcode`] and up to two [`Operand`]s, destination first. a register/memory
/// `mov` is two to four bytes long.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub struct Instruction {
    opcode: Opcode,
    operands: [Operand; 2],
    fields: InstructionFields,
    length: u8,
}

impl Default for Instruction {
    fn default() -> Instruction {
        Instruction {
            opcode: Opcode::Mov,
            operands: [Operand::Nothing, Operand::Nothing],
            fields: InstructionFields::default(),
            length: 0,
        }
    }
}

impl Instruction {
    fn reset_operands(&mut self) {
        self.operands = [Operand::Nothing, Operand::Nothing];
    }

    /// the length of this instruction, in bytes.
    pub fn len(&self) -> u8 {
        self.length
    }

    /// get the number of operands in this instruction.
    pub fn operand_count(&self) -> u8 {
        if self.operands[0] == Operand::Nothing {
            0
        } else if self.operands[1] == Operand::Nothing {
            1
        } else {
            2
        }
    }

    /// get the `Operand` at the provided index.
    ///
    /// indices at or above `operand_count()` yield `Operand::Nothing`.
    pub fn operand(&self, idx: u8) -> Operand {
        self.operands.get(idx as usize).copied().unwrap_or(Operand::Nothing)
    }

    /// get the `Opcode` of this instruction.
    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// the `d`, `w`, `mod`, `reg` and `rm` fields this instruction was decoded from.
    pub fn fields(&self) -> InstructionFields {
        self.fields
    }
}

impl LengthedInstruction for Instruction {
    type Unit = AddressDiff<<I8086 as Arch>::Address>;
    fn min_size() -> Self::Unit {
        AddressDiff::from_const(2)
    }
    fn len(&self) -> Self::Unit {
        AddressDiff::from_const(self.length as u32)
    }
}

impl yaxpeax_arch::Instruction for Instruction {
    fn well_defined(&self) -> bool { true }
}

/// an 8086 instruction's operation.
#[derive(Copy, Clone, Hash, PartialEq, Eq)]
pub enum Opcode {
    /// `Move`, register/memory to/from register
    Mov,
}

/// an 8086 instruction decoder.
///
/// there are no decode options for the 8086, so this is a trivial struct that exists only for the
/// [`yaxpeax_arch::Decoder`] trait impl.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstDecoder { }

impl InstDecoder {
    /// decode a slice of bytes into an instruction (or error)
    ///
    /// this is just a higher-level interface to the [`InstDecoder`] impl of
    /// [`yaxpeax_arch::Decoder`].
    pub fn decode_slice(data: &[u8]) -> Result<Instruction, <I8086 as Arch>::DecodeError> {
        InstDecoder::default()
            .decode(&mut ByteReader::new(data))
    }
}

impl Default for InstDecoder {
    fn default() -> Self {
        InstDecoder { }
    }
}

impl Decoder<I8086> for InstDecoder {
    fn decode_into<T: Reader<<I8086 as Arch>::Address, <I8086 as Arch>::Word>>(&self, inst: &mut Instruction, words: &mut T) -> Result<(), <I8086 as Arch>::DecodeError> {
        inst.length = 0;
        inst.reset_operands();
        words.mark();
        let first = words.next()?;

        if fields::opcode(first) != MOV_REG_RM {
            return Err(DecodeError::Undefined);
        }

        // past this point the opcode is committed: running out of input is an error, not a
        // clean end of the stream.
        let modrm = words.next()?;
        let fields = InstructionFields::new(first, modrm);

        inst.operands = operand::resolve(&fields, words)?;
        inst.opcode = Opcode::Mov;
        inst.fields = fields;
        inst.length = words.offset() as u8;

        Ok(())
    }
}
