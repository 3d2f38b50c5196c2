use core::fmt;

use crate::{BaseRegisters, Instruction, Opcode, Operand, Register};

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.opcode)?;

        for i in 0..self.operand_count() {
            if i == 0 {
                f.write_str(" ")?;
            } else {
                f.write_str(", ")?;
            }
            write!(f, "{}", self.operand(i))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        <Operand as fmt::Display>::fmt(self, f)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operand::Nothing => f.write_str("BUG"),
            Operand::Register(reg) => write!(f, "{}", reg),
            Operand::Memory(bases, disp) => {
                write!(f, "[{}", bases)?;
                // widen so `-(-32768)` can't overflow
                let disp = *disp as i32;
                if disp < 0 {
                    write!(f, "-{}", -disp)?;
                } else if disp > 0 {
                    write!(f, "+{}", disp)?;
                }
                f.write_str("]")
            },
            Operand::Absolute(addr) => {
                write!(f, "[{}]", addr)
            },
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for BaseRegisters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.registers() {
            (base, Some(index)) => write!(f, "{}+{}", base, index),
            (base, None) => write!(f, "{}", base),
        }
    }
}

impl fmt::Debug for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        <Opcode as fmt::Display>::fmt(self, f)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Opcode::Mov => {
                f.write_str("mov")
            },
        }
    }
}

/// raw bytes rendered as eight-digit binary groups, two bytes to a line.
///
/// ```
/// use yaxpeax_8086::BinaryDump;
///
/// let dump = BinaryDump(&[0x89, 0xd9, 0x88]);
/// assert_eq!(dump.to_string(), "10001001 11011001\n10001000\n");
/// ```
#[derive(Debug, Copy, Clone)]
pub struct BinaryDump<'a>(pub &'a [u8]);

impl<'a> BinaryDump<'a> {
    /// each line of the dump, without line terminators.
    pub fn lines(&self) -> impl Iterator<Item = DumpLine<'a>> {
        let bytes: &'a [u8] = self.0;
        bytes.chunks(2).map(DumpLine)
    }
}

impl<'a> fmt::Display for BinaryDump<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// one line of a [`BinaryDump`]: up to two bytes, space separated.
#[derive(Debug, Copy, Clone)]
pub struct DumpLine<'a>(&'a [u8]);

impl<'a> fmt::Display for DumpLine<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:08b}", byte)?;
        }
        Ok(())
    }
}
