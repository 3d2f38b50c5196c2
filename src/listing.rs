use core::fmt;

use yaxpeax_arch::{Decoder, Reader};

use crate::{ByteReader, DecodeError, InstDecoder, Instruction};

/// the text every listing starts with, before the first instruction.
pub const HEADER: &str = "bits 16\n\n";

/// an error that stops a listing.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ListingError {
    /// the instruction starting at `offset` was cut short by the end of the input.
    Malformed { offset: u32, error: DecodeError },
    /// the sink a listing was being written to returned an error.
    Format,
}

impl From<fmt::Error> for ListingError {
    fn from(_e: fmt::Error) -> Self {
        ListingError::Format
    }
}

impl fmt::Display for ListingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ListingError::Malformed { offset, error } => {
                write!(f, "malformed instruction at offset {:#x}: {}", offset, error)
            }
            ListingError::Format => {
                f.write_str("error writing listing")
            }
        }
    }
}

/// disassembles a byte slice one instruction at a time, in order.
///
/// yields each instruction with the offset it starts at. bytes that are not the start of a known
/// instruction are stepped over one at a time and never yielded. the iterator ends when the input
/// does; if an instruction is cut short by the end of the input, that is yielded as a single
/// [`ListingError::Malformed`] and the iterator ends there.
pub struct Listing<'a> {
    reader: ByteReader<'a>,
    decoder: InstDecoder,
    skipped: u32,
    failed: bool,
}

impl<'a> Listing<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Listing {
            reader: ByteReader::new(data),
            decoder: InstDecoder::default(),
            skipped: 0,
            failed: false,
        }
    }

    /// the number of unrecognized bytes stepped over so far.
    pub fn skipped(&self) -> u32 {
        self.skipped
    }
}

impl<'a> Iterator for Listing<'a> {
    type Item = Result<(u32, Instruction), ListingError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.failed || self.reader.is_exhausted() {
                return None;
            }

            let offset = self.reader.total_offset();
            match self.decoder.decode(&mut self.reader) {
                Ok(inst) => {
                    return Some(Ok((offset, inst)));
                }
                Err(DecodeError::Undefined) => {
                    // one byte consumed, back to looking for an opcode
                    self.skipped += 1;
                }
                Err(error) => {
                    self.failed = true;
                    return Some(Err(ListingError::Malformed { offset, error }));
                }
            }
        }
    }
}

/// write a full listing of `data` to `out`: [`HEADER`], then one line per instruction.
///
/// returns the number of instructions written. on error, every line before the failing
/// instruction has already been written to `out`.
pub fn write_listing<W: fmt::Write>(data: &[u8], out: &mut W) -> Result<usize, ListingError> {
    out.write_str(HEADER)?;

    let mut count = 0;
    for entry in Listing::new(data) {
        let (_offset, inst) = entry?;
        writeln!(out, "{}", inst)?;
        count += 1;
    }

    Ok(count)
}
