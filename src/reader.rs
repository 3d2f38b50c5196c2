use yaxpeax_arch::{Reader, ReadError};

/// a cursor over a borrowed byte slice, read strictly front to back.
///
/// offsets are byte offsets from the start of the slice. [`InstDecoder`](crate::InstDecoder)
/// marks the reader at the start of every instruction, so `offset()` after a decode is that
/// instruction's length.
///
/// this is a standalone reader rather than a wrapper around `yaxpeax_arch::U8Reader` because
/// [`Listing`](crate::Listing) needs two things `U8Reader` doesn't give: `is_exhausted()`, to tell a
/// clean end of input from a truncated instruction, and a `next_n` that consumes nothing when it
/// can't be satisfied.
pub struct ByteReader<'a> {
    underlying: &'a [u8],
    mark: u32,
    offset: u32,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        ByteReader {
            underlying: data,
            mark: 0,
            offset: 0,
        }
    }

    /// `true` if there are no more bytes to read.
    pub fn is_exhausted(&self) -> bool {
        self.offset as usize >= self.underlying.len()
    }

    fn remaining(&self) -> usize {
        self.underlying.len().saturating_sub(self.offset as usize)
    }
}

impl<'a> Reader<u32, u8> for ByteReader<'a> {
    fn next(&mut self) -> Result<u8, ReadError> {
        if let Some(byte) = self.underlying.get(self.offset as usize) {
            self.offset += 1;
            Ok(*byte)
        } else {
            Err(ReadError::ExhaustedInput)
        }
    }

    fn next_n(&mut self, buf: &mut [u8]) -> Result<(), ReadError> {
        // nothing is consumed unless the whole read can be satisfied
        if buf.len() > self.remaining() {
            return Err(ReadError::ExhaustedInput);
        }

        let start = self.offset as usize;
        buf.copy_from_slice(&self.underlying[start..][..buf.len()]);
        self.offset += buf.len() as u32;

        Ok(())
    }

    fn mark(&mut self) {
        self.mark = self.offset;
    }

    fn offset(&mut self) -> u32 {
        self.offset - self.mark
    }

    fn total_offset(&mut self) -> u32 {
        self.offset
    }
}
