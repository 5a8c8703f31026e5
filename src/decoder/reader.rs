//! Bounds-checked little-endian cursor over a map buffer.

use super::error::{FormatError, Section};

/// Sequential reader over an in-memory map file.
///
/// Every read names the section it belongs to so an underflow can be
/// reported against the part of the file that was cut short.
pub struct MapReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> MapReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Take the next `n` bytes, failing without consuming anything if the
    /// buffer is shorter.
    pub fn take(&mut self, section: Section, n: u64) -> Result<&'a [u8], FormatError> {
        let available = self.remaining();
        if n > available as u64 {
            return Err(FormatError::Truncated {
                section,
                offset: self.pos,
                needed: n,
                available,
            });
        }
        let n = n as usize;
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Take exactly `N` bytes as an array.
    pub fn take_array<const N: usize>(&mut self, section: Section) -> Result<[u8; N], FormatError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(section, N as u64)?);
        Ok(out)
    }

    pub fn read_i32_le(&mut self, section: Section) -> Result<i32, FormatError> {
        Ok(i32::from_le_bytes(self.take_array(section)?))
    }
}

/// Split a slice into little-endian `i32` values. Trailing bytes that do not
/// fill a whole value are ignored.
pub fn i32s_le(bytes: &[u8]) -> impl Iterator<Item = i32> + '_ {
    bytes
        .chunks_exact(4)
        .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
}

/// Split a slice into little-endian IEEE-754 `f32` values.
pub fn f32s_le(bytes: &[u8]) -> impl Iterator<Item = f32> + '_ {
    bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
}
