use derive_more::{Deref, From};
use std::mem;

/// A `u64` little-endian length, written in front of a segment whose extent
/// is not otherwise recoverable.
#[derive(From, Deref, Clone, Copy, PartialEq, Eq, Debug)]
pub struct LenPrefix(u64);

impl LenPrefix {
    pub const WIDTH: usize = mem::size_of::<u64>();

    pub fn of(segment: &[u8]) -> Self {
        Self(segment.len() as u64)
    }

    pub fn ser(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.0.to_le_bytes());
    }

    /// Reads a prefix off the front of `buf`. Returns `None` if fewer than
    /// [`Self::WIDTH`] bytes remain.
    pub fn deser(buf: &[u8]) -> Option<(Self, &[u8])> {
        if buf.len() < Self::WIDTH {
            return None;
        }
        let (head, rest) = buf.split_at(Self::WIDTH);
        let mut int_buf = [0u8; Self::WIDTH];
        int_buf.copy_from_slice(head);
        Some((Self(u64::from_le_bytes(int_buf)), rest))
    }

    /// Reads a prefix, then the segment it describes.
    /// Returns `None` if either is cut short.
    pub fn deser_segment(buf: &[u8]) -> Option<(&[u8], &[u8])> {
        let (len, rest) = Self::deser(buf)?;
        let len = usize::try_from(len.0).ok()?;
        if len > rest.len() {
            return None;
        }
        Some(rest.split_at(len))
    }
}
