use std::mem;

/// The extent of one record's chunk within the data file.
///
/// ```text
/// struct IndexEntry {
///     offset:     u64,
///     length:     u64,
/// }
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
pub struct IndexEntry {
    pub offset: u64,
    pub length: u64,
}

impl IndexEntry {
    pub const WIDTH: usize = 2 * mem::size_of::<u64>();

    pub fn new(offset: u64, length: u64) -> Self {
        Self { offset, length }
    }

    /// One past the last byte. `None` if the entry is nonsensical.
    pub fn end(&self) -> Option<u64> {
        self.offset.checked_add(self.length)
    }

    pub fn ser(&self) -> [u8; Self::WIDTH] {
        let mut buf = [0u8; Self::WIDTH];
        let (offset_buf, length_buf) = buf.split_at_mut(mem::size_of::<u64>());
        offset_buf.copy_from_slice(&self.offset.to_le_bytes());
        length_buf.copy_from_slice(&self.length.to_le_bytes());
        buf
    }

    pub fn deser(buf: &[u8; Self::WIDTH]) -> Self {
        let mut int_buf = [0u8; mem::size_of::<u64>()];
        int_buf.copy_from_slice(&buf[..mem::size_of::<u64>()]);
        let offset = u64::from_le_bytes(int_buf);
        int_buf.copy_from_slice(&buf[mem::size_of::<u64>()..]);
        let length = u64::from_le_bytes(int_buf);
        Self { offset, length }
    }
}
