use crate::fs_utils::{self, StoreHandle};
use crate::{Error, IndexEntry, OpenMode, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// An append-only byte log. Chunk boundaries are not recorded here; see [`crate::IndexFile`].
pub struct DataFile {
    path: PathBuf,
    handle: StoreHandle,
    len: u64,
}

impl DataFile {
    pub fn open<P: AsRef<Path>>(path: P, mode: OpenMode) -> Result<Self> {
        let mut data = Self::acquire(path, mode)?;
        if mode == OpenMode::Fresh {
            data.truncate()?;
        }
        Ok(data)
    }

    /// Like [`DataFile::open`], but a [`OpenMode::Fresh`] file keeps its contents
    /// until [`DataFile::truncate`] is called.
    pub(crate) fn acquire<P: AsRef<Path>>(path: P, mode: OpenMode) -> Result<Self> {
        let path = path.as_ref();
        let (handle, len) = StoreHandle::open(path, mode)?;
        Ok(Self {
            path: path.into(),
            handle,
            len,
        })
    }

    pub(crate) fn truncate(&mut self) -> Result<()> {
        self.handle.truncate(&self.path)?;
        self.len = 0;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// End-of-file position as seen by this handle.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Writes `chunk` at the end of the file and returns its extent.
    ///
    /// On error, nothing of `chunk` is left in the file, so the next append still
    /// starts at [`DataFile::len`].
    pub fn append(&mut self, chunk: &[u8]) -> Result<IndexEntry> {
        self.handle.append_all(chunk, self.len, &self.path)?;

        let entry = IndexEntry::new(self.len, chunk.len() as u64);
        self.len += entry.length;
        Ok(entry)
    }

    /// Reads exactly `length` bytes at `offset`.
    ///
    /// The extent is checked against the current file size first, so a file
    /// truncated behind our back yields [`Error::TruncatedRead`] instead of an
    /// oversized allocation or zero-filled bytes.
    pub fn read(&self, offset: u64, length: u64) -> Result<Vec<u8>> {
        self.read_entry(&IndexEntry::new(offset, length))
    }

    pub fn read_entry(&self, entry: &IndexEntry) -> Result<Vec<u8>> {
        let IndexEntry { offset, length } = *entry;
        let truncated = |available: u64| Error::TruncatedRead {
            path: self.path.clone(),
            offset,
            length,
            available,
        };

        let file_len = fs_utils::file_len(self.handle.file(), &self.path)?;
        let available = file_len.saturating_sub(offset);
        match entry.end() {
            Some(end) if end <= file_len => {}
            _ => return Err(truncated(available)),
        }

        let buf_len = usize::try_from(length).map_err(|_| truncated(available))?;
        let mut buf = vec![0u8; buf_len];
        fs_utils::read_exact_at(self.handle.file(), offset, &mut buf).map_err(|e| {
            if e.kind() == ErrorKind::UnexpectedEof {
                truncated(available)
            } else {
                Error::Io {
                    context: format!("read {length} bytes at {offset} of {:?}", self.path),
                    source: e,
                }
            }
        })?;

        Ok(buf)
    }

    pub fn sync(&mut self) -> Result<()> {
        self.handle.sync(&self.path)
    }

    pub fn is_writable(&self) -> bool {
        self.handle.is_writable()
    }
}
