use crate::fs_utils::{self, StoreHandle};
use crate::{Error, IndexEntry, OpenMode, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// An append-only sequence of [`IndexEntry`]s, one per record, in record order.
///
/// The file has no header. The entry count is the file size over [`IndexEntry::WIDTH`].
pub struct IndexFile {
    path: PathBuf,
    handle: StoreHandle,
    count: u64,
}

impl IndexFile {
    pub fn open<P: AsRef<Path>>(path: P, mode: OpenMode) -> Result<Self> {
        let mut index = Self::acquire(path, mode)?;
        if mode == OpenMode::Fresh {
            index.truncate()?;
        }
        Ok(index)
    }

    /// Like [`IndexFile::open`], but a [`OpenMode::Fresh`] file keeps its contents
    /// until [`IndexFile::truncate`] is called. Its size is not validated either.
    pub(crate) fn acquire<P: AsRef<Path>>(path: P, mode: OpenMode) -> Result<Self> {
        let path = path.as_ref();
        let (handle, size) = StoreHandle::open(path, mode)?;

        if mode != OpenMode::Fresh && size % IndexEntry::WIDTH as u64 != 0 {
            return Err(Error::CorruptIndex {
                path: path.into(),
                size,
            });
        }

        Ok(Self {
            path: path.into(),
            handle,
            count: size / IndexEntry::WIDTH as u64,
        })
    }

    pub(crate) fn truncate(&mut self) -> Result<()> {
        self.handle.truncate(&self.path)?;
        self.count = 0;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the position of the new entry.
    pub fn append(&mut self, entry: IndexEntry) -> Result<u64> {
        let size = self.count * IndexEntry::WIDTH as u64;
        self.handle.append_all(&entry.ser(), size, &self.path)?;

        let position = self.count;
        self.count += 1;
        Ok(position)
    }

    pub fn get(&self, position: u64) -> Result<IndexEntry> {
        if position >= self.count {
            return Err(Error::IndexOutOfRange {
                index: position as i128,
                len: self.count,
            });
        }

        let mut buf = [0u8; IndexEntry::WIDTH];
        let file_offset = position * IndexEntry::WIDTH as u64;
        fs_utils::read_exact_at(self.handle.file(), file_offset, &mut buf).map_err(|e| {
            if e.kind() == ErrorKind::UnexpectedEof {
                // Shrunk by someone else since it was opened.
                let size = fs_utils::file_len(self.handle.file(), &self.path).unwrap_or(0);
                Error::CorruptIndex {
                    path: self.path.clone(),
                    size,
                }
            } else {
                Error::Io {
                    context: format!("read entry {position} of {:?}", self.path),
                    source: e,
                }
            }
        })?;

        Ok(IndexEntry::deser(&buf))
    }

    pub fn entries(&self) -> impl '_ + Iterator<Item = Result<IndexEntry>> {
        (0..self.count).map(move |position| self.get(position))
    }

    pub fn sync(&mut self) -> Result<()> {
        self.handle.sync(&self.path)
    }

    pub fn is_writable(&self) -> bool {
        self.handle.is_writable()
    }
}
