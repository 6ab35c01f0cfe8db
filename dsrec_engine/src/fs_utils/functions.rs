use crate::observability::log_warn;
use crate::{Error, IoContext, Result};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

pub fn create_dir_all<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    fs::create_dir_all(path).with_context(|| format!("create_dir_all {path:?}"))
}

pub fn open_file<P: AsRef<Path>>(path: P, oo: &OpenOptions) -> Result<File> {
    let path = path.as_ref();
    oo.open(path).with_context(|| format!("open {path:?}"))
}

/// Takes the single-writer lock. Fails fast instead of waiting.
pub fn lock_exclusive<P: AsRef<Path>>(file: &File, path: P) -> Result<()> {
    let path = path.as_ref();
    FileExt::try_lock_exclusive(file).map_err(|source| {
        log_warn!(
            component = "fs",
            event = "lock_conflict",
            path = ?path,
            exclusive = true,
        );
        Error::Locked {
            path: path.into(),
            source,
        }
    })
}

/// Takes a reader lock, which coexists with other readers but not with a writer.
pub fn lock_shared<P: AsRef<Path>>(file: &File, path: P) -> Result<()> {
    let path = path.as_ref();
    FileExt::try_lock_shared(file).map_err(|source| {
        log_warn!(
            component = "fs",
            event = "lock_conflict",
            path = ?path,
            exclusive = false,
        );
        Error::Locked {
            path: path.into(),
            source,
        }
    })
}

pub fn file_len<P: AsRef<Path>>(file: &File, path: P) -> Result<u64> {
    let meta = file
        .metadata()
        .with_context(|| format!("metadata {:?}", path.as_ref()))?;
    Ok(meta.len())
}

/// Reads exactly `buf.len()` bytes at `offset`.
///
/// This moves the cursor of the shared file description, which is harmless for
/// files opened in append mode.
pub fn read_exact_at(mut file: &File, offset: u64, buf: &mut [u8]) -> std::io::Result<()> {
    file.seek(SeekFrom::Start(offset))?;
    file.read_exact(buf)
}
