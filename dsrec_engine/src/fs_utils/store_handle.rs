use crate::fs_utils;
use crate::observability::{log_debug, log_error, log_warn};
use crate::{Error, IoContext, OpenMode, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum Access {
    Writable,
    ReadOnly,
    /// A failed append could not be rolled back, so the file's tail is unknown.
    Poisoned,
}

/// The one handle a store keeps on its file for as long as it is open.
///
/// Writable handles are opened in append mode, so every write lands at the end
/// of the file no matter where a preceding read left the cursor. Writes are
/// unbuffered; a successful append is visible to reads through the same handle.
pub struct StoreHandle {
    file: File,
    access: Access,
}

impl StoreHandle {
    /// Opens `path` per `mode` and takes the matching lock.
    /// Returns the handle and the file's length.
    ///
    /// A [`OpenMode::Fresh`] file is not emptied here; see [`Self::truncate`].
    pub fn open<P: AsRef<Path>>(path: P, mode: OpenMode) -> Result<(Self, u64)> {
        let path = path.as_ref();

        let handle = match mode {
            OpenMode::ReadOnly => {
                let file = fs_utils::open_file(path, OpenOptions::new().read(true))?;
                fs_utils::lock_shared(&file, path)?;
                Self {
                    file,
                    access: Access::ReadOnly,
                }
            }
            OpenMode::CreateOrOpen | OpenMode::Fresh => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs_utils::create_dir_all(parent)?;
                }
                let file = fs_utils::open_file(
                    path,
                    OpenOptions::new()
                        .read(true)
                        .create(true)
                        .append(true), // *Not* write(true)
                )?;
                fs_utils::lock_exclusive(&file, path)?;
                Self {
                    file,
                    access: Access::Writable,
                }
            }
        };

        let len = fs_utils::file_len(&handle.file, path)?;
        Ok((handle, len))
    }

    pub fn file(&self) -> &File {
        &self.file
    }

    pub fn is_writable(&self) -> bool {
        self.access == Access::Writable
    }

    fn check_writable(&self, path: &Path) -> Result<()> {
        match self.access {
            Access::Writable => Ok(()),
            Access::ReadOnly => Err(Error::ReadOnly { path: path.into() }),
            Access::Poisoned => Err(Error::Poisoned { path: path.into() }),
        }
    }

    /// Empties the file. Only valid on a writable handle, whose lock is already held.
    pub fn truncate(&mut self, path: &Path) -> Result<()> {
        self.check_writable(path)?;
        self.file
            .set_len(0)
            .with_context(|| format!("set_len {path:?}"))
    }

    /// Writes all of `buf` at the end of the file, which must currently be `len` bytes.
    ///
    /// If the write fails, the file is cut back to `len` so that no partial
    /// write survives. If even that fails, the handle refuses all further appends.
    pub fn append_all(&mut self, buf: &[u8], len: u64, path: &Path) -> Result<()> {
        self.check_writable(path)?;

        let write_err = match self.file.write_all(buf) {
            Ok(()) => return Ok(()),
            Err(e) => e,
        };

        match self.file.set_len(len) {
            Ok(()) => log_warn!(
                component = "fs",
                event = "append_rolled_back",
                path = ?path,
                len = len,
                error = %write_err,
            ),
            Err(rollback_err) => {
                self.access = Access::Poisoned;
                log_error!(
                    component = "fs",
                    event = "append_poisoned",
                    path = ?path,
                    len = len,
                    error = %write_err,
                    rollback_error = %rollback_err,
                );
            }
        }

        Err(Error::Io {
            context: format!("write {path:?}"),
            source: write_err,
        })
    }

    /// Asks the OS to persist the file's contents.
    pub fn sync(&mut self, path: &Path) -> Result<()> {
        if self.access == Access::Writable {
            self.file
                .sync_data()
                .with_context(|| format!("sync_data {path:?}"))?;
            log_debug!(component = "fs", event = "synced", path = ?path);
        }
        Ok(())
    }
}
