use super::Dataset;
use crate::observability::log_info;
use crate::{DataFile, DatasetOptions, Error, IndexFile, OpenMode, Result, SyncPolicy};
use std::path::{Path, PathBuf};

impl Dataset {
    /// Copies every referenced chunk, in index order, into a fresh pair of files at
    /// `dest_data_path`. Chunks are copied as bytes and never decoded.
    ///
    /// Bytes that no index entry refers to, e.g. a chunk left by a crash between
    /// the data and index appends, are not carried over. `self` is not modified.
    ///
    /// Returns the destination's data and index paths.
    pub fn defrag<P: AsRef<Path>>(
        &self,
        dest_data_path: P,
        opts: DatasetOptions,
    ) -> Result<(PathBuf, PathBuf)> {
        let dest_data_path = dest_data_path.as_ref();
        let dest_index_path = opts.resolve_index_path(dest_data_path);
        for dest in [dest_data_path, dest_index_path.as_path()] {
            if dest == self.data_path() || dest == self.index_path() {
                return Err(Error::InvalidOptions(format!(
                    "defrag destination {dest:?} is a file of the source dataset"
                )));
            }
        }
        if dest_index_path == dest_data_path {
            return Err(Error::InvalidOptions(format!(
                "data and index paths are both {dest_data_path:?}"
            )));
        }

        log_info!(
            component = "dataset",
            event = "defrag_started",
            src_data_path = ?self.data_path(),
            dest_data_path = ?dest_data_path,
        );

        let mut dest_data = DataFile::open(dest_data_path, OpenMode::Fresh)?;
        let mut dest_index = IndexFile::open(&dest_index_path, OpenMode::Fresh)?;

        for entry in self.index_file.entries() {
            let chunk = self.data_file.read_entry(&entry?)?;
            let dest_entry = dest_data.append(&chunk)?;
            if opts.sync == SyncPolicy::Always {
                dest_data.sync()?;
            }
            dest_index.append(dest_entry)?;
        }

        if opts.sync != SyncPolicy::Never {
            dest_data.sync()?;
            dest_index.sync()?;
        }

        log_info!(
            component = "dataset",
            event = "defrag_finished",
            dest_data_path = ?dest_data_path,
            src_bytes = self.data_file.len(),
            dest_bytes = dest_data.len(),
            len = dest_index.count(),
        );

        Ok((dest_data_path.into(), dest_index_path))
    }
}
