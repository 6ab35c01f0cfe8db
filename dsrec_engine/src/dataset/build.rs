use super::Dataset;
use crate::observability::log_info;
use crate::{DatasetOptions, OpenMode, Result};
use dsrec_types::codec::SharedCodec;
use dsrec_types::value::Value;
use std::path::{Path, PathBuf};

impl Dataset {
    /// Writes a fresh dataset at `data_path` from `records`, consumed once and in order.
    ///
    /// Existing files at the data and index paths are emptied first. The result is
    /// byte-for-byte what appending each record to a fresh dataset would produce.
    /// There is no rollback: on error, the records before the failing one remain.
    ///
    /// Returns the data and index paths.
    pub fn build<P, I, R>(
        records: I,
        data_path: P,
        field_codecs: impl IntoIterator<Item = SharedCodec>,
        opts: DatasetOptions,
    ) -> Result<(PathBuf, PathBuf)>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = R>,
        R: AsRef<[Value]>,
    {
        let opts = opts.mode(OpenMode::Fresh);
        let mut dataset = Self::open_with(data_path, field_codecs, opts)?;

        log_info!(
            component = "dataset",
            event = "build_started",
            data_path = ?dataset.data_path(),
        );

        let appended = dataset.extend(records)?;
        let paths = (
            dataset.data_path().to_path_buf(),
            dataset.index_path().to_path_buf(),
        );
        dataset.close()?;

        log_info!(
            component = "dataset",
            event = "build_finished",
            data_path = ?paths.0,
            len = appended,
        );

        Ok(paths)
    }
}
