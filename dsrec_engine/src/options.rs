use std::path::{Path, PathBuf};

/// Extension of the index file when none is configured.
pub const DEFAULT_INDEX_EXTENSION: &str = "idx";

#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
pub enum OpenMode {
    /// Create the files if absent, else keep appending to them.
    #[default]
    CreateOrOpen,
    /// Create the files if absent and empty them.
    Fresh,
    /// Open existing files for reading only. Many readers may share a pair.
    ReadOnly,
}

/// When the engine asks the OS to persist written bytes.
///
/// Regardless of the policy, each append hands the data chunk to the OS before
/// the index entry is written.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
pub enum SyncPolicy {
    /// Never fsync.
    Never,
    /// Fsync both files in [`crate::Dataset::close`].
    #[default]
    OnClose,
    /// Fsync the data file before writing the index entry, then the index file,
    /// on every append.
    Always,
}

#[derive(Clone, Default, Debug)]
pub struct DatasetOptions {
    pub(crate) index_path: Option<PathBuf>,
    pub(crate) mode: OpenMode,
    pub(crate) sync: SyncPolicy,
}

impl DatasetOptions {
    pub fn index_path(self, index_path: impl Into<PathBuf>) -> Self {
        DatasetOptions {
            index_path: Some(index_path.into()),
            ..self
        }
    }

    pub fn mode(self, mode: OpenMode) -> Self {
        DatasetOptions { mode, ..self }
    }

    pub fn sync(self, sync: SyncPolicy) -> Self {
        DatasetOptions { sync, ..self }
    }

    /// The configured index path, or `data_path` with its extension replaced.
    pub fn resolve_index_path(&self, data_path: &Path) -> PathBuf {
        match &self.index_path {
            Some(index_path) => index_path.clone(),
            None => data_path.with_extension(DEFAULT_INDEX_EXTENSION),
        }
    }
}
