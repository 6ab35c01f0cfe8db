use crate::observability::{log_error, log_info};
use crate::{
    DataFile, DatasetOptions, Error, IndexFile, OpenMode, RecordCodec, Result, SyncPolicy,
};
use dsrec_types::codec::SharedCodec;
use shorthand::ShortHand;
use std::path::Path;

/// An indexed record dataset: random access to serialized records by position.
///
/// ### API:
///
/// The exposed operations are: `append`, `get`, `get_field`, `len`, bulk `build`, and `defrag`.
///
/// Records are immutable. They cannot be modified in-place or deleted.
///
/// ### Internals:
///
/// One [`DataFile`] holds the serialized records back-to-back.
///
/// One [`IndexFile`] holds the `(offset, length)` of each record within the [`DataFile`].
///
/// One [`RecordCodec`] turns records into chunks and back. The codec list is not
/// persisted; the same list must be supplied every time a pair of files is opened.
///
/// ### Ordering:
///
/// An `append` writes the chunk before it writes the index entry.
/// A crash in between leaves an unreferenced chunk at the end of the data file,
/// but never an index entry pointing past the end of the data file.
///
/// The parts cannot be swapped out from under an open dataset:
///
/// ```compile_fail
/// # fn swap(ds: &mut dsrec_engine::Dataset, other: dsrec_engine::DataFile) {
/// ds.set_data_file(other);
/// # }
/// ```
#[derive(ShortHand)]
#[shorthand(disable(get, set))]
pub struct Dataset {
    #[shorthand(enable(get))]
    record_codec: RecordCodec,
    index_file: IndexFile,
    data_file: DataFile,
    sync: SyncPolicy,
}

impl Dataset {
    /// Opens, or creates, the dataset at `data_path` with the default options.
    pub fn open<P: AsRef<Path>>(
        data_path: P,
        field_codecs: impl IntoIterator<Item = SharedCodec>,
    ) -> Result<Self> {
        Self::open_with(data_path, field_codecs, DatasetOptions::default())
    }

    /// Creates an empty dataset at `data_path`, emptying any existing files.
    pub fn create<P: AsRef<Path>>(
        data_path: P,
        field_codecs: impl IntoIterator<Item = SharedCodec>,
    ) -> Result<Self> {
        let opts = DatasetOptions::default().mode(OpenMode::Fresh);
        Self::open_with(data_path, field_codecs, opts)
    }

    pub fn open_readonly<P: AsRef<Path>>(
        data_path: P,
        field_codecs: impl IntoIterator<Item = SharedCodec>,
    ) -> Result<Self> {
        let opts = DatasetOptions::default().mode(OpenMode::ReadOnly);
        Self::open_with(data_path, field_codecs, opts)
    }

    pub fn open_with<P: AsRef<Path>>(
        data_path: P,
        field_codecs: impl IntoIterator<Item = SharedCodec>,
        opts: DatasetOptions,
    ) -> Result<Self> {
        let data_path = data_path.as_ref();
        let index_path = opts.resolve_index_path(data_path);
        if index_path == data_path {
            return Err(Error::InvalidOptions(format!(
                "data and index paths are both {data_path:?}"
            )));
        }

        // Data first, so that two writers racing for the same pair collide on the same lock.
        let mut data_file = DataFile::acquire(data_path, opts.mode)?;
        let mut index_file = IndexFile::acquire(&index_path, opts.mode)?;
        if opts.mode == OpenMode::Fresh {
            // Both locks are held. Index first, so no entry outlives its chunk.
            index_file.truncate()?;
            data_file.truncate()?;
        }
        let record_codec = RecordCodec::new(field_codecs);

        log_info!(
            component = "dataset",
            event = "dataset_opened",
            data_path = ?data_path,
            index_path = ?index_path,
            mode = ?opts.mode,
            len = index_file.count(),
            arity = record_codec.arity(),
        );

        Ok(Self {
            record_codec,
            index_file,
            data_file,
            sync: opts.sync,
        })
    }

    pub fn data_path(&self) -> &Path {
        self.data_file.path()
    }

    pub fn index_path(&self) -> &Path {
        self.index_file.path()
    }

    pub fn is_writable(&self) -> bool {
        self.data_file.is_writable()
    }

    /// Unless the policy is [`SyncPolicy::Never`], persists both files.
    ///
    /// Appends reach the OS as they happen, so dropping a dataset without calling
    /// this only skips the final sync.
    pub fn close(mut self) -> Result<()> {
        if self.is_writable() && self.sync != SyncPolicy::Never {
            if let Err(e) = self.sync_both() {
                log_error!(
                    component = "dataset",
                    event = "close_failed",
                    data_path = ?self.data_path(),
                    error = %e,
                );
                return Err(e);
            }
        }

        log_info!(
            component = "dataset",
            event = "dataset_closed",
            data_path = ?self.data_path(),
            len = self.index_file.count(),
        );
        Ok(())
    }

    fn sync_both(&mut self) -> Result<()> {
        self.data_file.sync()?;
        self.index_file.sync()
    }
}

mod build;
mod defrag;
mod opers;
