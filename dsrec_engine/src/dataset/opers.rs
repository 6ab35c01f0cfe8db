use super::Dataset;
use crate::{Error, IndexEntry, Result, SyncPolicy};
use dsrec_types::value::{Record, Value};

impl Dataset {
    /// Appends one record and returns its position.
    ///
    /// Encoding happens before any I/O, so an [`Error::Arity`] or [`Error::Encode`]
    /// leaves both files untouched.
    pub fn append<R: AsRef<[Value]>>(&mut self, record: R) -> Result<u64> {
        let chunk = self.record_codec.encode(record.as_ref())?;

        let entry = self.data_file.append(&chunk)?;
        if self.sync == SyncPolicy::Always {
            self.data_file.sync()?;
        }

        let position = self.index_file.append(entry)?;
        if self.sync == SyncPolicy::Always {
            self.index_file.sync()?;
        }

        Ok(position)
    }

    /// Appends every record in order. Returns how many were appended.
    ///
    /// Stops at the first error; records appended before it stay appended.
    pub fn extend<I, R>(&mut self, records: I) -> Result<u64>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[Value]>,
    {
        let mut appended = 0;
        for record in records {
            self.append(record)?;
            appended += 1;
        }
        Ok(appended)
    }

    /// Reads and decodes the record at `index`.
    ///
    /// Any integer type is accepted; negative indices are out of range.
    pub fn get(&self, index: impl Into<i128>) -> Result<Record> {
        let entry = self.entry(index)?;
        let chunk = self.data_file.read_entry(&entry)?;
        self.record_codec.decode(&chunk)
    }

    /// Reads the record at `index` but decodes only the value at `field`.
    ///
    /// `field` is checked before any I/O.
    pub fn get_field(&self, index: impl Into<i128>, field: usize) -> Result<Value> {
        self.record_codec.field_codec(field)?;
        let entry = self.entry(index)?;
        let chunk = self.data_file.read_entry(&entry)?;
        self.record_codec.decode_field(&chunk, field)
    }

    /// The raw extent of the record at `index`.
    pub fn entry(&self, index: impl Into<i128>) -> Result<IndexEntry> {
        let position = self.position(index.into())?;
        self.index_file.get(position)
    }

    pub fn len(&self) -> u64 {
        self.index_file.count()
    }

    pub fn is_empty(&self) -> bool {
        self.index_file.is_empty()
    }

    /// Decodes all records in order.
    pub fn iter(&self) -> impl '_ + Iterator<Item = Result<Record>> {
        (0..self.len()).map(move |position| self.get(position))
    }

    fn position(&self, index: i128) -> Result<u64> {
        let len = self.len();
        match u64::try_from(index) {
            Ok(position) if position < len => Ok(position),
            _ => Err(Error::IndexOutOfRange { index, len }),
        }
    }
}
