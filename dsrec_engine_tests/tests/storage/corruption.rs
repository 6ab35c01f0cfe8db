use super::helpers;
use anyhow::Result;
use dsrec_engine::{DataFile, Dataset, DatasetOptions, Error, OpenMode};
use dsrec_types::codec::{FieldCodec, StrCodec};
use dsrec_types::record;
use std::fs::{self, OpenOptions};
use std::io::Write;

#[test]
fn truncated_data_file_is_detected() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("t.rec");
    let source = (0..10u8).map(|i| record![i, i as f64]).collect::<Vec<_>>();
    Dataset::build(&source, &path, helpers::uint8_float_codecs()?, DatasetOptions::default())?;

    let data_len = helpers::file_len(&path)?;
    OpenOptions::new()
        .write(true)
        .open(&path)?
        .set_len(data_len - 3)?;

    let ds = Dataset::open_readonly(&path, helpers::uint8_float_codecs()?)?;
    assert_eq!(ds.len(), 10);
    assert_eq!(ds.get(8)?, source[8]);
    match ds.get(9) {
        Err(Error::TruncatedRead {
            offset,
            length,
            available,
            ..
        }) => {
            assert_eq!(offset + length, data_len);
            assert_eq!(available, length - 3);
        }
        other => panic!("{other:?}"),
    }
    Ok(())
}

#[test]
fn partial_index_entry_is_detected() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("p.rec");
    let (_, index_path) = Dataset::build(
        [record![1u8, 1.0]],
        &path,
        helpers::uint8_float_codecs()?,
        DatasetOptions::default(),
    )?;

    OpenOptions::new()
        .append(true)
        .open(&index_path)?
        .write_all(&[0u8; 5])?;

    match Dataset::open(&path, helpers::uint8_float_codecs()?) {
        Err(Error::CorruptIndex { size, .. }) => assert_eq!(size, 21),
        Err(e) => panic!("{e}"),
        Ok(_) => panic!("opened an index with a partial entry"),
    }
    Ok(())
}

/// A crash between the data append and the index append leaves an unreferenced
/// chunk at the end of the data file. Entries on either side of it stay valid.
#[test]
fn unreferenced_trailing_chunk_is_harmless() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("c.rec");

    let mut ds = Dataset::open(&path, helpers::uint8_float_codecs()?)?;
    ds.append(record![1u8, 1.0])?;
    ds.close()?;

    let mut data = DataFile::open(&path, OpenMode::CreateOrOpen)?;
    let orphan = data.append(b"half-written record")?;
    drop(data);

    let mut ds = Dataset::open(&path, helpers::uint8_float_codecs()?)?;
    assert_eq!(ds.len(), 1);
    assert_eq!(ds.append(record![2u8, 2.0])?, 1);

    let entry = ds.entry(1)?;
    assert_eq!(entry.offset, orphan.offset + orphan.length);
    assert_eq!(ds.get(0)?, record![1u8, 1.0]);
    assert_eq!(ds.get(1)?, record![2u8, 2.0]);
    Ok(())
}

#[test]
fn mismatched_codecs_fail_to_decode() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("m.rec");
    Dataset::build(
        [record![7u8, 0.5]],
        &path,
        helpers::uint8_float_codecs()?,
        DatasetOptions::default(),
    )?;

    // Fewer codecs than fields: the second field is left over.
    let ds = Dataset::open_readonly(&path, [helpers::uint8_float_codecs()?.remove(0)])?;
    assert!(matches!(ds.get(0), Err(Error::CorruptRecord { .. })));
    drop(ds);

    // More codecs than fields.
    let mut codecs = helpers::uint8_float_codecs()?;
    codecs.push(StrCodec.into_shared());
    let ds = Dataset::open_readonly(&path, codecs)?;
    assert!(matches!(ds.get(0), Err(Error::CorruptRecord { .. })));
    drop(ds);

    // Same arity, but the first field is 1 byte where 4 are expected.

    let ds = Dataset::open_readonly(
        &path,
        [helpers::uint32_codecs()?.remove(0), StrCodec.into_shared()],
    )?;
    assert!(matches!(ds.get(0), Err(Error::Decode { field: 0, .. })));
    Ok(())
}

#[test]
fn index_pointing_past_the_data_is_detected() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("x.rec");
    let (_, index_path) = Dataset::build(
        [record![1u8, 1.0]],
        &path,
        helpers::uint8_float_codecs()?,
        DatasetOptions::default(),
    )?;

    let mut forged = fs::read(&index_path)?;
    forged.extend_from_slice(&1_000u64.to_le_bytes());
    forged.extend_from_slice(&25u64.to_le_bytes());
    fs::write(&index_path, forged)?;

    let ds = Dataset::open_readonly(&path, helpers::uint8_float_codecs()?)?;
    assert_eq!(ds.len(), 2);
    assert!(matches!(
        ds.get(1),
        Err(Error::TruncatedRead {
            offset: 1_000,
            available: 0,
            ..
        })
    ));
    Ok(())
}
