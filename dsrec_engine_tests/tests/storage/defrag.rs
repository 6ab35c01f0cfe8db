use super::helpers;
use anyhow::Result;
use dsrec_engine::{DataFile, Dataset, DatasetOptions, Error, OpenMode};
use dsrec_types::record;
use std::fs;

#[test]
fn drops_unreferenced_bytes_and_keeps_records() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let src_path = dir.path().join("src.rec");
    let dest_path = dir.path().join("dest.rec");

    let mut ds = Dataset::open(&src_path, helpers::uint8_float_codecs()?)?;
    ds.append(record![1u8, 1.5])?;
    ds.close()?;
    let mut data = DataFile::open(&src_path, OpenMode::CreateOrOpen)?;
    data.append(&[0xAB; 100])?;
    drop(data);
    let mut ds = Dataset::open(&src_path, helpers::uint8_float_codecs()?)?;
    ds.append(record![2u8, 2.5])?;

    let (dest_data, dest_index) = ds.defrag(&dest_path, DatasetOptions::default())?;
    assert_eq!(dest_data, dest_path);
    assert_eq!(
        helpers::file_len(&src_path)? - 100,
        helpers::file_len(&dest_data)?
    );
    assert_eq!(helpers::file_len(&dest_index)?, 32);

    let src_len = ds.len();
    let src_records = ds.iter().collect::<Result<Vec<_>, _>>()?;
    ds.close()?;

    let dest = Dataset::open_readonly(&dest_path, helpers::uint8_float_codecs()?)?;
    assert_eq!(dest.len(), src_len);
    let dest_records = dest.iter().collect::<Result<Vec<_>, _>>()?;
    assert_eq!(dest_records, src_records);
    Ok(())
}

#[test]
fn defrag_of_a_clean_dataset_is_a_copy() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let src_path = dir.path().join("src.rec");
    let source = (0..100u32).map(|i| record![i]).collect::<Vec<_>>();
    let (src_data, src_index) =
        Dataset::build(&source, &src_path, helpers::uint32_codecs()?, DatasetOptions::default())?;

    let ds = Dataset::open_readonly(&src_path, helpers::uint32_codecs()?)?;
    let (dest_data, dest_index) =
        ds.defrag(dir.path().join("dest.rec"), DatasetOptions::default())?;

    assert_eq!(fs::read(src_data)?, fs::read(dest_data)?);
    assert_eq!(fs::read(src_index)?, fs::read(dest_index)?);
    Ok(())
}

#[test]
fn refuses_to_overwrite_the_source() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let src_path = dir.path().join("src.rec");
    let ds = Dataset::open(&src_path, helpers::uint32_codecs()?)?;

    assert!(matches!(
        ds.defrag(&src_path, DatasetOptions::default()),
        Err(Error::InvalidOptions(_))
    ));
    let opts = DatasetOptions::default().index_path(ds.index_path());
    assert!(matches!(
        ds.defrag(dir.path().join("other.rec"), opts),
        Err(Error::InvalidOptions(_))
    ));
    Ok(())
}
