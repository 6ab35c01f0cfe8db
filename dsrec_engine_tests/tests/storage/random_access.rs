use super::helpers;
use anyhow::Result;
use dsrec_engine::{Dataset, DatasetOptions, IndexEntry, SyncPolicy};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn any_order_reads_match_append_order() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(0);
    let dir = tempfile::tempdir()?;
    let data_path = dir.path().join("mixed.rec");

    let records = (0..500)
        .map(|_| helpers::gen_mixed_record(&mut rng))
        .collect::<Vec<_>>();

    let mut ds = Dataset::create(&data_path, helpers::mixed_codecs())?;
    for (i, rec) in records.iter().enumerate() {
        assert_eq!(ds.append(rec)?, i as u64);
    }
    assert_eq!(ds.len(), records.len() as u64);

    let mut order = (0..records.len() as u64).collect::<Vec<_>>();
    order.shuffle(&mut rng);
    for i in order {
        assert_eq!(ds.get(i)?, records[i as usize]);
    }

    // Repeated reads of the same position are stable, and reads interleave with appends.
    let extra = helpers::gen_mixed_record(&mut rng);
    assert_eq!(ds.get(7)?, records[7]);
    ds.append(&extra)?;
    assert_eq!(ds.get(7)?, records[7]);
    assert_eq!(ds.get(500)?, extra);

    Ok(())
}

#[test]
fn entries_are_contiguous_and_cover_the_data_file() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(1);
    let dir = tempfile::tempdir()?;
    let data_path = dir.path().join("mixed.rec");

    let mut ds = Dataset::create(&data_path, helpers::mixed_codecs())?;
    ds.extend((0..50).map(|_| helpers::gen_mixed_record(&mut rng)))?;

    let mut expected_offset = 0;
    for i in 0..ds.len() {
        let IndexEntry { offset, length } = ds.entry(i)?;
        assert_eq!(offset, expected_offset);
        expected_offset += length;
    }
    ds.close()?;
    assert_eq!(helpers::file_len(&data_path)?, expected_offset);
    Ok(())
}

#[test]
fn reopen_and_keep_appending() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(2);
    let dir = tempfile::tempdir()?;
    let data_path = dir.path().join("mixed.rec");
    let opts = DatasetOptions::default().sync(SyncPolicy::Always);

    let records = (0..20)
        .map(|_| helpers::gen_mixed_record(&mut rng))
        .collect::<Vec<_>>();

    let mut ds = Dataset::open_with(&data_path, helpers::mixed_codecs(), opts.clone())?;
    ds.extend(&records[..10])?;
    ds.close()?;

    let mut ds = Dataset::open_with(&data_path, helpers::mixed_codecs(), opts)?;
    assert_eq!(ds.len(), 10);
    assert_eq!(ds.append(&records[10])?, 10);
    ds.extend(&records[11..])?;
    ds.close()?;

    let ds = Dataset::open_readonly(&data_path, helpers::mixed_codecs())?;
    let read_back = ds.iter().collect::<Result<Vec<_>, _>>()?;
    assert_eq!(read_back, records);
    Ok(())
}

#[test]
fn custom_index_path() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let data_path = dir.path().join("data.bin");
    let index_path = dir.path().join("nested").join("offsets.bin");
    let opts = DatasetOptions::default().index_path(&index_path);

    let mut ds = Dataset::open_with(&data_path, helpers::uint32_codecs()?, opts)?;
    ds.append(vec![dsrec_types::value::Value::UInt(u32::MAX as u64)])?;
    assert_eq!(ds.index_path(), index_path);
    ds.close()?;

    assert_eq!(helpers::file_len(&index_path)?, 16);
    assert!(!dir.path().join("data.idx").exists());
    Ok(())
}
