use super::helpers;
use anyhow::Result;
use dsrec_engine::{Dataset, Error};
use dsrec_types::record;

#[test]
fn empty_dataset() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let ds = Dataset::open(dir.path().join("e.rec"), helpers::uint8_float_codecs()?)?;
    assert_eq!(ds.len(), 0);
    assert!(ds.is_empty());
    assert_eq!(ds.iter().count(), 0);
    assert!(matches!(
        ds.get(0),
        Err(Error::IndexOutOfRange { index: 0, len: 0 })
    ));
    Ok(())
}

#[test]
fn out_of_range_on_both_sides() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut ds = Dataset::open(dir.path().join("b.rec"), helpers::uint8_float_codecs()?)?;
    ds.extend([record![1u8, 1.0], record![2u8, 2.0], record![3u8, 3.0]])?;

    let n = ds.len() as i64;
    for index in [-1, n, n + 1, i64::MIN, i64::MAX] {
        match ds.get(index) {
            Err(Error::IndexOutOfRange { index: got, len }) => {
                assert_eq!((got, len), (index as i128, 3));
            }
            other => panic!("{index} {other:?}"),
        }
    }
    assert!(matches!(
        ds.get(u64::MAX),
        Err(Error::IndexOutOfRange { .. })
    ));
    assert!(ds.entry(-1).is_err());
    assert_eq!(ds.get(n - 1)?, record![3u8, 3.0]);
    Ok(())
}

#[test]
fn rejected_records_do_not_touch_the_files() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let data_path = dir.path().join("r.rec");
    let mut ds = Dataset::open(&data_path, helpers::uint8_float_codecs()?)?;
    ds.append(record![1u8, 1.0])?;

    let data_len = helpers::file_len(&data_path)?;
    let index_len = helpers::file_len(ds.index_path())?;

    assert!(matches!(
        ds.append(record![1u8]),
        Err(Error::Arity {
            expected: 2,
            actual: 1
        })
    ));
    assert!(matches!(
        ds.append(record![256u16, 1.0]),
        Err(Error::Encode { field: 0, .. })
    ));
    assert!(matches!(
        ds.append(record![1u8, "1.0"]),
        Err(Error::Encode { field: 1, .. })
    ));

    assert_eq!(ds.len(), 1);
    assert_eq!(helpers::file_len(&data_path)?, data_len);
    assert_eq!(helpers::file_len(ds.index_path())?, index_len);
    Ok(())
}

#[test]
fn equal_data_and_index_paths_are_refused() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let res = Dataset::open(dir.path().join("x.idx"), helpers::uint32_codecs()?);
    assert!(matches!(res, Err(Error::InvalidOptions(_))));
    assert!(!dir.path().join("x.idx").exists());
    Ok(())
}
