#[cfg(feature = "serde")]
#[test]
fn test_json_io() {
    use std::io::{Seek, SeekFrom};
    use ufkit::uf::*;

    let settings = UnionFindSettingsBuilder::default()
        .strategy("tree".to_string())
        .weighted(false)
        .build()
        .unwrap();

    let mut uf = DynUnionFind::<u64>::from_settings(20, &settings).unwrap();
    uf.unite(1, 2);
    uf.unite(2, 3);
    uf.unite(7, 19);
    // compresses part of the path before saving
    assert!(uf.are_connected(3, 1));

    // write the structure to a file
    let mut file = tempfile::tempfile().unwrap();
    uf.write_to_file(&mut file).unwrap();

    // read the structure from the file
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut uf2 = DynUnionFind::<u64>::read_from_file(&mut file).unwrap();
    assert_eq!(uf2.strategy_name(), "tree(not_weighted, path_compression)");
    for (i, j) in [(1, 3), (7, 19), (1, 7), (0, 0), (4, 5)] {
        assert_eq!(uf.are_connected(i, j), uf2.are_connected(i, j));
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_json_settings_round_trip() {
    use ufkit::uf::*;

    let settings = UnionFindSettingsBuilder::default()
        .strategy("flat".to_string())
        .verbose(true)
        .build()
        .unwrap();
    let json = serde_json::to_string(&settings).unwrap();
    let settings2: UnionFindSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(settings, settings2);

    // missing fields take their defaults
    let partial: UnionFindSettings = serde_json::from_str(r#"{"weighted":false}"#).unwrap();
    assert_eq!(partial.strategy, "tree");
    assert!(!partial.weighted);
    assert!(partial.path_compression);
}

#[cfg(feature = "serde")]
#[test]
fn test_json_rejects_bad_sizes() {
    use std::io::{Seek, SeekFrom, Write};
    use ufkit::uf::*;

    // sizes at roots 1 and 2 sum to 4, not 3
    let json = r#"{"strategy":"tree(weighted, path_compression)",
                   "sets":{"TreeWeightedCompressed":
                       {"parents":[1,1,2],"weights":{"sizes":[1,2,2]}}}}"#;

    let mut file = tempfile::tempfile().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();
    assert!(matches!(
        DynUnionFind::<u32>::read_from_file(&mut file),
        Err(UnionFindError::CorruptSnapshot(_))
    ));

    // strategy label must match the stored variant
    let json = r#"{"strategy":"flat",
                   "sets":{"TreePlain":{"parents":[0,1],"weights":null}}}"#;
    let mut file = tempfile::tempfile().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();
    assert!(DynUnionFind::<u32>::read_from_file(&mut file).is_err());
}

#[cfg(feature = "serde")]
fn read_snapshot(json: &str) -> Result<ufkit::uf::DynUnionFind<u32>, ufkit::uf::UnionFindError> {
    use std::io::{Seek, SeekFrom, Write};
    use ufkit::uf::*;

    let mut file = tempfile::tempfile().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();
    DynUnionFind::<u32>::read_from_file(&mut file)
}

#[cfg(feature = "serde")]
#[test]
fn test_json_rejects_huge_sizes() {
    use ufkit::uf::*;

    // adding these sizes would overflow usize
    let json = format!(
        r#"{{"strategy":"tree(weighted, path_compression)",
             "sets":{{"TreeWeightedCompressed":
                 {{"parents":[0,1],"weights":{{"sizes":[{},3]}}}}}}}}"#,
        usize::MAX
    );
    assert!(matches!(
        read_snapshot(&json),
        Err(UnionFindError::CorruptSnapshot(_))
    ));
}

#[cfg(feature = "serde")]
#[test]
fn test_json_rejects_misplaced_root_sizes() {
    use ufkit::uf::*;

    // trees {0,1} and {2}: sizes sum to 3 but sit at the wrong roots
    let json = r#"{"strategy":"tree(weighted, no_compression)",
                   "sets":{"TreeWeighted":
                       {"parents":[0,0,2],"weights":{"sizes":[1,1,2]}}}}"#;
    assert!(matches!(
        read_snapshot(json),
        Err(UnionFindError::CorruptSnapshot(_))
    ));

    // the same forest with correct sizes loads and keeps its tie-break
    let json = r#"{"strategy":"tree(weighted, no_compression)",
                   "sets":{"TreeWeighted":
                       {"parents":[0,0,2],"weights":{"sizes":[2,1,1]}}}}"#;
    let mut uf = read_snapshot(json).unwrap();
    assert!(uf.are_connected(0, 1));
    assert!(!uf.are_connected(1, 2));
    uf.unite(2, 1);
    assert!(uf.are_connected(0, 2));
}
