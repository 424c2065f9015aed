use super::*;
use crate::index::IndexT;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::Write;
use std::{fs::File, io::Read};

/// Reading and writing union-find snapshots as JSON files.
pub trait UnionFindJSONReadWrite: Sized {
    /// Write the current state to `file`.
    fn write_to_file(&self, file: &mut File) -> Result<(), UnionFindError>;
    /// Read a state written by [`write_to_file`](Self::write_to_file).
    /// Structural invariants are checked before the result is returned.
    fn read_from_file(file: &mut File) -> Result<Self, UnionFindError>;
}

// on-disk layout: the structure itself plus the settings that
// reproduce its strategy

#[derive(Serialize, Deserialize)]
#[serde(bound = "I: IndexT + Serialize + DeserializeOwned")]
struct JsonUnionFindData<I: IndexT> {
    pub strategy: String,
    pub sets: DynUnionFind<I>,
}

impl<I> UnionFindJSONReadWrite for DynUnionFind<I>
where
    I: IndexT + DeserializeOwned + Serialize,
{
    fn write_to_file(&self, file: &mut File) -> Result<(), UnionFindError> {
        let json_data = JsonUnionFindData {
            strategy: self.strategy_name(),
            sets: self.clone(),
        };

        let json = serde_json::to_string(&json_data)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }

    fn read_from_file(file: &mut File) -> Result<Self, UnionFindError> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let json_data: JsonUnionFindData<I> = serde_json::from_str(&buffer)?;

        if json_data.strategy != json_data.sets.strategy_name() {
            return Err(UnionFindError::CorruptSnapshot("strategy name mismatch"));
        }
        json_data.sets.validate()?;

        Ok(json_data.sets)
    }
}

#[test]
fn test_json_io() {
    use std::io::{Seek, SeekFrom};

    let settings = UnionFindSettingsBuilder::default()
        .weighted(true)
        .path_compression(false)
        .build()
        .unwrap();
    let mut uf = DynUnionFind::<u32>::from_settings(12, &settings).unwrap();
    uf.unite(1, 2);
    uf.unite(3, 4);
    uf.unite(2, 4);
    uf.unite(10, 11);

    // write the structure to a file
    let mut file = tempfile::tempfile().unwrap();
    uf.write_to_file(&mut file).unwrap();

    // read the structure back from the file
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut uf2 = DynUnionFind::<u32>::read_from_file(&mut file).unwrap();
    assert_eq!(uf, uf2);
    assert_eq!(uf2.strategy_name(), "tree(weighted, no_compression)");
    assert!(uf2.are_connected(1, 3));
    assert!(!uf2.are_connected(1, 10));
}

#[test]
fn test_json_rejects_corrupt_forest() {
    use std::io::{Seek, SeekFrom};

    // 0 -> 1 -> 0 is a cycle
    let json = r#"{"strategy":"tree(not_weighted, no_compression)",
                   "sets":{"TreePlain":{"parents":[1,0,2],"weights":null}}}"#;

    let mut file = tempfile::tempfile().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    assert!(matches!(
        DynUnionFind::<u32>::read_from_file(&mut file),
        Err(UnionFindError::CorruptSnapshot(_))
    ));
}
