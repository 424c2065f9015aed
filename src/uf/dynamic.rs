use super::*;
use crate::index::IndexT;
use enum_dispatch::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Union-find whose strategy is picked at runtime.
///
/// Every call dispatches through a match on the variant.  Prefer
/// [`UnionFind`] when the strategy is known at compile time.
#[enum_dispatch(DisjointSets<I>)]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DynUnionFind<I>
where
    I: IndexT,
{
    Flat(FlatUnionFind<I>),
    TreeWeightedCompressed(WeightedCompressedTree<I>),
    TreeWeighted(WeightedTree<I>),
    TreeCompressed(CompressedTree<I>),
    TreePlain(PlainTree<I>),
}

impl<I> DynUnionFind<I>
where
    I: IndexT,
{
    /// Builds `n` singleton groups with the strategy described by
    /// `settings`.
    pub fn from_settings(n: usize, settings: &UnionFindSettings) -> Result<Self, UnionFindError> {
        settings.validate()?;

        let uf = match settings.strategy.as_str() {
            "flat" => FlatUnionFind::<I>::new(n)?.into(),
            _ => match (settings.weighted, settings.path_compression) {
                (true, true) => WeightedCompressedTree::<I>::new(n)?.into(),
                (true, false) => WeightedTree::<I>::new(n)?.into(),
                (false, true) => CompressedTree::<I>::new(n)?.into(),
                (false, false) => PlainTree::<I>::new(n)?.into(),
            },
        };
        Ok(uf)
    }

    /// Name of the strategy in use, e.g. "tree(weighted, path_compression)".
    pub fn strategy_name(&self) -> String {
        match self {
            DynUnionFind::Flat(_) => "flat".to_string(),
            DynUnionFind::TreeWeightedCompressed(_) => WeightedCompressedTree::<I>::strategy_name(),
            DynUnionFind::TreeWeighted(_) => WeightedTree::<I>::strategy_name(),
            DynUnionFind::TreeCompressed(_) => CompressedTree::<I>::strategy_name(),
            DynUnionFind::TreePlain(_) => PlainTree::<I>::strategy_name(),
        }
    }

    // structural checks on data that did not come from `from_settings`
    pub(crate) fn validate(&self) -> Result<(), UnionFindError> {
        match self {
            DynUnionFind::Flat(uf) => uf.validate(),
            DynUnionFind::TreeWeightedCompressed(uf) => uf.validate(),
            DynUnionFind::TreeWeighted(uf) => uf.validate(),
            DynUnionFind::TreeCompressed(uf) => uf.validate(),
            DynUnionFind::TreePlain(uf) => uf.validate(),
        }
    }
}

#[test]
fn test_from_settings() {
    let cases = [
        ("flat", true, true, "flat"),
        ("flat", false, false, "flat"),
        ("tree", true, true, "tree(weighted, path_compression)"),
        ("tree", true, false, "tree(weighted, no_compression)"),
        ("tree", false, true, "tree(not_weighted, path_compression)"),
        ("tree", false, false, "tree(not_weighted, no_compression)"),
    ];

    for (strategy, weighted, path_compression, name) in cases {
        let settings = UnionFindSettings {
            strategy: strategy.to_string(),
            weighted,
            path_compression,
            ..UnionFindSettings::default()
        };
        let mut uf = DynUnionFind::<u32>::from_settings(8, &settings).unwrap();
        assert_eq!(uf.strategy_name(), name);
        assert_eq!(uf.len(), 8);

        uf.unite(0, 7);
        uf.unite(7, 3);
        assert!(uf.are_connected(0, 3));
        assert!(!uf.are_connected(0, 4));
        assert!(uf.try_unite(0, 8).is_err());
    }
}

#[test]
fn test_from_bad_settings() {
    let settings = UnionFindSettings {
        strategy: "foo".to_string(),
        ..UnionFindSettings::default()
    };
    assert!(matches!(
        DynUnionFind::<u32>::from_settings(8, &settings),
        Err(UnionFindError::BadSettings(_))
    ));

    let settings = UnionFindSettings::default();
    assert!(matches!(
        DynUnionFind::<u8>::from_settings(1000, &settings),
        Err(UnionFindError::InvalidSize { size: 1000, max: 255 })
    ));
}
