// flat (quick-find) union-find: one group id per element

use super::*;
use crate::index::{AsIndexT, IndexT};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Union-find over a flat array of group ids.
///
/// `are_connected` is a single comparison.  `unite` relabels every member
/// of the second group with the id of the first, scanning the whole array,
/// so each merge costs O(N).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlatUnionFind<I = u32>
where
    I: IndexT,
{
    ids: Vec<I>,
}

impl<I> FlatUnionFind<I>
where
    I: IndexT,
{
    /// Builds `n` singleton groups with ids `0..n`.
    pub fn new(n: usize) -> Result<Self, UnionFindError> {
        check_universe::<I>(n)?;
        Ok(Self {
            ids: (0..n).map(|i| i.as_I()).collect(),
        })
    }

    /// Current group id of element `i`.
    pub fn group_id(&self, i: I) -> I {
        self.ids[i.to_index()]
    }

    // every id must name an element of the universe
    pub(crate) fn validate(&self) -> Result<(), UnionFindError> {
        let n = self.ids.len();
        check_universe::<I>(n)?;
        if self.ids.iter().any(|id| id.to_index() >= n) {
            return Err(UnionFindError::CorruptSnapshot("group id out of range"));
        }
        Ok(())
    }
}

impl<I> DisjointSets<I> for FlatUnionFind<I>
where
    I: IndexT,
{
    fn len(&self) -> usize {
        self.ids.len()
    }

    fn unite(&mut self, i: I, j: I) {
        if self.are_connected(i, j) {
            return;
        }

        let new_group = self.ids[i.to_index()];
        let old_group = self.ids[j.to_index()];
        for id in self.ids.iter_mut().filter(|id| **id == old_group) {
            *id = new_group;
        }
    }

    #[inline]
    fn are_connected(&mut self, i: I, j: I) -> bool {
        self.ids[i.to_index()] == self.ids[j.to_index()]
    }
}

impl<I> UnionFindStrategy<I> for FlatUnionFind<I>
where
    I: IndexT,
{
    fn with_size(n: usize) -> Result<Self, UnionFindError> {
        Self::new(n)
    }
}

#[test]
fn test_unite() {
    let mut uf = FlatUnionFind::<u32>::new(5).unwrap();
    uf.unite(0, 1);
    uf.unite(2, 3);
    uf.unite(1, 2);
    assert!(uf.are_connected(0, 2));
    assert!(uf.are_connected(1, 3));
    assert!(uf.are_connected(0, 3));
    assert!(!uf.are_connected(4, 2));

    // the whole second group takes the first group's id
    assert_eq!(uf.group_id(3), uf.group_id(0));
    assert_eq!(uf.group_id(0), 0);
    assert_eq!(uf.group_id(4), 4);
}

#[test]
fn test_unite_with_self() {
    let mut uf = FlatUnionFind::<u8>::new(3).unwrap();
    uf.unite(1, 1);
    assert!(uf.are_connected(1, 1));
    assert!(!uf.are_connected(0, 1));
    assert_eq!(uf.ids, vec![0, 1, 2]);
}

#[test]
fn test_flat_capacity() {
    assert!(FlatUnionFind::<u8>::new(255).is_ok());
    assert!(matches!(
        FlatUnionFind::<u8>::new(300),
        Err(UnionFindError::InvalidSize { size: 300, .. })
    ));

    let uf = FlatUnionFind::<u32>::new(0).unwrap();
    assert!(uf.is_empty());
    assert!(uf.check_index(0).is_err());
}

#[test]
fn test_flat_validate() {
    let uf = FlatUnionFind::<u32>::new(4).unwrap();
    assert!(uf.validate().is_ok());

    let bad = FlatUnionFind::<u32> {
        ids: vec![0, 1, 7, 3],
    };
    assert!(matches!(
        bad.validate(),
        Err(UnionFindError::CorruptSnapshot(_))
    ));
}
