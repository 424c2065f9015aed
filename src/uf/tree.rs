use super::*;
use crate::index::{AsIndexT, IndexT};
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Union-find over a forest of parent pointers.
///
/// Every element points at its parent, and a root points at itself.  Two
/// elements are connected when their root searches end at the same root.
/// Merging links one root below the other.
///
/// The linking rule is chosen by `W` and the treatment of the visited path
/// during root searches by `C`:
///
/// | `W`             | `C`                 | alias                      |
/// |-----------------|---------------------|----------------------------|
/// | [`Weighted`]    | [`PathCompression`] | [`WeightedCompressedTree`] |
/// | [`Weighted`]    | [`NoCompression`]   | [`WeightedTree`]           |
/// | [`NotWeighted`] | [`PathCompression`] | [`CompressedTree`]         |
/// | [`NotWeighted`] | [`NoCompression`]   | [`PlainTree`]              |
///
/// Under [`PathCompression`] every root search rewrites the parents along
/// the path, including searches made by
/// [`are_connected`](DisjointSets::are_connected).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TreeUnionFind<W = Weighted, C = PathCompression, I = u32>
where
    W: WeightPolicy,
    C: CompressPolicy,
    I: IndexT,
{
    parents: Vec<I>,
    weights: W,
    #[cfg_attr(feature = "serde", serde(skip))]
    phantom: PhantomData<C>,
}

/// Union by size with path halving.
pub type WeightedCompressedTree<I = u32> = TreeUnionFind<Weighted, PathCompression, I>;
/// Union by size, no path compression.
pub type WeightedTree<I = u32> = TreeUnionFind<Weighted, NoCompression, I>;
/// First root always becomes the parent, with path halving.
pub type CompressedTree<I = u32> = TreeUnionFind<NotWeighted, PathCompression, I>;
/// First root always becomes the parent, no path compression.
pub type PlainTree<I = u32> = TreeUnionFind<NotWeighted, NoCompression, I>;

impl<W, C, I> TreeUnionFind<W, C, I>
where
    W: WeightPolicy,
    C: CompressPolicy,
    I: IndexT,
{
    /// Builds `n` singleton trees.
    pub fn new(n: usize) -> Result<Self, UnionFindError> {
        check_universe::<I>(n)?;
        Ok(Self {
            parents: (0..n).map(|i| i.as_I()).collect(),
            weights: W::with_size(n),
            phantom: PhantomData,
        })
    }

    /// Follows parent links from `i` up to its root.
    pub fn find_root(&mut self, i: I) -> I {
        let mut i = i.to_index();
        while self.parents[i].to_index() != i {
            C::compress(&mut self.parents, i);
            i = self.parents[i].to_index();
        }
        self.parents[i]
    }

    /// Parent pointer of element `i`, without side effects.
    pub fn parent(&self, i: I) -> I {
        self.parents[i.to_index()]
    }

    /// `true` if `i` is the root of its tree.
    pub fn is_root(&self, i: I) -> bool {
        self.parent(i) == i
    }

    /// Number of elements in the tree rooted at `root`.  `None` if `root`
    /// is not a root or if sizes are not tracked.
    pub fn tree_size(&self, root: I) -> Option<usize> {
        if self.is_root(root) {
            self.weights.tree_size(root.to_index())
        } else {
            None
        }
    }

    /// Number of trees (groups) in the forest.  O(N).
    pub fn count_roots(&self) -> usize {
        self.parents
            .iter()
            .enumerate()
            .filter(|(i, p)| p.to_index() == *i)
            .count()
    }

    /// name of the configuration, e.g. "tree(weighted, path_compression)"
    pub fn strategy_name() -> String {
        format!("tree({}, {})", W::NAME, C::NAME)
    }

    // checks the forest invariants of a loaded snapshot: parents in range,
    // every walk ends at a root, each stored root size equals the number
    // of elements whose walk ends there
    pub(crate) fn validate(&self) -> Result<(), UnionFindError> {
        let n = self.parents.len();
        check_universe::<I>(n)?;

        if self.parents.iter().any(|p| p.to_index() >= n) {
            return Err(UnionFindError::CorruptSnapshot("parent out of range"));
        }

        // a walk longer than n steps must revisit a node
        let mut members = vec![0usize; n];
        for start in 0..n {
            let mut i = start;
            let mut steps = 0;
            while self.parents[i].to_index() != i {
                i = self.parents[i].to_index();
                steps += 1;
                if steps > n {
                    return Err(UnionFindError::CorruptSnapshot("cycle in parent links"));
                }
            }
            members[i] += 1;
        }

        if let Some(len) = self.weights.storage_len() {
            if len != n {
                return Err(UnionFindError::CorruptSnapshot("size array length"));
            }
            let mismatch = (0..n)
                .filter(|&r| self.parents[r].to_index() == r)
                .any(|r| self.weights.tree_size(r) != Some(members[r]));
            if mismatch {
                return Err(UnionFindError::CorruptSnapshot(
                    "root size does not match its tree",
                ));
            }
        }
        Ok(())
    }
}

impl<W, C, I> DisjointSets<I> for TreeUnionFind<W, C, I>
where
    W: WeightPolicy,
    C: CompressPolicy,
    I: IndexT,
{
    fn len(&self) -> usize {
        self.parents.len()
    }

    fn unite(&mut self, i: I, j: I) {
        if i == j {
            return;
        }

        let root_i = self.find_root(i).to_index();
        let root_j = self.find_root(j).to_index();
        if root_i == root_j {
            return;
        }

        let (parent, child) = self.weights.select_parent(root_i, root_j);
        self.parents[child] = parent.as_I();
        self.weights.include(parent, child);
    }

    fn are_connected(&mut self, i: I, j: I) -> bool {
        self.find_root(i) == self.find_root(j)
    }
}

impl<W, C, I> UnionFindStrategy<I> for TreeUnionFind<W, C, I>
where
    W: WeightPolicy,
    C: CompressPolicy,
    I: IndexT,
{
    fn with_size(n: usize) -> Result<Self, UnionFindError> {
        Self::new(n)
    }
}
