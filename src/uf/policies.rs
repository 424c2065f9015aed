// Policies plugged into the tree strategy.  Each policy comes as a pair
// of types: an active variant and a no-op variant.  The no-op variants
// carry no state and compile down to nothing in the hot path.

use crate::index::IndexT;
use std::fmt::Debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the tree strategy picks the parent when linking two roots.
///
/// Positions passed to these methods are slice positions of roots.
pub trait WeightPolicy: Clone + Debug {
    /// short name used when reporting a configuration
    const NAME: &'static str;

    /// state for `n` singleton trees
    fn with_size(n: usize) -> Self;

    /// Given the roots of the two trees being linked, returns
    /// `(parent, child)`.
    fn select_parent(&self, root_i: usize, root_j: usize) -> (usize, usize);

    /// record that the tree rooted at `child` now hangs below `parent`
    fn include(&mut self, parent: usize, child: usize);

    /// Size of the tree rooted at `root`, if sizes are tracked.  Only
    /// meaningful for positions that are currently roots.
    fn tree_size(&self, root: usize) -> Option<usize>;

    /// length of the backing size array, if any
    fn storage_len(&self) -> Option<usize>;
}

/// Always link the second root below the first, regardless of tree size.
///
/// This is not union by size or rank.  Without path compression an
/// adversarial sequence of unions produces chains and O(N) root searches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NotWeighted;

impl WeightPolicy for NotWeighted {
    const NAME: &'static str = "not_weighted";

    fn with_size(_n: usize) -> Self {
        NotWeighted
    }

    #[inline]
    fn select_parent(&self, root_i: usize, root_j: usize) -> (usize, usize) {
        (root_i, root_j)
    }

    #[inline]
    fn include(&mut self, _parent: usize, _child: usize) {
        //no-op
    }

    fn tree_size(&self, _root: usize) -> Option<usize> {
        None
    }

    fn storage_len(&self) -> Option<usize> {
        None
    }
}

/// Union by size: the smaller tree always goes below the larger root.
///
/// On equal sizes the root of the *second* argument of `unite` becomes the
/// parent.  Entries for positions that stopped being roots are stale and
/// never read again.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Weighted {
    pub(crate) sizes: Vec<usize>,
}

impl WeightPolicy for Weighted {
    const NAME: &'static str = "weighted";

    fn with_size(n: usize) -> Self {
        Self { sizes: vec![1; n] }
    }

    #[inline]
    fn select_parent(&self, root_i: usize, root_j: usize) -> (usize, usize) {
        if self.sizes[root_i] > self.sizes[root_j] {
            (root_i, root_j)
        } else {
            (root_j, root_i)
        }
    }

    #[inline]
    fn include(&mut self, parent: usize, child: usize) {
        self.sizes[parent] += self.sizes[child];
    }

    fn tree_size(&self, root: usize) -> Option<usize> {
        self.sizes.get(root).copied()
    }

    fn storage_len(&self) -> Option<usize> {
        Some(self.sizes.len())
    }
}

/// What the tree strategy does to the parent array on each step of a
/// root search.
pub trait CompressPolicy: Clone + Copy + Debug + Default {
    /// short name used when reporting a configuration
    const NAME: &'static str;

    /// called for node `i` before the search moves on to its parent
    fn compress<I: IndexT>(parents: &mut [I], i: usize);
}

/// Leave parent pointers untouched during root searches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NoCompression;

impl CompressPolicy for NoCompression {
    const NAME: &'static str = "no_compression";

    #[inline]
    fn compress<I: IndexT>(_parents: &mut [I], _i: usize) {
        //no-op
    }
}

/// Path halving: every visited node is re-pointed to its grandparent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathCompression;

impl CompressPolicy for PathCompression {
    const NAME: &'static str = "path_compression";

    #[inline]
    fn compress<I: IndexT>(parents: &mut [I], i: usize) {
        parents[i] = parents[parents[i].to_index()];
    }
}

#[test]
fn test_weighted_select_parent() {
    let mut w = Weighted::with_size(4);

    // equal sizes favour the second root
    assert_eq!(w.select_parent(0, 1), (1, 0));
    w.include(1, 0);
    assert_eq!(w.tree_size(1), Some(2));

    // larger tree wins from either side
    assert_eq!(w.select_parent(1, 2), (1, 2));
    assert_eq!(w.select_parent(3, 1), (1, 3));
}

#[test]
fn test_not_weighted_select_parent() {
    let mut w = NotWeighted::with_size(4);
    assert_eq!(w.select_parent(0, 1), (0, 1));
    w.include(0, 1);
    assert_eq!(w.select_parent(3, 0), (3, 0));
    assert_eq!(w.tree_size(0), None);
    assert_eq!(w.storage_len(), None);
}

#[test]
fn test_path_halving_step() {
    // chain 3 -> 2 -> 1 -> 0
    let mut parents: Vec<u32> = vec![0, 0, 1, 2];
    PathCompression::compress(&mut parents, 3);
    assert_eq!(parents, vec![0, 0, 1, 1]);

    let mut parents: Vec<u32> = vec![0, 0, 1, 2];
    NoCompression::compress(&mut parents, 3);
    assert_eq!(parents, vec![0, 0, 1, 2]);
}
