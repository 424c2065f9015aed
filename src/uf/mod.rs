//! Disjoint-set (union-find) structures.
//!
//! All structures partition a fixed universe of `N` elements, identified by
//! the dense indices `0..N`, into disjoint groups.  Groups are merged with
//! [`unite`](DisjointSets::unite) and queried with
//! [`are_connected`](DisjointSets::are_connected).
//!
//! Two interchangeable strategies implement the same contract:
//!
//! * [`FlatUnionFind`] keeps one group id per element.  Queries are O(1),
//!   merges rewrite the whole id array.
//! * [`TreeUnionFind`] keeps a parent-pointer forest and is parameterized by
//!   a [`WeightPolicy`] ([`Weighted`] / [`NotWeighted`]) and a
//!   [`CompressPolicy`] ([`PathCompression`] / [`NoCompression`]).
//!
//! [`UnionFind`] wraps exactly one strategy chosen at compile time.  For
//! configurations only known at runtime, [`DynUnionFind`] selects a
//! strategy from [`UnionFindSettings`].
//!
//! None of these types are internally synchronized.  Sharing one instance
//! between threads requires external locking.

use crate::index::IndexT;
use enum_dispatch::*;
use thiserror::Error;

mod dynamic;
mod flat;
#[cfg(feature = "serde")]
mod json;
mod policies;
mod settings;
mod tree;
mod wrapper;

pub use dynamic::*;
pub use flat::*;
#[cfg(feature = "serde")]
pub use json::*;
pub use policies::*;
pub use settings::*;
pub use tree::*;
pub use wrapper::*;

/// Error type returned by union-find construction and checked operations.
#[derive(Error, Debug)]
pub enum UnionFindError {
    /// The requested universe cannot be addressed by the index type
    #[error("universe size {size} exceeds index capacity {max}")]
    InvalidSize { size: usize, max: usize },
    /// An element index lies outside the universe
    #[error("element index {index} out of range for universe of size {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// Settings failed validation
    #[error("bad settings: {0}")]
    BadSettings(#[from] SettingsError),
    /// A loaded snapshot violates a structural invariant
    #[error("corrupt snapshot ({0})")]
    CorruptSnapshot(&'static str),
    /// Failure reading or writing a snapshot file
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Snapshot file is not valid JSON for the requested type
    #[cfg(feature = "serde")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

// All union-find strategies must implement the following trait.
//
// `unite` and `are_connected` are the unchecked fast path: an index
// outside 0..len() panics on slice access.  The `try_` variants do an
// O(1) range check first and report `IndexOutOfRange` instead.

/// Operations shared by every union-find strategy.
#[enum_dispatch]
pub trait DisjointSets<I>
where
    I: IndexT,
{
    /// Number of elements in the universe.
    fn len(&self) -> usize;

    /// Merge the groups containing `i` and `j`.  No-op if already connected.
    fn unite(&mut self, i: I, j: I);

    /// Check whether `i` and `j` belong to the same group.
    ///
    /// Takes `&mut self` since strategies may restructure their internal
    /// state (e.g. path compression) while answering.  The logical
    /// partition is never changed by a query.
    fn are_connected(&mut self, i: I, j: I) -> bool;

    /// `true` for an empty universe.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that `i` addresses an element, returning its position.
    fn check_index(&self, i: I) -> Result<usize, UnionFindError> {
        let index = i.to_index();
        if index < self.len() {
            Ok(index)
        } else {
            Err(UnionFindError::IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }

    /// Range-checked [`unite`](DisjointSets::unite).
    fn try_unite(&mut self, i: I, j: I) -> Result<(), UnionFindError> {
        self.check_index(i)?;
        self.check_index(j)?;
        self.unite(i, j);
        Ok(())
    }

    /// Range-checked [`are_connected`](DisjointSets::are_connected).
    fn try_are_connected(&mut self, i: I, j: I) -> Result<bool, UnionFindError> {
        self.check_index(i)?;
        self.check_index(j)?;
        Ok(self.are_connected(i, j))
    }
}

/// A strategy that can be constructed for a universe of given size.
///
/// Kept apart from [`DisjointSets`] so that the latter stays usable
/// through enum dispatch.
pub trait UnionFindStrategy<I = u32>: DisjointSets<I> + Sized
where
    I: IndexT,
{
    /// Builds `n` singleton groups.  Fails if `n` elements cannot be
    /// addressed with `I`.  `n == 0` is valid.
    fn with_size(n: usize) -> Result<Self, UnionFindError>;
}

// checks a requested universe size against the capacity of the index type
pub(crate) fn check_universe<I: IndexT>(n: usize) -> Result<(), UnionFindError> {
    let max = I::max_universe();
    if n > max {
        Err(UnionFindError::InvalidSize { size: n, max })
    } else {
        Ok(())
    }
}

#[test]
fn test_check_universe() {
    assert!(check_universe::<u8>(0).is_ok());
    assert!(check_universe::<u8>(255).is_ok());
    assert!(matches!(
        check_universe::<u8>(256),
        Err(UnionFindError::InvalidSize { size: 256, max: 255 })
    ));
}
