use super::*;
use crate::index::IndexT;
use std::marker::PhantomData;

/// Union-find over a strategy `S` selected at compile time.
///
/// All operations forward to the owned strategy.  Code written against
/// `UnionFind<S>` can be instantiated with any [`UnionFindStrategy`]:
///
/// ```
/// use ufkit::uf::*;
///
/// fn three_groups<S: UnionFindStrategy<u32>>() -> UnionFind<S> {
///     let mut uf = UnionFind::<S>::new(6).unwrap();
///     uf.unite(0, 1);
///     uf.unite(2, 3);
///     uf.unite(4, 5);
///     uf
/// }
///
/// let mut flat = three_groups::<FlatUnionFind>();
/// let mut tree = three_groups::<WeightedCompressedTree>();
/// assert_eq!(flat.are_connected(0, 1), tree.are_connected(0, 1));
/// assert_eq!(flat.are_connected(1, 2), tree.are_connected(1, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionFind<S, I = u32>
where
    S: UnionFindStrategy<I>,
    I: IndexT,
{
    strategy: S,
    phantom: PhantomData<I>,
}

impl<S, I> UnionFind<S, I>
where
    S: UnionFindStrategy<I>,
    I: IndexT,
{
    /// Builds `n` singleton groups using strategy `S`.
    pub fn new(n: usize) -> Result<Self, UnionFindError> {
        Ok(Self::from_strategy(S::with_size(n)?))
    }

    /// Wraps an existing strategy instance.
    pub fn from_strategy(strategy: S) -> Self {
        Self {
            strategy,
            phantom: PhantomData,
        }
    }

    /// The wrapped strategy.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Unwraps the strategy.
    pub fn into_inner(self) -> S {
        self.strategy
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.strategy.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strategy.is_empty()
    }

    /// Merge the groups containing `i` and `j`.
    #[inline]
    pub fn unite(&mut self, i: I, j: I) {
        self.strategy.unite(i, j)
    }

    /// Check whether `i` and `j` belong to the same group.
    #[inline]
    pub fn are_connected(&mut self, i: I, j: I) -> bool {
        self.strategy.are_connected(i, j)
    }

    /// Range-checked [`unite`](Self::unite).
    #[inline]
    pub fn try_unite(&mut self, i: I, j: I) -> Result<(), UnionFindError> {
        self.strategy.try_unite(i, j)
    }

    /// Range-checked [`are_connected`](Self::are_connected).
    #[inline]
    pub fn try_are_connected(&mut self, i: I, j: I) -> Result<bool, UnionFindError> {
        self.strategy.try_are_connected(i, j)
    }
}

impl<S, I> DisjointSets<I> for UnionFind<S, I>
where
    S: UnionFindStrategy<I>,
    I: IndexT,
{
    fn len(&self) -> usize {
        self.strategy.len()
    }
    fn unite(&mut self, i: I, j: I) {
        self.strategy.unite(i, j)
    }
    fn are_connected(&mut self, i: I, j: I) -> bool {
        self.strategy.are_connected(i, j)
    }
}

impl<S, I> UnionFindStrategy<I> for UnionFind<S, I>
where
    S: UnionFindStrategy<I>,
    I: IndexT,
{
    fn with_size(n: usize) -> Result<Self, UnionFindError> {
        Self::new(n)
    }
}

#[test]
fn test_forwarding() {
    let mut uf = UnionFind::<WeightedTree>::new(4).unwrap();
    uf.unite(0, 1);
    assert!(uf.are_connected(1, 0));
    assert!(!uf.are_connected(1, 2));
    assert_eq!(uf.len(), 4);

    // same tie-break as the bare strategy
    assert_eq!(uf.strategy().parent(0), 1);

    assert!(matches!(
        uf.try_unite(0, 4),
        Err(UnionFindError::IndexOutOfRange { index: 4, len: 4 })
    ));
    assert!(uf.try_are_connected(0, 1).unwrap());

    let inner = uf.into_inner();
    assert_eq!(inner.count_roots(), 3);
}
