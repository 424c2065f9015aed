#![allow(non_snake_case)]
use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Core trait for element indices.
///
/// Every union-find structure in this crate stores its element ids and
/// parent pointers as values implementing `IndexT`.  Implementations are
/// provided for all unsigned primitive integers through a blanket impl, so
/// a universe of fewer than 2^16 elements can be stored in `u16` arrays,
/// and so on.  The default everywhere is `u32`.
///
/// `IndexT` relies on [`num_traits`](num_traits) for most of its constituent
/// trait bounds.
pub trait IndexT:
    'static
    + Send
    + Sync
    + PrimInt
    + Unsigned
    + FromPrimitive
    + ToPrimitive
    + Default
    + Hash
    + Display
    + Debug
    + Sized
{
    /// Converts to a position usable for slice indexing.
    #[inline]
    fn to_index(self) -> usize {
        // always representable: values are bounded by a universe that
        // was itself checked against usize at construction
        self.to_usize().unwrap_or(usize::MAX)
    }

    /// Converts a position back into an index, if it fits.
    #[inline]
    fn from_index(i: usize) -> Option<Self> {
        Self::from_usize(i)
    }

    /// Largest universe size that can be addressed with this type.
    fn max_universe() -> usize {
        Self::max_value().to_usize().unwrap_or(usize::MAX)
    }
}

impl<I> IndexT for I where
    I: 'static
        + Send
        + Sync
        + PrimInt
        + Unsigned
        + FromPrimitive
        + ToPrimitive
        + Default
        + Hash
        + Display
        + Debug
        + Sized
{
}

/// Trait for converting `usize` constants to [`IndexT`](crate::index::IndexT)
///
/// Only used internally for values already known to lie inside a
/// validated universe, e.g. `(i).as_I()` when filling the initial id array.
// NB: mirrors the `(2.0).as_T()` shorthand for constants, in place of
// the noisier I::from_usize(i).unwrap()
pub(crate) trait AsIndexT<I>: 'static {
    fn as_I(&self) -> I;
}

impl<I> AsIndexT<I> for usize
where
    I: IndexT,
{
    #[inline]
    fn as_I(&self) -> I {
        I::from_usize(*self).unwrap_or_else(I::max_value)
    }
}

#[test]
fn test_index_conversions() {
    assert_eq!(u8::max_universe(), 255);
    assert_eq!(u16::max_universe(), 65535);
    assert_eq!(u32::max_universe(), u32::MAX as usize);

    assert_eq!(<u8 as IndexT>::from_index(255), Some(255u8));
    assert_eq!(<u8 as IndexT>::from_index(256), None);
    assert_eq!(7u16.to_index(), 7usize);

    let x: u16 = (42usize).as_I();
    assert_eq!(x, 42);
}
