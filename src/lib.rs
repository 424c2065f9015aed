//! __ufkit__ is a small family of disjoint-set (union-find) structures for
//! grouping and connectivity queries over a fixed universe of elements
//! identified by the dense indices `0..N`.
//!
//! A single interface, [`DisjointSets`](uf::DisjointSets), is implemented by
//! interchangeable strategies:
//!
//! * a __flat__ strategy storing one group id per element
//!   ([`FlatUnionFind`](uf::FlatUnionFind)), with O(1) queries and O(N) merges;
//! * a __tree__ strategy storing a parent-pointer forest
//!   ([`TreeUnionFind`](uf::TreeUnionFind)), parameterized by two independent
//!   policies: union by size ([`Weighted`](uf::Weighted) or
//!   [`NotWeighted`](uf::NotWeighted)) and path halving
//!   ([`PathCompression`](uf::PathCompression) or
//!   [`NoCompression`](uf::NoCompression)).
//!
//! The strategy is fixed at compile time through the
//! [`UnionFind`](uf::UnionFind) wrapper, or at runtime from
//! [`UnionFindSettings`](uf::UnionFindSettings) through
//! [`DynUnionFind`](uf::DynUnionFind).
//!
//! ```
//! use ufkit::uf::*;
//!
//! let mut uf = UnionFind::<WeightedCompressedTree>::new(10).unwrap();
//! uf.unite(1, 2);
//! uf.unite(2, 3);
//! assert!(uf.are_connected(1, 3));
//! assert!(!uf.are_connected(1, 4));
//! ```
//!
//! Structures are sized once at construction and never grow.  They are
//! single-threaded: concurrent mutation of one instance needs external
//! synchronization.
//!
//! # Features
//!
//! * `serde` (default): serialization of all structures and settings, and
//!   JSON snapshots through [`UnionFindJSONReadWrite`](uf::UnionFindJSONReadWrite).

pub mod harness;
pub mod index;
pub mod io;
pub mod uf;
