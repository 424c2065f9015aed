use ufkit::uf::*;

// The three-group scenario with 1-based element numbers 1..=10.  Element 0
// exists but is never touched.
fn three_groups<S: UnionFindStrategy<u32>>() {
    let mut uf = UnionFind::<S>::new(11).unwrap();

    for i in 1..=10 {
        for j in 1..=10 {
            assert_eq!(uf.are_connected(i, j), i == j);
        }
    }

    uf.unite(1, 2);
    uf.unite(2, 3);
    uf.unite(3, 4);
    assert!(uf.are_connected(1, 4));

    uf.unite(5, 6);
    uf.unite(6, 7);
    assert!(uf.are_connected(5, 6));
    assert!(!uf.are_connected(4, 5));

    uf.unite(8, 9);
    uf.unite(9, 10);
    assert!(!uf.are_connected(7, 8));

    uf.unite(5, 9);
    assert!(uf.are_connected(7, 8));
    assert!(uf.are_connected(5, 10));

    // group A and element 0 are untouched by the last merge
    assert!(!uf.are_connected(1, 10));
    assert!(!uf.are_connected(0, 1));
}

#[test]
fn basic_flat() {
    three_groups::<FlatUnionFind>();
}

#[test]
fn basic_weighted_compressed_tree() {
    three_groups::<WeightedCompressedTree>();
}

#[test]
fn basic_weighted_tree() {
    three_groups::<WeightedTree>();
}

#[test]
fn basic_compressed_tree() {
    three_groups::<CompressedTree>();
}

#[test]
fn basic_plain_tree() {
    three_groups::<PlainTree>();
}

#[test]
fn basic_default_tree_is_weighted_compressed() {
    // TreeUnionFind with default policies
    three_groups::<TreeUnionFind>();
    let _: WeightedCompressedTree = TreeUnionFind::new(3).unwrap();
}

#[test]
fn basic_dyn_from_settings() {
    for strategy in ["flat", "tree"] {
        let settings = UnionFindSettingsBuilder::default()
            .strategy(strategy.to_string())
            .build()
            .unwrap();
        let mut uf = DynUnionFind::<u32>::from_settings(11, &settings).unwrap();
        uf.unite(5, 6);
        uf.unite(8, 9);
        assert!(!uf.are_connected(6, 8));
        uf.unite(5, 9);
        assert!(uf.are_connected(6, 8));
    }
}

#[test]
fn basic_small_index_types() {
    let mut uf = UnionFind::<WeightedCompressedTree<u8>, u8>::new(255).unwrap();
    uf.unite(0, 254);
    uf.unite(254, 100);
    assert!(uf.are_connected(0, 100));

    let mut uf = UnionFind::<FlatUnionFind<u16>, u16>::new(1000).unwrap();
    uf.unite(999, 1);
    assert!(uf.are_connected(1, 999));
    assert!(!uf.are_connected(1, 2));
}
