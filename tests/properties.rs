use itertools::iproduct;
use ufkit::uf::*;

// connectivity checks that must hold for every strategy

const N: u32 = 12;

fn connectivity<S: UnionFindStrategy<u32>>(uf: &mut UnionFind<S>) -> Vec<bool> {
    iproduct!(0..N, 0..N)
        .map(|(i, j)| uf.are_connected(i, j))
        .collect()
}

fn reflexive<S: UnionFindStrategy<u32>>() {
    let mut uf = UnionFind::<S>::new(N as usize).unwrap();
    for i in 0..N {
        assert!(uf.are_connected(i, i));
    }
    uf.unite(0, 1);
    uf.unite(3, 2);
    for i in 0..N {
        assert!(uf.are_connected(i, i));
    }
}

fn symmetric<S: UnionFindStrategy<u32>>() {
    let mut uf = UnionFind::<S>::new(N as usize).unwrap();
    uf.unite(0, 5);
    uf.unite(7, 5);
    uf.unite(11, 3);
    for (i, j) in iproduct!(0..N, 0..N) {
        assert_eq!(uf.are_connected(i, j), uf.are_connected(j, i));
    }
}

fn transitive<S: UnionFindStrategy<u32>>() {
    let mut uf = UnionFind::<S>::new(N as usize).unwrap();
    uf.unite(2, 9);
    uf.unite(9, 4);
    assert!(uf.are_connected(2, 4));

    // chains in both directions
    uf.unite(10, 0);
    uf.unite(1, 10);
    assert!(uf.are_connected(0, 1));
    assert!(!uf.are_connected(0, 2));
}

fn non_interfering<S: UnionFindStrategy<u32>>() {
    let mut uf = UnionFind::<S>::new(N as usize).unwrap();
    uf.unite(0, 1);
    uf.unite(6, 7);

    // merges inside {0,1,2,3} leave every pair outside of it alone
    let before = connectivity(&mut uf);
    uf.unite(1, 2);
    uf.unite(3, 0);
    let after = connectivity(&mut uf);

    let inside = |k: u32| k <= 3;
    for (i, j) in iproduct!(0..N, 0..N) {
        if !inside(i) || !inside(j) {
            let idx = (i * N + j) as usize;
            assert_eq!(before[idx], after[idx], "pair ({}, {})", i, j);
        }
    }
}

fn idempotent<S: UnionFindStrategy<u32>>() {
    let mut once = UnionFind::<S>::new(N as usize).unwrap();
    let mut twice = UnionFind::<S>::new(N as usize).unwrap();

    for (i, j) in [(0, 4), (4, 8), (9, 1)] {
        once.unite(i, j);
        twice.unite(i, j);
        twice.unite(i, j);
    }
    assert_eq!(connectivity(&mut once), connectivity(&mut twice));
}

macro_rules! property_tests {
    ($($name:ident => $strategy:ty),* $(,)?) => {
        $(
            mod $name {
                use super::*;

                #[test]
                fn reflexivity() {
                    reflexive::<$strategy>();
                }

                #[test]
                fn symmetry() {
                    symmetric::<$strategy>();
                }

                #[test]
                fn transitivity() {
                    transitive::<$strategy>();
                }

                #[test]
                fn non_interference() {
                    non_interfering::<$strategy>();
                }

                #[test]
                fn idempotence() {
                    idempotent::<$strategy>();
                }
            }
        )*
    };
}

property_tests! {
    flat => FlatUnionFind,
    weighted_compressed => WeightedCompressedTree,
    weighted => WeightedTree,
    compressed => CompressedTree,
    plain => PlainTree,
}
