use super::*;
use crate::uf::*;

// records the condition together with its source text
macro_rules! check {
    ($rec:expr, $cond:expr) => {
        $rec.check($cond, stringify!($cond))
    };
}

/// Runs the three-group scenario against strategy `S`.
///
/// On a universe of 200 elements: groups 1-2-3-4, 5-6-7 and 8-9-10 are
/// built and checked for separation, then groups 5-6-7 and 8-9-10 are
/// joined through `unite(5, 9)`.
pub fn check_union_find<S, R>(rec: &mut R) -> bool
where
    S: UnionFindStrategy<u32>,
    R: CheckRecorder,
{
    let mut uf = match UnionFind::<S>::new(200) {
        Ok(uf) => uf,
        Err(_) => return rec.check(false, "construct a universe of 200 elements"),
    };

    let mut ok = true;
    ok &= check!(rec, !uf.are_connected(1, 2));
    ok &= check!(rec, !uf.are_connected(1, 4));

    // Group A: 1-2-3-4
    uf.unite(1, 2);
    uf.unite(2, 3);
    uf.unite(3, 4);

    // Group B: 5-6-7
    uf.unite(5, 6);
    uf.unite(6, 7);

    // Group C: 8-9-10
    uf.unite(8, 9);
    uf.unite(9, 10);

    ok &= check!(rec, uf.are_connected(1, 2));
    ok &= check!(rec, uf.are_connected(1, 4));
    ok &= check!(rec, uf.are_connected(5, 6));
    ok &= check!(rec, !uf.are_connected(4, 5));
    ok &= check!(rec, !uf.are_connected(7, 8));
    ok &= check!(rec, !uf.are_connected(5, 10));

    // join groups B and C
    uf.unite(5, 9);

    ok &= check!(rec, uf.are_connected(7, 8));
    ok &= check!(rec, uf.are_connected(5, 10));
    ok &= check!(rec, !uf.are_connected(4, 8));
    ok &= check!(rec, uf.try_are_connected(0, 200).is_err());

    ok
}

/// Runs [`check_union_find`] against the flat strategy and all four tree
/// configurations.  Returns `true` if every routine passed.
pub fn run_all(driver: &mut TestDriver) -> bool {
    let mut ok = true;
    ok &= driver.run("flat", check_union_find::<FlatUnionFind, _>);
    ok &= driver.run(
        &WeightedCompressedTree::<u32>::strategy_name(),
        check_union_find::<WeightedCompressedTree, _>,
    );
    ok &= driver.run(
        &WeightedTree::<u32>::strategy_name(),
        check_union_find::<WeightedTree, _>,
    );
    ok &= driver.run(
        &CompressedTree::<u32>::strategy_name(),
        check_union_find::<CompressedTree, _>,
    );
    ok &= driver.run(
        &PlainTree::<u32>::strategy_name(),
        check_union_find::<PlainTree, _>,
    );
    ok
}

#[test]
fn test_run_all() {
    let mut driver = TestDriver::new(true);
    driver.print_to_buffer();
    assert!(run_all(&mut driver));
    assert_eq!(driver.exit_code(), 0);
    assert_eq!(driver.passed(), 5 * 12);

    let out = driver.get_print_buffer().unwrap();
    assert!(out.contains("tree(not_weighted, no_compression)"));
    assert!(!out.contains("FAILED"));
}

#[test]
fn test_failing_recorder() {
    // a recorder that sees every outcome
    struct Log(Vec<(bool, String)>);
    impl CheckRecorder for Log {
        fn check(&mut self, passed: bool, what: &str) -> bool {
            self.0.push((passed, what.to_string()));
            passed
        }
    }

    let mut log = Log(Vec::new());
    assert!(check_union_find::<FlatUnionFind, _>(&mut log));
    assert_eq!(log.0.len(), 12);
    assert_eq!(log.0[0].1, "!uf.are_connected(1, 2)");
    assert!(log.0.iter().all(|(passed, _)| *passed));
}
