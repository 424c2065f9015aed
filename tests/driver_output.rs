use ufkit::{harness::*, io::ConfigurablePrintTarget, uf::*};

fn verbose_driver() -> TestDriver {
    let settings = UnionFindSettingsBuilder::default()
        .verbose(true)
        .build()
        .unwrap();
    TestDriver::from_settings(&settings)
}

#[test]
fn test_print_to_stdout() {
    let mut driver = verbose_driver();
    driver.print_to_stdout();
    assert!(run_all(&mut driver));
    driver.print_stats().unwrap();
}

#[test]
fn test_print_to_buffer() {
    let mut driver = verbose_driver();
    driver.print_to_buffer();
    run_all(&mut driver);
    driver.print_stats().unwrap();

    let result = driver.get_print_buffer().unwrap();
    assert!(result.contains("flat"));
    assert!(result.contains("tree(weighted, path_compression)"));
    assert!(result.contains("routines: 5 run, 0 failed"));
    assert!(result.contains("result:   PASSED"));
}

#[test]
fn test_print_to_file() {
    use std::io::{Read, Seek};

    let mut driver = verbose_driver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    driver.print_to_file(file.into_file());
    run_all(&mut driver);
    driver.print_stats().unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("result:   PASSED"));
}

#[test]
fn test_print_to_stream() {
    use std::io::{Read, Seek};

    let mut driver = verbose_driver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    let stream = Box::new(file.into_file());

    driver.print_to_stream(stream);
    run_all(&mut driver);
    driver.print_stats().unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("tree(not_weighted, no_compression)"));
}

#[test]
fn test_print_to_sink() {
    let mut driver = verbose_driver();
    driver.print_to_sink();
    assert!(run_all(&mut driver));
    driver.print_stats().unwrap();
    assert!(driver.get_print_buffer().is_err());
}

#[test]
fn test_quiet_driver_prints_only_summary() {
    let mut driver = TestDriver::new(false);
    driver.print_to_buffer();
    driver.run("failing routine", |rec| rec.check(false, "always false"));
    assert_eq!(driver.get_print_buffer().unwrap(), "");

    driver.print_stats().unwrap();
    let result = driver.get_print_buffer().unwrap();
    assert!(!result.contains("always false"));
    assert!(result.contains("result:   FAILED"));
    assert_eq!(driver.exit_code(), 1);
}
