use ufkit::harness::*;
use ufkit::uf::*;

fn main() {
    let settings = UnionFindSettingsBuilder::default()
        .verbose(true)
        .build()
        .unwrap();

    let mut driver = TestDriver::from_settings(&settings);
    run_all(&mut driver);

    if let Err(e) = driver.print_stats() {
        eprintln!("could not print summary: {}", e);
    }
    std::process::exit(driver.exit_code());
}
