//! Self-test routines and a minimal driver for running them.
//!
//! A routine receives a [`CheckRecorder`], performs a sequence of
//! `unite` / `are_connected` calls and records one boolean outcome per
//! assertion.  It returns the conjunction of its checks.  How outcomes are
//! accumulated and reported is up to the recorder; [`TestDriver`] counts
//! them, prints a summary and maps the result to a process exit code.

use crate::io::{ConfigurablePrintTarget, PrintTarget};
use crate::uf::*;
use std::io::Write;
use std::time::{Duration, Instant};

mod routines;
pub use routines::*;

/// Sink for the outcome of individual checks.
pub trait CheckRecorder {
    /// Record one outcome, described by `what`.  Returns `passed`.
    fn check(&mut self, passed: bool, what: &str) -> bool;
}

/// Counts check outcomes and routine results.
///
/// With `verbose` set, failed checks and per-routine results are written to
/// the configured print target.  [`print_stats`](Self::print_stats) always
/// writes the summary, and reports the first write error seen while the
/// routines were running.
#[derive(Debug)]
pub struct TestDriver {
    verbose: bool,
    passed: usize,
    failed: usize,
    routines: usize,
    failed_routines: usize,
    elapsed: Duration,
    stream: PrintTarget,
    write_error: Option<std::io::Error>,
}

impl Default for TestDriver {
    fn default() -> Self {
        Self::new(false)
    }
}

impl TestDriver {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            passed: 0,
            failed: 0,
            routines: 0,
            failed_routines: 0,
            elapsed: Duration::ZERO,
            stream: PrintTarget::default(),
            write_error: None,
        }
    }

    /// Driver with verbosity taken from `settings`.
    pub fn from_settings(settings: &UnionFindSettings) -> Self {
        Self::new(settings.verbose)
    }

    /// Runs `routine` and records its aggregate result.
    pub fn run<F>(&mut self, name: &str, routine: F) -> bool
    where
        F: FnOnce(&mut Self) -> bool,
    {
        let start = Instant::now();
        let result = routine(self);
        let elapsed = start.elapsed();

        self.elapsed += elapsed;
        self.routines += 1;
        if !result {
            self.failed_routines += 1;
        }

        if self.verbose {
            let status = if result { "ok" } else { "FAILED" };
            let res = writeln!(self.stream, "{:<44} {:>6} ({:?})", name, status, elapsed);
            self.keep_write_error(res);
        }
        result
    }

    /// number of passed checks
    pub fn passed(&self) -> usize {
        self.passed
    }

    /// number of failed checks
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// number of routines that returned `false`
    pub fn failed_routines(&self) -> usize {
        self.failed_routines
    }

    /// `true` if no check and no routine failed
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.failed_routines == 0
    }

    /// Process exit code: 0 if everything passed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    // only the first error is kept
    fn keep_write_error(&mut self, res: std::io::Result<()>) {
        if let Err(e) = res {
            self.write_error.get_or_insert(e);
        }
    }

    /// Writes a summary of all recorded outcomes.
    pub fn print_stats(&mut self) -> std::io::Result<()> {
        let verdict = if self.all_passed() { "PASSED" } else { "FAILED" };
        let out = &mut self.stream;
        writeln!(out, "-------------------------------------------------------------")?;
        writeln!(
            out,
            "routines: {} run, {} failed",
            self.routines, self.failed_routines
        )?;
        writeln!(
            out,
            "checks:   {} passed, {} failed",
            self.passed, self.failed
        )?;
        writeln!(out, "time:     {:?}", self.elapsed)?;
        writeln!(out, "result:   {}", verdict)?;
        out.flush()?;

        match self.write_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl CheckRecorder for TestDriver {
    fn check(&mut self, passed: bool, what: &str) -> bool {
        if passed {
            self.passed += 1;
        } else {
            self.failed += 1;
            if self.verbose {
                let res = writeln!(self.stream, "  check failed: {}", what);
                self.keep_write_error(res);
            }
        }
        passed
    }
}

impl ConfigurablePrintTarget for TestDriver {
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}

#[test]
fn test_driver_accounting() {
    let mut driver = TestDriver::new(true);
    driver.print_to_buffer();

    assert!(driver.run("passing", |rec| rec.check(true, "a") & rec.check(true, "b")));
    assert_eq!(driver.passed(), 2);
    assert!(driver.all_passed());
    assert_eq!(driver.exit_code(), 0);

    assert!(!driver.run("failing", |rec| rec.check(1 + 1 == 3, "1 + 1 == 3")));
    assert_eq!(driver.failed(), 1);
    assert_eq!(driver.failed_routines(), 1);
    assert_eq!(driver.exit_code(), 1);

    // a routine may fail without any failed check
    let mut driver2 = TestDriver::default();
    driver2.print_to_sink();
    driver2.run("aborted", |_| false);
    assert_eq!(driver2.failed(), 0);
    assert!(!driver2.all_passed());

    driver.print_stats().unwrap();
    let out = driver.get_print_buffer().unwrap();
    assert!(out.contains("check failed: 1 + 1 == 3"));
    assert!(out.contains("failing"));
    assert!(out.contains("checks:   2 passed, 1 failed"));
    assert!(out.contains("result:   FAILED"));
}

#[test]
fn test_driver_reports_write_error() {
    // fails on the first write only
    struct FlakyStream(bool);
    impl Write for FlakyStream {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.0 {
                Ok(buf.len())
            } else {
                self.0 = true;
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
            }
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let mut driver = TestDriver::new(true);
    driver.print_to_stream(Box::new(FlakyStream(false)));
    assert!(driver.run("lost line", |rec| rec.check(true, "x")));

    let err = driver.print_stats().unwrap_err();
    assert_eq!(err.to_string(), "disk full");

    // the error is reported once
    assert!(driver.print_stats().is_ok());
}
