//! Directory walking and aggregated statistics

use crate::error::TestResult;
use crate::vm_test::{VmTestResults, VmTestRunner};
use octave_evm::telemetry::TimerSnapshot;
use octave_evm::{Revision, Timers};
use serde::Serialize;
use std::path::Path;
use std::time::{Duration, Instant};

/// Aggregated test statistics
#[derive(Debug, Serialize)]
pub struct TestStats {
    /// Revision the fixtures ran under
    pub fork: Revision,
    /// Total tests seen
    pub total: usize,
    /// Tests passed
    pub passed: usize,
    /// Tests failed
    pub failed: usize,
    /// Tests skipped
    pub skipped: usize,
    /// Fixture files that could not be parsed
    pub unreadable: usize,
    /// Total wall time
    pub duration: Duration,
    /// Time spent in `execute`, summed over threads
    pub execution_time: Duration,
    /// Time spent hashing code, summed over threads
    pub keccak_time: Duration,
    /// Failed test names with reasons
    pub failures: Vec<(String, String)>,
}

impl TestStats {
    /// Create empty stats
    pub fn new(fork: Revision) -> Self {
        Self {
            fork,
            total: 0,
            passed: 0,
            failed: 0,
            skipped: 0,
            unreadable: 0,
            duration: Duration::ZERO,
            execution_time: Duration::ZERO,
            keccak_time: Duration::ZERO,
            failures: Vec::new(),
        }
    }

    /// Add VM test results
    pub fn add_vm_results(&mut self, results: &VmTestResults) {
        self.total += results.total();
        self.passed += results.passed.len();
        self.failed += results.failed.len();
        self.skipped += results.skipped.len();
        for (name, reason) in &results.failed {
            self.failures.push((name.clone(), reason.clone()));
        }
    }

    /// Pass rate as percentage
    pub fn pass_rate(&self) -> f64 {
        let executed = self.passed + self.failed;
        if executed == 0 {
            return 100.0;
        }
        (self.passed as f64 / executed as f64) * 100.0
    }

    /// Render as pretty JSON
    pub fn to_json(&self) -> TestResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Print summary
    pub fn print_summary(&self) {
        println!("\n========================================");
        println!("VMTest Summary ({})", self.fork);
        println!("========================================");
        println!("Total:   {}", self.total);
        println!("Passed:  {}", self.passed);
        println!("Failed:  {}", self.failed);
        println!("Skipped: {}", self.skipped);
        if self.unreadable > 0 {
            println!("Unreadable files: {}", self.unreadable);
        }
        println!("Pass Rate: {:.2}%", self.pass_rate());
        println!("Duration: {:.2}s", self.duration.as_secs_f64());
        println!(
            "Execute: {:.3}s  Keccak: {:.3}s",
            self.execution_time.as_secs_f64(),
            self.keccak_time.as_secs_f64()
        );

        if !self.failures.is_empty() {
            println!("\nFailed tests:");
            for (name, reason) in &self.failures {
                println!("  - {}: {}", name, reason);
            }
        }
    }
}

/// Main test runner
pub struct TestRunner {
    vm_runner: VmTestRunner,
    verbose: bool,
}

impl TestRunner {
    /// Runner for fixtures under `fork`
    pub fn new(fork: Revision, verbose: bool) -> Self {
        Self {
            vm_runner: VmTestRunner::new(fork, verbose),
            verbose,
        }
    }

    /// Run every `.json` fixture below `dir`
    pub fn run_vm_tests(&self, dir: &Path) -> TestResult<TestStats> {
        let mut stats = TestStats::new(self.vm_runner.revision());
        let before = Timers::global().total();
        let start = Instant::now();

        tracing::info!("Running VM tests from: {}", dir.display());
        self.run_vm_tests_recursive(dir, &mut stats)?;

        stats.duration = start.elapsed();
        let spent = since(before, Timers::global().total());
        stats.execution_time = spent.execution_time;
        stats.keccak_time = spent.keccak_time;

        let (hits, lookups) = self.vm_runner.cache().hit_rate();
        tracing::debug!(hits, lookups, "code analysis cache");
        Ok(stats)
    }

    fn run_vm_tests_recursive(&self, dir: &Path, stats: &mut TestStats) -> TestResult<()> {
        if !dir.exists() {
            tracing::warn!("Directory not found: {}", dir.display());
            return Ok(());
        }

        let mut entries: Vec<_> = std::fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<_, _>>()?;
        entries.sort();

        for path in entries {
            if path.is_dir() {
                self.run_vm_tests_recursive(&path, stats)?;
            } else if path.extension().is_some_and(|e| e == "json") {
                match self.vm_runner.run_file(&path) {
                    Ok(results) => {
                        stats.add_vm_results(&results);
                        if self.verbose && !results.failed.is_empty() {
                            tracing::info!(
                                "File: {} - {} passed, {} failed, {} skipped",
                                path.display(),
                                results.passed.len(),
                                results.failed.len(),
                                results.skipped.len()
                            );
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Unreadable fixture {}: {}", path.display(), e);
                        stats.unreadable += 1;
                    }
                }
            }
        }

        Ok(())
    }
}

/// Difference between two global timer totals
fn since(before: TimerSnapshot, after: TimerSnapshot) -> TimerSnapshot {
    TimerSnapshot {
        executions: after.executions.saturating_sub(before.executions),
        execution_time: after.execution_time.saturating_sub(before.execution_time),
        keccak_time: after.keccak_time.saturating_sub(before.keccak_time),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "mstore": {
            "env": {
                "currentCoinbase": "0x2adc25665018aa1fe0e6bc666dac8fc2697ff9ba",
                "currentGasLimit": "0x0f4240",
                "currentNumber": "0x00",
                "currentTimestamp": "0x01"
            },
            "exec": {
                "address": "0x0f572e5295c57f15886f9b263e2f6d2d6c7b5ec6",
                "caller": "0xcd1722f3947def4cf144679da39c4c32bdc35681",
                "code": "0x602a60005260206000f3",
                "data": "0x",
                "gas": "0x0186a0",
                "gasPrice": "0x01",
                "origin": "0xcd1722f3947def4cf144679da39c4c32bdc35681",
                "value": "0x00"
            },
            "gas": "0x01868b",
            "out": "0x000000000000000000000000000000000000000000000000000000000000002a",
            "pre": {},
            "post": {}
        }
    }"#;

    #[test]
    fn test_walks_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(dir.path().join("a.json"), FIXTURE).unwrap();
        std::fs::write(nested.join("b.json"), FIXTURE).unwrap();
        std::fs::write(nested.join("notes.txt"), "ignored").unwrap();
        std::fs::write(nested.join("broken.json"), "{").unwrap();

        let runner = TestRunner::new(Revision::Homestead, false);
        let stats = runner.run_vm_tests(dir.path()).unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.passed, 2, "{:?}", stats.failures);
        assert_eq!(stats.unreadable, 1);
        assert_eq!(stats.pass_rate(), 100.0);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let runner = TestRunner::new(Revision::Homestead, false);
        let stats = runner.run_vm_tests(Path::new("/nonexistent/vmtests")).unwrap();
        assert_eq!(stats.total, 0);
    }

    #[test]
    fn test_stats_json() {
        let mut stats = TestStats::new(Revision::Berlin);
        stats.passed = 3;
        stats.total = 3;
        let json = stats.to_json().unwrap();
        assert!(json.contains("\"fork\": \"Berlin\""));
        assert!(json.contains("\"passed\": 3"));
    }

    #[test]
    fn test_pass_rate_ignores_skipped() {
        let mut stats = TestStats::new(Revision::Frontier);
        stats.passed = 1;
        stats.failed = 1;
        stats.skipped = 10;
        assert_eq!(stats.pass_rate(), 50.0);
    }
}
