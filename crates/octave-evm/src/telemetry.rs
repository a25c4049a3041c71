//! Per-thread execution timers
//!
//! Meant for drivers wrapping [`execute`](crate::execute) calls. The
//! interpreter loop itself never touches these.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::thread::{self, ThreadId};
use std::time::{Duration, Instant};

/// Accumulated time for one thread
#[derive(Debug, Default)]
pub struct Timer {
    execution_nanos: AtomicU64,
    executions: AtomicU64,
    keccak_nanos: AtomicU64,
}

impl Timer {
    /// Add one execution's wall time
    pub fn record_execution(&self, elapsed: Duration) {
        self.execution_nanos
            .fetch_add(elapsed.as_nanos() as u64, Ordering::Relaxed);
        self.executions.fetch_add(1, Ordering::Relaxed);
    }

    /// Add time spent hashing
    pub fn record_keccak(&self, elapsed: Duration) {
        self.keccak_nanos
            .fetch_add(elapsed.as_nanos() as u64, Ordering::Relaxed);
    }

    /// Guard that records an execution when dropped
    pub fn time_execution(&self) -> ScopedTimer<'_> {
        ScopedTimer {
            timer: self,
            kind: TimerKind::Execution,
            start: Instant::now(),
        }
    }

    /// Guard that records hashing time when dropped
    pub fn time_keccak(&self) -> ScopedTimer<'_> {
        ScopedTimer {
            timer: self,
            kind: TimerKind::Keccak,
            start: Instant::now(),
        }
    }

    /// Current totals
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            executions: self.executions.load(Ordering::Relaxed),
            execution_time: Duration::from_nanos(self.execution_nanos.load(Ordering::Relaxed)),
            keccak_time: Duration::from_nanos(self.keccak_nanos.load(Ordering::Relaxed)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum TimerKind {
    Execution,
    Keccak,
}

/// Records the time since its creation into a [`Timer`] on drop
#[derive(Debug)]
pub struct ScopedTimer<'a> {
    timer: &'a Timer,
    kind: TimerKind,
    start: Instant,
}

impl Drop for ScopedTimer<'_> {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        match self.kind {
            TimerKind::Execution => self.timer.record_execution(elapsed),
            TimerKind::Keccak => self.timer.record_keccak(elapsed),
        }
    }
}

/// Point-in-time totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerSnapshot {
    /// Number of recorded executions
    pub executions: u64,
    /// Total execution time
    pub execution_time: Duration,
    /// Total hashing time
    pub keccak_time: Duration,
}

impl std::ops::Add for TimerSnapshot {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            executions: self.executions + other.executions,
            execution_time: self.execution_time + other.execution_time,
            keccak_time: self.keccak_time + other.keccak_time,
        }
    }
}

/// One [`Timer`] per thread that touched it
#[derive(Debug, Default)]
pub struct Timers {
    timers: RwLock<HashMap<ThreadId, Arc<Timer>>>,
}

impl Timers {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry
    pub fn global() -> &'static Timers {
        static GLOBAL: OnceLock<Timers> = OnceLock::new();
        GLOBAL.get_or_init(Timers::new)
    }

    /// Timer for the calling thread, created on first use
    pub fn current(&self) -> Arc<Timer> {
        let id = thread::current().id();
        if let Some(timer) = self.timers.read().get(&id) {
            return Arc::clone(timer);
        }

        let mut timers = self.timers.write();
        Arc::clone(timers.entry(id).or_default())
    }

    /// Totals per thread
    pub fn per_thread(&self) -> Vec<(ThreadId, TimerSnapshot)> {
        self.timers
            .read()
            .iter()
            .map(|(id, timer)| (*id, timer.snapshot()))
            .collect()
    }

    /// Totals across all threads
    pub fn total(&self) -> TimerSnapshot {
        self.timers
            .read()
            .values()
            .map(|timer| timer.snapshot())
            .fold(TimerSnapshot::default(), |acc, s| acc + s)
    }
}
