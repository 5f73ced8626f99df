//! Progress counter and background reporter
//!
//! Workers count spins locally and publish to one shared relaxed atomic
//! every batch, so contention is O(spins / batch). The reporter polls the
//! counter on its own thread and may read a lagging value; workers never
//! wait on it.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crossbeam_channel::{Sender, bounded};
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════════
// COUNTER
// ═══════════════════════════════════════════════════════════════════════════════

/// Shared count of completed spins. Advisory only.
#[derive(Debug, Clone, Default)]
pub struct ProgressCounter {
    done: Arc<AtomicU64>,
}

impl ProgressCounter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add(&self, spins: u64) {
        self.done.fetch_add(spins, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.done.load(Ordering::Relaxed)
    }
}

/// Per-worker batching front for a [`ProgressCounter`]
#[derive(Debug)]
pub struct ProgressTicker<'a> {
    counter: &'a ProgressCounter,
    batch: u64,
    pending: u64,
}

impl<'a> ProgressTicker<'a> {
    pub fn new(counter: &'a ProgressCounter, batch: u64) -> Self {
        Self {
            counter,
            batch: batch.max(1),
            pending: 0,
        }
    }

    /// Count one spin; publishes once per full batch
    #[inline]
    pub fn tick(&mut self) {
        self.pending += 1;
        if self.pending == self.batch {
            self.counter.add(self.batch);
            self.pending = 0;
        }
    }

    /// Publish any remainder
    pub fn flush(&mut self) {
        if self.pending > 0 {
            self.counter.add(self.pending);
            self.pending = 0;
        }
    }
}

impl Drop for ProgressTicker<'_> {
    fn drop(&mut self) {
        self.flush();
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SNAPSHOT
// ═══════════════════════════════════════════════════════════════════════════════

/// Throughput view of one counter reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub done: u64,
    pub total: u64,
    pub elapsed_secs: f64,
}

impl ProgressSnapshot {
    /// Completion in percent
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        100.0 * self.done as f64 / self.total as f64
    }

    /// Spins per second
    pub fn rate(&self) -> f64 {
        self.done as f64 / self.elapsed_secs.max(1e-9)
    }

    /// Estimated seconds remaining; `None` before any spin completed
    pub fn eta_secs(&self) -> Option<f64> {
        let rate = self.rate();
        (rate > 0.0).then(|| self.total.saturating_sub(self.done) as f64 / rate)
    }
}

impl std::fmt::Display for ProgressSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} ({:.2}%) | {:.0} spins/s | ETA ",
            self.done,
            self.total,
            self.percent(),
            self.rate()
        )?;
        match self.eta_secs() {
            Some(eta) => write!(f, "{eta:.0}s"),
            None => write!(f, "--"),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// REPORTER
// ═══════════════════════════════════════════════════════════════════════════════

/// Background thread logging progress on a fixed period
pub struct ProgressReporter {
    stop_tx: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl ProgressReporter {
    /// Start polling `counter` every `interval`
    pub fn start(counter: ProgressCounter, total: u64, interval: Duration) -> std::io::Result<Self> {
        let (stop_tx, stop_rx) = bounded::<()>(1);
        let start = Instant::now();

        let handle = std::thread::Builder::new()
            .name("rtp-progress".into())
            .spawn(move || {
                // Wakes on the timer, or exits on the stop signal / disconnect
                while let Err(crossbeam_channel::RecvTimeoutError::Timeout) =
                    stop_rx.recv_timeout(interval)
                {
                    let snapshot = ProgressSnapshot {
                        done: counter.get(),
                        total,
                        elapsed_secs: start.elapsed().as_secs_f64(),
                    };
                    log::info!("[PROGRESS] {snapshot}");
                }
            })?;

        Ok(Self {
            stop_tx,
            handle: Some(handle),
        })
    }

    /// Signal the thread and wait for it to exit
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let _ = self.stop_tx.try_send(());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("progress reporter panicked");
            }
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        self.shutdown();
    }
}
