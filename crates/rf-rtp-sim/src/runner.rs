//! Parallel simulation runner
//!
//! ```text
//! SimConfig ──partition──▶ WorkerJob × W ──rayon pool──▶ SpinStats × W
//!                                   │                          │
//!                     ProgressCounter ◀── batched adds         └──merge──▶ SpinStats
//!                           │
//!                  ProgressReporter (own thread, polls)
//! ```

use std::time::{Duration, Instant};

use rayon::prelude::*;

use rf_slot_math::SlotGame;

use crate::config::SimConfig;
use crate::progress::{ProgressCounter, ProgressReporter};
use crate::report::SimulationReport;
use crate::stats::SpinStats;
use crate::worker::{WorkerJob, partition_spins, worker_seed};
use crate::{Result, SimError};

/// Runs a configured simulation over a fixed game
pub struct Simulator {
    config: SimConfig,
    game: SlotGame,
    progress: ProgressCounter,
}

impl Simulator {
    /// Validate `config` and bind it to `game`
    pub fn new(config: SimConfig, game: SlotGame) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            game,
            progress: ProgressCounter::new(),
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn game(&self) -> &SlotGame {
        &self.game
    }

    /// Shared counter, for callers that want their own progress display
    pub fn progress(&self) -> &ProgressCounter {
        &self.progress
    }

    /// Worker assignments for this run
    pub fn jobs(&self, base_seed: u64) -> Vec<WorkerJob> {
        partition_spins(self.config.total_spins, self.config.resolved_workers())
            .into_iter()
            .enumerate()
            .map(|(id, spins)| WorkerJob {
                id,
                spins,
                seed: worker_seed(base_seed, id),
                bet_per_line: self.config.bet_per_line,
                progress_batch: self.config.progress_batch,
            })
            .collect()
    }

    /// Run every worker to completion and merge their statistics
    pub fn run(&self) -> Result<SimulationReport> {
        let base_seed = self.config.resolved_seed();
        let jobs = self.jobs(base_seed);
        let workers = jobs.len();

        log::info!(
            "Starting simulation: {} spins, {} workers, bet/line {}, seed {}",
            self.config.total_spins,
            workers,
            self.config.bet_per_line,
            base_seed
        );
        log::debug!(
            "partition: {:?}",
            jobs.iter().map(|j| j.spins).collect::<Vec<_>>()
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("rtp-worker-{i}"))
            .build()
            .map_err(|e| SimError::ThreadPool(e.to_string()))?;

        let reporter = match self.config.progress_interval_ms {
            0 => None,
            ms => Some(ProgressReporter::start(
                self.progress.clone(),
                self.config.total_spins,
                Duration::from_millis(ms),
            )?),
        };

        let start = Instant::now();
        let locals: Vec<SpinStats> = pool.install(|| {
            jobs.par_iter()
                .with_max_len(1)
                .map(|job| job.run(&self.game, &self.progress))
                .collect()
        });
        let elapsed = start.elapsed();

        if let Some(reporter) = reporter {
            reporter.stop();
        }

        let stats = SpinStats::merge_all(&locals);
        log::info!(
            "Simulation finished: {} spins in {:.2}s, RTP {:.6}",
            stats.spins,
            elapsed.as_secs_f64(),
            stats.rtp(self.game.spin_bet(self.config.bet_per_line))
        );

        Ok(SimulationReport::new(
            self.config.clone(),
            workers,
            base_seed,
            elapsed,
            stats,
        ))
    }
}
