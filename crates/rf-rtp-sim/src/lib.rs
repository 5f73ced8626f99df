//! # rf-rtp-sim: Parallel Monte Carlo RTP simulator
//!
//! Estimates return-to-player and the win distribution of an
//! [`rf_slot_math::SlotGame`] by playing billions of independent spins.
//!
//! ## Features
//!
//! - **Worker pool**: spins partitioned over a fixed rayon pool, one ChaCha stream per worker
//! - **Late merge**: lock-free worker-local [`SpinStats`], summed after the join
//! - **Win profile**: six big-win tiers plus a 19-bin histogram above 1000×
//! - **Inference**: streaming mean, variance, standard error and 95% CI
//! - **Progress**: batched relaxed atomic counter polled by a background reporter
//!
//! ## Example
//!
//! ```rust,ignore
//! use rf_rtp_sim::{SimConfig, Simulator};
//! use rf_slot_math::SlotGame;
//!
//! let sim = Simulator::new(SimConfig::quick(1_000_000, 42), SlotGame::standard()?)?;
//! let report = sim.run()?;
//! println!("{}", report.to_text());
//! ```

pub mod config;
pub mod inference;
pub mod progress;
pub mod report;
pub mod runner;
pub mod stats;
pub mod tiers;
pub mod worker;

pub use config::SimConfig;
pub use inference::{ReferenceCheck, RtpEstimate};
pub use progress::{ProgressCounter, ProgressReporter, ProgressSnapshot};
pub use report::{ReportSummary, SimulationReport};
pub use runner::Simulator;
pub use stats::{SpinOutcome, SpinStats};
pub use tiers::{HIGH_WIN_EDGES, WinTier};
pub use worker::{WorkerJob, partition_spins, play_spin};

use thiserror::Error;

/// Errors that can occur while configuring or running a simulation
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Game definition error: {0}")]
    Slot(#[from] rf_slot_math::SlotError),
}

pub type Result<T> = std::result::Result<T, SimError>;
