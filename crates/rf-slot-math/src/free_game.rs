//! Free game cascade
//!
//! A triggered free game starts with a queue of spins. Any free spin showing
//! enough scatters appends another award to the queue, without limit. The
//! queue is a plain countdown, so deep retrigger chains never allocate.
//!
//! Spins are also grouped into fixed-size batches purely for reporting: a
//! batch whose summed win is exactly zero counts as a zero batch. Batches do
//! not align with retriggers, and a trailing short batch still counts.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{SlotError, SlotResult};
use crate::paytable::Paytable;
use crate::symbols::ReelSet;
use crate::window::Window;

// ═══════════════════════════════════════════════════════════════════════════════
// CONFIGURATION
// ═══════════════════════════════════════════════════════════════════════════════

/// Free game cascade parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeGameConfig {
    /// Spins queued on entry
    pub initial_spins: u32,
    /// Spins appended per retrigger
    pub retrigger_spins: u32,
    /// Scatters needed on a free spin to retrigger
    pub retrigger_scatter_count: u8,
    /// Spins per reporting batch
    pub batch_size: u32,
}

impl Default for FreeGameConfig {
    fn default() -> Self {
        Self {
            initial_spins: 5,
            retrigger_spins: 5,
            retrigger_scatter_count: 3,
            batch_size: 5,
        }
    }
}

impl FreeGameConfig {
    /// Reject rules whose queue cannot drain or whose batches are empty
    pub fn validate(&self) -> SlotResult<()> {
        if self.initial_spins == 0 {
            return Err(SlotError::InvalidFreeGame("initial_spins must be positive".into()));
        }
        if self.retrigger_scatter_count == 0 {
            // Every free spin would retrigger
            return Err(SlotError::InvalidFreeGame(
                "retrigger_scatter_count must be at least 1".into(),
            ));
        }
        if self.batch_size == 0 {
            return Err(SlotError::InvalidFreeGame("batch_size must be positive".into()));
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// OUTCOME
// ═══════════════════════════════════════════════════════════════════════════════

/// Totals of one completed free game run
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FreeGameOutcome {
    /// Free spins played
    pub spins: u64,
    /// Staked win before the trigger multiplier
    pub win: f64,
    /// Retriggers during the run
    pub retriggers: u64,
    /// Closed batches whose summed win was exactly zero
    pub zero_batches: u64,
    /// Closed batches, including a trailing short one
    pub total_batches: u64,
}

// ═══════════════════════════════════════════════════════════════════════════════
// STATE
// ═══════════════════════════════════════════════════════════════════════════════

/// In-flight free game state
#[derive(Debug, Clone)]
pub struct FreeGameRun {
    config: FreeGameConfig,
    remaining: u64,
    batch_spins: u32,
    batch_win: f64,
    outcome: FreeGameOutcome,
}

impl FreeGameRun {
    /// Start a run with the initial award queued
    pub fn new(config: FreeGameConfig) -> Self {
        Self {
            config,
            remaining: config.initial_spins as u64,
            batch_spins: 0,
            batch_win: 0.0,
            outcome: FreeGameOutcome::default(),
        }
    }

    /// Spins still queued
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }

    /// Consume one queued spin with its staked win and scatter count
    pub fn record_spin(&mut self, win: f64, scatter_count: u8) {
        debug_assert!(self.remaining > 0, "free game queue already drained");
        self.remaining = self.remaining.saturating_sub(1);
        self.outcome.spins += 1;
        self.outcome.win += win;

        if scatter_count >= self.config.retrigger_scatter_count {
            self.remaining += self.config.retrigger_spins as u64;
            self.outcome.retriggers += 1;
        }

        self.batch_spins += 1;
        self.batch_win += win;
        if self.batch_spins >= self.config.batch_size {
            self.close_batch();
        }
    }

    fn close_batch(&mut self) {
        self.outcome.total_batches += 1;
        if self.batch_win == 0.0 {
            self.outcome.zero_batches += 1;
        }
        self.batch_spins = 0;
        self.batch_win = 0.0;
    }

    /// Close any short batch and return the totals
    pub fn finish(mut self) -> FreeGameOutcome {
        if self.batch_spins > 0 {
            self.close_batch();
        }
        self.outcome
    }

    /// Play a whole run on the free game reels. `window` is scratch space
    /// reused across spins.
    pub fn play<R: Rng + ?Sized>(
        config: FreeGameConfig,
        reels: &ReelSet,
        paytable: &Paytable,
        bet_per_line: f64,
        rng: &mut R,
        window: &mut Window,
    ) -> FreeGameOutcome {
        let mut run = Self::new(config);
        while !run.is_done() {
            reels.spin_into(rng, window);
            let win = paytable.evaluate_lines(window) * bet_per_line;
            run.record_spin(win, window.count_scatters());
        }
        run.finish()
    }
}
