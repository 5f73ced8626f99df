//! Per-worker spin loop
//!
//! A worker owns its RNG, scratch window and statistics for its entire spin
//! range. Nothing here is shared except the advisory progress counter.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use rf_slot_math::{SlotGame, TriggerTier, Window};

use crate::progress::{ProgressCounter, ProgressTicker};
use crate::stats::{SpinOutcome, SpinStats};

/// Seed offset between consecutive workers
pub const WORKER_SEED_STRIDE: u64 = 1337;

/// Split `total` spins over `workers`; the first `total % workers` workers
/// take one extra spin. `workers` of 0 is treated as 1.
pub fn partition_spins(total: u64, workers: usize) -> Vec<u64> {
    let workers = workers.max(1) as u64;
    let chunk = total / workers;
    let remainder = total % workers;
    (0..workers)
        .map(|i| chunk + u64::from(i < remainder))
        .collect()
}

/// Deterministic per-worker seed
pub fn worker_seed(base_seed: u64, worker: usize) -> u64 {
    base_seed.wrapping_add((worker as u64).wrapping_mul(WORKER_SEED_STRIDE))
}

/// Evaluate one full spin: base game, trigger decision and, if triggered,
/// the whole free game run with the locked multiplier applied.
#[inline]
pub fn play_spin<R: Rng + ?Sized>(
    game: &SlotGame,
    rng: &mut R,
    window: &mut Window,
    bet_per_line: f64,
) -> SpinOutcome {
    let base_win = game.base_spin(rng, window, bet_per_line);
    let scatters = window.count_scatters();

    let mut outcome = SpinOutcome {
        base_win,
        scatters,
        ..SpinOutcome::default()
    };

    if let Some(tier) = TriggerTier::from_scatter_count(scatters) {
        // Retriggers inside the run keep this multiplier
        let run = game.play_free_game(rng, window, bet_per_line);
        outcome.trigger = Some(tier);
        outcome.free_win = run.win * tier.multiplier();
        outcome.free_game = Some(run);
    }

    outcome
}

/// One worker's assignment
#[derive(Debug, Clone, Copy)]
pub struct WorkerJob {
    pub id: usize,
    pub spins: u64,
    pub seed: u64,
    pub bet_per_line: f64,
    pub progress_batch: u64,
}

impl WorkerJob {
    /// Run every assigned spin and return the local statistics
    pub fn run(&self, game: &SlotGame, progress: &ProgressCounter) -> SpinStats {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.run_with(game, &mut rng, progress)
    }

    /// Same loop with a caller-supplied RNG
    pub fn run_with<R: Rng + ?Sized>(
        &self,
        game: &SlotGame,
        rng: &mut R,
        progress: &ProgressCounter,
    ) -> SpinStats {
        let spin_bet = game.spin_bet(self.bet_per_line);
        let mut window = Window::default();
        let mut stats = SpinStats::new();
        let mut ticker = ProgressTicker::new(progress, self.progress_batch);

        for _ in 0..self.spins {
            let outcome = play_spin(game, rng, &mut window, self.bet_per_line);
            stats.record(&outcome, spin_bet);
            ticker.tick();
        }
        ticker.flush();

        log::info!(
            "worker {} done: {} spins, {} triggers, max win {:.2}",
            self.id,
            stats.spins,
            stats.triggers,
            stats.max_spin_win
        );
        stats
    }
}
