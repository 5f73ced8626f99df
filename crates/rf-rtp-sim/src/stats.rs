//! Spin statistics
//!
//! One `SpinStats` is owned by each worker for its whole spin range and is
//! only merged after every worker has finished. All fields are sums or a
//! running maximum, so `merge` is associative and commutative.

use serde::{Deserialize, Serialize};

use rf_slot_math::{FreeGameOutcome, TriggerTier};

use crate::inference::RtpEstimate;
use crate::tiers::{HIGH_WIN_BINS, TIER_COUNT, WinTier, high_win_bin};

/// Everything recorded about one evaluated spin
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpinOutcome {
    /// Staked base game line win
    pub base_win: f64,
    /// Scatters in the base window
    pub scatters: u8,
    /// Tier locked by the base spin, if the free game triggered
    pub trigger: Option<TriggerTier>,
    /// Free game run, if triggered
    pub free_game: Option<FreeGameOutcome>,
    /// Free game win after the trigger multiplier
    pub free_win: f64,
}

impl SpinOutcome {
    /// Base plus multiplied free game win
    pub fn total(&self) -> f64 {
        self.base_win + self.free_win
    }

    /// No line win and no trigger
    pub fn is_dead(&self) -> bool {
        self.trigger.is_none() && self.base_win == 0.0
    }
}

/// Additive spin statistics, per worker or merged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpinStats {
    /// Staked base game line wins
    pub base_win_sum: f64,
    /// Free game wins after the trigger multiplier
    pub free_win_sum: f64,
    /// Base spins that entered the free game
    pub triggers: u64,
    /// Triggers split by ×10 / ×50 / ×100
    pub trigger_tiers: [u64; 3],
    /// Free spins played
    pub free_spins: u64,
    pub retriggers: u64,
    /// Largest single spin total
    pub max_spin_win: f64,
    /// Spins with no line win and no trigger
    pub dead_spins: u64,
    /// Big / mega / super / holy / jumbo / jojo
    pub tier_counts: [u64; TIER_COUNT],
    /// Counts per [`crate::tiers::HIGH_WIN_EDGES`] bin
    pub high_win_bins: [u64; HIGH_WIN_BINS],
    pub free_zero_batches: u64,
    pub free_total_batches: u64,
    /// Σ ratio
    pub ratio_sum: f64,
    /// Σ ratio²
    pub ratio_sum_sq: f64,
    /// Spins recorded
    pub spins: u64,
}

impl SpinStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one spin into the accumulator. `spin_bet` is the total stake of
    /// a spin (lines × bet per line).
    #[inline]
    pub fn record(&mut self, outcome: &SpinOutcome, spin_bet: f64) {
        self.base_win_sum += outcome.base_win;

        if let Some(tier) = outcome.trigger {
            self.triggers += 1;
            self.trigger_tiers[tier.index()] += 1;
            self.free_win_sum += outcome.free_win;
        } else if outcome.base_win == 0.0 {
            self.dead_spins += 1;
        }

        if let Some(fg) = &outcome.free_game {
            self.free_spins += fg.spins;
            self.retriggers += fg.retriggers;
            self.free_zero_batches += fg.zero_batches;
            self.free_total_batches += fg.total_batches;
        }

        let total = outcome.total();
        if total > self.max_spin_win {
            self.max_spin_win = total;
        }

        let ratio = total / spin_bet;
        if let Some(tier) = WinTier::from_ratio(ratio) {
            self.tier_counts[tier.index()] += 1;
        }
        if let Some(bin) = high_win_bin(ratio) {
            self.high_win_bins[bin] += 1;
        }

        self.ratio_sum += ratio;
        self.ratio_sum_sq += ratio * ratio;
        self.spins += 1;
    }

    /// Fold another accumulator into this one
    pub fn merge(&mut self, other: &SpinStats) {
        self.base_win_sum += other.base_win_sum;
        self.free_win_sum += other.free_win_sum;
        self.triggers += other.triggers;
        for (a, b) in self.trigger_tiers.iter_mut().zip(&other.trigger_tiers) {
            *a += b;
        }
        self.free_spins += other.free_spins;
        self.retriggers += other.retriggers;
        self.max_spin_win = self.max_spin_win.max(other.max_spin_win);
        self.dead_spins += other.dead_spins;
        for (a, b) in self.tier_counts.iter_mut().zip(&other.tier_counts) {
            *a += b;
        }
        for (a, b) in self.high_win_bins.iter_mut().zip(&other.high_win_bins) {
            *a += b;
        }
        self.free_zero_batches += other.free_zero_batches;
        self.free_total_batches += other.free_total_batches;
        self.ratio_sum += other.ratio_sum;
        self.ratio_sum_sq += other.ratio_sum_sq;
        self.spins += other.spins;
    }

    /// Owned merge, for folds and reductions
    pub fn merged(mut self, other: SpinStats) -> SpinStats {
        self.merge(&other);
        self
    }

    /// Sum a collection of worker results
    pub fn merge_all<'a>(parts: impl IntoIterator<Item = &'a SpinStats>) -> SpinStats {
        parts.into_iter().fold(SpinStats::default(), |mut acc, s| {
            acc.merge(s);
            acc
        })
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // DERIVED METRICS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Count for one win tier
    pub fn tier_count(&self, tier: WinTier) -> u64 {
        self.tier_counts[tier.index()]
    }

    /// Count for one trigger tier
    pub fn trigger_count(&self, tier: TriggerTier) -> u64 {
        self.trigger_tiers[tier.index()]
    }

    pub fn total_win(&self) -> f64 {
        self.base_win_sum + self.free_win_sum
    }

    pub fn total_bet(&self, spin_bet: f64) -> f64 {
        self.spins as f64 * spin_bet
    }

    /// Base game share of RTP
    pub fn base_rtp(&self, spin_bet: f64) -> f64 {
        ratio_or_zero(self.base_win_sum, self.total_bet(spin_bet))
    }

    /// Free game share of RTP
    pub fn free_rtp(&self, spin_bet: f64) -> f64 {
        ratio_or_zero(self.free_win_sum, self.total_bet(spin_bet))
    }

    pub fn rtp(&self, spin_bet: f64) -> f64 {
        ratio_or_zero(self.total_win(), self.total_bet(spin_bet))
    }

    /// Triggers per base spin
    pub fn trigger_rate(&self) -> f64 {
        ratio_or_zero(self.triggers as f64, self.spins as f64)
    }

    /// Retriggers per free spin; 0 when the free game never triggered
    pub fn retrigger_rate(&self) -> f64 {
        if self.triggers == 0 {
            return 0.0;
        }
        ratio_or_zero(self.retriggers as f64, self.free_spins as f64)
    }

    /// Mean free spins per triggered run; `None` without triggers
    pub fn avg_free_game_length(&self) -> Option<f64> {
        (self.triggers > 0).then(|| self.free_spins as f64 / self.triggers as f64)
    }

    /// Share of free game batches with no win; 0 without batches
    pub fn zero_batch_share(&self) -> f64 {
        ratio_or_zero(self.free_zero_batches as f64, self.free_total_batches as f64)
    }

    pub fn dead_spin_share(&self) -> f64 {
        ratio_or_zero(self.dead_spins as f64, self.spins as f64)
    }

    /// Average spins between occurrences ("one in N"); `None` if it never happened
    pub fn one_in(&self, count: u64) -> Option<f64> {
        (count > 0).then(|| self.spins as f64 / count as f64)
    }

    /// Mean / variance / 95% CI of the per-spin RTP
    pub fn estimate(&self) -> RtpEstimate {
        RtpEstimate::from_sums(self.ratio_sum, self.ratio_sum_sq, self.spins)
    }
}

#[inline]
fn ratio_or_zero(num: f64, den: f64) -> f64 {
    if den > 0.0 { num / den } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn outcome(base_win: f64, trigger: Option<TriggerTier>, fg_win: f64) -> SpinOutcome {
        let free_game = trigger.map(|_| FreeGameOutcome {
            spins: 10,
            win: fg_win,
            retriggers: 1,
            zero_batches: 1,
            total_batches: 2,
        });
        SpinOutcome {
            base_win,
            scatters: trigger.map_or(0, |t| t.index() as u8 + 3),
            trigger,
            free_game,
            free_win: trigger.map_or(0.0, |t| fg_win * t.multiplier()),
        }
    }

    #[test]
    fn test_record_dead_spin() {
        let mut stats = SpinStats::new();
        stats.record(&outcome(0.0, None, 0.0), 1.0);
        assert_eq!(stats.dead_spins, 1);
        assert_eq!(stats.spins, 1);
        assert_eq!(stats.tier_counts, [0; TIER_COUNT]);
    }

    #[test]
    fn test_triggered_spin_is_not_dead() {
        let mut stats = SpinStats::new();
        stats.record(&outcome(0.0, Some(TriggerTier::X10), 0.0), 1.0);
        assert_eq!(stats.dead_spins, 0);
        assert_eq!(stats.triggers, 1);
        assert_eq!(stats.trigger_count(TriggerTier::X10), 1);
        assert_eq!(stats.free_spins, 10);
        assert_eq!(stats.free_total_batches, 2);
    }

    #[test]
    fn test_record_classifies_tiers_and_bins() {
        let mut stats = SpinStats::new();
        // 2.5 free win × 100 + 0.5 base = 250.5 on a 0.25 stake → ratio 1002
        stats.record(&outcome(0.5, Some(TriggerTier::X100), 2.5), 0.25);
        assert_eq!(stats.tier_count(WinTier::Jojo), 1);
        assert_eq!(stats.high_win_bins[0], 1);
        assert_relative_eq!(stats.max_spin_win, 250.5);
        assert_relative_eq!(stats.ratio_sum, 1002.0);

        // Exactly 20× is big
        stats.record(&outcome(5.0, None, 0.0), 0.25);
        assert_eq!(stats.tier_count(WinTier::Big), 1);
        assert_eq!(stats.high_win_bins.iter().sum::<u64>(), 1);
        assert_relative_eq!(stats.max_spin_win, 250.5);
    }

    fn sample(seed: u64) -> SpinStats {
        let mut stats = SpinStats::new();
        for i in 0..20u64 {
            let k = (seed * 31 + i * 17) % 11;
            let trigger = match k {
                0 => Some(TriggerTier::X10),
                1 => Some(TriggerTier::X50),
                2 => Some(TriggerTier::X100),
                _ => None,
            };
            stats.record(&outcome(k as f64 * 0.5, trigger, k as f64), 1.0);
        }
        stats
    }

    #[test]
    fn test_merge_commutative_and_associative() {
        let (a, b, c) = (sample(1), sample(2), sample(3));

        let ab_c = a.clone().merged(b.clone()).merged(c.clone());
        let a_bc = a.clone().merged(b.clone().merged(c.clone()));
        let c_b_a = c.clone().merged(b.clone()).merged(a.clone());

        assert_eq!(ab_c.spins, 60);
        assert_eq!(ab_c.triggers, a_bc.triggers);
        assert_eq!(ab_c.tier_counts, c_b_a.tier_counts);
        assert_eq!(ab_c.high_win_bins, c_b_a.high_win_bins);
        assert_eq!(ab_c.max_spin_win, c_b_a.max_spin_win);
        // Sums of small integers and halves are exact in f64
        assert_eq!(ab_c, a_bc);
        assert_eq!(ab_c, c_b_a);
        assert_eq!(SpinStats::merge_all([&a, &b, &c]), ab_c);
    }

    #[test]
    fn test_merge_identity() {
        let a = sample(9);
        assert_eq!(a.clone().merged(SpinStats::default()), a);
        assert_eq!(SpinStats::default().merged(a.clone()), a);
    }

    #[test]
    fn test_derived_sentinels_without_triggers() {
        let mut stats = SpinStats::new();
        for _ in 0..4 {
            stats.record(&outcome(0.0, None, 0.0), 1.0);
        }
        assert_eq!(stats.retrigger_rate(), 0.0);
        assert_eq!(stats.avg_free_game_length(), None);
        assert_eq!(stats.zero_batch_share(), 0.0);
        assert_eq!(stats.one_in(stats.triggers), None);
        assert_eq!(stats.one_in(2), Some(2.0));
        assert_eq!(SpinStats::default().rtp(1.0), 0.0);
    }

    #[test]
    fn test_rtp_split() {
        let mut stats = SpinStats::new();
        stats.record(&outcome(1.0, Some(TriggerTier::X10), 0.2), 2.0);
        stats.record(&outcome(0.0, None, 0.0), 2.0);
        assert_relative_eq!(stats.total_bet(2.0), 4.0);
        assert_relative_eq!(stats.base_rtp(2.0), 0.25);
        assert_relative_eq!(stats.free_rtp(2.0), 0.5);
        assert_relative_eq!(stats.rtp(2.0), 0.75);
        assert_relative_eq!(stats.estimate().mean, 0.75);
        assert_eq!(stats.avg_free_game_length(), Some(10.0));
        assert_relative_eq!(stats.retrigger_rate(), 0.1);
    }
}
