//! Simulation report

use std::fmt::Write as _;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use rf_slot_math::{LINE_COUNT, TriggerTier};

use crate::config::SimConfig;
use crate::inference::{ReferenceCheck, RtpEstimate};
use crate::stats::SpinStats;
use crate::tiers::{HIGH_WIN_EDGES, WinTier};

/// Merged result of a run plus the metrics derived from it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    pub config: SimConfig,
    pub workers: usize,
    pub seed: u64,
    pub elapsed_secs: f64,
    pub stats: SpinStats,
    pub summary: ReportSummary,
}

/// Ratios and inference computed from the raw statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub spin_bet: f64,
    pub total_bet: f64,
    pub total_win: f64,
    pub base_rtp: f64,
    pub free_rtp: f64,
    pub rtp: f64,
    pub max_win_ratio: f64,
    pub trigger_rate: f64,
    pub retrigger_rate: f64,
    pub avg_free_game_length: Option<f64>,
    pub zero_batch_share: f64,
    pub dead_spin_share: f64,
    pub estimate: RtpEstimate,
    pub reference: Option<ReferenceCheck>,
}

impl SimulationReport {
    pub fn new(
        config: SimConfig,
        workers: usize,
        seed: u64,
        elapsed: Duration,
        stats: SpinStats,
    ) -> Self {
        let spin_bet = LINE_COUNT as f64 * config.bet_per_line;
        let estimate = stats.estimate();
        let summary = ReportSummary {
            spin_bet,
            total_bet: stats.total_bet(spin_bet),
            total_win: stats.total_win(),
            base_rtp: stats.base_rtp(spin_bet),
            free_rtp: stats.free_rtp(spin_bet),
            rtp: stats.rtp(spin_bet),
            max_win_ratio: if spin_bet > 0.0 { stats.max_spin_win / spin_bet } else { 0.0 },
            trigger_rate: stats.trigger_rate(),
            retrigger_rate: stats.retrigger_rate(),
            avg_free_game_length: stats.avg_free_game_length(),
            zero_batch_share: stats.zero_batch_share(),
            dead_spin_share: stats.dead_spin_share(),
            estimate,
            reference: config
                .reference_rtp
                .map(|r| ReferenceCheck::new(&estimate, r)),
        };

        Self {
            config,
            workers,
            seed,
            elapsed_secs: elapsed.as_secs_f64(),
            stats,
            summary,
        }
    }

    fn one_in(&self, count: u64) -> String {
        match self.stats.one_in(count) {
            Some(n) => format!("(about 1 in {} spins)", n.round() as u64),
            None => "(--)".to_string(),
        }
    }

    /// Generate text report
    pub fn to_text(&self) -> String {
        let s = &self.stats;
        let m = &self.summary;
        let mut out = String::new();

        let _ = writeln!(
            out,
            "=== Monte Carlo | workers={} | spins={} | lines={} | bet/line={:.2} ===",
            self.workers, self.config.total_spins, LINE_COUNT, self.config.bet_per_line
        );
        let _ = writeln!(out, "{:<38}: {:.2}", "Total bet", m.total_bet);
        let _ = writeln!(out, "{:<38}: {:.2}", "Total win", m.total_win);
        let _ = writeln!(
            out,
            "{:<38}: {:.2} (x{:.2})",
            "Max single-spin win", s.max_spin_win, m.max_win_ratio
        );
        let _ = writeln!(out, "{:<38}: {:.6}", "Base game RTP", m.base_rtp);
        let _ = writeln!(out, "{:<38}: {:.6}", "Free game RTP", m.free_rtp);
        let _ = writeln!(out, "{:<38}: {:.6}", "Total RTP", m.rtp);

        let _ = writeln!(
            out,
            "{:<38}: {} (rate {:.6}) {}",
            "Free game triggers",
            s.triggers,
            m.trigger_rate,
            self.one_in(s.triggers)
        );
        for tier in TriggerTier::ALL {
            let count = s.trigger_count(tier);
            let _ = writeln!(
                out,
                "  {:<36}: {} {}",
                tier.label(),
                count,
                self.one_in(count)
            );
        }
        let _ = writeln!(
            out,
            "{:<38}: {} (rate {:.6})",
            "Free game retriggers", s.retriggers, m.retrigger_rate
        );
        if let Some(avg) = m.avg_free_game_length {
            let _ = writeln!(out, "{:<38}: {:.3}", "Average free game length", avg);
        }
        let _ = writeln!(
            out,
            "{:<38}: {} / {} (share {:.6})",
            "Free game zero-win batches", s.free_zero_batches, s.free_total_batches, m.zero_batch_share
        );
        let _ = writeln!(
            out,
            "{:<38}: {} (share {:.6})",
            "Base game dead spins", s.dead_spins, m.dead_spin_share
        );

        out.push_str("\nWin tiers\n");
        for tier in WinTier::ALL {
            let count = s.tier_count(tier);
            let label = format!("{} (>={}x bet)", tier.display_name(), tier.threshold());
            let _ = writeln!(out, "{:<38}: {} {}", label, count, self.one_in(count));
        }

        out.push_str("\nWins of 1000x and above\n");
        for (edge, &count) in HIGH_WIN_EDGES.iter().zip(&s.high_win_bins) {
            let _ = writeln!(
                out,
                ">={:>5}x bet    : {} {}",
                *edge as u64,
                count,
                self.one_in(count)
            );
        }

        let e = &m.estimate;
        out.push_str("\n=== Inference (per-spin RTP) ===\n");
        let _ = writeln!(out, "{:<38}: {}", "Samples n", e.samples);
        let _ = writeln!(out, "{:<38}: {:.6}", "Mean", e.mean);
        let _ = writeln!(out, "{:<38}: {:.6}", "Variance", e.variance);
        let _ = writeln!(out, "{:<38}: {:.6}", "Standard error", e.std_error);
        let _ = writeln!(
            out,
            "{:<38}: [{:.6}, {:.6}]",
            "95% confidence interval", e.ci_low, e.ci_high
        );

        if let Some(check) = &m.reference {
            let _ = writeln!(out, "{:<38}: {:.6}", "Reference RTP", check.reference);
            let _ = writeln!(out, "{:<38}: {:.2}", "z-score vs sample mean", check.z_score);
            out.push_str(if check.within_ci {
                "Result: reference RTP lies inside the 95% CI.\n"
            } else {
                "Result: reference RTP lies outside the 95% CI, check the model.\n"
            });
        }

        let _ = writeln!(out, "\nElapsed {:.2}s, seed {}", self.elapsed_secs, self.seed);
        out
    }

    /// Generate JSON report
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::SpinOutcome;

    fn report(reference: Option<f64>) -> SimulationReport {
        let mut stats = SpinStats::new();
        stats.record(
            &SpinOutcome {
                base_win: 0.4,
                ..SpinOutcome::default()
            },
            1.0,
        );
        stats.record(&SpinOutcome::default(), 1.0);
        let config = SimConfig::quick(2, 1).with_reference_rtp(reference);
        SimulationReport::new(config, 1, 1, Duration::from_millis(5), stats)
    }

    #[test]
    fn test_text_report_sections() {
        let text = report(Some(0.2)).to_text();
        assert!(text.contains("Total RTP"));
        assert!(text.contains("Jojo Win"));
        assert!(text.contains(">=40000x bet"));
        assert!(text.contains("Reference RTP"));
        // No triggers: the average length line is omitted
        assert!(!text.contains("Average free game length"));
    }

    #[test]
    fn test_reference_skipped_when_absent() {
        let r = report(None);
        assert!(r.summary.reference.is_none());
        assert!(!r.to_text().contains("Reference RTP"));
    }

    #[test]
    fn test_json_roundtrip_fields() {
        let json = report(None).to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["stats"]["spins"], 2);
        assert_eq!(value["stats"]["dead_spins"], 1);
        assert_eq!(value["summary"]["avg_free_game_length"], serde_json::Value::Null);
    }
}
