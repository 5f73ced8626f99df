//! Simulation run configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Result, SimError};

/// Spins between two publishes to the shared progress counter
pub const DEFAULT_PROGRESS_BATCH: u64 = 4096;

/// Configuration for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Total base game spins across all workers
    pub total_spins: u64,

    /// Stake per payline
    pub bet_per_line: f64,

    /// Worker threads. 0 does not mean a single worker: it selects one
    /// worker per hardware thread via `num_cpus`. Only a detected count of
    /// 0 is clamped up to 1 (see [`SimConfig::resolved_workers`]).
    pub workers: usize,

    /// Externally computed RTP to check against; negative values disable it
    pub reference_rtp: Option<f64>,

    /// Base seed (None = derived from the clock)
    pub seed: Option<u64>,

    /// Spins a worker counts locally before one atomic publish
    pub progress_batch: u64,

    /// Progress report period in milliseconds (0 = no reporter)
    pub progress_interval_ms: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_spins: 1_000_000_000,
            bet_per_line: 0.04,
            workers: 0,
            reference_rtp: Some(0.965984),
            seed: None,
            progress_batch: DEFAULT_PROGRESS_BATCH,
            progress_interval_ms: 1000,
        }
    }
}

impl SimConfig {
    /// Small seeded run without a reporter, for tests and smoke checks
    pub fn quick(total_spins: u64, seed: u64) -> Self {
        Self {
            total_spins,
            seed: Some(seed),
            reference_rtp: None,
            progress_interval_ms: 0,
            ..Default::default()
        }
    }

    /// Builder: set total spins
    pub fn with_spins(mut self, n: u64) -> Self {
        self.total_spins = n;
        self
    }

    /// Builder: set bet per line
    pub fn with_bet_per_line(mut self, bet: f64) -> Self {
        self.bet_per_line = bet;
        self
    }

    /// Builder: set worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Builder: set seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder: set or clear the reference RTP (negative clears it)
    pub fn with_reference_rtp(mut self, rtp: Option<f64>) -> Self {
        self.reference_rtp = rtp.filter(|r| *r >= 0.0);
        self
    }

    /// Builder: set progress report period
    pub fn with_progress_interval_ms(mut self, ms: u64) -> Self {
        self.progress_interval_ms = ms;
        self
    }

    /// Load a JSON or YAML config file (by extension)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => {
                serde_yml::from_str(&text).map_err(|e| SimError::Parse(e.to_string()))?
            }
            _ => serde_json::from_str(&text).map_err(|e| SimError::Parse(e.to_string()))?,
        };
        let reference = config.reference_rtp;
        Ok(config.with_reference_rtp(reference))
    }

    /// Reject configurations that cannot produce a meaningful run
    pub fn validate(&self) -> Result<()> {
        if self.total_spins == 0 {
            return Err(SimError::InvalidConfig("total_spins must be positive".into()));
        }
        if !(self.bet_per_line > 0.0 && self.bet_per_line.is_finite()) {
            return Err(SimError::InvalidConfig(format!(
                "bet_per_line must be positive, got {}",
                self.bet_per_line
            )));
        }
        Ok(())
    }

    /// Worker count after auto-detection, never below one
    pub fn resolved_workers(&self) -> usize {
        let workers = if self.workers == 0 {
            num_cpus::get()
        } else {
            self.workers
        };
        if workers == 0 {
            log::warn!("worker count resolved to 0, clamping to 1");
        }
        workers.max(1)
    }

    /// Seed if set, otherwise nanoseconds since the epoch
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SimConfig::default();
        assert_eq!(config.total_spins, 1_000_000_000);
        assert_eq!(config.bet_per_line, 0.04);
        assert_eq!(config.progress_batch, 4096);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(SimConfig::default().with_spins(0).validate().is_err());
        assert!(SimConfig::default().with_bet_per_line(0.0).validate().is_err());
        assert!(SimConfig::default().with_bet_per_line(-1.0).validate().is_err());
        assert!(SimConfig::default().with_bet_per_line(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_workers_resolved() {
        assert_eq!(SimConfig::default().with_workers(3).resolved_workers(), 3);
        assert!(SimConfig::default().with_workers(0).resolved_workers() >= 1);
    }

    #[test]
    fn test_negative_reference_disables_check() {
        let config = SimConfig::default().with_reference_rtp(Some(-1.0));
        assert_eq!(config.reference_rtp, None);
        let config = SimConfig::default().with_reference_rtp(Some(0.95));
        assert_eq!(config.reference_rtp, Some(0.95));
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"total_spins": 5000, "workers": 2, "reference_rtp": -1.0}}"#).unwrap();
        let config = SimConfig::from_file(file.path()).unwrap();
        assert_eq!(config.total_spins, 5000);
        assert_eq!(config.workers, 2);
        assert_eq!(config.reference_rtp, None);
        assert_eq!(config.bet_per_line, 0.04);
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "total_spins: 200\nbet_per_line: 0.2\nseed: 42").unwrap();
        let config = SimConfig::from_file(file.path()).unwrap();
        assert_eq!(config.total_spins, 200);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.resolved_seed(), 42);
    }

    #[test]
    fn test_bad_file_is_parse_error() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(SimConfig::from_file(file.path()), Err(SimError::Parse(_))));
    }
}
