//! Scatter trigger decision

use serde::{Deserialize, Serialize};

/// Scatters needed to enter the free game from the base game
pub const TRIGGER_SCATTERS: u8 = 3;

/// Free game multiplier tier, locked by the triggering base spin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerTier {
    /// 3 scatters
    X10,
    /// 4 scatters
    X50,
    /// 5 or more scatters
    X100,
}

impl TriggerTier {
    /// All tiers, lowest first
    pub const ALL: [TriggerTier; 3] = [TriggerTier::X10, TriggerTier::X50, TriggerTier::X100];

    /// Tier for a base-game scatter count; `None` below three
    pub fn from_scatter_count(count: u8) -> Option<Self> {
        match count {
            0..=2 => None,
            3 => Some(Self::X10),
            4 => Some(Self::X50),
            _ => Some(Self::X100),
        }
    }

    /// Win multiplier applied to the whole free game run
    pub fn multiplier(self) -> f64 {
        match self {
            Self::X10 => 10.0,
            Self::X50 => 50.0,
            Self::X100 => 100.0,
        }
    }

    /// Stable index for per-tier counters
    pub fn index(self) -> usize {
        match self {
            Self::X10 => 0,
            Self::X50 => 1,
            Self::X100 => 2,
        }
    }

    /// Short label used in reports
    pub fn label(self) -> &'static str {
        match self {
            Self::X10 => "x10 (3S)",
            Self::X50 => "x50 (4S)",
            Self::X100 => "x100 (5S)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_thresholds() {
        assert_eq!(TriggerTier::from_scatter_count(0), None);
        assert_eq!(TriggerTier::from_scatter_count(2), None);
        assert_eq!(TriggerTier::from_scatter_count(3), Some(TriggerTier::X10));
        assert_eq!(TriggerTier::from_scatter_count(4), Some(TriggerTier::X50));
        assert_eq!(TriggerTier::from_scatter_count(5), Some(TriggerTier::X100));
        assert_eq!(TriggerTier::from_scatter_count(9), Some(TriggerTier::X100));
    }

    #[test]
    fn test_multipliers() {
        let mults: Vec<f64> = TriggerTier::ALL.iter().map(|t| t.multiplier()).collect();
        assert_eq!(mults, vec![10.0, 50.0, 100.0]);
    }
}
