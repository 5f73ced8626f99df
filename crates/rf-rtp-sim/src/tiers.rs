//! Win tiers and the high-win histogram
//!
//! Both classify a spin by its win ratio (spin total / total stake). Tier
//! thresholds and histogram edges are inclusive lower bounds.

use serde::{Deserialize, Serialize};

/// Number of win tiers
pub const TIER_COUNT: usize = 6;

/// Lower bounds of the high-win histogram bins, ascending
pub const HIGH_WIN_EDGES: [f64; 19] = [
    1000.0, 2000.0, 3000.0, 4000.0, 5000.0, 6000.0, 7000.0, 8000.0, 9000.0, 10000.0, 11000.0,
    12000.0, 13000.0, 14000.0, 15000.0, 20000.0, 25000.0, 30000.0, 40000.0,
];

/// Number of high-win bins
pub const HIGH_WIN_BINS: usize = HIGH_WIN_EDGES.len();

/// Big-win classification by ratio to the spin stake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinTier {
    Big,
    Mega,
    Super,
    Holy,
    Jumbo,
    Jojo,
}

impl WinTier {
    /// All tiers, lowest first
    pub const ALL: [WinTier; TIER_COUNT] = [
        WinTier::Big,
        WinTier::Mega,
        WinTier::Super,
        WinTier::Holy,
        WinTier::Jumbo,
        WinTier::Jojo,
    ];

    /// Highest tier whose threshold the ratio meets
    pub fn from_ratio(ratio: f64) -> Option<Self> {
        match ratio {
            r if r >= 1000.0 => Some(Self::Jojo),
            r if r >= 500.0 => Some(Self::Jumbo),
            r if r >= 300.0 => Some(Self::Holy),
            r if r >= 100.0 => Some(Self::Super),
            r if r >= 60.0 => Some(Self::Mega),
            r if r >= 20.0 => Some(Self::Big),
            _ => None,
        }
    }

    /// Inclusive lower bound in stake multiples
    pub fn threshold(&self) -> f64 {
        match self {
            Self::Big => 20.0,
            Self::Mega => 60.0,
            Self::Super => 100.0,
            Self::Holy => 300.0,
            Self::Jumbo => 500.0,
            Self::Jojo => 1000.0,
        }
    }

    /// Get tier index (for ordering)
    pub fn index(&self) -> usize {
        match self {
            Self::Big => 0,
            Self::Mega => 1,
            Self::Super => 2,
            Self::Holy => 3,
            Self::Jumbo => 4,
            Self::Jojo => 5,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Big => "Big Win",
            Self::Mega => "Mega Win",
            Self::Super => "Super Win",
            Self::Holy => "Holy Win",
            Self::Jumbo => "Jumbo Win",
            Self::Jojo => "Jojo Win",
        }
    }
}

/// High-win bin for a ratio: the largest edge not above it, scanning from
/// the top. `None` below the first edge.
#[inline]
pub fn high_win_bin(ratio: f64) -> Option<usize> {
    if ratio < HIGH_WIN_EDGES[0] {
        return None;
    }
    HIGH_WIN_EDGES.iter().rposition(|&edge| ratio >= edge)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries_inclusive() {
        assert_eq!(WinTier::from_ratio(20.0), Some(WinTier::Big));
        assert_eq!(WinTier::from_ratio(19.999999), None);
        assert_eq!(WinTier::from_ratio(59.99), Some(WinTier::Big));
        assert_eq!(WinTier::from_ratio(60.0), Some(WinTier::Mega));
        assert_eq!(WinTier::from_ratio(100.0), Some(WinTier::Super));
        assert_eq!(WinTier::from_ratio(300.0), Some(WinTier::Holy));
        assert_eq!(WinTier::from_ratio(500.0), Some(WinTier::Jumbo));
        assert_eq!(WinTier::from_ratio(1000.0), Some(WinTier::Jojo));
        assert_eq!(WinTier::from_ratio(1.0e9), Some(WinTier::Jojo));
        assert_eq!(WinTier::from_ratio(0.0), None);
    }

    #[test]
    fn test_tier_thresholds_match_classification() {
        for tier in WinTier::ALL {
            assert_eq!(WinTier::from_ratio(tier.threshold()), Some(tier));
            assert_eq!(WinTier::ALL[tier.index()], tier);
        }
    }

    #[test]
    fn test_high_win_bin_edges() {
        assert_eq!(high_win_bin(999.999), None);
        assert_eq!(high_win_bin(1000.0), Some(0));
        assert_eq!(high_win_bin(1999.0), Some(0));
        assert_eq!(high_win_bin(2000.0), Some(1));
        assert_eq!(high_win_bin(15000.0), Some(14));
        assert_eq!(high_win_bin(19999.0), Some(14));
        assert_eq!(high_win_bin(40000.0), Some(18));
        assert_eq!(high_win_bin(1.0e7), Some(18));
    }

    #[test]
    fn test_high_win_bin_matches_largest_edge_not_above() {
        let reference = |ratio: f64| -> Option<usize> {
            let mut found = None;
            for (i, &edge) in HIGH_WIN_EDGES.iter().enumerate() {
                if edge <= ratio {
                    found = Some(i);
                }
            }
            found
        };
        let mut ratio = 0.0;
        while ratio < 50_000.0 {
            assert_eq!(high_win_bin(ratio), reference(ratio), "ratio {ratio}");
            ratio += 250.0;
        }
        for &edge in &HIGH_WIN_EDGES {
            assert_eq!(high_win_bin(edge), reference(edge));
            assert_eq!(high_win_bin(edge - 1e-9), reference(edge - 1e-9));
        }
    }
}
