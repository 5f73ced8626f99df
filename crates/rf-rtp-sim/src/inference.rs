//! Streaming mean/variance inference on the per-spin RTP

use serde::{Deserialize, Serialize};

/// Two-sided 95% normal quantile
pub const Z_95: f64 = 1.96;

/// Floor applied to the standard error when computing a z-score
const MIN_STD_ERROR: f64 = 1e-12;

/// Sample mean, variance and 95% confidence interval of per-spin RTP
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RtpEstimate {
    pub samples: u64,
    pub mean: f64,
    /// Population variance (E[x²] − E[x]²), clamped at zero
    pub variance: f64,
    pub std_error: f64,
    pub ci_low: f64,
    pub ci_high: f64,
}

impl RtpEstimate {
    /// Build from streaming sums. Zero samples yield an all-zero estimate.
    pub fn from_sums(sum: f64, sum_sq: f64, samples: u64) -> Self {
        if samples == 0 {
            return Self {
                samples,
                mean: 0.0,
                variance: 0.0,
                std_error: 0.0,
                ci_low: 0.0,
                ci_high: 0.0,
            };
        }

        let n = samples as f64;
        let mean = sum / n;
        // Rounding can push this slightly negative
        let variance = (sum_sq / n - mean * mean).max(0.0);
        let std_error = (variance / n).sqrt();

        Self {
            samples,
            mean,
            variance,
            std_error,
            ci_low: mean - Z_95 * std_error,
            ci_high: mean + Z_95 * std_error,
        }
    }

    /// Distance of a reference RTP from the sample mean in standard errors
    pub fn z_score(&self, reference: f64) -> f64 {
        let se = if self.std_error > 0.0 {
            self.std_error
        } else {
            MIN_STD_ERROR
        };
        (reference - self.mean) / se
    }

    /// Whether a reference RTP lies inside the 95% interval
    pub fn contains(&self, reference: f64) -> bool {
        reference >= self.ci_low && reference <= self.ci_high
    }
}

/// Comparison of the estimate against an externally computed RTP
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCheck {
    pub reference: f64,
    pub z_score: f64,
    pub within_ci: bool,
}

impl ReferenceCheck {
    pub fn new(estimate: &RtpEstimate, reference: f64) -> Self {
        Self {
            reference,
            z_score: estimate.z_score(reference),
            within_ci: estimate.contains(reference),
        }
    }
}
