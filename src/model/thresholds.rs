use serde::{Deserialize, Serialize};

/// Row classification cutoffs, captured once per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    #[serde(alias = "targetACOS")]
    pub target_acos: f64,
    #[serde(alias = "minCTR")]
    pub min_ctr: f64,
    #[serde(alias = "minCVR")]
    pub min_cvr: f64,
    #[serde(alias = "zeroOrderWaste")]
    pub zero_order_waste: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            target_acos: 0.35,
            min_ctr: 0.003,
            min_cvr: 0.08,
            zero_order_waste: 25.0,
        }
    }
}

/// Relative importance of the four score components.
///
/// Expected to be non-negative and to sum to 1.0; neither is enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Weights {
    pub efficiency: f64,
    pub conversion: f64,
    pub relevance: f64,
    pub waste: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.efficiency + self.conversion + self.relevance + self.waste
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            efficiency: 0.35,
            conversion: 0.25,
            relevance: 0.15,
            waste: 0.25,
        }
    }
}

/// Anchors of the sub-score curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Normalization {
    /// Efficiency is 10 at target ACOS and 0 at `target * multiplier`.
    #[serde(alias = "efficiencyZeroAtMultiplier")]
    pub efficiency_zero_at_multiplier: f64,
    /// Relevance reaches 10 at `min_ctr * multiplier`.
    #[serde(alias = "ctrGoodMultiplier")]
    pub ctr_good_multiplier: f64,
    /// Conversion reaches 10 at `min_cvr * multiplier`.
    #[serde(alias = "cvrGoodMultiplier")]
    pub cvr_good_multiplier: f64,
    #[serde(alias = "wasteGoodShare")]
    pub waste_good_share: f64,
    #[serde(alias = "wasteBadShare")]
    pub waste_bad_share: f64,
}

impl Default for Normalization {
    fn default() -> Self {
        Self {
            efficiency_zero_at_multiplier: 2.0,
            ctr_good_multiplier: 1.5,
            cvr_good_multiplier: 1.5,
            waste_good_share: 0.10,
            waste_bad_share: 0.50,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringProfile {
    pub thresholds: Thresholds,
    pub weights: Weights,
    pub normalization: Normalization,
}

impl ScoringProfile {
    pub fn new(thresholds: Thresholds, weights: Weights) -> Self {
        Self {
            thresholds,
            weights,
            normalization: Normalization::default(),
        }
    }
}
