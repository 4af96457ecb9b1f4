use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::model::thresholds::ScoringProfile;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in config {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid scoring profile:\n  - {}", .0.join("\n  - "))]
    Invalid(Vec<String>),
}

/// Loads a scoring profile from JSON. Omitted sections and fields keep their defaults.
pub fn load_profile(path: &Path) -> Result<ScoringProfile, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let profile: ScoringProfile =
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.display().to_string(),
            source,
        })?;
    tracing::debug!(path = %path.display(), "loaded scoring profile");
    Ok(profile)
}

/// Problems found in a profile. Errors reject the profile; warnings are advisory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileIssues {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Checks every field at once and reports all problems.
pub fn validate_profile(profile: &ScoringProfile) -> ProfileIssues {
    let mut issues = ProfileIssues::default();
    let t = &profile.thresholds;
    let w = &profile.weights;
    let n = &profile.normalization;

    let thresholds = [
        ("thresholds.target_acos", t.target_acos, 1.0),
        ("thresholds.min_ctr", t.min_ctr, 0.1),
        ("thresholds.min_cvr", t.min_cvr, 0.5),
        ("thresholds.zero_order_waste", t.zero_order_waste, 200.0),
    ];
    for (name, value, usual_max) in thresholds {
        if !value.is_finite() || value < 0.0 {
            issues
                .errors
                .push(format!("{name}: must be a non-negative number, got {value}"));
        } else if value > usual_max {
            issues
                .warnings
                .push(format!("{name}: {value} is above the usual range 0..={usual_max}"));
        }
    }

    let weights = [
        ("weights.efficiency", w.efficiency),
        ("weights.conversion", w.conversion),
        ("weights.relevance", w.relevance),
        ("weights.waste", w.waste),
    ];
    for (name, value) in weights {
        if !value.is_finite() || value < 0.0 {
            issues
                .errors
                .push(format!("{name}: must be a non-negative number, got {value}"));
        }
    }
    if (w.sum() - 1.0).abs() > 1e-6 {
        issues.warnings.push(format!(
            "weights sum to {:.4}, not 1.0; the score is no longer bounded to 0..=10",
            w.sum()
        ));
    }

    let m = n.efficiency_zero_at_multiplier;
    if m.is_nan() || m <= 1.0 {
        issues.errors.push(format!(
            "normalization.efficiency_zero_at_multiplier: must be greater than 1, got {m}"
        ));
    }
    for (name, value) in [
        ("normalization.ctr_good_multiplier", n.ctr_good_multiplier),
        ("normalization.cvr_good_multiplier", n.cvr_good_multiplier),
    ] {
        if !value.is_finite() || value <= 0.0 {
            issues
                .errors
                .push(format!("{name}: must be a positive number, got {value}"));
        }
    }
    if n.waste_good_share.is_nan()
        || n.waste_bad_share.is_nan()
        || n.waste_good_share >= n.waste_bad_share
    {
        issues.errors.push(format!(
            "normalization.waste_good_share ({}) must be below waste_bad_share ({})",
            n.waste_good_share, n.waste_bad_share
        ));
    }

    issues
}

/// Logs warnings and fails on errors.
pub fn check_profile(profile: &ScoringProfile) -> Result<(), ConfigError> {
    let issues = validate_profile(profile);
    for warning in &issues.warnings {
        tracing::warn!("{warning}");
    }
    if issues.errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Invalid(issues.errors))
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
