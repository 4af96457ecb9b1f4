//! Search-term health scoring for sponsored-ads exports.
//!
//! The core is four pure operations: [`validate_headers`], [`derive_row`],
//! [`aggregate_campaigns`] and [`compute_overall_score`]. Table loading and
//! report writing sit around it in [`input`] and [`pipeline::stage7_report`].

pub mod config;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use model::campaign::CampaignAggregate;
pub use model::row::{CellValue, RawRow, Row};
pub use model::score::{ScoreBreakdown, ScoreLabel, ScoreResult};
pub use model::thresholds::{Normalization, ScoringProfile, Thresholds, Weights};
pub use pipeline::stage1_headers::{REQUIRED_COLUMNS, SchemaError, validate_headers};
pub use pipeline::stage2_coerce::coerce_number;
pub use pipeline::stage3_derive::{derive_row, derive_rows};
pub use pipeline::stage5_campaigns::aggregate_campaigns;
pub use pipeline::stage6_score::{compute_overall_score, compute_overall_score_with};
