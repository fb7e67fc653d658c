pub mod alerts;
pub mod config;
pub mod domain;
pub mod engine;
pub mod summary;
pub mod validation;
pub mod weights;

pub use alerts::{compute_alerts, Alert, Severity};
pub use config::*;
pub use domain::{round_tenth, Domain, ScoreBand, ScoreVector};
pub use engine::{compute_scores, evaluate, score_domains, DomainScore, Evaluation};
pub use summary::{top_alerts, AlertSummary, DEFAULT_MAX_ALERTS};
pub use validation::validate_scoring;
pub use weights::WeightTable;
