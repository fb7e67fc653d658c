pub mod formatter;
pub mod storage;

pub use formatter::{
    format_alerts, format_breakdown, format_cohort_table, format_cohort_tsv, format_evaluation,
    format_evaluation_tsv, format_score, format_score_table, format_summary, should_use_colors,
};
pub use storage::{save_json, ScoreRecord};
