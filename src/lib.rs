//! Wellness scores and clinical alerts for patient intake questionnaires.
//!
//! Answers are parsed into a typed [`questionnaire::AnswerSet`], scored per
//! domain against a [`scoring::WeightTable`], and turned into ranked
//! alerts. [`cohort`] aggregates many submissions for a clinic overview.

pub mod cohort;
pub mod config;
pub mod input;
pub mod output;
pub mod questionnaire;
pub mod scoring;
pub mod stderr_buffer;
