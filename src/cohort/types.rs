use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Draft,
    #[default]
    Submitted,
    Archived,
}

/// One stored questionnaire submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    #[serde(default)]
    pub patient_id: Option<String>,
    #[serde(default)]
    pub status: SubmissionStatus,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub answers: Map<String, Value>,
}

impl Submission {
    /// Whether this submission belongs in a cohort starting at `since`.
    /// Without a window every submitted entry counts; with one, entries
    /// need a timestamp inside it.
    pub fn is_within(&self, since: Option<DateTime<Utc>>) -> bool {
        match (since, self.submitted_at) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(start), Some(at)) => at >= start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_minimal_submission_parse() {
        let submission: Submission = serde_json::from_str(r#"{"id": "s1"}"#).unwrap();
        assert_eq!(submission.status, SubmissionStatus::Submitted);
        assert!(submission.submitted_at.is_none());
        assert!(submission.answers.is_empty());
    }

    #[test]
    fn test_full_submission_parse() {
        let json = r#"{
            "id": "s2",
            "patient_id": "p9",
            "status": "draft",
            "submitted_at": "2026-10-01T12:00:00Z",
            "answers": {"sono_horas": "6-7h"}
        }"#;
        let submission: Submission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.status, SubmissionStatus::Draft);
        assert_eq!(submission.patient_id.as_deref(), Some("p9"));
        assert_eq!(submission.answers["sono_horas"], "6-7h");
    }

    #[test]
    fn test_window() {
        let now = Utc::now();
        let submission = Submission {
            id: "s".to_string(),
            patient_id: None,
            status: SubmissionStatus::Submitted,
            submitted_at: Some(now - Duration::days(10)),
            answers: Map::new(),
        };
        assert!(submission.is_within(None));
        assert!(submission.is_within(Some(now - Duration::days(30))));
        assert!(!submission.is_within(Some(now - Duration::days(7))));

        let undated = Submission {
            submitted_at: None,
            ..submission
        };
        assert!(undated.is_within(None));
        assert!(!undated.is_within(Some(now - Duration::days(30))));
    }
}
