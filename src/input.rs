use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};

use crate::cohort::Submission;
use crate::notice;

/// Read a JSON document from a file, or from stdin when the path is `-`.
pub fn read_json(path: &Path) -> Result<Value> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read answers from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// Load one answer map (`{"sono_horas": "6-7h", ...}`).
///
/// A full submission object is accepted too; its `answers` field is used.
pub fn load_answers(path: &Path) -> Result<Map<String, Value>> {
    match read_json(path)? {
        Value::Object(mut map) => {
            if map.contains_key("id") {
                if let Some(Value::Object(answers)) = map.remove("answers") {
                    return Ok(answers);
                }
            }
            Ok(map)
        }
        other => bail!(
            "Expected a JSON object of answers in {}, found {}",
            path.display(),
            json_kind(&other)
        ),
    }
}

/// Load submissions from a file holding one submission or an array of them.
///
/// Entries that do not parse are skipped with a notice rather than
/// failing the whole file.
pub fn load_submissions(path: &Path) -> Result<Vec<Submission>> {
    let entries = match read_json(path)? {
        Value::Array(entries) => entries,
        entry @ Value::Object(_) => vec![entry],
        other => bail!(
            "Expected a submission or a list of submissions in {}, found {}",
            path.display(),
            json_kind(&other)
        ),
    };

    let mut submissions = Vec::with_capacity(entries.len());
    for (i, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Submission>(entry) {
            Ok(submission) => submissions.push(submission),
            Err(e) => notice!("{}: skipping entry {}: {}", path.display(), i, e),
        }
    }
    Ok(submissions)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = env::temp_dir().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_answers_map() {
        let path = write_temp("intake_scores_test_answers.json", r#"{"sono_horas": "6-7h"}"#);
        let answers = load_answers(&path).unwrap();
        assert_eq!(answers["sono_horas"], "6-7h");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_answers_from_submission() {
        let path = write_temp(
            "intake_scores_test_answers_submission.json",
            r#"{"id": "s1", "answers": {"energia_frio": "Normal"}}"#,
        );
        let answers = load_answers(&path).unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers["energia_frio"], "Normal");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_answers_rejects_array() {
        let path = write_temp("intake_scores_test_answers_array.json", "[1, 2]");
        let err = load_answers(&path).unwrap_err();
        assert!(err.to_string().contains("an array"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_answers_missing_file() {
        let path = env::temp_dir().join("intake_scores_test_missing.json");
        let _ = fs::remove_file(&path);
        assert!(load_answers(&path).is_err());
    }

    #[test]
    fn test_load_submissions_skips_bad_entries() {
        let path = write_temp(
            "intake_scores_test_submissions.json",
            r#"[{"id": "a", "answers": {}}, {"answers": {}}, {"id": "c", "status": "draft"}]"#,
        );
        let submissions = load_submissions(&path).unwrap();
        let ids: Vec<_> = submissions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_single_submission() {
        let path = write_temp("intake_scores_test_single_submission.json", r#"{"id": "only"}"#);
        let submissions = load_submissions(&path).unwrap();
        assert_eq!(submissions.len(), 1);
        let _ = fs::remove_file(&path);
    }
}
