use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

use crate::scoring::{AlertSummary, Evaluation};

/// Version written into every saved score record.
pub const RECORD_VERSION: u32 = 1;

/// What `score --output` writes: the evaluation plus when and its summary.
#[derive(Debug, Serialize)]
pub struct ScoreRecord<'a> {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub summary: AlertSummary,
    #[serde(flatten)]
    pub evaluation: &'a Evaluation,
}

impl<'a> ScoreRecord<'a> {
    pub fn new(evaluation: &'a Evaluation) -> Self {
        Self {
            version: RECORD_VERSION,
            generated_at: Utc::now(),
            summary: AlertSummary::from_alerts(&evaluation.alerts),
            evaluation,
        }
    }
}

/// Save any serializable value as pretty JSON, atomically.
///
/// Creates the parent directory if needed. Readers never observe a
/// partially written file.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, value)
        .with_context(|| format!("Failed to serialize JSON for {}", path.display()))?;

    file.commit()
        .with_context(|| format!("Failed to save {}", path.display()))?;

    Ok(())
}
