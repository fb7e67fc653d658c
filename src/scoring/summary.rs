use std::collections::BTreeSet;

use serde::Serialize;

use super::alerts::{Alert, Severity};
use super::domain::Domain;

/// Alert count the clinician panel shows before collapsing the rest.
pub const DEFAULT_MAX_ALERTS: usize = 5;

/// Counts for the "critical / moderate / stable" overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlertSummary {
    pub critical: usize,
    pub moderate: usize,
    /// Domains without any alert.
    pub stable: usize,
}

impl AlertSummary {
    pub fn from_alerts(alerts: &[Alert]) -> Self {
        let critical = alerts
            .iter()
            .filter(|a| a.severity == Severity::Critical)
            .count();
        let moderate = alerts.len() - critical;
        let alerted: BTreeSet<Domain> = alerts.iter().map(|a| a.domain).collect();
        Self {
            critical,
            moderate,
            stable: Domain::ALL.len() - alerted.len(),
        }
    }
}

/// The first `max` alerts and how many were left out.
pub fn top_alerts(alerts: &[Alert], max: usize) -> (&[Alert], usize) {
    let shown = alerts.len().min(max);
    (&alerts[..shown], alerts.len() - shown)
}
