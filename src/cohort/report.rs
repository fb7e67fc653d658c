use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::types::{Submission, SubmissionStatus};
use crate::scoring::{
    evaluate, round_tenth, Alert, Domain, Evaluation, ScoreBand, Severity, WeightTable,
};

/// Why a submission was left out of a cohort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NotSubmitted,
    OutsideWindow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedSubmission {
    pub id: String,
    pub reason: SkipReason,
}

/// Clinic-wide view of one domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainAggregate {
    pub domain: Domain,
    /// Mean score, one decimal. `None` for an empty cohort.
    pub mean: Option<f64>,
    pub band: Option<ScoreBand>,
    /// Submissions with an alert in this domain.
    pub alerts: usize,
    /// `alerts` as a percentage of evaluated submissions.
    pub prevalence: f64,
}

/// Problems listed in the headline summary.
pub const HEADLINE_PROBLEMS: usize = 3;

/// An alerted domain ranked by how many submissions it affects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProblemRank {
    pub domain: Domain,
    /// Most severe alert seen for this domain.
    pub severity: Severity,
    pub alerts: usize,
    pub prevalence: f64,
    /// Mean score of the alerted submissions, one decimal.
    pub mean_alert_score: f64,
}

/// Two domains alerting in the same submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoOccurrence {
    pub domains: [Domain; 2],
    pub count: usize,
    /// `count` as a percentage of submissions alerting in either domain.
    pub share: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Worsening,
    Steady,
}

impl TrendDirection {
    pub fn label(self) -> &'static str {
        match self {
            TrendDirection::Improving => "melhora",
            TrendDirection::Worsening => "piora",
            TrendDirection::Steady => "estável",
        }
    }
}

/// Overall mean of this period against the previous one of equal length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trend {
    pub previous_evaluated: usize,
    pub previous_mean: f64,
    pub current_mean: f64,
    /// `current_mean - previous_mean`, one decimal.
    pub delta: f64,
    pub direction: TrendDirection,
}

impl Trend {
    fn between(previous: &[Evaluation], current: &[Evaluation]) -> Option<Self> {
        let previous_mean = overall_mean(previous)?;
        let current_mean = overall_mean(current)?;
        let delta = round_tenth(current_mean - previous_mean);
        let direction = if delta > 0.0 {
            TrendDirection::Improving
        } else if delta < 0.0 {
            TrendDirection::Worsening
        } else {
            TrendDirection::Steady
        };
        Some(Self {
            previous_evaluated: previous.len(),
            previous_mean,
            current_mean,
            delta,
            direction,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortReport {
    pub evaluated: usize,
    pub skipped: Vec<SkippedSubmission>,
    pub domains: Vec<DomainAggregate>,
    /// Alerted domains, highest prevalence first, then domain order.
    pub ranking: Vec<ProblemRank>,
    pub with_critical: usize,
    pub critical_share: f64,
    pub co_occurrences: Vec<CoOccurrence>,
    /// Only set for a windowed report with submissions in both periods.
    pub trend: Option<Trend>,
    /// Answer issues across all evaluated submissions.
    pub issue_count: usize,
}

impl CohortReport {
    /// Evaluate and aggregate submissions.
    ///
    /// Only `submitted` entries count. With `since`, only entries
    /// submitted at or after it count, and the trend compares them with
    /// the period of the same length just before `since`.
    pub fn build(
        submissions: &[Submission],
        weights: &WeightTable,
        since: Option<DateTime<Utc>>,
    ) -> Self {
        Self::build_at(submissions, weights, since, Utc::now())
    }

    /// [`build`](Self::build) with an explicit current time.
    pub fn build_at(
        submissions: &[Submission],
        weights: &WeightTable,
        since: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        let mut skipped = Vec::new();
        let mut evaluations: Vec<Evaluation> = Vec::new();
        let mut previous: Vec<Evaluation> = Vec::new();
        let previous_start = since.map(|start| start - (now - start));

        for submission in submissions {
            if submission.status != SubmissionStatus::Submitted {
                skipped.push(SkippedSubmission {
                    id: submission.id.clone(),
                    reason: SkipReason::NotSubmitted,
                });
                continue;
            }
            if !submission.is_within(since) {
                if submission.is_within(previous_start) {
                    previous.push(evaluate(&submission.answers, weights));
                }
                skipped.push(SkippedSubmission {
                    id: submission.id.clone(),
                    reason: SkipReason::OutsideWindow,
                });
                continue;
            }
            evaluations.push(evaluate(&submission.answers, weights));
        }

        let mut report = Self::from_evaluations(&evaluations, skipped);
        if since.is_some() {
            report.trend = Trend::between(&previous, &evaluations);
        }
        report
    }

    pub fn from_evaluations(evaluations: &[Evaluation], skipped: Vec<SkippedSubmission>) -> Self {
        let evaluated = evaluations.len();

        let domains: Vec<DomainAggregate> = Domain::ALL
            .into_iter()
            .map(|domain| {
                let mean = if evaluated == 0 {
                    None
                } else {
                    let total: f64 = evaluations.iter().map(|e| e.scores.get(domain)).sum();
                    Some(round_tenth(total / evaluated as f64))
                };
                let alerts = evaluations
                    .iter()
                    .filter(|e| e.alerts.iter().any(|a| a.domain == domain))
                    .count();
                DomainAggregate {
                    domain,
                    mean,
                    band: mean.map(ScoreBand::from_score),
                    alerts,
                    prevalence: percentage(alerts, evaluated),
                }
            })
            .collect();

        let with_critical = evaluations
            .iter()
            .filter(|e| e.alerts.iter().any(|a| a.severity == Severity::Critical))
            .count();

        let mut ranking: Vec<ProblemRank> = domains
            .iter()
            .filter(|aggregate| aggregate.alerts > 0)
            .filter_map(|aggregate| rank_problem(aggregate, evaluations))
            .collect();
        // Stable, so equal prevalence keeps domain order
        ranking.sort_by(|a, b| b.prevalence.total_cmp(&a.prevalence));

        let alerted_sets: Vec<BTreeSet<Domain>> = evaluations
            .iter()
            .map(|e| e.alerts.iter().map(|a| a.domain).collect())
            .collect();

        let mut pairs: BTreeMap<(Domain, Domain), usize> = BTreeMap::new();
        for alerted in &alerted_sets {
            let alerted: Vec<Domain> = alerted.iter().copied().collect();
            for (i, first) in alerted.iter().enumerate() {
                for second in &alerted[i + 1..] {
                    *pairs.entry((*first, *second)).or_default() += 1;
                }
            }
        }
        let mut co_occurrences: Vec<CoOccurrence> = pairs
            .into_iter()
            .map(|((a, b), count)| {
                let either = alerted_sets
                    .iter()
                    .filter(|set| set.contains(&a) || set.contains(&b))
                    .count();
                CoOccurrence {
                    domains: [a, b],
                    count,
                    share: percentage(count, either),
                }
            })
            .collect();
        // Most frequent first; ties keep domain order
        co_occurrences.sort_by(|a, b| b.count.cmp(&a.count));

        Self {
            evaluated,
            skipped,
            domains,
            ranking,
            with_critical,
            critical_share: percentage(with_critical, evaluated),
            co_occurrences,
            trend: None,
            issue_count: evaluations.iter().map(|e| e.issues.len()).sum(),
        }
    }

    pub fn domain(&self, domain: Domain) -> Option<&DomainAggregate> {
        self.domains.iter().find(|d| d.domain == domain)
    }

    /// The first [`HEADLINE_PROBLEMS`] entries of the ranking.
    pub fn headline_problems(&self) -> &[ProblemRank] {
        &self.ranking[..self.ranking.len().min(HEADLINE_PROBLEMS)]
    }
}

fn rank_problem(aggregate: &DomainAggregate, evaluations: &[Evaluation]) -> Option<ProblemRank> {
    let alerts: Vec<&Alert> = evaluations
        .iter()
        .flat_map(|e| e.alerts.iter())
        .filter(|a| a.domain == aggregate.domain)
        .collect();
    let severity = alerts.iter().map(|a| a.severity).min()?;
    let total: f64 = alerts.iter().map(|a| a.score).sum();
    Some(ProblemRank {
        domain: aggregate.domain,
        severity,
        alerts: aggregate.alerts,
        prevalence: aggregate.prevalence,
        mean_alert_score: round_tenth(total / alerts.len() as f64),
    })
}

/// Mean over submissions of the mean of their seven domain scores.
fn overall_mean(evaluations: &[Evaluation]) -> Option<f64> {
    if evaluations.is_empty() {
        return None;
    }
    let total: f64 = evaluations
        .iter()
        .map(|e| e.scores.iter().map(|(_, score)| score).sum::<f64>() / Domain::ALL.len() as f64)
        .sum();
    Some(round_tenth(total / evaluations.len() as f64))
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        round_tenth(part as f64 * 100.0 / whole as f64)
    }
}
