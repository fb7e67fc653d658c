use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::cohort::CohortReport;
use crate::scoring::{
    top_alerts, Alert, AlertSummary, DomainScore, Evaluation, ScoreBand, ScoreVector, Severity,
};

/// Width of the domain name column ("Atividade Física" plus padding)
const LABEL_WIDTH: usize = 18;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
pub fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Pad to a column width counted in characters, not bytes.
fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

fn paint_band(text: &str, band: ScoreBand, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    match band {
        ScoreBand::Good => text.green().to_string(),
        ScoreBand::Attention => text.yellow().to_string(),
        ScoreBand::Poor => text.red().to_string(),
    }
}

/// Format a score as "3.5/10", one decimal always shown
pub fn format_score(score: f64) -> String {
    format!("{:.1}/10", score)
}

/// One line per domain: name, score, coloured by band
pub fn format_score_table(scores: &ScoreVector, use_colors: bool) -> String {
    scores
        .iter()
        .map(|(domain, score)| {
            let value = format!("{:>7}", format_score(score));
            let value = paint_band(&value, ScoreBand::from_score(score), use_colors);
            format!("{}{}", pad(domain.label(), LABEL_WIDTH), value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single alert as one line
fn format_alert_line(alert: &Alert, reason_width: Option<usize>, use_colors: bool) -> String {
    let marker = match alert.severity {
        Severity::Critical => "🔴",
        Severity::Moderate => "🟡",
    };
    let reason = match reason_width {
        Some(width) => truncate_text(&alert.reason, width),
        None => alert.reason.clone(),
    };

    // Pad before colouring; escape codes would count toward the width
    let tag = format!("{:<8}", alert.severity.label());
    let tag = match (use_colors, alert.severity) {
        (false, _) => tag,
        (true, Severity::Critical) => tag.red().bold().to_string(),
        (true, Severity::Moderate) => tag.yellow().bold().to_string(),
    };
    format!("{} {}  {}", marker, tag, reason)
}

/// Format the top alerts, with a trailer when some are hidden.
/// Reasons are truncated to the terminal width; never when piped.
pub fn format_alerts(alerts: &[Alert], max: usize, use_colors: bool) -> String {
    if alerts.is_empty() {
        let message = "Nenhum alerta crítico ou moderado";
        return if use_colors {
            message.green().to_string()
        } else {
            message.to_string()
        };
    }

    // Marker (2 cols) + space + tag (8) + two spaces
    let fixed_width = 13;
    let reason_width = get_terminal_width().map(|w| {
        if w > fixed_width + 20 {
            w - fixed_width
        } else {
            20
        }
    });

    let (shown, hidden) = top_alerts(alerts, max);
    let mut lines: Vec<String> = shown
        .iter()
        .map(|alert| format_alert_line(alert, reason_width, use_colors))
        .collect();
    if hidden > 0 {
        let more = format!("... mais {} alerta(s)", hidden);
        lines.push(if use_colors {
            more.dimmed().to_string()
        } else {
            more
        });
    }
    lines.join("\n")
}

pub fn format_summary(summary: &AlertSummary) -> String {
    format!(
        "Críticas: {}  Moderadas: {}  Estáveis: {}",
        summary.critical, summary.moderate, summary.stable
    )
}

/// Full human-readable evaluation: scores, alerts, summary
pub fn format_evaluation(evaluation: &Evaluation, max_alerts: usize, use_colors: bool) -> String {
    let summary = AlertSummary::from_alerts(&evaluation.alerts);
    format!(
        "{}\n\n{}\n\n{}",
        format_score_table(&evaluation.scores, use_colors),
        format_alerts(&evaluation.alerts, max_alerts, use_colors),
        format_summary(&summary)
    )
}

/// Per-domain breakdown for verbose mode
pub fn format_breakdown(domains: &[DomainScore]) -> String {
    let mut out = String::new();
    for domain in domains {
        out.push_str(&format!("{}: {}\n", domain.domain.label(), format_score(domain.score)));
        for adj in &domain.adjustments {
            out.push_str(&format!(
                "  {:+.1}  {} = \"{}\" ({:.1} -> {:.1})\n",
                adj.delta, adj.question, adj.option, adj.before, adj.after
            ));
        }
        if domain.raw != domain.score {
            out.push_str(&format!("  raw {:.2}, rounded and clamped\n", domain.raw));
        }
    }
    out.trim_end().to_string()
}

/// Tab-separated values for scripting.
/// Score lines: domain key, score. Alert lines: "alert", domain key, severity, score, reason
pub fn format_evaluation_tsv(evaluation: &Evaluation) -> String {
    let mut lines: Vec<String> = evaluation
        .scores
        .iter()
        .map(|(domain, score)| format!("{}\t{:.1}", domain.key(), score))
        .collect();
    lines.extend(evaluation.alerts.iter().map(|alert| {
        format!(
            "alert\t{}\t{}\t{:.1}\t{}",
            alert.domain.key(),
            severity_key(alert.severity),
            alert.score,
            alert.reason
        )
    }));
    lines.join("\n")
}

/// Clinic-level table: mean per domain, alert prevalence, ranked
/// problems and co-occurring pairs
pub fn format_cohort_table(report: &CohortReport, use_colors: bool) -> String {
    if report.evaluated == 0 {
        return "No submissions to aggregate.".to_string();
    }

    let mut lines = vec![format!(
        "{} submissions evaluated, {} skipped",
        report.evaluated,
        report.skipped.len()
    )];
    lines.push(String::new());

    for aggregate in &report.domains {
        let mean = match (aggregate.mean, aggregate.band) {
            (Some(mean), Some(band)) => {
                paint_band(&format!("{:>7}", format_score(mean)), band, use_colors)
            }
            _ => format!("{:>7}", "-"),
        };
        lines.push(format!(
            "{}{}   alertas: {} ({:.1}%)",
            pad(aggregate.domain.label(), LABEL_WIDTH),
            mean,
            aggregate.alerts,
            aggregate.prevalence
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Com áreas críticas: {} ({:.1}%)",
        report.with_critical, report.critical_share
    ));
    if let Some(trend) = &report.trend {
        lines.push(format!(
            "Tendência: {} ({:+.1} pts, {:.1} -> {:.1})",
            trend.direction.label(),
            trend.delta,
            trend.previous_mean,
            trend.current_mean
        ));
    }

    if !report.ranking.is_empty() {
        lines.push(String::new());
        lines.push("Principais problemas:".to_string());
        for (i, problem) in report.ranking.iter().enumerate() {
            let tag = format!("{:<8}", problem.severity.label());
            let tag = match (use_colors, problem.severity) {
                (false, _) => tag,
                (true, Severity::Critical) => tag.red().to_string(),
                (true, Severity::Moderate) => tag.yellow().to_string(),
            };
            lines.push(format!(
                "  {}. {}{}  {:.1}%  média nos alertas {}",
                i + 1,
                pad(problem.domain.label(), LABEL_WIDTH),
                tag,
                problem.prevalence,
                format_score(problem.mean_alert_score)
            ));
        }
    }

    if !report.co_occurrences.is_empty() {
        lines.push(String::new());
        lines.push("Coocorrências:".to_string());
        for pair in &report.co_occurrences {
            lines.push(format!(
                "  {} + {}: {} ({:.1}% dos casos com esses problemas)",
                pair.domains[0].label(),
                pair.domains[1].label(),
                pair.count,
                pair.share
            ));
        }
    }

    lines.join("\n")
}

/// Tab-separated cohort report.
///
/// Domain lines: key, mean (empty if none), alert count, prevalence.
/// Then `rank`, `pair` and `trend` lines, each tagged in the first column.
pub fn format_cohort_tsv(report: &CohortReport) -> String {
    let mut lines: Vec<String> = report
        .domains
        .iter()
        .map(|aggregate| {
            format!(
                "{}\t{}\t{}\t{:.1}",
                aggregate.domain.key(),
                aggregate.mean.map(|m| format!("{:.1}", m)).unwrap_or_default(),
                aggregate.alerts,
                aggregate.prevalence
            )
        })
        .collect();

    lines.extend(report.ranking.iter().enumerate().map(|(i, problem)| {
        format!(
            "rank\t{}\t{}\t{}\t{}\t{:.1}\t{:.1}",
            i + 1,
            problem.domain.key(),
            severity_key(problem.severity),
            problem.alerts,
            problem.prevalence,
            problem.mean_alert_score
        )
    }));
    lines.extend(report.co_occurrences.iter().map(|pair| {
        format!(
            "pair\t{}\t{}\t{}\t{:.1}",
            pair.domains[0].key(),
            pair.domains[1].key(),
            pair.count,
            pair.share
        )
    }));
    if let Some(trend) = &report.trend {
        lines.push(format!(
            "trend\t{:.1}\t{:.1}\t{:.1}",
            trend.delta, trend.previous_mean, trend.current_mean
        ));
    }

    lines.join("\n")
}

fn severity_key(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "critical",
        Severity::Moderate => "moderate",
    }
}
