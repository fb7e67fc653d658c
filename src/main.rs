use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use intake_scores::cohort::CohortReport;
use intake_scores::config::Config;
use intake_scores::output::{self, ScoreRecord};
use intake_scores::questionnaire::AnswerSet;
use intake_scores::scoring::{self, WeightTable};
use intake_scores::{config, input, notice, stderr_buffer};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Format {
    #[default]
    Table,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one questionnaire and list its alerts
    Score {
        /// Answers JSON file, or - for stdin
        file: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,

        /// Alerts shown before the rest are collapsed (default from config)
        #[arg(long)]
        max_alerts: Option<usize>,

        /// Also save the evaluation as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Aggregate scores across many submissions
    Cohort {
        /// Files holding a submission or a JSON array of submissions
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Only count submissions newer than this (e.g. 30d, 2w)
        #[arg(long, value_parser = humantime::parse_duration)]
        since: Option<std::time::Duration>,

        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// Write a config file with the full default weight table
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "intake-scores")]
#[command(about = "Wellness domain scores and clinical alerts for intake questionnaires", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/intake-scores/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Load config and resolve the weight table, exiting on any config error.
fn load_weights(config_path: Option<PathBuf>, verbose: bool) -> (Config, WeightTable) {
    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let effective_scoring = config.effective_scoring();
    if let Err(errors) = scoring::validate_scoring(&effective_scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }
    let weights = WeightTable::from_config(&effective_scoring);

    if verbose {
        eprintln!(
            "Using {} weight override(s), max alerts {}",
            weights.override_count(),
            config.max_alerts()
        );
    }

    (config, weights)
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();
    let config_path = cli.config.map(PathBuf::from);
    let use_colors = output::should_use_colors();

    match cli.command {
        Commands::Score {
            file,
            format,
            max_alerts,
            output: save_to,
        } => {
            let (config, weights) = load_weights(config_path, cli.verbose);
            let answers = match input::load_answers(&file) {
                Ok(a) => a,
                Err(e) => {
                    eprintln!("Input error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            let evaluation = scoring::evaluate(&answers, &weights);
            let max_alerts = max_alerts.unwrap_or_else(|| config.max_alerts());

            stderr_buffer::hold();
            for issue in &evaluation.issues {
                notice!("Warning: {}", issue);
            }

            match format {
                Format::Table => println!(
                    "{}",
                    output::format_evaluation(&evaluation, max_alerts, use_colors)
                ),
                Format::Tsv => println!("{}", output::format_evaluation_tsv(&evaluation)),
                Format::Json => match serde_json::to_string_pretty(&evaluation) {
                    Ok(json) => println!("{}", json),
                    Err(e) => notice!("Failed to render JSON: {}", e),
                },
            }
            stderr_buffer::flush();

            if cli.verbose {
                let (parsed, _) = AnswerSet::from_json(&answers);
                eprintln!();
                let domains = scoring::score_domains(&parsed, &weights);
                eprintln!("{}", output::format_breakdown(&domains));
            }

            if let Some(path) = save_to {
                if let Err(e) = output::save_json(&path, &ScoreRecord::new(&evaluation)) {
                    eprintln!("Output error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
                if cli.verbose {
                    eprintln!("Saved evaluation to {}", path.display());
                }
            }
        }
        Commands::Cohort {
            files,
            since,
            format,
        } => {
            let (_, weights) = load_weights(config_path, cli.verbose);
            let since = match since.map(chrono::Duration::from_std).transpose() {
                Ok(window) => window.map(|w| chrono::Utc::now() - w),
                Err(e) => {
                    eprintln!("Input error: --since is out of range: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            stderr_buffer::hold();
            let mut submissions = Vec::new();
            for file in &files {
                match input::load_submissions(file) {
                    Ok(loaded) => {
                        if cli.verbose {
                            notice!("Loaded {} submission(s) from {}", loaded.len(), file.display());
                        }
                        submissions.extend(loaded);
                    }
                    Err(e) => {
                        stderr_buffer::flush();
                        eprintln!("Input error: {:#}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                }
            }

            let report = CohortReport::build(&submissions, &weights, since);
            if report.issue_count > 0 {
                notice!(
                    "Warning: {} unrecognised answer(s) across the cohort were ignored",
                    report.issue_count
                );
            }
            if cli.verbose {
                for skipped in &report.skipped {
                    notice!("Skipped {}: {:?}", skipped.id, skipped.reason);
                }
            }

            match format {
                Format::Table => println!("{}", output::format_cohort_table(&report, use_colors)),
                Format::Tsv => println!("{}", output::format_cohort_tsv(&report)),
                Format::Json => match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => notice!("Failed to render JSON: {}", e),
                },
            }
            stderr_buffer::flush();
        }
        Commands::Init { force } => {
            let path = match config_path {
                Some(p) => p,
                None => match config::get_config_path() {
                    Ok(p) => p,
                    Err(e) => {
                        eprintln!("Config error: {}", e);
                        std::process::exit(EXIT_CONFIG);
                    }
                },
            };
            if let Err(e) = config::write_default_config(&path, force) {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
            println!("Wrote default config to {}", path.display());
        }
    }

    if cli.verbose {
        eprintln!("Done in {:?}", start_time.elapsed());
    }

    std::process::exit(EXIT_SUCCESS);
}
