mod admin;
mod analytics;
mod catalog;
mod classify;
mod cli;
mod config;
mod environment;
mod error;
mod recorder;
mod report;
mod scoring;
mod share;
mod types;

use crate::environment::JsonFileStore;
use crate::error::{DonorscoreError, Result};
use crate::recorder::{ClientContext, ResultLog};
use crate::report::ResultReport;
use crate::scoring::AnswerSet;
use crate::types::config::DonorscoreConfig;
use clap::Parser;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn open_store(root: &Path, cfg: &DonorscoreConfig) -> Result<JsonFileStore> {
    JsonFileStore::open(&config::storage_path(root, cfg))
}

fn read_answer_file(path: &Path) -> Result<AnswerSet> {
    let content = std::fs::read_to_string(path)?;
    environment::parse_answers(&content)
}

fn client_context(referrer: Option<&str>) -> ClientContext {
    ClientContext {
        agent: Some(format!("donorscore/{}", env!("CARGO_PKG_VERSION"))),
        referrer: referrer.map(str::to_string),
    }
}

fn record_answers(log: &mut ResultLog, answers: &AnswerSet, shared_by: Option<&str>) {
    let result = ResultReport::build(answers, catalog::questions(), shared_by);
    log.record(
        result.score,
        result.category.label,
        answers,
        shared_by,
        Some(client_context(None)),
    );
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    catalog::validate_catalog(catalog::questions())?;
    let cfg = config::load_config(&cli.root)?;
    debug!(root = %cli.root.display(), "configuration loaded");

    match cli.command {
        cli::Commands::Questions(cmd) => {
            let rendered =
                report::render_catalog(catalog::questions(), output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Answer(cmd) => {
            let mut store = open_store(&cli.root, &cfg)?;
            if cmd.reset {
                environment::clear_answers(&mut store)?;
                println!("answers cleared");
                return Ok(exit_code::SUCCESS);
            }

            let (index, value) = match (cmd.index, cmd.value) {
                (Some(index), Some(value)) => (index, value),
                _ => {
                    return Err(DonorscoreError::InvalidAnswer(
                        "both a question index and an option value are required".to_string(),
                    ))
                }
            };

            let questions = catalog::questions();
            let question = questions.get(index).ok_or_else(|| {
                DonorscoreError::InvalidAnswer(format!(
                    "question index {index} is out of range (0..{})",
                    questions.len()
                ))
            })?;
            if question.option(&value).is_none() {
                let expected = question
                    .options
                    .iter()
                    .map(|option| option.value)
                    .collect::<Vec<_>>();
                return Err(DonorscoreError::InvalidAnswer(format!(
                    "'{value}' is not an option for question {index}; expected one of: {}",
                    expected.join(", ")
                )));
            }

            let mut answers = environment::load_answers(&store)?.unwrap_or_default();
            answers.insert(index, value.clone());
            environment::save_answers(&mut store, &answers)?;
            println!(
                "saved answer {index} = {value} ({}/{} answered)",
                answers.len(),
                questions.len()
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Results(cmd) => {
            let answers = match &cmd.answers {
                Some(path) => Some(read_answer_file(path)?),
                None => {
                    let store = open_store(&cli.root, &cfg)?;
                    environment::load_answers(&store)?
                }
            };
            let answers = match answers {
                Some(answers) if !answers.is_empty() => answers,
                _ => return Err(DonorscoreError::MissingResults),
            };

            let shared_by = match &cmd.link {
                Some(link) => share::parse_share_params(link)?.shared_by,
                None => cmd.shared_by.clone(),
            };

            let result =
                ResultReport::build(&answers, catalog::questions(), shared_by.as_deref());
            // Completions are tracked in a log that lives only for this run;
            // `analytics` builds its own from --seed and --record.
            let mut log = ResultLog::new();
            log.record(
                result.score,
                result.category.label,
                &answers,
                shared_by.as_deref(),
                Some(client_context(cmd.link.as_deref())),
            );

            let rendered = report::render_result(&result, output_format(cmd.format))?;
            println!("{rendered}");

            if result.is_partial() {
                eprintln!(
                    "warning: only {} of {} questions answered",
                    result.answered, result.total_questions
                );
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Share(cmd) => {
            let base_url = cmd.base_url.as_deref().unwrap_or(cfg.base_url());
            let params = share::ShareParams {
                title: cmd.title,
                description: cmd.description,
                shared_by: cmd.shared_by,
            };
            let url = share::generate_share_url(base_url, &params)?;
            info!(shared = params.is_shared_session(), "share link generated");
            println!("{url}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Admin(cmd) => {
            let mut store = open_store(&cli.root, &cfg)?;
            match cmd.action {
                cli::AdminAction::Login { password } => {
                    if admin::authenticate(&mut store, &password, cfg.admin_password())? {
                        println!("admin session started");
                        Ok(exit_code::SUCCESS)
                    } else {
                        eprintln!("admin login failed: invalid password");
                        Ok(exit_code::BLOCKING)
                    }
                }
                cli::AdminAction::Logout => {
                    admin::logout(&mut store)?;
                    println!("admin session ended");
                    Ok(exit_code::SUCCESS)
                }
                cli::AdminAction::Status => {
                    if admin::is_admin(&store, cfg.admin_password())? {
                        println!("admin session: active");
                    } else {
                        println!("admin session: inactive");
                    }
                    Ok(exit_code::SUCCESS)
                }
            }
        }
        cli::Commands::Analytics(cmd) => {
            let store = open_store(&cli.root, &cfg)?;
            if !admin::is_admin(&store, cfg.admin_password())? {
                eprintln!(
                    "error: {}",
                    DonorscoreError::AdminRequired(
                        "run `donorscore admin login --password <password>` first".to_string()
                    )
                );
                return Ok(exit_code::BLOCKING);
            }

            let mut log = ResultLog::new();
            if cmd.seed {
                log.seed_sample_data();
            }
            for path in &cmd.records {
                let answers = read_answer_file(path)?;
                record_answers(&mut log, &answers, cmd.shared_by.as_deref());
            }

            let summary = analytics::summarize(log.records());
            let rendered = report::render_summary(&summary, output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
