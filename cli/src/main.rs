//! CLI entrypoint for mock-interview
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use chrono::{Local, Utc};
use clap::Parser;
use interview_application::{
    AnswerEvaluator, DailyQuestionUseCase, InMemoryProgressRepository, ProgressRepository,
    ReviewProgressUseCase, SubmitAnswerInput, SubmitAnswerUseCase, find_question,
    random_question,
};
use interview_domain::{OutputFormat, QuestionCatalog, UserId};
use interview_infrastructure::{
    ConfigLoader, FileConfig, FileLoggingConfig, JsonFileProgressStore, VaderSentimentAnalyzer,
};
use interview_presentation::{AppState, Cli, Command, ConsoleFormatter};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    // The guard flushes the log file on drop, so it lives until main returns
    let _log_guard = init_logging(cli.verbose, &config.logging)?;

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            warn!("Config: {issue}");
        }
        let messages: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
        bail!("Invalid configuration:\n  {}", messages.join("\n  "));
    }

    if !config.output.use_color(cli.no_color) {
        colored::control::set_override(false);
    }

    let format = config.output.resolve_format(cli.output.map(Into::into));

    info!("Starting mock-interview");

    // === Dependency Injection ===
    let catalog = Arc::new(QuestionCatalog::builtin());
    let evaluator = AnswerEvaluator::new(Arc::new(VaderSentimentAnalyzer::new()))
        .with_policy(config.scoring.to_feedback_policy());

    let Some(command) = cli.command else {
        // No subcommand: show a random question to practise with
        let question = random_question(&catalog)?;
        print_output(format, question, || ConsoleFormatter::format_question(question));
        if format == OutputFormat::Text {
            println!("\nRun `mock-interview --help` for more commands.");
        }
        return Ok(());
    };

    match command {
        Command::Serve { host, port } => {
            let repository = open_repository(&config).await?;
            let mut server = config.server.clone();
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }

            let state = AppState::new(catalog, evaluator, repository);
            interview_presentation::serve(
                state,
                &server.address(),
                Duration::from_secs(server.cors_max_age_secs),
            )
            .await
            .with_context(|| format!("Server on {} failed", server.address()))?;
        }

        Command::Question { id } => {
            let question = match id {
                Some(id) => find_question(&catalog, &id)?,
                None => random_question(&catalog)?,
            };
            print_output(format, question, || ConsoleFormatter::format_question(question));
        }

        Command::Questions => {
            let questions = catalog.questions();
            print_output(format, &questions, || {
                ConsoleFormatter::format_questions(questions)
            });
        }

        Command::Daily { user } => {
            let repository = open_repository(&config).await?;
            let use_case = DailyQuestionUseCase::new(catalog, repository);
            let question = use_case.execute(UserId(user), today()).await?;
            print_output(format, &question, || {
                ConsoleFormatter::format_question(&question)
            });
        }

        Command::Evaluate {
            question,
            keywords,
            answer,
        } => {
            let question = find_question(&catalog, &question)?;
            let score = if keywords.is_empty() {
                evaluator.evaluate_question(question, &answer)
            } else {
                evaluator.evaluate(question, &answer, &keywords)
            };
            print_output(format, &score, || {
                ConsoleFormatter::format_score(question, &score)
            });
        }

        Command::Submit {
            user,
            question,
            answer,
        } => {
            let repository = open_repository(&config).await?;
            let use_case = SubmitAnswerUseCase::new(catalog, evaluator, repository);
            let input =
                SubmitAnswerInput::new(UserId(user), question, answer).at(Utc::now(), today());
            let output = use_case.execute(input).await?;
            print_output(format, &output, || {
                ConsoleFormatter::format_submission(&output)
            });
        }

        Command::Progress { user } => {
            let repository = open_repository(&config).await?;
            let use_case = ReviewProgressUseCase::new(catalog, repository);
            let report = use_case.execute(UserId(user), today()).await?;
            print_output(format, &report, || {
                ConsoleFormatter::format_progress(&report)
            });
        }
    }

    Ok(())
}

/// Set up console logging plus an optional daily log file
///
/// `RUST_LOG` wins over `-v`, which wins over `logging.level`.
fn init_logging(verbose: u8, logging: &FileLoggingConfig) -> Result<Option<WorkerGuard>> {
    let default_level = match verbose {
        0 => logging.level.clone().unwrap_or_else(|| "warn".to_string()),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(), // -vvv or more
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&default_level))
        .with_context(|| format!("Invalid log level: {default_level}"))?;

    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file, guard) = match &logging.dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "mock-interview.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .init();

    Ok(guard)
}

async fn open_repository(config: &FileConfig) -> Result<Arc<dyn ProgressRepository>> {
    if config.storage.in_memory {
        info!("Using in-memory progress storage");
        return Ok(Arc::new(InMemoryProgressRepository::new()));
    }

    let store = JsonFileProgressStore::open(config.storage.resolved_path()).await?;
    info!(
        "Progress stored in {} (index {})",
        store.records_path().display(),
        store.path().display()
    );
    Ok(Arc::new(store))
}

fn today() -> chrono::NaiveDate {
    Local::now().date_naive()
}

fn print_output<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce() -> String,
) {
    match format {
        OutputFormat::Text => print!("{}", text()),
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
