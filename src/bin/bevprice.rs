//! bevprice - price-category prediction CLI.
//!
//! Encodes survey answers and runs the configured classifier.

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

use bevprice::schema::positions;
use bevprice::{Config, FEATURE_SCHEMA, Field, PredictionPipeline, RawAnswers, ValidationPolicy};

/// Beverage price-category predictor
#[derive(Parser)]
#[command(name = "bevprice")]
#[command(version = bevprice::PKG_VERSION)]
#[command(about = "Predict a beverage price category from survey answers")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every survey field, its vector positions and accepted answers
    Schema,

    /// Encode answers into the 25-entry feature vector (JSON)
    Encode {
        #[command(flatten)]
        answers: AnswerArgs,
        /// Report every invalid answer instead of only the first
        #[arg(long)]
        all_errors: bool,
    },

    /// Predict the price category for a set of answers
    Predict {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Model file (overrides the configured model path)
        #[arg(short, long)]
        model: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        answers: AnswerArgs,
    },
}

#[derive(clap::Args)]
struct AnswerArgs {
    /// JSON file of answers (`-` for stdin)
    #[arg(short, long)]
    answers: Option<PathBuf>,
    /// Set a single answer, e.g. `-s zone=Rural` (repeatable, applied last)
    #[arg(short = 's', long = "set", value_parser = parse_pair)]
    set: Vec<(String, String)>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!(version = bevprice::version_string(), "bevprice starting");

    match args.command {
        Command::Schema => print_schema(),

        Command::Encode {
            answers,
            all_errors,
        } => {
            let raw = answers.resolve()?;
            let policy = if all_errors {
                ValidationPolicy::CollectAll
            } else {
                ValidationPolicy::FailFast
            };
            let record = bevprice::validate_with(&raw, policy)?;
            let vector = bevprice::encode(&record);
            println!("{}", serde_json::to_string(&vector)?);
        }

        Command::Predict {
            config,
            model,
            json,
            answers,
        } => {
            let config = Config::load(config.as_deref())?.with_model_path(model);
            let pipeline = PredictionPipeline::from_config(&config);
            let raw = answers.resolve()?;
            let result = pipeline.compute_price_category(&raw)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{result}");
            }
        }
    }

    Ok(())
}

impl AnswerArgs {
    /// Collect answers from the file (or piped stdin), then apply `--set` pairs.
    fn resolve(self) -> Result<RawAnswers, Box<dyn std::error::Error>> {
        let text = match self.answers {
            Some(path) if path.as_os_str() == "-" => Some(read_stdin()?),
            Some(path) => Some(std::fs::read_to_string(&path)?),
            None if self.set.is_empty() && !io::stdin().is_terminal() => Some(read_stdin()?),
            None => None,
        };

        let mut raw = match text {
            Some(text) => parse_answers(&text)?,
            None => RawAnswers::new(),
        };
        raw.extend(self.set);

        if raw.is_empty() {
            return Err("no answers given; use --answers FILE, --set key=value, or pipe JSON on stdin".into());
        }
        Ok(raw)
    }
}

fn read_stdin() -> io::Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

/// Parse a flat JSON object of answers. Numbers and booleans are accepted
/// and stringified, since score answers are often written unquoted.
fn parse_answers(text: &str) -> Result<RawAnswers, Box<dyn std::error::Error>> {
    let object: serde_json::Map<String, Value> = serde_json::from_str(text)?;
    object
        .into_iter()
        .map(
            |(key, value)| -> Result<(String, String), Box<dyn std::error::Error>> {
                match value {
                    Value::String(s) => Ok((key, s)),
                    Value::Number(n) => Ok((key, n.to_string())),
                    Value::Bool(b) => Ok((key, b.to_string())),
                    other => {
                        Err(format!("answer '{key}' must be a string or number, got {other}").into())
                    }
                }
            },
        )
        .collect()
}

/// Parse a `--set` pair. The key must name a survey field.
fn parse_pair(s: &str) -> Result<(String, String), Box<dyn std::error::Error + Send + Sync>> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{s}'"))?;
    let field: Field = key.trim().parse()?;
    Ok((field.as_str().to_string(), value.to_string()))
}

fn print_schema() {
    for spec in &FEATURE_SCHEMA {
        let span = positions(spec.field);
        let range = if span.len() == 1 {
            span.start.to_string()
        } else {
            format!("{}-{}", span.start, span.end - 1)
        };
        println!(
            "{:<6} {:<22} {:<8} {}",
            range,
            spec.field.as_str(),
            spec.kind.name(),
            spec.choices().join(" | ")
        );
    }
}
