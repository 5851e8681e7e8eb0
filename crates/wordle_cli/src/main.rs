//! Command-line entry point for the daily word game backend.
//!
//! # Responsibility
//! - Load configuration, start logging, and run the HTTP server.
//! - Offer admin commands over the same use-cases for local operation.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use log::warn;
use serde_json::json;
use wordle_api::{handlers, serve, ApiContext, GuessRequest, SetAnswerRequest};
use wordle_core::db::open_db;
use wordle_core::{
    default_log_level, init_logging, AnswerService, GameConfig, SqliteAnswerRepository,
};

/// Daily word game backend
#[derive(Parser, Debug)]
#[command(name = "wordle", version, about = "Daily word game backend")]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = "WORDLE_DB", default_value = "wordle.sqlite3")]
    db: PathBuf,

    /// JSON array of fallback words; the built-in list is used if unreadable
    #[arg(long, global = true, env = "WORDLE_WORDS")]
    words: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Directory for rolling log files [default: ./logs]
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API
    Serve {
        /// Listen address
        #[arg(long, default_value = "127.0.0.1:5000")]
        addr: String,

        /// Skip seeding an empty database
        #[arg(long)]
        no_seed: bool,
    },
    /// Print today's answer
    Today,
    /// Print the answer for a date (YYYY-MM-DD)
    Get { date: String },
    /// Store the answer for a date
    Set { date: String, word: String },
    /// List stored answers
    List,
    /// Evaluate a guess
    Guess {
        word: String,

        /// Date to guess for [default: today]
        #[arg(long)]
        date: Option<String>,
    },
    /// Seed an empty database with a window of answers around today
    Seed,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    start_logging(cli.log_level.as_deref(), cli.log_dir.as_deref())?;

    let config = load_config(cli.words.as_deref());
    let ctx = ApiContext::new(cli.db, config);
    let today = Local::now().date_naive();

    match cli.command {
        Command::Serve { addr, no_seed } => {
            if !no_seed {
                let inserted = seed(&ctx, today)?;
                if inserted > 0 {
                    println!("seeded {inserted} answers");
                }
            }
            println!("Backend running on http://{addr}");
            serve(addr.as_str(), &ctx).with_context(|| format!("server on {addr} failed"))
        }
        Command::Today => print_json(&handlers::get_today_answer(&ctx, today)?),
        Command::Get { date } => print_json(&handlers::get_answer_for_date(&ctx, &date)?),
        Command::Set { date, word } => {
            let request = SetAnswerRequest {
                date: Some(date),
                answer: Some(word),
            };
            print_json(&handlers::set_answer(&ctx, &request)?)
        }
        Command::List => print_json(&handlers::list_answers(&ctx)?),
        Command::Guess { word, date } => {
            let request = GuessRequest {
                guess: Some(word),
                date,
            };
            print_json(&handlers::submit_guess(&ctx, &request, today)?)
        }
        Command::Seed => {
            let inserted = seed(&ctx, today)?;
            print_json(&json!({ "inserted": inserted }))
        }
    }
}

fn start_logging(level: Option<&str>, log_dir: Option<&Path>) -> Result<()> {
    let log_dir = match log_dir {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => std::env::current_dir()?.join(dir),
        None => std::env::current_dir()?.join("logs"),
    };
    let level = level.unwrap_or_else(|| default_log_level());
    init_logging(level, &log_dir.to_string_lossy()).map_err(anyhow::Error::msg)
}

fn load_config(words: Option<&Path>) -> GameConfig {
    let Some(path) = words else {
        return GameConfig::default();
    };
    match GameConfig::from_word_file(path) {
        Ok(config) => config,
        Err(err) => {
            warn!("event=word_list_load module=cli status=fallback error={err}");
            eprintln!("warning: {err}; using built-in word list");
            GameConfig::default()
        }
    }
}

fn seed(ctx: &ApiContext, today: NaiveDate) -> Result<usize> {
    let conn = open_db(ctx.db_path())
        .with_context(|| format!("failed to open {}", ctx.db_path().display()))?;
    let repo = SqliteAnswerRepository::try_new(&conn)?;
    let service = AnswerService::new(repo, ctx.config().clone());
    Ok(service.seed_if_empty(today)?)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
