//! loglens CLI — inspect and validate the service configuration.

use clap::{Parser, Subcommand};
use loglens::config::{self, Config, dotenv};
use loglens::telemetry::{LoggingConfig, init_logging};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "loglens", about = "Configuration for the loglens analysis service")]
struct Cli {
    /// Env file to load instead of searching for `.env`
    #[arg(long, global = true, conflicts_with = "no_env_file")]
    env_file: Option<PathBuf>,
    /// Do not load any env file
    #[arg(long, global = true)]
    no_env_file: bool,
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the configuration; exits non-zero when invalid
    Check,
    /// Print the effective configuration with secrets redacted
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// List recognised variables and their defaults
    Vars,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match (&cli.env_file, cli.no_env_file) {
        (Some(path), _) => dotenv::load_dotenv_from(path)?,
        (None, false) => {
            dotenv::load_dotenv();
        }
        (None, true) => {}
    }

    init_logging(LoggingConfig {
        default_filter: if cli.verbose { "debug" } else { "warn" }.to_string(),
        compact: true,
    })?;

    match cli.command {
        Command::Check => Ok(cmd_check()),
        Command::Show { json } => cmd_show(json),
        Command::Vars => {
            cmd_vars();
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn cmd_check() -> ExitCode {
    if config::validate() {
        println!("Configuration OK");
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_show(json: bool) -> anyhow::Result<ExitCode> {
    let config = Config::from_env()?;
    let view = config.redacted();

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("SECRET_KEY:                 {}", view.secret_key);
    println!("DEBUG:                      {}", view.debug);
    println!("GROQ_API_KEY:               {}", view.groq_api_key);
    println!("DEEPSEEK_API_KEY:           {}", view.deepseek_api_key);
    println!("GROQ_MODEL:                 {}", view.groq_model);
    println!("DEEPSEEK_MODEL:             {}", view.deepseek_model);
    println!("DEEPSEEK_BASE_URL:          {}", view.deepseek_base_url);
    println!(
        "ANALYSIS_ENGINE:            {}{}",
        view.analysis_engine,
        if config.engine().is_some() { "" } else { " (unknown)" }
    );
    println!("CACHE_TTL:                  {}s", view.cache_ttl);
    println!("RATE_LIMIT_PER_MINUTE:      {}", view.rate_limit_per_minute);
    println!("ALLOWED_ORIGINS:            {:?}", view.allowed_origins);
    println!("MIN_CONFIDENCE_THRESHOLD:   {}", view.min_confidence_threshold);
    println!("MAX_LOG_SIZE:               {}", view.max_log_size);
    println!("ENABLE_BEHAVIORAL_ANALYSIS: {}", view.enable_behavioral_analysis);

    Ok(ExitCode::SUCCESS)
}

fn cmd_vars() {
    println!("{:<28}  DEFAULT", "VARIABLE");
    println!("{}", "-".repeat(60));
    for (name, default) in config::VARS {
        let default = if default.is_empty() { "-" } else { default };
        println!("{name:<28}  {default}");
    }
    println!("\n{} (read when {} is unset)", config::FLASK_DEBUG, config::DEBUG);
}
