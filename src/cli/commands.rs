use crate::logging::{init_logging, LogConfig, LogFormat};
use crate::router::Router;
use crate::table::RoutingTable;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Command-line interface for the pattern router
#[derive(Parser, Debug)]
#[command(name = "roadmap")]
#[command(about = "Route free-form input through a table of regex patterns", long_about = None)]
pub struct Cli {
    /// Routing table file (YAML, JSON or TOML)
    #[arg(short, long, env = "ROADMAP_TABLE")]
    pub table: PathBuf,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, env = "ROADMAP_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Log format: pretty, compact or json
    #[arg(long, env = "ROADMAP_LOG_FORMAT", default_value = "compact")]
    pub log_format: LogFormat,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Route each line read from stdin until end of input
    Repl {
        /// Prompt printed before each line
        #[arg(long, default_value = "Test me>\t")]
        prompt: String,
    },
    /// Route a single input and print the result
    Route(InputArgs),
    /// Print the name of the handler an input would hit
    Which(InputArgs),
    /// Print the registered patterns in match order
    List,
}

/// Input shared by `route` and `which`
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// The value to route
    pub input: String,

    /// Text to match instead of the input itself
    #[arg(short, long)]
    pub key: Option<String>,

    /// Parse the input as a JSON value instead of a plain string
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl InputArgs {
    fn primary(&self) -> Result<Value> {
        if self.json {
            serde_json::from_str(&self.input)
                .with_context(|| format!("Input is not valid JSON: {}", self.input))
        } else {
            Ok(Value::String(self.input.clone()))
        }
    }
}

/// Parse arguments, set up logging, and execute the command against the
/// process's stdin/stdout
///
/// # Errors
///
/// Returns an error if logging cannot be initialized, the table cannot be
/// loaded, or the command fails.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env();
    log_config.log_level = cli.log_level.clone();
    log_config.format = cli.log_format;
    init_logging(&log_config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_command(&cli, stdin.lock(), stdout.lock())
}

/// Execute a parsed command with explicit input and output streams
///
/// # Errors
///
/// Returns an error if the table cannot be loaded, the input is malformed,
/// a handler fails (except in `repl`, which reports and continues), or
/// writing output fails.
pub fn run_command(cli: &Cli, input: impl BufRead, mut out: impl Write) -> Result<()> {
    let table = RoutingTable::load(&cli.table)?;
    let router = table.into_router()?;

    match &cli.command {
        Commands::Repl { prompt } => repl(&router, prompt, input, &mut out),
        Commands::Route(args) => {
            let result = router.route(args.primary()?, args.key.as_deref())?;
            write_value(&mut out, &result)
        }
        Commands::Which(args) => {
            let primary = args.primary()?;
            let name = router
                .lookup_entry(&primary, args.key.as_deref())
                .map_or("<none>", |entry| entry.handler_name());
            writeln!(out, "{name}")?;
            Ok(())
        }
        Commands::List => {
            for (position, entry) in router.patterns().entries().iter().enumerate() {
                writeln!(
                    out,
                    "{position}\t{}\t{}\tpass_primary={}",
                    entry.handler_name(),
                    entry.source(),
                    entry.pass_primary()
                )?;
            }
            Ok(())
        }
    }
}

fn repl(router: &Router, prompt: &str, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    write!(out, "{prompt}")?;
    out.flush()?;

    for line in input.lines() {
        let line = line.context("Failed to read input line")?;
        match router.route(line.as_str(), None) {
            Ok(result) => write_value(out, &result)?,
            Err(e) => eprintln!("error: {e}"),
        }
        write!(out, "{prompt}")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_value(out: &mut impl Write, value: &Value) -> Result<()> {
    match value {
        Value::Null => {}
        Value::String(s) => writeln!(out, "{s}")?,
        other => writeln!(out, "{other}")?,
    }
    Ok(())
}
