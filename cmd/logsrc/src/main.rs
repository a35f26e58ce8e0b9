//! logsrc CLI - compiles enabled log sources to fluentd source stanzas.
//!
//! Commands:
//! - `logsrc compile` - Render source stanzas for the enabled set
//! - `logsrc verify` - Check rendered output against a lockfile
//! - `logsrc explain` - Write a Markdown report of the emitted stanzas
//! - `logsrc list` - Print the stanza table

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::SourceArgs;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "logsrc")]
#[command(about = "Compile enabled log source types to fluentd source stanzas")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render source stanzas for the enabled log sources
    Compile {
        #[command(flatten)]
        sources: SourceArgs,

        /// Output path (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format (text or json)
        #[arg(short, long, env = "LOGSRC_FORMAT", default_value = "text")]
        format: String,

        /// Write <output>.lock for later verification
        #[arg(long, requires = "output")]
        lock: bool,
    },

    /// Verify rendered output against a lockfile
    Verify {
        #[command(flatten)]
        sources: SourceArgs,

        /// Path to the lockfile
        #[arg(short, long)]
        lock: String,

        /// Output format; must match the lockfile's when given (text or json)
        #[arg(short, long, env = "LOGSRC_FORMAT")]
        format: Option<String>,
    },

    /// Generate a report explaining the emitted stanzas
    Explain {
        #[command(flatten)]
        sources: SourceArgs,

        /// Output path for the report (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the stanza table
    List {
        /// Print definitions as JSON, including templates
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries compiled output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Compile {
            sources,
            output,
            format,
            lock,
        } => commands::compile::run(&sources, output.as_deref(), &format, lock),
        Commands::Verify {
            sources,
            lock,
            format,
        } => commands::verify::run(&sources, &lock, format.as_deref()),
        Commands::Explain { sources, output } => {
            commands::explain::run(&sources, output.as_deref())
        }
        Commands::List { json } => commands::list::run(json),
    }
}
