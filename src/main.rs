use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;
use role_finder::{
    AppConfig, Catalog, RoleFinderApp, Theme, format,
    logging::{self, LogTarget},
    match_roles,
};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "role-finder",
    version,
    about = "Find the least privileged Entra ID role for an administrative task",
    long_about = None
)]
struct Cli {
    /// Administrative task to look up (e.g. "reset user password")
    query: Option<String>,

    /// Open the interactive UI; a QUERY pre-fills the search field
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Color theme for the interactive UI
    #[arg(long, value_enum, env = "ROLE_FINDER_THEME", default_value_t = Theme::Dark)]
    theme: Theme,

    /// Simulated lookup latency in milliseconds
    #[arg(long, env = "ROLE_FINDER_LATENCY_MS", default_value_t = role_finder::DEFAULT_SEARCH_LATENCY_MS)]
    latency_ms: u64,

    /// Role catalog JSON file (defaults to the built-in catalog)
    #[arg(long, env = "ROLE_FINDER_CATALOG")]
    catalog: Option<PathBuf>,

    /// Output format for one-shot lookups
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Write logs to this file while the interactive UI is running
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    #[value(name = "jsonl")]
    JsonL,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut command = Cli::command();
        clap_complete::generate(shell, &mut command, "role-finder", &mut io::stdout());
        return Ok(());
    }

    let interactive = cli.interactive || cli.query.is_none();
    let log_target = match (&cli.log_file, interactive) {
        (Some(path), _) => LogTarget::File(path),
        (None, true) => LogTarget::Disabled,
        (None, false) => LogTarget::Stderr,
    };
    logging::init_tracing(cli.verbose, log_target)?;

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::builtin(),
    };

    if interactive {
        let config = AppConfig {
            theme: cli.theme,
            latency: Duration::from_millis(cli.latency_ms),
            initial_query: cli.query,
        };
        let mut app = RoleFinderApp::new(config, Arc::new(catalog));
        return app.run().context("interactive session failed");
    }

    let query = cli.query.unwrap_or_default();
    let query = query.trim();
    if query.is_empty() {
        bail!("Please enter a search term");
    }

    let results = match_roles(query, catalog.roles());
    tracing::debug!(query, matches = results.len(), "one-shot lookup");

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match cli.format {
        OutputFormat::Text => format::write_text(&mut handle, &results, !cli.no_color)?,
        OutputFormat::Json => format::write_json(&mut handle, query, &results)?,
        OutputFormat::JsonL => format::write_jsonl(&mut handle, query, &results)?,
    }

    Ok(())
}
