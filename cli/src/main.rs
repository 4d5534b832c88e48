use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use library_catalog_db::{JsonStore, LibraryConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod menu;

use menu::Menu;

#[derive(Debug, Parser)]
#[command(name = "library")]
#[command(about = "Interactive library catalog manager", version)]
struct Cli {
    /// YAML configuration file (data file location, id policy).
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON data file; overrides the configured one.
    #[arg(long)]
    data_file: Option<PathBuf>,
    /// Increase log verbosity on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays the operator's transcript. `RUST_LOG`
/// takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    let config = match &cli.config {
        Some(path) => LibraryConfig::load(path)
            .map_err(|e| format!("Failed to load config '{}': {e}", path.display()))?,
        None => LibraryConfig::default(),
    };
    let config = match cli.data_file {
        Some(path) => config.with_data_file(path),
        None => config,
    };
    debug!(?config, "starting");

    let store = JsonStore::from_config(&config);
    store.initialize().map_err(|e| {
        format!(
            "Failed to initialize data file '{}': {e}",
            store.path().display()
        )
    })?;

    let stdin = io::stdin();
    Menu::new(stdin.lock(), io::stdout(), store, config.id_policy)
        .run()
        .map_err(|e| format!("Terminal I/O failed: {e}"))
}
