use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use rem::app::Editor;
use rem::config::Config;
use rem::services::terminal::{self, CrosstermTerminal, TerminalModes};
use rem::services::tracing_setup;
use std::path::PathBuf;

/// A small terminal text editor
#[derive(Parser, Debug)]
#[command(name = "rem")]
#[command(about = "A minimal terminal text editor with syntax highlighting and search", long_about = None)]
#[command(version)]
struct Args {
    /// File to open. It is created on first save if it does not exist.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for editor diagnostics (default: system temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

/// An explicit `--config` must load and validate; the default location falls back to defaults
fn load_config(args: &Args) -> AnyhowResult<Config> {
    match &args.config {
        Some(path) => Config::load_validated(path)
            .with_context(|| format!("Invalid configuration in {}", path.display())),
        None => Ok(Config::load_or_default()),
    }
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(tracing_setup::default_log_path);
    if let Err(e) = tracing_setup::init_global(&log_file) {
        eprintln!("Warning: logging disabled ({}): {}", log_file.display(), e);
    }

    let config = load_config(&args)?;

    if args.dump_config {
        let json =
            serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{}", json);
        return Ok(());
    }

    tracing::info!("Editor starting");

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal::emergency_cleanup();
        original_hook(panic);
    }));

    let mut modes = TerminalModes::enable().context("Failed to enter raw mode")?;

    let mut editor = Editor::new(config, CrosstermTerminal::new())
        .context("Failed to create editor instance")?;
    if let Some(path) = &args.file {
        editor.open(path)?;
    }
    let result = editor.run();

    modes.restore();
    if let Err(e) = &result {
        tracing::error!("editor terminated: {:#}", e);
    }
    result
}
