use clap::Parser;
use color_eyre::Result;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use oscyank::clipboard::{self, CopyContext, Environment, SearchPath, SystemRunner};
use oscyank::config::{self, BackendPreference};
use oscyank::error::OscyankError;
use oscyank::selection::{self, Abbreviation, Entry, Mode, Payload};
use oscyank::settings;

/// Copy file names or paths to the clipboard, over SSH and tmux included
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Copy file names or paths to the clipboard via OSC 52 or a local clipboard manager"
)]
struct Args {
    /// Selected paths (if not provided, reads one path per line from stdin)
    paths: Vec<PathBuf>,

    /// What to copy: name (default), name_without_extension, dir or path
    #[arg(short, long)]
    mode: Option<String>,

    /// Shorten paths under $HOME: 1 replaces it with ~, 2 removes it
    #[arg(short, long)]
    quantifier: Option<u32>,

    /// Override the configured backend: auto, osc, osc52 or manager
    #[arg(long)]
    backend: Option<String>,

    /// Print mode names starting with PREFIX and exit
    #[arg(long, value_name = "PREFIX", num_args = 0..=1, default_missing_value = "")]
    complete_mode: Option<String>,

    /// Print the chosen backend and the text instead of copying
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/oscyank-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    let args = Args::parse();

    if let Some(prefix) = args.complete_mode.as_deref() {
        for name in Mode::completions(prefix) {
            println!("{}", name);
        }
        return Ok(());
    }

    // Load config before anything else reads the backend preference
    let config_result = config::load_config();
    if let Some(warning) = &config_result.warning {
        eprintln!("oscyank: {}", warning);
    }

    let mut clipboard_config = config_result.config.clipboard;
    if let Some(raw) = args.backend.as_deref() {
        clipboard_config.backend = parse_backend_override(raw)?;
    }

    let mode = Mode::from_token(args.mode.as_deref())?;
    let abbreviation = Abbreviation::from_quantifier(args.quantifier);

    let entries = read_selection(args.paths)?;
    if entries.is_empty() {
        return Err(OscyankError::EmptySelection.into());
    }

    let home = selection::home_prefix();
    let lines = selection::transform(mode, abbreviation, &entries, home.as_deref());
    let payload = Payload::from_lines(&lines);

    let env = Environment::from_process();
    let runner = SystemRunner::new();
    let ctx = CopyContext {
        config: clipboard_config,
        env: &env,
        path: &SearchPath,
        runner: &runner,
    };

    if args.dry_run {
        println!("{}", ctx.strategy());
        println!("{}", payload.as_str());
        return Ok(());
    }

    let strategy = clipboard::copy_to_clipboard(payload, &ctx)?;
    log::debug!("Copied {} entries via {}", entries.len(), strategy);

    #[cfg(debug_assertions)]
    log::debug!("=== OSCYANK DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/oscyank-debug.log")
    else {
        return;
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== OSCYANK DEBUG SESSION STARTED ===");
}

/// Interpret `--backend` the same way a settings command would
fn parse_backend_override(raw: &str) -> Result<BackendPreference, OscyankError> {
    let value = settings::parse_option_value(raw);
    BackendPreference::try_from(&value)
}

/// Paths from the command line, or one per line from piped stdin
///
/// Relative paths are taken from the current directory.
fn read_selection(paths: Vec<PathBuf>) -> Result<Vec<Entry>, OscyankError> {
    let cwd = std::env::current_dir()?;

    if !paths.is_empty() {
        return paths
            .iter()
            .map(|path| Entry::resolve(path, &cwd))
            .collect();
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            entries.push(Entry::resolve(&line, &cwd)?);
        }
    }
    Ok(entries)
}
