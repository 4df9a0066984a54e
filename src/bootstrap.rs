use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use timeclock_pivot::error::{TimeclockError, TimeclockResult};
use timeclock_pivot::pipeline::ensure_csv_extension;

const PROMPT: &str = "Input file? (must be .csv format)\t";

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber on stderr.
///
/// `RUST_LOG` takes precedence over `level`. An unparseable directive falls
/// back to `info`.
pub fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = fmt::layer()
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    tracing_subscriber::registry().with(filter).with(layer).init();
}

// ── Input resolution ───────────────────────────────────────────────────────────

/// Resolve the input path from the positional arguments.
///
/// No argument asks `prompt` for a name; one argument is used as given; more
/// than one is `TooManyArguments`. The result always ends in `.csv`.
pub fn resolve_input<F>(inputs: &[String], prompt: F) -> TimeclockResult<PathBuf>
where
    F: FnOnce() -> TimeclockResult<String>,
{
    let name = match inputs {
        [] => prompt()?,
        [single] => single.clone(),
        many => return Err(TimeclockError::TooManyArguments { count: many.len() }),
    };

    Ok(PathBuf::from(ensure_csv_extension(&name)))
}

/// Ask for the input file name on stdin.
pub fn prompt_for_input() -> TimeclockResult<String> {
    let io_error = |source: io::Error| TimeclockError::Io {
        path: "<stdin>".to_string(),
        source,
    };

    let mut stdout = io::stdout();
    stdout.write_all(PROMPT.as_bytes()).map_err(io_error)?;
    stdout.flush().map_err(io_error)?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).map_err(io_error)?;
    Ok(line.trim().to_string())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
