mod bootstrap;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use timeclock_pivot::config::{ConfigLoader, OutputMode};
use timeclock_pivot::error::TimeclockResult;
use timeclock_pivot::pipeline;

/// Pivot a timeclock export into minutes per job code and employee.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Timeclock export to read; prompted for when omitted. `.csv` is appended if missing.
    #[arg(value_name = "FILE", allow_hyphen_values = true)]
    input: Option<String>,

    /// Any further positional arguments; only counted so they can be rejected.
    #[arg(hide = true)]
    extra: Vec<String>,

    /// YAML configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Table to write: pivot, people or normalized.
    #[arg(short, long)]
    mode: Option<OutputMode>,

    /// Log filter directive, e.g. `info` or `debug`. `RUST_LOG` wins when set.
    #[arg(short, long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    let loader = match load_config(&cli) {
        Ok(loader) => loader,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    bootstrap::setup_logging(&loader.config().logging.level);

    match execute(&cli, &loader) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> TimeclockResult<ConfigLoader> {
    let mut loader = match &cli.config {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::default(),
    };
    if let Some(mode) = cli.mode {
        loader = loader.with_output_mode(mode);
    }
    if let Some(level) = &cli.log_level {
        loader = loader.with_log_level(level.as_str());
    }
    Ok(loader)
}

fn execute(cli: &Cli, loader: &ConfigLoader) -> TimeclockResult<()> {
    let inputs: Vec<String> = cli.input.iter().chain(&cli.extra).cloned().collect();
    let input = bootstrap::resolve_input(&inputs, bootstrap::prompt_for_input)?;
    info!(
        "timeclock-pivot v{} reading {}",
        env!("CARGO_PKG_VERSION"),
        input.display()
    );

    let summary = pipeline::run(&input, loader.config())?;
    if summary.overnight_spans > 0 {
        info!(
            overnight_spans = summary.overnight_spans,
            policy = ?loader.config().time.overnight_policy,
            "Some clock-outs preceded their clock-ins"
        );
    }

    Ok(())
}
