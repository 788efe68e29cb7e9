use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use sloc::{cli, logging, presentation};
use sloc_core::language::Registry;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let (args, config) = cli::load_config().context("invalid configuration")?;
    logging::init(args.verbose);
    log::debug!("{config:?}");

    let registry = Registry::builtin();
    let result = sloc_core::run(&config, &registry).context("scan failed")?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    presentation::print_results(&result, &config, &mut stdout.lock(), &mut stderr.lock())
        .context("failed to write report")?;
    Ok(())
}
