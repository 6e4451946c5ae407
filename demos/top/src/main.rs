//! `top` demo entry-point: bind settings from flags and `top_*` variables,
//! then print help, the version or the chosen memory units.

use std::io;
use std::process::ExitCode;

use color_eyre::eyre::Report;
use tracing_subscriber::EnvFilter;

use top::app::run;

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    init_tracing()?;
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let status = run(std::env::args_os(), &mut stdout, &mut stderr).map_err(Report::from)?;
    Ok(status.into())
}

fn init_tracing() -> color_eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(Report::msg)
}
