//! Startup flow: bind settings, then print help, the version or a summary.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use argbind::{ArgbindError, BindSettings, write_help};
use tracing::debug;

use crate::error::Result;
use crate::settings::{Settings, schema};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const FALLBACK_PROGRAM: &str = "top";

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Output was printed normally.
    Success,
    /// A flag or value was rejected; a diagnostic went to stderr.
    InvalidInput,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => Self::SUCCESS,
            Status::InvalidInput => Self::FAILURE,
        }
    }
}

/// Runs the demo over `args` (program path first), writing to `out` and
/// `err`.
///
/// # Errors
///
/// Returns a [`crate::error::TopError`] when the flag table is malformed
/// or output cannot be written. Rejected user input is reported on `err`
/// and yields [`Status::InvalidInput`] instead.
pub fn run<I, T, O, E>(args: I, out: &mut O, err: &mut E) -> Result<Status>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    O: Write,
    E: Write,
{
    let argv: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = argv
        .first()
        .and_then(argbind::program_name)
        .unwrap_or_else(|| FALLBACK_PROGRAM.to_owned());
    let schema = schema()?;

    let settings = match Settings::load_from_iter(&schema, argv) {
        Ok(settings) => settings,
        Err(rejected) => {
            writeln!(err, "{}", diagnostic(&rejected))?;
            return Ok(Status::InvalidInput);
        }
    };
    debug!(?settings, "settings bound");

    if settings.help {
        write_help(out, &schema, &program, VERSION)?;
    } else if settings.version {
        writeln!(out, "{VERSION}")?;
    } else {
        write_summary(out, &settings)?;
    }
    Ok(Status::Success)
}

fn diagnostic(err: &ArgbindError) -> String {
    match err {
        ArgbindError::InvalidFlag { .. } => format!("{err}..."),
        _ => err.to_string(),
    }
}

fn write_summary<W: Write>(out: &mut W, settings: &Settings) -> Result<()> {
    let units = settings.memory_units;
    writeln!(out, "memory-units: {units} ({} bytes)", units.bytes())?;
    Ok(())
}
