//! Plain-text usage listing generated from a [`FlagSchema`].

use std::fmt;
use std::io;

use crate::schema::{FlagSchema, FlagSpec};

const ATTACHED_VALUES_NOTE: &str =
    "Values must be attached with '=' (for example --name=value); a value in a separate argument is rejected.";

/// Help text for a schema, rendered through [`fmt::Display`].
///
/// Canonical flags are listed alphabetically (ignoring case), each followed
/// by its aliases and its description lines.
///
/// # Examples
///
/// ```
/// use argbind::{FlagSchema, HelpText};
///
/// let schema = FlagSchema::builder()
///     .flag("version", "Displays the version.")
///     .alias("v", "version")
///     .build()?;
/// let text = HelpText::new(&schema, "top", "1.0.0").to_string();
/// assert!(text.starts_with("top v1.0.0\nUsage:\n\t--version, -v\n"));
/// # Ok::<(), argbind::SchemaError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HelpText<'a> {
    schema: &'a FlagSchema,
    program: &'a str,
    version: &'a str,
}

impl<'a> HelpText<'a> {
    /// Prepares help for `program` at `version`.
    #[must_use]
    pub const fn new(schema: &'a FlagSchema, program: &'a str, version: &'a str) -> Self {
        Self {
            schema,
            program,
            version,
        }
    }

    fn sorted_flags(&self) -> Vec<&'a FlagSpec> {
        let mut flags: Vec<_> = self.schema.flags().collect();
        flags.sort_by_cached_key(|flag| flag.name().to_lowercase());
        flags
    }
}

impl fmt::Display for HelpText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} v{}", self.program, self.version)?;
        writeln!(f, "Usage:")?;
        for flag in self.sorted_flags() {
            write!(f, "\t--{}", flag.name())?;
            for alias in self.schema.aliases_of(flag.name()) {
                write!(f, ", -{alias}")?;
            }
            writeln!(f)?;
            for line in description_lines(flag.description()) {
                writeln!(f, "\t\t\t{line}")?;
            }
        }
        writeln!(f)?;
        writeln!(f, "{ATTACHED_VALUES_NOTE}")
    }
}

/// Splits a description on `\r`, `\n` or `\r\n`, keeping blank lines.
fn description_lines(description: &str) -> impl Iterator<Item = &str> {
    description
        .split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

/// Renders help text for `schema` into a string.
#[must_use]
pub fn render_help(schema: &FlagSchema, program: &str, version: &str) -> String {
    HelpText::new(schema, program, version).to_string()
}

/// Writes help text for `schema` to `out`.
///
/// # Errors
///
/// Returns any [`io::Error`] raised by `out`.
pub fn write_help<W: io::Write>(
    out: &mut W,
    schema: &FlagSchema,
    program: &str,
    version: &str,
) -> io::Result<()> {
    write!(out, "{}", HelpText::new(schema, program, version))
}
