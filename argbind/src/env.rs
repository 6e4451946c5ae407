//! Environment-variable fallback for flags left unset on the command line.
//!
//! A flag `memory-units` of a program called `top` is read from
//! `top_memory-units`. The prefix is matched case-insensitively and values
//! are lower-cased, mirroring inline command-line payloads.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::Path;

use figment::providers::Env;
use tracing::debug;
use uncased::{Uncased, UncasedStr};

use crate::resolved::{ResolvedConfiguration, ValueSource};
use crate::schema::FlagSchema;

/// Derives the executable name used as the environment prefix from the
/// first element of the argument vector.
///
/// Returns the lower-cased file stem, or `None` when `argv0` has none.
///
/// # Examples
///
/// ```
/// assert_eq!(argbind::program_name("/usr/local/bin/Top"), Some("top".to_owned()));
/// assert_eq!(argbind::program_name("top.exe"), Some("top".to_owned()));
/// assert_eq!(argbind::program_name(""), None);
/// ```
#[must_use]
pub fn program_name(argv0: impl AsRef<OsStr>) -> Option<String> {
    Path::new(argv0.as_ref())
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_lowercase())
        .filter(|name| !name.is_empty())
}

/// Fills unset flags from `<program>_<flag>` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFallback {
    prefix: String,
}

impl EnvFallback {
    /// Creates a fallback reading variables prefixed with `<program>_`.
    ///
    /// The program name is lower-cased and otherwise kept as is, so `a_`
    /// reads `a__<flag>`.
    #[must_use]
    pub fn for_program(program: &str) -> Self {
        Self {
            prefix: format!("{}_", program.to_lowercase()),
        }
    }

    /// The variable prefix, including its trailing underscore.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Fills gaps in `resolved` from the process environment.
    ///
    /// Returns the number of flags filled. Flags already present are never
    /// overwritten, and a missing variable is not an error.
    pub fn apply(&self, resolved: &mut ResolvedConfiguration, schema: &FlagSchema) -> usize {
        let vars: BTreeMap<Uncased<'static>, String> =
            Env::prefixed(&self.prefix).iter().collect();
        self.fill(resolved, schema, &vars)
    }

    /// Fills gaps in `resolved` from `vars`, a list of full variable names
    /// and values such as `("top_memory-units", "MiB")`.
    ///
    /// Variables without this fallback's prefix are ignored.
    pub fn apply_from<I, K, V>(
        &self,
        vars: I,
        resolved: &mut ResolvedConfiguration,
        schema: &FlagSchema,
    ) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let stripped: BTreeMap<Uncased<'static>, String> = vars
            .into_iter()
            .filter_map(|(name, value)| {
                name.as_ref()
                    .to_lowercase()
                    .strip_prefix(&self.prefix)
                    .map(|key| (Uncased::from(key.to_owned()), value.into()))
            })
            .collect();
        self.fill(resolved, schema, &stripped)
    }

    fn fill(
        &self,
        resolved: &mut ResolvedConfiguration,
        schema: &FlagSchema,
        vars: &BTreeMap<Uncased<'static>, String>,
    ) -> usize {
        let mut filled = 0;
        for flag in schema.flags() {
            if resolved.contains_key(flag.name()) {
                continue;
            }
            let Some(value) = vars.get(UncasedStr::new(flag.name())) else {
                continue;
            };
            let variable = format!("{}{}", self.prefix, flag.name());
            debug!(%variable, "filling flag from environment");
            resolved.insert(
                flag.name(),
                Some(value.to_lowercase()),
                ValueSource::Environment,
            );
            filled += 1;
        }
        filled
    }
}
