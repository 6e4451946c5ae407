//! Tokenizer and resolver for `--name[=value]` and `-alias[=value]` flags.
//!
//! Each token is classified on its own: a long flag names a canonical key
//! directly, a short flag is first expanded through the schema's alias table
//! and then handled exactly like its long form. Values must be attached with
//! `=`; a detached value is just another token without a dash and is
//! rejected.

use std::ffi::OsStr;

use tracing::{debug, trace};

use crate::error::ArgbindError;
use crate::resolved::{ResolvedConfiguration, ValueSource};
use crate::schema::FlagSchema;

/// A token reduced to its canonical key and optional inline payload.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Classified<'s> {
    key: &'s str,
    payload: Option<String>,
}

/// Resolves command-line tokens against `schema`.
///
/// `args` must not include the program name. The first invalid token aborts
/// the pass; no partial configuration is returned.
///
/// # Errors
///
/// Returns [`ArgbindError::InvalidFlag`] carrying the raw token when a long
/// flag is not in the schema, an alias is unknown, or a token lacks a dash
/// prefix.
///
/// # Examples
///
/// ```
/// use argbind::{FlagSchema, resolve};
///
/// let schema = FlagSchema::builder()
///     .flag("memory-units", "Units for memory columns.")
///     .alias("m", "memory-units")
///     .build()?;
/// let resolved = resolve(["-m=MiB"], &schema)?;
/// assert_eq!(resolved.payload("memory-units"), Some(Some("mib")));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn resolve<I, S>(args: I, schema: &FlagSchema) -> Result<ResolvedConfiguration, ArgbindError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut resolved = ResolvedConfiguration::new();
    for arg in args {
        let Some(token) = arg.as_ref().to_str() else {
            let lossy = arg.as_ref().to_string_lossy();
            debug!(token = %lossy, "rejecting non UTF-8 argument");
            return Err(ArgbindError::invalid_flag(lossy));
        };
        let Classified { key, payload } = classify(token, schema).inspect_err(|_| {
            debug!(token, "rejecting unrecognised argument");
        })?;
        trace!(token, key, payload = payload.as_deref(), "resolved flag");
        resolved.insert(key, payload, ValueSource::CommandLine);
    }
    Ok(resolved)
}

fn classify<'s>(token: &str, schema: &'s FlagSchema) -> Result<Classified<'s>, ArgbindError> {
    let key = if let Some(long) = token.strip_prefix("--") {
        let (name, payload) = split_inline(long);
        schema.canonical(name).map(|key| (key, payload))
    } else if let Some(short) = token.strip_prefix('-') {
        let (alias, payload) = split_inline(short);
        schema.expand_alias(alias).map(|key| (key, payload))
    } else {
        None
    };
    key.map(|(key, payload)| Classified { key, payload })
        .ok_or_else(|| ArgbindError::invalid_flag(token))
}

/// Splits `name=value` at the first `=`, lower-casing the value.
fn split_inline(flag: &str) -> (&str, Option<String>) {
    flag.split_once('=')
        .map_or((flag, None), |(name, value)| {
            (name, Some(value.to_lowercase()))
        })
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn schema() -> FlagSchema {
        FlagSchema::builder()
            .flag("memory-units", "Units.")
            .flag("version", "Version.")
            .flag("help", "Help.")
            .flag("colour", "Colour.")
            .alias("m", "memory-units")
            .alias("v", "version")
            .alias("h", "help")
            .build()
            .unwrap_or_else(|err| panic!("fixture schema should build: {err}"))
    }

    fn resolve_ok(args: &[&str], schema: &FlagSchema) -> ResolvedConfiguration {
        resolve(args, schema).unwrap_or_else(|err| panic!("{args:?} should resolve: {err}"))
    }

    fn rejected_token(args: &[&str], schema: &FlagSchema) -> Option<String> {
        resolve(args, schema)
            .err()
            .and_then(|err| err.token().map(str::to_owned))
    }

    #[rstest]
    #[case(&["--colour=Red"], "colour", Some("red"))]
    #[case(&["--memory-units=MiB"], "memory-units", Some("mib"))]
    #[case(&["-m=MiB"], "memory-units", Some("mib"))]
    #[case(&["--help"], "help", None)]
    #[case(&["-v"], "version", None)]
    #[case(&["--colour="], "colour", Some(""))]
    #[case(&["--colour=a=B"], "colour", Some("a=b"))]
    #[case(&["--MEMORY-UNITS=kb"], "memory-units", Some("kb"))]
    fn resolves_single_tokens(
        schema: FlagSchema,
        #[case] args: &[&str],
        #[case] key: &str,
        #[case] payload: Option<&str>,
    ) {
        let resolved = resolve_ok(args, &schema);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved.payload(key), Some(payload));
        assert_eq!(resolved.source(key), Some(ValueSource::CommandLine));
    }

    #[rstest]
    fn alias_matches_long_form(schema: FlagSchema) {
        assert_eq!(
            resolve_ok(&["-m=KiB"], &schema),
            resolve_ok(&["--memory-units=KiB"], &schema)
        );
        assert_eq!(resolve_ok(&["-h"], &schema), resolve_ok(&["--help"], &schema));
    }

    #[rstest]
    fn last_occurrence_wins(schema: FlagSchema) {
        let resolved = resolve_ok(&["--memory-units=KiB", "-m=MiB"], &schema);
        assert_eq!(resolved.payload("memory-units"), Some(Some("mib")));
    }

    #[rstest]
    fn stored_key_uses_schema_spelling(schema: FlagSchema) {
        let resolved = resolve_ok(&["--HELP"], &schema);
        let keys: Vec<_> = resolved.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["help"]);
    }

    #[rstest]
    #[case(&["--bogus"], "--bogus")]
    #[case(&["--bogus=1"], "--bogus=1")]
    #[case(&["-x"], "-x")]
    #[case(&["-V"], "-V")]
    #[case(&["-version"], "-version")]
    #[case(&["plain"], "plain")]
    #[case(&["--help", "plain"], "plain")]
    #[case(&["--memory-units", "MiB"], "MiB")]
    #[case(&["-"], "-")]
    #[case(&["--"], "--")]
    #[case(&["---help"], "---help")]
    #[case(&[""], "")]
    fn rejects_invalid_tokens(
        schema: FlagSchema,
        #[case] args: &[&str],
        #[case] token: &str,
    ) {
        assert_eq!(rejected_token(args, &schema).as_deref(), Some(token));
    }

    #[rstest]
    fn first_error_aborts(schema: FlagSchema) {
        assert_eq!(
            rejected_token(&["--bogus", "--other"], &schema).as_deref(),
            Some("--bogus")
        );
    }

    #[rstest]
    fn empty_input_resolves_empty(schema: FlagSchema) {
        assert!(resolve_ok(&[], &schema).is_empty());
    }

    #[test]
    fn split_inline_keeps_later_equals() {
        assert_eq!(split_inline("a=B=C"), ("a", Some("b=c".to_owned())));
        assert_eq!(split_inline("a"), ("a", None));
    }
}
