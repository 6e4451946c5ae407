//! Scoped environment variables for tests, backed by [`figment::Jail`].
//!
//! The jail serialises every test that uses it, so variables set here never
//! leak into concurrently running tests and are restored on exit.
//!
//! # Examples
//!
//! ```
//! use argbind_test_helpers::jail::with_env;
//!
//! let value = with_env(&[("demo_colour", "Red")], || {
//!     Ok(std::env::var("demo_colour")?)
//! })?;
//! assert_eq!(value, "Red");
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Result, anyhow};

/// Runs `f` with `vars` set, returning the closure's output.
///
/// The variables are removed again once the closure completes, even when it
/// returns an error.
///
/// # Errors
///
/// Returns an error if the jail cannot be created or `f` fails.
pub fn with_env<F, T>(vars: &[(&str, &str)], f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    with_jail(|jail| {
        for &(key, value) in vars {
            jail.set_env(key, value);
        }
        f().map_err(figment_error)
    })
}

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// # Errors
///
/// Returns an error if the jail initialisation fails or the closure returns a
/// [`figment::error::Error`].
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|j| {
        output = Some(f(j)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Converts any error implementing [`ToString`] into a [`figment::Error`].
#[expect(
    clippy::needless_pass_by_value,
    reason = "used as a `map_err` adaptor, which passes errors by value"
)]
pub fn figment_error<E: ToString>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}
