//! Core crate for `argbind`: command-line flags, environment fallback and
//! typed settings.
//!
//! The pipeline has three stages:
//!
//! 1. [`resolve`] turns `--name[=value]` and `-alias[=value]` tokens into a
//!    [`ResolvedConfiguration`], rejecting anything the [`FlagSchema`] does
//!    not declare. Values must be attached with `=`.
//! 2. [`EnvFallback`] fills flags left unset from `<program>_<flag>`
//!    environment variables.
//! 3. [`BindSettings`] writes the resolved values into a settings struct
//!    through a descriptor table generated by `#[derive(BindSettings)]`.
//!
//! [`BindSettings::load_from_iter`] runs all three stages.

extern crate self as argbind;

pub use argbind_macros::{BindSettings, SettingValue};

mod bind;
mod env;
mod error;
mod help;
mod resolve;
mod resolved;
mod schema;
mod value;

pub use bind::{AssignFn, BindSettings, FieldDescriptor, SettingsDescriptor, bind};
pub use env::{EnvFallback, program_name};
pub use error::{ArgbindError, SchemaError, ValueError};
pub use help::{HelpText, render_help, write_help};
pub use resolve::resolve;
pub use resolved::{ResolvedConfiguration, ResolvedValue, ValueSource};
pub use schema::{FlagSchema, FlagSchemaBuilder, FlagSpec};
pub use value::{SettingValue, ValueKind};
