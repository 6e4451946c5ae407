//! Error types produced while resolving and binding flags.

mod types;

pub use types::{ArgbindError, SchemaError, ValueError};
