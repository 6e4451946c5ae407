//! Test helpers shared across crates.
//!
//! Provides scoped environment variables backed by [`figment::Jail`] and
//! normalisation for rendered help text.

pub mod jail;
pub mod text;
