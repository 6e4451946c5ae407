//! Library facade for the `top` demo so integration tests can drive the
//! same code path as the binary.

pub mod app;
pub mod error;
pub mod settings;
