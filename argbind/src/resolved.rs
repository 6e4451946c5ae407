//! Flat key/value result of one resolution pass.

use std::collections::BTreeMap;

use uncased::{Uncased, UncasedStr};

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// Supplied as a flag on the command line.
    CommandLine,
    /// Filled in from a prefixed environment variable.
    Environment,
}

/// A resolved flag: an optional payload plus its origin.
///
/// `payload` is `None` for presence-only flags such as `--help`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedValue {
    /// Lower-cased payload, if one was attached.
    pub payload: Option<String>,
    /// Layer that supplied the value.
    pub source: ValueSource,
}

/// Case-insensitive mapping from canonical flag name to resolved value.
///
/// Built fresh per invocation by [`crate::resolve`] and extended by
/// [`crate::EnvFallback`]. Inserting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfiguration {
    entries: BTreeMap<Uncased<'static>, ResolvedValue>,
}

impl ResolvedConfiguration {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `key`, replacing any earlier value.
    pub fn insert(&mut self, key: impl Into<String>, payload: Option<String>, source: ValueSource) {
        self.entries.insert(
            Uncased::from(key.into()),
            ResolvedValue { payload, source },
        );
    }

    /// Looks up `key` case-insensitively.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ResolvedValue> {
        self.entries.get(UncasedStr::new(key))
    }

    /// Returns the payload for `key`; the outer `None` means the key is
    /// absent, the inner `None` means it is present without a payload.
    #[must_use]
    pub fn payload(&self, key: &str) -> Option<Option<&str>> {
        self.get(key).map(|value| value.payload.as_deref())
    }

    /// Returns the layer that supplied `key`.
    #[must_use]
    pub fn source(&self, key: &str) -> Option<ValueSource> {
        self.get(key).map(|value| value.source)
    }

    /// Whether `key` was supplied by any layer.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(UncasedStr::new(key))
    }

    /// Iterates entries ordered case-insensitively by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of resolved keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
