//! Error enums for schema construction, flag resolution and binding.

use thiserror::Error;

/// Errors surfaced to the caller while turning arguments into settings.
///
/// Both variants are user-input failures: callers are expected to print the
/// message and exit with a non-zero status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ArgbindError {
    /// A token was an unknown long flag, an unknown alias, or lacked a dash
    /// prefix.
    #[error("The command-line parameter '{token}' is invalid")]
    InvalidFlag {
        /// Raw token exactly as it appeared on the command line.
        token: String,
    },

    /// An enumerated field received a value matching none of its members.
    #[error("invalid value '{value}' for '{key}': expected one of {}", .expected.join(", "))]
    InvalidValue {
        /// Logical name of the field being bound.
        key: String,
        /// Raw value supplied on the command line or in the environment.
        value: String,
        /// Accepted members of the enumeration.
        expected: &'static [&'static str],
    },
}

impl ArgbindError {
    /// Builds an [`ArgbindError::InvalidFlag`] for `token`.
    ///
    /// # Examples
    ///
    /// ```
    /// use argbind::ArgbindError;
    /// let err = ArgbindError::invalid_flag("--bogus");
    /// assert_eq!(err.token(), Some("--bogus"));
    /// ```
    #[must_use]
    pub fn invalid_flag(token: impl Into<String>) -> Self {
        Self::InvalidFlag {
            token: token.into(),
        }
    }

    /// Lifts a [`ValueError`] raised while assigning `key`.
    #[must_use]
    pub fn invalid_value(key: impl Into<String>, source: ValueError) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: source.value,
            expected: source.expected,
        }
    }

    /// Returns the offending token for [`ArgbindError::InvalidFlag`].
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::InvalidFlag { token } => Some(token),
            Self::InvalidValue { .. } => None,
        }
    }

    /// Returns the field name for [`ArgbindError::InvalidValue`].
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::InvalidValue { key, .. } => Some(key),
            Self::InvalidFlag { .. } => None,
        }
    }
}

/// Failure converting a raw payload into a typed setting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not one of {}", .expected.join(", "))]
pub struct ValueError {
    /// The payload that failed to convert.
    pub value: String,
    /// Members the payload was compared against.
    pub expected: &'static [&'static str],
}

impl ValueError {
    /// Creates a value error for `value` against the `expected` members.
    #[must_use]
    pub fn new(value: impl Into<String>, expected: &'static [&'static str]) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

/// Mistakes in a flag table detected by [`crate::FlagSchemaBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// An alias points at a flag that was never declared.
    #[error("alias '-{alias}' refers to unknown flag '{target}'")]
    UnknownAliasTarget {
        /// Alias without its leading dash.
        alias: String,
        /// Canonical name the alias was declared against.
        target: String,
    },

    /// A flag or alias name is empty, contains `=` or starts with `-`.
    #[error("'{name}' is not a valid flag or alias name")]
    InvalidName {
        /// Name as supplied to the builder.
        name: String,
    },

    /// The same canonical flag was declared more than once.
    #[error("flag '--{name}' is declared more than once")]
    DuplicateFlag {
        /// Canonical name of the repeated flag.
        name: String,
    },

    /// The same alias was declared more than once.
    #[error("alias '-{alias}' is declared more than once")]
    DuplicateAlias {
        /// Alias without its leading dash.
        alias: String,
    },
}
