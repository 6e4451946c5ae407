//! Declarative flag table: canonical long flags and their short aliases.
//!
//! A [`FlagSchema`] is built once at startup and never mutated. Canonical
//! names are matched case-insensitively; aliases are matched exactly.

use std::collections::BTreeMap;

use uncased::{Uncased, UncasedStr};

use crate::error::SchemaError;

/// A canonical flag and its human-readable description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSpec {
    name: String,
    description: String,
}

impl FlagSpec {
    /// Canonical name without the leading `--`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description shown in help output. May span several lines.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AliasSpec {
    alias: String,
    target: usize,
}

/// Validated table of recognised flags.
///
/// # Examples
///
/// ```
/// use argbind::FlagSchema;
///
/// let schema = FlagSchema::builder()
///     .flag("version", "Displays the version.")
///     .alias("v", "version")
///     .build()?;
/// assert_eq!(schema.expand_alias("v"), Some("version"));
/// assert_eq!(schema.canonical("VERSION"), Some("version"));
/// # Ok::<(), argbind::SchemaError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSchema {
    flags: Vec<FlagSpec>,
    index: BTreeMap<Uncased<'static>, usize>,
    aliases: Vec<AliasSpec>,
}

impl FlagSchema {
    /// Starts an empty [`FlagSchemaBuilder`].
    #[must_use]
    pub fn builder() -> FlagSchemaBuilder {
        FlagSchemaBuilder::default()
    }

    /// Builds a schema from a single table in which keys beginning with `-`
    /// are aliases whose value names the canonical flag, and every other key
    /// is a canonical flag whose value is its description.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] under the same rules as
    /// [`FlagSchemaBuilder::build`].
    ///
    /// # Examples
    ///
    /// ```
    /// use argbind::FlagSchema;
    ///
    /// let schema = FlagSchema::from_table([
    ///     ("help", "Displays this help screen."),
    ///     ("-h", "help"),
    /// ])?;
    /// assert_eq!(schema.expand_alias("h"), Some("help"));
    /// # Ok::<(), argbind::SchemaError>(())
    /// ```
    pub fn from_table<I, K, V>(table: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        table
            .into_iter()
            .fold(Self::builder(), |builder, (key, value)| {
                match key.as_ref().strip_prefix('-') {
                    Some(alias) => builder.alias(alias, value),
                    None => builder.flag(key.as_ref(), value),
                }
            })
            .build()
    }

    /// Returns the schema's spelling of canonical flag `name`, matched
    /// case-insensitively.
    #[must_use]
    pub fn canonical(&self, name: &str) -> Option<&str> {
        self.lookup(name).map(FlagSpec::name)
    }

    /// Returns the canonical flag that `alias` (without its dash) stands for.
    #[must_use]
    pub fn expand_alias(&self, alias: &str) -> Option<&str> {
        self.aliases
            .iter()
            .find(|spec| spec.alias == alias)
            .and_then(|spec| self.flags.get(spec.target))
            .map(FlagSpec::name)
    }

    /// Returns the description of canonical flag `name`.
    #[must_use]
    pub fn description(&self, name: &str) -> Option<&str> {
        self.lookup(name).map(FlagSpec::description)
    }

    /// Iterates canonical flags in declaration order. Aliases are excluded.
    pub fn flags(&self) -> impl Iterator<Item = &FlagSpec> {
        self.flags.iter()
    }

    /// Iterates the aliases declared for canonical flag `name`.
    pub fn aliases_of<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        let target = self.index.get(UncasedStr::new(name)).copied();
        self.aliases
            .iter()
            .filter(move |spec| Some(spec.target) == target)
            .map(|spec| spec.alias.as_str())
    }

    /// Number of canonical flags.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether the schema declares no flags at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    fn lookup(&self, name: &str) -> Option<&FlagSpec> {
        self.index
            .get(UncasedStr::new(name))
            .and_then(|&position| self.flags.get(position))
    }
}

/// Accumulates flag and alias declarations for a [`FlagSchema`].
#[derive(Debug, Clone, Default)]
#[must_use = "call `build` to obtain a schema"]
pub struct FlagSchemaBuilder {
    flags: Vec<(String, String)>,
    aliases: Vec<(String, String)>,
}

impl FlagSchemaBuilder {
    /// Declares canonical flag `name` (without `--`).
    pub fn flag(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.flags.push((name.into(), description.into()));
        self
    }

    /// Declares `alias` (without its dash) as standing for `target`.
    pub fn alias(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.push((alias.into(), target.into()));
        self
    }

    /// Validates the declarations and freezes them into a [`FlagSchema`].
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidName`] for empty names or names that
    /// contain `=` or start with `-`, [`SchemaError::DuplicateFlag`] and
    /// [`SchemaError::DuplicateAlias`] for repeated declarations, and
    /// [`SchemaError::UnknownAliasTarget`] when an alias points at a flag
    /// that was never declared.
    pub fn build(self) -> Result<FlagSchema, SchemaError> {
        let mut flags = Vec::with_capacity(self.flags.len());
        let mut index = BTreeMap::new();
        for (name, description) in self.flags {
            validate_name(&name)?;
            let key = Uncased::from(name.clone());
            if index.contains_key(&key) {
                return Err(SchemaError::DuplicateFlag { name });
            }
            index.insert(key, flags.len());
            flags.push(FlagSpec { name, description });
        }

        let mut aliases: Vec<AliasSpec> = Vec::with_capacity(self.aliases.len());
        for (alias, target) in self.aliases {
            validate_name(&alias)?;
            if aliases.iter().any(|spec| spec.alias == alias) {
                return Err(SchemaError::DuplicateAlias { alias });
            }
            let Some(&position) = index.get(UncasedStr::new(&target)) else {
                return Err(SchemaError::UnknownAliasTarget { alias, target });
            };
            aliases.push(AliasSpec {
                alias,
                target: position,
            });
        }

        Ok(FlagSchema {
            flags,
            index,
            aliases,
        })
    }
}

fn validate_name(name: &str) -> Result<(), SchemaError> {
    if name.is_empty() || name.contains('=') || name.starts_with('-') {
        return Err(SchemaError::InvalidName {
            name: name.to_owned(),
        });
    }
    Ok(())
}
