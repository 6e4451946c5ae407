//! Type-directed assignment of resolved flags onto a settings struct.
//!
//! Each settings type exposes a compile-time table of [`FieldDescriptor`]s
//! (usually generated by `#[derive(BindSettings)]`). The binder walks that
//! table, looks each logical name up in the [`ResolvedConfiguration`] and
//! hands the payload to the field's assignment function.

use std::ffi::OsString;
use std::fmt;

use tracing::{debug, trace};

use crate::env::{EnvFallback, program_name};
use crate::error::{ArgbindError, ValueError};
use crate::resolve::resolve;
use crate::resolved::ResolvedConfiguration;
use crate::schema::FlagSchema;
use crate::value::ValueKind;

/// Assigns a converted payload to one field of `S`.
pub type AssignFn<S> = fn(&mut S, Option<&str>) -> Result<(), ValueError>;

/// Logical name, kind and setter for one settings field.
pub struct FieldDescriptor<S> {
    name: &'static str,
    kind: ValueKind,
    assign: AssignFn<S>,
}

impl<S> FieldDescriptor<S> {
    /// Describes a field bound under `name`.
    #[must_use]
    pub const fn new(name: &'static str, kind: ValueKind, assign: AssignFn<S>) -> Self {
        Self { name, kind, assign }
    }

    /// Logical name matched against resolved keys.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Declared kind of the field.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Converts `raw` and stores it in `settings`.
    ///
    /// # Errors
    ///
    /// Propagates the field type's [`ValueError`].
    pub fn assign(&self, settings: &mut S, raw: Option<&str>) -> Result<(), ValueError> {
        (self.assign)(settings, raw)
    }
}

impl<S> fmt::Debug for FieldDescriptor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// The full field table of a settings type.
pub struct SettingsDescriptor<S: 'static> {
    fields: &'static [FieldDescriptor<S>],
}

impl<S: 'static> SettingsDescriptor<S> {
    /// Wraps a static field table.
    #[must_use]
    pub const fn new(fields: &'static [FieldDescriptor<S>]) -> Self {
        Self { fields }
    }

    /// All fields in declaration order.
    #[must_use]
    pub const fn fields(&self) -> &'static [FieldDescriptor<S>] {
        self.fields
    }

    /// Finds the field bound under `name`, ignoring ASCII case.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor<S>> {
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }

    /// Logical names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + use<S> {
        self.fields.iter().map(FieldDescriptor::name)
    }
}

impl<S: 'static> fmt::Debug for SettingsDescriptor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.fields).finish()
    }
}

/// Writes every resolved field of `descriptor` into `settings`.
///
/// Fields whose logical name is absent from `resolved` keep their current
/// value. Boolean fields become `true` on presence and never see the
/// payload; every other kind receives the raw payload for conversion.
///
/// # Errors
///
/// Returns [`ArgbindError::InvalidValue`] for the first field whose payload
/// fails to convert. Fields after it are left untouched.
pub fn bind<S: 'static>(
    settings: &mut S,
    descriptor: &SettingsDescriptor<S>,
    resolved: &ResolvedConfiguration,
) -> Result<(), ArgbindError> {
    for field in descriptor.fields() {
        let Some(value) = resolved.get(field.name()) else {
            continue;
        };
        let payload = if field.kind().takes_value() {
            value.payload.as_deref()
        } else {
            None
        };
        field
            .assign(settings, payload)
            .map_err(|err| ArgbindError::invalid_value(field.name(), err))?;
        trace!(field = field.name(), source = ?value.source, "bound field");
    }
    Ok(())
}

/// A settings struct that can be populated from flags and the environment.
///
/// Derive it with `#[derive(BindSettings)]`; the derive emits a `const`
/// descriptor table so no runtime reflection is involved.
///
/// # Examples
///
/// ```
/// use argbind::{BindSettings, FlagSchema};
///
/// #[derive(Debug, Default, BindSettings)]
/// #[argbind(rename_all = "kebab-case")]
/// struct Settings {
///     help: bool,
///     log_file: Option<String>,
/// }
///
/// let schema = FlagSchema::builder()
///     .flag("help", "Displays this help screen.")
///     .flag("log-file", "Where to write logs.")
///     .alias("h", "help")
///     .build()?;
/// let settings = Settings::load_from_iter(&schema, ["demo", "-h", "--log-file=out.log"])?;
/// assert!(settings.help);
/// assert_eq!(settings.log_file.as_deref(), Some("out.log"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait BindSettings: Sized + 'static {
    /// Returns the compile-time field table for this type.
    fn descriptor() -> SettingsDescriptor<Self>;

    /// Binds `resolved` onto `self`.
    ///
    /// # Errors
    ///
    /// See [`bind`].
    fn bind(&mut self, resolved: &ResolvedConfiguration) -> Result<(), ArgbindError> {
        bind(self, &Self::descriptor(), resolved)
    }

    /// Runs the full pipeline over an argument vector whose first element
    /// is the program path: resolve flags, fill gaps from
    /// `<program>_<flag>` environment variables, then bind onto
    /// `Self::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgbindError::InvalidFlag`] from resolution or
    /// [`ArgbindError::InvalidValue`] from binding. No settings are
    /// produced on error.
    fn load_from_iter<I, T>(schema: &FlagSchema, args: I) -> Result<Self, ArgbindError>
    where
        Self: Default,
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = args.into_iter().map(Into::<OsString>::into);
        let program = argv.next().and_then(program_name);
        let mut resolved = resolve(argv, schema)?;
        let filled = program.map_or_else(
            || {
                debug!("no program name available; skipping environment fallback");
                0
            },
            |name| EnvFallback::for_program(&name).apply(&mut resolved, schema),
        );
        trace!(filled, "environment fallback applied");
        let mut settings = Self::default();
        settings.bind(&resolved)?;
        Ok(settings)
    }

    /// Runs [`BindSettings::load_from_iter`] over [`std::env::args_os`].
    ///
    /// # Errors
    ///
    /// See [`BindSettings::load_from_iter`].
    fn load(schema: &FlagSchema) -> Result<Self, ArgbindError>
    where
        Self: Default,
    {
        Self::load_from_iter(schema, std::env::args_os())
    }
}
