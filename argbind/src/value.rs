//! Conversion of raw flag payloads into typed setting values.

use crate::error::ValueError;

/// The declared kind of a settings field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Presence flag: set to `true` whenever the key resolves.
    Boolean,
    /// Free-form text, assigned as-is.
    String,
    /// Closed set of members, matched case-insensitively.
    Enumeration {
        /// Accepted member names.
        members: &'static [&'static str],
    },
}

impl ValueKind {
    /// Whether a payload is meaningful for this kind.
    #[must_use]
    pub const fn takes_value(self) -> bool {
        !matches!(self, Self::Boolean)
    }
}

/// A type that can be assigned from a resolved flag.
///
/// Implemented for `bool`, `String` and `Option<T>`. Fieldless enums gain
/// an implementation through `#[derive(SettingValue)]`.
///
/// # Examples
///
/// ```
/// use argbind::SettingValue;
///
/// #[derive(Debug, PartialEq, SettingValue)]
/// enum Colour {
///     Red,
///     #[argbind(rename = "dark-blue")]
///     DarkBlue,
/// }
///
/// assert_eq!(Colour::from_flag(Some("DARK-BLUE")), Ok(Colour::DarkBlue));
/// assert!(Colour::from_flag(Some("green")).is_err());
/// ```
pub trait SettingValue: Sized {
    /// Kind reported in the settings descriptor.
    const KIND: ValueKind;

    /// Converts a resolved payload. `None` means the flag carried no `=`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] when the payload does not fit the type.
    fn from_flag(raw: Option<&str>) -> Result<Self, ValueError>;
}

impl SettingValue for bool {
    const KIND: ValueKind = ValueKind::Boolean;

    fn from_flag(_raw: Option<&str>) -> Result<Self, ValueError> {
        Ok(true)
    }
}

impl SettingValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn from_flag(raw: Option<&str>) -> Result<Self, ValueError> {
        Ok(raw.unwrap_or_default().to_owned())
    }
}

impl<T: SettingValue> SettingValue for Option<T> {
    const KIND: ValueKind = T::KIND;

    fn from_flag(raw: Option<&str>) -> Result<Self, ValueError> {
        T::from_flag(raw).map(Some)
    }
}
