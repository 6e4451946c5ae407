//! Flag table and settings for the `top` demo.

use std::fmt;

use argbind::{BindSettings, FlagSchema, SchemaError, SettingValue};

/// Flags understood by `top`. Keys starting with `-` are aliases.
pub const FLAGS: &[(&str, &str)] = &[
    (
        "memory-units",
        "The units to use display memory usage.\rValues: KB, MB, KiB, MiB\rDefault: KiB",
    ),
    (
        "version",
        "Displays the version in MAJOR.MINOR.BUILD format.",
    ),
    ("help", "Displays this help screen."),
    ("-m", "memory-units"),
    ("-v", "version"),
    ("-h", "help"),
];

/// Builds the [`FlagSchema`] for [`FLAGS`].
///
/// # Errors
///
/// Returns a [`SchemaError`] if the table is inconsistent.
pub fn schema() -> Result<FlagSchema, SchemaError> {
    FlagSchema::from_table(FLAGS.iter().copied())
}

/// Units used to display memory figures. Discriminants are bytes per unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, SettingValue)]
pub enum MemoryUnits {
    /// 1000 bytes.
    KB = 1000,
    /// 1024 bytes.
    #[default]
    KiB = 1024,
    /// 1 000 000 bytes.
    MB = 1_000_000,
    /// 1 048 576 bytes.
    MiB = 1_048_576,
}

impl MemoryUnits {
    /// Number of bytes in one unit.
    #[must_use]
    pub const fn bytes(self) -> u64 {
        self as u64
    }

    /// Short label shown next to figures.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::KB => "KB",
            Self::KiB => "KiB",
            Self::MB => "MB",
            Self::MiB => "MiB",
        }
    }

    /// Renders `bytes` in this unit, rounded down.
    ///
    /// # Examples
    ///
    /// ```
    /// use top::settings::MemoryUnits;
    /// assert_eq!(MemoryUnits::KiB.format(4096), "4 KiB");
    /// assert_eq!(MemoryUnits::MB.format(2_500_000), "2 MB");
    /// ```
    #[must_use]
    pub fn format(self, bytes: u64) -> String {
        format!("{} {}", bytes.div_euclid(self.bytes()), self.label())
    }
}

impl fmt::Display for MemoryUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Settings bound from the command line and `top_*` environment variables.
#[derive(Debug, Default, Clone, PartialEq, Eq, BindSettings)]
pub struct Settings {
    /// Print usage and exit.
    pub help: bool,
    /// Print the version and exit.
    pub version: bool,
    /// Units for memory columns.
    #[argbind(rename = "memory-units")]
    pub memory_units: MemoryUnits,
}
