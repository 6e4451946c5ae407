//! End-to-end behaviour of resolve, environment fallback and binding.

use anyhow::{Result, anyhow, ensure};
use argbind::{ArgbindError, BindSettings, FlagSchema, SettingValue, ValueSource, resolve};
use rstest::{fixture, rstest};
use test_helpers::jail::with_env;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, SettingValue)]
enum MemoryUnits {
    KB = 1000,
    #[default]
    KiB = 1024,
    MB = 1_000_000,
    MiB = 1_048_576,
}

#[derive(Debug, Default, PartialEq, Eq, BindSettings)]
struct Settings {
    help: bool,
    version: bool,
    #[argbind(rename = "memory-units")]
    memory_units: MemoryUnits,
}

#[fixture]
fn schema() -> FlagSchema {
    FlagSchema::from_table([
        (
            "memory-units",
            "The units to use display memory usage.\rValues: KB, MB, KiB, MiB\rDefault: KiB",
        ),
        ("version", "Displays the version in MAJOR.MINOR.BUILD format."),
        ("help", "Displays this help screen."),
        ("-m", "memory-units"),
        ("-v", "version"),
        ("-h", "help"),
    ])
    .unwrap_or_else(|err| panic!("fixture schema should build: {err}"))
}

fn load(schema: &FlagSchema, args: &[&str]) -> Result<Settings, ArgbindError> {
    let argv = std::iter::once("top").chain(args.iter().copied());
    Settings::load_from_iter(schema, argv)
}

#[rstest]
#[case::short_version(&["-v"], Settings { version: true, ..Settings::default() })]
#[case::long_help(&["--help"], Settings { help: true, ..Settings::default() })]
#[case::units(&["--memory-units=MB"], Settings { memory_units: MemoryUnits::MB, ..Settings::default() })]
#[case::short_units(&["-m=mib"], Settings { memory_units: MemoryUnits::MiB, ..Settings::default() })]
#[case::repeated(
    &["--memory-units=KiB", "--memory-units=MiB"],
    Settings { memory_units: MemoryUnits::MiB, ..Settings::default() }
)]
#[case::nothing(&[], Settings::default())]
fn binds_command_line(
    schema: FlagSchema,
    #[case] args: &[&str],
    #[case] expected: Settings,
) -> Result<()> {
    let settings = with_env(&[], || Ok(load(&schema, args)?))?;
    ensure!(settings == expected, "expected {expected:?}, got {settings:?}");
    Ok(())
}

#[rstest]
#[case(&["--unknown"], "--unknown")]
#[case(&["--memory-units", "MB"], "MB")]
#[case(&["top"], "top")]
#[case(&["-q"], "-q")]
fn invalid_flags_produce_no_settings(
    schema: FlagSchema,
    #[case] args: &[&str],
    #[case] token: &str,
) {
    assert_eq!(
        load(&schema, args),
        Err(ArgbindError::InvalidFlag {
            token: token.to_owned()
        })
    );
}

#[rstest]
fn invalid_enum_value_is_reported(schema: FlagSchema) {
    let err = load(&schema, &["--memory-units=bogus"]);
    assert!(
        matches!(&err, Err(ArgbindError::InvalidValue { key, value, .. })
            if key == "memory-units" && value == "bogus"),
        "unexpected result: {err:?}"
    );
}

#[rstest]
fn environment_fills_unset_flags(schema: FlagSchema) -> Result<()> {
    let settings = with_env(&[("top_memory-units", "MB")], || Ok(load(&schema, &[])?))?;
    ensure!(settings.memory_units == MemoryUnits::MB);
    ensure!(!settings.help && !settings.version);
    Ok(())
}

#[rstest]
fn command_line_beats_environment(schema: FlagSchema) -> Result<()> {
    let settings = with_env(&[("top_memory-units", "MB")], || {
        Ok(load(&schema, &["-m=KB"])?)
    })?;
    ensure!(settings.memory_units == MemoryUnits::KB);
    Ok(())
}

#[rstest]
fn environment_presence_sets_booleans(schema: FlagSchema) -> Result<()> {
    let settings = with_env(&[("TOP_VERSION", "anything")], || Ok(load(&schema, &[])?))?;
    ensure!(settings.version, "expected version to be set from the environment");
    Ok(())
}

#[rstest]
fn invalid_environment_value_is_reported(schema: FlagSchema) -> Result<()> {
    let result = with_env(&[("top_memory-units", "parsecs")], || Ok(load(&schema, &[])))?;
    let err = result.err().ok_or_else(|| anyhow!("expected a value error"))?;
    ensure!(err.key() == Some("memory-units"), "unexpected error {err}");
    Ok(())
}

#[rstest]
fn other_programs_variables_are_ignored(schema: FlagSchema) -> Result<()> {
    let settings = with_env(&[("htop_memory-units", "MB")], || Ok(load(&schema, &[])?))?;
    ensure!(settings.memory_units == MemoryUnits::KiB);
    Ok(())
}

#[rstest]
fn resolved_sources_are_recorded(schema: FlagSchema) -> Result<()> {
    with_env(&[("top_memory-units", "MB")], || {
        let mut resolved = resolve(["--help"], &schema)?;
        argbind::EnvFallback::for_program("top").apply(&mut resolved, &schema);
        ensure!(resolved.source("help") == Some(ValueSource::CommandLine));
        ensure!(resolved.source("memory-units") == Some(ValueSource::Environment));
        ensure!(resolved.payload("memory-units") == Some(Some("mb")));
        Ok(())
    })
}
