//! Text normalisation helpers for comparing rendered help and diagnostics.

/// Normalises line endings and strips trailing whitespace from each line.
#[must_use]
pub fn normalise_lines(value: &str) -> Vec<String> {
    value
        .replace("\r\n", "\n")
        .lines()
        .map(|line| line.trim_end().to_owned())
        .collect()
}

/// Removes the indentation tabs help output uses, keeping line order.
#[must_use]
pub fn strip_indent(value: &str) -> Vec<String> {
    normalise_lines(value)
        .into_iter()
        .map(|line| line.trim_start_matches('\t').to_owned())
        .collect()
}
