use std::{fs, path::Path};

use anyhow::{Context, Result};
use clap::ValueEnum;
use rolling_block_system_search::{CycleSuppression, SearchConfig};
use serde::Deserialize;

/// How the solver's answer is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Narrated move list.
    #[default]
    Text,
    /// Machine-readable report.
    Json,
}

/// Command-line spelling of [`CycleSuppression`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum SuppressionArg {
    /// Expand every state at most once.
    Visited,
    /// Only refuse to roll straight back onto the parent state.
    ParentOnly,
}

impl From<SuppressionArg> for CycleSuppression {
    fn from(value: SuppressionArg) -> Self {
        match value {
            SuppressionArg::Visited => Self::Visited,
            SuppressionArg::ParentOnly => Self::ParentOnly,
        }
    }
}

/// Output settings read from the `[output]` table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct OutputConfig {
    pub(crate) format: OutputFormat,
    pub(crate) stats: bool,
}

/// Settings loaded from the TOML configuration file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct CliConfig {
    pub(crate) search: SearchConfig,
    pub(crate) output: OutputConfig,
}

impl CliConfig {
    /// Reads and parses the configuration file at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file at {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("failed to parse config file at {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("invalid configuration toml")
    }

    /// Applies command-line overrides on top of the file settings.
    #[must_use]
    pub(crate) fn with_overrides(
        mut self,
        cycle_suppression: Option<SuppressionArg>,
        format: Option<OutputFormat>,
        stats: bool,
    ) -> Self {
        if let Some(cycle_suppression) = cycle_suppression {
            self.search.cycle_suppression = cycle_suppression.into();
        }
        if let Some(format) = format {
            self.output.format = format;
        }
        self.output.stats |= stats;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = CliConfig::parse("").expect("empty config is valid");

        assert_eq!(config, CliConfig::default());
        assert_eq!(config.search.cycle_suppression, CycleSuppression::Visited);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.stats);
    }

    #[test]
    fn parses_every_field() {
        let config = CliConfig::parse(
            r#"
            [search]
            cycle_suppression = "parent-only"

            [output]
            format = "json"
            stats = true
            "#,
        )
        .expect("valid config");

        assert_eq!(config.search.cycle_suppression, CycleSuppression::ParentOnly);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.stats);
    }

    #[test]
    fn rejects_unknown_keys() {
        let error = CliConfig::parse("[search]\ndepth = 3\n").expect_err("unknown key");
        assert!(error.to_string().contains("invalid configuration toml"));
    }

    #[test]
    fn flags_override_file_settings() {
        let file = CliConfig::parse("[search]\ncycle_suppression = \"parent-only\"\n")
            .expect("valid config");
        let merged = file.with_overrides(
            Some(SuppressionArg::Visited),
            Some(OutputFormat::Json),
            true,
        );

        assert_eq!(merged.search.cycle_suppression, CycleSuppression::Visited);
        assert_eq!(merged.output.format, OutputFormat::Json);
        assert!(merged.output.stats);

        let untouched = file.with_overrides(None, None, false);
        assert_eq!(untouched, file);
    }
}
