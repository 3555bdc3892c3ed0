pub mod cli;
pub mod toml_config;

use crate::core::columns::ColumnMap;
use crate::core::report::OutputFormat;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_distinct_columns, validate_positive_number, Validate,
};

#[cfg(feature = "cli")]
use crate::utils::error::MedalError;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::Settings;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "medal-table")]
#[command(about = "Builds an Olympic medal table from a comma-separated medals export")]
pub struct CliConfig {
    /// Medals file to read (exactly one). Put `--` before a name starting with `-`.
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// TOML settings file with column positions and strict mode
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format for the report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Fail on the first row that cannot be read instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// The single input path; any other number of positional arguments is an error.
    pub fn input_path(&self) -> Result<&str> {
        match self.files.as_slice() {
            [] => Err(MedalError::no_filename()),
            [path] => Ok(path.as_str()),
            _ => Err(MedalError::too_many_parameters()),
        }
    }

    /// Merges the settings file (if any) with command-line overrides.
    pub fn resolve(&self) -> Result<RunConfig> {
        let input_path = self.input_path()?.to_string();

        let settings = match &self.config {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path);
                Settings::from_file(path)?
            }
            None => Settings::default(),
        };
        settings.validate()?;

        Ok(RunConfig {
            input_path,
            columns: settings.columns,
            strict: settings.strict || self.strict,
            format: self.format,
        })
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_path: String,
    pub columns: ColumnMap,
    pub strict: bool,
    pub format: OutputFormat,
}

impl RunConfig {
    pub fn new(input_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            columns: ColumnMap::default(),
            strict: false,
            format: OutputFormat::default(),
        }
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    fn strict(&self) -> bool {
        self.strict
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_distinct_columns(&self.columns.roles())?;
        validate_positive_number(
            "columns.country_code_max_len",
            self.columns.country_code_max_len,
            1,
        )?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(std::iter::once("medal-table").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_argument_count() {
        assert!(matches!(
            parse(&[]).input_path(),
            Err(MedalError::ArgumentCountError { .. })
        ));
        assert_eq!(parse(&["medals.csv"]).input_path().unwrap(), "medals.csv");

        let err = parse(&["a.csv", "b.csv"]).input_path().unwrap_err();
        assert!(err.to_string().starts_with("Too many parameters"));
    }

    #[test]
    fn test_resolve_defaults() {
        let config = parse(&["medals.csv"]).resolve().unwrap();

        assert_eq!(config.input_path, "medals.csv");
        assert_eq!(config.columns, ColumnMap::default());
        assert!(!config.strict);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resolve_with_settings_file_and_overrides() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[columns]\ngender = 5").unwrap();
        let settings_path = file.path().to_str().unwrap().to_string();

        let config = parse(&["--config", &settings_path, "--strict", "--format", "json", "medals.csv"])
            .resolve()
            .unwrap();

        assert_eq!(config.columns.gender, 5);
        assert!(config.strict);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_run_config_validation() {
        let mut config = RunConfig::new("medals.csv");
        assert!(config.validate().is_ok());

        config.columns.country_fallback = config.columns.country;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_input_path_is_left_to_the_read() {
        let config = parse(&["   "]).resolve().unwrap();

        assert_eq!(config.input_path, "   ");
        assert!(config.validate().is_ok());
    }
}
