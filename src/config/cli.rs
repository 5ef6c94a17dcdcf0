use crate::config::settings::{env_lookup, Settings};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "soil-suitability")]
#[command(about = "Query SoilGrids soil properties and agricultural suitability for a coordinate")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the SoilGrids properties endpoint
    #[arg(long)]
    pub api_url: Option<String>,

    /// Request timeout for the provider call
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print clay, organic carbon, pH, sand and silt for a coordinate
    Info(CoordinateArgs),
    /// Print the suitability verdict with its per-criterion breakdown
    Suitability(CoordinateArgs),
}

#[derive(Debug, Clone, Copy, Args)]
pub struct CoordinateArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,
}

impl CliConfig {
    /// File (or defaults), then environment, then flags; validated.
    pub fn resolve_settings(&self) -> Result<Settings> {
        self.resolve_settings_with(env_lookup)
    }

    /// Same layering as [`resolve_settings`](Self::resolve_settings), with
    /// environment values taken from `lookup`.
    pub fn resolve_settings_with<F>(&self, lookup: F) -> Result<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = match &self.config {
            Some(path) => Settings::from_file_with(path, lookup)?,
            None => Settings::from_env_with(lookup)?,
        };

        if let Some(api_url) = &self.api_url {
            settings.provider.endpoint = api_url.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.provider.timeout_seconds = Some(timeout);
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn coordinates(&self) -> CoordinateArgs {
        match &self.command {
            Command::Info(args) | Command::Suitability(args) => *args,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_suitability_with_negative_coordinates() {
        let cli = CliConfig::try_parse_from([
            "soil-suitability",
            "suitability",
            "--lat",
            "-33.9",
            "--lon",
            "-70.6",
        ])
        .unwrap();

        assert!(matches!(cli.command, Command::Suitability(_)));
        let coords = cli.coordinates();
        assert_eq!(coords.lat, -33.9);
        assert_eq!(coords.lon, -70.6);
    }

    #[test]
    fn test_flags_override_settings() {
        let cli = CliConfig::try_parse_from([
            "soil-suitability",
            "--api-url",
            "http://127.0.0.1:8080/query",
            "--timeout-seconds",
            "3",
            "info",
            "--lat",
            "25",
            "--lon",
            "33",
        ])
        .unwrap();

        let settings = cli.resolve_settings_with(|_| None).unwrap();

        assert_eq!(settings.provider.endpoint, "http://127.0.0.1:8080/query");
        assert_eq!(settings.provider.timeout_seconds, Some(3));
    }

    #[test]
    fn test_invalid_api_url_fails_validation() {
        let cli = CliConfig::try_parse_from([
            "soil-suitability",
            "--api-url",
            "not a url",
            "info",
            "--lat",
            "0",
            "--lon",
            "0",
        ])
        .unwrap();

        assert!(cli.resolve_settings_with(|_| None).is_err());
    }

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_file_then_env_then_flags() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("soil.toml");
        std::fs::write(
            &config_path,
            r#"
[provider]
endpoint = "http://file.example.org/query"
timeout_seconds = 10

[logging]
level = "debug"
"#,
        )
        .unwrap();
        let config_path = config_path.to_str().unwrap();
        let env = |key: &str| match key {
            "SOILGRIDS_API_URL" => Some("http://env.example.org/query".to_string()),
            "LOG_LEVEL" => Some("warn".to_string()),
            _ => None,
        };

        let base = ["soil-suitability", "-c", config_path, "info", "--lat", "0", "--lon", "0"];

        let file_only = parse(&base).resolve_settings_with(|_| None).unwrap();
        assert_eq!(file_only.provider.endpoint, "http://file.example.org/query");
        assert_eq!(file_only.logging.level, "debug");
        assert_eq!(file_only.provider.timeout_seconds, Some(10));

        let with_env = parse(&base).resolve_settings_with(env).unwrap();
        assert_eq!(with_env.provider.endpoint, "http://env.example.org/query");
        assert_eq!(with_env.logging.level, "warn");
        assert_eq!(with_env.provider.timeout_seconds, Some(10));

        let with_flags = parse(&[
            "soil-suitability",
            "-c",
            config_path,
            "--api-url",
            "http://flag.example.org/query",
            "--timeout-seconds",
            "4",
            "info",
            "--lat",
            "0",
            "--lon",
            "0",
        ])
        .resolve_settings_with(env)
        .unwrap();
        assert_eq!(with_flags.provider.endpoint, "http://flag.example.org/query");
        assert_eq!(with_flags.logging.level, "warn");
        assert_eq!(with_flags.provider.timeout_seconds, Some(4));
    }
}
