use crate::config::toml_config::{FeedConfig, SourceConfig};
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_field, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "feed-loader")]
#[command(about = "Fetch a remote feed once and print its items as JSON")]
pub struct CliConfig {
    #[arg(long, help = "Feed endpoint; overrides source.url from --config")]
    pub url: Option<String>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Request timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Merges command-line flags over the optional config file and validates the result.
    pub fn resolve(&self) -> Result<FeedConfig> {
        let file = self
            .config
            .as_ref()
            .map(FeedConfig::from_file)
            .transpose()?;

        let url = self
            .url
            .clone()
            .or_else(|| file.as_ref().map(|c| c.source.url.clone()));
        let url = validate_required_field("source.url", &url)?.clone();

        let timeout_seconds = self
            .timeout_seconds
            .or_else(|| file.as_ref().and_then(|c| c.source.timeout_seconds));

        let config = FeedConfig {
            source: SourceConfig {
                url,
                timeout_seconds,
                user_agent: file.and_then(|c| c.source.user_agent),
            },
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FeedError;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    #[test]
    fn test_url_flag_alone_is_enough() {
        let cli = CliConfig::parse_from(["feed-loader", "--url", "https://a-url.com/feed"]);

        let config = cli.resolve().unwrap();
        assert_eq!(config.source.url, "https://a-url.com/feed");
        assert!(config.source.timeout_seconds.is_none());
    }

    #[test]
    fn test_missing_url_is_reported() {
        let cli = CliConfig::parse_from(["feed-loader"]);

        assert!(matches!(
            cli.resolve(),
            Err(FeedError::MissingConfigError { field }) if field == "source.url"
        ));
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                br#"
[source]
url = "https://file.example.com/feed"
timeout_seconds = 5
user_agent = "from-file/1.0"
"#,
            )
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "feed-loader",
            "--config",
            path.as_str(),
            "--timeout-seconds",
            "9",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.source.url, "https://file.example.com/feed");
        assert_eq!(config.timeout(), Duration::from_secs(9));
        assert_eq!(config.user_agent(), "from-file/1.0");

        let cli = CliConfig::parse_from([
            "feed-loader",
            "--config",
            path.as_str(),
            "--url",
            "https://flag.example.com/feed",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.source.url, "https://flag.example.com/feed");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_flag_url_fails_validation() {
        let cli = CliConfig::parse_from(["feed-loader", "--url", "ftp://a-url.com"]);
        assert!(matches!(
            cli.resolve(),
            Err(FeedError::InvalidConfigValueError { .. })
        ));
    }
}
