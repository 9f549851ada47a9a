use clap::{ArgAction, Parser, builder::BoolishValueParser};
use company_http::HttpServerConfig;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_DATA_PATH: &str = "companies.json";
const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Parser, Debug)]
#[command(name = "companyd", version, about = "Company directory HTTP daemon.")]
struct CliArgs {
    #[arg(long, env = "COMPANYD_DATA_PATH", default_value = DEFAULT_DATA_PATH)]
    data_path: PathBuf,

    #[arg(long, env = "COMPANYD_HTTP_ADDR", default_value = DEFAULT_HTTP_ADDR)]
    http_addr: SocketAddr,

    #[arg(
        long,
        env = "COMPANYD_CORS",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    cors: bool,

    #[arg(
        long,
        env = "COMPANYD_REQUEST_TIMEOUT_SECS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS
    )]
    request_timeout_secs: u64,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
pub struct CompanydConfig {
    pub data_path: PathBuf,
    pub http_addr: SocketAddr,
    pub cors: bool,
    pub request_timeout: Option<Duration>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {name} value: {value}")]
    InvalidSetting { name: &'static str, value: String },
}

impl CompanydConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }

    pub const fn http_config(&self) -> HttpServerConfig {
        HttpServerConfig::new(self.http_addr)
            .with_cors(self.cors)
            .with_request_timeout(self.request_timeout)
    }
}

impl TryFrom<CliArgs> for CompanydConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.data_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "COMPANYD_DATA_PATH",
                value: String::new(),
            });
        }

        let request_timeout = if args.request_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(args.request_timeout_secs))
        };

        Ok(Self {
            data_path: args.data_path,
            http_addr: args.http_addr,
            cors: args.cors,
            request_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> CliArgs {
        CliArgs {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            http_addr: DEFAULT_HTTP_ADDR.parse().expect("valid HTTP addr"),
            cors: true,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    #[test]
    fn defaults_parse_from_empty_command_line() {
        let args = CliArgs::try_parse_from(["companyd"]).expect("defaults should parse");
        let config = CompanydConfig::try_from(args).expect("config should parse");

        assert_eq!(config.data_path, PathBuf::from("companies.json"));
        assert_eq!(config.http_addr.port(), 5000);
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn flags_override_defaults() {
        let args = CliArgs::try_parse_from([
            "companyd",
            "--data-path",
            "/srv/data/companies.json",
            "--http-addr",
            "0.0.0.0:8080",
            "--cors",
            "false",
        ])
        .expect("flags should parse");
        let config = CompanydConfig::try_from(args).expect("config should parse");

        assert_eq!(config.data_path, PathBuf::from("/srv/data/companies.json"));
        assert_eq!(config.http_addr.port(), 8080);
        assert!(!config.cors);
    }

    #[test]
    fn zero_timeout_disables_timeout() {
        let mut args = base_args();
        args.request_timeout_secs = 0;

        let config = CompanydConfig::try_from(args).expect("config should parse");

        assert!(config.request_timeout.is_none());
        assert!(config.http_config().request_timeout.is_none());
    }

    #[test]
    fn empty_data_path_is_rejected() {
        let mut args = base_args();
        args.data_path = PathBuf::new();

        let err = CompanydConfig::try_from(args).expect_err("empty path should fail");

        assert!(matches!(
            err,
            ConfigError::InvalidSetting {
                name: "COMPANYD_DATA_PATH",
                ..
            }
        ));
    }
}
