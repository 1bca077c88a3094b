use crate::fraud::{NightWindow, RuleConfiguration};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

const DEFAULT_HIGH_RISK_COUNTRIES: &str = "MM,GH,KE,ZA,BR,CY";

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub rules: RuleConfiguration,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            rules: load_rules()?,
        })
    }
}

fn load_rules() -> Result<RuleConfiguration, ConfigError> {
    let countries = env::var("FRAUD_HIGH_RISK_COUNTRIES")
        .unwrap_or_else(|_| DEFAULT_HIGH_RISK_COUNTRIES.to_string());
    let defaults = NightWindow::default();

    let night_window = NightWindow {
        start_hour_utc: hour_from_env(
            "FRAUD_NIGHT_WINDOW_START_HOUR_UTC",
            defaults.start_hour_utc,
        )?,
        end_hour_utc: hour_from_env("FRAUD_NIGHT_WINDOW_END_HOUR_UTC", defaults.end_hour_utc)?,
    };

    Ok(RuleConfiguration::new(
        countries.split(',').map(str::trim),
        night_window,
    ))
}

fn hour_from_env(variable: &'static str, default: u8) -> Result<u8, ConfigError> {
    let raw = match env::var(variable) {
        Ok(raw) => raw,
        Err(_) => return Ok(default),
    };

    match raw.trim().parse::<u8>() {
        Ok(hour) if hour <= 23 => Ok(hour),
        _ => Err(ConfigError::InvalidHour {
            variable,
            value: raw,
        }),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidHour { variable: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidHour { variable, value } => {
                write!(f, "{variable} must be an hour between 0 and 23 (found '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidHour { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
