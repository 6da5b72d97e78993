use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use chrono::FixedOffset;

use crate::workflows::interviews::conflicts::DEFAULT_CONFLICT_WINDOW_MINUTES;
use crate::workflows::interviews::schedule_time::parse_offset;
use crate::workflows::interviews::wizard::{DEFAULT_DURATION_MINUTES, MAX_DURATION_MINUTES};

/// Deployment stage the dashboard runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub scheduling: SchedulingConfig,
}

impl AppConfig {
    /// Reads `.env` when present, then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::parse(&var_or("APP_ENV", "development"));

        let host = var_or("APP_HOST", "127.0.0.1");
        let port = var_or("APP_PORT", "3000")
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = var_or("APP_LOG_LEVEL", "info");

        let conflict_window_minutes = minutes_var(
            "SCHEDULING_CONFLICT_WINDOW_MINUTES",
            DEFAULT_CONFLICT_WINDOW_MINUTES,
        )?;
        let default_duration_minutes = minutes_var(
            "SCHEDULING_DEFAULT_DURATION_MINUTES",
            DEFAULT_DURATION_MINUTES,
        )?;
        if default_duration_minutes > MAX_DURATION_MINUTES {
            return Err(ConfigError::InvalidMinutes {
                key: "SCHEDULING_DEFAULT_DURATION_MINUTES",
            });
        }
        let raw_offset = var_or("SCHEDULING_LOCAL_OFFSET", "+00:00");
        let local_offset =
            parse_offset(&raw_offset).map_err(|_| ConfigError::InvalidOffset { value: raw_offset })?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            scheduling: SchedulingConfig {
                conflict_window_minutes,
                default_duration_minutes,
                local_offset,
            },
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn minutes_var(key: &'static str, default: u32) -> Result<u32, ConfigError> {
    match env::var(key) {
        Ok(value) => match value.trim().parse::<u32>() {
            Ok(minutes) if minutes > 0 => Ok(minutes),
            _ => Err(ConfigError::InvalidMinutes { key }),
        },
        Err(_) => Ok(default),
    }
}

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

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Tunables for the interview wizard and conflict checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulingConfig {
    pub conflict_window_minutes: u32,
    pub default_duration_minutes: u32,
    /// Offset the CLI uses when rendering and reading picker times.
    pub local_offset: FixedOffset,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidMinutes { key: &'static str },
    InvalidOffset { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidMinutes { key } => {
                write!(f, "{key} must be a positive number of minutes (at most {MAX_DURATION_MINUTES} for durations)")
            }
            ConfigError::InvalidOffset { value } => {
                write!(f, "SCHEDULING_LOCAL_OFFSET '{value}' is not a UTC offset such as +02:00")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidMinutes { .. }
            | ConfigError::InvalidOffset { .. } => None,
        }
    }
}
