use clap::{Parser, ValueEnum};
use relink_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::time::Duration;

pub const LISTEN_ADDR_ENV: &str = "RELINK_LISTEN_ADDR";
pub const PUBLIC_BASE_URL_ENV: &str = "RELINK_PUBLIC_BASE_URL";
pub const STORAGE_BACKEND_ENV: &str = "RELINK_STORAGE_BACKEND";
pub const MYSQL_DSN_ENV: &str = "RELINK_MYSQL_DSN";
pub const CODE_LENGTH_ENV: &str = "RELINK_CODE_LENGTH";
pub const MAX_ATTEMPTS_ENV: &str = "RELINK_MAX_ATTEMPTS";
pub const CACHE_CAPACITY_ENV: &str = "RELINK_CACHE_CAPACITY";
pub const CACHE_TTL_SECS_ENV: &str = "RELINK_CACHE_TTL_SECS";
pub const MAX_BODY_BYTES_ENV: &str = "RELINK_MAX_BODY_BYTES";
pub const LOG_FORMAT_ENV: &str = "RELINK_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "mysql")]
    Mysql,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Mysql => write!(f, "mysql"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "relink-gateway")]
pub struct Cli {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Base of every short URL unless a request supplies `baseUrl`.
    #[arg(long, env = PUBLIC_BASE_URL_ENV, default_value = DEFAULT_PUBLIC_BASE_URL)]
    pub public_base_url: String,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = MYSQL_DSN_ENV, required_if_eq("storage", "mysql"))]
    pub mysql_dsn: Option<String>,

    #[arg(long, env = CODE_LENGTH_ENV, default_value_t = relink_generator::random::DEFAULT_LENGTH)]
    pub code_length: usize,

    /// Codes tried per URL before a collision is reported.
    #[arg(long, env = MAX_ATTEMPTS_ENV, default_value_t = 5)]
    pub max_attempts: usize,

    #[arg(long, env = CACHE_CAPACITY_ENV, default_value_t = 10_000)]
    pub cache_capacity: u64,

    #[arg(long, env = CACHE_TTL_SECS_ENV, default_value_t = 300)]
    pub cache_ttl_secs: u64,

    #[arg(long, env = MAX_BODY_BYTES_ENV, default_value_t = crate::app::DEFAULT_BODY_LIMIT)]
    pub max_body_bytes: usize,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormatArg::Pretty)]
    pub log_format: LogFormatArg,
}

impl Cli {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}
