use std::{fmt::Display, str::FromStr};
use tracing::warn;

/// Which `IReminderRepo` implementation the application stores `Reminder`s in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    InMemory,
}

/// Which `INotifier` implementation the application texts owners with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifierBackend {
    Twilio,
    InMemory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" => Ok(Self::Postgres),
            "inmemory" => Ok(Self::InMemory),
            _ => Err(format!("Unknown store backend: {}", s)),
        }
    }
}

impl FromStr for NotifierBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "twilio" => Ok(Self::Twilio),
            "inmemory" => Ok(Self::InMemory),
            _ => Err(format!("Unknown notifier backend: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Maximum number of connections in the postgres pool
    pub database_max_connections: u32,
    pub store: StoreBackend,
    pub notifier: NotifierBackend,
}

impl Config {
    pub fn new() -> Self {
        Self {
            port: env_or_default("PORT", 5000),
            database_max_connections: env_or_default("DATABASE_MAX_CONNECTIONS", 5),
            store: env_or_default("REMINDERS_STORE", StoreBackend::Postgres),
            notifier: env_or_default("REMINDERS_NOTIFIER", NotifierBackend::Twilio),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads and parses an environment variable, falling back to `default` when
/// it is missing or invalid
fn env_or_default<T: FromStr + Display>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(value) => match value.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    name, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

impl Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Postgres => write!(f, "postgres"),
            Self::InMemory => write!(f, "inmemory"),
        }
    }
}

impl Display for NotifierBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Twilio => write!(f, "twilio"),
            Self::InMemory => write!(f, "inmemory"),
        }
    }
}
