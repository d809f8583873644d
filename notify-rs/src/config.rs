use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub email: EmailConfig,
    pub notifications: NotificationsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Outbound email provider endpoint (accepts {from, to, subject, html})
    pub api_url: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotificationsConfig {
    /// Minutes between scheduler ticks; sizes the reminder query window so
    /// consecutive runs are contiguous without overlap
    pub run_interval_minutes: i64,
    /// Lead minutes for synthetic test-mode sessions
    pub default_lead_minutes: i64,
    /// Attendee portal base URL used in email links
    pub portal_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::NotifyError::Config(e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| crate::error::NotifyError::Config(e.to_string()))
    }

    pub fn default() -> Self {
        Self {
            server: ServerConfig {
                listen_addr: "0.0.0.0:8080".to_string(),
            },
            database: DatabaseConfig {
                url: "sqlite://events.db".to_string(),
            },
            email: EmailConfig {
                api_url: "https://api.resend.com/emails".to_string(),
                api_key: String::new(),
            },
            notifications: NotificationsConfig {
                run_interval_minutes: 15,
                default_lead_minutes: 30,
                portal_url: "https://portal.localhost".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}
