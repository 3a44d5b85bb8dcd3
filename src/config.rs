//! Runtime configuration for the web binary, read from the environment.
//! HOST (default 0.0.0.0), PORT (default 8080), FIXTURE_VENUE (default "Por definir").

use crate::models::DEFAULT_VENUE;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Venue written into matches when a request does not name one.
    pub default_venue: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            default_venue: DEFAULT_VENUE.to_string(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(default_host);
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("Invalid PORT '{}', using {}", raw, default_port());
                default_port()
            }),
            None => default_port(),
        };
        let default_venue = lookup("FIXTURE_VENUE")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_VENUE.to_string());
        Self {
            host,
            port,
            default_venue,
        }
    }
}
