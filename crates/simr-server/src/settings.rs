//! Server settings
//!
//! Defaults overlaid with the process environment. Variable names are the
//! upper-case field names, e.g. `GOOGLE_CLOUD_PROJECT`.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub bind_address: String,
    /// Overrides the port of `bind_address` when set (Cloud Run injects it)
    pub port: Option<u16>,
    pub google_cloud_project: String,
    pub firestore_database: String,
    pub google_application_credentials: Option<PathBuf>,
    /// `host:port` of a Firestore emulator; disables authentication
    pub firestore_emulator_host: Option<String>,
    pub firestore_timeout_secs: u64,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::default())
    }

    fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("bind_address", "0.0.0.0:8000")?
            .set_default("google_cloud_project", "simr-2026")?
            .set_default("firestore_database", "(default)")?
            .set_default("firestore_timeout_secs", 10)?
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn listen_address(&self) -> anyhow::Result<SocketAddr> {
        let mut addr: SocketAddr = self.bind_address.parse()?;
        if let Some(port) = self.port {
            addr.set_port(port);
        }
        Ok(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(vars: &[(&str, &str)]) -> Settings {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_environment(Environment::default().source(Some(source))).unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = settings_from(&[]);

        assert_eq!(settings.google_cloud_project, "simr-2026");
        assert_eq!(settings.firestore_database, "(default)");
        assert_eq!(settings.firestore_timeout_secs, 10);
        assert!(settings.google_application_credentials.is_none());
        assert!(settings.firestore_emulator_host.is_none());
        assert_eq!(
            settings.listen_address().unwrap(),
            "0.0.0.0:8000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_environment_overrides() {
        let settings = settings_from(&[
            ("GOOGLE_CLOUD_PROJECT", "simr-staging"),
            ("FIRESTORE_EMULATOR_HOST", "localhost:8080"),
            ("PORT", "9090"),
        ]);

        assert_eq!(settings.google_cloud_project, "simr-staging");
        assert_eq!(settings.firestore_emulator_host.as_deref(), Some("localhost:8080"));
        assert_eq!(settings.listen_address().unwrap().port(), 9090);
    }
}
