//! Raw configuration shapes loaded from external sources.
//!
//! These mirror the on-disk mapping one-to-one as plain strings; conversion
//! into the typed [`HubConfig`](crate::domain::hub::HubConfig) aggregate
//! performs all validation.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::hub::{HubConfig, HubConfigError, TlsPaths};
use crate::domain::service::ServiceRegistration;
use crate::domain::types::{BindUrl, LogLevel, PluginName, Username};
use crate::{DEFAULT_BIND_URL, DEFAULT_HUB_BIND_URL};

fn default_bind_url() -> String {
    DEFAULT_BIND_URL.to_string()
}

fn default_hub_bind_url() -> String {
    DEFAULT_HUB_BIND_URL.to_string()
}

fn default_log_level() -> String {
    "INFO".to_string()
}

/// One entry of the service registration list.
#[derive(Clone, Debug, Deserialize)]
pub struct ServiceEntry {
    pub name: String,
    pub url: String,
    /// Defaults to `service-<name>` when absent.
    pub oauth_client_id: Option<String>,
    /// Generated when absent.
    pub api_token: Option<String>,
}

/// Flat mapping of dotted option paths as they appear in the file.
#[derive(Clone, Debug, Deserialize)]
pub struct HubConfigFile {
    #[serde(default = "default_bind_url")]
    pub bind_url: String,
    #[serde(default = "default_hub_bind_url")]
    pub hub_bind_url: String,
    pub authenticator_class: String,
    pub allowed_users: Vec<String>,
    #[serde(default)]
    pub admin_users: Vec<String>,
    pub spawner_class: String,
    #[serde(default)]
    pub services: Vec<ServiceEntry>,
    /// Empty string means TLS is disabled.
    #[serde(default)]
    pub ssl_cert: String,
    #[serde(default)]
    pub ssl_key: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl TryFrom<HubConfigFile> for HubConfig {
    type Error = HubConfigError;

    fn try_from(raw: HubConfigFile) -> Result<Self, Self::Error> {
        let bind_url = BindUrl::new(raw.bind_url)?;
        let hub_bind_url = BindUrl::new(raw.hub_bind_url)?;
        let authenticator_class = PluginName::new(raw.authenticator_class)?;
        let spawner_class = PluginName::new(raw.spawner_class)?;

        let allowed_users = raw
            .allowed_users
            .into_iter()
            .map(Username::new)
            .collect::<Result<BTreeSet<_>, _>>()?;
        let admin_users = raw
            .admin_users
            .into_iter()
            .map(Username::new)
            .collect::<Result<BTreeSet<_>, _>>()?;

        let services = raw
            .services
            .into_iter()
            .map(|entry| {
                ServiceRegistration::try_new(
                    &entry.name,
                    &entry.url,
                    entry.oauth_client_id.as_deref(),
                    entry.api_token.as_deref(),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        // The empty string is the host's sentinel for "no TLS"; a lone cert
        // or key is a misconfiguration rather than a disabled pair.
        let tls = match (raw.ssl_cert.trim(), raw.ssl_key.trim()) {
            ("", "") => None,
            ("", _) | (_, "") => return Err(HubConfigError::IncompleteTls),
            (cert, key) => Some(TlsPaths {
                cert: PathBuf::from(cert),
                key: PathBuf::from(key),
            }),
        };

        let log_level: LogLevel = raw.log_level.parse()?;

        HubConfig::try_new(
            bind_url,
            hub_bind_url,
            authenticator_class,
            allowed_users,
            admin_users,
            spawner_class,
            services,
            tls,
            log_level,
        )
    }
}
