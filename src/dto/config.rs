//! Flat serializable representation of a validated configuration.
//!
//! Bridges the domain aggregate with the template renderer and the JSON
//! summary printed by the CLI.

use serde::Serialize;

use crate::domain::hub::HubConfig;
use crate::domain::service::ServiceRegistration;

#[derive(Clone, Debug, Serialize)]
pub struct ServiceRepr {
    pub name: String,
    pub url: String,
    pub oauth_client_id: String,
    pub api_token: String,
}

impl From<&ServiceRegistration> for ServiceRepr {
    fn from(service: &ServiceRegistration) -> Self {
        Self {
            name: service.name.to_string(),
            url: service.url.to_string(),
            oauth_client_id: service.oauth_client_id.to_string(),
            api_token: service.api_token.as_str().to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct HubConfigRepr {
    pub bind_url: String,
    pub hub_bind_url: String,
    pub authenticator_class: String,
    pub allowed_users: Vec<String>,
    pub admin_users: Vec<String>,
    pub spawner_class: String,
    pub services: Vec<ServiceRepr>,
    /// Empty when TLS is disabled, mirroring the host's sentinel.
    pub ssl_cert: String,
    pub ssl_key: String,
    pub log_level: String,
}

impl From<&HubConfig> for HubConfigRepr {
    fn from(config: &HubConfig) -> Self {
        Self {
            bind_url: config.bind_url.to_string(),
            hub_bind_url: config.hub_bind_url.to_string(),
            authenticator_class: config.authenticator_class.to_string(),
            allowed_users: config
                .allowed_users
                .iter()
                .map(ToString::to_string)
                .collect(),
            admin_users: config.admin_users.iter().map(ToString::to_string).collect(),
            spawner_class: config.spawner_class.to_string(),
            services: config.services.iter().map(ServiceRepr::from).collect(),
            ssl_cert: config
                .tls
                .as_ref()
                .map(|tls| tls.cert.display().to_string())
                .unwrap_or_default(),
            ssl_key: config
                .tls
                .as_ref()
                .map(|tls| tls.key.display().to_string())
                .unwrap_or_default(),
            log_level: config.log_level.to_string(),
        }
    }
}
