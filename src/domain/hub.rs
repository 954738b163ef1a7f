//! The hub configuration aggregate and its cross-field invariants.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::service::ServiceRegistration;
use crate::domain::types::{BindUrl, LogLevel, PluginName, TypeConstraintError, Username};

/// Violations of aggregate-level invariants detected while assembling a
/// [`HubConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HubConfigError {
    #[error(transparent)]
    Constraint(#[from] TypeConstraintError),

    #[error("allowed user set cannot be empty")]
    NoAllowedUsers,

    #[error("admin user '{0}' is missing from allowed users")]
    AdminNotAllowed(String),

    #[error("duplicate service name '{0}'")]
    DuplicateServiceName(String),

    #[error("TLS requires both certificate and key paths")]
    IncompleteTls,
}

/// Certificate and key the hub terminates TLS with. Absence of the pair
/// means TLS is disabled.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TlsPaths {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Immutable description of a hub process, constructed once before startup.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct HubConfig {
    /// Address the hub listens on for user traffic.
    pub bind_url: BindUrl,
    /// Address the hub's internal REST API listens on.
    pub hub_bind_url: BindUrl,
    pub authenticator_class: PluginName,
    pub allowed_users: BTreeSet<Username>,
    pub admin_users: BTreeSet<Username>,
    pub spawner_class: PluginName,
    pub services: Vec<ServiceRegistration>,
    pub tls: Option<TlsPaths>,
    pub log_level: LogLevel,
}

impl HubConfig {
    /// Assembles the aggregate, enforcing the invariants that span fields:
    /// a non-empty allowed set, admins being a subset of allowed users, and
    /// pairwise distinct service names.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        bind_url: BindUrl,
        hub_bind_url: BindUrl,
        authenticator_class: PluginName,
        allowed_users: BTreeSet<Username>,
        admin_users: BTreeSet<Username>,
        spawner_class: PluginName,
        services: Vec<ServiceRegistration>,
        tls: Option<TlsPaths>,
        log_level: LogLevel,
    ) -> Result<Self, HubConfigError> {
        if allowed_users.is_empty() {
            return Err(HubConfigError::NoAllowedUsers);
        }
        if let Some(outsider) = admin_users.difference(&allowed_users).next() {
            return Err(HubConfigError::AdminNotAllowed(outsider.to_string()));
        }

        let mut seen = BTreeSet::new();
        for service in &services {
            if !seen.insert(service.name.clone()) {
                return Err(HubConfigError::DuplicateServiceName(
                    service.name.to_string(),
                ));
            }
        }

        Ok(Self {
            bind_url,
            hub_bind_url,
            authenticator_class,
            allowed_users,
            admin_users,
            spawner_class,
            services,
            tls,
            log_level,
        })
    }

    /// Whether the hub will terminate TLS itself.
    pub fn tls_enabled(&self) -> bool {
        self.tls.is_some()
    }

    /// Whether the named user carries administrative privileges.
    pub fn is_admin(&self, name: &str) -> bool {
        self.admin_users.iter().any(|user| user.as_str() == name)
    }

    /// Looks up a registered service by its unique name.
    pub fn find_service(&self, name: &str) -> Option<&ServiceRegistration> {
        self.services
            .iter()
            .find(|service| service.name.as_str() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users(names: &[&str]) -> BTreeSet<Username> {
        names
            .iter()
            .map(|name| Username::new(*name).unwrap())
            .collect()
    }

    fn base_config(
        allowed: &[&str],
        admins: &[&str],
        services: Vec<ServiceRegistration>,
    ) -> Result<HubConfig, HubConfigError> {
        HubConfig::try_new(
            BindUrl::new("http://0.0.0.0:8000").unwrap(),
            BindUrl::new("http://0.0.0.0:8081").unwrap(),
            PluginName::new("dummy").unwrap(),
            users(allowed),
            users(admins),
            PluginName::new("simple").unwrap(),
            services,
            None,
            LogLevel::Debug,
        )
    }

    #[test]
    fn accepts_admins_within_allowed_users() {
        let config = base_config(&["testuser", "admin"], &["admin"], Vec::new()).unwrap();
        assert!(config.is_admin("admin"));
        assert!(!config.is_admin("testuser"));
        assert!(!config.tls_enabled());
    }

    #[test]
    fn rejects_admin_outside_allowed_users() {
        let result = base_config(&["testuser"], &["admin"], Vec::new());
        assert_eq!(
            result,
            Err(HubConfigError::AdminNotAllowed("admin".to_string()))
        );
    }

    #[test]
    fn rejects_empty_allowed_users() {
        let result = base_config(&[], &[], Vec::new());
        assert_eq!(result, Err(HubConfigError::NoAllowedUsers));
    }

    #[test]
    fn rejects_duplicate_service_names() {
        let services = vec![
            ServiceRegistration::try_new("svc", "http://127.0.0.1:8888", None, None).unwrap(),
            ServiceRegistration::try_new("svc", "http://127.0.0.1:8889", None, None).unwrap(),
        ];
        let result = base_config(&["testuser"], &[], services);
        assert_eq!(
            result,
            Err(HubConfigError::DuplicateServiceName("svc".to_string()))
        );
    }

    #[test]
    fn finds_services_by_name() {
        let services = vec![
            ServiceRegistration::try_new("alpha", "http://127.0.0.1:8888", None, None).unwrap(),
            ServiceRegistration::try_new("beta", "http://127.0.0.1:8889", None, None).unwrap(),
        ];
        let config = base_config(&["testuser"], &[], services).unwrap();
        assert_eq!(
            config.find_service("beta").map(|s| s.url.as_str()),
            Some("http://127.0.0.1:8889")
        );
        assert!(config.find_service("gamma").is_none());
    }
}
