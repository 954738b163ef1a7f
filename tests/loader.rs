use std::fs;

use tempfile::TempDir;

use jhub_config::domain::hub::HubConfigError;
use jhub_config::domain::types::{LogLevel, TypeConstraintError};
use jhub_config::loader::{self, LoadError};

/// Writes a YAML fixture and returns the path (without extension) that the
/// loader resolves.
fn write_fixture(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("hub.yaml");
    fs::write(&path, contents).expect("failed to write fixture");
    dir.path().join("hub").to_string_lossy().into_owned()
}

const FULL_FIXTURE: &str = r#"
bind_url: "http://0.0.0.0:8000"
hub_bind_url: "http://0.0.0.0:8081"
authenticator_class: dummy
allowed_users:
  - testuser
  - admin
admin_users:
  - admin
spawner_class: simple
services:
  - name: test-service
    url: "http://host.docker.internal:8888"
    oauth_client_id: service-test-service
    api_token: test-token-12345
ssl_cert: ""
ssl_key: ""
log_level: DEBUG
"#;

#[test]
fn loads_a_complete_configuration() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, FULL_FIXTURE);

    let config = loader::load_from_file(&path).expect("load failed");

    assert_eq!(config.bind_url.as_str(), "http://0.0.0.0:8000");
    assert_eq!(config.hub_bind_url.port().unwrap(), 8081);
    assert_eq!(config.authenticator_class.as_str(), "dummy");
    assert_eq!(config.spawner_class.as_str(), "simple");
    assert_eq!(config.allowed_users.len(), 2);
    assert!(config.is_admin("admin"));
    assert!(!config.tls_enabled());
    assert_eq!(config.log_level, LogLevel::Debug);

    let service = config.find_service("test-service").expect("service missing");
    assert_eq!(service.url.as_str(), "http://host.docker.internal:8888");
    assert_eq!(service.oauth_client_id.as_str(), "service-test-service");
    assert_eq!(service.api_token.as_str(), "test-token-12345");
}

#[test]
fn fills_defaults_for_omitted_options() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        r#"
authenticator_class: dummy
allowed_users:
  - testuser
spawner_class: simple
services:
  - name: bare-service
    url: "http://127.0.0.1:9999"
"#,
    );

    let config = loader::load_from_file(&path).expect("load failed");

    assert_eq!(config.bind_url.as_str(), jhub_config::DEFAULT_BIND_URL);
    assert_eq!(
        config.hub_bind_url.as_str(),
        jhub_config::DEFAULT_HUB_BIND_URL
    );
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.admin_users.is_empty());
    assert!(!config.tls_enabled());

    let service = config.find_service("bare-service").expect("service missing");
    assert_eq!(service.oauth_client_id.as_str(), "service-bare-service");
    assert_eq!(service.api_token.as_str().len(), 32);
}

#[test]
fn rejects_admin_outside_allowed_users() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        r#"
authenticator_class: dummy
allowed_users:
  - testuser
admin_users:
  - admin
spawner_class: simple
"#,
    );

    match loader::load_from_file(&path) {
        Err(LoadError::Invalid(HubConfigError::AdminNotAllowed(name))) => {
            assert_eq!(name, "admin");
        }
        other => panic!("expected AdminNotAllowed, got {other:?}"),
    }
}

#[test]
fn rejects_duplicate_service_names() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        r#"
authenticator_class: dummy
allowed_users:
  - testuser
spawner_class: simple
services:
  - name: svc
    url: "http://127.0.0.1:8888"
  - name: svc
    url: "http://127.0.0.1:8889"
"#,
    );

    match loader::load_from_file(&path) {
        Err(LoadError::Invalid(HubConfigError::DuplicateServiceName(name))) => {
            assert_eq!(name, "svc");
        }
        other => panic!("expected DuplicateServiceName, got {other:?}"),
    }
}

#[test]
fn rejects_lone_tls_path() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        r#"
authenticator_class: dummy
allowed_users:
  - testuser
spawner_class: simple
ssl_cert: "/etc/hub/tls.crt"
"#,
    );

    assert!(matches!(
        loader::load_from_file(&path),
        Err(LoadError::Invalid(HubConfigError::IncompleteTls))
    ));
}

#[test]
fn rejects_bind_url_without_port() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        r#"
bind_url: "http://0.0.0.0"
authenticator_class: dummy
allowed_users:
  - testuser
spawner_class: simple
"#,
    );

    assert!(matches!(
        loader::load_from_file(&path),
        Err(LoadError::Invalid(HubConfigError::Constraint(
            TypeConstraintError::MissingPort
        )))
    ));
}

#[test]
fn rejects_unknown_log_level() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        r#"
authenticator_class: dummy
allowed_users:
  - testuser
spawner_class: simple
log_level: VERBOSE
"#,
    );

    assert!(matches!(
        loader::load_from_file(&path),
        Err(LoadError::Invalid(HubConfigError::Constraint(
            TypeConstraintError::UnknownLogLevel(_)
        )))
    ));
}

#[test]
fn rejects_empty_allowed_users() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        r#"
authenticator_class: dummy
allowed_users: []
spawner_class: simple
"#,
    );

    assert!(matches!(
        loader::load_from_file(&path),
        Err(LoadError::Invalid(HubConfigError::NoAllowedUsers))
    ));
}

#[test]
fn missing_file_is_a_source_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent").to_string_lossy().into_owned();

    assert!(matches!(
        loader::load_from_file(&path),
        Err(LoadError::Source(_))
    ));
}
