//! Rendering of the host-consumable Python configuration file.

use std::path::Path;

use tera::{Context, Tera};
use thiserror::Error;

use crate::domain::hub::HubConfig;
use crate::dto::config::HubConfigRepr;

const TEMPLATE_NAME: &str = "jupyterhub_config.py";
const TEMPLATE_SOURCE: &str = include_str!("../templates/jupyterhub_config.py.tera");

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template rendering failed: {0}")]
    Template(#[from] tera::Error),

    #[error("failed to write rendered configuration: {0}")]
    Io(#[from] std::io::Error),
}

fn templates() -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE_SOURCE)?;
    Ok(tera)
}

/// Escapes a value for interpolation into a single-quoted Python string
/// literal.
fn escape_py(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Every rendered value lands inside single quotes in the template, so the
/// whole representation is escaped up front.
fn escaped(mut repr: HubConfigRepr) -> HubConfigRepr {
    repr.bind_url = escape_py(&repr.bind_url);
    repr.hub_bind_url = escape_py(&repr.hub_bind_url);
    repr.authenticator_class = escape_py(&repr.authenticator_class);
    repr.spawner_class = escape_py(&repr.spawner_class);
    repr.allowed_users = repr.allowed_users.iter().map(|u| escape_py(u)).collect();
    repr.admin_users = repr.admin_users.iter().map(|u| escape_py(u)).collect();
    for service in &mut repr.services {
        service.name = escape_py(&service.name);
        service.url = escape_py(&service.url);
        service.oauth_client_id = escape_py(&service.oauth_client_id);
        service.api_token = escape_py(&service.api_token);
    }
    repr.ssl_cert = escape_py(&repr.ssl_cert);
    repr.ssl_key = escape_py(&repr.ssl_key);
    repr
}

/// Renders the configuration into the Python file the host reads at startup.
pub fn render_python(config: &HubConfig) -> Result<String, RenderError> {
    let context = Context::from_serialize(escaped(HubConfigRepr::from(config)))?;
    Ok(templates()?.render(TEMPLATE_NAME, &context)?)
}

/// Renders and persists the Python file, e.g. for mounting into a hub
/// container by an integration harness.
pub fn write_python(config: &HubConfig, path: &Path) -> Result<(), RenderError> {
    let rendered = render_python(config)?;
    std::fs::write(path, rendered)?;
    Ok(())
}
