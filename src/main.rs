//! Loads the layered hub configuration, validates it, and prints the
//! resolved options as JSON.

use std::env;

use dotenvy::dotenv;

use jhub_config::dto::config::HubConfigRepr;
use jhub_config::loader;

fn main() {
    // Load environment variables from `.env` in local development.
    dotenv().ok();
    // Initialize logger with default level INFO if not provided.
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let config = match loader::load_default(&app_env) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading hub config: {err}");
            std::process::exit(1);
        }
    };

    log::info!(
        "Hub binds {} (users) and {} (internal API)",
        config.bind_url,
        config.hub_bind_url
    );
    log::info!(
        "Authenticator '{}', spawner '{}', log level {}",
        config.authenticator_class,
        config.spawner_class,
        config.log_level
    );
    log::info!(
        "{} allowed users, {} admins, TLS {}",
        config.allowed_users.len(),
        config.admin_users.len(),
        if config.tls_enabled() {
            "enabled"
        } else {
            "disabled"
        }
    );
    for service in &config.services {
        log::info!("Service '{}' proxied to {}", service.name, service.url);
    }

    let repr = HubConfigRepr::from(&config);
    match serde_json::to_string_pretty(&repr) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            log::error!("Error serializing hub config: {err}");
            std::process::exit(1);
        }
    }
}
