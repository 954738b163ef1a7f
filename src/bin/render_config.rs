//! Renders the host-consumable `jupyterhub_config.py` from a validated hub
//! description.
//!
//! Usage: `render_config [config_path] [output_path]`. Without arguments it
//! loads the default layering and writes to stdout.

use std::env;
use std::path::Path;

use dotenvy::dotenv;

use jhub_config::{loader, render};

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let mut args = env::args().skip(1);
    let config_path = args.next();
    let output_path = args.next();

    let config = match config_path {
        Some(path) => loader::load_from_file(&path),
        None => {
            let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());
            loader::load_default(&app_env)
        }
    };

    let config = match config {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading hub config: {err}");
            std::process::exit(1);
        }
    };

    match output_path {
        Some(path) => {
            if let Err(err) = render::write_python(&config, Path::new(&path)) {
                log::error!("Error rendering hub config: {err}");
                std::process::exit(1);
            }
            log::info!("Rendered hub configuration to {path}");
        }
        None => match render::render_python(&config) {
            Ok(rendered) => print!("{rendered}"),
            Err(err) => {
                log::error!("Error rendering hub config: {err}");
                std::process::exit(1);
            }
        },
    }
}
