use anyhow::{Context, bail};
use aquasite_config::Config;
use aquasite_dioxus::services::Services;
use aquasite_dioxus::ui::App;
use dioxus::prelude::*;
use std::env;
use std::process;

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("aquasite starting up");

    let services = match resolve_services() {
        Ok(services) => services,
        Err(e) => {
            log::error!("startup failed: {e:#}");
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    };

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .with_context(services)
        .launch(app_root);
}

/// Services from the config file, with an optional API base URL argument
/// taking precedence. The first such argument seeds a new config file. With
/// neither, pages live in memory for the session.
fn resolve_services() -> anyhow::Result<Services> {
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    let config = match args.as_slice() {
        [] | [_] => Config::load().context("failed to load config file")?,
        [_, base_url] => {
            log::info!("Using API base URL from CLI argument: {base_url}");
            let config = Config::override_api_base_url(base_url)
                .context("failed to apply API base URL")?;
            Some(config)
        }
        [program, ..] => bail!("usage: {program} [api-base-url]"),
    };

    match config {
        Some(config) => {
            log::info!("Using API at {}", config.api_base_url);
            Services::from_config(&config)
        }
        None => {
            log::warn!(
                "No config file at {} and no API URL given; pages are kept in memory only",
                config_path.display()
            );
            Ok(Services::offline())
        }
    }
}

fn app_root() -> Element {
    rsx! {
        App {}
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("aquasite")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
