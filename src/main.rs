#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod infra;
mod ui;
mod util;

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};

use crate::util::{config::load_config, logging, version::APP_NAME};

fn main() {
    let (config, problems) = load_config();
    logging::init(&config.log_level);
    for problem in problems {
        tracing::warn!("Config problem, using defaults: {problem}");
    }
    tracing::info!(
        feed = ?config.feed_path,
        delay_ms = config.handler_delay_ms,
        "Starting {APP_NAME}"
    );

    // WebKit's DMABUF renderer opts into explicit sync; disable it unless the user overrides.
    if std::env::var("WAYLAND_DISPLAY").is_ok()
        && std::env::var("WEBKIT_DISABLE_DMABUF_RENDERER").is_err()
    {
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }

    let builder = LaunchBuilder::new().with_context(config);

    #[cfg(feature = "desktop")]
    let builder = {
        let window = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
            )
        };
        builder.with_cfg(window)
    };

    builder.launch(app::App);
}
