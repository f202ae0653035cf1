use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static SAMPLE_FEED: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css`.
pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("/assets/main.css")).as_str()
}

/// Returns the bundled demo suggestion feed.
pub fn sample_feed() -> &'static str {
    SAMPLE_FEED
        .get_or_init(|| load_text("/assets/sample_feed.json"))
        .as_str()
}

fn load_text(path: &str) -> String {
    match load_asset(path) {
        Some(asset) => String::from_utf8_lossy(&asset).into_owned(),
        None => {
            tracing::error!("embedded asset {path} is missing");
            String::new()
        }
    }
}

fn load_asset(path: &str) -> Option<Cow<'static, [u8]>> {
    let canonical = canonical_asset_path(path);
    EmbeddedAssets::get(&canonical).map(|file| file.data)
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if let Some(rest) = trimmed.strip_prefix("assets/") {
        rest.to_string()
    } else {
        trimmed.to_string()
    }
}
