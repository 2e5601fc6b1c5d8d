use std::sync::{Arc, OnceLock};

use dioxus::prelude::*;

use piste_core::{AppConfig, ResortTable};

mod app;
mod components;
mod state;
pub mod theme;

/// Theme CSS (loaded from assets/themes.css at compile time)
const THEME_CSS: &str = include_str!("../assets/themes.css");

/// Component CSS (loaded from assets/style.css at compile time)
const STYLE_CSS: &str = include_str!("../assets/style.css");

static TABLE: OnceLock<Arc<ResortTable>> = OnceLock::new();

/// The resort table, loaded once before the UI launches
pub(crate) fn table() -> Arc<ResortTable> {
    TABLE.get().expect("table loaded in main").clone()
}

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    let _guard = piste_logging::init_for_profile(config.profile, config.log_dir.clone());

    let table = ResortTable::load_path(&config.data_path)?;
    tracing::info!(resorts = table.resorts().len(), "dataset loaded");
    TABLE.set(Arc::new(table)).expect("table set once");

    // Launch Dioxus desktop app with custom CSS
    LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title("Piste Resort Explorer")
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1300.0, 850.0)),
                )
                .with_custom_head(format!(
                    r#"<style>{}</style><style>{}</style>"#,
                    THEME_CSS, STYLE_CSS
                )),
        )
        .launch(app::App);
    Ok(())
}
