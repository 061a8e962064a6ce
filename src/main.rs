#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Catalog file override, set from command line
static CATALOG_PATH: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Get the catalog file override, if one was given on the command line.
/// `None` means the embedded demo inventory is shown.
pub fn get_catalog_path() -> Option<PathBuf> {
    CATALOG_PATH.get().cloned().flatten()
}

/// Solestride - Desktop shoe storefront
#[derive(Parser, Debug)]
#[command(name = "solestride-desktop")]
#[command(about = "Solestride - a desktop storefront for browsing shoes")]
struct Args {
    /// Catalog JSON file to display instead of the built-in inventory
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Window title override
    #[arg(short, long)]
    title: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let _ = CATALOG_PATH.set(args.catalog.clone());

    let title = args.title.unwrap_or_else(|| "Solestride".to_string());

    tracing::info!(
        "Starting '{}' with catalog: {}",
        title,
        args.catalog
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<built-in>".to_string())
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
