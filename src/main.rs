mod app;
mod catalog;
mod chrome;
mod config;
mod gallery;
mod guard;
mod list;
mod preview;
mod selection;
mod shell;
mod transform;

use app::GalleryApp;
use catalog::Catalog;
use config::AppConfig;

const DEFAULT_WINDOW: [f32; 2] = [1280.0, 800.0];

fn window_size(config: &AppConfig) -> [f32; 2] {
    let sane = |v: Option<f32>, fallback: f32| v.filter(|v| v.is_finite() && *v >= 320.0).unwrap_or(fallback);
    [
        sane(config.window_width, DEFAULT_WINDOW[0]),
        sane(config.window_height, DEFAULT_WINDOW[1]),
    ]
}

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = AppConfig::load();
    let catalog = Catalog::load_or_builtin(config.catalog_source().as_deref());
    tracing::debug!(images = catalog.len(), "catalog ready");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Image Gallery")
            .with_app_id("gallery")
            .with_inner_size(window_size(&config))
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "gallery",
        native_options,
        Box::new(|cc| Ok(Box::new(GalleryApp::new(cc, config, catalog)))),
    )
}
