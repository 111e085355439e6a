//! chgain-gui - channel gain plugin editor in a desktop window.

use chgain_gui::{Args, ChannelGainApp};
use clap::Parser;
use eframe::egui;

fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    // Initialize tracing subscriber; bridge legacy log:: calls from eframe/egui
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    tracing_log::LogTracer::init().ok();

    let args = Args::parse();

    tracing::info!("Starting chgain GUI");
    let config = match args.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(
                error = %e,
                path = %args.config_path().display(),
                "invalid editor config"
            );
            std::process::exit(2);
        }
    };

    let (min_width, min_height) = config.variant.min_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width as f32, config.height as f32])
            .with_min_inner_size([min_width as f32, min_height as f32])
            .with_title(config.caption.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "chgain",
        options,
        Box::new(move |cc| Ok(Box::new(ChannelGainApp::new(cc, &config)?))),
    )
}
