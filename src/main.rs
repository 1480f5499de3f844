use eframe::egui;
use log::info;
use optional_guide::{
    gui::{
        GuideApp,
        APP_TITLE,
    },
    persistence::{
        get_config_file_path,
        load_config_or_default,
        CONFIG_FILE,
    },
};

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = get_config_file_path(CONFIG_FILE);
    info!("Reading configuration from {}", config_path.display());
    let (config, config_error) = load_config_or_default(&config_path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(GuideApp::new(cc, config, config_error)))),
    )
}
