//! Demo entry point: `bottomsheet-demo [config.json]`.

use bottomsheet_app::{App, AppConfig, AppResult};
use bottomsheet_core::SheetConfig;

fn run() -> AppResult<()> {
    let mut config = AppConfig::default();
    if let Some(path) = std::env::args().nth(1) {
        log::info!("Loading sheet config from {}", path);
        config.sheet = SheetConfig::from_json_file(&path)?;
    }
    App::with_config(config).run()
}

fn main() {
    env_logger::init();
    log::info!("Starting bottom sheet demo");

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("bottomsheet-demo: {}", e);
        std::process::exit(1);
    }
}
