mod api;
mod app;
mod infra;
mod net;
mod ui;

use infra::config::AppConfig;

fn main() {
    env_logger::init();

    let config = AppConfig::default();
    if let Err(error) = ui::app_shell::launch(config) {
        eprintln!("failed to start fox-frame: {error}");
        std::process::exit(1);
    }
}
