use anyhow::Result;

use termtrack::config::Config;
use termtrack::logger;
use termtrack::ui;

#[tokio::main]
async fn main() -> Result<()> {
    // Write a commented default config and exit
    if std::env::args().any(|arg| arg == "--init-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;
    logger::init_file_logging(&config.logging)?;
    log::info!("starting termtrack");

    ui::run_app(config).await
}
