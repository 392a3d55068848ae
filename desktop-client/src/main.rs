mod config;
mod input;
mod ui;

use clap::Parser;
use common::games::snake::SnakeSessionSettings;
use common::leaderboard::LeaderboardStore;
use common::storage::FileKeyValueStore;
use common::{log, log_warn, logger};
use eframe::egui;

use config::{get_config_manager, get_exe_dir, ClientConfigManager, Config};
use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "snake_desktop", version = common::version::VERSION)]
struct Args {
    /// Path to a YAML config file; defaults to one next to the executable.
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager: ClientConfigManager = match args.config.as_deref() {
        Some(path) => ClientConfigManager::from_yaml_file(path),
        None => get_config_manager(),
    };
    let config_result = config_manager.get_config();
    let config = config_result.clone().unwrap_or_default();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        config.log_prefix.clone()
    };
    logger::init_logger(prefix);

    if let Err(e) = config_result {
        log_warn!("Falling back to default config: {}", e);
    }

    let settings = SnakeSessionSettings::from(&config.snake);
    let leaderboard = load_leaderboard(&config);

    let runtime = tokio::runtime::Runtime::new()?;
    let app = SnakeApp::new(&settings, leaderboard, runtime.handle().clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 720.0])
            .with_title("Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )?;

    log!("Window closed");
    Ok(())
}

fn load_leaderboard(config: &Config) -> LeaderboardStore<FileKeyValueStore> {
    let directory = config.leaderboard.resolve_directory(&get_exe_dir());
    log!("Leaderboard stored in {}", directory.display());
    LeaderboardStore::load(FileKeyValueStore::new(directory))
}
