mod config_manager;
mod validate;

pub use config_manager::ConfigManager;
pub use validate::Validate;
