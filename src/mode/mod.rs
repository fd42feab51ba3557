//! CLI mode implementations

mod classify;
mod layers;
mod legend;

pub use classify::run_classify;
pub use layers::run_layers;
pub use legend::run_legend;

use std::path::Path;

use crate::config::Config;
use crate::error::Result;

/// Load the config file if given, the built-in analysis otherwise
pub fn load_config(path: Option<&str>) -> Result<Config> {
    match path {
        Some(path) => Config::load(Path::new(path)),
        None => Ok(Config::default()),
    }
}
