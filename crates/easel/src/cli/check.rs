//! Configuration check command handler.

use easel_error::EaselResult;
use easel_server::EaselConfig;
use std::path::Path;

/// Handle the `check-config` command.
///
/// Returns a redacted rendering of the loaded configuration.
pub fn handle_check_config(config_path: Option<&Path>) -> EaselResult<String> {
    let config = EaselConfig::load(config_path)?;
    config.client_settings()?;
    Ok(format!("{:#?}", config))
}
