use tracing::warn;

use crate::config::Settings;

use super::cli::Cli;

/// Load settings (falling back to defaults) and layer CLI flags on top.
pub fn load_settings(cli: &Cli) -> Settings {
    let loaded = match &cli.config {
        Some(path) => Settings::load_from(Some(path.as_path())),
        None => Settings::load(),
    };

    let mut settings = match loaded {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                warn!("invalid config, using defaults: {msg}");
                Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent a scan.
            warn!("failed to load config, using defaults: {e}");
            Settings::default()
        }
    };

    cli.apply(&mut settings);
    settings
}
