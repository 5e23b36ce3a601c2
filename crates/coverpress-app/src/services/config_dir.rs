// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-aware settings file resolution.

use std::path::PathBuf;

use coverpress_core::AppConfig;
use coverpress_core::error::Result;
use tracing::{debug, info};

const CONFIG_FILE: &str = "config.json";

/// Conventional location of the settings file. Not created here.
pub fn default_config_path() -> PathBuf {
    config_base(|key| std::env::var(key).ok())
        .join("coverpress")
        .join(CONFIG_FILE)
}

fn config_base(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    // XDG config dir, then ~/.config
    if let Some(xdg) = lookup("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg);
    }
    if let Some(home) = lookup("HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(home).join(".config");
    }
    PathBuf::from(".")
}

/// Load settings from `explicit` when given, else from the default location
/// if a file exists there, else defaults. Environment overrides apply last.
///
/// An explicit path that cannot be read is an error; a missing default file
/// is not.
pub fn load_config(explicit: Option<PathBuf>) -> Result<AppConfig> {
    let config = match explicit {
        Some(path) => {
            info!(path = %path.display(), "Loading settings");
            AppConfig::load(&path)?
        }
        None => {
            let path = default_config_path();
            if path.is_file() {
                info!(path = %path.display(), "Loading settings");
                AppConfig::load(&path)?
            } else {
                debug!(path = %path.display(), "No settings file, using defaults");
                AppConfig::default()
            }
        }
    };
    let config = config.with_env_overrides();
    config.validate()?;
    Ok(config)
}
