use std::{fs, io, path::Path, time::Duration};

use anyhow::{bail, Context};
use clap::ValueEnum;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Reactive,
    Imperative,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reactive => "reactive",
            Self::Imperative => "imperative",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub tick_interval_ms: u64,
    pub variant: Variant,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            variant: Variant::Reactive,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.tick_interval_ms == 0 {
            bail!("tick_interval_ms must be greater than zero");
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    tick_interval_ms: Option<u64>,
    variant: Option<Variant>,
    log_filter: Option<String>,
}

pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    load_settings_with_env(path, |key| std::env::var(key).ok())
}

/// Defaults, then the TOML file at `path` if it exists, then environment.
pub fn load_settings_with_env(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg: FileSettings = toml::from_str(&raw)
                .with_context(|| format!("invalid settings file '{}'", path.display()))?;
            if let Some(v) = file_cfg.tick_interval_ms {
                settings.tick_interval_ms = v;
            }
            if let Some(v) = file_cfg.variant {
                settings.variant = v;
            }
            if let Some(v) = file_cfg.log_filter {
                settings.log_filter = v;
            }
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()));
        }
    }

    if let Some(v) = env("APP__TICK_INTERVAL_MS") {
        settings.tick_interval_ms = v
            .parse()
            .with_context(|| format!("APP__TICK_INTERVAL_MS is not a number: '{v}'"))?;
    }

    if let Some(v) = env("APP__VARIANT") {
        settings.variant = Variant::from_str(&v, true)
            .map_err(|err| anyhow::anyhow!("APP__VARIANT: {err}"))?;
    }

    if let Some(v) = env("RUST_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
