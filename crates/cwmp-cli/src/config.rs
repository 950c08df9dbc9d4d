//! CLI configuration: defaults from a TOML file and `CWMP_` environment
//! variables, resolved against the global flags.

use std::path::PathBuf;

use clap::ValueEnum;
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── TOML config structs ──────────────────────────────────────────────

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Data model for `new` and `schema` when none is given.
    #[serde(default = "default_model")]
    pub model: String,

    /// Refuse to write documents that fail validation.
    #[serde(default)]
    pub strict_validation: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            model: default_model(),
            strict_validation: false,
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_model() -> String {
    "tr181".into()
}

// ── Config file path ─────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("org", "cwmp", "cwmp").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("cwmp");
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Loading / saving ─────────────────────────────────────────────────

/// Serialized defaults, then the TOML file, then `CWMP_DEFAULTS__*`
/// environment variables.
pub fn load_config() -> Result<Config, CliError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("CWMP_").split("__"));

    Ok(figment.extract()?)
}

pub fn save_config(cfg: &Config) -> Result<PathBuf, CliError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CliError::io(parent, e))?;
    }
    let text = toml::to_string_pretty(cfg).map_err(|e| CliError::Validation {
        field: "config".into(),
        reason: format!("failed to serialize config: {e}"),
    })?;
    std::fs::write(&path, text).map_err(|e| CliError::io(&path, e))?;
    Ok(path)
}

// ── Resolution against flags ─────────────────────────────────────────

/// Global flags merged with configured defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub output: OutputFormat,
    pub color: ColorMode,
    pub quiet: bool,
    pub model: String,
    pub strict_validation: bool,
}

impl Settings {
    pub fn resolve(global: &GlobalOpts, cfg: &Config) -> Result<Self, CliError> {
        let output = match global.output {
            Some(output) => output,
            None => parse_value("defaults.output", &cfg.defaults.output)?,
        };
        let color = match global.color {
            Some(color) => color,
            None => parse_value("defaults.color", &cfg.defaults.color)?,
        };
        Ok(Self {
            output,
            color,
            quiet: global.quiet,
            model: cfg.defaults.model.clone(),
            strict_validation: cfg.defaults.strict_validation,
        })
    }
}

fn parse_value<T: ValueEnum>(field: &str, raw: &str) -> Result<T, CliError> {
    T::from_str(raw, true).map_err(|reason| CliError::Validation {
        field: field.into(),
        reason,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn global() -> GlobalOpts {
        GlobalOpts {
            output: None,
            color: None,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn defaults_fill_unset_flags() {
        let settings = Settings::resolve(&global(), &Config::default()).unwrap();
        assert_eq!(settings.output, OutputFormat::Table);
        assert_eq!(settings.color, ColorMode::Auto);
        assert_eq!(settings.model, "tr181");
    }

    #[test]
    fn flags_override_config() {
        let mut cfg = Config::default();
        cfg.defaults.output = "yaml".into();
        let mut opts = global();
        assert_eq!(
            Settings::resolve(&opts, &cfg).unwrap().output,
            OutputFormat::Yaml
        );
        opts.output = Some(OutputFormat::JsonCompact);
        assert_eq!(
            Settings::resolve(&opts, &cfg).unwrap().output,
            OutputFormat::JsonCompact
        );
    }

    #[test]
    fn bad_config_value_is_reported() {
        let mut cfg = Config::default();
        cfg.defaults.color = "sometimes".into();
        assert!(Settings::resolve(&global(), &cfg).is_err());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(text.contains("strict_validation = false"));
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.defaults.model, "tr181");
    }
}
