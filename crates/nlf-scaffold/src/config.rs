use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::i18n::{tr, trf};

pub const CONFIG_FILE: &str = "config.toml";
pub const ANSWERS_FILE: &str = "answers.json";

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Remember translated strings between runs.
    pub store_strings: bool,
    /// Language catalog replacing the bundled one.
    pub catalog: Option<PathBuf>,
    /// Where language files are written.
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// A missing file yields the defaults. Relative paths are resolved
    /// against the directory holding the file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file");
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    trf("cli.config.read_failed", &[&path.display().to_string()])
                });
            }
        };
        let mut config: Config = toml::from_str(&raw)
            .with_context(|| trf("cli.config.parse_failed", &[&path.display().to_string()]))?;
        if let Some(base) = path.parent() {
            config.catalog = config.catalog.map(|p| base.join(p));
            config.output_dir = config.output_dir.map(|p| base.join(p));
        }
        Ok(config)
    }
}

/// Configuration directory plus the config loaded from it.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config_dir: PathBuf,
    pub config: Config,
}

impl Settings {
    pub fn load(config_dir: Option<&Path>) -> Result<Self> {
        let config_dir = match config_dir {
            Some(dir) => dir.to_path_buf(),
            None => default_config_dir().ok_or_else(|| anyhow!(tr("cli.config.no_dir")))?,
        };
        let config = Config::load(&config_dir.join(CONFIG_FILE))?;
        Ok(Self { config_dir, config })
    }

    pub fn answers_file(&self) -> PathBuf {
        self.config_dir.join(ANSWERS_FILE)
    }
}

pub fn default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("org", "NSIS", "nlf-scaffold").map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_uses_defaults() {
        let temp = tempfile::TempDir::new().expect("tempdir");
        let settings = Settings::load(Some(temp.path())).expect("settings");
        assert_eq!(settings.config, Config::default());
        assert_eq!(settings.answers_file(), temp.path().join(ANSWERS_FILE));
    }

    #[test]
    fn relative_paths_resolve_against_config_dir() {
        let temp = tempfile::TempDir::new().expect("tempdir");
        fs::write(
            temp.path().join(CONFIG_FILE),
            "store_strings = true\ncatalog = \"languages.json\"\noutput_dir = \"/srv/nlf\"\n",
        )
        .expect("write config");

        let config = Settings::load(Some(temp.path())).expect("settings").config;
        assert!(config.store_strings);
        assert_eq!(config.catalog, Some(temp.path().join("languages.json")));
        assert_eq!(config.output_dir, Some(PathBuf::from("/srv/nlf")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let temp = tempfile::TempDir::new().expect("tempdir");
        fs::write(temp.path().join(CONFIG_FILE), "colour = \"red\"\n").expect("write config");
        let err = Settings::load(Some(temp.path())).expect_err("unknown key");
        assert!(err.to_string().contains("config.toml"));
    }
}
