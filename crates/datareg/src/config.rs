use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{DataregError, DataregResult, bail};

/// Datareg config.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct Config {
    /// The path of the config.
    #[serde(skip)]
    path: PathBuf,

    /// Dataset store options.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub(crate) store: Option<StoreConfig>,

    /// Logging options.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub(crate) log: Option<LogConfig>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct StoreConfig {
    /// The location of the JSON file holding the datasets. If this
    /// option isn't set, the file is kept in the user's data
    /// directory.
    pub(crate) path: Option<PathBuf>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct LogConfig {
    /// The default log level (`off`, `error`, `warn`, `info`, `debug`
    /// or `trace`). The `DATAREG_LOG` environment variable takes
    /// precedence.
    pub(crate) level: Option<String>,
}

impl Config {
    pub(crate) const KEYS: [&'static str; 2] = ["store.path", "log.level"];

    /// Creates a new default config and sets the file location.
    pub(crate) fn create<P>(path: P) -> DataregResult<Self>
    where
        P: AsRef<Path>,
    {
        Ok(Self {
            path: path.as_ref().into(),
            ..Default::default()
        })
    }

    /// Loads an existing config from a path.
    pub(crate) fn from_path<P>(path: P) -> DataregResult<Self>
    where
        P: AsRef<Path>,
    {
        let path: PathBuf = path.as_ref().into();
        let content = fs::read_to_string(&path)?;
        let mut config = Self::from_str(&content)?;
        config.path = path;

        Ok(config)
    }

    /// Loads the config at `path`, or returns a default config if the
    /// file doesn't exist yet.
    pub(crate) fn load_or_create<P>(path: P) -> DataregResult<Self>
    where
        P: AsRef<Path>,
    {
        if path.as_ref().is_file() {
            Self::from_path(path)
        } else {
            Self::create(path)
        }
    }

    /// Saves the config.
    pub(crate) fn save(&self) -> DataregResult<()> {
        let content = toml::to_string(self)?;
        let mut out = File::create(&self.path)?;
        out.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Returns the configured store location.
    #[inline]
    pub(crate) fn store_path(&self) -> Option<&PathBuf> {
        self.store.as_ref().and_then(|store| store.path.as_ref())
    }

    /// Returns the configured log level.
    pub(crate) fn log_level(&self) -> Option<LevelFilter> {
        self.log
            .as_ref()
            .and_then(|log| log.level.as_deref())
            .and_then(|level| LevelFilter::from_str(level).ok())
    }

    fn check_key(name: &str) -> DataregResult<()> {
        if !Self::KEYS.contains(&name) {
            bail!("unknown config option `{name}`");
        }

        Ok(())
    }

    /// Returns the value of the config option `name`.
    pub(crate) fn get(&self, name: &str) -> DataregResult<Option<String>> {
        Self::check_key(name)?;

        Ok(match name {
            "store.path" => {
                self.store_path().map(|path| path.display().to_string())
            }
            "log.level" => {
                self.log.as_ref().and_then(|log| log.level.clone())
            }
            _ => unreachable!(),
        })
    }

    /// Sets the config option `name` to `value`.
    pub(crate) fn set(
        &mut self,
        name: &str,
        value: &str,
    ) -> DataregResult<()> {
        Self::check_key(name)?;

        match name {
            "store.path" => {
                if value.trim().is_empty() {
                    bail!("invalid value `{value}`");
                }

                self.store = Some(StoreConfig {
                    path: Some(PathBuf::from(value)),
                });
            }
            "log.level" => {
                if LevelFilter::from_str(value).is_err() {
                    bail!("invalid value `{value}`");
                }

                self.log = Some(LogConfig {
                    level: Some(value.to_lowercase()),
                });
            }
            _ => unreachable!(),
        }

        Ok(())
    }

    /// Removes the config option `name`.
    pub(crate) fn unset(&mut self, name: &str) -> DataregResult<()> {
        Self::check_key(name)?;

        match name {
            "store.path" => self.store = None,
            "log.level" => self.log = None,
            _ => unreachable!(),
        }

        Ok(())
    }
}

impl FromStr for Config {
    type Err = DataregError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = anyhow::Result<()>;

    #[test]
    fn config_from_str() -> TestResult {
        let config = Config::from_str(
            "[store]\npath = \"/tmp/datasets.json\"\n\n\
             [log]\nlevel = \"debug\"\n",
        )?;

        assert_eq!(
            config.store_path(),
            Some(&PathBuf::from("/tmp/datasets.json"))
        );
        assert_eq!(config.log_level(), Some(LevelFilter::Debug));

        let config = Config::from_str("")?;
        assert!(config.store_path().is_none());
        assert!(config.log_level().is_none());

        Ok(())
    }

    #[test]
    fn config_save_and_load() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("datareg.toml");

        let mut config = Config::load_or_create(&path)?;
        assert!(!path.exists());

        config.set("store.path", "/srv/datasets.json")?;
        config.set("log.level", "INFO")?;
        config.save()?;

        let config = Config::load_or_create(&path)?;
        assert_eq!(
            config.get("store.path")?,
            Some("/srv/datasets.json".to_string())
        );
        assert_eq!(config.get("log.level")?, Some("info".to_string()));

        Ok(())
    }

    #[test]
    fn config_unset() -> TestResult {
        let mut config = Config::default();
        config.set("log.level", "warn")?;
        config.unset("log.level")?;

        assert_eq!(config.get("log.level")?, None);
        assert_eq!(toml::to_string(&config)?, "");

        Ok(())
    }

    #[test]
    fn config_rejects_unknown_keys_and_values() {
        let mut config = Config::default();

        assert!(config.get("runtime.num_jobs").is_err());
        assert!(config.set("store", "x").is_err());
        assert!(config.unset("log").is_err());
        assert!(config.set("log.level", "loud").is_err());
        assert!(config.set("store.path", " ").is_err());
    }
}
