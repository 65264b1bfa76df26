use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::prelude::*;
use crate::registry::Registry;
use crate::store::Store;
use crate::utils::{config_dir, data_dir};

/// Locations of the config and the dataset store for this run.
pub(crate) struct Context {
    /// The path of the config file.
    config_path: PathBuf,

    /// A store location given on the command line, which overrides
    /// the config.
    store_override: Option<PathBuf>,
}

impl Context {
    pub(crate) const CONFIG: &'static str = "datareg.toml";
    pub(crate) const STORE: &'static str = "datasets.json";

    pub(crate) fn new<P: AsRef<Path>>(
        config_path: P,
        store_override: Option<PathBuf>,
    ) -> Self {
        Self {
            config_path: config_path.as_ref().into(),
            store_override,
        }
    }

    /// Resolves the locations from the command line arguments. Unless
    /// a config file is given, the user's config directory is created
    /// if necessary.
    pub(crate) fn discover(args: &Args) -> DataregResult<Self> {
        let config_path = match args.config {
            Some(ref path) => path.clone(),
            None => config_dir()?.join(Self::CONFIG),
        };

        Ok(Self::new(config_path, args.store.clone()))
    }

    /// Returns the config of this run. A missing config file yields the
    /// default config.
    #[inline]
    pub(crate) fn config(&self) -> DataregResult<Config> {
        Config::load_or_create(&self.config_path)
    }

    /// Returns an empty config that is saved to the config location of
    /// this run.
    #[inline]
    pub(crate) fn empty_config(&self) -> DataregResult<Config> {
        Config::create(&self.config_path)
    }

    /// Returns the location of the dataset store.
    ///
    /// The location given on the command line takes precedence over
    /// the `store.path` option of the config. If neither is set, the
    /// store lives in the user's data directory.
    pub(crate) fn store_path(&self) -> DataregResult<PathBuf> {
        if let Some(ref path) = self.store_override {
            return Ok(path.clone());
        }

        if let Some(path) = self.config()?.store_path() {
            return Ok(path.clone());
        }

        Ok(data_dir()?.join(Self::STORE))
    }

    /// Loads the dataset registry. Problems with the store don't
    /// prevent the registry from being opened; unless `quiet` is set,
    /// they are reported on stderr.
    pub(crate) fn open_registry(
        &self,
        quiet: bool,
    ) -> DataregResult<Registry> {
        let store = Store::new(self.store_path()?);
        let (registry, issues) = Registry::open(store);

        for issue in issues.iter().filter(|_| !quiet) {
            eprintln!(
                "warning: {}: {issue}",
                registry.store().path().display()
            );
        }

        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    type TestResult = anyhow::Result<()>;

    #[test]
    fn store_path_from_override() -> TestResult {
        let dir = tempfile::tempdir()?;
        let config = dir.path().join(Context::CONFIG);
        fs::write(&config, "[store]\npath = \"/from/config.json\"\n")?;

        let ctx = Context::new(&config, Some("/from/args.json".into()));
        assert_eq!(ctx.store_path()?, PathBuf::from("/from/args.json"));

        Ok(())
    }

    #[test]
    fn store_path_from_config() -> TestResult {
        let dir = tempfile::tempdir()?;
        let config = dir.path().join(Context::CONFIG);
        fs::write(&config, "[store]\npath = \"/from/config.json\"\n")?;

        let ctx = Context::new(&config, None);
        assert_eq!(ctx.store_path()?, PathBuf::from("/from/config.json"));

        Ok(())
    }

    #[test]
    fn invalid_config_is_an_error() -> TestResult {
        let dir = tempfile::tempdir()?;
        let config = dir.path().join(Context::CONFIG);
        fs::write(&config, "[store\n")?;

        let ctx = Context::new(&config, None);
        assert!(ctx.config().is_err());
        assert!(ctx.store_path().is_err());

        Ok(())
    }

    #[test]
    fn open_registry_tolerates_broken_store() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = dir.path().join(Context::STORE);
        fs::write(&store, "not json")?;

        let ctx =
            Context::new(dir.path().join(Context::CONFIG), Some(store));
        let registry = ctx.open_registry(true)?;
        assert!(registry.is_empty());

        Ok(())
    }
}
