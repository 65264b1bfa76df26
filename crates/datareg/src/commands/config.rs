use clap::Parser;

use crate::prelude::*;

/// Get and set datareg config options.
///
/// Known options are `store.path` (the location of the dataset store)
/// and `log.level` (the default log level).
#[derive(Debug, Parser)]
pub(crate) struct Config {
    /// Get the value for the given key.
    #[arg(long, conflicts_with_all = ["value", "unset", "set"])]
    get: bool,

    /// Remove the key from the config.
    #[arg(long, conflicts_with_all = ["value", "get", "set"])]
    unset: bool,

    /// Set the value for the given key.
    #[arg(long, requires = "value", conflicts_with_all = ["get", "unset"])]
    set: bool,

    /// The name of the config option.
    name: String,

    /// The (new) value of the config option.
    #[arg(conflicts_with_all = ["get", "unset"])]
    value: Option<String>,
}

#[inline]
fn print_option<T>(key: &str, value: Option<T>)
where
    T: ToString,
{
    println!(
        "{key} = {}",
        match value {
            Some(value) => value.to_string(),
            None => "None".to_string(),
        }
    );
}

impl Config {
    pub(crate) fn execute(self, ctx: &Context) -> DataregResult<()> {
        let mut config = match ctx.config() {
            Ok(config) => config,
            Err(e) if self.value.is_some() || self.unset => {
                eprintln!("warning: discard unreadable config: {e}");
                ctx.empty_config()?
            }
            Err(e) => return Err(e),
        };

        if let Some(value) = self.value {
            config.set(&self.name, &value)?;
            config.save()?;
        } else if self.unset {
            config.unset(&self.name)?;
            config.save()?;
        } else {
            print_option(&self.name, config.get(&self.name)?);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    type TestResult = anyhow::Result<()>;

    fn command(name: &str, value: Option<&str>, unset: bool) -> Config {
        Config {
            get: false,
            unset,
            set: value.is_some(),
            name: name.into(),
            value: value.map(String::from),
        }
    }

    #[test]
    fn set_and_unset() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(Context::CONFIG);
        let ctx = Context::new(&path, None);

        command("log.level", Some("info"), false).execute(&ctx)?;
        assert_eq!(ctx.config()?.get("log.level")?, Some("info".into()));

        command("log.level", None, true).execute(&ctx)?;
        assert_eq!(ctx.config()?.get("log.level")?, None);

        Ok(())
    }

    #[test]
    fn set_repairs_unreadable_config() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(Context::CONFIG);
        fs::write(&path, "[log\n")?;

        let ctx = Context::new(&path, None);
        assert!(command("log.level", None, false).execute(&ctx).is_err());

        command("store.path", Some("/srv/datasets.json"), false)
            .execute(&ctx)?;
        assert_eq!(
            ctx.config()?.get("store.path")?,
            Some("/srv/datasets.json".into())
        );

        Ok(())
    }

    #[test]
    fn unknown_option_is_an_error() -> TestResult {
        let dir = tempfile::tempdir()?;
        let ctx = Context::new(dir.path().join(Context::CONFIG), None);

        assert!(command("runtime.num_jobs", None, false)
            .execute(&ctx)
            .is_err());
        assert!(!dir.path().join(Context::CONFIG).exists());

        Ok(())
    }
}
