use std::io::ErrorKind;
use std::process;

use clap::Parser;
use cli::{Args, Command};
use context::Context;
use env_logger::Env;
use error::{DataregError, DataregResult};

mod cli;
mod commands;
mod config;
mod context;
mod error;
mod menu;
mod prelude;
mod prompt;
mod record;
mod registry;
mod selection;
mod store;
mod target;
mod utils;
mod view;

/// Returns the default log level. A config file that can't be read
/// is ignored here; commands that need it report the error.
fn log_level(ctx: &Context) -> String {
    ctx.config()
        .ok()
        .and_then(|config| config.log_level())
        .map(|level| level.to_string().to_lowercase())
        .unwrap_or_else(|| "error".into())
}

fn init_logger(ctx: &Context) {
    env_logger::Builder::from_env(
        Env::default().filter_or("DATAREG_LOG", log_level(ctx)),
    )
    .init();
}

fn run(args: Args) -> DataregResult<()> {
    let ctx = Context::discover(&args)?;
    init_logger(&ctx);

    match args.cmd.unwrap_or(Command::Menu(Default::default())) {
        Command::Add(cmd) => cmd.execute(&ctx),
        Command::Completions(cmd) => cmd.execute(),
        Command::Config(cmd) => cmd.execute(&ctx),
        Command::Edit(cmd) => cmd.execute(&ctx),
        Command::List(cmd) => cmd.execute(&ctx),
        Command::Menu(cmd) => cmd.execute(&ctx),
        Command::Remove(cmd) => cmd.execute(&ctx),
    }
}

fn main() {
    let args = Args::parse();

    match run(args) {
        Ok(()) => process::exit(0),
        Err(DataregError::IO(e)) if e.kind() == ErrorKind::BrokenPipe => {
            process::exit(0)
        }
        Err(DataregError::Dialoguer(dialoguer::Error::IO(e)))
            if e.kind() == ErrorKind::Interrupted =>
        {
            process::exit(0)
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    type TestResult = anyhow::Result<()>;

    #[test]
    fn log_level_from_config() -> TestResult {
        let dir = tempfile::tempdir()?;
        let config = dir.path().join(Context::CONFIG);

        let ctx = Context::new(&config, None);
        assert_eq!(log_level(&ctx), "error");

        fs::write(&config, "[log]\nlevel = \"debug\"\n")?;
        assert_eq!(log_level(&ctx), "debug");

        fs::write(&config, "[log\n")?;
        assert_eq!(log_level(&ctx), "error");

        Ok(())
    }

    #[test]
    fn broken_config_can_be_repaired() -> TestResult {
        let dir = tempfile::tempdir()?;
        let config = dir.path().join(Context::CONFIG);
        let store = dir.path().join(Context::STORE);
        fs::write(&config, "[log\n")?;

        let args = Args::try_parse_from([
            "datareg".to_string(),
            "-C".to_string(),
            config.display().to_string(),
            "-S".to_string(),
            store.display().to_string(),
            "config".to_string(),
            "--unset".to_string(),
            "log.level".to_string(),
        ])?;

        run(args)?;
        assert_eq!(fs::read_to_string(&config)?, "");

        Ok(())
    }
}
