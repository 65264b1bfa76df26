use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::*;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None, max_term_width = 72)]
pub(crate) struct Args {
    /// Read the config from `filename` instead of the default location
    /// in the user's config directory.
    #[arg(
        short = 'C',
        long,
        value_name = "filename",
        env = "DATAREG_CONFIG",
        hide_env_values = true,
        global = true
    )]
    pub(crate) config: Option<PathBuf>,

    /// Use `filename` as dataset store. This option takes precedence
    /// over the `store.path` config option.
    #[arg(
        short = 'S',
        long,
        value_name = "filename",
        env = "DATAREG_STORE",
        hide_env_values = true,
        global = true
    )]
    pub(crate) store: Option<PathBuf>,

    /// The command to run. Without a command, the interactive menu is
    /// started.
    #[command(subcommand)]
    pub(crate) cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    Add(Add),
    Completions(Completions),
    Config(Config),
    Edit(Edit),
    #[clap(visible_alias = "ls")]
    List(List),
    Menu(Menu),
    #[clap(visible_alias = "rm")]
    Remove(Remove),
}
