pub(crate) use add::Add;
pub(crate) use completions::Completions;
pub(crate) use config::Config;
pub(crate) use edit::Edit;
pub(crate) use list::List;
pub(crate) use menu::Menu;
pub(crate) use remove::Remove;

mod add;
mod completions;
mod config;
mod edit;
mod list;
mod menu;
mod remove;
