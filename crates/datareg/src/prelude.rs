pub(crate) use crate::config::Config;
pub(crate) use crate::context::Context;
pub(crate) use crate::error::{DataregError, DataregResult, bail};
