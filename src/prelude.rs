pub use std::io::Write;

pub use anyhow::{anyhow, bail, Context, Result};
pub use log::{debug, error, info, trace, warn};

pub use crate::config::Config;
pub use crate::options::Options;
