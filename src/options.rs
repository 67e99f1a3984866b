use anyhow::{bail, Result};
use clap::Parser;

/// Solis Discharge - overnight battery discharge control for Solis inverters
#[derive(Debug, Parser)]
#[clap(author, version)]
pub struct Options {
    /// Discharge duration in hours
    #[clap(long = "hours", default_value_t = 1.0)]
    pub hours: f64,
}

impl Options {
    pub fn new() -> Self {
        Self::parse()
    }

    /// The discharge window math only makes sense within a single clock day.
    pub fn validate(&self) -> Result<()> {
        if !self.hours.is_finite() || self.hours <= 0.0 || self.hours > 24.0 {
            bail!(
                "--hours must be greater than 0 and at most 24, got {}",
                self.hours
            );
        }
        Ok(())
    }
}
