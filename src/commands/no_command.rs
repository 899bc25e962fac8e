use crate::commands::Command;
use anyhow::Result;

/// Placeholder bound to buttons that have nothing to do.
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self) -> Result<()> {
        Ok(())
    }
}
