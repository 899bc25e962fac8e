use crate::commands::BoxCommand;
use crate::config::Config;
use crate::error::RemoteError;
use crate::slot::Slot;
use anyhow::Result;
use log::{debug, trace};

/// Remote with a single button. Pressing it before a command is set
/// reports [`RemoteError::NoCommandBound`].
#[derive(Default)]
pub struct SimpleRemoteControl {
    command: Option<BoxCommand>,
}

impl SimpleRemoteControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_command(&mut self, command: BoxCommand) {
        if self.command.replace(command).is_some() {
            trace!("Replaced previously bound command");
        }
    }

    pub fn is_armed(&self) -> bool {
        self.command.is_some()
    }

    pub fn button_was_pressed(&self) -> Result<()> {
        match &self.command {
            Some(command) => command.execute(),
            None => Err(RemoteError::NoCommandBound.into()),
        }
    }
}

/// Remote with a row of on/off button pairs.
#[derive(Debug)]
pub struct RemoteControl {
    slots: Vec<Slot>,
}

impl From<Config> for RemoteControl {
    fn from(config: Config) -> Self {
        Self {
            slots: config.slots,
        }
    }
}

impl RemoteControl {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn set_command(
        &mut self,
        slot: usize,
        on_command: BoxCommand,
        off_command: BoxCommand,
    ) -> Result<()> {
        self.slot_mut(slot)?.rebind(on_command, off_command);
        Ok(())
    }

    pub fn on_button_was_pushed(&self, slot: usize) -> Result<()> {
        let slot = self.slot(slot)?;
        debug!("On pushed for {}", slot.name());
        slot.on_command().execute()
    }

    pub fn off_button_was_pushed(&self, slot: usize) -> Result<()> {
        let slot = self.slot(slot)?;
        debug!("Off pushed for {}", slot.name());
        slot.off_command().execute()
    }

    fn slot(&self, slot: usize) -> Result<&Slot, RemoteError> {
        let len = self.slots.len();
        self.slots
            .get(slot)
            .ok_or(RemoteError::SlotOutOfRange { slot, len })
    }

    fn slot_mut(&mut self, slot: usize) -> Result<&mut Slot, RemoteError> {
        let len = self.slots.len();
        self.slots
            .get_mut(slot)
            .ok_or(RemoteError::SlotOutOfRange { slot, len })
    }
}

impl std::fmt::Display for RemoteControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "------ Remote Control ------")?;
        for (i, slot) in self.slots.iter().enumerate() {
            writeln!(f, "[slot {}] {}", i, slot.name())?;
        }
        Ok(())
    }
}
