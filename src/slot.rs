use crate::commands::{BoxCommand, NoCommand};

/// A labelled pair of buttons on the multi-slot remote.
pub struct Slot {
    name: String,
    on_command: BoxCommand,
    off_command: BoxCommand,
}

impl Slot {
    pub fn new(name: impl Into<String>, on_command: BoxCommand, off_command: BoxCommand) -> Self {
        Self {
            name: name.into(),
            on_command,
            off_command,
        }
    }

    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, Box::new(NoCommand), Box::new(NoCommand))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn on_command(&self) -> &BoxCommand {
        &self.on_command
    }

    pub fn off_command(&self) -> &BoxCommand {
        &self.off_command
    }

    pub fn rebind(&mut self, on_command: BoxCommand, off_command: BoxCommand) {
        self.on_command = on_command;
        self.off_command = off_command;
    }
}

impl std::fmt::Debug for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slot").field("name", &self.name).finish()
    }
}
