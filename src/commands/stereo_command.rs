use crate::commands::command::with_receiver;
use crate::commands::Command;
use crate::devices::{Shared, Stereo};
use anyhow::Result;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

const CD_VOLUME: u8 = 11;

pub struct StereoOnWithCDCommand {
    stereo: Weak<RefCell<Stereo>>,
}

impl StereoOnWithCDCommand {
    pub fn new(stereo: &Shared<Stereo>) -> Self {
        Self {
            stereo: Rc::downgrade(stereo),
        }
    }
}

impl Command for StereoOnWithCDCommand {
    fn execute(&self) -> Result<()> {
        with_receiver(&self.stereo, "stereo", |stereo: &mut Stereo| {
            stereo.on();
            stereo.set_cd();
            stereo.set_volume(CD_VOLUME);
        })?;
        Ok(())
    }
}

pub struct StereoOffCommand {
    stereo: Weak<RefCell<Stereo>>,
}

impl StereoOffCommand {
    pub fn new(stereo: &Shared<Stereo>) -> Self {
        Self {
            stereo: Rc::downgrade(stereo),
        }
    }
}

impl Command for StereoOffCommand {
    fn execute(&self) -> Result<()> {
        with_receiver(&self.stereo, "stereo", Stereo::off)?;
        Ok(())
    }
}
