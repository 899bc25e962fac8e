mod command;
mod light_command;
mod no_command;
mod stereo_command;

pub use command::{BoxCommand, Command};
pub use light_command::{LightOffCommand, LightOnCommand};
pub use no_command::NoCommand;
pub use stereo_command::{StereoOffCommand, StereoOnWithCDCommand};
