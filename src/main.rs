use anyhow::Result;
use log::{debug, info};

mod commands;
mod config;
mod devices;
mod error;
mod remote;
mod slot;

use commands::{LightOffCommand, LightOnCommand, StereoOffCommand, StereoOnWithCDCommand};
use config::Config;
use devices::{shared, Light, Shared, Source, Stereo};
use remote::{RemoteControl, SimpleRemoteControl};
use slot::Slot;

fn report(pushed: &str, light: &Shared<Light>, stereo: &Shared<Stereo>) {
    let light = light.borrow();
    let stereo = stereo.borrow();
    info!(
        "After {} buttons: {} light on = {}, {} stereo on = {}, playing CD = {}, volume = {}",
        pushed,
        light.location(),
        light.is_on(),
        stereo.location(),
        stereo.is_on(),
        stereo.source() == Some(Source::Cd),
        stereo.volume()
    );
}

fn main() -> Result<()> {
    env_logger::init();
    info!("Welcome to {}", env!("CARGO_PKG_NAME"));

    let light = shared(Light::new("Living Room"));
    let stereo = shared(Stereo::new("Living Room"));

    let mut simple = SimpleRemoteControl::new();
    debug!("Simple remote armed: {}", simple.is_armed());
    simple.set_command(Box::new(LightOnCommand::new(&light)));
    simple.button_was_pressed()?;
    info!(
        "{} light after simple remote press: on = {}",
        light.borrow().location(),
        light.borrow().is_on()
    );

    let mut config = Config::with_empty_slots(1);
    config.add_slot(Slot::new(
        format!("{} Stereo", stereo.borrow().location()),
        Box::new(StereoOnWithCDCommand::new(&stereo)),
        Box::new(StereoOffCommand::new(&stereo)),
    ));

    let mut remote = RemoteControl::from(config);
    remote.set_command(
        0,
        Box::new(LightOnCommand::new(&light)),
        Box::new(LightOffCommand::new(&light)),
    )?;
    anyhow::ensure!(!remote.is_empty(), "remote has no slots");
    info!("\n{}", remote);

    for slot in 0..remote.len() {
        remote.on_button_was_pushed(slot)?;
    }
    report("on", &light, &stereo);

    for slot in 0..remote.len() {
        remote.off_button_was_pushed(slot)?;
    }
    report("off", &light, &stereo);

    Ok(())
}
