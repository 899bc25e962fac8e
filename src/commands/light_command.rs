use crate::commands::command::with_receiver;
use crate::commands::Command;
use crate::devices::{Light, Shared};
use anyhow::Result;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub struct LightOnCommand {
    light: Weak<RefCell<Light>>,
}

impl LightOnCommand {
    pub fn new(light: &Shared<Light>) -> Self {
        Self {
            light: Rc::downgrade(light),
        }
    }
}

impl Command for LightOnCommand {
    fn execute(&self) -> Result<()> {
        with_receiver(&self.light, "light", Light::on)?;
        Ok(())
    }
}

pub struct LightOffCommand {
    light: Weak<RefCell<Light>>,
}

impl LightOffCommand {
    pub fn new(light: &Shared<Light>) -> Self {
        Self {
            light: Rc::downgrade(light),
        }
    }
}

impl Command for LightOffCommand {
    fn execute(&self) -> Result<()> {
        with_receiver(&self.light, "light", Light::off)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{LightOffCommand, LightOnCommand};
    use crate::commands::Command;
    use crate::devices::{shared, Light};
    use crate::error::RemoteError;

    #[test]
    fn light_on_regardless_of_prior_state() {
        for initially_on in [false, true] {
            let light = shared(Light::new("Hall"));
            if initially_on {
                light.borrow_mut().on();
            }

            LightOnCommand::new(&light).execute().unwrap();
            assert!(light.borrow().is_on());
        }
    }

    #[test]
    fn light_off_regardless_of_prior_state() {
        for initially_on in [false, true] {
            let light = shared(Light::new("Hall"));
            if initially_on {
                light.borrow_mut().on();
            }

            LightOffCommand::new(&light).execute().unwrap();
            assert!(!light.borrow().is_on());
        }
    }

    #[test]
    fn commands_share_one_light() {
        let light = shared(Light::new("Hall"));
        let on = LightOnCommand::new(&light);
        let off = LightOffCommand::new(&light);

        on.execute().unwrap();
        assert!(light.borrow().is_on());

        off.execute().unwrap();
        assert!(!light.borrow().is_on());
    }

    #[test]
    fn dropped_light_is_reported() {
        let light = shared(Light::new("Hall"));
        let commands: [Box<dyn Command>; 2] = [
            Box::new(LightOnCommand::new(&light)),
            Box::new(LightOffCommand::new(&light)),
        ];
        drop(light);

        for command in &commands {
            let err = command.execute().unwrap_err();
            assert_eq!(
                err.downcast_ref::<RemoteError>(),
                Some(&RemoteError::UnboundReceiver { device: "light" })
            );
        }
    }

    #[test]
    fn borrowed_light_is_reported_and_left_untouched() {
        let light = shared(Light::new("Hall"));
        let command = LightOnCommand::new(&light);

        {
            let _view = light.borrow();
            let err = command.execute().unwrap_err();
            assert_eq!(
                err.downcast_ref::<RemoteError>(),
                Some(&RemoteError::ReceiverBusy { device: "light" })
            );
        }
        assert!(!light.borrow().is_on());

        // Works again once the borrow is released
        command.execute().unwrap();
        assert!(light.borrow().is_on());
    }
}
