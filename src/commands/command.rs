use crate::error::RemoteError;
use std::cell::RefCell;
use std::rc::Weak;

pub trait Command {
    fn execute(&self) -> anyhow::Result<()>;
}

pub type BoxCommand = Box<dyn Command>;

/// Runs `action` against a command's receiver. Fails if the owner has
/// dropped the device or still holds a borrow of it.
pub(crate) fn with_receiver<T>(
    handle: &Weak<RefCell<T>>,
    device: &'static str,
    action: impl FnOnce(&mut T),
) -> Result<(), RemoteError> {
    let receiver = handle
        .upgrade()
        .ok_or(RemoteError::UnboundReceiver { device })?;
    let mut receiver = receiver
        .try_borrow_mut()
        .map_err(|_| RemoteError::ReceiverBusy { device })?;

    action(&mut receiver);
    Ok(())
}
