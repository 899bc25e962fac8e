use thiserror::Error;

/// Conditions an invoker or a command can report back to its caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RemoteError {
    #[error("no command bound to the remote")]
    NoCommandBound,

    #[error("{device} receiver is gone")]
    UnboundReceiver { device: &'static str },

    #[error("{device} receiver is in use elsewhere")]
    ReceiverBusy { device: &'static str },

    #[error("slot {slot} is out of range, remote has {len} slots")]
    SlotOutOfRange { slot: usize, len: usize },
}
