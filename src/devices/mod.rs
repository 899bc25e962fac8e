use std::cell::RefCell;
use std::rc::Rc;

mod light;
mod stereo;

pub use light::Light;
pub use stereo::{Source, Stereo};

/// Handle the composition root keeps to a device. Commands only ever hold a
/// `Weak` downgrade of it.
pub type Shared<T> = Rc<RefCell<T>>;

pub fn shared<T>(device: T) -> Shared<T> {
    Rc::new(RefCell::new(device))
}
