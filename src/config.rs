use crate::slot::Slot;

#[derive(Debug, Default)]
pub struct Config {
    pub slots: Vec<Slot>,
}

impl Config {
    pub fn with_empty_slots(count: usize) -> Self {
        Self {
            slots: (0..count).map(|i| Slot::empty(format!("slot {}", i))).collect(),
        }
    }

    pub fn add_slot(&mut self, slot: Slot) {
        self.slots.push(slot);
    }
}
