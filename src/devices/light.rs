use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Light {
    location: String,
    on: bool,
}

impl Light {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            on: false,
        }
    }

    pub fn on(&mut self) {
        self.on = true;
        debug!("{} light is on", self.location);
    }

    pub fn off(&mut self) {
        self.on = false;
        debug!("{} light is off", self.location);
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}
