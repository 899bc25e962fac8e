use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Cd,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stereo {
    location: String,
    on: bool,
    volume: u8,
    source: Option<Source>,
}

impl Stereo {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            on: false,
            volume: 0,
            source: None,
        }
    }

    pub fn on(&mut self) {
        self.on = true;
        debug!("{} stereo is on", self.location);
    }

    pub fn off(&mut self) {
        self.on = false;
        debug!("{} stereo is off", self.location);
    }

    pub fn set_cd(&mut self) {
        self.source = Some(Source::Cd);
        debug!("{} stereo is set for CD input", self.location);
    }

    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume;
        debug!("{} stereo volume set to {}", self.location, volume);
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn source(&self) -> Option<Source> {
        self.source
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

#[cfg(test)]
mod tests {
    use super::{Source, Stereo};

    #[test]
    fn starts_off_and_silent() {
        let stereo = Stereo::new("Living Room");
        assert!(!stereo.is_on());
        assert_eq!(stereo.volume(), 0);
        assert_eq!(stereo.source(), None);
    }

    #[test]
    fn set_cd_selects_source() {
        let mut stereo = Stereo::new("Living Room");
        stereo.set_cd();
        assert_eq!(stereo.source(), Some(Source::Cd));
        assert!(!stereo.is_on());
    }

    #[test]
    fn power_does_not_reset_settings() {
        let mut stereo = Stereo::new("Living Room");
        stereo.on();
        stereo.set_cd();
        stereo.set_volume(7);

        stereo.off();
        assert!(!stereo.is_on());
        assert_eq!(stereo.volume(), 7);
        assert_eq!(stereo.source(), Some(Source::Cd));
    }
}
