use crate::device_display::interface::{DeviceDisplay, Screen};
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Records every screen it is asked to draw, for assertions in tests.
#[derive(Clone)]
pub struct DeviceDisplayFake {
    shown: Arc<Mutex<Vec<Screen>>>,
}

impl DeviceDisplayFake {
    pub fn new() -> Self {
        Self {
            shown: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn last_screen(&self) -> Option<Screen> {
        self.shown.lock().unwrap().last().cloned()
    }

    pub fn shown_count(&self) -> usize {
        self.shown.lock().unwrap().len()
    }
}

impl Default for DeviceDisplayFake {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn show(&mut self, screen: &Screen) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.shown.lock().unwrap().push(screen.clone());
        Ok(())
    }
}
