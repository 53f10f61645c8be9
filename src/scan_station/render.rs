use crate::scan_station::core::Model;
use crate::scan_station::main::ScanStation;
use crate::scan_station::view;
use std::error::Error;

impl ScanStation {
    /// Projects the model through the pure view layer onto the display.
    pub fn render(&self, model: &Model) -> Result<(), Box<dyn Error + Send + Sync>> {
        let screen = view::screen(&self.config, model);
        self.device_display.lock().unwrap().show(&screen)
    }
}
