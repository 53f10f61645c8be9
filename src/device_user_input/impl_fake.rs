use crate::device_user_input::interface::{DeviceUserInput, UserInputEvent};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;

/// Stands in for the command input. Tests push events in directly.
pub struct DeviceUserInputFake {
    senders: Mutex<Vec<Sender<UserInputEvent>>>,
}

impl DeviceUserInputFake {
    pub fn new() -> Self {
        Self {
            senders: Mutex::new(Vec::new()),
        }
    }

    #[cfg(test)]
    pub fn emit(&self, event: UserInputEvent) {
        for sender in self.senders.lock().unwrap().iter() {
            let _ = sender.send(event);
        }
    }
}

impl Default for DeviceUserInputFake {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceUserInput for DeviceUserInputFake {
    fn events(&self) -> Receiver<UserInputEvent> {
        let (sender, receiver) = channel();
        self.senders.lock().unwrap().push(sender);
        receiver
    }
}
