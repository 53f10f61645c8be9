use crate::device_user_input::interface::{DeviceUserInput, UserInputEvent};
use crate::library::logger::interface::Logger;
use std::io::BufRead;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

/// Reads commands line by line from stdin. One word per line:
/// `camera`, `switch`, `snap`, `close`, `clear`.
pub struct DeviceUserInputStdin {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceUserInputStdin {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("user-input").with_namespace("stdin"),
        }
    }
}

fn parse(line: &str) -> Option<UserInputEvent> {
    match line.trim() {
        "camera" => Some(UserInputEvent::OpenCamera),
        "switch" => Some(UserInputEvent::SwitchCamera),
        "snap" => Some(UserInputEvent::Snapshot),
        "close" => Some(UserInputEvent::DismissCamera),
        "clear" => Some(UserInputEvent::Clear),
        _ => None,
    }
}

impl DeviceUserInput for DeviceUserInputStdin {
    fn events(&self) -> Receiver<UserInputEvent> {
        let (sender, receiver) = channel();
        let logger = self.logger.clone();

        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                match parse(&line) {
                    Some(event) => {
                        if sender.send(event).is_err() {
                            break;
                        }
                    }
                    None => {
                        if !line.trim().is_empty() {
                            let _ = logger.info(&format!(
                                "unknown command {:?} (try: camera, switch, snap, close, clear)",
                                line.trim()
                            ));
                        }
                    }
                }
            }
        });

        receiver
    }
}
