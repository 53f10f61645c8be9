use crate::image_intake::normalize::reencode;
use crate::scan_station::core::{Effect, Event};
use crate::scan_station::main::ScanStation;

impl ScanStation {
    pub fn interpret_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("running effect: {:?}", effect));

        match effect {
            Effect::SubscribeFileInput => {
                let events = self.device_file_input.events();
                loop {
                    match events.recv() {
                        Ok(event) => {
                            if self.event_sender.send(Event::FileInput(event)).is_err() {
                                break;
                            }
                        }
                        Err(_) => break,
                    }
                }
            }

            Effect::SubscribeUserInput => {
                let events = self.device_user_input.events();
                loop {
                    match events.recv() {
                        Ok(event) => {
                            if self.event_sender.send(Event::UserInput(event)).is_err() {
                                break;
                            }
                        }
                        Err(_) => break,
                    }
                }
            }

            Effect::SubscribeTick => loop {
                std::thread::sleep(self.config.tick_rate);
                if self.event_sender.send(Event::Tick).is_err() {
                    break;
                }
            },

            Effect::ResetFileInput => {
                self.device_file_input.reset();
            }

            Effect::AcquireCamera { facing } => {
                let acquired = self.device_camera.acquire(facing);
                let _ = self.event_sender.send(Event::CameraAcquireDone(acquired));
            }

            Effect::ReleaseCamera => {
                let released = self.device_camera.release();
                if let Err(error) = &released {
                    let _ = self
                        .logger
                        .error(&format!("camera release failed: {}", error));
                }
                let _ = self.event_sender.send(Event::CameraReleaseDone(released));
            }

            Effect::CaptureStill => {
                let still = self.device_camera.capture_still(self.config.reencode_quality);
                let _ = self.event_sender.send(Event::SnapshotDone(still));
            }

            Effect::Normalize {
                request_id,
                payload,
            } => {
                let normalized = match reencode(&payload, self.config.reencode_quality) {
                    Ok(normalized) => normalized,
                    Err(error) => {
                        // Best-effort: submit the original bytes instead.
                        let _ = self.logger.error(&format!(
                            "orientation normalize failed, passing original through: {}",
                            error
                        ));
                        payload
                    }
                };
                let _ = self.event_sender.send(Event::NormalizeDone {
                    request_id,
                    payload: normalized,
                });
            }

            Effect::Predict {
                request_id,
                payload,
            } => {
                let result = self.prediction_client.predict(&payload);
                let _ = self
                    .event_sender
                    .send(Event::PredictDone { request_id, result });
            }
        }
    }
}
