use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::device_file_input::interface::DeviceFileInput;
use crate::device_user_input::interface::DeviceUserInput;
use crate::library::logger::interface::Logger;
use crate::prediction_client::interface::PredictionClient;
use crate::scan_station::core::{init, transition, Effect, Event, Model};
use std::error::Error;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct ScanStation {
    pub model: Arc<Mutex<Model>>,
    pub event_sender: Sender<Event>,
    pub event_receiver: Arc<Mutex<Receiver<Event>>>,
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_camera: Arc<dyn DeviceCamera>,
    pub device_file_input: Arc<dyn DeviceFileInput>,
    pub device_user_input: Arc<dyn DeviceUserInput>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay>>,
    pub prediction_client: Arc<dyn PredictionClient>,
}

impl ScanStation {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera>,
        device_file_input: Arc<dyn DeviceFileInput>,
        device_user_input: Arc<dyn DeviceUserInput>,
        device_display: Arc<Mutex<dyn DeviceDisplay>>,
        prediction_client: Arc<dyn PredictionClient>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        let initial = init();

        Self {
            config,
            logger: logger.with_namespace("scan-station"),
            device_camera,
            device_file_input,
            device_user_input,
            device_display,
            prediction_client,
            event_sender,
            event_receiver: Arc::new(Mutex::new(event_receiver)),
            model: Arc::new(Mutex::new(initial.0)),
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.interpret_effect(effect));
        }
    }

    fn run_loop(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.device_display.lock().unwrap().init()?;

        let (initial_model, initial_effects) = init();
        *self.model.lock().unwrap() = initial_model.clone();
        self.render(&initial_model)?;
        self.spawn_effects(initial_effects);

        let mut current_model = initial_model;

        loop {
            let event = self
                .event_receiver
                .lock()
                .unwrap()
                .recv()
                .map_err(|e| Box::new(e) as Box<dyn Error + Send + Sync>)?;

            // Ticks fire twice a second; logging them drowns everything else.
            let loggable = !matches!(event, Event::Tick);
            if loggable {
                let _ = self
                    .logger
                    .info(&format!("event:\n\t{:?}\n\nmodel:\n\t{:?}", event, current_model));
            }

            let (new_model, effects) = transition(&self.config, current_model.clone(), event);

            if loggable {
                let _ = self.logger.info(&format!(
                    "new model:\n\t{:?}\n\neffects:\n\t{:?}",
                    new_model, effects
                ));
            }

            if new_model != current_model {
                self.render(&new_model)?;
            }

            current_model = new_model;
            *self.model.lock().unwrap() = current_model.clone();

            self.spawn_effects(effects);
        }
    }

    pub fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.run_loop()
    }
}
