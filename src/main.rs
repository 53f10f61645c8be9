use config::Config;
use device_camera::impl_fake::DeviceCameraFake;
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::DeviceDisplayGui;
use device_display::interface::DeviceDisplay;
use device_file_input::impl_fake::DeviceFileInputFake;
use device_user_input::impl_stdin::DeviceUserInputStdin;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use prediction_client::impl_fake::PredictionClientFake;
use prediction_client::impl_http::PredictionClientHttp;
use prediction_client::interface::PredictionClient;
use scan_station::main::ScanStation;
use std::sync::{Arc, Mutex};

mod config;
mod device_camera;
mod device_display;
mod device_file_input;
mod device_user_input;
mod image_intake;
mod image_payload;
mod library;
mod prediction_client;
mod scan_station;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_camera = Arc::new(DeviceCameraFake::new(logger.clone()));

    let device_file_input = Arc::new(DeviceFileInputFake::new(logger.clone()).with_demo_pick());

    let device_user_input = Arc::new(DeviceUserInputStdin::new(logger.clone()));

    // `--gui` opens a window; the default renders to the terminal.
    let device_display: Arc<Mutex<dyn DeviceDisplay>> =
        if std::env::args().any(|arg| arg == "--gui") {
            Arc::new(Mutex::new(DeviceDisplayGui::new()))
        } else {
            Arc::new(Mutex::new(DeviceDisplayConsole::new()))
        };

    // `--offline` synthesizes predictions instead of calling the service.
    let prediction_client: Arc<dyn PredictionClient> =
        if std::env::args().any(|arg| arg == "--offline") {
            Arc::new(PredictionClientFake::new(logger.clone()))
        } else {
            Arc::new(PredictionClientHttp::new(
                &config.predict_base_url,
                logger.clone(),
            ))
        };

    let station = ScanStation::new(
        config,
        logger,
        device_camera,
        device_file_input,
        device_user_input,
        device_display,
        prediction_client,
    );

    station.run()?;

    Ok(())
}
