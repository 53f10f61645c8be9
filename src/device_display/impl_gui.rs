use crate::device_display::interface::{DeviceDisplay, Screen, ScreenBody};
use eframe::egui;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Clone)]
struct DisplayWindow {
    screen: Arc<Mutex<Option<Screen>>>,
}

impl eframe::App for DisplayWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let screen = self.screen.lock().unwrap().clone();

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(screen) = screen else {
                ui.label("Waiting...");
                return;
            };

            if let Some(banner) = &screen.banner {
                ui.colored_label(egui::Color32::from_rgb(200, 60, 60), banner);
                ui.separator();
            }

            if let Some(preview) = &screen.preview {
                ui.label(
                    egui::RichText::new(format!(
                        "{} ({} bytes)",
                        preview.filename, preview.size_bytes
                    ))
                    .monospace(),
                );
            }

            match &screen.body {
                ScreenBody::Idle => {
                    ui.label("Drop an image, pick a file, or open the camera.");
                }
                ScreenBody::CameraOverlay(overlay) => {
                    if overlay.starting {
                        ui.label(format!("Starting {}...", overlay.facing_label));
                    } else {
                        ui.label(format!("{} live", overlay.facing_label));
                    }
                    if overlay.can_switch {
                        ui.label("Switch camera available");
                    }
                }
                ScreenBody::Progress(progress) => {
                    for step in &progress.steps {
                        let mark = if step.active { "●" } else { "○" };
                        ui.label(format!("{} {}", mark, step.label));
                    }
                }
                ScreenBody::Results(results) => {
                    ui.heading(format!(
                        "{} — {}",
                        results.top_disease_label, results.top_disease_confidence
                    ));
                    for row in &results.top_k {
                        ui.add(
                            egui::ProgressBar::new(row.fill_percent / 100.0).text(format!(
                                "{}. {} {}",
                                row.rank, row.label, row.confidence_text
                            )),
                        );
                    }
                    ui.separator();
                    ui.heading(format!(
                        "[{}] {} — {}",
                        results.fitzpatrick_badge,
                        results.top_fitzpatrick_label,
                        results.top_fitzpatrick_confidence
                    ));
                    for row in &results.all_scales {
                        ui.add(
                            egui::ProgressBar::new(row.fill_percent / 100.0)
                                .text(format!("{} {}", row.label, row.confidence_text)),
                        );
                    }
                }
            }
        });

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

pub struct DeviceDisplayGui {
    screen: Arc<Mutex<Option<Screen>>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self {
            screen: Arc::new(Mutex::new(None)),
        }
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let screen = self.screen.clone();

        // Window loop blocks, so it gets its own thread.
        thread::spawn(move || {
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([480.0, 540.0])
                    .with_resizable(false),
                ..Default::default()
            };

            let window = DisplayWindow { screen };

            let _ = eframe::run_native("derm-scan", options, Box::new(|_cc| Box::new(window)));
        });

        Ok(())
    }

    fn show(&mut self, screen: &Screen) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self.screen.lock().unwrap() = Some(screen.clone());
        Ok(())
    }
}
