use crate::device_display::interface::{DeviceDisplay, Screen, ScreenBody};
use std::error::Error;

const BAR_WIDTH: usize = 24;

pub struct DeviceDisplayConsole {}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {}
    }

    fn bar(fill_percent: f32) -> String {
        let clamped = fill_percent.clamp(0.0, 100.0);
        let filled = ((clamped / 100.0) * BAR_WIDTH as f32).round() as usize;
        let mut bar = "█".repeat(filled);
        bar.push_str(&"░".repeat(BAR_WIDTH - filled));
        bar
    }
}

impl Default for DeviceDisplayConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn show(&mut self, screen: &Screen) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("┌──────────────── derm-scan ────────────────┐");

        if let Some(banner) = &screen.banner {
            println!("│ ⚠ {}", banner);
        }

        if let Some(preview) = &screen.preview {
            println!("│ preview: {} ({} bytes)", preview.filename, preview.size_bytes);
        }

        match &screen.body {
            ScreenBody::Idle => {
                println!("│ Drop an image, pick a file, or type `camera`.");
                println!("│ Commands: camera, switch, snap, close, clear");
            }
            ScreenBody::CameraOverlay(overlay) => {
                if overlay.starting {
                    println!("│ Starting {}...", overlay.facing_label);
                } else {
                    println!("│ {} live — press capture", overlay.facing_label);
                }
                if overlay.can_switch {
                    println!("│ [switch camera available]");
                }
            }
            ScreenBody::Progress(progress) => {
                for step in &progress.steps {
                    let mark = if step.active { "●" } else { "○" };
                    println!("│ {} {}", mark, step.label);
                }
            }
            ScreenBody::Results(results) => {
                println!(
                    "│ {} — {}",
                    results.top_disease_label, results.top_disease_confidence
                );
                for row in &results.top_k {
                    println!(
                        "│ {}. {:<28} {:>7} {}",
                        row.rank,
                        row.label,
                        row.confidence_text,
                        Self::bar(row.fill_percent)
                    );
                }
                println!(
                    "│ [{}] {} — {}",
                    results.fitzpatrick_badge,
                    results.top_fitzpatrick_label,
                    results.top_fitzpatrick_confidence
                );
                for row in &results.all_scales {
                    println!(
                        "│ {:<10} {:>7} {}",
                        row.label,
                        row.confidence_text,
                        Self::bar(row.fill_percent)
                    );
                }
            }
        }

        println!("└───────────────────────────────────────────┘");
        Ok(())
    }
}
