//! Minimal wiring demo: load settings on startup (manual window placement),
//! edit a few fields live, save with the captured geometry on exit.

use eframe::egui;
use luxmon_settings::{LoadOutcome, Settings, SettingsStore, WindowBridge};

struct DemoApp {
    store: SettingsStore,
    bridge: WindowBridge,
    saved: bool,
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.bridge.observe(ctx);
        for cmd in self.bridge.take_commands() {
            ctx.send_viewport_cmd(cmd);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("T-10 monitor settings");
            if let Some(err) = self.store.last_error() {
                ui.colored_label(egui::Color32::LIGHT_RED, err);
            }

            let settings = self.store.settings_mut();
            ui.label(format!(
                "Locale {} — milliseconds format {}",
                settings.locale_name(),
                settings.milliseconds_format()
            ));

            ui.separator();
            ui.checkbox(&mut settings.show_illuminance, "Show illuminance plot");
            ui.checkbox(&mut settings.show_distribution, "Show distribution plot");
            ui.checkbox(&mut settings.show_average, "Show average plot");
            ui.checkbox(&mut settings.show_ratios, "Show ratios plot");
            ui.checkbox(&mut settings.distribution_is_radar, "Radar-style distribution");

            ui.separator();
            ui.horizontal(|ui| {
                ui.label("Baud rate:");
                for rate in [9600, 19200, 38400] {
                    ui.radio_value(&mut settings.baud_rate, rate, rate.to_string());
                }
            });
            ui.horizontal(|ui| {
                ui.label("Sample frequency (Hz):");
                ui.add(egui::Slider::new(&mut settings.sample_frequency, 0.5..=10.0));
            });

            ui.separator();
            ui.label("Move or resize the window, then close: the geometry is saved.");
        });

        if ctx.input(|i| i.viewport().close_requested()) && !self.saved {
            self.saved = true;
            if let Err(e) = self.store.save() {
                eprintln!("Failed to save settings: {e}");
            }
        }
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let install_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()));
    let settings = match &install_dir {
        Some(dir) => Settings::with_install_dir(dir.clone()),
        None => Settings::default(),
    };

    let mut store = SettingsStore::new(settings);
    let bridge = WindowBridge::new();
    store.attach_window(bridge.clone());
    match store.load() {
        LoadOutcome::Loaded => eprintln!("settings loaded"),
        LoadOutcome::NoFile => eprintln!("no settings file, starting from defaults"),
        LoadOutcome::Failed(e) => eprintln!("settings file ignored: {e}"),
    }

    let native_options = store.settings().native_options();
    eframe::run_native(
        "T-10 monitor settings demo",
        native_options,
        Box::new(|_cc| {
            Ok(Box::new(DemoApp {
                store,
                bridge,
                saved: false,
            }))
        }),
    )
}
