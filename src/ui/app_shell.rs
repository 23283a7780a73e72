use eframe::egui;

use crate::app::controller::FeedController;
use crate::app::events::AppEvent;
use crate::infra::config::AppConfig;
use crate::ui::picture::PictureLoader;

pub struct FoxFrameApp {
    controller: FeedController,
    picture: PictureLoader,
}

impl FoxFrameApp {
    fn new(config: &AppConfig) -> Self {
        let mut controller = FeedController::new(config);
        // Mount fetch: exactly once, when the shell is constructed.
        controller.dispatch(AppEvent::Refresh);

        Self {
            controller,
            picture: PictureLoader::new(),
        }
    }
}

impl eframe::App for FoxFrameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.poll_events();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.heading("fox-frame");
            ui.label("Random fox photos from randomfox.ca");
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.controller.state().is_loading {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading floof...");
                });
            }

            ui.separator();
            self.picture.show(ui, &self.controller.state().image_ref);
            ui.separator();

            if ui.button("New floof").clicked() {
                self.controller.dispatch(AppEvent::Refresh);
            }
        });

        if self.controller.state().is_loading || self.picture.is_busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

pub fn launch(config: AppConfig) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "fox-frame",
        options,
        Box::new(move |_cc| Ok(Box::new(FoxFrameApp::new(&config)))),
    )
    .map_err(|error| format!("failed to start UI: {error}"))
}
