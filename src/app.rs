use egui::{Color32, Key, KeyboardShortcut, Modifiers};

use crate::canvas::ShapeCanvas;
use crate::controller::FreehandDrawController;
use crate::input::PointerGestures;
use crate::settings::DrawSettings;

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const BACKGROUND: Color32 = Color32::WHITE;

/// Host application: a single freehand canvas with pen settings and undo.
pub struct FreehandApp {
    controller: FreehandDrawController<ShapeCanvas>,
    gestures: PointerGestures,
}

impl Default for FreehandApp {
    fn default() -> Self {
        Self::with_settings(DrawSettings::default())
    }
}

impl FreehandApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<DrawSettings>(storage, eframe::APP_KEY))
            .and_then(|settings| match settings.validate() {
                Ok(()) => Some(settings),
                Err(err) => {
                    log::warn!("ignoring stored draw settings: {err}");
                    None
                }
            })
            .unwrap_or_default();

        log::info!(
            "starting with pen width {} and color {:?}",
            settings.width,
            settings.color
        );
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: DrawSettings) -> Self {
        Self {
            controller: FreehandDrawController::with_settings(ShapeCanvas::new(), settings),
            gestures: PointerGestures::new(),
        }
    }

    pub fn controller(&self) -> &FreehandDrawController<ShapeCanvas> {
        &self.controller
    }

    fn settings_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut color = self.controller.color();
            ui.label("Color:");
            if egui::color_picker::color_edit_button_srgba(
                ui,
                &mut color,
                egui::color_picker::Alpha::Opaque,
            )
            .changed()
            {
                self.controller.set_color(color);
            }

            let mut width = self.controller.width();
            ui.label("Width:");
            if ui.add(egui::Slider::new(&mut width, 1.0..=50.0)).changed() {
                if let Err(err) = self.controller.set_width(width) {
                    log::warn!("{err}");
                }
            }

            ui.separator();

            let undo = ui.add_enabled(self.controller.can_undo(), egui::Button::new("⟲ Undo"));
            if undo.clicked() {
                self.controller.undo();
            }
        });
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let rect = response.rect;
        painter.rect_filled(rect, 0.0, BACKGROUND);

        for event in self.gestures.collect(&response, rect.min) {
            self.controller.handle_event(event);
        }

        painter.extend(
            self.controller
                .canvas()
                .shapes_translated(rect.min.to_vec2()),
        );
    }
}

impl eframe::App for FreehandApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.controller.settings());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input_mut(|i| i.consume_shortcut(&UNDO_SHORTCUT)) && !self.gestures.is_dragging() {
            self.controller.undo();
        }

        egui::TopBottomPanel::top("settings").show(ctx, |ui| {
            self.settings_bar(ui);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.canvas(ui);
            });
    }
}
