//! User interface of the feeder configuration page.
//!
//! The page is a toolbar above three stacked cards: machine information, the
//! annotated drawing, and the dimension summary.
//!
//! # Module Organization
//!
//! - `state` - The main FeederApp and its persisted preferences
//! - `overlay` - The drawing with its editable dimension callouts
//! - `export` - Printing the report on the browser and desktop

mod export;
mod overlay;
mod state;


pub use overlay::{DimensionOverlay, OverlayOutput};
pub use state::{DrawingState, FeederApp};

use crate::config::LayoutPreset;
use crate::constants;
use crate::drawing;
use crate::summary::{summarize, unset_count};
use crate::types::{DimensionId, Rotation};
use eframe::egui;

impl eframe::App for FeederApp {
    /// Persist layout and theme preferences between restarts.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.to_json() {
            Ok(json) => {
                storage.set_string(constants::APP_STATE_KEY, json);
            }
            Err(err) => {
                log::error!("Failed to serialize app state: {err}");
            }
        }
    }

    /// Main update function called by egui for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme visuals
        let visuals = if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        self.ensure_drawing_loaded(ctx);

        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_page(ui);
        });
    }
}

impl FeederApp {
    /// Rasterizes the drawing and uploads it as a texture on first use.
    fn ensure_drawing_loaded(&mut self, ctx: &egui::Context) {
        if !matches!(self.drawing, DrawingState::Pending) {
            return;
        }
        self.drawing = match drawing::rasterize_drawing(constants::DRAWING_TEXTURE_SIZE) {
            Ok(pixmap) => {
                let size = [pixmap.width() as usize, pixmap.height() as usize];
                let image = egui::ColorImage::from_rgba_premultiplied(size, pixmap.data());
                log::debug!("Loaded {} at {}x{}", drawing::DRAWING_PATH, size[0], size[1]);
                DrawingState::Loaded(ctx.load_texture("feeder_drawing", image, egui::TextureOptions::LINEAR))
            }
            Err(err) => {
                log::error!("Failed to load {}: {err}", drawing::DRAWING_PATH);
                DrawingState::Failed
            }
        };
    }

    /// Renders the top toolbar with the print button and view options.
    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let print_button = egui::Button::new(self.print.button_label());
            if ui.add_enabled(!self.print.is_printing(), print_button).clicked() {
                let ctx = ui.ctx().clone();
                self.print_report(&ctx);
            }

            ui.separator();

            let mut preset = self.layout_preset;
            egui::ComboBox::from_id_salt("layout_preset_combo")
                .selected_text(preset.label())
                .show_ui(ui, |ui| {
                    for option in LayoutPreset::ALL {
                        ui.selectable_value(&mut preset, option, option.label());
                    }
                });
            if preset != self.layout_preset {
                self.apply_preset(preset);
            }

            ui.separator();
            ui.checkbox(&mut self.dark_mode, "Dark Mode");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let set = self.dimensions.len() - self.dimensions.unset_count();
                ui.label(format!("{set}/{} dimensions set", self.dimensions.len()));
            });
        });
    }

    /// Renders the scrollable page of cards.
    fn draw_page(&mut self, ui: &mut egui::Ui) {
        let spacing = self.layout.section_spacing();
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(
                    egui::RichText::new(constants::APP_TITLE).size(self.layout.text_size(22.0)),
                );
                ui.add_space(spacing);
                self.draw_machine_card(ui);
                ui.add_space(spacing);
                self.draw_design_card(ui);
                ui.add_space(spacing);
                self.draw_summary_card(ui);
            });
    }

    fn card_frame(&self, ui: &egui::Ui) -> egui::Frame {
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(self.layout.card_margin().round() as i8))
    }

    fn card_heading(&self, ui: &mut egui::Ui, text: &str) {
        ui.label(
            egui::RichText::new(text)
                .size(self.layout.text_size(18.0))
                .strong(),
        );
        ui.add_space(self.layout.section_spacing() * 0.5);
    }

    /// Machine number, rotation and units per hour.
    fn draw_machine_card(&mut self, ui: &mut egui::Ui) {
        self.card_frame(ui).show(ui, |ui| {
            ui.set_width(ui.available_width());
            self.card_heading(ui, "Machine Information");
            egui::Grid::new("machine_info_grid")
                .num_columns(2)
                .spacing([self.layout.card_margin(), self.layout.card_margin() * 0.5])
                .show(ui, |ui| {
                    ui.label("Machine No");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.machine.machine_no)
                            .hint_text("e.g. FM-204"),
                    );
                    ui.end_row();

                    ui.label("Rotation");
                    egui::ComboBox::from_id_salt("rotation_combo")
                        .selected_text(self.machine.rotation.label())
                        .show_ui(ui, |ui| {
                            for rotation in Rotation::ALL {
                                ui.selectable_value(&mut self.machine.rotation, rotation, rotation.label());
                            }
                        });
                    ui.end_row();

                    ui.label("UPH");
                    ui.add(egui::TextEdit::singleline(&mut self.machine.uph).hint_text("Units per hour"));
                    ui.end_row();
                });
        });
    }

    /// The drawing with its editable callouts.
    pub(crate) fn draw_design_card(&mut self, ui: &mut egui::Ui) -> OverlayOutput {
        self.card_frame(ui)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                self.card_heading(ui, "Feeder Design");
                ui.label(
                    egui::RichText::new("Click a callout to enter its value in millimetres.")
                        .size(self.layout.text_size(12.0))
                        .weak(),
                );

                let mut selected: Option<DimensionId> = None;
                let mut updates: Vec<(DimensionId, String)> = Vec::new();
                let drawing = match &self.drawing {
                    DrawingState::Loaded(texture) => Some(texture),
                    DrawingState::Pending | DrawingState::Failed => None,
                };
                let output = DimensionOverlay {
                    dimensions: &self.dimensions,
                    anchors: &self.anchors,
                    active: self.active_dimension,
                    drawing,
                    layout: &self.layout,
                }
                .show(
                    ui,
                    &mut self.editor,
                    |id| selected = Some(id),
                    |id, value| updates.push((id, value.to_string())),
                );

                for (id, value) in updates {
                    self.update_dimension(id, &value);
                }
                if let Some(id) = selected {
                    self.select_dimension(id);
                }
                output
            })
            .inner
    }

    /// Read-only grid of every dimension, with unset ones flagged.
    fn draw_summary_card(&mut self, ui: &mut egui::Ui) {
        let entries = summarize(&self.dimensions);
        let columns = self.layout.summary_columns.max(1);
        self.card_frame(ui).show(ui, |ui| {
            ui.set_width(ui.available_width());
            self.card_heading(ui, "Dimensions Summary");

            let missing = unset_count(&entries);
            if missing > 0 {
                ui.colored_label(
                    ui.visuals().error_fg_color,
                    format!("{missing} of {} dimensions not set", entries.len()),
                );
            } else {
                ui.label("All dimensions set");
            }
            ui.add_space(self.layout.section_spacing() * 0.5);

            let column_width = (ui.available_width() / columns as f32 - self.layout.card_margin()).max(0.0);
            egui::Grid::new("summary_grid")
                .num_columns(columns)
                .min_col_width(column_width)
                .spacing([self.layout.card_margin(), self.layout.card_margin()])
                .show(ui, |ui| {
                    for (index, entry) in entries.iter().enumerate() {
                        let highlighted = self.active_dimension == Some(entry.id);
                        ui.vertical(|ui| {
                            let heading = egui::RichText::new(format!("{}: {}", entry.id, entry.description))
                                .size(self.layout.text_size(13.0))
                                .strong();
                            if highlighted {
                                ui.label(heading.color(ui.visuals().selection.stroke.color));
                            } else {
                                ui.label(heading);
                            }
                            let value = egui::RichText::new(&entry.display).size(self.layout.text_size(13.0));
                            if entry.is_set {
                                ui.label(value);
                            } else {
                                ui.label(value.color(ui.visuals().error_fg_color));
                            }
                        });
                        if (index + 1) % columns == 0 {
                            ui.end_row();
                        }
                    }
                });
        });
    }
}
