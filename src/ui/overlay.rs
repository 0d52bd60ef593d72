//! The dimension overlay: the drawing with one clickable callout per anchored
//! dimension, edited in place.

use crate::anchors::{render_anchors, AnchorTable};
use crate::config::LayoutConfig;
use crate::constants::{
    ANCHOR_OVERFLOW_MARGIN, BADGE_CORNER_RADIUS, BADGE_PADDING_X, BADGE_PADDING_Y,
    DESIGN_MAX_HEIGHT, DRAWING_HEIGHT, DRAWING_WIDTH, EDIT_FIELD_WIDTH,
};
use crate::editor::{filter_numeric, AnchorVisual, OverlayEditor};
use crate::types::{DimensionId, DimensionList};
use eframe::egui;

/// Borrowed inputs of one overlay frame.
pub struct DimensionOverlay<'a> {
    /// Values shown in the callouts
    pub dimensions: &'a DimensionList,
    /// Which dimensions get a callout, and where
    pub anchors: &'a AnchorTable,
    /// Dimension to highlight
    pub active: Option<DimensionId>,
    /// Drawing texture; a plain frame is painted while it is missing
    pub drawing: Option<&'a egui::TextureHandle>,
    /// Fitting, alignment and sizes
    pub layout: &'a LayoutConfig,
}

/// Screen geometry of the last overlay frame.
#[derive(Debug, Clone)]
pub struct OverlayOutput {
    /// On-screen bounding box of the drawing
    pub image_rect: egui::Rect,
    /// Rect of every callout drawn, in list order
    pub anchor_rects: Vec<(DimensionId, egui::Rect)>,
}

impl Default for OverlayOutput {
    fn default() -> Self {
        Self {
            image_rect: egui::Rect::NOTHING,
            anchor_rects: Vec::new(),
        }
    }
}

impl OverlayOutput {
    /// Rect of the callout of `id`, if one was drawn.
    pub fn anchor_rect(&self, id: DimensionId) -> Option<egui::Rect> {
        self.anchor_rects
            .iter()
            .find(|(anchor_id, _)| *anchor_id == id)
            .map(|(_, rect)| *rect)
    }
}

impl DimensionOverlay<'_> {
    /// Draws the overlay and runs the edit session in `editor`.
    ///
    /// `on_select` fires when a callout becomes the edit target; `on_update`
    /// fires when an edit is committed with a non-empty value. A commit is
    /// applied before any activation collected in the same frame.
    pub fn show(
        self,
        ui: &mut egui::Ui,
        editor: &mut OverlayEditor,
        mut on_select: impl FnMut(DimensionId),
        mut on_update: impl FnMut(DimensionId, &str),
    ) -> OverlayOutput {
        ui.add_space(ANCHOR_OVERFLOW_MARGIN);

        let natural = egui::vec2(DRAWING_WIDTH, DRAWING_HEIGHT);
        let size = self
            .layout
            .aspect_mode
            .fit(ui.available_size(), natural, DESIGN_MAX_HEIGHT);
        let (row, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), size.y), egui::Sense::hover());
        let image_rect = egui::Rect::from_center_size(row.center(), size);

        let painter = ui.painter().clone();
        match self.drawing {
            Some(texture) => {
                let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                painter.image(texture.id(), image_rect, uv, egui::Color32::WHITE);
            }
            None => {
                painter.rect_stroke(
                    image_rect,
                    0.0,
                    ui.visuals().widgets.noninteractive.bg_stroke,
                    egui::StrokeKind::Inside,
                );
                painter.text(
                    image_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Drawing unavailable",
                    egui::FontId::proportional(self.layout.text_size(14.0)),
                    ui.visuals().weak_text_color(),
                );
            }
        }

        let font = egui::FontId::proportional(self.layout.badge_font_size());
        let padding = egui::vec2(BADGE_PADDING_X, BADGE_PADDING_Y);
        let mut output = OverlayOutput {
            image_rect,
            anchor_rects: Vec::new(),
        };
        let mut commit = false;
        let mut activated = None;

        for placement in render_anchors(self.dimensions, self.anchors) {
            let dimension = self.dimensions.get(placement.id);
            let view = editor.anchor_view(dimension, self.active);
            let anchor = placement.point.resolve(image_rect);
            let id = ui.id().with(("dimension_anchor", placement.id));
            let visuals = ui.visuals().clone();

            let (fill, stroke, text_color) = if view.highlighted {
                (visuals.selection.bg_fill, visuals.selection.stroke, visuals.strong_text_color())
            } else if view.visual == AnchorVisual::Placeholder {
                (
                    visuals.faint_bg_color,
                    visuals.widgets.noninteractive.bg_stroke,
                    visuals.weak_text_color(),
                )
            } else {
                (
                    visuals.extreme_bg_color,
                    visuals.widgets.inactive.fg_stroke,
                    visuals.strong_text_color(),
                )
            };

            let rect = match &view.visual {
                AnchorVisual::Editing => {
                    let prefix = painter.layout_no_wrap(format!("{}:", placement.id), font.clone(), text_color);
                    let field_width = EDIT_FIELD_WIDTH * self.layout.font_scale;
                    let size = egui::vec2(
                        prefix.size().x + field_width + padding.x * 3.0,
                        prefix.size().y + padding.y * 2.0,
                    );
                    let rect = self.layout.anchor_align.element_rect(anchor, size);
                    painter.rect_filled(rect, BADGE_CORNER_RADIUS, visuals.extreme_bg_color);
                    painter.rect_stroke(rect, BADGE_CORNER_RADIUS, visuals.selection.stroke, egui::StrokeKind::Outside);
                    painter.galley(rect.min + padding, prefix.clone(), text_color);

                    let field_rect = egui::Rect::from_min_max(
                        egui::pos2(rect.min.x + prefix.size().x + padding.x * 2.0, rect.min.y),
                        rect.max,
                    );
                    let mut buffer = editor.draft().to_string();
                    let response = ui.put(
                        field_rect,
                        egui::TextEdit::singleline(&mut buffer)
                            .id(id)
                            .font(font.clone())
                            .desired_width(field_width)
                            .hint_text("mm"),
                    );
                    if editor.take_focus_request() {
                        response.request_focus();
                    }
                    if response.changed() {
                        editor.set_draft(filter_numeric(&buffer));
                    }
                    // Enter and clicking elsewhere commit. Escape also drops focus
                    // in egui, but here it leaves the field open and uncommitted.
                    if response.lost_focus() {
                        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                            response.request_focus();
                        } else {
                            commit = true;
                        }
                    }
                    rect
                }
                visual => {
                    let galley = painter.layout_no_wrap(
                        format!("{}: {}", placement.id, visual.text()),
                        font.clone(),
                        text_color,
                    );
                    let rect = self
                        .layout
                        .anchor_align
                        .element_rect(anchor, galley.size() + padding * 2.0);
                    let response = ui
                        .interact(rect, id, egui::Sense::click())
                        .on_hover_cursor(egui::CursorIcon::PointingHand)
                        .on_hover_text(dimension.description.as_str());
                    let stroke = if response.hovered() {
                        visuals.widgets.hovered.bg_stroke
                    } else {
                        stroke
                    };
                    painter.rect_filled(rect, BADGE_CORNER_RADIUS, fill);
                    painter.rect_stroke(rect, BADGE_CORNER_RADIUS, stroke, egui::StrokeKind::Outside);
                    painter.galley(rect.min + padding, galley, text_color);
                    if response.clicked() {
                        activated = Some(placement.id);
                    }
                    rect
                }
            };
            output.anchor_rects.push((placement.id, rect));
        }

        if commit {
            editor.commit_if_non_empty(&mut on_update);
        }
        if let Some(id) = activated {
            editor.activate(id, self.dimensions, &mut on_select);
        }

        output
    }
}
