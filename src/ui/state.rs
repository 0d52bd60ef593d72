//! Application state management structures.
//!
//! Entered data (dimensions, machine information, the edit session) lives only
//! in memory. Layout and theme preferences are the only persisted fields.

use crate::anchors::AnchorTable;
use crate::config::{LayoutConfig, LayoutPreset};
use crate::constants;
use crate::editor::OverlayEditor;
use crate::print::PrintTrigger;
use crate::types::{DimensionId, DimensionList, MachineInfo};
use eframe::egui;
use serde::{Deserialize, Serialize};

/// The reference drawing as an uploaded texture, loaded on first use.
#[derive(Default)]
pub enum DrawingState {
    /// Not rasterized yet
    #[default]
    Pending,
    /// Ready to paint
    Loaded(egui::TextureHandle),
    /// Rasterization failed; the overlay paints a plain frame instead
    Failed,
}

/// The main application structure containing UI state and the form data.
///
/// This struct implements the `eframe::App` trait and handles all user interface
/// rendering and interaction logic.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct FeederApp {
    /// The sixteen dimension values; the single source of truth
    #[serde(skip)]
    pub dimensions: DimensionList,
    /// Dimension highlighted on the drawing, set when an anchor is activated
    #[serde(skip)]
    pub active_dimension: Option<DimensionId>,
    /// Machine metadata entered above the drawing
    #[serde(skip)]
    pub machine: MachineInfo,
    /// Transient edit session of the overlay
    #[serde(skip)]
    pub editor: OverlayEditor,
    /// Where each callout sits on the drawing
    #[serde(skip)]
    pub anchors: AnchorTable,
    /// Print button state
    #[serde(skip)]
    pub print: PrintTrigger,
    /// Drawing texture
    #[serde(skip)]
    pub drawing: DrawingState,
    /// Current native window title, swapped while printing
    #[serde(skip)]
    pub window_title: String,
    /// Layout preset last chosen in the toolbar
    pub layout_preset: LayoutPreset,
    /// Active layout parameters
    pub layout: LayoutConfig,
    /// Whether dark mode visuals are enabled
    pub dark_mode: bool,
}

impl Default for FeederApp {
    fn default() -> Self {
        Self {
            dimensions: DimensionList::new(),
            active_dimension: None,
            machine: MachineInfo::default(),
            editor: OverlayEditor::new(),
            anchors: AnchorTable::default(),
            print: PrintTrigger::new(),
            drawing: DrawingState::Pending,
            window_title: constants::APP_TITLE.to_string(),
            layout_preset: LayoutPreset::Standard,
            layout: LayoutPreset::Standard.config(),
            dark_mode: false,
        }
    }
}

impl FeederApp {
    /// Creates the app, restoring persisted preferences when available.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let Some(json) = cc
            .storage
            .and_then(|storage| storage.get_string(constants::APP_STATE_KEY))
        else {
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(app) => {
                log::debug!("Restored preferences");
                app
            }
            Err(err) => {
                log::warn!("Ignoring stored preferences: {err}");
                Self::default()
            }
        }
    }

    /// Serializes the persisted preferences to JSON.
    ///
    /// # Returns
    ///
    /// A JSON string representation of the preferences, or an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes application state from JSON.
    ///
    /// Only preferences are read; every entered value starts empty. The layout
    /// is clamped to usable ranges.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut app: Self = serde_json::from_str(json)?;
        app.layout = app.layout.sanitized();
        Ok(app)
    }

    /// Switches to a layout preset.
    pub fn apply_preset(&mut self, preset: LayoutPreset) {
        self.layout_preset = preset;
        self.layout = preset.config();
    }

    /// Merges a committed edit into the dimension list.
    pub fn update_dimension(&mut self, id: DimensionId, value: &str) {
        self.dimensions.update(id, value);
    }

    /// Marks `id` as the focused dimension.
    pub fn select_dimension(&mut self, id: DimensionId) {
        self.active_dimension = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchors::AnchorAlign;

    #[test]
    fn test_preferences_roundtrip_without_entered_data() {
        let mut app = FeederApp::default();
        app.dark_mode = true;
        app.apply_preset(LayoutPreset::Print);
        app.update_dimension(DimensionId::A, "10");
        app.machine.machine_no = "FM-1".into();

        let json = app.to_json().unwrap();
        let restored = FeederApp::from_json(&json).unwrap();

        assert!(restored.dark_mode);
        assert_eq!(restored.layout_preset, LayoutPreset::Print);
        assert_eq!(restored.layout.anchor_align, AnchorAlign::Centered);
        assert_eq!(restored.dimensions.unset_count(), 16);
        assert!(restored.machine.machine_no.is_empty());
        assert_eq!(restored.window_title, constants::APP_TITLE);
    }

    #[test]
    fn test_stored_layout_is_sanitized() {
        let json = r#"{ "layout": { "summary_columns": 0, "font_scale": 9.0 } }"#;
        let app = FeederApp::from_json(json).unwrap();
        assert_eq!(app.layout.summary_columns, 1);
        assert_eq!(app.layout.font_scale, 2.5);
    }
}
