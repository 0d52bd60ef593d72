//! # Feeder Configuration Tool
//!
//! A single-page form for recording the configuration of a vibratory part
//! feeder. The sixteen dimensions `A` to `P` are entered directly on a
//! technical drawing of the feeder, next to their dimension lines:
//! - **Overlay editor**: click a callout, type a value in millimetres, press Enter
//! - **Summary**: every dimension with its value, unset ones flagged
//! - **Machine information**: machine number, bowl rotation, units per hour
//! - **Printing**: the finished page under a title derived from the machine number
//!
//! The same code runs natively and in the browser (wasm32).

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod anchors;
pub mod config;
pub mod constants;
pub mod drawing;
pub mod editor;
pub mod error;
pub mod print;
pub mod report;
pub mod summary;
pub mod types;
mod ui;

// Re-export public types and functions
pub use anchors::{render_anchors, AnchorAlign, AnchorPlacement, AnchorTable, NormalizedPoint};
pub use config::{ImageAspectMode, LayoutConfig, LayoutPreset};
pub use editor::{AnchorView, AnchorVisual, OverlayEditor};
pub use error::{Error, Result};
pub use print::{print_title, PrintHost, PrintTrigger, TitleHost, TitleScope};
pub use summary::{summarize, SummaryEntry};
pub use types::*;
pub use ui::{DimensionOverlay, DrawingState, FeederApp, OverlayOutput};

/// Runs the feeder configuration tool in a native window.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// use feeder_config::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
#[cfg(not(target_arch = "wasm32"))]
pub fn run_app() -> std::result::Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(constants::APP_TITLE)
            .with_inner_size([1100.0, 900.0]),
        ..Default::default()
    };
    eframe::run_native(
        constants::APP_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(FeederApp::new(cc)))),
    )
}

/// Starts the tool on `canvas` in the browser.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub async fn start(
    canvas: web_sys::HtmlCanvasElement,
) -> std::result::Result<(), wasm_bindgen::JsValue> {
    // Route `log` macros to the browser console
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|cc| Ok(Box::new(FeederApp::new(cc)))),
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_list_default() {
        let dimensions = DimensionList::default();
        assert_eq!(dimensions.len(), 16);
        assert_eq!(dimensions.unset_count(), 16);
        assert!(dimensions.iter().all(|d| d.value.is_empty()));
    }

    #[test]
    fn test_app_default() {
        let app = FeederApp::default();
        assert!(app.editor.editing().is_none());
        assert!(app.active_dimension.is_none());
        assert!(!app.print.is_printing());
        assert_eq!(app.anchors.anchored_count(), 16);
        assert_eq!(app.machine.rotation, Rotation::Clockwise);
    }
}
