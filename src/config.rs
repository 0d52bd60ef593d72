//! Layout configuration of the page and the overlay editor.
//!
//! The visual variants of the form (roomy, compact, print-like) differ only in
//! spacing, type size and how the drawing is fitted, so they are expressed as
//! one [`LayoutConfig`] rather than separate components.

use crate::anchors::AnchorAlign;
use crate::constants;
use eframe::egui;
use serde::{Deserialize, Serialize};

/// How the reference drawing is fitted into the available space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageAspectMode {
    /// Keep the aspect ratio and fit inside both the width and the height limit
    Contain,
    /// Use the full available width; height follows the aspect ratio
    FitWidth,
}

impl ImageAspectMode {
    /// On-screen size of an image of `natural` size given `available` space.
    ///
    /// `max_height` bounds `Contain` only; an infinite available height (as
    /// inside a scroll area) is treated as unbounded.
    pub fn fit(self, available: egui::Vec2, natural: egui::Vec2, max_height: f32) -> egui::Vec2 {
        if natural.x <= 0.0 || natural.y <= 0.0 {
            return egui::Vec2::ZERO;
        }
        let width = available.x.max(0.0);
        match self {
            ImageAspectMode::FitWidth => egui::vec2(width, width * natural.y / natural.x),
            ImageAspectMode::Contain => {
                let height_limit = available.y.min(max_height).max(0.0);
                let scale = (width / natural.x).min(height_limit / natural.y);
                natural * scale
            }
        }
    }
}

/// Named layout presets offered in the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutPreset {
    /// Roomy cards, drawing fitted to a fixed height
    Standard,
    /// Tighter spacing and smaller type
    Compact,
    /// Full-width drawing with callouts centered on their anchors
    Print,
}

impl LayoutPreset {
    /// Every preset, in menu order.
    pub const ALL: [LayoutPreset; 3] = [LayoutPreset::Standard, LayoutPreset::Compact, LayoutPreset::Print];

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            LayoutPreset::Standard => "Standard",
            LayoutPreset::Compact => "Compact",
            LayoutPreset::Print => "Print",
        }
    }

    /// The configuration this preset stands for.
    pub fn config(self) -> LayoutConfig {
        match self {
            LayoutPreset::Standard => LayoutConfig::default(),
            LayoutPreset::Compact => LayoutConfig {
                spacing_scale: 0.5,
                font_scale: 0.85,
                summary_columns: 4,
                ..LayoutConfig::default()
            },
            LayoutPreset::Print => LayoutConfig {
                spacing_scale: 0.75,
                font_scale: 1.0,
                aspect_mode: ImageAspectMode::FitWidth,
                anchor_align: AnchorAlign::Centered,
                summary_columns: constants::REPORT_SUMMARY_COLUMNS,
            },
        }
    }
}

/// Parameters shared by every visual variant of the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Multiplier for the space between and inside cards
    pub spacing_scale: f32,
    /// Multiplier for badge and card text sizes
    pub font_scale: f32,
    /// How the drawing is fitted
    pub aspect_mode: ImageAspectMode,
    /// How callouts sit on their anchor points
    pub anchor_align: AnchorAlign,
    /// Number of columns in the summary grid
    pub summary_columns: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spacing_scale: 1.0,
            font_scale: 1.0,
            aspect_mode: ImageAspectMode::Contain,
            anchor_align: AnchorAlign::TopLeft,
            summary_columns: 3,
        }
    }
}

impl LayoutConfig {
    /// Returns the configuration with scales and column count clamped to usable ranges.
    pub fn sanitized(self) -> Self {
        Self {
            spacing_scale: self.spacing_scale.clamp(0.25, 3.0),
            font_scale: self.font_scale.clamp(0.5, 2.5),
            summary_columns: self.summary_columns.clamp(1, 8),
            ..self
        }
    }

    /// Space between page sections.
    pub fn section_spacing(&self) -> f32 {
        constants::SECTION_SPACING * self.spacing_scale
    }

    /// Inner margin of page cards.
    pub fn card_margin(&self) -> f32 {
        constants::CARD_MARGIN * self.spacing_scale
    }

    /// Font size of anchor badges.
    pub fn badge_font_size(&self) -> f32 {
        constants::BADGE_FONT_SIZE * self.font_scale
    }

    /// Size of `size` scaled by the font scale.
    pub fn text_size(&self, size: f32) -> f32 {
        size * self.font_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contain_fits_inside_width_and_height_limit() {
        let natural = egui::vec2(1000.0, 1000.0);
        let size = ImageAspectMode::Contain.fit(egui::vec2(1200.0, f32::INFINITY), natural, 800.0);
        assert_eq!(size, egui::vec2(800.0, 800.0));

        let size = ImageAspectMode::Contain.fit(egui::vec2(500.0, f32::INFINITY), natural, 800.0);
        assert_eq!(size, egui::vec2(500.0, 500.0));
    }

    #[test]
    fn test_fit_width_follows_aspect_ratio() {
        let size = ImageAspectMode::FitWidth.fit(
            egui::vec2(900.0, 100.0),
            egui::vec2(1000.0, 500.0),
            800.0,
        );
        assert_eq!(size, egui::vec2(900.0, 450.0));
    }

    #[test]
    fn test_degenerate_natural_size_yields_zero() {
        let size = ImageAspectMode::Contain.fit(egui::vec2(100.0, 100.0), egui::Vec2::ZERO, 800.0);
        assert_eq!(size, egui::Vec2::ZERO);
    }

    #[test]
    fn test_presets_differ_only_in_parameters() {
        let standard = LayoutPreset::Standard.config();
        let print = LayoutPreset::Print.config();
        assert_eq!(standard, LayoutConfig::default());
        assert_eq!(print.aspect_mode, ImageAspectMode::FitWidth);
        assert_eq!(print.anchor_align, AnchorAlign::Centered);
        assert!(LayoutPreset::Compact.config().spacing_scale < standard.spacing_scale);
    }

    #[test]
    fn test_sanitized_clamps_out_of_range_values() {
        let config = LayoutConfig {
            spacing_scale: 0.0,
            font_scale: 10.0,
            summary_columns: 0,
            ..LayoutConfig::default()
        }
        .sanitized();
        assert_eq!(config.spacing_scale, 0.25);
        assert_eq!(config.font_scale, 2.5);
        assert_eq!(config.summary_columns, 1);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: LayoutConfig = serde_json::from_str(r#"{ "font_scale": 1.5 }"#).unwrap();
        assert_eq!(config.font_scale, 1.5);
        assert_eq!(config.spacing_scale, 1.0);
        assert_eq!(config.summary_columns, 3);
    }
}
