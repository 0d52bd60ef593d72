//! Shared application-wide constants.
//! Centralizes tweakable values used across UI rendering, the report and printing.

/// Window and page heading.
pub const APP_TITLE: &str = "Feeder Configuration Tool";

/// Storage key under which UI preferences are persisted.
pub const APP_STATE_KEY: &str = "app_state";

// Reference drawing
/// Natural width of the reference drawing (SVG user units).
pub const DRAWING_WIDTH: f32 = 1000.0;
/// Natural height of the reference drawing (SVG user units).
pub const DRAWING_HEIGHT: f32 = 1000.0;
/// Maximum on-screen height of the drawing when fitted with `Contain`.
pub const DESIGN_MAX_HEIGHT: f32 = 800.0;
/// Room kept above the drawing for callouts placed at negative y.
pub const ANCHOR_OVERFLOW_MARGIN: f32 = 36.0;

// Anchor badges
/// Base font size of badge text (scaled by the layout's font scale).
pub const BADGE_FONT_SIZE: f32 = 12.0;
/// Horizontal padding inside a badge.
pub const BADGE_PADDING_X: f32 = 8.0;
/// Vertical padding inside a badge.
pub const BADGE_PADDING_Y: f32 = 4.0;
/// Corner radius of badges.
pub const BADGE_CORNER_RADIUS: f32 = 4.0;
/// Width of the inline text field while editing.
pub const EDIT_FIELD_WIDTH: f32 = 64.0;

// Page sections
/// Vertical space between page cards (scaled by the layout's spacing scale).
pub const SECTION_SPACING: f32 = 16.0;
/// Inner margin of page cards.
pub const CARD_MARGIN: f32 = 12.0;

// Printing
/// Prefix of the title handed to the platform print facility.
pub const PRINT_TITLE_PREFIX: &str = "Feeder_Configuration";
/// Suffix used when no machine number has been entered.
pub const PRINT_TITLE_FALLBACK: &str = "Report";

// Report page (SVG user units)
/// Width of the printable report page.
pub const REPORT_WIDTH: f32 = 800.0;
/// Height of the printable report page.
pub const REPORT_HEIGHT: f32 = 1240.0;
/// Outer margin of the printable report page.
pub const REPORT_MARGIN: f32 = 24.0;
/// Edge length of the drawing inside the report.
pub const REPORT_DRAWING_SIZE: f32 = 560.0;
/// Number of summary columns in the report grid.
pub const REPORT_SUMMARY_COLUMNS: usize = 4;
/// Scale applied when the desktop build rasterizes the report.
pub const REPORT_RASTER_SCALE: f32 = 2.0;
/// DOM id of the element holding the report while the browser prints.
pub const PRINT_REPORT_ELEMENT_ID: &str = "feeder-print-report";
/// Edge length, in pixels, of the drawing texture uploaded to the GPU.
pub const DRAWING_TEXTURE_SIZE: u32 = 1600;
