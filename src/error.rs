//! Error types for rendering and printing.

use thiserror::Error;

/// Result type alias for fallible rendering and printing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while rasterizing SVG or talking to the platform print facility
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// SVG source could not be parsed
    #[error("SVG error: {0}")]
    Svg(#[from] usvg::Error),

    /// A raster target could not be allocated
    #[error("Failed to create pixmap {width}x{height}")]
    Pixmap {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },

    /// A raster could not be encoded
    #[error("Encoding error: {0}")]
    Encode(String),

    /// The browser window is not reachable
    #[error("No window found")]
    NoWindow,

    /// The browser document is not reachable
    #[error("No document found")]
    NoDocument,

    /// A DOM call failed
    #[error("DOM error: {0}")]
    Dom(String),

    /// No async runtime is available for the save dialog
    #[error("No async runtime available")]
    NoRuntime,

    /// Writing an exported file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
