/// The deployment must place a version-matched pdfium library here, next
/// to the running application.
pub static ENGINE_LIBRARY_PATH: &str = "./";

/// Linear scale applied to the page layout when computing the render
/// viewport.
pub const RENDER_SCALE: f32 = 2.0;

/// Quality factor handed to the surface encoder.
pub const ENCODE_QUALITY: f32 = 0.9;

pub static CONVERT_ERROR_PREFIX: &str = "Failed to convert PDF: ";
pub static EMPTY_ENCODE_MESSAGE: &str = "Failed to create image blob";
