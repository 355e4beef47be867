use std::sync::Arc;

use tracing::info;

use crate::{
    consts::{CONVERT_ERROR_PREFIX, EMPTY_ENCODE_MESSAGE, ENCODE_QUALITY, RENDER_SCALE},
    encode::{encode_surface, ISurfaceEncoder},
    files::IInputFile,
    loader::IEngineLoader,
    models::{ConversionResult, ImageFile},
    util::mime::is_pdf_upload,
};

#[async_trait::async_trait]
pub trait IConvertService: Send + Sync {
    /// Converts the first page of a PDF upload into a PNG. Never fails at
    /// the call boundary; every failure is folded into the result.
    async fn convert(&self, file: &dyn IInputFile) -> ConversionResult;
}

pub struct ConvertService {
    pub loader: Arc<dyn IEngineLoader>,
    pub encoder: Arc<dyn ISurfaceEncoder>,
}

#[async_trait::async_trait]
impl IConvertService for ConvertService {
    #[tracing::instrument(skip(self, file), fields(file = file.name()))]
    async fn convert(&self, file: &dyn IInputFile) -> ConversionResult {
        match self.render_first_page(file).await {
            Ok(result) => result,
            Err(err) => {
                info!("Conversion failed: {}", err);
                ConversionResult::failed(format!("{}{}", CONVERT_ERROR_PREFIX, err))
            }
        }
    }
}

impl ConvertService {
    async fn render_first_page(&self, file: &dyn IInputFile) -> Result<ConversionResult, &'static str> {
        if !is_pdf_upload(file.content_type(), file.name()) {
            return Err("File is not a PDF");
        }

        let engine = self.loader.ensure_loaded().await?;

        let bytes = file.read_bytes().await?;
        info!("Read {} bytes", bytes.len());
        if bytes.is_empty() {
            return Err("PDF file is empty");
        }

        let surface = {
            let document = engine.open_document(bytes)?;
            info!("PDF parsed, {} pages", document.page_count());
            let page = document.page(0)?;
            let viewport = page.viewport(RENDER_SCALE);
            info!("Viewport: {}x{}", viewport.width, viewport.height);
            page.render(&viewport)?
        };

        match encode_surface(self.encoder.as_ref(), surface, ENCODE_QUALITY).await? {
            Some(bytes) => {
                info!("Encoded image, {} bytes", bytes.len());
                Ok(ConversionResult::ready(ImageFile::png(image_file_name(file.name()), bytes)))
            }
            None => Ok(ConversionResult::empty(EMPTY_ENCODE_MESSAGE)),
        }
    }
}

/// Output name: one trailing `.pdf` stripped case-insensitively, `.png`
/// appended, every other character kept as-is.
fn image_file_name(source_name: &str) -> String {
    let stem = match source_name.len().checked_sub(4) {
        Some(cut) if source_name.is_char_boundary(cut) && source_name[cut..].eq_ignore_ascii_case(".pdf") => &source_name[..cut],
        _ => source_name,
    };
    format!("{}.png", stem)
}

#[cfg(test)]
mod tests {
    use super::image_file_name;

    #[test]
    fn strips_pdf_suffix_case_insensitively() {
        assert_eq!(image_file_name("report.pdf"), "report.png");
        assert_eq!(image_file_name("Report.PDF"), "Report.png");
        assert_eq!(image_file_name("scan.Pdf"), "scan.png");
    }

    #[test]
    fn keeps_names_without_pdf_suffix() {
        assert_eq!(image_file_name("report"), "report.png");
        assert_eq!(image_file_name("archive.pdf.bak"), "archive.pdf.bak.png");
        assert_eq!(image_file_name("résumé.pdf"), "résumé.png");
    }
}
