use pdfium_render::prelude::*;

use super::{IDocumentHandle, IPageHandle, IRenderEngine, PageSurface, PageViewport};

/// Production engine backed by pdfium. The library is bound from a fixed
/// location provided by the deployment, never configured per call.
pub struct PdfiumEngine {
    pdfium: Pdfium,
}

impl PdfiumEngine {
    #[cfg(feature = "static")]
    pub fn bind() -> Result<PdfiumEngine, &'static str> {
        let bindings = Pdfium::bind_to_statically_linked_library().map_err(|_| "Could not init pdfium")?;
        Ok(PdfiumEngine { pdfium: Pdfium::new(bindings) })
    }

    #[cfg(not(feature = "static"))]
    pub fn bind() -> Result<PdfiumEngine, &'static str> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(crate::consts::ENGINE_LIBRARY_PATH))
            .map_err(|_| "Could not init pdfium")?;
        Ok(PdfiumEngine { pdfium: Pdfium::new(bindings) })
    }
}

impl IRenderEngine for PdfiumEngine {
    fn open_document<'a>(&'a self, bytes: Vec<u8>) -> Result<Box<dyn IDocumentHandle + 'a>, &'static str> {
        let document = self.pdfium.load_pdf_from_byte_vec(bytes, None).map_err(|_| "Could not open document.")?;
        Ok(Box::new(PdfiumDocument { document }))
    }
}

struct PdfiumDocument<'a> {
    document: PdfDocument<'a>,
}

impl IDocumentHandle for PdfiumDocument<'_> {
    fn page_count(&self) -> u16 {
        self.document.pages().len()
    }

    fn page<'a>(&'a self, index: u16) -> Result<Box<dyn IPageHandle + 'a>, &'static str> {
        let page = self.document.pages().get(index).map_err(|_| "Could not load first page.")?;
        Ok(Box::new(PdfiumPage { page }))
    }
}

struct PdfiumPage<'a> {
    page: PdfPage<'a>,
}

impl IPageHandle for PdfiumPage<'_> {
    fn viewport(&self, scale: f32) -> PageViewport {
        PageViewport {
            width: (self.page.width().value * scale).round() as u32,
            height: (self.page.height().value * scale).round() as u32,
        }
    }

    fn render(&self, viewport: &PageViewport) -> Result<PageSurface, &'static str> {
        let render_config = PdfRenderConfig::new()
            .set_target_width(viewport.width as i32)
            .set_target_height(viewport.height as i32)
            .use_print_quality(true);
        let image = self.page
            .render_with_config(&render_config)
            .map_err(|_| "Could not render to image.")?
            .as_image()
            .to_rgba8();
        Ok(PageSurface::new(image))
    }
}
