use image::RgbaImage;

pub mod pdfium;

/// Narrow capability surface over the rendering engine, exposing only the
/// operations the conversion path uses.
pub trait IRenderEngine: Send + Sync {
    fn open_document<'a>(&'a self, bytes: Vec<u8>) -> Result<Box<dyn IDocumentHandle + 'a>, &'static str>;
}

pub trait IDocumentHandle {
    fn page_count(&self) -> u16;
    fn page<'a>(&'a self, index: u16) -> Result<Box<dyn IPageHandle + 'a>, &'static str>;
}

pub trait IPageHandle {
    fn viewport(&self, scale: f32) -> PageViewport;
    fn render(&self, viewport: &PageViewport) -> Result<PageSurface, &'static str>;
}

/// Pixel rectangle a rendered page occupies at a given scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageViewport {
    pub width: u32,
    pub height: u32,
}

/// Transient RGBA render target, owned by a single conversion call and
/// discarded after encoding.
pub struct PageSurface {
    image: RgbaImage,
}

impl PageSurface {
    pub fn new(image: RgbaImage) -> PageSurface {
        PageSurface { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}
