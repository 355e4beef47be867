use std::io::Cursor;

use image::ImageFormat;
use tokio::sync::oneshot;

use crate::engine::PageSurface;

pub type EncodeCallback = Box<dyn FnOnce(Option<Vec<u8>>) + Send>;

/// Callback-style surface encoding. The callback fires exactly once, with
/// `None` when the encoder produced no data.
pub trait ISurfaceEncoder: Send + Sync {
    fn encode(&self, surface: PageSurface, quality: f32, done: EncodeCallback);
}

/// PNG encoder. The quality factor is part of the encode contract, but PNG
/// has no quality knob, so it is ignored here.
pub struct PngSurfaceEncoder;

impl ISurfaceEncoder for PngSurfaceEncoder {
    fn encode(&self, surface: PageSurface, _quality: f32, done: EncodeCallback) {
        tokio::task::spawn_blocking(move || {
            let mut bytes: Vec<u8> = Vec::new();
            let result = surface.into_image().write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png);
            done(match result {
                Ok(()) if !bytes.is_empty() => Some(bytes),
                _ => None,
            });
        });
    }
}

/// Bridges the encoder's one-shot callback into a single awaited outcome.
pub async fn encode_surface(encoder: &dyn ISurfaceEncoder, surface: PageSurface, quality: f32) -> Result<Option<Vec<u8>>, &'static str> {
    let (sender, receiver) = oneshot::channel();
    encoder.encode(
        surface,
        quality,
        Box::new(move |bytes| {
            _ = sender.send(bytes);
        }),
    );
    receiver.await.map_err(|_| "Encoder finished without a result.")
}
