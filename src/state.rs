use std::sync::Arc;

use crate::{
    convert::{ConvertService, IConvertService},
    encode::{ISurfaceEncoder, PngSurfaceEncoder},
    loader::{EngineLoader, IEngineLoader},
};

pub type EngineLoaderState = Arc<dyn IEngineLoader>;
pub type SurfaceEncoderState = Arc<dyn ISurfaceEncoder>;
pub type ConvertServiceState = Arc<dyn IConvertService>;

pub struct ServiceCollection {
    pub engine_loader: EngineLoaderState,
    pub convert_service: ConvertServiceState,
}

impl ServiceCollection {
    /// Production wiring: lazy pdfium loader plus the PNG encoder. Nothing
    /// is initialized until the first conversion asks for the engine.
    pub fn build() -> ServiceCollection {
        let engine_loader: EngineLoaderState = Arc::new(EngineLoader::pdfium());
        let encoder: SurfaceEncoderState = Arc::new(PngSurfaceEncoder);
        let convert_service = Arc::new(ConvertService {
            loader: engine_loader.clone(),
            encoder,
        });
        ServiceCollection {
            engine_loader,
            convert_service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_wires_the_production_graph() {
        let services = ServiceCollection::build();
        // The convert service shares the collection's loader handle.
        assert_eq!(Arc::strong_count(&services.engine_loader), 2);
    }
}
