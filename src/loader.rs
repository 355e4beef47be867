use std::sync::{Arc, Mutex};

use futures::future::{BoxFuture, FutureExt, Shared};
use tracing::info;

use crate::engine::{pdfium::PdfiumEngine, IRenderEngine};

pub type EngineHandle = Arc<dyn IRenderEngine>;
pub type LoadResult = Result<EngineHandle, &'static str>;
pub type EngineInit = Box<dyn Fn() -> BoxFuture<'static, LoadResult> + Send + Sync>;
type SharedLoad = Shared<BoxFuture<'static, LoadResult>>;

#[async_trait::async_trait]
pub trait IEngineLoader: Send + Sync {
    async fn ensure_loaded(&self) -> LoadResult;
}

enum LoadState {
    Uninitialized,
    Loading(SharedLoad),
    Ready(EngineHandle),
}

/// Single-flight engine loader: the first caller starts initialization,
/// concurrent callers attach to the same in-flight attempt, and the handle
/// is cached for the rest of the process lifetime. A failed attempt resets
/// to uninitialized so a later call may retry.
pub struct EngineLoader {
    state: Mutex<LoadState>,
    init: EngineInit,
}

impl EngineLoader {
    pub fn new(init: EngineInit) -> EngineLoader {
        EngineLoader {
            state: Mutex::new(LoadState::Uninitialized),
            init,
        }
    }

    /// Loader for the production pdfium engine. Binding the library is
    /// blocking IO, so it runs on the blocking pool.
    pub fn pdfium() -> EngineLoader {
        EngineLoader::new(Box::new(|| {
            async {
                let engine = tokio::task::spawn_blocking(PdfiumEngine::bind)
                    .await
                    .map_err(|_| "Could not init pdfium")??;
                Ok(Arc::new(engine) as EngineHandle)
            }
            .boxed()
        }))
    }
}

#[async_trait::async_trait]
impl IEngineLoader for EngineLoader {
    async fn ensure_loaded(&self) -> LoadResult {
        let (load, initiated) = {
            let mut state = self.state.lock().unwrap();
            match &*state {
                LoadState::Ready(engine) => return Ok(engine.clone()),
                LoadState::Loading(load) => (load.clone(), false),
                LoadState::Uninitialized => {
                    let load = (self.init)().shared();
                    *state = LoadState::Loading(load.clone());
                    (load, true)
                }
            }
        };
        let result = load.await;
        if initiated {
            // Only the caller that started the attempt advances the state;
            // attached callers never touch it.
            let mut state = self.state.lock().unwrap();
            *state = match &result {
                Ok(engine) => {
                    info!("Rendering engine loaded");
                    LoadState::Ready(engine.clone())
                }
                Err(err) => {
                    info!("Rendering engine failed to load: {}", err);
                    LoadState::Uninitialized
                }
            };
        }
        result
    }
}
