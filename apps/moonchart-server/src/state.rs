use std::sync::Arc;

use moonchart_core::AstroService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AstroService>,
}

impl AppState {
    pub fn new(service: AstroService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
