use std::sync::Arc;

use crate::domain::generator::ImageGenerator;

/// Shared application state: the injected image-generation capability.
///
/// Constructed once at startup and cloned cheaply per request. Nothing in
/// here is mutable; no state outlives a request.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn ImageGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn ImageGenerator>) -> Self {
        Self { generator }
    }
}
