use std::sync::Arc;

use crate::config::Config;
use crate::structuring::structurer::CvStructurer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable CV structurer. Default: heuristic engine, with the hosted
    /// model in front of it when ENABLE_AI_STRUCTURING and a key are set.
    pub structurer: Arc<dyn CvStructurer>,
}
