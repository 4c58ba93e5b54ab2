use crate::audit::Auditor;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub auditor: Arc<Auditor>,
}

impl AppState {
    pub fn new(auditor: Auditor) -> Self {
        Self {
            auditor: Arc::new(auditor),
        }
    }
}
