use std::sync::Arc;

use freshguard_core::application::FreshGuardService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FreshGuardService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FreshGuardService) -> Self {
        Self { args, service }
    }
}
