use std::sync::Arc;

use crate::application::ports::{FileLoader, Summarizer};
use crate::application::services::ProcessingService;
use crate::presentation::config::Settings;

pub struct AppState<F, S>
where
    F: FileLoader + ?Sized,
    S: Summarizer + ?Sized,
{
    pub processing_service: Arc<ProcessingService<F, S>>,
    pub settings: Settings,
}

impl<F, S> Clone for AppState<F, S>
where
    F: FileLoader + ?Sized,
    S: Summarizer + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            processing_service: Arc::clone(&self.processing_service),
            settings: self.settings.clone(),
        }
    }
}
