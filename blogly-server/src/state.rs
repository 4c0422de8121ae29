//! Application state shared across handlers

use std::sync::Arc;

use crate::db::BlogStore;
use crate::render::Templates;

/// Shared application state: the injected store and compiled templates
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Box<dyn BlogStore>,
    templates: Templates,
}

impl AppState {
    /// Wrap a store and compile the page templates.
    pub fn new(store: impl BlogStore + 'static) -> Result<Self, tera::Error> {
        Ok(Self {
            inner: Arc::new(AppStateInner {
                store: Box::new(store),
                templates: Templates::new()?,
            }),
        })
    }

    pub fn store(&self) -> &dyn BlogStore {
        self.inner.store.as_ref()
    }

    pub fn templates(&self) -> &Templates {
        &self.inner.templates
    }
}
