// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::domain::content::ContentKind;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Pool used by the health probe; absent when running on other storage.
    pub db_pool: Option<PgPool>,
}

/// Content kind served by a nested router (`/articles` or `/newsletters`).
#[derive(Debug, Clone, Copy)]
pub struct ContentScope(pub ContentKind);
