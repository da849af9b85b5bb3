//! Application state.
//!
//! Shared state for all request handlers.

use hs_renderer::RenderContext;
use hs_sections::SqliteSectionStore;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Read-only section store.
    pub(crate) store: SqliteSectionStore,
    /// Rendering collaborators (site settings, icon set).
    pub(crate) ctx: RenderContext,
    /// Application version for cache invalidation.
    pub(crate) version: String,
}
