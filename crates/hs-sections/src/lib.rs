//! Section content model and store for the HS site engine.
//!
//! Public pages (home, services, training, locations) are assembled from an
//! ordered list of typed content blocks (*sections*) authored in the admin
//! panel and stored per owning entity. This crate provides:
//!
//! - [`Section`]: one content block, with a [`SectionType`] discriminator and
//!   an opaque JSON payload interpreted only by the renderer.
//! - [`SectionStore`]: read-only access to the active, ordered section list
//!   of an owner. Admin-side CRUD lives outside this engine.
//! - [`MemorySectionStore`] (feature `mock`): in-memory builder for tests.
//! - [`SqliteSectionStore`] (feature `sqlite`): read-only `sqlx` backend over
//!   the CMS database.
//!
//! # Ordering
//!
//! Section lists are ordered by `sort_order` ascending; equal values keep
//! insertion order (ascending id). Inactive sections are retained in storage
//! but never returned by a store.

mod section;
mod store;

#[cfg(feature = "mock")]
mod memory;
#[cfg(feature = "sqlite")]
mod sqlite;

pub use section::{OwnerKind, OwnerRef, Section, SectionType};
pub use store::{SectionStore, StoreError, StoreErrorKind, display_order};

#[cfg(feature = "mock")]
pub use memory::MemorySectionStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteSectionStore;
