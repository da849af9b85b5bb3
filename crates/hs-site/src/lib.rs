//! Page composition over stored sections.
//!
//! This crate sits between the section store and page templates:
//! - [`compose_page`] fetches an owner's active sections and partitions
//!   them into header and body flows.
//! - [`render_page`] renders a composition to markup fragments via
//!   `hs-renderer`.
//!
//! # Quick Start
//!
//! ```
//! use hs_renderer::RenderContext;
//! use hs_sections::{MemorySectionStore, OwnerKind, OwnerRef, SectionType};
//! use hs_site::{compose_page, render_page};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let owner = OwnerRef::new(OwnerKind::Page, 1);
//! let store = MemorySectionStore::new().with_section(
//!     owner,
//!     SectionType::Hero,
//!     json!({"heading": "Safety first"}),
//!     0,
//! );
//!
//! let composed = compose_page(&store, owner)?;
//! let page = render_page(&composed, &RenderContext::default());
//! assert_eq!(page.header.len(), 1);
//! # Ok(())
//! # }
//! ```

mod compose;
mod page;

pub use compose::{ComposedPage, compose_page, compose_sections};
pub use page::{RenderedPage, render_page};
