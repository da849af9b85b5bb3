//! Section-to-markup rendering.
//!
//! This crate turns stored [`Section`](hs_sections::Section) records into
//! HTML fragments. Each section type has its own renderer behind the single
//! [`render_section`] entry point; all of them share the style computation
//! in [`style`] and the lenient payload decoding in [`data`].
//!
//! Rendering never fails. Malformed payload fields degrade to defaults,
//! empty list payloads render nothing, and unknown section types are skipped
//! with a warning. External lookups (site settings, named icons) are
//! injected through [`RenderContext`].
//!
//! # Example
//!
//! ```
//! use hs_renderer::{RenderContext, render_section};
//! use hs_sections::{OwnerKind, OwnerRef, Section, SectionType};
//! use serde_json::json;
//!
//! let section = Section::new(
//!     1,
//!     OwnerRef::new(OwnerKind::Page, 1),
//!     SectionType::Text,
//!     json!({"heading": "About us", "content": "<p>We audit sites.</p>"}),
//!     0,
//! );
//! let html = render_section(&section, &RenderContext::default()).unwrap();
//! assert!(html.contains("About us"));
//! ```

mod blocks;
mod context;
pub mod data;
mod escape;
pub mod style;

pub use blocks::render_section;
pub use context::{IconProvider, IconSet, RenderContext, SettingsProvider, StaticSettings};
pub use escape::escape_html;
pub use style::{Background, ComputedStyle, compute_style};
