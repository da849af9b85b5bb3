//! Rendering a composed page to markup fragments.

use hs_renderer::{RenderContext, render_section};

use crate::compose::ComposedPage;

/// Rendered fragments for one page, split the same way as the composition.
///
/// Sections that render nothing (empty lists, unknown types) are dropped
/// here, so templates can interleave the fragments without guarding against
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedPage {
    /// Mirrors [`ComposedPage::use_sections`].
    pub use_sections: bool,
    /// Header fragments, in order.
    pub header: Vec<String>,
    /// Body fragments, in order.
    pub body: Vec<String>,
}

/// Render every section of a composed page.
#[must_use]
pub fn render_page(composed: &ComposedPage, ctx: &RenderContext) -> RenderedPage {
    let render_all = |sections: &[hs_sections::Section]| {
        sections
            .iter()
            .filter_map(|s| render_section(s, ctx))
            .collect()
    };
    RenderedPage {
        use_sections: composed.use_sections,
        header: render_all(&composed.header_sections),
        body: render_all(&composed.body_sections),
    }
}

#[cfg(test)]
mod tests {
    use hs_sections::{MemorySectionStore, OwnerKind, OwnerRef, SectionType};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::compose::compose_page;

    fn owner() -> OwnerRef {
        OwnerRef::new(OwnerKind::Service, 7)
    }

    #[test]
    fn test_render_page_splits_header_and_body() {
        let store = MemorySectionStore::new()
            .with_section(owner(), SectionType::Hero, json!({"heading": "Audits"}), 0)
            .with_section(
                owner(),
                SectionType::Text,
                json!({"content": "<p>Site visits.</p>"}),
                1,
            );
        let composed = compose_page(&store, owner()).unwrap();

        let page = render_page(&composed, &RenderContext::default());

        assert!(page.use_sections);
        assert_eq!(page.header.len(), 1);
        assert!(page.header[0].contains("Audits"));
        assert_eq!(page.body.len(), 1);
        assert!(page.body[0].contains("<p>Site visits.</p>"));
    }

    #[test]
    fn test_render_page_drops_empty_fragments() {
        let store = MemorySectionStore::new()
            .with_section(owner(), SectionType::Checklist, json!({}), 0)
            .with_section(
                owner(),
                SectionType::Unknown("video_embed".to_owned()),
                json!({}),
                1,
            )
            .with_section(
                owner(),
                SectionType::Text,
                json!({"content": "<p>Kept.</p>"}),
                2,
            );
        let composed = compose_page(&store, owner()).unwrap();

        let page = render_page(&composed, &RenderContext::default());

        assert_eq!(page.body.len(), 1);
        assert!(page.body[0].contains("Kept."));
    }

    #[test]
    fn test_render_page_empty_owner() {
        let store = MemorySectionStore::new();
        let composed = compose_page(&store, owner()).unwrap();

        let page = render_page(&composed, &RenderContext::default());

        assert_eq!(page, RenderedPage::default());
    }
}
