//! Page composition: partitioning a section list into header and body.

use hs_sections::{OwnerRef, Section, SectionStore, StoreError};

/// A page's sections split into header and body flows.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedPage {
    /// True when the owner has at least one active section. When false the
    /// caller falls back to its legacy hardcoded template, if it has one;
    /// composition never synthesises default sections.
    pub use_sections: bool,
    /// Leading banner sections, rendered above the page's own chrome.
    pub header_sections: Vec<Section>,
    /// Everything after the header run, in stored order.
    pub body_sections: Vec<Section>,
}

impl ComposedPage {
    fn empty() -> Self {
        Self {
            use_sections: false,
            header_sections: Vec::new(),
            body_sections: Vec::new(),
        }
    }
}

/// Fetch an owner's sections and partition them.
///
/// The only fallible step is the store read; an owner without sections
/// composes to an empty page, not an error.
pub fn compose_page(store: &dyn SectionStore, owner: OwnerRef) -> Result<ComposedPage, StoreError> {
    let sections = store.list_sections(owner)?;
    Ok(compose_sections(sections))
}

/// Partition an already-fetched, ordered section list.
///
/// The leading run of header-typed sections (`page_header`, `hero`) becomes
/// the header flow, with an asymmetric stop: a `page_header` keeps the scan
/// going, while the first `hero` is captured and then ends it. Any other
/// type ends the scan immediately, so a list starting with body content has
/// an empty header flow. Relative order is preserved in both partitions.
#[must_use]
pub fn compose_sections(sections: Vec<Section>) -> ComposedPage {
    if sections.is_empty() {
        return ComposedPage::empty();
    }

    let mut header_sections = Vec::new();
    let mut rest = sections.into_iter();
    let mut body_sections = Vec::new();
    for section in rest.by_ref() {
        if section.section_type.is_header() {
            let is_hero = section.section_type == hs_sections::SectionType::Hero;
            header_sections.push(section);
            if is_hero {
                break;
            }
        } else {
            body_sections.push(section);
            break;
        }
    }
    body_sections.extend(rest);

    ComposedPage {
        use_sections: true,
        header_sections,
        body_sections,
    }
}
