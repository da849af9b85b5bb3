//! In-memory section store for testing.
//!
//! Provides [`MemorySectionStore`] for unit testing composers and renderers
//! without a database. Use the builder methods to configure test data.

use serde_json::Value;

use crate::section::{OwnerRef, Section, SectionType};
use crate::store::{SectionStore, StoreError, StoreErrorKind, display_order};

/// In-memory section store for testing.
///
/// Sections are kept in insertion order; ids are assigned sequentially so the
/// ordering tie-break matches a real database.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use hs_sections::{MemorySectionStore, OwnerKind, OwnerRef, SectionStore, SectionType};
///
/// let owner = OwnerRef::new(OwnerKind::Page, 1);
/// let store = MemorySectionStore::new()
///     .with_section(owner, SectionType::Hero, json!({"heading": "Welcome"}), 10)
///     .with_section(owner, SectionType::Text, json!({"content": "<p>Hi</p>"}), 20);
///
/// let sections = store.list_sections(owner).unwrap();
/// assert_eq!(sections.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MemorySectionStore {
    sections: Vec<Section>,
    next_id: i64,
    fail: bool,
}

impl MemorySectionStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose reads always fail.
    ///
    /// Models an unreachable database for error-path tests.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Add an active section.
    #[must_use]
    pub fn with_section(
        self,
        owner: OwnerRef,
        section_type: SectionType,
        data: Value,
        sort_order: i32,
    ) -> Self {
        self.push(owner, section_type, data, sort_order, true)
    }

    /// Add an inactive (soft-deleted) section.
    #[must_use]
    pub fn with_inactive_section(
        self,
        owner: OwnerRef,
        section_type: SectionType,
        data: Value,
        sort_order: i32,
    ) -> Self {
        self.push(owner, section_type, data, sort_order, false)
    }

    fn push(
        mut self,
        owner: OwnerRef,
        section_type: SectionType,
        data: Value,
        sort_order: i32,
        is_active: bool,
    ) -> Self {
        self.next_id += 1;
        self.sections.push(Section {
            id: self.next_id,
            owner,
            section_type,
            data,
            sort_order,
            is_active,
        });
        self
    }
}

impl SectionStore for MemorySectionStore {
    fn list_sections(&self, owner: OwnerRef) -> Result<Vec<Section>, StoreError> {
        if self.fail {
            return Err(StoreError::new(StoreErrorKind::Unavailable).with_backend("Memory"));
        }

        let mut sections: Vec<Section> = self
            .sections
            .iter()
            .filter(|s| s.owner == owner)
            .cloned()
            .collect();
        display_order(&mut sections);
        Ok(sections)
    }
}
