//! Section store trait and error types.
//!
//! The engine only ever *reads* sections; creating, editing, reordering and
//! soft-deleting blocks is the admin panel's job and happens outside this
//! codebase. [`SectionStore`] therefore exposes a single listing operation
//! with a strict ordering/visibility contract, and [`display_order`] is the
//! shared helper backends use to honour it.

use crate::section::{OwnerRef, Section};

/// Semantic error categories for store failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreErrorKind {
    /// The owning entity or its table does not exist.
    NotFound,
    /// Backend is unreachable or temporarily unavailable.
    Unavailable,
    /// A row could not be decoded into a [`Section`].
    Malformed,
    /// Other/unknown error category.
    Other,
}

/// Store error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StoreError {
    kind: StoreErrorKind,
    backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StoreError {
    /// Create a new store error.
    #[must_use]
    pub fn new(kind: StoreErrorKind) -> Self {
        Self {
            kind,
            backend: None,
            source: None,
        }
    }

    /// Attach backend identifier (e.g. "Sqlite", "Memory").
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Semantic error category.
    #[must_use]
    pub fn kind(&self) -> StoreErrorKind {
        self.kind
    }

    /// Backend identifier, if attached.
    #[must_use]
    pub fn backend(&self) -> Option<&'static str> {
        self.backend
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StoreErrorKind::NotFound => "Not found",
            StoreErrorKind::Unavailable => "Unavailable",
            StoreErrorKind::Malformed => "Malformed row",
            StoreErrorKind::Other => "Error",
        };
        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        Ok(())
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Read-only access to an owner's section list.
///
/// # Contract
///
/// `list_sections` returns only `is_active` sections, ordered by `sort_order`
/// ascending with ties broken by insertion order (ascending id). An owner
/// with no sections yields an empty list, not an error.
pub trait SectionStore: Send + Sync {
    /// List the active, display-ordered sections of `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] only when the underlying read fails; missing
    /// owners and empty lists are not errors.
    fn list_sections(&self, owner: OwnerRef) -> Result<Vec<Section>, StoreError>;
}

/// Apply the display contract to a raw section list in place.
///
/// Drops inactive sections and stable-sorts by `sort_order`. The input must
/// already be in insertion (ascending id) order for the tie-break to hold;
/// backends that cannot guarantee that should sort by id first.
pub fn display_order(sections: &mut Vec<Section>) {
    sections.retain(|s| s.is_active);
    sections.sort_by_key(|s| s.sort_order);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::section::{OwnerKind, SectionType};

    use super::*;

    fn owner() -> OwnerRef {
        OwnerRef::new(OwnerKind::Page, 1)
    }

    fn section(id: i64, sort_order: i32, is_active: bool) -> Section {
        Section {
            id,
            owner: owner(),
            section_type: SectionType::Text,
            data: json!({}),
            sort_order,
            is_active,
        }
    }

    #[test]
    fn test_display_order_sorts_ascending() {
        let mut sections = vec![section(1, 30, true), section(2, 10, true), section(3, 20, true)];

        display_order(&mut sections);

        let ids: Vec<i64> = sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_display_order_tie_keeps_insertion_order() {
        let mut sections = vec![
            section(5, 10, true),
            section(6, 10, true),
            section(7, 10, true),
        ];

        display_order(&mut sections);

        let ids: Vec<i64> = sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![5, 6, 7]);
    }

    #[test]
    fn test_display_order_drops_inactive() {
        let mut sections = vec![
            section(1, 10, true),
            section(2, 5, false),
            section(3, 20, true),
        ];

        display_order(&mut sections);

        let ids: Vec<i64> = sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_display_order_empty() {
        let mut sections: Vec<Section> = Vec::new();
        display_order(&mut sections);
        assert!(sections.is_empty());
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::new(StoreErrorKind::Unavailable).with_backend("Sqlite");
        assert_eq!(err.to_string(), "[Sqlite] Unavailable");
    }

    #[test]
    fn test_store_error_display_with_source() {
        let io_err = std::io::Error::other("disk gone");
        let err = StoreError::new(StoreErrorKind::Other).with_source(io_err);
        assert_eq!(err.to_string(), "Error: disk gone");
    }

    #[test]
    fn test_store_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StoreError>();
    }
}
