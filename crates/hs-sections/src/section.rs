//! Section and owner types.
//!
//! A [`Section`] is a single content block belonging to exactly one owning
//! entity (a page, a service, or a training course). The block's payload is
//! an opaque JSON value; only the renderer interprets it, keyed by
//! [`SectionType`].

use std::fmt;

use serde::de::{Deserializer, Error as _};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Kind of entity a section belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerKind {
    /// A CMS page (home, about, location landing pages).
    Page,
    /// A service detail page.
    Service,
    /// A training course page.
    Training,
}

impl OwnerKind {
    /// Stable string form, as stored in the `owner_type` column.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Service => "service",
            Self::Training => "training",
        }
    }

    /// Parse from the stored string form.
    ///
    /// Returns `None` for unrecognised values.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "page" => Some(Self::Page),
            "service" => Some(Self::Service),
            "training" => Some(Self::Training),
            _ => None,
        }
    }
}

impl fmt::Display for OwnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to the entity that owns a section list.
///
/// `(kind, id)` together form the foreign key into exactly one owning record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerRef {
    /// Owning entity kind.
    pub kind: OwnerKind,
    /// Identifier of the owning entity.
    pub id: i64,
}

impl OwnerRef {
    /// Create an owner reference.
    #[must_use]
    pub fn new(kind: OwnerKind, id: i64) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for OwnerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}

/// Rendering shape of a section.
///
/// The set of known types is closed per release, but the admin tool may be
/// newer than the renderer: unrecognised values are carried through as
/// [`SectionType::Unknown`] so the renderer can skip them instead of failing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SectionType {
    /// Full-width intro block with title, description and optional CTA row.
    PageHeader,
    /// Secondary in-page hero, lighter visual weight than `PageHeader`.
    Hero,
    /// Single-column rich text card.
    Text,
    /// Text paired with an image in one of several layouts.
    TextImage,
    /// Standalone image with optional caption.
    Image,
    /// Two-column grid of check-marked items.
    Checklist,
    /// Numbered vertical step list.
    ProcessSteps,
    /// Collapsible question/answer list.
    Faq,
    /// Highlighted benefit list on a dark panel.
    Benefits,
    /// Responsive grid of stat cards.
    Stats,
    /// Centered call-to-action panel.
    Cta,
    /// Responsive card grid with icons.
    Cards,
    /// A type this build does not know how to render.
    Unknown(String),
}

impl SectionType {
    /// Stable string form, as stored in the `section_type` column.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::PageHeader => "page_header",
            Self::Hero => "hero",
            Self::Text => "text",
            Self::TextImage => "text_image",
            Self::Image => "image",
            Self::Checklist => "checklist",
            Self::ProcessSteps => "process_steps",
            Self::Faq => "faq",
            Self::Benefits => "benefits",
            Self::Stats => "stats",
            Self::Cta => "cta",
            Self::Cards => "cards",
            Self::Unknown(name) => name,
        }
    }

    /// Parse from the stored string form.
    ///
    /// Never fails: unrecognised names become [`SectionType::Unknown`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "page_header" => Self::PageHeader,
            "hero" => Self::Hero,
            "text" => Self::Text,
            "text_image" => Self::TextImage,
            "image" => Self::Image,
            "checklist" => Self::Checklist,
            "process_steps" => Self::ProcessSteps,
            "faq" => Self::Faq,
            "benefits" => Self::Benefits,
            "stats" => Self::Stats,
            "cta" => Self::Cta,
            "cards" => Self::Cards,
            other => Self::Unknown(other.to_owned()),
        }
    }

    /// True for types the composer classifies as page headers.
    ///
    /// Used by the header/body partition: `page_header` and `hero` sections
    /// at the start of a list are interleaved with the page template's own
    /// hero region rather than the ordinary content flow.
    #[must_use]
    pub fn is_header(&self) -> bool {
        matches!(self, Self::PageHeader | Self::Hero)
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SectionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SectionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        if name.is_empty() {
            return Err(D::Error::custom("section type must not be empty"));
        }
        Ok(Self::parse(&name))
    }
}

/// A single content block.
///
/// `data` is opaque at this level: valid keys and their meaning are determined
/// entirely by `section_type` and interpreted by the renderer. Absent keys
/// fall back to per-renderer defaults, so no schema is enforced at read time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Opaque identifier, assigned at creation.
    pub id: i64,
    /// Owning entity.
    pub owner: OwnerRef,
    /// Rendering shape discriminator.
    pub section_type: SectionType,
    /// Free-form payload, interpreted per `section_type`.
    pub data: serde_json::Value,
    /// Display position within the owner's list, ascending. Ties keep
    /// insertion order.
    pub sort_order: i32,
    /// Visibility flag. Inactive sections are retained but never rendered.
    pub is_active: bool,
}

impl Section {
    /// Create an active section with the given placement.
    #[must_use]
    pub fn new(
        id: i64,
        owner: OwnerRef,
        section_type: SectionType,
        data: serde_json::Value,
        sort_order: i32,
    ) -> Self {
        Self {
            id,
            owner,
            section_type,
            data,
            sort_order,
            is_active: true,
        }
    }
}
