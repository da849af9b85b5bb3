//! Typed section payloads with lenient decoding.
//!
//! Section `data` is authored as free-form JSON with no write-time schema.
//! Each section type gets a struct whose fields are all optional; decoding is
//! *lenient*: wrong-typed scalars are coerced where a sensible reading exists
//! (numbers and bools to strings, numeric strings to numbers, truthy strings
//! to flags), unusable list elements are dropped, and a payload that is not
//! an object decodes to the type's defaults. Parsing can degrade but never
//! fail: a renderer must always receive a value it can work with.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse a section payload into its typed form.
///
/// Falls back to `T::default()` when the payload is not an object (including
/// the `Null` produced for malformed stored JSON).
#[must_use]
pub fn parse<T: DeserializeOwned + Default>(data: &Value) -> T {
    serde_json::from_value(data.clone()).unwrap_or_default()
}

/// Shared styling keys, read from the same JSON map as the typed payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StyleOverrides {
    /// Background colour, or the sentinel `"transparent"` for "no override".
    #[serde(deserialize_with = "de::opt_string")]
    pub bg_color: Option<String>,
    /// Body text colour override. Same sentinel semantics as `bg_color`.
    #[serde(deserialize_with = "de::opt_string")]
    pub text_color: Option<String>,
    /// Heading colour override. Same sentinel semantics as `bg_color`.
    #[serde(deserialize_with = "de::opt_string")]
    pub heading_color: Option<String>,
    /// Background image URL; switches the section to layered rendering.
    #[serde(deserialize_with = "de::opt_string")]
    pub bg_image: Option<String>,
    /// Image visibility 0–100 for layered backgrounds (100 = pure image).
    #[serde(deserialize_with = "de::opt_i64")]
    pub bg_opacity: Option<i64>,
    /// Content column percentage for two-column types.
    #[serde(deserialize_with = "de::opt_i64")]
    pub content_width: Option<i64>,
}

/// Payload for `page_header` sections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PageHeaderData {
    #[serde(deserialize_with = "de::opt_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub breadcrumb: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub image: Option<String>,
    /// One of `left`, `right`, `none`.
    #[serde(deserialize_with = "de::opt_string")]
    pub image_position: Option<String>,
    /// Absent means "show"; explicit false hides the button row.
    #[serde(deserialize_with = "de::opt_flag")]
    pub show_cta: Option<bool>,
    #[serde(deserialize_with = "de::opt_string")]
    pub button1_text: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub button1_url: Option<String>,
    #[serde(deserialize_with = "de::flag")]
    pub button1_newtab: bool,
    #[serde(deserialize_with = "de::opt_string")]
    pub button2_text: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub button2_url: Option<String>,
    #[serde(deserialize_with = "de::flag")]
    pub button2_newtab: bool,
}

/// Payload for `hero` sections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HeroData {
    #[serde(deserialize_with = "de::opt_string")]
    pub heading: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub subheading: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub image: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub image_position: Option<String>,
    /// Absent means "show"; explicit false hides the button row.
    #[serde(deserialize_with = "de::opt_flag")]
    pub show_cta: Option<bool>,
    #[serde(deserialize_with = "de::opt_string")]
    pub button1_text: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub button1_url: Option<String>,
    #[serde(deserialize_with = "de::flag")]
    pub button1_newtab: bool,
    #[serde(deserialize_with = "de::opt_string")]
    pub button2_text: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub button2_url: Option<String>,
    #[serde(deserialize_with = "de::flag")]
    pub button2_newtab: bool,
}

/// Payload for `text` sections. `content` is trusted rich text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TextData {
    #[serde(deserialize_with = "de::opt_string")]
    pub heading: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub content: Option<String>,
}

/// Payload for `text_image` sections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TextImageData {
    #[serde(deserialize_with = "de::opt_string")]
    pub heading: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub content: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub image: Option<String>,
    /// One of `text-only`, `image-top`, `image-left`, `image-right`,
    /// `full-width`. Falls back to `image_position` when absent.
    #[serde(deserialize_with = "de::opt_string")]
    pub layout_type: Option<String>,
    /// Legacy layout key, kept for payloads authored before `layout_type`.
    #[serde(deserialize_with = "de::opt_string")]
    pub image_position: Option<String>,
}

/// Payload for `image` sections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImageData {
    #[serde(deserialize_with = "de::opt_string")]
    pub image: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub alt_text: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub caption: Option<String>,
}

/// Payload for `checklist` sections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChecklistData {
    #[serde(deserialize_with = "de::opt_string")]
    pub heading: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub intro: Option<String>,
    #[serde(deserialize_with = "de::strings")]
    pub items: Vec<String>,
}

/// One step in a `process_steps` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StepItem {
    #[serde(deserialize_with = "de::opt_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub description: Option<String>,
}

/// Payload for `process_steps` sections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProcessStepsData {
    #[serde(deserialize_with = "de::opt_string")]
    pub heading: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub intro: Option<String>,
    #[serde(deserialize_with = "de::items")]
    pub steps: Vec<StepItem>,
}

/// One question/answer pair in a `faq` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FaqItem {
    #[serde(deserialize_with = "de::opt_string")]
    pub question: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub answer: Option<String>,
}

/// Payload for `faq` sections. Accepts the legacy `faqs` key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FaqData {
    #[serde(deserialize_with = "de::opt_string")]
    pub heading: Option<String>,
    #[serde(alias = "faqs", deserialize_with = "de::items")]
    pub items: Vec<FaqItem>,
}

/// Payload for `benefits` sections. `heading` is trusted rich text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BenefitsData {
    #[serde(deserialize_with = "de::opt_string")]
    pub heading: Option<String>,
    #[serde(deserialize_with = "de::strings")]
    pub items: Vec<String>,
}

/// One stat card in a `stats` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatItem {
    /// Display value ("500+", "24/7"); numbers are coerced to strings.
    #[serde(deserialize_with = "de::opt_string")]
    pub number: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub label: Option<String>,
}

/// Payload for `stats` sections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatsData {
    #[serde(deserialize_with = "de::items")]
    pub items: Vec<StatItem>,
}

/// Payload for `cta` sections. `heading` and `content` are trusted rich text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CtaData {
    /// Trusted rich text, emitted verbatim.
    #[serde(deserialize_with = "de::opt_string")]
    pub heading: Option<String>,
    /// Trusted rich text, emitted verbatim like `text` content. Admin-only
    /// authors; the renderer does not escape it.
    #[serde(deserialize_with = "de::opt_string")]
    pub content: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub button_text: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub button_link: Option<String>,
    /// Accent pairing, `orange` (default) or `navy`.
    #[serde(deserialize_with = "de::opt_string")]
    pub style: Option<String>,
}

/// One card in a `cards` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CardItem {
    #[serde(deserialize_with = "de::opt_string")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub description: Option<String>,
}

/// Payload for `cards` sections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CardsData {
    #[serde(deserialize_with = "de::opt_string")]
    pub heading: Option<String>,
    #[serde(deserialize_with = "de::items")]
    pub cards: Vec<CardItem>,
}

/// Lenient field deserializers.
///
/// Every function first decodes to [`Value`] (which accepts any JSON) and
/// then coerces, so a wrong-typed field degrades to its default instead of
/// failing the whole payload.
mod de {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub(super) fn opt_string<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<String>, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(coerce_string(&value))
    }

    pub(super) fn opt_i64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(coerce_i64(&value))
    }

    pub(super) fn opt_flag<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(coerce_flag(&value))
    }

    pub(super) fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(coerce_flag(&value).unwrap_or(false))
    }

    pub(super) fn strings<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        let value = Value::deserialize(d)?;
        let Value::Array(values) = value else {
            return Ok(Vec::new());
        };
        Ok(values.iter().filter_map(coerce_string).collect())
    }

    pub(super) fn items<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(d)?;
        let Value::Array(values) = value else {
            return Ok(Vec::new());
        };
        Ok(values
            .into_iter()
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect())
    }

    fn coerce_string(value: &Value) -> Option<String> {
        match value {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    fn coerce_i64(value: &Value) -> Option<i64> {
        match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn coerce_flag(value: &Value) -> Option<bool> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => Some(n.as_i64().is_some_and(|v| v != 0)),
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Some(true),
                "false" | "0" | "no" | "off" | "" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}
