//! Rendering context: settings and icon collaborators.
//!
//! Renderers need two external lookups: site-wide settings (contact phone,
//! office email) embedded in some CTAs, and named icon glyphs for card grids
//! and buttons. Both are injected through [`RenderContext`] rather than read
//! from globals, so renderers stay testable with fake providers.

use std::collections::HashMap;
use std::sync::Arc;

// Inline SVG icons (16x16, stroke-less single-path glyphs)
const SVG_CHECK: &str = r#"<svg viewBox="0 0 16 16" width="16" height="16" aria-hidden="true"><path d="M13.78 4.22a.75.75 0 0 1 0 1.06l-7.25 7.25a.75.75 0 0 1-1.06 0L2.22 9.28a.75.75 0 0 1 1.06-1.06L6 10.94l6.72-6.72a.75.75 0 0 1 1.06 0Z"></path></svg>"#;
const SVG_PHONE: &str = r#"<svg viewBox="0 0 16 16" width="16" height="16" aria-hidden="true"><path d="M3.1 1.5A1.6 1.6 0 0 1 4.67.25l1.7.4c.7.17 1.2.8 1.2 1.52v1.6c0 .62-.36 1.18-.93 1.44l-.9.42a9.6 9.6 0 0 0 4.63 4.63l.42-.9a1.58 1.58 0 0 1 1.44-.93h1.6c.73 0 1.35.5 1.52 1.2l.4 1.7a1.6 1.6 0 0 1-1.25 1.57A12.6 12.6 0 0 1 3.1 1.5Z"></path></svg>"#;
const SVG_EXTERNAL: &str = r#"<svg viewBox="0 0 16 16" width="16" height="16" aria-hidden="true"><path d="M3.75 2h4.5a.75.75 0 0 1 0 1.5h-4.5a.25.25 0 0 0-.25.25v8.5c0 .138.112.25.25.25h8.5a.25.25 0 0 0 .25-.25v-4.5a.75.75 0 0 1 1.5 0v4.5A1.75 1.75 0 0 1 12.25 14h-8.5A1.75 1.75 0 0 1 2 12.25v-8.5C2 2.784 2.784 2 3.75 2Zm6.5-2h4a.75.75 0 0 1 .75.75v4a.75.75 0 0 1-1.5 0V2.56L8.28 7.78a.75.75 0 0 1-1.06-1.06L12.44 1.5h-2.19a.75.75 0 0 1 0-1.5Z"></path></svg>"#;
const SVG_CHEVRON: &str = r#"<svg viewBox="0 0 16 16" width="16" height="16" aria-hidden="true"><path d="M12.78 5.22a.75.75 0 0 1 0 1.06l-4.25 4.25a.75.75 0 0 1-1.06 0L3.22 6.28a.75.75 0 0 1 1.06-1.06L8 8.94l3.72-3.72a.75.75 0 0 1 1.06 0Z"></path></svg>"#;
const SVG_SHIELD: &str = r#"<svg viewBox="0 0 16 16" width="16" height="16" aria-hidden="true"><path d="M8 .5c.2 0 .4.04.58.13l5.25 2.33c.4.18.67.58.67 1.02v3.52c0 4.18-2.7 6.93-6.14 8.42a.9.9 0 0 1-.72 0C4.2 14.43 1.5 11.68 1.5 7.5V3.98c0-.44.26-.84.67-1.02L7.42.63A1.4 1.4 0 0 1 8 .5Zm2.78 5.72a.75.75 0 0 0-1.06-1.06L7.25 7.63l-.97-.97a.75.75 0 0 0-1.06 1.06l1.5 1.5a.75.75 0 0 0 1.06 0Z"></path></svg>"#;
const SVG_CLIPBOARD: &str = r#"<svg viewBox="0 0 16 16" width="16" height="16" aria-hidden="true"><path d="M5.75 1a.75.75 0 0 0-.75.75V2h-1.25A1.75 1.75 0 0 0 2 3.75v10.5c0 .966.784 1.75 1.75 1.75h8.5A1.75 1.75 0 0 0 14 14.25V3.75A1.75 1.75 0 0 0 12.25 2H11v-.25a.75.75 0 0 0-.75-.75Zm.75 1.5h3V4h-3ZM5 5.5h6a.75.75 0 0 0 .75-.75V3.5h.5a.25.25 0 0 1 .25.25v10.5a.25.25 0 0 1-.25.25h-8.5a.25.25 0 0 1-.25-.25V3.75a.25.25 0 0 1 .25-.25h.5v1.25c0 .414.336.75.75.75Z"></path></svg>"#;
const SVG_ALERT: &str = r#"<svg viewBox="0 0 16 16" width="16" height="16" aria-hidden="true"><path d="M6.457 1.047c.659-1.234 2.427-1.234 3.086 0l6.082 11.378A1.75 1.75 0 0 1 14.082 15H1.918a1.75 1.75 0 0 1-1.543-2.575Zm2.593 3.925v2.5a.75.75 0 0 1-1.5 0v-2.5a.75.75 0 0 1 1.5 0ZM9 11a1 1 0 1 1-2 0 1 1 0 0 1 2 0Z"></path></svg>"#;

/// Opaque string provider for site-wide settings.
///
/// Keys are short identifiers such as `contact_phone` or `contact_email`.
pub trait SettingsProvider: Send + Sync {
    /// Look up a setting value.
    fn get(&self, key: &str) -> Option<String>;

    /// Look up a setting value with a fallback default.
    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_owned())
    }
}

/// Map-backed settings provider.
///
/// Built from configuration defaults and/or the database `settings` table.
#[derive(Debug, Default, Clone)]
pub struct StaticSettings {
    values: HashMap<String, String>,
}

impl StaticSettings {
    /// Create an empty settings map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing key/value map.
    #[must_use]
    pub fn from_map(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Add one setting.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Merge `overrides` on top of the current values.
    #[must_use]
    pub fn overlay(mut self, overrides: HashMap<String, String>) -> Self {
        self.values.extend(overrides);
        self
    }
}

impl SettingsProvider for StaticSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Resolver from a short icon identifier to a rendered glyph.
///
/// Unknown names must resolve to a default glyph, never an error: authors
/// type icon names freehand in the admin panel.
pub trait IconProvider: Send + Sync {
    /// Render the named icon with a CSS class hint on the wrapper.
    fn icon(&self, name: &str, class_hint: &str) -> String;
}

/// Built-in inline SVG icon set.
///
/// Covers the glyphs the section renderers need (check marks, phone,
/// external link, disclosure chevron) plus a handful of card icons.
#[derive(Debug, Default, Clone, Copy)]
pub struct IconSet;

impl IconSet {
    /// Create the default icon set.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn glyph(name: &str) -> &'static str {
        match name {
            "check" | "tick" => SVG_CHECK,
            "phone" | "tel" => SVG_PHONE,
            "external" | "external-link" => SVG_EXTERNAL,
            "chevron" | "chevron-down" => SVG_CHEVRON,
            "clipboard" | "checklist" => SVG_CLIPBOARD,
            "alert" | "warning" => SVG_ALERT,
            // Default glyph for unknown names
            _ => SVG_SHIELD,
        }
    }
}

impl IconProvider for IconSet {
    fn icon(&self, name: &str, class_hint: &str) -> String {
        let svg = Self::glyph(name);
        if class_hint.is_empty() {
            format!(r#"<span class="icon" aria-hidden="true">{svg}</span>"#)
        } else {
            format!(r#"<span class="icon {class_hint}" aria-hidden="true">{svg}</span>"#)
        }
    }
}

/// Collaborators injected into every render call.
#[derive(Clone)]
pub struct RenderContext {
    settings: Arc<dyn SettingsProvider>,
    icons: Arc<dyn IconProvider>,
}

impl RenderContext {
    /// Create a context from explicit providers.
    #[must_use]
    pub fn new(settings: Arc<dyn SettingsProvider>, icons: Arc<dyn IconProvider>) -> Self {
        Self { settings, icons }
    }

    /// Create a context with the given settings and the built-in icon set.
    #[must_use]
    pub fn with_settings(settings: StaticSettings) -> Self {
        Self::new(Arc::new(settings), Arc::new(IconSet::new()))
    }

    /// Look up a setting value.
    #[must_use]
    pub fn setting(&self, key: &str) -> Option<String> {
        self.settings.get(key)
    }

    /// Look up a setting value with a fallback default.
    #[must_use]
    pub fn setting_or(&self, key: &str, default: &str) -> String {
        self.settings.get_or(key, default)
    }

    /// Render the named icon.
    #[must_use]
    pub fn icon(&self, name: &str, class_hint: &str) -> String {
        self.icons.icon(name, class_hint)
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::with_settings(StaticSettings::new())
    }
}
