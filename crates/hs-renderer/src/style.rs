//! Shared style and layout computation.
//!
//! Every section's payload may carry the common styling keys described by
//! [`StyleOverrides`](crate::data::StyleOverrides); this module turns them
//! into a [`ComputedStyle`] the per-type renderers consume. Computation never
//! fails: malformed values are clamped or defaulted, because section data is
//! user-authored free-form JSON.

use crate::data::StyleOverrides;

/// Sentinel colour value meaning "no override, use the type's default".
const TRANSPARENT: &str = "transparent";

/// Default overlay colour for layered backgrounds.
const DEFAULT_OVERLAY: &str = "#ffffff";

/// Background treatment for a section.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    /// No override: the renderer applies its per-type default class.
    Default,
    /// Flat card with an explicit background colour.
    Flat {
        /// CSS colour string.
        color: String,
    },
    /// Image layer with a complementary colour overlay.
    ///
    /// The image is drawn at `image_opacity`, the colour overlay above it at
    /// `overlay_opacity = 1 - image_opacity`, so varying `bg_opacity` blends
    /// from pure colour (0) to pure image (100). Content sits above both.
    Layered {
        /// Background image URL.
        image: String,
        /// Image layer opacity, 0.0–1.0.
        image_opacity: f32,
        /// Overlay colour (defaults to white when `bg_color` is unset).
        overlay_color: String,
        /// Overlay opacity, complement of `image_opacity`.
        overlay_opacity: f32,
    },
}

/// Resolved styling for one section.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    /// Background treatment.
    pub background: Background,
    /// Body text colour override, if any.
    pub text_color: Option<String>,
    /// Heading colour override, if any.
    pub heading_color: Option<String>,
    /// Content column percentage for two-column layouts (0–100, default 50).
    pub content_width: u8,
    /// Image column percentage, always `100 - content_width`.
    pub image_width: u8,
    /// True when the author opted into custom styling (`bg_color` or
    /// `bg_image` set). Types with a built-in visual treatment (benefits,
    /// stats, cta, cards) defer to the shared wrapper when this is set.
    pub custom_background: bool,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        compute_style(&StyleOverrides::default())
    }
}

/// Resolve shared styling keys into a [`ComputedStyle`]. Never fails.
#[must_use]
pub fn compute_style(overrides: &StyleOverrides) -> ComputedStyle {
    let bg_color = color_override(overrides.bg_color.as_deref());
    let text_color = color_override(overrides.text_color.as_deref());
    let heading_color = color_override(overrides.heading_color.as_deref());
    let bg_image = overrides
        .bg_image
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned);

    let custom_background = bg_color.is_some() || bg_image.is_some();

    let opacity_pct = overrides
        .bg_opacity
        .and_then(|v| u8::try_from(v.clamp(0, 100)).ok())
        .unwrap_or(100);

    let background = match bg_image {
        Some(image) => Background::Layered {
            image,
            image_opacity: f32::from(opacity_pct) / 100.0,
            overlay_color: bg_color.unwrap_or_else(|| DEFAULT_OVERLAY.to_owned()),
            // Complement computed on the integer percentage so both values
            // format cleanly as CSS opacities.
            overlay_opacity: f32::from(100 - opacity_pct) / 100.0,
        },
        None => match bg_color {
            Some(color) => Background::Flat { color },
            None => Background::Default,
        },
    };

    let content_width = overrides
        .content_width
        .and_then(|v| u8::try_from(v).ok())
        .filter(|v| *v <= 100)
        .unwrap_or(50);

    ComputedStyle {
        background,
        text_color,
        heading_color,
        content_width,
        image_width: 100 - content_width,
        custom_background,
    }
}

/// Normalise a colour override: empty and `"transparent"` mean "unset".
fn color_override(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(TRANSPARENT) {
        None
    } else {
        Some(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn overrides() -> StyleOverrides {
        StyleOverrides::default()
    }

    #[test]
    fn test_default_style() {
        let style = compute_style(&overrides());

        assert_eq!(style.background, Background::Default);
        assert!(!style.custom_background);
        assert_eq!(style.content_width, 50);
        assert_eq!(style.image_width, 50);
        assert!(style.text_color.is_none());
    }

    #[test]
    fn test_transparent_sentinel_is_unset() {
        let style = compute_style(&StyleOverrides {
            bg_color: Some("transparent".to_owned()),
            text_color: Some("Transparent".to_owned()),
            ..overrides()
        });

        assert_eq!(style.background, Background::Default);
        assert!(style.text_color.is_none());
        assert!(!style.custom_background);
    }

    #[test]
    fn test_flat_background() {
        let style = compute_style(&StyleOverrides {
            bg_color: Some("#123456".to_owned()),
            ..overrides()
        });

        assert_eq!(
            style.background,
            Background::Flat {
                color: "#123456".to_owned()
            }
        );
        assert!(style.custom_background);
    }

    #[test]
    fn test_layered_blend_is_complementary() {
        let style = compute_style(&StyleOverrides {
            bg_image: Some("/img/site.jpg".to_owned()),
            bg_opacity: Some(60),
            ..overrides()
        });

        let Background::Layered {
            image_opacity,
            overlay_opacity,
            overlay_color,
            ..
        } = style.background
        else {
            panic!("expected layered background");
        };
        assert!((image_opacity - 0.6).abs() < f32::EPSILON);
        assert!((overlay_opacity - 0.4).abs() < f32::EPSILON);
        assert_eq!(overlay_color, "#ffffff");
    }

    #[test]
    fn test_layered_pure_image_at_100() {
        let style = compute_style(&StyleOverrides {
            bg_image: Some("/img/site.jpg".to_owned()),
            bg_opacity: Some(100),
            ..overrides()
        });

        let Background::Layered {
            image_opacity,
            overlay_opacity,
            ..
        } = style.background
        else {
            panic!("expected layered background");
        };
        assert!((image_opacity - 1.0).abs() < f32::EPSILON);
        assert!(overlay_opacity.abs() < f32::EPSILON);
    }

    #[test]
    fn test_layered_pure_color_at_0() {
        let style = compute_style(&StyleOverrides {
            bg_image: Some("/img/site.jpg".to_owned()),
            bg_color: Some("#0a1f44".to_owned()),
            bg_opacity: Some(0),
            ..overrides()
        });

        let Background::Layered {
            image_opacity,
            overlay_opacity,
            overlay_color,
            ..
        } = style.background
        else {
            panic!("expected layered background");
        };
        assert!(image_opacity.abs() < f32::EPSILON);
        assert!((overlay_opacity - 1.0).abs() < f32::EPSILON);
        assert_eq!(overlay_color, "#0a1f44");
    }

    #[test]
    fn test_opacity_defaults_to_full_image() {
        let style = compute_style(&StyleOverrides {
            bg_image: Some("/img/site.jpg".to_owned()),
            ..overrides()
        });

        let Background::Layered { image_opacity, .. } = style.background else {
            panic!("expected layered background");
        };
        assert!((image_opacity - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_opacity_clamped() {
        let style = compute_style(&StyleOverrides {
            bg_image: Some("/img/site.jpg".to_owned()),
            bg_opacity: Some(250),
            ..overrides()
        });

        let Background::Layered { image_opacity, .. } = style.background else {
            panic!("expected layered background");
        };
        assert!((image_opacity - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_content_width_split() {
        let style = compute_style(&StyleOverrides {
            content_width: Some(70),
            ..overrides()
        });

        assert_eq!(style.content_width, 70);
        assert_eq!(style.image_width, 30);
    }

    #[test]
    fn test_content_width_out_of_range_defaults() {
        for bad in [-10_i64, 120, 1000] {
            let style = compute_style(&StyleOverrides {
                content_width: Some(bad),
                ..overrides()
            });
            assert_eq!(style.content_width, 50, "content_width {bad}");
            assert_eq!(style.image_width, 50);
        }
    }

    #[test]
    fn test_custom_background_from_image_only() {
        let style = compute_style(&StyleOverrides {
            bg_image: Some("/img/banner.jpg".to_owned()),
            ..overrides()
        });

        assert!(style.custom_background);
    }
}
