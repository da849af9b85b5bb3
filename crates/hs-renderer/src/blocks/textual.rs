//! `text`, `text_image` and `image` renderers.

use std::fmt::Write;

use crate::blocks::{close_section, color_attr, open_section};
use crate::data::{ImageData, TextData, TextImageData};
use crate::escape::escape_html;
use crate::style::ComputedStyle;

/// Layout variants for `text_image` sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    TextOnly,
    ImageTop,
    ImageLeft,
    ImageRight,
    FullWidth,
}

impl Layout {
    /// Resolve the layout from `layout_type`, falling back to the legacy
    /// `image_position` key, then to a sensible default for the data present.
    fn resolve(data: &TextImageData) -> Self {
        let from_key = |key: &str| match key {
            "text-only" => Some(Self::TextOnly),
            "image-top" | "top" => Some(Self::ImageTop),
            "image-left" | "left" => Some(Self::ImageLeft),
            "image-right" | "right" => Some(Self::ImageRight),
            "full-width" => Some(Self::FullWidth),
            "none" => Some(Self::TextOnly),
            _ => None,
        };
        let chosen = data
            .layout_type
            .as_deref()
            .and_then(from_key)
            .or_else(|| data.image_position.as_deref().and_then(from_key))
            .unwrap_or(Self::ImageRight);
        // Every image-bearing layout degrades to text-only without an image.
        if data.image.is_none() {
            Self::TextOnly
        } else {
            chosen
        }
    }
}

pub(crate) fn text(data: &TextData, style: &ComputedStyle) -> String {
    let mut out = String::new();
    open_section(&mut out, style, "bg-white");
    push_text_body(&mut out, data.heading.as_deref(), data.content.as_deref(), style);
    close_section(&mut out, style);
    out
}

pub(crate) fn text_image(data: &TextImageData, style: &ComputedStyle) -> String {
    let mut out = String::new();
    open_section(&mut out, style, "bg-white");

    let mut body = String::new();
    push_text_body(&mut body, data.heading.as_deref(), data.content.as_deref(), style);

    match Layout::resolve(data) {
        Layout::TextOnly => out.push_str(&body),
        Layout::ImageTop => {
            push_image(&mut out, data, "image-banner");
            out.push_str(&body);
        }
        Layout::FullWidth => {
            out.push_str(&body);
            push_image(&mut out, data, "image-full");
        }
        layout @ (Layout::ImageLeft | Layout::ImageRight) => {
            let mut media = String::new();
            push_image(&mut media, data, "image-column");
            let (first, second, first_width, second_width) = if layout == Layout::ImageLeft {
                (&media, &body, style.image_width, style.content_width)
            } else {
                (&body, &media, style.content_width, style.image_width)
            };
            write!(
                out,
                r#"<div class="text-image-grid" style="grid-template-columns:{first_width}% {second_width}%"><div>{first}</div><div>{second}</div></div>"#
            )
            .unwrap();
        }
    }

    close_section(&mut out, style);
    out
}

/// Standalone image block. The one renderer allowed to produce nothing
/// rather than a degraded fragment: no image, no output.
pub(crate) fn image(data: &ImageData, style: &ComputedStyle) -> Option<String> {
    let src = data.image.as_deref()?;

    let mut out = String::new();
    open_section(&mut out, style, "bg-white");
    write!(
        out,
        r#"<figure class="section-image"><img src="{}" alt="{}">"#,
        escape_html(src),
        escape_html(data.alt_text.as_deref().unwrap_or(""))
    )
    .unwrap();
    if let Some(caption) = &data.caption {
        write!(out, "<figcaption>{}</figcaption>", escape_html(caption)).unwrap();
    }
    out.push_str("</figure>");
    close_section(&mut out, style);
    Some(out)
}

/// Heading plus rich-text body. Content is trusted pre-sanitised HTML and is
/// emitted verbatim; the heading is escaped like any other free-text field.
fn push_text_body(
    out: &mut String,
    heading: Option<&str>,
    content: Option<&str>,
    style: &ComputedStyle,
) {
    if let Some(heading) = heading {
        write!(
            out,
            "<h2{}>{}</h2>",
            color_attr(style.heading_color.as_deref()),
            escape_html(heading)
        )
        .unwrap();
    }
    if let Some(content) = content {
        write!(
            out,
            r#"<div class="rich-text"{}>{content}</div>"#,
            color_attr(style.text_color.as_deref())
        )
        .unwrap();
    }
}

fn push_image(out: &mut String, data: &TextImageData, class: &str) {
    if let Some(src) = &data.image {
        write!(
            out,
            r#"<div class="{class}"><img src="{}" alt=""></div>"#,
            escape_html(src)
        )
        .unwrap();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::data;
    use crate::style::compute_style;

    fn render_text_image(payload: serde_json::Value) -> String {
        let overrides = data::parse(&payload);
        text_image(&data::parse(&payload), &compute_style(&overrides))
    }

    #[test]
    fn test_text_content_not_escaped() {
        let payload = json!({"content": "<p>We carry out <strong>COSHH</strong> assessments.</p>"});
        let overrides = data::parse(&payload);
        let html = text(&data::parse(&payload), &compute_style(&overrides));

        assert!(html.contains("<strong>COSHH</strong>"));
        assert!(!html.contains("&lt;strong&gt;"));
    }

    #[test]
    fn test_text_heading_escaped() {
        let payload = json!({"heading": "Q&A", "content": "<p>x</p>"});
        let overrides = data::parse(&payload);
        let html = text(&data::parse(&payload), &compute_style(&overrides));

        assert!(html.contains("<h2>Q&amp;A</h2>"));
    }

    #[test]
    fn test_text_image_right_split() {
        let html = render_text_image(json!({
            "content": "<p>x</p>",
            "image": "/img/ppe.jpg",
            "layout_type": "image-right",
            "content_width": 70
        }));

        assert!(html.contains("grid-template-columns:70% 30%"));
    }

    #[test]
    fn test_text_image_left_split() {
        let html = render_text_image(json!({
            "content": "<p>x</p>",
            "image": "/img/ppe.jpg",
            "layout_type": "image-left",
            "content_width": 70
        }));

        assert!(html.contains("grid-template-columns:30% 70%"));
        let media = html.find("image-column").unwrap();
        let body = html.find("rich-text").unwrap();
        assert!(media < body);
    }

    #[test]
    fn test_text_image_legacy_position_fallback() {
        let html = render_text_image(json!({
            "content": "<p>x</p>",
            "image": "/img/ppe.jpg",
            "image_position": "left"
        }));

        assert!(html.contains("text-image-grid"));
        let media = html.find("image-column").unwrap();
        let body = html.find("rich-text").unwrap();
        assert!(media < body);
    }

    #[test]
    fn test_text_image_full_width_puts_image_after_text() {
        let html = render_text_image(json!({
            "content": "<p>x</p>",
            "image": "/img/ppe.jpg",
            "layout_type": "full-width"
        }));

        let body = html.find("rich-text").unwrap();
        let media = html.find("image-full").unwrap();
        assert!(body < media);
    }

    #[test]
    fn test_text_image_top_puts_image_before_text() {
        let html = render_text_image(json!({
            "content": "<p>x</p>",
            "image": "/img/ppe.jpg",
            "layout_type": "image-top"
        }));

        let media = html.find("image-banner").unwrap();
        let body = html.find("rich-text").unwrap();
        assert!(media < body);
    }

    #[test]
    fn test_text_image_without_image_degrades_to_text_only() {
        let html = render_text_image(json!({
            "content": "<p>x</p>",
            "layout_type": "image-left"
        }));

        assert!(!html.contains("text-image-grid"));
        assert!(html.contains("rich-text"));
    }

    #[test]
    fn test_image_without_src_renders_nothing() {
        let payload = json!({"alt_text": "A site"});
        let overrides = data::parse(&payload);
        let result = image(&data::parse(&payload), &compute_style(&overrides));

        assert_eq!(result, None);
    }

    #[test]
    fn test_image_with_caption() {
        let payload = json!({
            "image": "/img/scaffold.jpg",
            "alt_text": "Scaffold inspection",
            "caption": "Quarterly scaffold check"
        });
        let overrides = data::parse(&payload);
        let html = image(&data::parse(&payload), &compute_style(&overrides)).unwrap();

        assert!(html.contains(r#"alt="Scaffold inspection""#));
        assert!(html.contains("<figcaption>Quarterly scaffold check</figcaption>"));
    }
}
