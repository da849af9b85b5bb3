//! `page_header` and `hero` renderers.
//!
//! Both share the two-column content/image logic: the split honours
//! `content_width`, and the image occupies the left or right column per
//! `image_position` (`none` collapses to single column). The secondary
//! button auto-detects `tel:` links and shows a phone glyph instead of the
//! external-link glyph used for new-tab links.

use std::fmt::Write;

use crate::blocks::{close_section, color_attr, open_section};
use crate::context::RenderContext;
use crate::data::{HeroData, PageHeaderData};
use crate::escape::escape_html;
use crate::style::ComputedStyle;

pub(crate) fn page_header(
    data: &PageHeaderData,
    style: &ComputedStyle,
    ctx: &RenderContext,
) -> String {
    let mut out = String::new();
    open_section(&mut out, style, "bg-white");

    if let Some(breadcrumb) = &data.breadcrumb {
        write!(
            out,
            r#"<nav class="breadcrumb" aria-label="Breadcrumb">{}</nav>"#,
            escape_html(breadcrumb)
        )
        .unwrap();
    }

    let mut content = String::new();
    if let Some(title) = &data.title {
        write!(
            content,
            "<h1{}>{}</h1>",
            color_attr(style.heading_color.as_deref()),
            escape_html(title)
        )
        .unwrap();
    }
    if let Some(description) = &data.description {
        write!(
            content,
            r#"<p class="lead"{}>{}</p>"#,
            color_attr(style.text_color.as_deref()),
            escape_html(description)
        )
        .unwrap();
    }
    if data.show_cta != Some(false) {
        content.push_str(&button_row(
            data.button1_text.as_deref(),
            data.button1_url.as_deref(),
            data.button1_newtab,
            data.button2_text.as_deref(),
            data.button2_url.as_deref(),
            data.button2_newtab,
            ctx,
        ));
    }

    push_columns(
        &mut out,
        &content,
        data.image.as_deref(),
        data.image_position.as_deref(),
        style,
    );
    close_section(&mut out, style);
    out
}

pub(crate) fn hero(data: &HeroData, style: &ComputedStyle, ctx: &RenderContext) -> String {
    let mut out = String::new();
    // No forced default background; a hero sits on the page's own backdrop.
    open_section(&mut out, style, "");

    let mut content = String::new();
    if let Some(heading) = &data.heading {
        write!(
            content,
            "<h2{}>{}</h2>",
            color_attr(style.heading_color.as_deref()),
            escape_html(heading)
        )
        .unwrap();
    }
    if let Some(subheading) = &data.subheading {
        write!(
            content,
            r#"<p class="subheading"{}>{}</p>"#,
            color_attr(style.text_color.as_deref()),
            escape_html(subheading)
        )
        .unwrap();
    }
    if data.show_cta != Some(false) {
        content.push_str(&button_row(
            data.button1_text.as_deref(),
            data.button1_url.as_deref(),
            data.button1_newtab,
            data.button2_text.as_deref(),
            data.button2_url.as_deref(),
            data.button2_newtab,
            ctx,
        ));
    }

    push_columns(
        &mut out,
        &content,
        data.image.as_deref(),
        data.image_position.as_deref(),
        style,
    );
    close_section(&mut out, style);
    out
}

/// Emit the content/image column pair, or a single column when there is no
/// image (or `image_position` is `none`).
fn push_columns(
    out: &mut String,
    content: &str,
    image: Option<&str>,
    image_position: Option<&str>,
    style: &ComputedStyle,
) {
    let image = match image_position {
        Some("none") => None,
        _ => image,
    };
    let Some(image) = image else {
        write!(out, r#"<div class="header-content">{content}</div>"#).unwrap();
        return;
    };

    let media = format!(
        r#"<div class="header-media"><img src="{}" alt=""></div>"#,
        escape_html(image)
    );
    let (first, second) = match image_position {
        Some("left") => (media.as_str(), content),
        _ => (content, media.as_str()),
    };
    let (first_width, second_width) = match image_position {
        Some("left") => (style.image_width, style.content_width),
        _ => (style.content_width, style.image_width),
    };
    write!(
        out,
        r#"<div class="header-grid" style="grid-template-columns:{first_width}% {second_width}%"><div>{first}</div><div>{second}</div></div>"#
    )
    .unwrap();
}

/// Render up to two buttons. The secondary button shows a phone glyph for
/// `tel:` links, otherwise an external-link glyph when it opens a new tab.
fn button_row(
    button1_text: Option<&str>,
    button1_url: Option<&str>,
    button1_newtab: bool,
    button2_text: Option<&str>,
    button2_url: Option<&str>,
    button2_newtab: bool,
    ctx: &RenderContext,
) -> String {
    let mut buttons = String::new();
    if let Some(text) = button1_text {
        buttons.push_str(&button(
            text,
            button1_url.unwrap_or("#"),
            button1_newtab,
            "btn btn-primary",
            None,
        ));
    }
    if let Some(text) = button2_text {
        let url = button2_url.unwrap_or("#");
        let icon = if url.starts_with("tel:") {
            Some(ctx.icon("phone", "btn-icon"))
        } else if button2_newtab {
            Some(ctx.icon("external", "btn-icon"))
        } else {
            None
        };
        buttons.push_str(&button(
            text,
            url,
            button2_newtab,
            "btn btn-secondary",
            icon.as_deref(),
        ));
    }
    if buttons.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="button-row">{buttons}</div>"#)
    }
}

fn button(text: &str, url: &str, newtab: bool, class: &str, icon: Option<&str>) -> String {
    let target = if newtab {
        r#" target="_blank" rel="noopener""#
    } else {
        ""
    };
    let icon = icon.unwrap_or("");
    format!(
        r#"<a class="{class}" href="{}"{target}>{icon}{}</a>"#,
        escape_html(url),
        escape_html(text)
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::data;
    use crate::style::compute_style;

    fn render_header(payload: serde_json::Value) -> String {
        let overrides = data::parse(&payload);
        page_header(
            &data::parse(&payload),
            &compute_style(&overrides),
            &RenderContext::default(),
        )
    }

    #[test]
    fn test_page_header_defaults_to_white_card() {
        let html = render_header(json!({"title": "Fire Risk Assessments"}));

        assert!(html.contains(r#"class="section-block bg-white""#));
        assert!(html.contains("<h1>Fire Risk Assessments</h1>"));
    }

    #[test]
    fn test_page_header_escapes_title() {
        let html = render_header(json!({"title": "Health & Safety"}));

        assert!(html.contains("Health &amp; Safety"));
    }

    #[test]
    fn test_two_column_split_honours_content_width() {
        let html = render_header(json!({
            "title": "Site Audits",
            "image": "/img/audit.jpg",
            "image_position": "right",
            "content_width": 70
        }));

        assert!(html.contains("grid-template-columns:70% 30%"));
        assert!(html.contains(r#"src="/img/audit.jpg""#));
    }

    #[test]
    fn test_image_left_swaps_columns() {
        let html = render_header(json!({
            "title": "Site Audits",
            "image": "/img/audit.jpg",
            "image_position": "left",
            "content_width": 70
        }));

        assert!(html.contains("grid-template-columns:30% 70%"));
        let media = html.find("header-media").unwrap();
        let heading = html.find("<h1").unwrap();
        assert!(media < heading);
    }

    #[test]
    fn test_image_position_none_is_single_column() {
        let html = render_header(json!({
            "title": "Site Audits",
            "image": "/img/audit.jpg",
            "image_position": "none"
        }));

        assert!(!html.contains("header-grid"));
        assert!(html.contains("header-content"));
    }

    #[test]
    fn test_tel_button_gets_phone_icon() {
        let html = render_header(json!({
            "title": "Contact",
            "button2_text": "Call us",
            "button2_url": "tel:+448001234567"
        }));

        assert!(html.contains(r#"href="tel:+448001234567""#));
        assert!(html.contains("icon btn-icon"));
    }

    #[test]
    fn test_newtab_button_gets_external_icon_and_target() {
        let html = render_header(json!({
            "title": "Contact",
            "button2_text": "Book online",
            "button2_url": "https://booking.example.com",
            "button2_newtab": true
        }));

        assert!(html.contains(r#"target="_blank" rel="noopener""#));
        assert!(html.contains("icon btn-icon"));
    }

    #[test]
    fn test_show_cta_false_hides_buttons() {
        let html = render_header(json!({
            "title": "Contact",
            "show_cta": false,
            "button1_text": "Get a quote",
            "button1_url": "/contact"
        }));

        assert!(!html.contains("button-row"));
    }

    #[test]
    fn test_show_cta_absent_shows_buttons() {
        let html = render_header(json!({
            "title": "Contact",
            "button1_text": "Get a quote",
            "button1_url": "/contact"
        }));

        assert!(html.contains("button-row"));
        assert!(html.contains(r#"href="/contact""#));
    }

    fn render_hero(payload: serde_json::Value) -> String {
        let overrides = data::parse(&payload);
        hero(
            &data::parse(&payload),
            &compute_style(&overrides),
            &RenderContext::default(),
        )
    }

    #[test]
    fn test_hero_show_cta_false_hides_buttons() {
        let html = render_hero(json!({
            "heading": "Trusted advisors",
            "show_cta": false,
            "button1_text": "Get a quote",
            "button1_url": "/contact"
        }));

        assert!(!html.contains("button-row"));
    }

    #[test]
    fn test_hero_show_cta_absent_shows_buttons() {
        let html = render_hero(json!({
            "heading": "Trusted advisors",
            "button1_text": "Get a quote",
            "button1_url": "/contact"
        }));

        assert!(html.contains("button-row"));
        assert!(html.contains(r#"href="/contact""#));
    }

    #[test]
    fn test_hero_has_no_forced_background() {
        let payload = json!({"heading": "Trusted advisors", "subheading": "Since 2003"});
        let overrides = data::parse(&payload);
        let html = hero(
            &data::parse(&payload),
            &compute_style(&overrides),
            &RenderContext::default(),
        );

        assert!(html.contains(r#"<section class="section-block">"#));
        assert!(html.contains("<h2>Trusted advisors</h2>"));
        assert_eq!(html.matches("bg-white").count(), 0);
    }
}
