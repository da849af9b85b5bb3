//! Panel renderers: `stats`, `cta`, `cards`.
//!
//! `stats` and `cta` share the custom-background escape hatch with
//! `benefits`: an explicit `bg_color` or `bg_image` replaces the type's
//! built-in look with the shared wrapper.

use std::fmt::Write;

use crate::blocks::{close_section, color_attr, open_section};
use crate::context::RenderContext;
use crate::data::{CardsData, CtaData, StatsData};
use crate::escape::escape_html;
use crate::style::ComputedStyle;

/// Stat card grid. Bare by default so it sits inline in the page's own
/// section flow; wrapped in the shared background treatment only when the
/// author set a custom background.
pub(crate) fn stats(data: &StatsData, style: &ComputedStyle) -> Option<String> {
    if data.items.is_empty() {
        return None;
    }

    let mut grid = String::from(r#"<div class="stats-grid grid grid-cols-2 gap-6 md:grid-cols-4">"#);
    for item in &data.items {
        write!(
            grid,
            r#"<div class="stat-card"><span class="stat-number">{}</span><span class="stat-label">{}</span></div>"#,
            escape_html(item.number.as_deref().unwrap_or("")),
            escape_html(item.label.as_deref().unwrap_or(""))
        )
        .unwrap();
    }
    grid.push_str("</div>");

    if style.custom_background {
        let mut out = String::new();
        open_section(&mut out, style, "bg-white");
        out.push_str(&grid);
        close_section(&mut out, style);
        Some(out)
    } else {
        Some(grid)
    }
}

/// Centered call-to-action panel. `heading` and `content` are trusted rich
/// text. A button with text but no link falls back to the site contact
/// phone number as a `tel:` link.
pub(crate) fn cta(data: &CtaData, style: &ComputedStyle, ctx: &RenderContext) -> String {
    let mut out = String::new();
    let custom = style.custom_background;
    if custom {
        open_section(&mut out, style, "bg-white");
        out.push_str(r#"<div class="cta-panel">"#);
    } else {
        let accent = match data.style.as_deref() {
            Some("navy") => "navy",
            _ => "orange",
        };
        write!(
            out,
            r#"<section class="section-block cta-panel cta-panel--{accent}">"#
        )
        .unwrap();
    }

    if let Some(heading) = &data.heading {
        write!(
            out,
            "<h2{}>{heading}</h2>",
            color_attr(style.heading_color.as_deref())
        )
        .unwrap();
    }
    if let Some(content) = &data.content {
        write!(
            out,
            r#"<div class="cta-content"{}>{content}</div>"#,
            color_attr(style.text_color.as_deref())
        )
        .unwrap();
    }
    if let Some(text) = &data.button_text {
        let link = match &data.button_link {
            Some(link) => link.clone(),
            None => format!("tel:{}", ctx.setting_or("contact_phone", "")),
        };
        let icon = if link.starts_with("tel:") {
            ctx.icon("phone", "btn-icon")
        } else {
            String::new()
        };
        write!(
            out,
            r#"<a class="btn btn-cta" href="{}">{icon}{}</a>"#,
            escape_html(&link),
            escape_html(text)
        )
        .unwrap();
    }

    if custom {
        out.push_str("</div>");
        close_section(&mut out, style);
    } else {
        out.push_str("</section>");
    }
    out
}

/// Responsive card grid with named icons resolved by the icon collaborator.
pub(crate) fn cards(data: &CardsData, style: &ComputedStyle, ctx: &RenderContext) -> Option<String> {
    if data.cards.is_empty() {
        return None;
    }

    let mut out = String::new();
    open_section(&mut out, style, "bg-white");
    if let Some(heading) = &data.heading {
        write!(
            out,
            "<h2{}>{}</h2>",
            color_attr(style.heading_color.as_deref()),
            escape_html(heading)
        )
        .unwrap();
    }
    out.push_str(r#"<div class="card-grid grid grid-cols-1 gap-6 md:grid-cols-3">"#);
    for card in &data.cards {
        out.push_str(r#"<div class="card">"#);
        out.push_str(&ctx.icon(card.icon.as_deref().unwrap_or(""), "card-icon"));
        if let Some(title) = &card.title {
            write!(out, "<h3>{}</h3>", escape_html(title)).unwrap();
        }
        if let Some(description) = &card.description {
            write!(out, "<p>{}</p>", escape_html(description)).unwrap();
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
    close_section(&mut out, style);
    Some(out)
}
