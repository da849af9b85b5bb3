//! Per-type section renderers.
//!
//! [`render_section`] dispatches on the section's type and returns the
//! rendered fragment, or `None` when the section produces no output (empty
//! list payloads, `image` without an image, unknown types). Renderers are
//! pure functions of the parsed payload, the computed style and the
//! [`RenderContext`]; none of them can fail.

use std::fmt::Write;

use hs_sections::{Section, SectionType};
use tracing::warn;

use crate::context::RenderContext;
use crate::data::{self, StyleOverrides};
use crate::style::{Background, ComputedStyle, compute_style};

mod headers;
mod lists;
mod panels;
mod textual;

/// Render a single section to a markup fragment.
///
/// Returns `None` for inactive sections, empty list payloads and unknown
/// section types. Malformed payloads degrade field by field rather than
/// suppressing the section.
#[must_use]
pub fn render_section(section: &Section, ctx: &RenderContext) -> Option<String> {
    if !section.is_active {
        return None;
    }

    let overrides: StyleOverrides = data::parse(&section.data);
    let style = compute_style(&overrides);

    match &section.section_type {
        SectionType::PageHeader => Some(headers::page_header(
            &data::parse(&section.data),
            &style,
            ctx,
        )),
        SectionType::Hero => Some(headers::hero(&data::parse(&section.data), &style, ctx)),
        SectionType::Text => Some(textual::text(&data::parse(&section.data), &style)),
        SectionType::TextImage => Some(textual::text_image(&data::parse(&section.data), &style)),
        SectionType::Image => textual::image(&data::parse(&section.data), &style),
        SectionType::Checklist => lists::checklist(&data::parse(&section.data), &style, ctx),
        SectionType::ProcessSteps => lists::process_steps(&data::parse(&section.data), &style),
        SectionType::Faq => lists::faq(&data::parse(&section.data), &style, ctx),
        SectionType::Benefits => lists::benefits(&data::parse(&section.data), &style, ctx),
        SectionType::Stats => panels::stats(&data::parse(&section.data), &style),
        SectionType::Cta => Some(panels::cta(&data::parse(&section.data), &style, ctx)),
        SectionType::Cards => panels::cards(&data::parse(&section.data), &style, ctx),
        SectionType::Unknown(name) => {
            warn!(section_id = section.id, section_type = %name, "skipping unknown section type");
            None
        }
    }
}

/// Open the shared section wrapper.
///
/// Flat mode emits a single `<section>` with either an explicit background
/// colour or the caller's default class. Layered mode adds an image layer and
/// a colour overlay at complementary opacities beneath the content.
pub(crate) fn open_section(out: &mut String, style: &ComputedStyle, default_class: &str) {
    match &style.background {
        Background::Layered {
            image,
            image_opacity,
            overlay_color,
            overlay_opacity,
        } => {
            out.push_str(r#"<section class="section-block section-block--layered">"#);
            write!(
                out,
                r#"<div class="section-bg" style="background-image:url('{}');opacity:{image_opacity}"></div>"#,
                crate::escape::escape_html(image)
            )
            .unwrap();
            write!(
                out,
                r#"<div class="section-overlay" style="background-color:{};opacity:{overlay_opacity}"></div>"#,
                crate::escape::escape_html(overlay_color)
            )
            .unwrap();
            out.push_str(r#"<div class="section-content">"#);
        }
        Background::Flat { color } => {
            write!(
                out,
                r#"<section class="section-block" style="background-color:{}">"#,
                crate::escape::escape_html(color)
            )
            .unwrap();
        }
        Background::Default => {
            if default_class.is_empty() {
                out.push_str(r#"<section class="section-block">"#);
            } else {
                write!(out, r#"<section class="section-block {default_class}">"#).unwrap();
            }
        }
    }
}

/// Close the wrapper opened by [`open_section`].
pub(crate) fn close_section(out: &mut String, style: &ComputedStyle) {
    if matches!(style.background, Background::Layered { .. }) {
        out.push_str("</div>");
    }
    out.push_str("</section>");
}

/// Inline `style` attribute for an optional colour override, or empty.
pub(crate) fn color_attr(color: Option<&str>) -> String {
    match color {
        Some(c) => format!(r#" style="color:{}""#, crate::escape::escape_html(c)),
        None => String::new(),
    }
}
