//! List-shaped renderers: `checklist`, `process_steps`, `faq`, `benefits`.
//!
//! All four share the empty-list policy: no items means no output at all,
//! not an empty shell.

use std::fmt::Write;

use crate::blocks::{close_section, color_attr, open_section};
use crate::context::RenderContext;
use crate::data::{BenefitsData, ChecklistData, FaqData, ProcessStepsData};
use crate::escape::escape_html;
use crate::style::ComputedStyle;

pub(crate) fn checklist(
    data: &ChecklistData,
    style: &ComputedStyle,
    ctx: &RenderContext,
) -> Option<String> {
    if data.items.is_empty() {
        return None;
    }

    let mut out = String::new();
    open_section(&mut out, style, "bg-white");
    push_heading(&mut out, data.heading.as_deref(), style);
    if let Some(intro) = &data.intro {
        write!(out, r#"<p class="intro">{}</p>"#, escape_html(intro)).unwrap();
    }
    out.push_str(r#"<ul class="checklist grid grid-cols-1 gap-3 md:grid-cols-2">"#);
    for item in &data.items {
        write!(
            out,
            "<li>{}{}</li>",
            ctx.icon("check", "check-icon"),
            escape_html(item)
        )
        .unwrap();
    }
    out.push_str("</ul>");
    close_section(&mut out, style);
    Some(out)
}

pub(crate) fn process_steps(data: &ProcessStepsData, style: &ComputedStyle) -> Option<String> {
    if data.steps.is_empty() {
        return None;
    }

    let mut out = String::new();
    open_section(&mut out, style, "bg-white");
    push_heading(&mut out, data.heading.as_deref(), style);
    if let Some(intro) = &data.intro {
        write!(out, r#"<p class="intro">{}</p>"#, escape_html(intro)).unwrap();
    }
    out.push_str(r#"<ol class="process-steps">"#);
    for (index, step) in data.steps.iter().enumerate() {
        write!(
            out,
            r#"<li><span class="step-number">{}</span>"#,
            index + 1
        )
        .unwrap();
        if let Some(title) = &step.title {
            write!(out, "<h3>{}</h3>", escape_html(title)).unwrap();
        }
        if let Some(description) = &step.description {
            write!(out, "<p>{}</p>", escape_html(description)).unwrap();
        }
        out.push_str("</li>");
    }
    out.push_str("</ol>");
    close_section(&mut out, style);
    Some(out)
}

/// Disclosure list, default collapsed.
pub(crate) fn faq(data: &FaqData, style: &ComputedStyle, ctx: &RenderContext) -> Option<String> {
    if data.items.is_empty() {
        return None;
    }

    let mut out = String::new();
    open_section(&mut out, style, "bg-white");
    push_heading(&mut out, data.heading.as_deref(), style);
    for item in &data.items {
        write!(
            out,
            r#"<details class="faq-item"><summary>{}{}</summary>"#,
            escape_html(item.question.as_deref().unwrap_or("")),
            ctx.icon("chevron", "faq-chevron")
        )
        .unwrap();
        if let Some(answer) = &item.answer {
            write!(
                out,
                r#"<div class="faq-answer"><p>{}</p></div>"#,
                escape_html(answer)
            )
            .unwrap();
        }
        out.push_str("</details>");
    }
    close_section(&mut out, style);
    Some(out)
}

/// Dark benefits panel, unless the author opted into custom styling: with
/// `bg_color` or `bg_image` set the section defers to the shared wrapper
/// instead of its built-in gradient. The heading is trusted rich text.
pub(crate) fn benefits(
    data: &BenefitsData,
    style: &ComputedStyle,
    ctx: &RenderContext,
) -> Option<String> {
    if data.items.is_empty() {
        return None;
    }

    let mut out = String::new();
    if style.custom_background {
        open_section(&mut out, style, "bg-white");
    } else {
        out.push_str(r#"<section class="section-block benefits-panel">"#);
    }
    if let Some(heading) = &data.heading {
        write!(
            out,
            "<h2{}>{heading}</h2>",
            color_attr(style.heading_color.as_deref())
        )
        .unwrap();
    }
    out.push_str(r#"<ul class="benefits-list">"#);
    for item in &data.items {
        write!(
            out,
            "<li>{}{}</li>",
            ctx.icon("check", "check-icon"),
            escape_html(item)
        )
        .unwrap();
    }
    out.push_str("</ul>");
    if style.custom_background {
        close_section(&mut out, style);
    } else {
        out.push_str("</section>");
    }
    Some(out)
}

fn push_heading(out: &mut String, heading: Option<&str>, style: &ComputedStyle) {
    if let Some(heading) = heading {
        write!(
            out,
            "<h2{}>{}</h2>",
            color_attr(style.heading_color.as_deref()),
            escape_html(heading)
        )
        .unwrap();
    }
}
