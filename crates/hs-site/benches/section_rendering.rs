//! Benchmarks for section rendering and page composition.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hs_renderer::{RenderContext, render_section};
use hs_sections::{OwnerKind, OwnerRef, Section, SectionType};
use hs_site::{compose_sections, render_page};
use serde_json::json;

fn owner() -> OwnerRef {
    OwnerRef::new(OwnerKind::Page, 1)
}

fn text_section(id: i64) -> Section {
    Section::new(
        id,
        owner(),
        SectionType::Text,
        json!({
            "heading": "About our audits",
            "content": "<p>We carry out workplace inspections, fire risk assessments and COSHH reviews for sites of every size.</p>"
        }),
        i32::try_from(id).unwrap_or(0),
    )
}

fn checklist_section(id: i64, items: usize) -> Section {
    let items: Vec<String> = (0..items).map(|i| format!("Inspection point {i}")).collect();
    Section::new(
        id,
        owner(),
        SectionType::Checklist,
        json!({"heading": "What we check", "items": items}),
        i32::try_from(id).unwrap_or(0),
    )
}

fn bench_render_text(c: &mut Criterion) {
    let ctx = RenderContext::default();
    let section = text_section(1);

    c.bench_function("render_text_section", |b| {
        b.iter(|| render_section(&section, &ctx));
    });
}

fn bench_render_checklist_sizes(c: &mut Criterion) {
    let ctx = RenderContext::default();
    let mut group = c.benchmark_group("render_checklist");
    for size in [5, 20, 100] {
        let section = checklist_section(1, size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &section, |b, section| {
            b.iter(|| render_section(section, &ctx));
        });
    }
    group.finish();
}

fn bench_compose_and_render_page(c: &mut Criterion) {
    let ctx = RenderContext::default();
    let mut sections = vec![
        Section::new(
            1,
            owner(),
            SectionType::PageHeader,
            json!({"title": "Health and Safety Services", "description": "Nationwide coverage"}),
            0,
        ),
        Section::new(2, owner(), SectionType::Hero, json!({"heading": "Book an audit"}), 1),
    ];
    for id in 3..20 {
        sections.push(text_section(id));
    }

    c.bench_function("compose_and_render_page", |b| {
        b.iter(|| {
            let composed = compose_sections(sections.clone());
            render_page(&composed, &ctx)
        });
    });
}

criterion_group!(
    benches,
    bench_render_text,
    bench_render_checklist_sizes,
    bench_compose_and_render_page
);
criterion_main!(benches);
