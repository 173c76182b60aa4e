use criterion::{black_box, criterion_group, criterion_main, Criterion};
use formdeck_model::{Form, Selection};
use formdeck_render::{to_html, HtmlOptions, Projector};

fn render_starter_form(c: &mut Criterion) {
    let form = Form::default();
    let selection = Selection::default();
    let projector = Projector::new();

    c.bench_function("render_starter_form", |b| {
        b.iter(|| projector.render(black_box(&form), black_box(&selection)))
    });
}

fn render_to_html(c: &mut Criterion) {
    let form = Form::default();
    let mut selection = Selection::default();
    selection.selected_slide_id = Some("question_1".to_string());
    let canvas = Projector::new().render(&form, &selection);

    c.bench_function("render_to_html", |b| {
        b.iter(|| to_html(black_box(&canvas), HtmlOptions::default()))
    });
}

criterion_group!(benches, render_starter_form, render_to_html);
criterion_main!(benches);
