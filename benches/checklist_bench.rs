use criterion::{black_box, criterion_group, criterion_main, Criterion};

use visaprep_core::model::DateRange;
use visaprep_core::rules::{generate_checklist, RuleCatalog, VisaTypeLabel};

fn bench_generate_checklist(c: &mut Criterion) {
    let catalog = RuleCatalog::builtin();
    let range = DateRange::new("2025-06-01", "2025-06-30");

    c.bench_function("generate_checklist_uk", |b| {
        b.iter(|| {
            generate_checklist(
                black_box(&catalog),
                black_box(Some(VisaTypeLabel::UkStandardVisitor)),
                black_box(&range),
            )
        })
    });
}

criterion_group!(benches, bench_generate_checklist);
criterion_main!(benches);
