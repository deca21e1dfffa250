use criterion::{criterion_group, criterion_main, Criterion};
use oncokb_query::indicator::{calculate_oncokb_available_data_type, IndicatorQueryResp};
use oncokb_query::query::{
    generate_annotate_structural_variant_query, generate_protein_change_query,
    generate_query_variant_id,
};
use std::hint::black_box;

fn query_builders(c: &mut Criterion) {
    c.bench_function("generate_query_variant_id", |b| {
        b.iter(|| {
            generate_query_variant_id(
                black_box(673),
                Some("Melanoma of Unknown Primary"),
                Some("V600E"),
                Some("Missense_Mutation"),
            )
        })
    });
    c.bench_function("generate_protein_change_query", |b| {
        b.iter(|| {
            generate_protein_change_query(
                black_box(673),
                Some("MEL"),
                Some("V600E"),
                Some("Missense_Mutation"),
                Some(600),
                Some(600),
                None,
            )
        })
    });
    c.bench_function("generate_annotate_structural_variant_query", |b| {
        b.iter(|| {
            generate_annotate_structural_variant_query(
                black_box(238),
                Some("NSCLC"),
                black_box("EML4-ALK fusion"),
                None,
                None,
            )
        })
    });
}

fn available_data_types(c: &mut Criterion) {
    let data: Vec<IndicatorQueryResp> = serde_json::from_str(
        &std::fs::read_to_string("tests/data/indicator/responses.json").unwrap(),
    )
    .unwrap();
    let data = data.iter().cycle().take(10_000).cloned().collect::<Vec<_>>();

    c.bench_function("calculate_oncokb_available_data_type", |b| {
        b.iter(|| calculate_oncokb_available_data_type(black_box(&data)))
    });
}

criterion_group!(benches, query_builders, available_data_types);
criterion_main!(benches);
