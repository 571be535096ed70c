use criterion::{Criterion, black_box, criterion_group, criterion_main};
use isle_terrain::{
    Combinator, GenerationConfig, Layer, NoiseField, TerrainClassifier, generate_seeded,
    resource_rng, select_variants,
};

fn bench_config() -> GenerationConfig {
    GenerationConfig {
        width: 256,
        height: 256,
        layers: vec![
            Layer::new(Combinator::Add, 4.0, 0.0, 1.0),
            Layer::new(Combinator::Multiply, 8.0, 0.8, 1.2),
            Layer::new(Combinator::Subtract, 16.0, 0.0, 0.1),
        ],
        ..Default::default()
    }
}

fn bench_noise_field(c: &mut Criterion) {
    let config = bench_config();
    let field = NoiseField::new();
    c.bench_function("noise_field_256", |b| {
        b.iter(|| black_box(field.evaluate(black_box(&config), 42)))
    });
}

fn bench_classify(c: &mut Criterion) {
    let config = bench_config();
    let scalars = NoiseField::new().evaluate(&config, 42).unwrap();
    let classifier = TerrainClassifier::from_config(&config);
    c.bench_function("classify_terrain_256", |b| {
        b.iter(|| black_box(classifier.classify_terrain(&scalars, &mut resource_rng(42))))
    });
}

fn bench_variants(c: &mut Criterion) {
    let config = bench_config();
    let scalars = NoiseField::new().evaluate(&config, 42).unwrap();
    let terrain =
        TerrainClassifier::from_config(&config).classify_terrain(&scalars, &mut resource_rng(42));
    c.bench_function("select_variants_256", |b| {
        b.iter(|| black_box(select_variants(black_box(&terrain))))
    });
}

fn bench_generate(c: &mut Criterion) {
    let config = bench_config();
    c.bench_function("generate_256", |b| {
        b.iter(|| black_box(generate_seeded(black_box(&config), 42)))
    });
}

criterion_group!(
    benches,
    bench_noise_field,
    bench_classify,
    bench_variants,
    bench_generate
);
criterion_main!(benches);
