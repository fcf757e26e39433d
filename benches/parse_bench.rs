use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pbrt_parser::{SceneParser, TokenStream};

fn scene_source() -> String {
    let fragment = r#"
        LookAt 3 4 1.5  .5 .5 0  0 0 1
        CoordinateSystem "camera"
        AttributeBegin
            Translate 0 0 -1
            Rotate 45 0 0 1
            Reflectance .2 .8 .2
        AttributeEnd
        Transform 1 0 0 0  0 1 0 0  0 0 1 0  0 0 0 1
        Include "geometry/floor.pbrt"
    "#;
    fragment.repeat(64)
}

fn tokenize_benchmark(c: &mut Criterion) {
    let source = scene_source();

    c.bench_function("tokenize scene", |b| {
        b.iter(|| TokenStream::from_str(black_box(&source)).count())
    });
}

fn parse_benchmark(c: &mut Criterion) {
    let source = scene_source();

    c.bench_function("parse scene", |b| {
        b.iter(|| SceneParser::from_str(black_box(&source)).parse())
    });
}

criterion_group!(benches, tokenize_benchmark, parse_benchmark);
criterion_main!(benches);
