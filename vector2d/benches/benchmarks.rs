use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vector2d::Vector2D;

fn bench_construct(c: &mut Criterion) {
    c.bench_function("new", |b| {
        b.iter(|| Vector2D::new(black_box(123.456), black_box(-987.654)))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let v = Vector2D::new(3.0, 4.0);
    c.bench_function("rotate", |b| b.iter(|| black_box(v).rotate(black_box(33.0))));
}

fn bench_angle_between(c: &mut Criterion) {
    let u = Vector2D::new(3.0, 4.0);
    let v = Vector2D::new(-2.5, 7.25);
    c.bench_function("angle_between", |b| {
        b.iter(|| black_box(u).angle_between(black_box(v)))
    });
}

fn bench_normalized(c: &mut Criterion) {
    let v = Vector2D::new(-2.5, 7.25);
    c.bench_function("normalized", |b| b.iter(|| black_box(v).normalized()));
}

criterion_group!(
    benches,
    bench_construct,
    bench_rotate,
    bench_angle_between,
    bench_normalized
);
criterion_main!(benches);
