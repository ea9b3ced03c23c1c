use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use camproj_camera::{Camera, CameraProperties, Pole};
use camproj_field::Field;
use camproj_geometry::Coordinate;
use camproj_optim::{ExhaustiveSearch, PoseOptimizer};

fn scene() -> (Pole, Field, Camera) {
    let pole = Pole::new(Coordinate::ORIGIN, 10.0);
    let field = Field::from_center(Coordinate::from_xy(0.0, 30.0), 20.0, 20.0);
    let mut camera = Camera::new(CameraProperties::default()).unwrap();
    camera.mount_to_pole_top(&pole);
    (pole, field, camera)
}

fn bench_visible_area(c: &mut Criterion) {
    let (_, field, camera) = scene();
    let mut group = c.benchmark_group("visible_area");
    for &pitch in &[0.2f64, 0.6, 1.0] {
        let mut camera = camera.clone();
        camera
            .set_properties(camera.properties().with_pitch(pitch))
            .unwrap();
        let projection = camera.project().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(pitch), &projection, |b, p| {
            b.iter(|| std::hint::black_box(field.area_visible_within_projection(p)));
        });
    }
    group.finish();
}

fn bench_exhaustive(c: &mut Criterion) {
    let (pole, field, camera) = scene();
    let mut group = c.benchmark_group("exhaustive_search");
    group.sample_size(10);
    for &step_deg in &[5.0f64, 2.0, 1.0] {
        let search = ExhaustiveSearch {
            yaw_step: step_deg.to_radians(),
            pitch_step: step_deg.to_radians(),
        };
        group.bench_with_input(BenchmarkId::from_parameter(step_deg), &search, |b, s| {
            b.iter(|| {
                let mut camera = camera.clone();
                s.optimize(&pole, &mut camera, &field).unwrap();
                std::hint::black_box(camera);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_visible_area, bench_exhaustive);
criterion_main!(benches);
