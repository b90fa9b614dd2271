use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sightline::data::*;
use sightline::get_visibility_polygon;
use sightline::scene::Scene;

use rand::Rng;
use rand::SeedableRng;

fn random_scene(boxes: usize, rng: &mut impl Rng) -> Scene {
  let mut scene = Scene::default();
  while scene.segments().len() < 4 + 4 * boxes {
    let center = Point::new([rng.gen_range(60.0..1220.0), rng.gen_range(60.0..660.0)]);
    // Keep the viewer in the open.
    if center.distance(scene.viewer()) > 60.0 {
      scene.add_box(center).expect("box centers are finite");
    }
  }
  scene
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = rand::rngs::SmallRng::seed_from_u64(1);
  let mut group = c.benchmark_group("get_visibility_polygon::<f64>");
  for boxes in [0, 10, 50, 200] {
    let scene = random_scene(boxes, &mut rng);
    group.bench_with_input(BenchmarkId::from_parameter(boxes), &scene, |b, scene| {
      b.iter(|| get_visibility_polygon(scene.viewer(), scene.segments()))
    });
  }
  group.finish();

  #[cfg(feature = "rayon")]
  {
    let mut group = c.benchmark_group("get_visibility_polygon_par::<f64>");
    for boxes in [50, 200] {
      let scene = random_scene(boxes, &mut rng);
      group.bench_with_input(BenchmarkId::from_parameter(boxes), &scene, |b, scene| {
        b.iter(|| {
          sightline::algorithms::get_visibility_polygon_par(scene.viewer(), scene.segments())
        })
      });
    }
    group.finish();
  }

  // Random points from the unit square as viewers.
  let scene = random_scene(50, &mut rng);
  c.bench_function("moving viewer, 50 boxes", |b| {
    b.iter(|| {
      let pt: Point<f64> = rng.gen();
      let viewer = Point::new([pt.x_coord() * 1280.0, pt.y_coord() * 720.0]);
      get_visibility_polygon(&viewer, scene.segments())
    })
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
