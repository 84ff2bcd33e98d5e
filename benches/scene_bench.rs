#![deny(warnings)]
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use rasterlab::*;

const GRID: Grid = Grid(256);

fn random_scene(rnd: &mut Rnd, count: usize) -> Scene {
    let size = GRID.size() as u32;
    let mut shapes = Vec::with_capacity(count);
    for index in 0..count {
        let p0 = rnd.point(size);
        let shape: Shape = match index % 5 {
            0 => Line::new(p0, rnd.point(size)).into(),
            1 => Circle::new(p0, (rnd.uniform_u32() % 40 + 2) as i32).into(),
            2 => Ellipse::new(
                p0,
                (rnd.uniform_u32() % 40 + 2) as i32,
                (rnd.uniform_u32() % 20 + 2) as i32,
            )
            .into(),
            3 => Polygon {
                points: vec![p0, rnd.point(size), rnd.point(size), rnd.point(size)],
            }
            .into(),
            _ => p0.into(),
        };
        shapes.push(shape);
    }
    Scene::new(shapes)
}

fn scene_benchmark(c: &mut Criterion) {
    let mut rnd = Rnd::new();
    let count = 256;
    let scene = random_scene(&mut rnd, count);
    let clipped = scene
        .clone()
        .with_clip(Some(ClipRect::new(64, 64, 191, 191).expect("valid clip")));
    let options = RasterOptions {
        grid: GRID,
        ..RasterOptions::default()
    };

    let mut group = c.benchmark_group("random-shapes");
    group.throughput(Throughput::Elements(count as u64));
    group.bench_function("render", |b| {
        b.iter_with_large_drop(|| scene.render(&options))
    });
    group.bench_function("render-clipped", |b| {
        b.iter_with_large_drop(|| clipped.render(&options))
    });
    group.finish();

    let policy = ProximityAssociation::default();
    let rotate = Transformation::Rotate {
        degrees: 30.0,
        pivot: None,
    };
    let mut group = c.benchmark_group("transform");
    group.bench_function("rotate-circle", |b| {
        b.iter_with_large_drop(|| scene.transform_shape(1, rotate, &policy))
    });
    group.bench_function("rotate-polygon", |b| {
        b.iter_with_large_drop(|| scene.transform_shape(3, rotate, &policy))
    });
    group.finish();
}

criterion_group!(scene, scene_benchmark);
criterion_main!(scene);

/// Very basic random number generator
#[derive(Default)]
pub struct Rnd {
    state: u32,
}

impl Rnd {
    /// Create new random number generator with seed `0`
    pub fn new() -> Self {
        Self::default()
    }

    fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(214_013).wrapping_add(2_531_011) & 0x7fffffff;
        self.state >> 16
    }

    /// Sample `u32` from uniform distributes
    pub fn uniform_u32(&mut self) -> u32 {
        ((self.step() & 0xffff) << 16) | (self.step() & 0xffff)
    }

    /// Generate random point inside of the `size x size` grid
    pub fn point(&mut self, size: u32) -> Point {
        Point::new(
            (self.uniform_u32() % size) as i32,
            (self.uniform_u32() % size) as i32,
        )
    }
}
