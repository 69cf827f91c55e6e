//! Per-call timing of the six record transforms
//!
//! Each record is passed through `black_box` on every iteration so the
//! optimizer can't hoist the update out of the loop.

use std::hint::black_box;
use std::time::Instant;

use vector_transforms::{
    ForwardClarke, ForwardClarkeReduced, ForwardPark, InverseClarke, InverseClarkeReduced,
    InversePark,
};

/// Average cost of one `update()` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkEntry {
    pub name: &'static str,
    pub ns_per_call: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    pub iterations: u32,
    pub entries: Vec<BenchmarkEntry>,
}

/// Time every transform for `iterations` calls
pub fn run_benchmark(iterations: u32) -> BenchmarkReport {
    // sin/cos of ~30°
    let (sin_angle, cos_angle) = (0.5, 0.866_025_4);

    let mut forward_clarke = ForwardClarke {
        a: 1.0,
        b: -0.5,
        c: -0.5,
        ..ForwardClarke::new()
    };
    let mut forward_clarke_reduced = ForwardClarkeReduced {
        a: 1.0,
        b: -0.5,
        ..ForwardClarkeReduced::new()
    };
    let mut inverse_clarke = InverseClarke {
        alpha: 1.0,
        beta: 0.0,
        ..InverseClarke::new()
    };
    let mut inverse_clarke_reduced = InverseClarkeReduced {
        alpha: 1.0,
        beta: 0.0,
        ..InverseClarkeReduced::new()
    };
    let mut forward_park = ForwardPark {
        alpha: 12.0,
        beta: 8.0,
        sin_angle,
        cos_angle,
        ..ForwardPark::new()
    };
    let mut inverse_park = InversePark {
        d: 12.0,
        q: 8.0,
        sin_angle,
        cos_angle,
        ..InversePark::new()
    };

    let entries = vec![
        BenchmarkEntry {
            name: "forward_clarke",
            ns_per_call: time_per_call(iterations, || black_box(&mut forward_clarke).update()),
        },
        BenchmarkEntry {
            name: "forward_clarke_reduced",
            ns_per_call: time_per_call(iterations, || {
                black_box(&mut forward_clarke_reduced).update()
            }),
        },
        BenchmarkEntry {
            name: "inverse_clarke",
            ns_per_call: time_per_call(iterations, || black_box(&mut inverse_clarke).update()),
        },
        BenchmarkEntry {
            name: "inverse_clarke_reduced",
            ns_per_call: time_per_call(iterations, || {
                black_box(&mut inverse_clarke_reduced).update()
            }),
        },
        BenchmarkEntry {
            name: "forward_park",
            ns_per_call: time_per_call(iterations, || black_box(&mut forward_park).update()),
        },
        BenchmarkEntry {
            name: "inverse_park",
            ns_per_call: time_per_call(iterations, || black_box(&mut inverse_park).update()),
        },
    ];

    BenchmarkReport {
        iterations,
        entries,
    }
}

fn time_per_call<F: FnMut()>(iterations: u32, mut f: F) -> f64 {
    if iterations == 0 {
        return 0.0;
    }

    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    start.elapsed().as_nanos() as f64 / f64::from(iterations)
}
