//! Benchmarks for the quadrature rules on the standard cases.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use quadrans::prelude::*;

fn bench_rules_per_case(c: &mut Criterion) {
    let cases = standard_cases().expect("standard cases are derivable");
    let mut group = c.benchmark_group("quadrature");
    group.sample_size(50);

    for case in &cases {
        for rule in QuadratureRule::ALL {
            group.bench_with_input(
                BenchmarkId::new(rule.to_string(), case.name),
                case,
                |b, case| {
                    b.iter(|| {
                        black_box(
                            rule.integrate(&case.function, case.lower, case.upper, case.epsilon)
                                .expect("benchmark integrands are derivable"),
                        )
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_derivative_construction(c: &mut Criterion) {
    let cases = standard_cases().expect("standard cases are derivable");
    let mut group = c.benchmark_group("derive");

    for case in &cases {
        group.bench_with_input(
            BenchmarkId::from_parameter(case.name),
            case,
            |b, case| b.iter(|| black_box(case.function.derive())),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_rules_per_case, bench_derivative_construction);

criterion_main!(benches);
