use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use bubblesort::{patterns, stable, Sort};

fn measure_comp_count<S: Sort, T: Ord + std::fmt::Debug>(
    name: &str,
    test_len: usize,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    // Measure how many comparisons are performed by a specific implementation and input
    // combination.
    let run_count: usize = if test_len <= 20 {
        10_000
    } else if test_len < 1_000 {
        300
    } else {
        10
    };

    let mut comp_count = 0u64;

    // Instrument via sort_by to ensure the type properties such as Copy of the type
    // that is being sorted doesn't change. And we get representative numbers.
    for _ in 0..run_count {
        let mut test_data = transform(pattern_provider(test_len));
        S::sort_by(black_box(test_data.as_mut_slice()), |a, b| {
            comp_count += 1;
            a.cmp(b)
        })
    }

    // If there is on average less than a single comparison this will be wrong.
    let total = comp_count / (run_count as u64);
    println!("{name}: mean comparisons: {total}");
}

#[inline(never)]
fn bench_impl<S: Sort, T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    let bench_name = S::name();

    if env::var("MEASURE_COMP").is_ok() {
        let name = format!("{bench_name}-comp-{transform_name}-{pattern_name}-{test_len}");
        measure_comp_count::<S, T>(&name, test_len, transform, pattern_provider);
        return;
    }

    let batch_size = if test_len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(
        &format!("{bench_name}-hot-{transform_name}-{pattern_name}-{test_len}"),
        |b| {
            b.iter_batched(
                || transform(pattern_provider(test_len)),
                |mut test_data| S::sort(black_box(test_data.as_mut_slice())),
                batch_size,
            )
        },
    );
}

fn bench_patterns<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: fn(Vec<i32>) -> Vec<T>,
) {
    let mut pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_dense", |size| {
            patterns::random_uniform(size, 0..=(((size as f64).log2().round()) as i32))
        }),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
    ];

    let mut extra_pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("random_binary", |size| patterns::random_uniform(size, 0..=1)),
        ("all_equal", patterns::all_equal),
        ("saws_long", |size| {
            patterns::saw_mixed(size, ((size as f64).log2().round()) as usize)
        }),
        ("pipe_organ", patterns::pipe_organ),
    ];

    if env::var("EXTRA_PATTERNS").is_ok() {
        pattern_providers.append(&mut extra_pattern_providers);
    }

    for (pattern_name, pattern_provider) in pattern_providers.iter() {
        if test_len < 3 && *pattern_name != "random" {
            continue;
        }

        bench_impl::<stable::rust_bubble::SortImpl, T>(
            c,
            test_len,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
        );

        bench_impl::<stable::rust_bubble_early_exit::SortImpl, T>(
            c,
            test_len,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
        );

        bench_impl::<stable::rust_std::SortImpl, T>(
            c,
            test_len,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
        );

        #[cfg(feature = "c_bubble")]
        bench_impl::<stable::c_bubble::SortImpl, T>(
            c,
            test_len,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
        );
    }
}

fn ensure_true_random() {
    // Ensure that random vecs are actually different.
    let random_vec_a = patterns::random(5);
    let random_vec_b = patterns::random(5);

    // With the fixed test seed still active every benchmark would see the same numbers.
    assert_ne!(random_vec_a, random_vec_b);
}

fn criterion_benchmark(c: &mut Criterion) {
    // Quadratic sorts, anything past a few thousand elements only measures the O(n^2).
    let test_lens = [0, 1, 2, 3, 7, 8, 16, 20, 32, 50, 100, 200, 500, 1_000, 2_048];

    patterns::disable_fixed_seed();
    ensure_true_random();

    for test_len in test_lens {
        // Basic type often used to test sorting algorithms.
        bench_patterns(c, test_len, "i32", |values| values);

        // Common type for usize on 64-bit machines.
        bench_patterns(c, test_len, "u64", |values| {
            values
                .iter()
                .map(|val| -> u64 {
                    // Extends the value into the 64 bit range,
                    // while preserving input order.
                    let x = ((*val as i64) + (i32::MAX as i64) + 1) as u64;
                    x.checked_mul(i32::MAX as u64).unwrap()
                })
                .collect()
        });

        // Larger type that is not Copy and does heap access.
        bench_patterns(c, test_len, "string", |values| {
            values
                .iter()
                .map(|val| format!("{:010}", val.saturating_abs()))
                .collect()
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
