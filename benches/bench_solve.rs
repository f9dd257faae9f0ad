use criterion::{black_box, criterion_group, criterion_main, Criterion};
use genmeal::{
    coefficients::{CoefficientTable, Item},
    evolution::{solve, SolverOptions},
    fitness::WeightedNutrition,
    pool::GenePool,
    rng::RandomNumberGenerator,
    selection::InsertionSelection,
};

fn menu(len: usize) -> CoefficientTable {
    let items = (0..len)
        .map(|i| {
            let calories = 50.0 + (i * 37 % 400) as f64;
            let nutrients = vec![(i * 13 % 29) as f64, (i * 7 % 17) as f64];
            Item::new(format!("item-{}", i), calories, nutrients)
        })
        .collect();
    CoefficientTable::new(items, vec![1.0, 1.5]).unwrap()
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion_selection");
    for size in [10, 100, 1000].iter() {
        let table = menu(30);
        let mut rng = RandomNumberGenerator::from_seed(1);
        let pool = GenePool::random(&mut rng, *size, table.len());
        let selection = InsertionSelection::new(3000.0, size / 4);

        group.bench_function(&format!("insertion_selection_{}", size), |b| {
            b.iter(|| {
                let result = selection.select(black_box(&pool), &table, &WeightedNutrition);
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let table = menu(40);
    let options = SolverOptions::builder()
        .num_generations(50)
        .max_calories(4000.0)
        .max_survivors(20)
        .build();

    c.bench_function("solve_40_items_50_generations", |b| {
        b.iter(|| {
            let mut rng = RandomNumberGenerator::from_seed(7);
            let initial = GenePool::random(&mut rng, 100, table.len());
            let result = solve(
                &mut rng,
                black_box(initial),
                &table,
                &WeightedNutrition,
                &options,
            );
            assert!(result.is_ok());
        })
    });
}

criterion_group!(benches, bench_selection, bench_solve);
criterion_main!(benches);
