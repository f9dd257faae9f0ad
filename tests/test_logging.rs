use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use genmeal::{
    coefficients::{CoefficientTable, Item},
    evolution::{LogLevel, Solver, SolverOptions},
    fitness::BalancedNutrition,
    rng::RandomNumberGenerator,
};
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted events in memory.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn lines(&self) -> Vec<String> {
        let buffer = self.0.lock().unwrap();
        String::from_utf8_lossy(&buffer)
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

const GENERATIONS: usize = 5;

fn lunch_table() -> CoefficientTable {
    // Nutrients: protein, fibre, vitamins.
    CoefficientTable::new(
        vec![
            Item::new("chicken", 280.0, vec![30.0, 0.0, 2.0]),
            Item::new("lentils", 230.0, vec![18.0, 15.0, 3.0]),
            Item::new("broccoli", 55.0, vec![4.0, 5.0, 9.0]),
            Item::new("brown rice", 215.0, vec![5.0, 3.5, 1.0]),
            Item::new("salmon", 360.0, vec![34.0, 0.0, 6.0]),
            Item::new("spinach", 25.0, vec![3.0, 2.0, 8.0]),
            Item::new("bread", 160.0, vec![6.0, 4.0, 1.0]),
            Item::new("orange", 60.0, vec![1.0, 3.0, 7.0]),
            Item::new("almonds", 170.0, vec![6.0, 3.5, 4.0]),
            Item::new("yoghurt", 150.0, vec![10.0, 0.0, 2.0]),
            Item::new("chocolate", 230.0, vec![2.0, 3.0, 0.5]),
            Item::new("apple", 95.0, vec![0.5, 4.0, 3.0]),
        ],
        vec![1.0, 1.5, 1.2],
    )
    .unwrap()
}

/// Runs a small evolution at `log_level` and returns the captured log lines.
fn run_logged(log_level: LogLevel) -> Vec<String> {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(captured.clone())
        .finish();

    let solver = Solver::new(lunch_table(), BalancedNutrition::new(vec![40.0, 20.0, 20.0]));
    let options = SolverOptions::builder()
        .num_generations(GENERATIONS)
        .max_calories(1200.0)
        .max_survivors(5)
        .log_level(log_level)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(77);

    let best = tracing::subscriber::with_default(subscriber, || {
        solver.solve_random(&options, 15, &mut rng)
    })
    .unwrap();
    assert!(best.calories <= 1200.0);

    captured.lines()
}

fn count_containing(lines: &[String], needle: &str) -> usize {
    lines.iter().filter(|line| line.contains(needle)).count()
}

#[test]
fn test_no_logging_emits_nothing() {
    let lines = run_logged(LogLevel::None);
    assert!(lines.is_empty(), "unexpected output: {:?}", lines);
}

#[test]
fn test_minimal_logs_each_generation() {
    let lines = run_logged(LogLevel::Minimal);
    assert_eq!(count_containing(&lines, "selected survivors"), GENERATIONS);
    assert_eq!(count_containing(&lines, "evolution finished"), 1);
    assert_eq!(count_containing(&lines, "DEBUG"), 0);
    for generation in 0..GENERATIONS {
        let field = format!("generation={}", generation);
        assert!(lines.iter().any(|line| line.contains(&field)));
    }
}

#[test]
fn test_verbose_logs_each_survivor() {
    let lines = run_logged(LogLevel::Verbose);
    assert_eq!(count_containing(&lines, "selected survivors"), GENERATIONS);
    assert_eq!(count_containing(&lines, "evolution finished"), 1);

    let survivor_lines: Vec<&String> = lines.iter().filter(|l| l.contains("DEBUG")).collect();
    // Every generation reproduced, so each had at least two survivors.
    assert!(survivor_lines.len() >= 2 * GENERATIONS);
    assert!(survivor_lines.len() <= 5 * GENERATIONS);
    for line in survivor_lines {
        assert!(line.contains("survivor"));
        assert!(line.contains("slot="));
        assert!(line.contains("value="));
    }
}
