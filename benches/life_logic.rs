use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_life::core::{
    count_live_neighbors, step, Grid, HistoryStore, LifeConfig, SimulationController,
};
use tui_life::types::RuleSet;

/// Large grid seeded with a repeating mix of gliders and blinkers.
fn seeded(rows: usize, cols: usize) -> Grid {
    let mut grid = Grid::new(rows, cols);
    for y in 0..rows as i32 {
        for x in 0..cols as i32 {
            if (x * 7 + y * 13) % 5 == 0 || (x + y) % 11 == 0 {
                grid.set(x, y, true);
            }
        }
    }
    grid
}

fn bench_step(c: &mut Criterion) {
    let rules = RuleSet::canonical();
    let mut grid = seeded(200, 300);

    c.bench_function("step_200x300", |b| {
        b.iter(|| {
            step(black_box(&mut grid), &rules);
        })
    });
}

fn bench_neighbor_count(c: &mut Criterion) {
    let grid = seeded(64, 64);

    c.bench_function("count_neighbors_64x64", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for cell in grid.cells() {
                total += count_live_neighbors(black_box(&grid), cell) as u32;
            }
            total
        })
    });
}

fn bench_history_push(c: &mut Criterion) {
    let grid = seeded(100, 100);
    let mut history = HistoryStore::new(50);

    c.bench_function("history_push_100x100", |b| {
        b.iter(|| {
            history.push(black_box(grid.clone()));
        })
    });
}

fn bench_controller_advance(c: &mut Criterion) {
    let config = LifeConfig {
        interval_ms: 200,
        history_length: 10,
        ..LifeConfig::default()
    };
    let mut life = SimulationController::headless(config, 80, 120);
    for y in 0..80 {
        for x in 0..120 {
            if (x * 3 + y) % 7 == 0 {
                let _ = life.edit_cell(x, y);
            }
        }
    }
    life.start();

    c.bench_function("controller_advance_200ms", |b| {
        b.iter(|| {
            life.advance(black_box(200));
        })
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_neighbor_count,
    bench_history_push,
    bench_controller_advance
);
criterion_main!(benches);
