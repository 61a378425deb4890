//! Transition tests - neighbour counting and generation steps

use tui_life::core::{count_live_neighbors, step, Grid};
use tui_life::types::{CellChange, RuleSet};

/// Double-buffered generation computed from an untouched copy of the grid.
fn reference_step(grid: &Grid, rules: &RuleSet) -> Grid {
    let mut next = grid.clone();
    for y in 0..grid.rows() as i32 {
        for x in 0..grid.cols() as i32 {
            let mut n = 0u8;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if (dx, dy) == (0, 0) {
                        continue;
                    }
                    if grid.get(x + dx, y + dy).is_some_and(|c| c.is_alive()) {
                        n += 1;
                    }
                }
            }
            let alive = grid.get(x, y).unwrap().is_alive();
            let next_alive = if alive {
                !(n >= rules.overpopulation || n <= rules.underpopulation)
            } else {
                n == rules.dead_reproduction
            };
            next.set(x, y, next_alive);
        }
    }
    next
}

/// Deterministic pseudo-random fill.
fn scrambled(rows: usize, cols: usize, seed: u32) -> Grid {
    let mut state = seed;
    let mut grid = Grid::new(rows, cols);
    for y in 0..rows as i32 {
        for x in 0..cols as i32 {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            grid.set(x, y, (state >> 16) % 3 == 0);
        }
    }
    grid
}

fn place(grid: &mut Grid, pattern: &[&str], ox: i32, oy: i32) {
    for (dy, row) in pattern.iter().enumerate() {
        for (dx, ch) in row.chars().enumerate() {
            if ch == '#' {
                grid.set(ox + dx as i32, oy + dy as i32, true);
            }
        }
    }
}

#[test]
fn test_neighbor_count_bounded() {
    let full = Grid::from_rows(&["#####", "#####", "#####", "#####"]);
    for cell in full.cells() {
        let n = count_live_neighbors(&full, cell);
        assert!(n <= 8);
        let expected = match (cell.x(), cell.y()) {
            (0 | 4, 0 | 3) => 3,
            (0 | 4, _) | (_, 0 | 3) => 5,
            _ => 8,
        };
        assert_eq!(n, expected, "cell ({}, {})", cell.x(), cell.y());
    }
}

#[test]
fn test_all_dead_stays_dead() {
    let mut grid = Grid::new(3, 3);
    let changes = step(&mut grid, &RuleSet::canonical());
    assert!(changes.is_empty());
    assert_eq!(grid.live_count(), 0);
}

#[test]
fn test_isolated_cell_dies_for_any_nonnegative_underpopulation() {
    for underpopulation in 0..=8 {
        let rules = RuleSet {
            underpopulation,
            ..RuleSet::canonical()
        };
        let mut grid = Grid::from_rows(&["...", ".#.", "..."]);
        let changes = step(&mut grid, &rules);
        assert!(changes.contains(&CellChange::new(1, 1, false)));
        assert!(!grid.get(1, 1).unwrap().is_alive());
    }
}

#[test]
fn test_single_cell_scenario() {
    let mut grid = Grid::new(4, 4);
    grid.set(1, 1, true);

    let center = *grid.get(1, 1).unwrap();
    assert_eq!(count_live_neighbors(&grid, &center), 0);

    let changes = step(&mut grid, &RuleSet::canonical());
    assert_eq!(changes, vec![CellChange::new(1, 1, false)]);
    assert_eq!(grid.live_count(), 0);
}

#[test]
fn test_block_is_still_life() {
    let mut grid = Grid::from_rows(&["....", ".##.", ".##.", "...."]);
    let before = grid.clone();
    assert!(step(&mut grid, &RuleSet::canonical()).is_empty());
    assert_eq!(grid, before);
}

#[test]
fn test_blinker_oscillates() {
    let vertical = Grid::from_rows(&[".....", "..#..", "..#..", "..#..", "....."]);
    let horizontal = Grid::from_rows(&[".....", ".....", ".###.", ".....", "....."]);

    let mut grid = vertical.clone();
    let changes = step(&mut grid, &RuleSet::canonical());
    assert_eq!(grid, horizontal);
    // Row-major order.
    assert_eq!(
        changes,
        vec![
            CellChange::new(2, 1, false),
            CellChange::new(1, 2, true),
            CellChange::new(3, 2, true),
            CellChange::new(2, 3, false),
        ]
    );

    step(&mut grid, &RuleSet::canonical());
    assert_eq!(grid, vertical);
}

#[test]
fn test_glider_advances_diagonally() {
    let glider = [".#.", "..#", "###"];
    let mut grid = Grid::new(10, 10);
    place(&mut grid, &glider, 0, 0);

    for generation in 1..=4 {
        step(&mut grid, &RuleSet::canonical());
        assert_eq!(grid.live_count(), 5, "glider lost cells at generation {}", generation);
    }

    let mut expected = Grid::new(10, 10);
    place(&mut expected, &glider, 1, 1);
    assert_eq!(grid, expected);
}

#[test]
fn test_glider_is_destroyed_at_the_edge() {
    // Off-grid neighbours count as dead, so a glider hitting the corner
    // collapses into a block instead of wrapping around.
    let mut grid = Grid::new(4, 4);
    place(&mut grid, &[".#.", "..#", "###"], 1, 1);
    for _ in 0..8 {
        step(&mut grid, &RuleSet::canonical());
    }
    assert_eq!(grid, Grid::from_rows(&["....", "....", "..##", "..##"]));
}

#[test]
fn test_sweep_matches_double_buffered_generation() {
    let variants = [
        RuleSet::canonical(),
        RuleSet {
            dead_reproduction: 2,
            ..RuleSet::canonical()
        },
        RuleSet {
            underpopulation: 0,
            overpopulation: 6,
            ..RuleSet::canonical()
        },
    ];
    for (i, rules) in variants.iter().enumerate() {
        let mut grid = scrambled(17, 23, 7 + i as u32);
        for _ in 0..6 {
            let expected = reference_step(&grid, rules);
            let changes = step(&mut grid, rules);
            assert_eq!(grid, expected);
            assert!(changes
                .iter()
                .all(|c| grid.get(c.x, c.y).unwrap().is_alive() == c.is_alive));
        }
    }
}

#[test]
fn test_reproduction_window_does_not_change_outcome() {
    let start = scrambled(12, 12, 99);
    let mut a = start.clone();
    let mut b = start;
    let widened = RuleSet {
        reproduction_min: 0,
        reproduction_max: 8,
        ..RuleSet::canonical()
    };
    for _ in 0..5 {
        assert_eq!(
            step(&mut a, &RuleSet::canonical()),
            step(&mut b, &widened)
        );
    }
}
