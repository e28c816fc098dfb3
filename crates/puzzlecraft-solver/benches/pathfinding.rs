//! Benchmarks for the grid searches and the sliding-car search.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench pathfinding
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use puzzlecraft_core::{Board, CircularGrid, HexGrid, LayeredGrid, Maze, Pos2, RectGrid};
use puzzlecraft_solver::{
    SlidingAlgorithm,
    pathfinding::{self, Algorithm},
    solve_sliding_puzzle,
};

/// A 40×40 grid with a comb of walls that forces long detours.
fn comb_grid() -> RectGrid {
    RectGrid::from_fn(40, 40, |pos: Pos2| {
        let wall_col = pos.col() % 4 == 2;
        let gap_at_top = (pos.col() / 4) % 2 == 0;
        let gap = if gap_at_top {
            pos.row() == 0
        } else {
            pos.row() == 39
        };
        !wall_col || gap
    })
}

fn mazes() -> Vec<(&'static str, Maze)> {
    vec![
        ("comb", Maze::Rect(comb_grid())),
        ("open_3d", Maze::Layered(LayeredGrid::new(3, 20, 20))),
        ("circular", Maze::Circular(CircularGrid::for_size(20))),
        ("hexagonal", Maze::Hexagonal(HexGrid::new(30, 30))),
    ]
}

fn bench_grid_searches(c: &mut Criterion) {
    let mazes = mazes();
    for algorithm in Algorithm::ALL {
        let mut group = c.benchmark_group(algorithm.to_string());
        for (name, maze) in &mazes {
            group.bench_with_input(BenchmarkId::from_parameter(name), maze, |b, maze| {
                b.iter(|| hint::black_box(pathfinding::solve_grid(algorithm, hint::black_box(maze))));
            });
        }
        group.finish();
    }
}

fn bench_sliding(c: &mut Criterion) {
    let board: Board = "
        AA...O
        P..Q.O
        PRRQ.O
        P..Q..
        B...CC
        B.XXX.
    "
    .parse()
    .unwrap();

    for algorithm in SlidingAlgorithm::ALL {
        c.bench_with_input(
            BenchmarkId::new("sliding", algorithm.to_string()),
            &board,
            |b, board| {
                b.iter(|| hint::black_box(solve_sliding_puzzle(hint::black_box(board), algorithm)));
            },
        );
    }
}

criterion_group!(benches, bench_grid_searches, bench_sliding);
criterion_main!(benches);
