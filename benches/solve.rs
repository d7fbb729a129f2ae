use criterion::{criterion_group, criterion_main, Criterion};
use nanorand::{Rng, WyRand};

use coin_maze::prelude::*;

/// Produces maze description files for benchmarking.
///
/// Every connector exists and roughly one in eight is a door, so the grid is
/// fully connected and the search has plenty of branches and the occasional
/// door to pay for. Solving benches unwrap only the Result; a budget that
/// turns out too small for every route is still a valid measurement.
struct MazeGen {
    width: usize,
    length: usize,
    coins: usize,
}

impl MazeGen {
    fn new(width: usize, length: usize) -> Self {
        MazeGen {
            width,
            length,
            coins: width + length,
        }
    }

    fn connector(&self, rng: &mut WyRand) -> char {
        if rng.generate_range(0_usize..8) == 0 {
            char::from(b'1' + rng.generate_range(0_u8..9))
        } else {
            'c'
        }
    }

    fn build(&self, rng: &mut WyRand) -> String {
        let mut out = format!("1\n{}\n{}\n{}\n", self.width, self.length, self.coins);
        for i in 0..2 * self.length - 1 {
            for j in 0..2 * self.width - 1 {
                let ch = match (i % 2, j % 2) {
                    (0, 0) if (i, j) == (0, 0) => 's',
                    (0, 0) if i == 2 * self.length - 2 && j == 2 * self.width - 2 => 'x',
                    (0, 0) => '.',
                    (0, 1) => self.connector(rng),
                    (1, 0) => self.connector(rng),
                    _ => 'w',
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("Parse Maze");
    let mut rng = WyRand::new_seed(4);

    for (width, length) in [(16, 16), (64, 64), (128, 128)] {
        let input = MazeGen::new(width, length).build(&mut rng);
        let id = format!("Parse, Grid Size: ({}, {})", width, length);
        group.bench_function(&id, |b| {
            b.iter(|| input.parse::<Maze>().unwrap());
        });
    }
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("Solve Maze");
    let mut rng = WyRand::new_seed(4);

    for (width, length) in [(16, 16), (64, 64), (128, 128)] {
        let maze: Maze = MazeGen::new(width, length)
            .build(&mut rng)
            .parse()
            .unwrap();
        let id = format!("Solve, Grid Size: ({}, {})", width, length);
        group.bench_function(&id, |b| {
            b.iter(|| maze.solve().unwrap());
        });
    }
}

criterion_group!(benches, bench_parse, bench_solve);
criterion_main!(benches);
