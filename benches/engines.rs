use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mindquest_engines::core::{GameRng, Grid};
use mindquest_engines::games::game2048::{slide, Direction, Game2048, Game2048Config, Tile};
use mindquest_engines::games::memory::{Memory, MemoryConfig, ShufflePolicy};
use mindquest_engines::games::minesweeper::{Minesweeper, MinesweeperConfig};
use mindquest_engines::games::tetris::{Tetris, TetrisConfig, TetrisMove};
use mindquest_engines::rules::Engine;

fn bench_tetris_tick(c: &mut Criterion) {
    let mut game = Tetris::generate(TetrisConfig::default(), GameRng::new(12345)).unwrap();

    c.bench_function("tetris_tick", |b| {
        b.iter(|| {
            if game.is_terminal() {
                game = Tetris::generate(TetrisConfig::default(), GameRng::new(12345)).unwrap();
            }
            game.apply_move(black_box(TetrisMove::SoftDrop));
        })
    });
}

fn bench_2048_slide(c: &mut Criterion) {
    let grid = Grid::from_fn(4, 4, |r, c| Tile::new(if (r + c) % 3 == 0 { 0 } else { 2 << (r % 2) }));

    c.bench_function("slide_4x4_all_directions", |b| {
        b.iter(|| {
            for dir in Direction::ALL {
                black_box(slide(black_box(&grid), dir));
            }
        })
    });
}

fn bench_2048_game(c: &mut Criterion) {
    c.bench_function("play_2048_to_loss", |b| {
        b.iter(|| {
            let mut game = Game2048::generate(Game2048Config::default(), GameRng::new(7)).unwrap();
            while !game.is_terminal() {
                for dir in Direction::ALL {
                    game.apply_move(dir);
                }
            }
            black_box(game.score())
        })
    });
}

fn bench_minesweeper_flood(c: &mut Criterion) {
    c.bench_function("flood_reveal_32x32", |b| {
        b.iter(|| {
            // One mine in the corner leaves a single large zero region.
            let mut game = Minesweeper::from_mines(32, &[(0, 0)]).unwrap();
            game.reveal(black_box(31), black_box(31));
            black_box(game.revealed_safe_cells())
        })
    });

    c.bench_function("generate_minesweeper_32x32", |b| {
        let mut rng = GameRng::new(3);
        b.iter(|| Minesweeper::generate_with(MinesweeperConfig { size: 32 }, &mut rng))
    });
}

fn bench_memory_deal(c: &mut Criterion) {
    let mut rng = GameRng::new(11);
    let single = MemoryConfig::default();
    let legacy = single.with_shuffle(ShufflePolicy::Legacy);

    c.bench_function("memory_deal_single", |b| {
        b.iter(|| Memory::generate_with(black_box(single), &mut rng))
    });
    c.bench_function("memory_deal_legacy", |b| {
        b.iter(|| Memory::generate_with(black_box(legacy), &mut rng))
    });
}

criterion_group!(
    benches,
    bench_tetris_tick,
    bench_2048_slide,
    bench_2048_game,
    bench_minesweeper_flood,
    bench_memory_deal,
);
criterion_main!(benches);
