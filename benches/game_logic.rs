use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockdrop::core::{Board, Game, GameSnapshot, RandomPieces, Tetromino};
use blockdrop::term::{FrameBuffer, GameView, Viewport};
use blockdrop::types::{GameAction, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(RandomPieces::seeded(12345));

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if game.game_over() {
                game.restart();
            }
            game.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            black_box(board.clear_full_lines());
        })
    });
}

fn bench_valid_position(c: &mut Criterion) {
    let mut board = Board::new();
    for x in 0..9 {
        board.set(x, 19, Some(PieceKind::J));
    }
    let piece = Tetromino::spawn(PieceKind::T).shifted(0, 16);

    c.bench_function("is_valid_position", |b| {
        b.iter(|| board.is_valid_position(black_box(&piece.cells())))
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut game = Game::new(RandomPieces::seeded(12345));

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if game.game_over() {
                game.restart();
            }
            game.apply_action(black_box(GameAction::HardDrop));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut game = Game::new(RandomPieces::seeded(12345));

    c.bench_function("rotate", |b| {
        b.iter(|| game.apply_action(black_box(GameAction::Rotate)))
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let game = Game::new(RandomPieces::seeded(12345));
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("render_frame", |b| {
        b.iter(|| {
            game.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_valid_position,
    bench_hard_drop,
    bench_rotate,
    bench_render_frame
);
criterion_main!(benches);
