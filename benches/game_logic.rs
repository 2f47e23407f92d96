use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_stacker::core::{overlap, Block, GameConfig, GameSnapshot, GameState, Mover};
use tui_stacker::engine::Autopilot;
use tui_stacker::term::{FrameBuffer, GameView, Viewport};
use tui_stacker::types::{Direction, TICK_MS};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::default();
    state.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(TICK_MS));
        })
    });
}

fn bench_overlap(c: &mut Criterion) {
    let prev = Block {
        left: 70.0,
        width: 220.0,
        layer: 0,
    };
    let mover = Mover {
        left: 83.2,
        width: 220.0,
        direction: Direction::Right,
        layer: 1,
    };

    c.bench_function("overlap", |b| {
        b.iter(|| overlap(black_box(&prev), black_box(&mover)))
    });
}

fn bench_autopilot_game(c: &mut Criterion) {
    let config = GameConfig::default();
    let pilot = Autopilot::for_speed(config.mover_speed);

    c.bench_function("autopilot_full_game", |b| {
        b.iter(|| {
            let mut state = GameState::new(config);
            pilot.run(&mut state, black_box(100_000), |_, _| {})
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::default();
    state.start();
    for _ in 0..40 {
        state.tick(TICK_MS);
    }
    let mut snap = GameSnapshot::default();
    state.snapshot_into(&mut snap);

    let view = GameView::default();
    let vp = Viewport::new(80, 30);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("render_into_80x30", |b| {
        b.iter(|| view.render_into(black_box(&snap), vp, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_overlap,
    bench_autopilot_game,
    bench_render
);
criterion_main!(benches);
