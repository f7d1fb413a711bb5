use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tactical_core::analysis::pitch_control::control_grid;
use tactical_core::data::generate_synthetic_tracking;
use tactical_core::engine::config::PitchControlConfig;
use tactical_core::{EngineConfig, FrameEngine, VelocityState};

fn bench_control_grid(c: &mut Criterion) {
    let ds = generate_synthetic_tracking(1, 25.0, 42);
    let frame = &ds.frames[0];
    let config = PitchControlConfig::default();

    c.bench_function("control_grid_22_players_2m", |b| {
        b.iter(|| control_grid(black_box(&frame.home), black_box(&frame.away), None, None, &config))
    });
}

fn bench_frame_pipeline(c: &mut Criterion) {
    let ds = generate_synthetic_tracking(2, 25.0, 42);
    let engine = FrameEngine::new(EngineConfig::default()).unwrap();
    let state = VelocityState::default();

    c.bench_function("process_frame", |b| {
        b.iter(|| engine.process(black_box(&ds.frames[1]), Some(&ds.frames[0]), &state))
    });
}

criterion_group!(benches, bench_control_grid, bench_frame_pipeline);
criterion_main!(benches);
