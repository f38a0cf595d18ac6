use birdsong::config::EvaluatorConfig;
use birdsong::game::SequenceEvaluator;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn make_evaluator(cooldown: f64) -> SequenceEvaluator {
    let config = EvaluatorConfig {
        sequence: ["A", "B", "C", "D"].map(String::from).to_vec(),
        sing_rate: 2.0,
        perfect_timing: 0.1,
        good_timing: 0.3,
        cooldown_duration: cooldown,
    };
    SequenceEvaluator::new(config).unwrap()
}

fn tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluator");

    group.bench_function("tick_no_expiry", |b| {
        let mut ev = make_evaluator(0.3);
        ev.start();
        b.iter(|| {
            ev.tick(black_box(0.0001));
            // Restart occasionally to keep the deadline from expiring.
            if ev.remaining_window_time() < 0.5 {
                ev.start();
            }
        });
    });

    group.bench_function("tick_with_miss", |b| {
        let mut ev = make_evaluator(0.3);
        ev.start();
        b.iter(|| {
            ev.tick(black_box(2.5));
        });
    });

    group.finish();
}

fn submit_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluator");

    group.bench_function("submit_wrong", |b| {
        let mut ev = make_evaluator(0.0);
        ev.start();
        b.iter(|| {
            let _ = black_box(ev.submit(black_box("Z")));
        });
    });

    group.bench_function("submit_match_and_rearm", |b| {
        let mut ev = make_evaluator(0.0);
        ev.start();
        b.iter(|| {
            let _ = black_box(ev.submit(black_box("A")));
            ev.tick(2.0); // re-arm
            ev.start(); // keep the expected symbol stable
        });
    });

    group.finish();
}

criterion_group!(benches, tick_benchmark, submit_benchmark);
criterion_main!(benches);
