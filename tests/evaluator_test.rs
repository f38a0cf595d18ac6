use birdsong::config::EvaluatorConfig;
use birdsong::game::{OutcomeKind, SequenceEvaluator};
use proptest::prelude::*;

fn evaluator(symbols: &[&str], sing_rate: f64) -> SequenceEvaluator {
    let config = EvaluatorConfig {
        sequence: symbols.iter().map(|s| s.to_string()).collect(),
        sing_rate,
        perfect_timing: 0.1,
        good_timing: 0.3,
        cooldown_duration: 0.3,
    };
    SequenceEvaluator::new(config).unwrap()
}

#[test]
fn test_scoring_tier_perfect() {
    let mut ev = evaluator(&["A"], 2.0);
    ev.start();
    ev.tick(0.05);
    assert_eq!(ev.submit("A").kind, OutcomeKind::Perfect);
}

#[test]
fn test_scoring_tier_good() {
    let mut ev = evaluator(&["A"], 2.0);
    ev.start();
    ev.tick(0.2);
    assert_eq!(ev.submit("A").kind, OutcomeKind::Good);
}

#[test]
fn test_scoring_tier_late() {
    let mut ev = evaluator(&["A"], 2.0);
    ev.start();
    ev.tick(0.31);
    assert_eq!(ev.submit("A").kind, OutcomeKind::LateButCorrect);
}

#[test]
fn test_timeout_auto_miss() {
    let mut ev = evaluator(&["A", "B"], 1.0);
    ev.start();
    let outcome = ev.tick(1.01).expect("deadline expiry must score a miss");
    assert_eq!(outcome.kind, OutcomeKind::Missed);
    assert_eq!(outcome.expected_symbol, "A");
    assert_eq!(ev.current_cursor(), 1);
}

#[test]
fn test_full_round_wrap() {
    let mut ev = evaluator(&["A", "B"], 2.0);
    ev.start();

    assert_eq!(ev.submit("A").kind, OutcomeKind::Perfect);
    ev.tick(2.0); // re-arm onto "B"
    assert!(ev.is_awaiting_input());
    assert_eq!(ev.submit("B").kind, OutcomeKind::Perfect);
    ev.tick(2.0); // re-arm onto the restarted round

    assert_eq!(ev.current_cursor(), 0);
    assert!(ev.is_awaiting_input());
    assert_eq!(ev.expected_symbol(), "A");
    assert_eq!(ev.rounds_completed(), 1);
}

#[test]
fn test_wrong_note_does_not_advance() {
    let mut ev = evaluator(&["A", "B"], 2.0);
    ev.start();
    let outcome = ev.submit("B");
    assert_eq!(outcome.kind, OutcomeKind::Wrong);
    assert_eq!(ev.current_cursor(), 0);
    assert!(ev.is_awaiting_input());
    assert_eq!(ev.expected_symbol(), "A");
}

#[test]
fn test_debounce_suppression() {
    let mut ev = evaluator(&["A", "B"], 2.0);
    ev.start();
    ev.submit("A"); // accepted, arms the cooldown
    let cursor = ev.current_cursor();
    let remaining = ev.remaining_window_time();

    ev.tick(0.1); // strictly within the 0.3s cooldown
    let outcome = ev.submit("B");
    assert_eq!(outcome.kind, OutcomeKind::Suppressed);
    assert_eq!(ev.current_cursor(), cursor);
    assert!((ev.remaining_window_time() - (remaining - 0.1)).abs() < 1e-9);
}

#[test]
fn test_rejected_when_not_awaiting() {
    let mut ev = evaluator(&["A", "B"], 2.0);
    ev.start();
    ev.submit("A");
    ev.tick(0.4); // cooldown lapses, window still resting
    assert!(!ev.is_awaiting_input());

    let outcome = ev.submit("A");
    assert_eq!(outcome.kind, OutcomeKind::Rejected);
    assert!(ev.is_cooldown_active());
    assert_eq!(ev.current_cursor(), 1);
}

#[derive(Debug, Clone)]
enum Op {
    Tick(f64),
    Submit(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0.0f64..3.0).prop_map(Op::Tick),
        (0usize..4).prop_map(Op::Submit),
    ]
}

proptest! {
    #[test]
    fn cursor_and_timer_invariants_hold(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let symbols = ["A", "B", "C"];
        let mut ev = evaluator(&symbols, 2.0);
        ev.start();

        for op in ops {
            match op {
                Op::Tick(dt) => {
                    ev.tick(dt);
                }
                Op::Submit(i) => {
                    // Index 3 is a symbol outside the alphabet.
                    let symbol = ["A", "B", "C", "Z"][i];
                    ev.submit(symbol);
                }
            }

            prop_assert!(ev.current_cursor() < symbols.len());
            prop_assert!(ev.remaining_window_time() >= 0.0);
            prop_assert!(ev.remaining_window_time() <= 2.0);
        }
    }
}
