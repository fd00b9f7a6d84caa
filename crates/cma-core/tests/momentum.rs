// File: crates/cma-core/tests/momentum.rs
// Purpose: First/second difference correctness, determinism and state isolation of the tracker.

use cma_core::{Momentum, MomentumState, Tracker};

fn run(seq: &[f64]) -> Vec<Momentum> {
    let mut state = MomentumState::default();
    seq.iter()
        .map(|&v| {
            let (next, m) = state.advance(v);
            state = next;
            m
        })
        .collect()
}

#[test]
fn differences_from_zero_state() {
    let out = run(&[10.0, 12.0, 11.0, 11.0]);
    let deltas: Vec<f64> = out.iter().map(|m| m.delta).collect();
    let gammas: Vec<f64> = out.iter().map(|m| m.gamma).collect();
    assert_eq!(deltas, vec![10.0, 2.0, -1.0, 0.0]);
    assert_eq!(gammas, vec![10.0, -8.0, -3.0, 1.0]);
}

#[test]
fn state_tracks_last_advance() {
    let (s1, m1) = MomentumState::default().advance(4.0);
    assert_eq!(s1.previous_average, 4.0);
    assert_eq!(s1.previous_delta, m1.delta);
    assert_eq!(s1.previous_gamma, m1.gamma);

    let (s2, m2) = s1.advance(7.0);
    assert_eq!(m2, Momentum { delta: 3.0, gamma: -1.0 });
    assert_eq!(s2.last(), m2);
    // the consumed copy is untouched
    assert_eq!(s1.previous_average, 4.0);
}

#[test]
fn identical_sequences_are_deterministic() {
    let seq: Vec<f64> = (0..500).map(|i| (i as f64 * 0.37).sin() * 50.0 + i as f64 * 0.1).collect();
    assert_eq!(run(&seq), run(&seq));
}

#[test]
fn trackers_do_not_share_state() {
    let mut a = Tracker::new();
    let mut b = Tracker::new();
    a.update(10.0).unwrap();
    a.update(15.0).unwrap();
    assert_eq!(b.state(), MomentumState::default());

    b.update(3.0).unwrap();
    assert_eq!(a.state().previous_average, 15.0);
    assert_eq!(a.state().previous_delta, 5.0);
    assert_eq!(b.state().previous_average, 3.0);
}

#[test]
fn tracker_rejects_non_finite_and_keeps_state() {
    let mut t = Tracker::new();
    t.update(10.0).unwrap();
    let before = t.state();
    assert!(t.update(f64::NAN).is_err());
    assert!(t.update(f64::INFINITY).is_err());
    assert_eq!(t.state(), before);

    let m = t.update(12.0).unwrap();
    assert_eq!(m, Momentum { delta: 2.0, gamma: -8.0 });
}
