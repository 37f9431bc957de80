// tests/debounce.rs
//
// Deterministic timing via submit_at/poll_at; no sleeping.

use std::time::{Duration, Instant};

use rankview::view::Debouncer;

const DELAY: Duration = Duration::from_millis(300);

#[test]
fn burst_collapses_to_last_value() {
    let t0 = Instant::now();
    let mut d: Debouncer<String> = Debouncer::new(DELAY);

    // Three keystrokes, 100 ms apart — each re-arms the window.
    d.submit_at("a".into(), t0);
    d.submit_at("ab".into(), t0 + Duration::from_millis(100));
    d.submit_at("abc".into(), t0 + Duration::from_millis(200));

    // Not yet due relative to the *last* submit.
    assert_eq!(d.poll_at(t0 + Duration::from_millis(400)), None);

    // Due: exactly one delivery, carrying the last value.
    assert_eq!(
        d.poll_at(t0 + Duration::from_millis(500)),
        Some("abc".into())
    );
    assert_eq!(d.poll_at(t0 + Duration::from_millis(600)), None);
}

#[test]
fn delivery_on_exact_deadline() {
    let t0 = Instant::now();
    let mut d: Debouncer<u32> = Debouncer::new(DELAY);
    d.submit_at(7, t0);
    assert_eq!(d.poll_at(t0 + DELAY), Some(7));
}

#[test]
fn cancel_drops_pending() {
    let t0 = Instant::now();
    let mut d: Debouncer<u32> = Debouncer::new(DELAY);
    d.submit_at(1, t0);
    assert!(d.is_pending());
    d.cancel();
    assert!(!d.is_pending());
    assert_eq!(d.poll_at(t0 + Duration::from_secs(1)), None);
}

#[test]
fn time_left_counts_down_to_zero() {
    let t0 = Instant::now();
    let mut d: Debouncer<u32> = Debouncer::new(DELAY);
    assert_eq!(d.time_left(t0), None);

    d.submit_at(1, t0);
    assert_eq!(d.time_left(t0), Some(DELAY));
    assert_eq!(
        d.time_left(t0 + Duration::from_millis(100)),
        Some(Duration::from_millis(200))
    );
    // Past due: saturates at zero rather than underflowing.
    assert_eq!(
        d.time_left(t0 + Duration::from_millis(400)),
        Some(Duration::ZERO)
    );
}
