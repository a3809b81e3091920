use std::time::Duration;

use crate::{FixedJitter, Jitter, NoJitter, RandomJitter};

#[test]
fn random_jitter_stays_below_bound() {
    let jitter = RandomJitter::from_millis(5);
    for _ in 0..200 {
        assert!(jitter.delay() < Duration::from_millis(5));
    }
}

#[test]
fn zero_bound_means_no_delay() {
    assert_eq!(RandomJitter::from_millis(0).delay(), Duration::ZERO);
    assert_eq!(NoJitter.delay(), Duration::ZERO);
}

#[test]
fn default_random_jitter_is_200ms() {
    assert_eq!(RandomJitter::default().max(), Duration::from_millis(200));
    assert_eq!(FixedJitter(Duration::from_millis(7)).delay(), Duration::from_millis(7));
}
