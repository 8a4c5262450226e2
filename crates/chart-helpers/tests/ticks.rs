// File: crates/chart-helpers/tests/ticks.rs
// Purpose: Discrete tick selection edge cases and spacing.

use chart_helpers::{discrete_tick_indices, discrete_ticks};

fn times(n: usize) -> Vec<usize> { (0..n).collect() }

#[test]
fn ticks_over_a_range_of_counts() {
    let values = times(100);
    assert_eq!(discrete_ticks(&values, 1), vec![0]);
    assert_eq!(discrete_ticks(&values, 2), vec![0, 99]);
    assert_eq!(discrete_ticks(&values, 3), vec![0, 50, 99]);
    assert_eq!(discrete_ticks(&values, 4), vec![0, 33, 66, 99]);
}

#[test]
fn count_too_big_returns_plain_input() {
    assert_eq!(discrete_ticks(&[1, 2, 3], 3), vec![1, 2, 3]);
    assert_eq!(discrete_ticks(&[1, 2, 3], 4), vec![1, 2, 3]);
}

#[test]
fn empty_input() {
    let empty: [f64; 0] = [];
    assert!(discrete_ticks(&empty, 100).is_empty());
    assert!(discrete_tick_indices(0, 5).is_empty());
}

#[test]
fn works_on_labels() {
    let labels = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    assert_eq!(discrete_ticks(&labels, 3), vec!["Mon", "Thu", "Sun"]);
}
