// File: crates/chart-helpers/src/ticks.rs
// Summary: Evenly spaced tick selection over an ordered sequence of values.

/// Indices of `count` evenly spaced ticks over a sequence of length `n`.
///
/// Tick `i` sits at `round(i * (n - 1) / (count - 1))`, so the first and last
/// index are both included once `count >= 2`. When `count >= n` every index is
/// returned; `count == 1` yields only index 0.
pub fn discrete_tick_indices(n: usize, count: usize) -> Vec<usize> {
    if n == 0 || count == 0 {
        return Vec::new();
    }
    if count >= n {
        return (0..n).collect();
    }
    if count == 1 {
        return vec![0];
    }
    let step = (n - 1) as f64 / (count - 1) as f64;
    (0..count)
        .map(|i| ((i as f64 * step).round() as usize).min(n - 1))
        .collect()
}

/// Pick `count` evenly spaced values from `values` for axis labels.
///
/// Returns `values` unchanged when `count` is at least its length, and an
/// empty vector for empty input.
pub fn discrete_ticks<T: Clone>(values: &[T], count: usize) -> Vec<T> {
    if count >= values.len() {
        tracing::trace!(len = values.len(), count, "discrete_ticks: passthrough");
        return values.to_vec();
    }
    discrete_tick_indices(values.len(), count)
        .into_iter()
        .map(|i| values[i].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_round_half_up() {
        // 99 / 2 = 49.5
        assert_eq!(discrete_tick_indices(100, 3), vec![0, 50, 99]);
    }

    #[test]
    fn zero_count() {
        assert!(discrete_tick_indices(10, 0).is_empty());
        assert!(discrete_ticks(&[1, 2, 3], 0).is_empty());
    }
}
