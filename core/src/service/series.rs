/// Trailing mean over `window` points. The first `window - 1` entries average
/// whatever points exist so far, so the output has the same length as `values`.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    let mut averages = Vec::with_capacity(values.len());
    let mut running = 0.0;

    for (i, value) in values.iter().enumerate() {
        running += value;
        if i >= window {
            running -= values[i - window];
        }
        let span = (i + 1).min(window);
        averages.push(running / span as f64);
    }

    averages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_then_rolling_window() {
        let values = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0];
        let avg = moving_average(&values, 7);

        assert_eq!(avg.len(), 8);
        assert_eq!(avg[0], 10.0);
        assert_eq!(avg[1], 15.0);
        assert_eq!(avg[6], 40.0); // (10..=70) / 7
        assert_eq!(avg[7], 50.0); // (20..=80) / 7
    }

    #[test]
    fn test_window_of_one_is_identity() {
        let values = [3.0, 1.0, 4.0];
        assert_eq!(moving_average(&values, 1), vec![3.0, 1.0, 4.0]);
    }

    #[test]
    fn test_empty_and_zero_window() {
        assert!(moving_average(&[], 7).is_empty());
        assert_eq!(moving_average(&[2.0, 4.0], 0), vec![2.0, 4.0]);
    }
}
