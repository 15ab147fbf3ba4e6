//! Piecewise-linear interpolation over scattered samples

/// Evaluate y at `x` from `(xs[i], ys[i])` samples.
///
/// Non-finite pairs are dropped and the rest sorted by x. Beyond either end
/// the line through the two outermost samples on that side is extended. A
/// single sample is returned flat; no samples gives `None`.
pub fn interpolate(xs: &[f64], ys: &[f64], x: f64) -> Option<f64> {
    let mut pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .map(|(&px, &py)| (px, py))
        .filter(|(px, py)| px.is_finite() && py.is_finite())
        .collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

    let n = pairs.len();
    match n {
        0 => return None,
        1 => return Some(pairs[0].1),
        _ => {}
    }

    if x <= pairs[0].0 {
        return Some(along(pairs[0], pairs[1], pairs[0], x));
    }
    if x >= pairs[n - 1].0 {
        return Some(along(pairs[n - 2], pairs[n - 1], pairs[n - 1], x));
    }
    pairs
        .windows(2)
        .find(|w| x >= w[0].0 && x <= w[1].0)
        .map(|w| along(w[0], w[1], w[0], x))
}

/// y at `x` on the line through `p0`/`p1`, anchored at `anchor`
fn along(p0: (f64, f64), p1: (f64, f64), anchor: (f64, f64), x: f64) -> f64 {
    let slope = (p1.1 - p0.1) / (p1.0 - p0.0);
    anchor.1 + slope * (x - anchor.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_middle() {
        let xs = [0.0, 10.0, 20.0];
        let ys = [1.0, 2.0, 3.0];
        assert_eq!(interpolate(&xs, &ys, 10.0), Some(2.0));
        assert_eq!(interpolate(&xs, &ys, 15.0), Some(2.5));
    }

    #[test]
    fn test_interpolate_unsorted_input() {
        let xs = [20.0, 0.0, 10.0];
        let ys = [3.0, 1.0, 2.0];
        assert_eq!(interpolate(&xs, &ys, 5.0), Some(1.5));
    }

    #[test]
    fn test_extrapolates_below_and_above() {
        let xs = [0.0, 10.0, 20.0, 30.0];
        let ys = [0.0, 10.0, 20.0, 50.0];
        // low side uses slope 1, high side slope 3
        assert_eq!(interpolate(&xs, &ys, -5.0), Some(-5.0));
        assert_eq!(interpolate(&xs, &ys, 40.0), Some(80.0));
    }

    #[test]
    fn test_non_finite_pairs_dropped() {
        let xs = [f64::NAN, 0.0, 10.0, 5.0];
        let ys = [100.0, 0.0, 10.0, f64::INFINITY];
        assert_eq!(interpolate(&xs, &ys, 5.0), Some(5.0));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(interpolate(&[], &[], 1.0), None);
        assert_eq!(interpolate(&[f64::NAN], &[1.0], 1.0), None);
        assert_eq!(interpolate(&[3.0], &[7.0], -100.0), Some(7.0));
        assert_eq!(interpolate(&[3.0], &[7.0], 100.0), Some(7.0));
    }

    #[test]
    fn test_mismatched_lengths_use_shorter() {
        assert_eq!(interpolate(&[0.0, 1.0, 2.0], &[0.0, 2.0], 0.5), Some(1.0));
    }
}
