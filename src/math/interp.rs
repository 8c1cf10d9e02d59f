//! One-dimensional linear interpolation with boundary clamping.

/// Resamples `(xs, ys)` at every point of `grid` by piecewise-linear
/// interpolation.
///
/// `xs` must be sorted ascending and pair one-to-one with `ys`.  Query points
/// outside `[xs[0], xs[last]]` clamp to the boundary value — no extrapolation.
/// A single-knot input yields that value across the whole grid.
///
/// # Panics
/// Panics if `xs` is empty or `xs.len() != ys.len()`; callers validate their
/// input files before reaching this point.
pub fn interp_linear(grid: &[f64], xs: &[f64], ys: &[f64]) -> Vec<f64> {
    assert!(!xs.is_empty(), "interp_linear needs at least one knot");
    assert_eq!(xs.len(), ys.len(), "knot count mismatch");

    grid.iter().map(|&q| interp_one(q, xs, ys)).collect()
}

fn interp_one(q: f64, xs: &[f64], ys: &[f64]) -> f64 {
    let last = xs.len() - 1;
    if q <= xs[0] {
        return ys[0];
    }
    if q >= xs[last] {
        return ys[last];
    }

    // First knot strictly greater than q; q is interior so 1 <= hi <= last.
    let hi = xs.partition_point(|&x| x <= q);
    let lo = hi - 1;

    let dx = xs[hi] - xs[lo];
    if dx == 0.0 {
        return ys[hi];
    }
    let t = (q - xs[lo]) / dx;
    ys[lo] + t * (ys[hi] - ys[lo])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_midpoints() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [0.0, 10.0, 0.0];
        let out = interp_linear(&[0.5, 1.5], &xs, &ys);
        assert_eq!(out, vec![5.0, 5.0]);
    }

    #[test]
    fn clamps_outside_measured_range() {
        let xs = [-1.0, 1.0];
        let ys = [-3.0, 3.0];
        let out = interp_linear(&[-5.0, 5.0], &xs, &ys);
        assert_eq!(out, vec![-3.0, 3.0]);
    }

    #[test]
    fn single_knot_gives_constant() {
        let out = interp_linear(&[-2.0, 0.0, 2.0], &[0.5], &[7.0]);
        assert_eq!(out, vec![7.0, 7.0, 7.0]);
    }

    #[test]
    fn hits_knots_exactly() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [4.0, 5.0, 6.0];
        let out = interp_linear(&[0.0, 1.0, 2.0], &xs, &ys);
        assert_eq!(out, vec![4.0, 5.0, 6.0]);
    }
}
