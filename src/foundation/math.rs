use crate::animation::ease::Ease;

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Piecewise-linear map of `x` through control points `xs -> ys`, clamped at both ends.
///
/// `xs` must be sorted ascending. Each segment's local progress goes through `ease` before
/// interpolating. Total over its inputs: empty or mismatched tables, NaN inputs and zero-width
/// segments all resolve to a defined value instead of panicking.
pub(crate) fn interpolate_clamped(x: f64, xs: &[f64], ys: &[f64], ease: Ease) -> f64 {
    let n = xs.len().min(ys.len());
    if n == 0 {
        return 0.0;
    }
    if n == 1 || x.is_nan() || x <= xs[0] {
        return ys[0];
    }
    if x >= xs[n - 1] {
        return ys[n - 1];
    }

    let idx = xs[..n].partition_point(|&k| k <= x);
    let (x0, x1) = (xs[idx - 1], xs[idx]);
    let (y0, y1) = (ys[idx - 1], ys[idx]);
    let width = x1 - x0;
    if width <= 0.0 {
        return y1;
    }
    lerp(y0, y1, ease.apply((x - x0) / width))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
