//! SVG path construction for a smooth line series and its area fill.
//!
//! The line uses a natural cubic spline through the scaled points, the
//! same interpolation charting libraries call a "natural" curve. Control
//! points are solved per axis with the Thomas algorithm.

/// Build the `d` attribute for the smooth line through `points`
/// (already in pixel coordinates).
///
/// No points yield an empty path, a single point yields a bare move,
/// two points yield a straight segment.
pub fn line_path(points: &[(f64, f64)]) -> String {
    match points {
        [] => String::new(),
        [only] => format!("M{},{}", fmt(only.0), fmt(only.1)),
        [a, b] => format!("M{},{}L{},{}", fmt(a.0), fmt(a.1), fmt(b.0), fmt(b.1)),
        _ => {
            let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
            let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
            let (cx1, cx2) = control_points(&xs);
            let (cy1, cy2) = control_points(&ys);

            let mut d = format!("M{},{}", fmt(points[0].0), fmt(points[0].1));
            for i in 0..points.len() - 1 {
                d.push_str(&format!(
                    "C{},{} {},{} {},{}",
                    fmt(cx1[i]),
                    fmt(cy1[i]),
                    fmt(cx2[i]),
                    fmt(cy2[i]),
                    fmt(points[i + 1].0),
                    fmt(points[i + 1].1)
                ));
            }
            d
        }
    }
}

/// Build the closed area path under the line, dropping to `baseline`
/// (the pixel y of the chart floor) at both ends.
pub fn area_path(points: &[(f64, f64)], baseline: f64) -> String {
    if points.is_empty() {
        return String::new();
    }
    let first = points[0];
    let last = points[points.len() - 1];
    format!(
        "{}L{},{}L{},{}Z",
        line_path(points),
        fmt(last.0),
        fmt(baseline),
        fmt(first.0),
        fmt(baseline)
    )
}

/// Bezier control points of the natural cubic spline through `values`,
/// one (first, second) pair per segment. Requires `values.len() >= 3`.
fn control_points(values: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = values.len() - 1;
    let mut a = vec![0.0; n];
    let mut b = vec![0.0; n];
    let mut r = vec![0.0; n];

    a[0] = 0.0;
    b[0] = 2.0;
    r[0] = values[0] + 2.0 * values[1];
    for i in 1..n - 1 {
        a[i] = 1.0;
        b[i] = 4.0;
        r[i] = 4.0 * values[i] + 2.0 * values[i + 1];
    }
    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    r[n - 1] = 8.0 * values[n - 1] + values[n];

    // Forward elimination; the superdiagonal is 1 everywhere it is used.
    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m;
        r[i] -= m * r[i - 1];
    }

    let mut p1 = vec![0.0; n];
    p1[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        p1[i] = (r[i] - p1[i + 1]) / b[i];
    }

    let mut p2 = vec![0.0; n];
    p2[n - 1] = (values[n] + p1[n - 1]) / 2.0;
    for i in 0..n - 1 {
        p2[i] = 2.0 * values[i + 1] - p1[i + 1];
    }

    (p1, p2)
}

fn fmt(v: f64) -> String {
    // Two decimals is below one device pixel on a 300x100 surface
    let rounded = (v * 100.0).round() / 100.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_yields_empty_paths() {
        assert_eq!(line_path(&[]), "");
        assert_eq!(area_path(&[], 25.0), "");
    }

    #[test]
    fn single_point_yields_a_bare_move() {
        assert_eq!(line_path(&[(10.0, 20.0)]), "M10,20");
    }

    #[test]
    fn two_points_yield_a_straight_segment() {
        assert_eq!(line_path(&[(0.0, 25.0), (220.0, 0.0)]), "M0,25L220,0");
    }

    #[test]
    fn spline_interpolates_every_input_point() {
        let points = [(0.0, 10.0), (50.0, 2.0), (100.0, 18.0), (150.0, 5.0)];
        let d = line_path(&points);
        assert!(d.starts_with("M0,10"));
        // Each segment ends exactly on the next input point
        assert_eq!(d.matches('C').count(), 3);
        assert!(d.contains("50,2"));
        assert!(d.contains("100,18"));
        assert!(d.ends_with("150,5"));
    }

    #[test]
    fn collinear_points_produce_collinear_controls() {
        // A straight ramp must stay straight through the spline
        let (p1, p2) = control_points(&[0.0, 1.0, 2.0, 3.0]);
        for (i, (c1, c2)) in p1.iter().zip(p2.iter()).enumerate() {
            let lo = i as f64;
            let hi = lo + 1.0;
            assert!(*c1 > lo && *c1 < hi, "p1[{}] = {}", i, c1);
            assert!(*c2 > lo && *c2 < hi, "p2[{}] = {}", i, c2);
            assert!((c1 - (lo + 1.0 / 3.0)).abs() < 1e-9);
            assert!((c2 - (lo + 2.0 / 3.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn flat_series_has_no_nan_coordinates() {
        let points = [(0.0, 12.5), (110.0, 12.5), (220.0, 12.5)];
        let d = line_path(&points);
        assert!(!d.contains("NaN"));
        assert!(d.ends_with("220,12.5"));
    }

    #[test]
    fn area_path_closes_to_the_baseline() {
        let points = [(0.0, 5.0), (220.0, 10.0)];
        let d = area_path(&points, 25.0);
        assert_eq!(d, "M0,5L220,10L220,25L0,25Z");
    }
}
