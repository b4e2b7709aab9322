use coilgen_core::Point2D;

/// Relative tolerance below which a chord's run or rise counts as zero.
const SLOPE_EPS: f64 = 1e-9;

/// Relative tolerance below which three points count as collinear.
const COLLINEAR_EPS: f64 = 1e-12;

/// Outcome of fitting a circle through three sample points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArcFit {
    /// Circle through all three points. `sweep_rad` is the signed angle from the first point to
    /// the last, measured around `center`, in `(-2pi, 2pi)`.
    Circle { center: Point2D, sweep_rad: f64 },
    /// The points lie on a line; no finite circle passes through them.
    Collinear,
}

/// Fit the unique circle through `a`, `b` and `c`, with `b` between the other two.
///
/// The center is the intersection of the perpendicular bisectors of `ab` and `bc`. The slope form
/// `y = m*x + k` is used while both chords have a usable slope; a vertical or horizontal chord
/// (undefined or zero slope) goes through the same bisector system solved by Cramer's rule.
pub fn fit_arc(a: Point2D, b: Point2D, c: Point2D) -> ArcFit {
    let center = if chord_has_slope(a, b) && chord_has_slope(b, c) {
        bisector_slope_center(a, b, c).or_else(|| bisector_linear_center(a, b, c))
    } else {
        bisector_linear_center(a, b, c)
    };

    match center {
        Some(center) if center.is_finite() => {
            let start = (a.y - center.y).atan2(a.x - center.x);
            let end = (c.y - center.y).atan2(c.x - center.x);
            ArcFit::Circle {
                center,
                sweep_rad: end - start,
            }
        }
        _ => ArcFit::Collinear,
    }
}

fn chord_has_slope(p: Point2D, q: Point2D) -> bool {
    let len = p.distance_to(&q);
    let tol = SLOPE_EPS * len.max(f64::MIN_POSITIVE);
    (p.x - q.x).abs() > tol && (p.y - q.y).abs() > tol
}

fn bisector_slope_center(a: Point2D, b: Point2D, c: Point2D) -> Option<Point2D> {
    let slope_ab = (a.y - b.y) / (a.x - b.x);
    let slope_bc = (b.y - c.y) / (b.x - c.x);
    let perp_ab = -1.0 / slope_ab;
    let perp_bc = -1.0 / slope_bc;

    let denom = perp_bc - perp_ab;
    if denom.abs() <= SLOPE_EPS * perp_ab.abs().max(perp_bc.abs()).max(1.0) {
        return None;
    }

    let mid_ab = a.midpoint(&b);
    let mid_bc = b.midpoint(&c);
    let k_ab = mid_ab.y - perp_ab * mid_ab.x;
    let k_bc = mid_bc.y - perp_bc * mid_bc.x;

    let x = (k_ab - k_bc) / denom;
    let y = perp_ab * x + k_ab;
    Some(Point2D::new(x, y))
}

fn bisector_linear_center(a: Point2D, b: Point2D, c: Point2D) -> Option<Point2D> {
    // Work relative to `a` to keep the right-hand side small.
    let (bx, by) = (b.x - a.x, b.y - a.y);
    let (cx, cy) = (c.x - a.x, c.y - a.y);

    // Bisector of a-b: bx*x + by*y = |b|^2 / 2, bisector of a-c likewise.
    let det = bx * cy - cx * by;
    let scale = (bx * bx + by * by) * (cx * cx + cy * cy);
    if det.abs() <= COLLINEAR_EPS * scale.sqrt().max(f64::MIN_POSITIVE) {
        return None;
    }

    let rb = (bx * bx + by * by) / 2.0;
    let rc = (cx * cx + cy * cy) / 2.0;
    let x = (rb * cy - rc * by) / det;
    let y = (bx * rc - cx * rb) / det;
    Some(Point2D::new(a.x + x, a.y + y))
}
