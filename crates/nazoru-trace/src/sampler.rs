//! Path sampling: convert a path description into N evenly-parameterized
//! sample points and rescale them into a target canvas.
//!
//! Sampling walks the segments in order, densifying each cubic Bézier at
//! a fixed number of sub-steps, then resamples the raw point list **by
//! index**: `floor(t * (len - 1))` for `count` evenly stepped values of
//! t over [0, 1]. The result is *not* arclength-uniform — sample density
//! follows segment count and curvature granularity. Per-digit tracing
//! difficulty is calibrated against this behavior, so it is kept rather
//! than corrected.
//!
//! Malformed or empty path data degrades to `count` copies of the
//! author-space centre instead of failing; callers tolerate degenerate
//! all-identical sample sequences.

use crate::path::{PathDescription, PathSegment};
use crate::types::{CanvasSize, Point};

/// Sub-steps per cubic Bézier segment during densification
/// (11 points per curve including both endpoints).
pub const CUBIC_SUBSTEPS: u32 = 10;

/// Evaluate the cubic Bézier `B(t)` for control polygon `p0..p3`.
fn cubic_point(p0: Point, c1: Point, c2: Point, to: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let b0 = u * u * u;
    let b1 = 3.0 * u * u * t;
    let b2 = 3.0 * u * t * t;
    let b3 = t * t * t;
    Point::new(
        b3.mul_add(to.x, b2.mul_add(c2.x, b1.mul_add(c1.x, b0 * p0.x))),
        b3.mul_add(to.y, b2.mul_add(c2.y, b1.mul_add(c1.y, b0 * p0.y))),
    )
}

/// Walk the path segments, producing the raw densified point list in
/// author space.
///
/// Move and line segments contribute their endpoint; each cubic
/// contributes [`CUBIC_SUBSTEPS`] + 1 points including both endpoints.
/// Duplicate points at segment joins are expected and harmless.
#[must_use]
pub fn densify(path: &PathDescription) -> Vec<Point> {
    let mut points = Vec::new();
    let mut current = Point::new(0.0, 0.0);

    for segment in path.segments() {
        match *segment {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => {
                points.push(p);
                current = p;
            }
            PathSegment::CubicTo { c1, c2, to } => {
                for i in 0..=CUBIC_SUBSTEPS {
                    let t = f64::from(i) / f64::from(CUBIC_SUBSTEPS);
                    points.push(cubic_point(current, c1, c2, to, t));
                }
                current = to;
            }
        }
    }
    points
}

/// Sample `count` points along `path` in author space.
///
/// Always returns exactly `count` points (zero for `count == 0`), is
/// deterministic for identical inputs, and never fails: a path that
/// densifies to nothing yields `count` copies of the author-space
/// centre.
#[must_use]
pub fn sample(path: &PathDescription, count: usize, author: CanvasSize) -> Vec<Point> {
    resample(&densify(path), count, author)
}

/// Like [`sample`], but parses SVG path data first.
///
/// Unparseable data degrades to the centred fallback rather than
/// surfacing an error; the tracing surface shows nothing traceable but
/// never fails.
#[must_use]
pub fn sample_path_data(data: &str, count: usize, author: CanvasSize) -> Vec<Point> {
    PathDescription::parse(data).map_or_else(
        |_| resample(&[], count, author),
        |path| sample(&path, count, author),
    )
}

/// Index-based resampling of a raw densified point list.
fn resample(raw: &[Point], count: usize, author: CanvasSize) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }
    let Some(&first) = raw.first() else {
        return vec![author.center(); count];
    };
    if count == 1 {
        return vec![first];
    }

    let last = raw.len() - 1;
    (0..count)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / (count - 1) as f64;
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                clippy::cast_precision_loss
            )]
            let index = (t * last as f64).floor() as usize;
            raw[index.min(last)]
        })
        .collect()
}

/// Rescale author-space sample points into canvas pixel space.
///
/// Scale factors are independent per axis: `scale_x = inner_width /
/// author.width`, likewise for y, where the inner extent is the canvas
/// minus `padding_px` on each side. Stricter tracing targets use a
/// padding inset to keep the path clear of the canvas edges; pass 0.0
/// for none. Negative or non-finite padding is treated as 0.
///
/// Returns an empty vector when either space is unusable (zero-size or
/// detached surface) or the padding consumes the whole canvas — the
/// caller must treat that as "no traceable path" rather than divide by
/// zero.
#[must_use]
pub fn scale_to_canvas(
    samples: &[Point],
    author: CanvasSize,
    canvas: CanvasSize,
    padding_px: f64,
) -> Vec<Point> {
    if !author.is_usable() || !canvas.is_usable() {
        return Vec::new();
    }
    let padding = if padding_px.is_finite() && padding_px > 0.0 {
        padding_px
    } else {
        0.0
    };
    let inner = CanvasSize::new(
        2.0f64.mul_add(-padding, canvas.width),
        2.0f64.mul_add(-padding, canvas.height),
    );
    if !inner.is_usable() {
        return Vec::new();
    }

    let scale_x = inner.width / author.width;
    let scale_y = inner.height / author.height;
    samples
        .iter()
        .map(|p| {
            Point::new(
                p.x.mul_add(scale_x, padding),
                p.y.mul_add(scale_y, padding),
            )
        })
        .collect()
}
