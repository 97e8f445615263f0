//! SVG serializers for tracing guides and replay diagnostics.
//!
//! Uses the [`svg`] crate for document construction, XML escaping, and
//! path data formatting. These are pure functions with no I/O -- they
//! return a `String`.

use svg::Document;
use svg::node::Value;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path};

use nazoru_trace::{CanvasSize, PathDescription, PathError, Point};

/// Styling for the dotted guide path on a printable worksheet.
#[derive(Debug, Clone)]
pub struct GuideStyle {
    /// Stroke colour of the guide path.
    pub stroke: String,
    /// Stroke width in author-space units.
    pub stroke_width: f64,
    /// `stroke-dasharray` value producing the dotted look.
    pub dash: String,
    /// Guide opacity, 0 to 1.
    pub opacity: f64,
    /// Radius of the start-here marker circle.
    pub marker_radius: f64,
}

impl Default for GuideStyle {
    /// Matches the on-screen worksheet guide: a faint, round-capped
    /// dotted stroke with a start marker at the first path point.
    fn default() -> Self {
        Self {
            stroke: String::from("#9ca3af"),
            stroke_width: 10.0,
            dash: String::from("5 10"),
            opacity: 0.4,
            marker_radius: 6.0,
        }
    }
}

/// Serialize a digit guide into a printable SVG document.
///
/// The `viewBox` spans the author space so the document scales with
/// whatever size it is printed at. The guide is stroked dotted per
/// `style`, and a start marker circle is placed on the path's first
/// point.
///
/// # Errors
///
/// Returns [`PathError`] when `path_data` is not a valid guide path.
///
/// # Examples
///
/// ```
/// use nazoru_export::{GuideStyle, to_guide_svg};
/// use nazoru_trace::CanvasSize;
///
/// let author = CanvasSize::new(100.0, 120.0);
/// let svg = to_guide_svg("M 20 15 L 80 15 L 45 105", author, &GuideStyle::default())?;
/// assert!(svg.contains("stroke-dasharray"));
/// # Ok::<(), nazoru_trace::PathError>(())
/// ```
pub fn to_guide_svg(
    path_data: &str,
    author: CanvasSize,
    style: &GuideStyle,
) -> Result<String, PathError> {
    let path: PathDescription = path_data.parse()?;
    let start = path.start();

    let guide = Path::new()
        .set("d", path_data)
        .set("fill", "none")
        .set("stroke", style.stroke.as_str())
        .set("stroke-width", style.stroke_width)
        .set("stroke-dasharray", style.dash.as_str())
        .set("stroke-linecap", "round")
        .set("opacity", style.opacity);

    let marker = Circle::new()
        .set("cx", start.x)
        .set("cy", start.y)
        .set("r", style.marker_radius)
        .set("fill", style.stroke.as_str());

    let doc = Document::new()
        .set("viewBox", (0.0, 0.0, author.width, author.height))
        .add(guide)
        .add(marker);

    Ok(doc.to_string())
}

/// Serialize a replay diagnostic: guide samples as dots with the
/// accepted ink stroke drawn over them.
///
/// Samples and ink are both in canvas space, so the `viewBox` spans
/// `canvas`. Ink with fewer than 2 points is omitted (a single point
/// cannot form a visible line segment).
#[must_use]
pub fn to_overlay_svg(samples: &[Point], ink: &[Point], canvas: CanvasSize) -> String {
    let mut doc = Document::new().set("viewBox", (0.0, 0.0, canvas.width, canvas.height));

    for sample in samples {
        doc = doc.add(
            Circle::new()
                .set("cx", sample.x)
                .set("cy", sample.y)
                .set("r", 2.0)
                .set("fill", "#d1d5db"),
        );
    }

    if let Some(d) = ink_path_data(ink) {
        doc = doc.add(
            Path::new()
                .set("d", d)
                .set("fill", "none")
                .set("stroke", "#7c3aed")
                .set("stroke-width", 10.0)
                .set("stroke-linecap", "round")
                .set("stroke-linejoin", "round"),
        );
    }

    doc.to_string()
}

/// Build the `d` attribute for an ink stroke: `M` for the first point,
/// `L` for the rest. Returns `None` for fewer than 2 points.
fn ink_path_data(ink: &[Point]) -> Option<String> {
    let (first, rest) = ink.split_first()?;
    if rest.is_empty() {
        return None;
    }
    let mut data = Data::new().move_to((first.x, first.y));
    for p in rest {
        data = data.line_to((p.x, p.y));
    }
    Some(String::from(Value::from(data)))
}

// --- tests ---
