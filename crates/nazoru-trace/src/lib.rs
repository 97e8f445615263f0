//! nazoru-trace: freehand path-tracing verification (sans-IO).
//!
//! Verifies that a continuous pointer/touch drag stays within tolerance
//! of a vector path (a digit outline), accumulating a coverage
//! percentage and declaring the path traced once a threshold is
//! crossed:
//!
//! path data -> sample points -> nearest-point queries ->
//! per-attempt session -> progress/completion notifications.
//!
//! This crate has **no I/O dependencies** — it consumes an in-process
//! position stream and returns structured outcomes. Rendering, device
//! event plumbing, and celebration belong to the host; the only hooks
//! offered are the [`InkSink`] collaborator and [`TraceObserver`]
//! callbacks.

pub mod input;
pub mod path;
pub mod proximity;
pub mod sampler;
pub mod session;
pub mod types;

pub use input::{InkSink, NullInk, PointerEvent, PointerPhase, SurfaceGeometry, TraceInputAdapter};
pub use path::{PathDescription, PathError, PathSegment};
pub use proximity::{Nearest, ProximityIndex};
pub use session::{
    BeginOutcome, ExtendOutcome, TraceConfig, TraceMode, TraceObserver, TraceSession,
};
pub use types::{CanvasSize, Point};

/// Sample a path-data string into canvas-space points per `config`.
///
/// Runs the whole sampling pipeline: parse (degrading to the centred
/// fallback on malformed data), sample `config.sample_count` points in
/// `author` space, rescale into `canvas` with `padding_px` inset per
/// edge. Returns an empty vector when the canvas geometry is unusable;
/// a session over empty samples accepts nothing and never completes.
#[must_use]
pub fn build_samples(
    path_data: &str,
    config: &TraceConfig,
    author: CanvasSize,
    canvas: CanvasSize,
    padding_px: f64,
) -> Vec<Point> {
    let author_samples = sampler::sample_path_data(path_data, config.sample_count, author);
    sampler::scale_to_canvas(&author_samples, author, canvas, padding_px)
}

/// Build a ready-to-trace session for a path-data string.
///
/// Convenience over [`build_samples`] + [`TraceSession::new`].
#[must_use]
pub fn build_session(
    path_data: &str,
    config: TraceConfig,
    author: CanvasSize,
    canvas: CanvasSize,
    padding_px: f64,
) -> TraceSession {
    let samples = build_samples(path_data, &config, author, canvas, padding_px);
    TraceSession::new(samples, config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const AUTHOR: CanvasSize = CanvasSize::new(100.0, 120.0);

    #[test]
    fn build_samples_produces_configured_count() {
        let samples = build_samples(
            "M 35 30 L 50 15 L 50 105",
            &TraceConfig::lenient(),
            AUTHOR,
            CanvasSize::new(300.0, 360.0),
            0.0,
        );
        assert_eq!(samples.len(), TraceConfig::DEFAULT_SAMPLE_COUNT);
    }

    #[test]
    fn build_samples_scales_into_canvas() {
        let samples = build_samples(
            "M 0 0 L 100 120",
            &TraceConfig::lenient(),
            AUTHOR,
            CanvasSize::new(200.0, 240.0),
            0.0,
        );
        assert_eq!(samples[0], Point::new(0.0, 0.0));
        assert_eq!(*samples.last().unwrap(), Point::new(200.0, 240.0));
    }

    #[test]
    fn build_samples_unusable_canvas_is_empty() {
        let samples = build_samples(
            "M 0 0 L 100 120",
            &TraceConfig::lenient(),
            AUTHOR,
            CanvasSize::new(0.0, 0.0),
            0.0,
        );
        assert!(samples.is_empty());
    }

    #[test]
    fn build_session_traces_end_to_end() {
        // Two raw points resample to two distinct samples at count 2.
        let config = TraceConfig {
            sample_count: 2,
            ..TraceConfig::lenient()
        };
        let mut session = build_session(
            "M 0 0 L 100 0",
            config,
            CanvasSize::new(100.0, 100.0),
            CanvasSize::new(100.0, 100.0),
            0.0,
        );
        session.begin(Point::new(0.0, 0.0));
        session.extend(Point::new(100.0, 0.0));
        assert!((session.coverage() - 100.0).abs() < 1e-9);
        assert!(session.is_completed());
    }
}
