//! Pointer/touch event translation for a tracing surface.
//!
//! The adapter sits between raw device events and a [`TraceSession`]:
//! it subtracts the surface's bounding-rect offset, guards against
//! unusable geometry, drops overlapping drags, and drives visual ink
//! feedback through an [`InkSink`] collaborator. Ink is presentation
//! only — it never feeds back into tracing decisions.

use serde::{Deserialize, Serialize};

use crate::session::{BeginOutcome, ExtendOutcome, TraceSession};
use crate::types::{CanvasSize, Point};

/// Which part of a drag a raw event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    /// Pointer-down / first touch contact.
    Start,
    /// Pointer-move / touch-move.
    Move,
    /// Pointer-up / touch-end / pointer-leave.
    End,
}

/// One raw pointer event in device (client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Horizontal device coordinate.
    pub x: f64,
    /// Vertical device coordinate.
    pub y: f64,
    /// Drag phase.
    pub phase: PointerPhase,
}

/// Position and size of the tracing surface within device space.
///
/// `left`/`top` are the surface's bounding-rect offset; events are
/// translated into surface-local coordinates by subtracting them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceGeometry {
    /// Device x of the surface's left edge.
    pub left: f64,
    /// Device y of the surface's top edge.
    pub top: f64,
    /// Surface extent in device pixels.
    pub size: CanvasSize,
}

impl SurfaceGeometry {
    /// A surface whose local space coincides with device space.
    #[must_use]
    pub const fn at_origin(size: CanvasSize) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            size,
        }
    }

    /// Translate a device position into surface-local coordinates.
    #[must_use]
    pub fn to_local(&self, x: f64, y: f64) -> Point {
        Point::new(x - self.left, y - self.top)
    }
}

/// Receives ink-stroke feedback as a drag progresses.
///
/// Implementations render the stroke however the host displays it
/// (canvas 2D, retained-mode scene, nothing at all). In lenient mode
/// every active move receives ink; in strict mode only accepted moves
/// do, and the pen lifts when a stroke is abandoned.
pub trait InkSink {
    /// A stroke starts at `at` (surface-local pixels).
    fn begin_stroke(&mut self, at: Point) {
        let _ = at;
    }

    /// The stroke continues to `to`.
    fn line_to(&mut self, to: Point) {
        let _ = to;
    }

    /// The stroke ended (pointer up or strict abandonment).
    fn end_stroke(&mut self) {}
}

/// An [`InkSink`] that draws nothing. Useful for headless replay.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullInk;

impl InkSink for NullInk {}

/// Translates raw pointer events into session calls and ink feedback.
///
/// At most one drag is supported at a time: a `Start` arriving while a
/// drag is in progress is ignored, which collapses multi-touch down to
/// the first contact. An `End` with no drag in progress is tolerated
/// as a no-op. When the surface geometry is unusable (zero-size or
/// detached), every event is a no-op.
pub struct TraceInputAdapter<S: InkSink> {
    session: TraceSession,
    geometry: SurfaceGeometry,
    ink: S,
}

impl<S: InkSink> TraceInputAdapter<S> {
    /// Wrap a session and ink sink for a surface at `geometry`.
    #[must_use]
    pub const fn new(session: TraceSession, geometry: SurfaceGeometry, ink: S) -> Self {
        Self {
            session,
            geometry,
            ink,
        }
    }

    /// Read access to the underlying session.
    #[must_use]
    pub const fn session(&self) -> &TraceSession {
        &self.session
    }

    /// Mutable access to the underlying session (e.g. for `reset`).
    pub const fn session_mut(&mut self) -> &mut TraceSession {
        &mut self.session
    }

    /// Update the surface geometry after a layout change.
    pub const fn set_geometry(&mut self, geometry: SurfaceGeometry) {
        self.geometry = geometry;
    }

    /// Tear the adapter apart, recovering the session and ink sink.
    #[must_use]
    pub fn into_parts(self) -> (TraceSession, S) {
        (self.session, self.ink)
    }

    /// Process one raw pointer event.
    pub fn handle(&mut self, event: PointerEvent) {
        if !self.geometry.size.is_usable() {
            return;
        }
        let local = self.geometry.to_local(event.x, event.y);

        match event.phase {
            PointerPhase::Start => self.handle_start(local),
            PointerPhase::Move => self.handle_move(local),
            PointerPhase::End => self.handle_end(),
        }
    }

    fn handle_start(&mut self, local: Point) {
        if self.session.is_active() {
            // Second contact while dragging: ignore it.
            return;
        }
        if let BeginOutcome::Started { .. } = self.session.begin(local) {
            self.ink.begin_stroke(local);
        }
    }

    fn handle_move(&mut self, local: Point) {
        match self.session.extend(local) {
            ExtendOutcome::Ignored => {}
            // Lenient mode inks off-path movement too; only coverage
            // is gated by tolerance.
            ExtendOutcome::Accepted { .. } | ExtendOutcome::OffPath => {
                self.ink.line_to(local);
            }
            ExtendOutcome::Abandoned => self.ink.end_stroke(),
        }
    }

    fn handle_end(&mut self) {
        if self.session.is_active() {
            self.session.end();
            self.ink.end_stroke();
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::session::TraceConfig;

    /// Records stroke commands for assertions.
    #[derive(Debug, Default)]
    struct InkLog {
        commands: Vec<String>,
    }

    impl InkSink for InkLog {
        fn begin_stroke(&mut self, at: Point) {
            self.commands.push(format!("begin {} {}", at.x, at.y));
        }

        fn line_to(&mut self, to: Point) {
            self.commands.push(format!("line {} {}", to.x, to.y));
        }

        fn end_stroke(&mut self) {
            self.commands.push("end".to_owned());
        }
    }

    fn line_samples(n: usize) -> Vec<Point> {
        #[allow(clippy::cast_precision_loss)]
        (0..n).map(|i| Point::new(i as f64 * 10.0, 0.0)).collect()
    }

    fn adapter(config: TraceConfig) -> TraceInputAdapter<InkLog> {
        let session = TraceSession::new(line_samples(6), config);
        let geometry = SurfaceGeometry {
            left: 100.0,
            top: 50.0,
            size: CanvasSize::new(300.0, 300.0),
        };
        TraceInputAdapter::new(session, geometry, InkLog::default())
    }

    fn event(x: f64, y: f64, phase: PointerPhase) -> PointerEvent {
        PointerEvent { x, y, phase }
    }

    #[test]
    fn device_coordinates_are_translated_to_local() {
        let mut adapter = adapter(TraceConfig::lenient());
        // Device (100, 50) is local (0, 0) — the first sample.
        adapter.handle(event(100.0, 50.0, PointerPhase::Start));
        assert_eq!(adapter.session().visited_count(), 1);
        assert_eq!(adapter.ink.commands, vec!["begin 0 0"]);
    }

    #[test]
    fn full_drag_produces_stroke_and_coverage() {
        let mut adapter = adapter(TraceConfig::lenient());
        adapter.handle(event(100.0, 50.0, PointerPhase::Start));
        adapter.handle(event(110.0, 50.0, PointerPhase::Move));
        adapter.handle(event(120.0, 50.0, PointerPhase::Move));
        adapter.handle(event(120.0, 50.0, PointerPhase::End));

        assert_eq!(adapter.session().visited_count(), 3);
        assert!(!adapter.session().is_active());
        assert_eq!(
            adapter.ink.commands,
            vec!["begin 0 0", "line 10 0", "line 20 0", "end"],
        );
    }

    #[test]
    fn lenient_inks_off_path_movement() {
        let mut adapter = adapter(TraceConfig::lenient());
        adapter.handle(event(100.0, 50.0, PointerPhase::Start));
        adapter.handle(event(100.0, 250.0, PointerPhase::Move));
        assert_eq!(adapter.ink.commands, vec!["begin 0 0", "line 0 200"]);
        assert!(adapter.session().is_active());
    }

    #[test]
    fn strict_abandonment_lifts_the_pen() {
        let mut adapter = adapter(TraceConfig::strict());
        adapter.handle(event(100.0, 50.0, PointerPhase::Start));
        adapter.handle(event(100.0, 250.0, PointerPhase::Move));
        assert_eq!(adapter.ink.commands, vec!["begin 0 0", "end"]);
        assert!(!adapter.session().is_active());

        // Moves after abandonment are dead until a new start.
        adapter.handle(event(110.0, 50.0, PointerPhase::Move));
        assert_eq!(adapter.ink.commands.len(), 2);
    }

    #[test]
    fn strict_rejected_start_draws_nothing() {
        let mut adapter = adapter(TraceConfig::strict());
        adapter.handle(event(100.0, 250.0, PointerPhase::Start));
        assert!(adapter.ink.commands.is_empty());
        assert!(!adapter.session().is_active());
    }

    #[test]
    fn second_start_during_drag_is_ignored() {
        let mut adapter = adapter(TraceConfig::lenient());
        adapter.handle(event(100.0, 50.0, PointerPhase::Start));
        adapter.handle(event(130.0, 50.0, PointerPhase::Start));
        // Only the first contact begins a stroke.
        assert_eq!(adapter.ink.commands, vec!["begin 0 0"]);
    }

    #[test]
    fn end_without_start_is_a_no_op() {
        let mut adapter = adapter(TraceConfig::lenient());
        adapter.handle(event(100.0, 50.0, PointerPhase::End));
        assert!(adapter.ink.commands.is_empty());
    }

    #[test]
    fn unusable_geometry_no_ops_everything() {
        let session = TraceSession::new(line_samples(6), TraceConfig::lenient());
        let geometry = SurfaceGeometry::at_origin(CanvasSize::new(0.0, 0.0));
        let mut adapter = TraceInputAdapter::new(session, geometry, InkLog::default());

        adapter.handle(event(0.0, 0.0, PointerPhase::Start));
        adapter.handle(event(10.0, 0.0, PointerPhase::Move));
        adapter.handle(event(10.0, 0.0, PointerPhase::End));
        assert!(adapter.ink.commands.is_empty());
        assert_eq!(adapter.session().visited_count(), 0);
    }

    #[test]
    fn geometry_update_takes_effect() {
        let mut adapter = adapter(TraceConfig::lenient());
        adapter.set_geometry(SurfaceGeometry::at_origin(CanvasSize::new(300.0, 300.0)));
        adapter.handle(event(0.0, 0.0, PointerPhase::Start));
        assert_eq!(adapter.session().visited_count(), 1);
    }

    #[test]
    fn pointer_event_serde_round_trip() {
        let event = event(12.5, 7.0, PointerPhase::Move);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"move\""));
        let deserialized: PointerEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
