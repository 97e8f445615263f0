//! Per-attempt trace tracking.
//!
//! A [`TraceSession`] consumes a stream of pointer positions in canvas
//! pixel space, decides acceptance against the configured policy, marks
//! which sample indices a drag has reached within tolerance, and reports
//! coverage as a percentage of distinct visited samples. Completion is
//! one-shot and monotonic: once coverage crosses the threshold the
//! session stays completed until [`TraceSession::reset`].
//!
//! The two tracing surfaces share this type behind [`TraceMode`]: the
//! free-draw canvas always lets a stroke start and keeps it alive
//! off-path (encouragement for first exposure), while the worksheet
//! tracer requires starting on the path and ends the stroke the moment
//! it drifts off (teaches staying on the line).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::proximity::ProximityIndex;
use crate::types::Point;

/// Acceptance policy for a tracing attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceMode {
    /// Strokes start anywhere and survive drifting off the path; only
    /// on-path positions count toward coverage.
    Lenient,
    /// Strokes must start on the path and are abandoned as soon as a
    /// position falls outside tolerance.
    Strict,
}

/// Session configuration.
///
/// Tolerance and threshold are configuration, not constants: callers
/// calibrate them for canvas size and DPI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Acceptance policy.
    pub mode: TraceMode,
    /// Maximum distance in device pixels from the nearest sample for a
    /// position to count as on-path.
    pub tolerance_px: f64,
    /// Coverage percentage (0–100) at which the session completes.
    pub completion_threshold: f64,
    /// How many sample points to generate when building a target for
    /// this session.
    pub sample_count: usize,
}

impl TraceConfig {
    /// Free-draw tolerance in device pixels.
    pub const LENIENT_TOLERANCE_PX: f64 = 35.0;
    /// Free-draw completion threshold percentage.
    pub const LENIENT_THRESHOLD: f64 = 70.0;
    /// Worksheet tolerance in device pixels.
    pub const STRICT_TOLERANCE_PX: f64 = 30.0;
    /// Worksheet completion threshold percentage.
    pub const STRICT_THRESHOLD: f64 = 75.0;
    /// Default sample count for both policies.
    pub const DEFAULT_SAMPLE_COUNT: usize = 51;

    /// The free-draw tracer configuration.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            mode: TraceMode::Lenient,
            tolerance_px: Self::LENIENT_TOLERANCE_PX,
            completion_threshold: Self::LENIENT_THRESHOLD,
            sample_count: Self::DEFAULT_SAMPLE_COUNT,
        }
    }

    /// The worksheet tracer configuration.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            mode: TraceMode::Strict,
            tolerance_px: Self::STRICT_TOLERANCE_PX,
            completion_threshold: Self::STRICT_THRESHOLD,
            sample_count: Self::DEFAULT_SAMPLE_COUNT,
        }
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self::lenient()
    }
}

/// Result of [`TraceSession::begin`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BeginOutcome {
    /// A drag is now in progress.
    Started {
        /// Whether the starting position was within tolerance (and was
        /// therefore marked visited).
        on_path: bool,
    },
    /// Strict mode only: the position was off the path, nothing
    /// started.
    Rejected,
}

/// Result of [`TraceSession::extend`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExtendOutcome {
    /// No drag in progress; the position was ignored.
    Ignored,
    /// The position was within tolerance and counted toward coverage.
    Accepted {
        /// Coverage after marking the nearest sample visited.
        coverage: f64,
    },
    /// Lenient mode: off the path, ink still flows, coverage unchanged,
    /// the drag stays alive.
    OffPath,
    /// Strict mode: off the path, the drag ended. A new stroke must
    /// start from a valid point. Hosts should surface a cue here
    /// rather than letting the stroke vanish silently.
    Abandoned,
}

/// Progress/completion notifications from a session.
///
/// Both methods default to no-ops so observers implement only what
/// they consume.
pub trait TraceObserver {
    /// Fired on every accepted position with the coverage percentage
    /// after it (also fired with 0.0 on [`TraceSession::reset`]).
    fn on_progress(&mut self, coverage: f64) {
        let _ = coverage;
    }

    /// Fired exactly once per session lifetime (until reset) when
    /// coverage crosses the completion threshold.
    fn on_complete(&mut self) {}
}

/// Stateful per-attempt tracker for one tracing target.
///
/// Owns the sample sequence of the target it verifies against. Created
/// when a tracing target is selected and replaced when the target
/// changes; mutated only by the input adapter during a drag — there are
/// no concurrent writers.
pub struct TraceSession {
    index: ProximityIndex,
    config: TraceConfig,
    visited: HashSet<usize>,
    active: bool,
    completed: bool,
    last_accepted: Option<Point>,
    observers: Vec<Box<dyn TraceObserver>>,
}

impl TraceSession {
    /// Create a session over already-scaled canvas-space samples.
    #[must_use]
    pub fn new(samples: Vec<Point>, config: TraceConfig) -> Self {
        Self {
            index: ProximityIndex::new(samples),
            config,
            visited: HashSet::new(),
            active: false,
            completed: false,
            last_accepted: None,
            observers: Vec::new(),
        }
    }

    /// Register an observer for progress/completion notifications.
    pub fn subscribe(&mut self, observer: Box<dyn TraceObserver>) {
        self.observers.push(observer);
    }

    /// The session configuration.
    #[must_use]
    pub const fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// The sample points this session verifies against.
    #[must_use]
    pub fn samples(&self) -> &[Point] {
        self.index.samples()
    }

    /// Number of sample points (fixed at session creation).
    #[must_use]
    pub const fn sample_count(&self) -> usize {
        self.index.len()
    }

    /// Number of distinct sample indices visited so far.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Coverage percentage in [0, 100], always derived from the
    /// visited set so it cannot drift.
    #[must_use]
    pub fn coverage(&self) -> f64 {
        if self.index.is_empty() {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.visited.len() as f64 / self.index.len() as f64;
        ratio * 100.0
    }

    /// Whether a drag is currently in progress.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the completion threshold has been crossed. Monotonic
    /// until [`Self::reset`].
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// The last position accepted as on-path during the current
    /// attempt, if any.
    #[must_use]
    pub const fn last_accepted(&self) -> Option<Point> {
        self.last_accepted
    }

    /// Clear all attempt state: visited set, coverage, completion, and
    /// any drag in progress. Always safe to call; observers receive a
    /// zero progress notification.
    pub fn reset(&mut self) {
        self.visited.clear();
        self.active = false;
        self.completed = false;
        self.last_accepted = None;
        for observer in &mut self.observers {
            observer.on_progress(0.0);
        }
    }

    /// Start a drag at `point` (canvas pixel space).
    ///
    /// Lenient mode always starts, marking the nearest sample visited
    /// when within tolerance. Strict mode starts only when the point
    /// is within tolerance; otherwise nothing changes.
    ///
    /// Calling `begin` while a drag is already active starts a fresh
    /// stroke from `point` (the adapter filters overlapping contacts
    /// before they reach the session).
    pub fn begin(&mut self, point: Point) -> BeginOutcome {
        let nearest = self.index.nearest(point);
        let on_path =
            nearest.is_some_and(|nearest| nearest.distance <= self.config.tolerance_px);

        if self.config.mode == TraceMode::Strict && !on_path {
            return BeginOutcome::Rejected;
        }

        self.active = true;
        if on_path {
            if let Some(nearest) = nearest {
                self.accept(nearest.index, point);
            }
        } else {
            self.last_accepted = None;
        }
        BeginOutcome::Started { on_path }
    }

    /// Feed one drag position. No-op unless a drag is in progress.
    pub fn extend(&mut self, point: Point) -> ExtendOutcome {
        if !self.active {
            return ExtendOutcome::Ignored;
        }

        let nearest = self.index.nearest(point);
        if let Some(nearest) = nearest {
            if nearest.distance <= self.config.tolerance_px {
                let coverage = self.accept(nearest.index, point);
                return ExtendOutcome::Accepted { coverage };
            }
        }

        match self.config.mode {
            TraceMode::Lenient => ExtendOutcome::OffPath,
            TraceMode::Strict => {
                self.active = false;
                ExtendOutcome::Abandoned
            }
        }
    }

    /// End the drag. Visited samples, coverage, and completion are
    /// unaffected.
    pub fn end(&mut self) {
        self.active = false;
    }

    /// Mark a sample visited, notify progress, and fire the one-shot
    /// completion when the threshold is crossed.
    fn accept(&mut self, sample_index: usize, point: Point) -> f64 {
        self.visited.insert(sample_index);
        self.last_accepted = Some(point);

        let coverage = self.coverage();
        for observer in &mut self.observers {
            observer.on_progress(coverage);
        }
        if !self.completed && coverage >= self.config.completion_threshold {
            self.completed = true;
            for observer in &mut self.observers {
                observer.on_complete();
            }
        }
        coverage
    }
}

impl std::fmt::Debug for TraceSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraceSession")
            .field("config", &self.config)
            .field("sample_count", &self.index.len())
            .field("visited", &self.visited.len())
            .field("active", &self.active)
            .field("completed", &self.completed)
            .field("observers", &self.observers.len())
            .finish()
    }
}
