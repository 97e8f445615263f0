//! End-to-end tracing scenarios across the whole engine:
//! sampling -> proximity -> session -> adapter.

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::rc::Rc;

use nazoru_trace::{
    BeginOutcome, CanvasSize, InkSink, Point, PointerEvent, PointerPhase, SurfaceGeometry,
    TraceConfig, TraceInputAdapter, TraceObserver, TraceSession, build_samples, build_session,
    sampler,
};

const AUTHOR_100: CanvasSize = CanvasSize::new(100.0, 100.0);
const AUTHOR_DIGITS: CanvasSize = CanvasSize::new(100.0, 120.0);

#[derive(Clone, Default)]
struct Completions(Rc<RefCell<usize>>);

impl TraceObserver for Completions {
    fn on_complete(&mut self) {
        *self.0.borrow_mut() += 1;
    }
}

/// A horizontal line traced point-by-point at every sample index
/// drives coverage to 100 and fires completion exactly once.
#[test]
fn horizontal_line_traced_to_full_coverage() {
    let config = TraceConfig {
        sample_count: 2,
        ..TraceConfig::lenient()
    };
    let samples = build_samples(
        "M 0 0 L 100 0",
        &config,
        AUTHOR_100,
        CanvasSize::new(100.0, 100.0),
        0.0,
    );
    assert_eq!(samples, vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);

    let completions = Completions::default();
    let mut session = TraceSession::new(samples.clone(), config);
    session.subscribe(Box::new(completions.clone()));

    session.begin(samples[0]);
    for &sample in &samples[1..] {
        session.extend(sample);
    }
    session.end();

    assert!((session.coverage() - 100.0).abs() < 1e-9);
    assert!(session.is_completed());
    assert_eq!(*completions.0.borrow(), 1);
}

/// Strict begin far outside tolerance leaves the session idle.
#[test]
fn strict_begin_far_off_path_stays_idle() {
    let mut session = build_session(
        "M 0 0 L 100 0",
        TraceConfig::strict(),
        AUTHOR_100,
        CanvasSize::new(100.0, 100.0),
        0.0,
    );
    let outcome = session.begin(Point::new(500.0, 500.0));
    assert_eq!(outcome, BeginOutcome::Rejected);
    assert!(!session.is_active());
    assert!(!session.is_completed());
    assert_eq!(session.visited_count(), 0);
}

/// Reset mid-trace zeroes coverage and a repeated identical trace
/// reproduces the same coverage trajectory as a fresh session.
#[test]
fn reset_mid_trace_reproduces_trajectory() {
    let positions: Vec<Point> = (0..=45).map(|x| Point::new(f64::from(x), 0.0)).collect();
    let trace = |session: &mut TraceSession| -> Vec<f64> {
        let mut trajectory = Vec::new();
        session.begin(positions[0]);
        trajectory.push(session.coverage());
        for &p in &positions[1..] {
            session.extend(p);
            trajectory.push(session.coverage());
        }
        trajectory
    };

    let build = || {
        build_session(
            "M 0 0 L 100 0",
            TraceConfig {
                sample_count: 11,
                ..TraceConfig::lenient()
            },
            AUTHOR_100,
            CanvasSize::new(100.0, 100.0),
            0.0,
        )
    };

    let mut session = build();
    let first = trace(&mut session);

    // Partial coverage mid-trace, then reset.
    assert!(session.coverage() > 0.0 && session.coverage() < 100.0);
    session.reset();
    assert!(session.coverage().abs() < f64::EPSILON);
    assert!(!session.is_completed());
    assert!(!session.is_active());

    let after_reset = trace(&mut session);
    assert_eq!(first, after_reset);

    let mut fresh = build();
    let fresh_run = trace(&mut fresh);
    assert_eq!(first, fresh_run);
}

/// Sampling the digit "1" twice at the same target size returns
/// identical point arrays.
#[test]
fn digit_one_sampling_is_deterministic() {
    let digit_one = "M 35 30 L 50 15 L 50 105";
    let config = TraceConfig::lenient();
    let canvas = CanvasSize::new(280.0, 280.0);

    let first = build_samples(digit_one, &config, AUTHOR_DIGITS, canvas, 0.0);
    let second = build_samples(digit_one, &config, AUTHOR_DIGITS, canvas, 0.0);
    assert_eq!(first, second);
    assert_eq!(first.len(), config.sample_count);
}

/// The two policies react differently to the same off-path movement:
/// lenient stays active without counting, strict abandons.
#[test]
fn policies_differ_only_in_abandonment() {
    let canvas = CanvasSize::new(300.0, 360.0);
    let digit_seven = "M 20 15 L 80 15 L 45 105";

    let mut lenient = build_session(
        digit_seven,
        TraceConfig::lenient(),
        AUTHOR_DIGITS,
        canvas,
        0.0,
    );
    let mut strict = build_session(
        digit_seven,
        TraceConfig::strict(),
        AUTHOR_DIGITS,
        canvas,
        0.0,
    );

    // Both start on the first sample.
    let start = lenient.samples()[0];
    lenient.begin(start);
    strict.begin(start);
    let lenient_visited = lenient.visited_count();
    let strict_visited = strict.visited_count();

    // Drift far off the path.
    let off = Point::new(-200.0, -200.0);
    lenient.extend(off);
    strict.extend(off);

    assert!(lenient.is_active());
    assert!(!strict.is_active());
    assert_eq!(lenient.visited_count(), lenient_visited);
    assert_eq!(strict.visited_count(), strict_visited);
}

/// Full trace through the adapter: walking a guide path with a
/// finger-width wobble completes a strict worksheet session.
///
/// The target is an 11-stop polyline so every sample lands on a
/// distinct position (index resampling duplicates samples when a path
/// densifies to fewer raw points than the sample count, and duplicate
/// positions resolve to the earliest index — capping reachable
/// coverage; see the sampler docs).
#[test]
fn worksheet_polyline_completes_through_adapter() {
    #[derive(Default)]
    struct CountingInk {
        strokes: usize,
    }

    impl InkSink for CountingInk {
        fn end_stroke(&mut self) {
            self.strokes += 1;
        }
    }

    let guide = "M 0 0 L 10 0 L 20 0 L 30 0 L 40 0 L 50 0 \
                 L 60 0 L 70 0 L 80 0 L 90 0 L 100 0";
    let config = TraceConfig {
        sample_count: 11,
        ..TraceConfig::strict()
    };
    let canvas = CanvasSize::new(300.0, 360.0);
    let padding = 45.0;

    let samples = build_samples(guide, &config, AUTHOR_DIGITS, canvas, padding);
    assert_eq!(samples.len(), 11);
    let session = TraceSession::new(samples.clone(), config);
    let geometry = SurfaceGeometry {
        left: 20.0,
        top: 10.0,
        size: canvas,
    };
    let mut adapter = TraceInputAdapter::new(session, geometry, CountingInk::default());

    // Replay the guide path itself (offset back into device space)
    // with a small wobble that stays inside tolerance.
    let device = |p: Point, wobble: f64| PointerEvent {
        x: p.x + 20.0 + wobble,
        y: p.y + 10.0 - wobble,
        phase: PointerPhase::Move,
    };
    adapter.handle(PointerEvent {
        x: samples[0].x + 20.0,
        y: samples[0].y + 10.0,
        phase: PointerPhase::Start,
    });
    for (i, &p) in samples.iter().enumerate().skip(1) {
        let wobble = if i % 2 == 0 { 4.0 } else { -4.0 };
        adapter.handle(device(p, wobble));
    }
    adapter.handle(PointerEvent {
        x: 0.0,
        y: 0.0,
        phase: PointerPhase::End,
    });

    let (session, ink) = adapter.into_parts();
    assert!(session.is_completed(), "coverage was {}", session.coverage());
    assert!(!session.is_active());
    assert_eq!(ink.strokes, 1);
}

/// Sampling never returns fewer or more points than requested, across
/// digits and counts.
#[test]
fn sampling_count_is_exact_for_all_digits() {
    let digits = [
        "M 50 15 C 20 15 10 40 10 60 C 10 80 20 105 50 105 C 80 105 90 80 90 60 C 90 40 80 15 50 15",
        "M 35 30 L 50 15 L 50 105",
        "M 20 35 C 20 15 50 5 65 25 C 80 45 50 60 20 105 L 80 105",
        "M 25 20 C 55 5 85 20 70 45 C 55 55 55 55 70 70 C 85 95 55 115 25 100",
        "M 65 105 L 65 15 L 15 75 L 85 75",
        "M 75 15 L 30 15 L 25 55 C 50 45 80 50 80 75 C 80 105 50 115 25 95",
        "M 20 15 L 80 15 L 45 105",
        "M 15 30 L 25 15 L 25 105 M 60 15 C 45 15 40 35 40 60 C 40 85 45 105 60 105 C 75 105 80 85 80 60 C 80 35 75 15 60 15",
    ];
    for data in digits {
        for count in [2, 25, 51, 101] {
            let samples = sampler::sample_path_data(data, count, AUTHOR_DIGITS);
            assert_eq!(samples.len(), count, "digit {data} at count {count}");
        }
    }
}
