//! nazoru-sim: CLI tool for replaying recorded strokes against a guide.
//!
//! Feeds a JSON stroke recording through the trace session machinery
//! and prints the coverage trajectory. Useful for:
//!
//! - Reproducing tracing behaviour reported from real devices
//! - Tuning tolerance and completion thresholds against recordings
//! - Comparing the lenient and strict acceptance policies on one trace
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin nazoru-sim -- [OPTIONS] <RECORDING_PATH>
//! ```
//!
//! A recording is a JSON array of pointer events:
//!
//! ```text
//! [{"x": 95.0, "y": 60.0, "phase": "start"}, ...]
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use nazoru_content::{AUTHOR_SPACE, practice_digit, worksheet_digit};
use nazoru_export::{GuideStyle, to_guide_svg, to_overlay_svg};
use nazoru_trace::{
    CanvasSize, InkSink, Point, PointerEvent, PointerPhase, SurfaceGeometry, TraceConfig,
    TraceInputAdapter, TraceMode, build_session,
};

/// Stroke recording replay and tolerance tuning for nazoru.
///
/// Replays a recorded pointer stream against a digit guide with a
/// configurable acceptance policy and prints per-event coverage.
#[derive(Parser)]
#[command(name = "nazoru-sim", version)]
struct Cli {
    /// Path to the JSON stroke recording (array of pointer events).
    recording_path: PathBuf,

    /// Digit to trace (0-10 in the practice set, 0-9 in worksheets).
    #[arg(long, default_value_t = 0)]
    digit: u8,

    /// Trace the worksheet guide variant instead of the practice one.
    #[arg(long)]
    worksheet: bool,

    /// Acceptance policy.
    #[arg(long, value_enum, default_value_t = Policy::Lenient)]
    policy: Policy,

    /// Override the on-path tolerance in pixels.
    #[arg(long)]
    tolerance: Option<f64>,

    /// Override the completion threshold percentage.
    #[arg(long)]
    threshold: Option<f64>,

    /// Number of guide samples.
    #[arg(long, default_value_t = TraceConfig::DEFAULT_SAMPLE_COUNT, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    samples: usize,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 300.0)]
    width: f64,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 360.0)]
    height: f64,

    /// Canvas left edge in recording coordinates.
    #[arg(long, default_value_t = 0.0)]
    left: f64,

    /// Canvas top edge in recording coordinates.
    #[arg(long, default_value_t = 0.0)]
    top: f64,

    /// Inset the guide from the canvas edge by this many pixels.
    ///
    /// Defaults to 15% of the canvas width under the strict policy
    /// (the worksheet layout) and 0 under the lenient one.
    #[arg(long)]
    padding: Option<f64>,

    /// Output the replay summary as JSON instead of a report.
    #[arg(long)]
    json: bool,

    /// Write the dotted guide SVG to a file.
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Write a sample/ink overlay SVG to a file.
    #[arg(long)]
    overlay: Option<PathBuf>,
}

/// Acceptance policy selection.
#[derive(Clone, Copy, ValueEnum)]
enum Policy {
    /// Free-draw: off-path movement keeps the drag alive.
    Lenient,
    /// Worksheet: wandering off the guide abandons the stroke.
    Strict,
}

impl Policy {
    const fn label(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

/// Collects accepted stroke geometry for the overlay diagnostic.
#[derive(Debug, Default)]
struct InkRecorder {
    points: Vec<Point>,
}

impl InkSink for InkRecorder {
    fn begin_stroke(&mut self, at: Point) {
        self.points.push(at);
    }

    fn line_to(&mut self, to: Point) {
        self.points.push(to);
    }
}

/// Machine-readable replay result for `--json`.
#[derive(Serialize)]
struct ReplaySummary {
    digit: u8,
    policy: &'static str,
    events: usize,
    samples: usize,
    visited: usize,
    coverage: f64,
    completed: bool,
    trajectory: Vec<f64>,
}

/// Build a [`TraceConfig`] from CLI arguments: the policy picks the
/// base configuration and individual flags override its fields.
fn config_from_cli(cli: &Cli) -> TraceConfig {
    let base = match cli.policy {
        Policy::Lenient => TraceConfig::lenient(),
        Policy::Strict => TraceConfig::strict(),
    };
    TraceConfig {
        tolerance_px: cli.tolerance.unwrap_or(base.tolerance_px),
        completion_threshold: cli.threshold.unwrap_or(base.completion_threshold),
        sample_count: cli.samples,
        ..base
    }
}

const fn phase_label(phase: PointerPhase) -> &'static str {
    match phase {
        PointerPhase::Start => "start",
        PointerPhase::Move => "move",
        PointerPhase::End => "end",
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let recording = match std::fs::read_to_string(&cli.recording_path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading {}: {e}", cli.recording_path.display());
            return ExitCode::FAILURE;
        }
    };
    let events: Vec<PointerEvent> = match serde_json::from_str(&recording) {
        Ok(events) => events,
        Err(e) => {
            eprintln!("Error parsing {}: {e}", cli.recording_path.display());
            return ExitCode::FAILURE;
        }
    };

    let guide = if cli.worksheet {
        worksheet_digit(usize::from(cli.digit))
    } else {
        practice_digit(cli.digit).path
    };

    let config = config_from_cli(&cli);
    let canvas = CanvasSize::new(cli.width, cli.height);
    let padding = cli.padding.unwrap_or(match config.mode {
        TraceMode::Strict => cli.width * 0.15,
        TraceMode::Lenient => 0.0,
    });

    let session = build_session(guide, config, AUTHOR_SPACE, canvas, padding);
    if session.sample_count() == 0 {
        eprintln!("Canvas {}x{} leaves no room for the guide", cli.width, cli.height);
        return ExitCode::FAILURE;
    }

    if !cli.json {
        eprintln!(
            "Replaying {} ({} events) against digit {} [{}]",
            cli.recording_path.display(),
            events.len(),
            cli.digit,
            cli.policy.label(),
        );
        eprintln!(
            "Canvas {}x{} at ({}, {}), padding {padding}, tolerance {}, threshold {}%",
            cli.width, cli.height, cli.left, cli.top, config.tolerance_px, config.completion_threshold,
        );
        eprintln!();
    }

    let geometry = SurfaceGeometry {
        left: cli.left,
        top: cli.top,
        size: canvas,
    };
    let mut adapter = TraceInputAdapter::new(session, geometry, InkRecorder::default());

    let mut trajectory = Vec::with_capacity(events.len());
    for (i, event) in events.iter().enumerate() {
        adapter.handle(*event);
        let coverage = adapter.session().coverage();
        trajectory.push(coverage);
        if !cli.json {
            println!(
                "#{i:<4} {:>5} ({:7.1}, {:7.1})  coverage {coverage:5.1}%",
                phase_label(event.phase),
                event.x,
                event.y,
            );
        }
    }

    let (session, ink) = adapter.into_parts();

    if cli.json {
        let summary = ReplaySummary {
            digit: cli.digit,
            policy: cli.policy.label(),
            events: events.len(),
            samples: session.sample_count(),
            visited: session.visited_count(),
            coverage: session.coverage(),
            completed: session.is_completed(),
            trajectory,
        };
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing summary: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!();
        println!("Samples:   {}", session.sample_count());
        println!("Visited:   {}", session.visited_count());
        println!("Coverage:  {:.1}%", session.coverage());
        println!("Completed: {}", if session.is_completed() { "yes" } else { "no" });
    }

    if let Some(ref svg_path) = cli.svg {
        let svg = match to_guide_svg(guide, AUTHOR_SPACE, &GuideStyle::default()) {
            Ok(svg) => svg,
            Err(e) => {
                eprintln!("Error building guide SVG: {e}");
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = std::fs::write(svg_path, svg) {
            eprintln!("Error writing {}: {e}", svg_path.display());
            return ExitCode::FAILURE;
        }
        if !cli.json {
            eprintln!("Guide SVG written to {}", svg_path.display());
        }
    }

    if let Some(ref overlay_path) = cli.overlay {
        let svg = to_overlay_svg(session.samples(), &ink.points, canvas);
        if let Err(e) = std::fs::write(overlay_path, svg) {
            eprintln!("Error writing {}: {e}", overlay_path.display());
            return ExitCode::FAILURE;
        }
        if !cli.json {
            eprintln!("Overlay SVG written to {}", overlay_path.display());
        }
    }

    ExitCode::SUCCESS
}

// --- tests ---
