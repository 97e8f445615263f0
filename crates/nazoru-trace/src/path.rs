//! Declarative vector path descriptions and their SVG-path-data parser.
//!
//! A [`PathDescription`] is an ordered list of move / line / cubic-Bézier
//! segments in a fixed author coordinate space. Digit outlines are
//! authored as SVG path-data strings (`M 35 30 L 50 15 L 50 105`), so
//! this module accepts the absolute `M`/`L`/`C` subset of that syntax.
//! Other SVG commands (arcs, quadratics, shorthands, relative forms)
//! are rejected; the digit corpus never uses them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::types::Point;

/// One drawing segment of a path.
///
/// Coordinates are absolute, in the path's author space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    /// Set the current point without drawing.
    MoveTo(Point),
    /// Straight segment from the current point.
    LineTo(Point),
    /// Cubic Bézier from the current point through two control points
    /// to an endpoint.
    CubicTo {
        /// First control point.
        c1: Point,
        /// Second control point.
        c2: Point,
        /// Endpoint; becomes the new current point.
        to: Point,
    },
}

/// An ordered sequence of drawing segments.
///
/// Invariants, enforced by [`PathDescription::parse`]:
/// - the first segment is always a [`PathSegment::MoveTo`],
/// - every coordinate is a finite number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathDescription(Vec<PathSegment>);

impl PathDescription {
    /// Returns a slice of all segments.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Returns `true` if the path has no segments.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of segments.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// The point the path begins at.
    ///
    /// Parsing guarantees a leading move, so this is its target. The
    /// fallback centre of the digit author space is returned for the
    /// unreachable empty case rather than panicking.
    #[must_use]
    pub fn start(&self) -> Point {
        match self.0.first() {
            Some(
                PathSegment::MoveTo(point)
                | PathSegment::LineTo(point)
                | PathSegment::CubicTo { to: point, .. },
            ) => *point,
            None => Point::new(50.0, 60.0),
        }
    }

    /// Parse the absolute `M`/`L`/`C` subset of SVG path data.
    ///
    /// Command letters are matched case-insensitively (the data is
    /// absolute either way). Numbers may be separated by whitespace
    /// and/or commas. Repeated coordinate groups after a command are
    /// accepted: extra pairs after `M` continue as line segments, as
    /// in SVG.
    ///
    /// # Errors
    ///
    /// Returns [`PathError`] when the string is empty, contains an
    /// unsupported command, has a coordinate count that does not match
    /// its command, contains an unparseable or non-finite number, or
    /// does not begin with a move.
    pub fn parse(data: &str) -> Result<Self, PathError> {
        let mut segments = Vec::new();

        for command in split_commands(data) {
            let (letter, args) = command;
            let numbers = parse_numbers(args)?;
            append_segments(&mut segments, letter, &numbers)?;
        }

        match segments.first() {
            None => Err(PathError::Empty),
            Some(PathSegment::MoveTo(_)) => Ok(Self(segments)),
            Some(_) => Err(PathError::MissingLeadingMove),
        }
    }
}

impl FromStr for PathDescription {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Errors produced while parsing path data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The path data contained no segments at all.
    #[error("path data is empty")]
    Empty,

    /// The path data did not begin with a move command.
    #[error("path data must begin with a move command")]
    MissingLeadingMove,

    /// A command letter outside the supported `M`/`L`/`C` subset.
    #[error("unsupported path command '{0}'")]
    UnsupportedCommand(char),

    /// A coordinate failed to parse as a finite number.
    #[error("invalid number in path data: {0}")]
    InvalidNumber(String),

    /// A command was followed by the wrong number of coordinates.
    #[error("command '{command}' takes coordinate groups of {group}, got {count} numbers")]
    WrongArity {
        /// The offending command letter.
        command: char,
        /// Coordinates required per group.
        group: usize,
        /// Coordinates actually present.
        count: usize,
    },
}

/// Returns `true` for the SVG path command letters, in either case.
const fn is_command_letter(ch: char) -> bool {
    matches!(
        ch.to_ascii_uppercase(),
        'M' | 'L' | 'C' | 'Q' | 'S' | 'A' | 'H' | 'V' | 'Z'
    )
}

/// Split path data into `(command_letter, argument_text)` pairs.
///
/// A command letter only splits when it is not glued to another
/// letter, so junk like `abc` (and the exponent in `1e3`) stays in
/// the argument text and surfaces as a number error rather than a
/// phantom command. Leading text before the first command letter is
/// ignored; the digit corpus never produces any, but a tolerant scan
/// keeps hand-edited guide data from failing on stray characters.
fn split_commands(data: &str) -> Vec<(char, &str)> {
    let mut commands = Vec::new();
    let mut current: Option<(char, usize)> = None;
    let mut prev: Option<char> = None;
    let mut iter = data.char_indices().peekable();

    while let Some((offset, ch)) = iter.next() {
        let glued = prev.is_some_and(char::is_alphabetic)
            || iter.peek().is_some_and(|&(_, next)| next.is_alphabetic());
        if is_command_letter(ch) && !glued {
            if let Some((letter, start)) = current.take() {
                commands.push((letter, &data[start..offset]));
            }
            current = Some((ch, offset + ch.len_utf8()));
        }
        prev = Some(ch);
    }
    if let Some((letter, start)) = current {
        commands.push((letter, &data[start..]));
    }
    commands
}

/// Parse a run of whitespace/comma separated numbers, rejecting
/// anything unparseable or non-finite.
fn parse_numbers(args: &str) -> Result<Vec<f64>, PathError> {
    args.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(PathError::InvalidNumber(token.to_owned())),
        })
        .collect()
}

/// Append the segments encoded by one command to `segments`.
fn append_segments(
    segments: &mut Vec<PathSegment>,
    letter: char,
    numbers: &[f64],
) -> Result<(), PathError> {
    let upper = letter.to_ascii_uppercase();
    let group = match upper {
        'M' | 'L' => 2,
        'C' => 6,
        _ => return Err(PathError::UnsupportedCommand(letter)),
    };
    if numbers.is_empty() || numbers.len() % group != 0 {
        return Err(PathError::WrongArity {
            command: upper,
            group,
            count: numbers.len(),
        });
    }

    for (index, chunk) in numbers.chunks_exact(group).enumerate() {
        let segment = match upper {
            'M' => {
                let p = Point::new(chunk[0], chunk[1]);
                // Extra pairs after a move continue as line segments.
                if index == 0 {
                    PathSegment::MoveTo(p)
                } else {
                    PathSegment::LineTo(p)
                }
            }
            'L' => PathSegment::LineTo(Point::new(chunk[0], chunk[1])),
            _ => PathSegment::CubicTo {
                c1: Point::new(chunk[0], chunk[1]),
                c2: Point::new(chunk[2], chunk[3]),
                to: Point::new(chunk[4], chunk[5]),
            },
        };
        segments.push(segment);
    }
    Ok(())
}
