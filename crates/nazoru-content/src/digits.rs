//! Traceable digit guides in the shared author space.
//!
//! Two families of guides exist: the practice set (0 through 10, each
//! paired with the objects children count alongside it) and the
//! worksheet set (0 through 9, drawn with tighter stroke order for the
//! strict tracer). Both families share the same 100x120 author space.

use nazoru_trace::CanvasSize;
use serde::Serialize;

/// Author space every digit guide is drawn in.
pub const AUTHOR_SPACE: CanvasSize = CanvasSize::new(100.0, 120.0);

/// A digit guide with its counting objects for the practice canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DigitGuide {
    /// The digit value, 0 through 10.
    pub value: u8,
    /// Spelled-out English name.
    pub name: &'static str,
    /// Guide path in author space (absolute `M`/`L`/`C` commands).
    pub path: &'static str,
    /// Emoji shown `value` times next to the guide.
    pub object: Option<&'static str>,
    /// Plural noun for the counting prompt ("two apples").
    pub object_name: &'static str,
}

/// Practice digits 0 through 10 with their counting objects.
pub static PRACTICE_DIGITS: [DigitGuide; 11] = [
    DigitGuide {
        value: 0,
        name: "Zero",
        path: "M 50 15 C 20 15 10 40 10 60 C 10 80 20 105 50 105 C 80 105 90 80 90 60 C 90 40 80 15 50 15",
        object: None,
        object_name: "nothing",
    },
    DigitGuide {
        value: 1,
        name: "One",
        path: "M 35 30 L 50 15 L 50 105",
        object: Some("\u{1f34e}"),
        object_name: "apple",
    },
    DigitGuide {
        value: 2,
        name: "Two",
        path: "M 20 35 C 20 15 50 5 65 25 C 80 45 50 60 20 105 L 80 105",
        object: Some("\u{1f34e}"),
        object_name: "apples",
    },
    DigitGuide {
        value: 3,
        name: "Three",
        path: "M 25 20 C 55 5 85 20 70 45 C 55 55 55 55 70 70 C 85 95 55 115 25 100",
        object: Some("\u{2b50}"),
        object_name: "stars",
    },
    DigitGuide {
        value: 4,
        name: "Four",
        path: "M 65 105 L 65 15 L 15 75 L 85 75",
        object: Some("\u{1f338}"),
        object_name: "flowers",
    },
    DigitGuide {
        value: 5,
        name: "Five",
        path: "M 75 15 L 30 15 L 25 55 C 50 45 80 50 80 75 C 80 105 50 115 25 95",
        object: Some("\u{1f388}"),
        object_name: "balloons",
    },
    DigitGuide {
        value: 6,
        name: "Six",
        path: "M 70 20 C 40 10 15 40 15 70 C 15 100 35 110 55 110 C 75 110 85 95 85 75 C 85 55 70 50 50 55 C 30 60 15 70 15 70",
        object: Some("\u{1f431}"),
        object_name: "cats",
    },
    DigitGuide {
        value: 7,
        name: "Seven",
        path: "M 20 15 L 80 15 L 45 105",
        object: Some("\u{1f347}"),
        object_name: "grapes",
    },
    DigitGuide {
        value: 8,
        name: "Eight",
        path: "M 50 60 C 25 60 20 40 30 25 C 40 10 60 10 70 25 C 80 40 75 60 50 60 C 20 60 10 85 25 100 C 40 115 60 115 75 100 C 90 85 80 60 50 60",
        object: Some("\u{1f98b}"),
        object_name: "butterflies",
    },
    DigitGuide {
        value: 9,
        name: "Nine",
        path: "M 30 100 C 60 110 85 80 85 50 C 85 20 65 10 45 10 C 25 10 15 25 15 45 C 15 65 30 70 50 65 C 70 60 85 50 85 50",
        object: Some("\u{1f33b}"),
        object_name: "sunflowers",
    },
    DigitGuide {
        value: 10,
        name: "Ten",
        path: "M 15 30 L 25 15 L 25 105 M 60 15 C 45 15 40 35 40 60 C 40 85 45 105 60 105 C 75 105 80 85 80 60 C 80 35 75 15 60 15",
        object: Some("\u{1f381}"),
        object_name: "gifts",
    },
];

/// Worksheet digit guides 0 through 9, redrawn for the strict tracer.
pub const WORKSHEET_DIGITS: [&str; 10] = [
    "M50 15 C25 15 15 40 15 60 C15 80 25 105 50 105 C75 105 85 80 85 60 C85 40 75 15 50 15",
    "M35 25 L50 15 L50 105",
    "M20 35 C20 15 45 10 60 25 C75 40 70 55 50 70 L20 105 L80 105",
    "M25 20 C35 10 70 10 70 35 C70 50 55 55 45 55 C55 55 75 60 75 80 C75 105 40 110 20 95",
    "M65 105 L65 15 L15 75 L85 75",
    "M75 15 L30 15 L25 55 C40 45 75 45 75 75 C75 105 40 110 20 90",
    "M70 20 C50 10 20 25 20 60 C20 95 45 105 60 95 C75 85 75 65 60 55 C45 45 20 55 20 60",
    "M20 15 L80 15 L45 105",
    "M50 55 C30 55 25 40 30 25 C35 10 65 10 70 25 C75 40 70 55 50 55 C25 55 15 75 20 90 C25 105 75 105 80 90 C85 75 75 55 50 55",
    "M80 60 C80 25 55 15 40 25 C25 35 25 55 40 65 C55 75 80 65 80 60 L80 100 C70 110 50 110 30 100",
];

/// Looks up the practice guide for `value`, falling back to zero for
/// out-of-range values.
#[must_use]
pub fn practice_digit(value: u8) -> &'static DigitGuide {
    PRACTICE_DIGITS
        .iter()
        .find(|guide| guide.value == value)
        .unwrap_or(&PRACTICE_DIGITS[0])
}

/// Looks up the worksheet guide path for `value` (wraps modulo 10, the
/// way worksheet pages cycle through the digits).
#[must_use]
pub fn worksheet_digit(value: usize) -> &'static str {
    WORKSHEET_DIGITS[value % WORKSHEET_DIGITS.len()]
}

// --- tests ---

#[cfg(test)]
mod tests {
    use nazoru_trace::PathDescription;

    use super::*;

    #[test]
    fn practice_digits_cover_zero_through_ten() {
        for (i, guide) in PRACTICE_DIGITS.iter().enumerate() {
            assert_eq!(usize::from(guide.value), i);
        }
    }

    #[test]
    fn every_guide_path_parses() {
        for guide in &PRACTICE_DIGITS {
            assert!(guide.path.parse::<PathDescription>().is_ok(), "{}", guide.name);
        }
        for path in WORKSHEET_DIGITS {
            assert!(path.parse::<PathDescription>().is_ok(), "{path}");
        }
    }

    #[test]
    fn object_counts_match_values() {
        assert!(PRACTICE_DIGITS[0].object.is_none());
        for guide in &PRACTICE_DIGITS[1..] {
            assert!(guide.object.is_some(), "{}", guide.name);
        }
    }

    #[test]
    fn lookup_falls_back_to_zero() {
        assert_eq!(practice_digit(7).name, "Seven");
        assert_eq!(practice_digit(200).name, "Zero");
    }

    #[test]
    fn worksheet_lookup_wraps() {
        assert_eq!(worksheet_digit(3), worksheet_digit(13));
    }
}
