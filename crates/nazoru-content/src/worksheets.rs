//! Static fixtures for the printable worksheet pages.
//!
//! Everything in this module is answer-keyed const data; the pages
//! decide layout, this module decides what is on them.

use std::cmp::Ordering;

use serde::Serialize;

/// A greater/less/equal comparison exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparePair {
    pub left: u8,
    pub right: u8,
}

impl ComparePair {
    /// The comparison the child should pick.
    #[must_use]
    pub fn answer(self) -> Ordering {
        self.left.cmp(&self.right)
    }
}

/// Compare-numbers page fixtures.
pub const COMPARE_PAIRS: [ComparePair; 6] = [
    ComparePair { left: 15, right: 12 },
    ComparePair { left: 8, right: 18 },
    ComparePair { left: 20, right: 20 },
    ComparePair { left: 11, right: 9 },
    ComparePair { left: 14, right: 17 },
    ComparePair { left: 13, right: 13 },
];

/// A count-and-write exercise: a grid of `count` emoji to tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountItem {
    pub emoji: &'static str,
    pub count: u8,
}

/// Count-and-write page fixtures.
pub const COUNT_ITEMS: [CountItem; 4] = [
    CountItem { emoji: "\u{2b50}", count: 12 },
    CountItem { emoji: "\u{1f34e}", count: 16 },
    CountItem { emoji: "\u{1f497}", count: 18 },
    CountItem { emoji: "\u{1f60a}", count: 20 },
];

/// A written addition fact with a blank for the sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdditionFact {
    pub addend1: u8,
    pub addend2: u8,
}

impl AdditionFact {
    #[must_use]
    pub const fn sum(self) -> u8 {
        self.addend1 + self.addend2
    }
}

/// Written-addition page fixtures.
pub const ADDITION_FACTS: [AdditionFact; 6] = [
    AdditionFact { addend1: 5, addend2: 3 },
    AdditionFact { addend1: 4, addend2: 4 },
    AdditionFact { addend1: 7, addend2: 2 },
    AdditionFact { addend1: 6, addend2: 1 },
    AdditionFact { addend1: 3, addend2: 5 },
    AdditionFact { addend1: 2, addend2: 8 },
];

/// Full sequence shown on the missing-numbers page.
pub const NUMBER_SEQUENCE_END: u8 = 20;

/// The blanks a child fills in on the missing-numbers page (every even
/// number in the sequence).
pub const MISSING_NUMBERS: [u8; 10] = [2, 4, 6, 8, 10, 12, 14, 16, 18, 20];

/// A what-comes-next pattern exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternProblem {
    /// Six cells; the `"?"` cell is the blank.
    pub sequence: [&'static str; 6],
    pub answer: &'static str,
    pub options: [&'static str; 3],
}

/// Pattern page fixtures.
pub static PATTERN_PROBLEMS: [PatternProblem; 4] = [
    PatternProblem {
        sequence: ["\u{1f534}", "\u{1f535}", "\u{1f534}", "\u{1f535}", "\u{1f534}", "?"],
        answer: "\u{1f535}",
        options: ["\u{1f534}", "\u{1f535}", "\u{1f7e2}"],
    },
    PatternProblem {
        sequence: ["\u{2b50}", "\u{2b50}", "\u{1f319}", "\u{2b50}", "\u{2b50}", "?"],
        answer: "\u{1f319}",
        options: ["\u{2b50}", "\u{1f319}", "\u{2600}\u{fe0f}"],
    },
    PatternProblem {
        sequence: ["\u{1f34e}", "\u{1f34a}", "\u{1f34e}", "\u{1f34a}", "?", "\u{1f34a}"],
        answer: "\u{1f34e}",
        options: ["\u{1f34e}", "\u{1f34a}", "\u{1f34b}"],
    },
    PatternProblem {
        sequence: ["\u{25b2}", "\u{25a0}", "\u{25cf}", "\u{25b2}", "\u{25a0}", "?"],
        answer: "\u{25cf}",
        options: ["\u{25b2}", "\u{25a0}", "\u{25cf}"],
    },
];

/// The two pattern problems shown on worksheet page `index` (pages
/// step through the fixture list two at a time, wrapping).
#[must_use]
pub fn pattern_pair(index: usize) -> [&'static PatternProblem; 2] {
    let offset = (index * 2) % PATTERN_PROBLEMS.len();
    [
        &PATTERN_PROBLEMS[offset],
        &PATTERN_PROBLEMS[(offset + 1) % PATTERN_PROBLEMS.len()],
    ]
}

/// A coin in a counting-money exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coin {
    pub emoji: &'static str,
    pub value: u8,
    pub label: &'static str,
}

/// A count-the-coins exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoinProblem {
    pub coins: &'static [Coin],
    pub question: &'static str,
    pub answer: u8,
    pub options: [u8; 3],
}

impl CoinProblem {
    /// Total value of the coins shown.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.coins.iter().map(|coin| coin.value).sum()
    }
}

const PENNY: Coin = Coin {
    emoji: "\u{1fa99}",
    value: 1,
    label: "1\u{a2}",
};
const NICKEL: Coin = Coin {
    emoji: "\u{1f4b0}",
    value: 5,
    label: "5\u{a2}",
};
const DIME: Coin = Coin {
    emoji: "\u{1f947}",
    value: 10,
    label: "10\u{a2}",
};

/// Money page fixtures.
pub const COIN_PROBLEMS: [CoinProblem; 4] = [
    CoinProblem {
        coins: &[PENNY, PENNY, PENNY],
        question: "Count the pennies!",
        answer: 3,
        options: [2, 3, 4],
    },
    CoinProblem {
        coins: &[NICKEL, PENNY],
        question: "How many cents in total?",
        answer: 6,
        options: [5, 6, 7],
    },
    CoinProblem {
        coins: &[NICKEL, NICKEL],
        question: "Count the nickels!",
        answer: 10,
        options: [5, 10, 15],
    },
    CoinProblem {
        coins: &[DIME, PENNY, PENNY],
        question: "How many cents altogether?",
        answer: 12,
        options: [10, 11, 12],
    },
];

/// Whether a measurement exercise compares two items or orders three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MeasurementKind {
    Compare,
    Order,
}

/// An item in a measurement exercise, with a relative height for the
/// illustration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeasurementItem {
    pub emoji: &'static str,
    pub height: u8,
    pub label: &'static str,
}

/// A size-comparison exercise. For [`MeasurementKind::Order`] the
/// answer is the labels joined by commas, shortest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeasurementProblem {
    pub kind: MeasurementKind,
    pub items: &'static [MeasurementItem],
    pub question: &'static str,
    pub answer: &'static str,
}

/// Measurement page fixtures.
pub const MEASUREMENT_PROBLEMS: [MeasurementProblem; 4] = [
    MeasurementProblem {
        kind: MeasurementKind::Compare,
        items: &[
            MeasurementItem { emoji: "\u{1f332}", height: 80, label: "Tree" },
            MeasurementItem { emoji: "\u{1f338}", height: 30, label: "Flower" },
        ],
        question: "Which is TALLER?",
        answer: "Tree",
    },
    MeasurementProblem {
        kind: MeasurementKind::Compare,
        items: &[
            MeasurementItem { emoji: "\u{1f418}", height: 70, label: "Elephant" },
            MeasurementItem { emoji: "\u{1f401}", height: 20, label: "Mouse" },
        ],
        question: "Which is SHORTER?",
        answer: "Mouse",
    },
    MeasurementProblem {
        kind: MeasurementKind::Order,
        items: &[
            MeasurementItem { emoji: "\u{1f3e0}", height: 60, label: "House" },
            MeasurementItem { emoji: "\u{1f3e2}", height: 90, label: "Building" },
            MeasurementItem { emoji: "\u{1f3d5}\u{fe0f}", height: 40, label: "Tent" },
        ],
        question: "Order from SHORTEST to TALLEST",
        answer: "Tent,House,Building",
    },
    MeasurementProblem {
        kind: MeasurementKind::Compare,
        items: &[
            MeasurementItem { emoji: "\u{270f}\u{fe0f}", height: 50, label: "Pencil" },
            MeasurementItem { emoji: "\u{1f4cf}", height: 70, label: "Ruler" },
        ],
        question: "Which is LONGER?",
        answer: "Ruler",
    },
];

// --- tests ---
