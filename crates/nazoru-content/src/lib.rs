//! Content for the nazoru counting practice: digit tracing guides,
//! arithmetic problem generators, and printable worksheet fixtures.
//!
//! Everything here is data or pure functions over an explicit RNG; the
//! tracing semantics live in [`nazoru_trace`].

pub mod digits;
pub mod problems;
pub mod worksheets;

pub use digits::{
    AUTHOR_SPACE, DigitGuide, PRACTICE_DIGITS, WORKSHEET_DIGITS, practice_digit, worksheet_digit,
};
pub use problems::{
    CHOICE_COUNT, COUNTING_EMOJI, Problem, addition_problem, answer_choices, subtraction_problem,
};
pub use worksheets::{
    ADDITION_FACTS, AdditionFact, COIN_PROBLEMS, COMPARE_PAIRS, COUNT_ITEMS, Coin, CoinProblem,
    ComparePair, CountItem, MEASUREMENT_PROBLEMS, MISSING_NUMBERS, MeasurementItem,
    MeasurementKind, MeasurementProblem, NUMBER_SEQUENCE_END, PATTERN_PROBLEMS, PatternProblem,
    pattern_pair,
};
