//! Arithmetic problem generation for the counting modules.
//!
//! Generators take the RNG as an explicit parameter so callers control
//! seeding; tests drive them with a fixed-seed PCG.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

/// Objects counted in problem visualisations.
pub const COUNTING_EMOJI: [&str; 10] = [
    "\u{1f34e}",
    "\u{2b50}",
    "\u{1f9f8}",
    "\u{1f388}",
    "\u{1f338}",
    "\u{1f347}",
    "\u{1f98b}",
    "\u{1f33b}",
    "\u{1f381}",
    "\u{1f352}",
];

/// How many answer buttons a multiple-choice problem shows.
pub const CHOICE_COUNT: usize = 4;

/// A single arithmetic problem with its counting object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Problem {
    /// First operand (count of the first object group).
    pub num1: u8,
    /// Second operand (count of the second group, or items removed).
    pub num2: u8,
    /// Correct answer.
    pub answer: u8,
    /// Emoji drawn `num1` and `num2` times.
    pub emoji: &'static str,
}

/// Generates an addition problem whose sum stays within a single hand
/// plus one: the first addend is 0 through 5 and the second is chosen
/// so the sum never exceeds 6, with a zero first addend forcing a
/// nonzero second so the answer is never 0.
pub fn addition_problem<R: Rng>(rng: &mut R) -> Problem {
    let num1 = rng.gen_range(0..6u8);
    let num2 = rng.gen_range(0..6 - num1) + u8::from(num1 == 0);
    Problem {
        num1,
        num2,
        answer: num1 + num2,
        emoji: pick_emoji(rng),
    }
}

/// Generates a take-away problem: 2 through 10 objects with fewer than
/// that removed, so the difference is always at least 1.
pub fn subtraction_problem<R: Rng>(rng: &mut R) -> Problem {
    let num1 = rng.gen_range(2..=10u8);
    let num2 = rng.gen_range(0..num1);
    Problem {
        num1,
        num2,
        answer: num1 - num2,
        emoji: pick_emoji(rng),
    }
}

/// Builds [`CHOICE_COUNT`] shuffled answer choices containing `answer`
/// and distinct distractors near it, all clamped to 0 through 10.
///
/// Distractors are drawn from a window around the answer that starts
/// at plus or minus 2 and widens whenever the clamped window cannot
/// supply another distinct value, so the function terminates even at
/// the edges of the range (answer 10 only has two distinct neighbours
/// inside the initial window).
pub fn answer_choices<R: Rng>(answer: u8, rng: &mut R) -> Vec<u8> {
    let mut choices = vec![answer];
    let mut radius = 2u8;
    while choices.len() < CHOICE_COUNT {
        let lo = answer.saturating_sub(radius);
        let hi = answer.saturating_add(radius).min(10);
        let exhausted = (lo..=hi).all(|value| choices.contains(&value));
        if exhausted {
            radius += 1;
            continue;
        }
        let candidate = rng.gen_range(lo..=hi);
        if !choices.contains(&candidate) {
            choices.push(candidate);
        }
    }
    choices.shuffle(rng);
    choices
}

fn pick_emoji<R: Rng>(rng: &mut R) -> &'static str {
    COUNTING_EMOJI[rng.gen_range(0..COUNTING_EMOJI.len())]
}

// --- tests ---
