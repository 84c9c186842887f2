//! Card selection and the next-due-time law.
//!
//! Selection works over a [`Candidates`] partition and an injected `now`, so
//! every decision here is a pure function of its arguments.

use crate::model::{Card, Outcome, Policy};
use crate::scan::Candidates;

/// Bootstrap interval after the first successful review, in seconds.
const FIRST_HIT_DELAY: u64 = 90;
/// Fixed penalty delay after a miss, in seconds.
const MISS_DELAY: u64 = 60;

/// Picks the card to present next, or `None` when nothing qualifies; the
/// normal "all caught up" state, not an error.
pub fn select_next(
    candidates: &Candidates,
    now: u64,
    policy: Policy,
    new_first_fallback: bool,
) -> Option<Card> {
    match policy {
        Policy::NewFirst => pick_new(candidates).or_else(|| {
            if new_first_fallback {
                pick_due(candidates, now)
            } else {
                None
            }
        }),
        Policy::ExpiredFirst => pick_due(candidates, now).or_else(|| pick_new(candidates)),
    }
    .cloned()
}

/// Lexicographically smallest filename wins. New cards share the sentinel
/// prefix, so this is the smallest title.
fn pick_new(candidates: &Candidates) -> Option<&Card> {
    candidates.new.iter().min_by(|a, b| a.title.cmp(&b.title))
}

/// Among cards due at `now`, the shortest learn time wins; ties go to the
/// older review, then the smaller title.
fn pick_due(candidates: &Candidates, now: u64) -> Option<&Card> {
    candidates
        .timestamped
        .iter()
        .filter(|card| card.is_due(now))
        .min_by(|a, b| {
            (a.learn_time(), a.sleep, a.title.as_str())
                .cmp(&(b.learn_time(), b.sleep, b.title.as_str()))
        })
}

/// The next wake-up time after a review.
///
/// A first-ever hit bootstraps with a short fixed interval. Later hits
/// stretch the gap since the previous review by a quarter, rounded half-up
/// in whole seconds. A miss always resets to a fixed penalty delay.
pub fn next_awake(outcome: Outcome, now: u64, awake: u64, sleep: u64) -> u64 {
    match outcome {
        Outcome::Miss => now + MISS_DELAY,
        Outcome::Hit if awake == 0 || sleep == 0 => now + FIRST_HIT_DELAY,
        Outcome::Hit => {
            let gap = now.saturating_sub(sleep);
            now + (5 * gap + 2) / 4
        }
    }
}
