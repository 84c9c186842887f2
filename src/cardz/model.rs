use crate::codec;

/// A flashcard, decoded from its filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Seconds since the Unix epoch at which the card becomes due again.
    pub awake: u64,
    /// Seconds since the Unix epoch of the last review. `0` = never reviewed.
    pub sleep: u64,
    /// Remaining filename content, `.pdf` suffix included.
    pub title: String,
}

impl Card {
    pub fn new(awake: u64, sleep: u64, title: impl Into<String>) -> Self {
        Self {
            awake,
            sleep,
            title: title.into(),
        }
    }

    /// Never reviewed: both stamps carry the `0` sentinel.
    pub fn is_new(&self) -> bool {
        self.awake == 0 && self.sleep == 0
    }

    /// Due at or before `now`. New cards are not "due", they are waiting to
    /// be seen for the first time.
    pub fn is_due(&self, now: u64) -> bool {
        !self.is_new() && self.awake <= now
    }

    /// How long the card rested between its last review and its wake-up.
    /// Signed: imported stamps may put `sleep` after `awake`.
    pub fn learn_time(&self) -> i64 {
        self.awake as i64 - self.sleep as i64
    }

    /// The filename this card lives under.
    pub fn filename(&self) -> String {
        codec::encode(self.awake, self.sleep, &self.title)
    }
}

/// User-reported result of one review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Hit,
    Miss,
}

/// Which candidate group a query prefers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// New cards first. Whether this falls back to the expired search is a
    /// config choice, see [`crate::config::CardzConfig`].
    NewFirst,
    /// Due cards first, most mature resting interval last; falls back to a
    /// new card when nothing is due.
    ExpiredFirst,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_pair_is_new() {
        assert!(Card::new(0, 0, "A.pdf").is_new());
        assert!(!Card::new(100, 0, "A.pdf").is_new());
        assert!(!Card::new(0, 100, "A.pdf").is_new());
    }

    #[test]
    fn due_is_awake_at_or_before_now() {
        let card = Card::new(1000, 900, "A.pdf");
        assert!(card.is_due(1000));
        assert!(card.is_due(5000));
        assert!(!card.is_due(999));
    }

    #[test]
    fn new_cards_are_never_due() {
        assert!(!Card::new(0, 0, "A.pdf").is_due(5000));
    }

    #[test]
    fn learn_time_is_signed() {
        assert_eq!(Card::new(1090, 1000, "A.pdf").learn_time(), 90);
        assert_eq!(Card::new(500, 900, "A.pdf").learn_time(), -400);
    }

    #[test]
    fn filename_goes_through_the_codec() {
        let card = Card::new(5090, 5000, "Algebra.pdf");
        assert_eq!(card.filename(), "000000005090-000000005000-Algebra.pdf");
    }
}
