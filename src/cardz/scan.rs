//! Partition a directory listing into review candidates.

use crate::codec;
use crate::model::Card;

/// The two disjoint candidate groups a query chooses from.
///
/// Names that do not match the card grammar are not flashcards and are
/// skipped without comment; the marker file, the config file, and whatever
/// else lives next to the cards never show up here.
#[derive(Debug, Default)]
pub struct Candidates {
    /// Cards carrying the `0/0` sentinel pair, never reviewed.
    pub new: Vec<Card>,
    /// Everything else with a valid stamp pair.
    pub timestamped: Vec<Card>,
}

impl Candidates {
    pub fn partition<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut candidates = Candidates::default();
        for name in names {
            if let Ok(card) = codec::decode(name.as_ref()) {
                if card.is_new() {
                    candidates.new.push(card);
                } else {
                    candidates.timestamped.push(card);
                }
            }
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_new_from_timestamped() {
        let candidates = Candidates::partition([
            "000000000000-000000000000-Fresh.pdf",
            "000000001090-000000001000-Seen.pdf",
        ]);
        assert_eq!(candidates.new.len(), 1);
        assert_eq!(candidates.new[0].title, "Fresh.pdf");
        assert_eq!(candidates.timestamped.len(), 1);
        assert_eq!(candidates.timestamped[0].title, "Seen.pdf");
    }

    #[test]
    fn half_sentinel_counts_as_timestamped() {
        let candidates = Candidates::partition(["000000001090-000000000000-Once.pdf"]);
        assert!(candidates.new.is_empty());
        assert_eq!(candidates.timestamped.len(), 1);
    }

    #[test]
    fn malformed_names_are_silently_skipped() {
        let candidates = Candidates::partition([
            "Algebra.pdf",
            ".cardz-active",
            "notes.txt",
            "00000000000x-000000000000-Bad.pdf",
            "000000000000-000000000000-Good.pdf",
        ]);
        assert_eq!(candidates.new.len(), 1);
        assert!(candidates.timestamped.is_empty());
    }

    #[test]
    fn empty_listing_gives_empty_groups() {
        let candidates = Candidates::partition(Vec::<String>::new());
        assert!(candidates.new.is_empty());
        assert!(candidates.timestamped.is_empty());
    }
}
