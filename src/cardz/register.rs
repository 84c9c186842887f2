//! The active-card register: which single card is out for review right now.
//!
//! Persisted as a one-line marker through the store, so it survives between
//! invocations. The marker is cleared exactly when a review transaction
//! completes; a failed transaction leaves it in place so the user can retry.

use crate::error::Result;
use crate::store::CardStore;

/// Raw marker content, trimmed. `None` when the marker is empty, absent, or
/// unreadable.
pub fn pending<S: CardStore>(store: &S) -> Option<String> {
    store.read_marker().unwrap_or_default()
}

/// The active card, defensively re-derived: a marker naming a file that no
/// longer exists reads as no active card.
pub fn current<S: CardStore>(store: &S) -> Option<String> {
    pending(store).filter(|name| store.exists(name))
}

pub fn assign<S: CardStore>(store: &mut S, name: &str) -> Result<()> {
    store.write_marker(Some(name))
}

pub fn clear<S: CardStore>(store: &mut S) -> Result<()> {
    store.write_marker(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_store_has_no_active_card() {
        let store = InMemoryStore::new();
        assert_eq!(pending(&store), None);
        assert_eq!(current(&store), None);
    }

    #[test]
    fn assign_then_read_back() {
        let mut store = InMemoryStore::new();
        store
            .write_bytes("000000000000-000000000000-A.pdf", b"%PDF")
            .unwrap();
        assign(&mut store, "000000000000-000000000000-A.pdf").unwrap();

        let name = Some("000000000000-000000000000-A.pdf".to_string());
        assert_eq!(pending(&store), name);
        assert_eq!(current(&store), name);
    }

    #[test]
    fn dangling_marker_reads_as_none_but_stays_pending() {
        let mut store = InMemoryStore::new();
        assign(&mut store, "000000000000-000000000000-Gone.pdf").unwrap();

        assert_eq!(current(&store), None);
        assert_eq!(
            pending(&store),
            Some("000000000000-000000000000-Gone.pdf".to_string())
        );
    }

    #[test]
    fn clear_empties_the_marker() {
        let mut store = InMemoryStore::new();
        assign(&mut store, "000000000000-000000000000-A.pdf").unwrap();
        clear(&mut store).unwrap();
        assert_eq!(pending(&store), None);
    }
}
