use crate::error::Result;
use crate::scan::Candidates;
use crate::store::CardStore;

/// Scan the store into candidate groups.
pub fn candidates<S: CardStore>(store: &S) -> Result<Candidates> {
    Ok(Candidates::partition(store.list()?))
}

pub fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
