use super::helpers::plural;
use super::{CmdMessage, CmdResult};
use crate::codec;
use crate::error::Result;
use crate::store::CardStore;

/// Strips the stamp prefix from every card, restoring bare titles. The
/// schedule is gone afterwards; this is the undo of `add`.
pub fn run<S: CardStore>(store: &mut S) -> Result<CmdResult> {
    let mut names = store.list()?;
    names.sort();

    let mut result = CmdResult::default();
    let mut stripped = 0;
    for name in names {
        let Ok(card) = codec::decode(&name) else {
            continue;
        };
        if store.exists(&card.title) {
            result.add_message(CmdMessage::warning(format!(
                "Already exists, skipping: {}",
                card.title
            )));
            continue;
        }
        store.rename(&name, &card.title)?;
        result.add_message(CmdMessage::info(format!("Restored: {}", card.title)));
        stripped += 1;
    }

    result.add_message(CmdMessage::success(format!(
        "{} card{} restored",
        stripped,
        plural(stripped)
    )));
    Ok(result)
}
