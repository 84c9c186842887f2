use super::helpers::plural;
use super::{CmdMessage, CmdResult};
use crate::codec;
use crate::error::Result;
use crate::store::CardStore;

/// Stamps the sentinel pair onto every depth-1 PDF that is not a card yet.
/// An occupied target name is a warning, not a failure; the loop finishes.
pub fn run<S: CardStore>(store: &mut S) -> Result<CmdResult> {
    let mut names = store.list()?;
    names.sort();

    let mut result = CmdResult::default();
    let mut stamped = 0;
    for name in names {
        if !codec::is_pdf(&name) || codec::decode(&name).is_ok() {
            continue;
        }
        let target = codec::encode(0, 0, &name);
        if store.exists(&target) {
            result.add_message(CmdMessage::warning(format!(
                "Already exists, skipping: {}",
                target
            )));
            continue;
        }
        store.rename(&name, &target)?;
        result.add_message(CmdMessage::info(format!("Stamped: {}", name)));
        stamped += 1;
    }

    result.add_message(CmdMessage::success(format!(
        "{} card{} stamped",
        stamped,
        plural(stamped)
    )));
    Ok(result)
}
