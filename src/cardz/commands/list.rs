use super::helpers::{candidates, plural};
use super::{CmdMessage, CmdResult, ScheduledCard};
use crate::error::Result;
use crate::scan::Candidates;
use crate::store::CardStore;

/// The printable schedule: every timestamped card with its waiting time,
/// soonest wake-up first.
pub fn run<S: CardStore>(store: &S, now: u64) -> Result<CmdResult> {
    let Candidates { new, timestamped } = candidates(store)?;

    let mut listed: Vec<ScheduledCard> = timestamped
        .into_iter()
        .map(|card| ScheduledCard {
            wait: card.awake as i64 - now as i64,
            card,
        })
        .collect();
    listed.sort_by(|a, b| {
        (a.card.awake, a.card.sleep, a.card.title.as_str())
            .cmp(&(b.card.awake, b.card.sleep, b.card.title.as_str()))
    });

    let mut result = CmdResult::default().with_listed(listed);
    if result.listed.is_empty() {
        result.add_message(CmdMessage::info("No timestamped cards."));
    }
    if !new.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "{} new card{} waiting",
            new.len(),
            plural(new.len())
        )));
    }
    Ok(result)
}
