use super::{CmdResult, ReviewReport};
use crate::codec;
use crate::error::{CardzError, Result};
use crate::model::{Card, Outcome};
use crate::register;
use crate::scheduler;
use crate::store::CardStore;

/// The hit/miss transaction: one rename moves the active card to its next
/// schedule slot, then the register is cleared. Any failure leaves both the
/// file and the register untouched, so the user can retry.
pub fn run<S: CardStore>(store: &mut S, outcome: Outcome, now: u64) -> Result<CmdResult> {
    let active = register::pending(store).ok_or(CardzError::NoActiveCard)?;
    if !store.exists(&active) {
        return Err(CardzError::MissingFile(active));
    }

    let card = codec::decode(&active)?;
    let new_awake = scheduler::next_awake(outcome, now, card.awake, card.sleep);
    let target = codec::encode(new_awake, now, &card.title);

    // Identical target happens when the same outcome lands twice within one
    // second; the state already encodes it, so only the register changes.
    if target != active {
        if store.exists(&target) {
            return Err(CardzError::Collision(target));
        }
        store
            .rename(&active, &target)
            .map_err(|_| CardzError::Rename(active.clone()))?;
        if store.exists(&active) {
            return Err(CardzError::Rename(active));
        }
    }

    register::clear(store)?;

    let report = ReviewReport {
        outcome,
        card: Card::new(new_awake, now, card.title),
        elapsed: (card.sleep != 0).then(|| now.saturating_sub(card.sleep)),
    };
    Ok(CmdResult::default().with_review(report))
}
