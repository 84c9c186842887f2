use super::helpers::candidates;
use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Policy;
use crate::register;
use crate::scheduler;
use crate::store::CardStore;

/// Picks the next card per policy and registers it as active. No eligible
/// card is a clean success, not an error.
pub fn run<S: CardStore>(
    store: &mut S,
    policy: Policy,
    new_first_fallback: bool,
    now: u64,
) -> Result<CmdResult> {
    let candidates = candidates(store)?;
    let Some(card) = scheduler::select_next(&candidates, now, policy, new_first_fallback) else {
        let mut result = CmdResult::default();
        let content = match policy {
            Policy::NewFirst if !new_first_fallback => "No new cards.",
            _ => "All caught up, nothing is due.",
        };
        result.add_message(CmdMessage::info(content));
        return Ok(result);
    };

    register::assign(store, &card.filename())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Up next: {}", card.title)));
    Ok(result.with_selected(card))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn sentinel_only_directory_selects_lexicographically_smallest() {
        let mut fixture = StoreFixture::new()
            .with_new_card("Zeta.pdf")
            .with_new_card("Algebra.pdf");

        let result = run(&mut fixture.store, Policy::ExpiredFirst, false, 5000).unwrap();
        assert_eq!(result.selected.unwrap().title, "Algebra.pdf");
    }

    #[test]
    fn selection_registers_the_card() {
        let mut fixture = StoreFixture::new().with_new_card("Algebra.pdf");

        run(&mut fixture.store, Policy::ExpiredFirst, false, 5000).unwrap();
        assert_eq!(
            register::current(&fixture.store),
            Some("000000000000-000000000000-Algebra.pdf".to_string())
        );
    }

    #[test]
    fn due_card_beats_new_card_under_expired_first() {
        let mut fixture = StoreFixture::new()
            .with_new_card("Fresh.pdf")
            .with_scheduled_card(900, 850, "Due.pdf");

        let result = run(&mut fixture.store, Policy::ExpiredFirst, false, 1000).unwrap();
        assert_eq!(result.selected.unwrap().title, "Due.pdf");
    }

    #[test]
    fn future_only_directory_is_all_caught_up() {
        let mut fixture = StoreFixture::new().with_scheduled_card(9000, 850, "Future.pdf");

        let result = run(&mut fixture.store, Policy::ExpiredFirst, false, 1000).unwrap();
        assert!(result.selected.is_none());
        assert!(result.messages[0].content.contains("caught up"));
        assert_eq!(register::current(&fixture.store), None);
    }

    #[test]
    fn narrowed_new_first_reports_no_new_cards() {
        let mut fixture = StoreFixture::new().with_scheduled_card(900, 850, "Due.pdf");

        let result = run(&mut fixture.store, Policy::NewFirst, false, 1000).unwrap();
        assert!(result.selected.is_none());
        assert!(result.messages[0].content.contains("No new cards"));
    }

    #[test]
    fn new_first_fallback_takes_the_due_card() {
        let mut fixture = StoreFixture::new().with_scheduled_card(900, 850, "Due.pdf");

        let result = run(&mut fixture.store, Policy::NewFirst, true, 1000).unwrap();
        assert_eq!(result.selected.unwrap().title, "Due.pdf");
    }

    #[test]
    fn requery_overwrites_the_register() {
        let mut fixture = StoreFixture::new()
            .with_new_card("Algebra.pdf")
            .with_scheduled_card(900, 850, "Due.pdf");

        run(&mut fixture.store, Policy::NewFirst, false, 1000).unwrap();
        run(&mut fixture.store, Policy::ExpiredFirst, false, 1000).unwrap();
        assert_eq!(
            register::current(&fixture.store),
            Some("000000000900-000000000850-Due.pdf".to_string())
        );
    }
}
