//! The move executor: applies a validated move to the tableau.
//
//! Exactly one of three transfer shapes applies to any legal
//! (source, destination) pair, and each runs to completion or not at
//! all:
//!   * single card from the visible waste or a foundation onto a
//!     column or foundation,
//!   * single card from a column onto a foundation,
//!   * a multi-card face-up run between two columns.
//!
//! The executor owns the reveal/placeholder bookkeeping: a destination
//! placeholder is retired the moment a real card lands, an emptied
//! column or foundation gets a fresh placeholder, and a column that
//! loses its face-up run flips its newly exposed card face-up.
//!
//! Legality is the validator's job; calling this with an unvalidated
//! pair is a contract violation. The executor guards each shape with
//! defensive early returns rather than panicking.

use log::debug;

use crate::card::CardId;
use crate::tableau::{PileId, Tableau};

/// Apply the validated move of `source` onto `target`, mutating the
/// tableau in place.
///
/// Callers must have established `rules::legal_move(tab, source,
/// target)` first; this function does not re-check legality. It also
/// does not rebalance the visible waste; the click pipeline does that
/// after every mutation.
pub fn apply_move(tab: &mut Tableau, source: CardId, target: CardId) {
    let (Some(src_pile), Some(dst_pile)) = (tab.locate(source), tab.locate(target)) else {
        debug_assert!(false, "apply_move called with unknown card ids");
        return;
    };

    match (src_pile, dst_pile) {
        // Single card off the visible waste or a foundation top.
        (
            PileId::VisibleWaste | PileId::Foundation(_),
            PileId::Column(_) | PileId::Foundation(_),
        ) => {
            retire_placeholder_top(tab, dst_pile);
            let Some(card) = tab.pile_mut(src_pile).pop() else {
                debug_assert!(false, "validated source pile is empty");
                return;
            };
            debug!("move {} from {:?} to {:?}", card.short_str(), src_pile, dst_pile);
            tab.pile_mut(dst_pile).push(card);

            // A foundation emptied by moving its last card away gets
            // its placeholder back.
            if matches!(src_pile, PileId::Foundation(_)) && tab.pile(src_pile).is_empty() {
                let p = tab.new_placeholder();
                tab.pile_mut(src_pile).push(p);
            }
        }

        // Single card from a column top to a foundation.
        (PileId::Column(_), PileId::Foundation(_)) => {
            retire_placeholder_top(tab, dst_pile);
            let Some(card) = tab.pile_mut(src_pile).pop() else {
                debug_assert!(false, "validated source column is empty");
                return;
            };
            debug!("move {} from {:?} to {:?}", card.short_str(), src_pile, dst_pile);
            tab.pile_mut(dst_pile).push(card);
            restore_column_after_removal(tab, src_pile);
        }

        // A face-up run between two columns, `source` being the run's
        // bottom card. The run above it is internally well-ordered by
        // the column invariant, so only the bottom card was validated.
        (PileId::Column(_), PileId::Column(_)) => {
            let Some(start) = tab.pile(src_pile).index_of(source) else {
                debug_assert!(false, "validated source left its column");
                return;
            };
            retire_placeholder_top(tab, dst_pile);
            let run = tab.pile_mut(src_pile).split_off(start);
            debug!(
                "move run of {} from {:?} to {:?}",
                run.len(),
                src_pile,
                dst_pile
            );
            tab.pile_mut(dst_pile).extend(run);
            restore_column_after_removal(tab, src_pile);
        }

        _ => {
            debug_assert!(false, "no transfer shape for {:?} -> {:?}", src_pile, dst_pile);
        }
    }
}

/// Retire the destination's placeholder, if that is what currently
/// tops it, so the arriving card replaces it.
fn retire_placeholder_top(tab: &mut Tableau, pid: PileId) {
    if tab
        .pile(pid)
        .top()
        .is_some_and(|card| card.is_placeholder())
    {
        tab.pile_mut(pid).pop();
    }
}

/// After removing cards from a column top: insert a placeholder if the
/// column emptied, otherwise reveal the newly exposed top card.
fn restore_column_after_removal(tab: &mut Tableau, col: PileId) {
    if tab.pile(col).is_empty() {
        let p = tab.new_placeholder();
        tab.pile_mut(col).push(p);
    } else if let Some(top) = tab.pile_mut(col).top_mut() {
        top.show();
    }
}
