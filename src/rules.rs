//! Move legality: the pure predicate deciding whether one card may be
//! placed on another.
//!
//! `legal_move` never mutates anything and is keyed on the destination
//! pile's kind: columns build downward in alternating colors (with the
//! empty-column King rule), foundations build upward in one suit (with
//! the empty-foundation Ace rule), and every other destination is
//! illegal. The click pipeline keeps non-interactable cards out, but
//! the predicate re-checks those preconditions defensively so it is
//! safe to call with any pair of live card ids.

use crate::card::{is_next_same_suit, is_one_lower_opposite_color, Card, CardId, Rank};
use crate::pile::PileKind;
use crate::tableau::{PileId, Tableau};

/// True if the card `source` may legally be moved onto `target`.
///
/// `target` is the card the player clicked; it must be the live top of
/// its pile (for columns this is what makes mid-pile drops illegal, for
/// foundations it rules out buried foundation cards). A placeholder can
/// never be the moving card.
pub fn legal_move(tab: &Tableau, source: CardId, target: CardId) -> bool {
    let (Some(src_pile), Some(dst_pile)) = (tab.locate(source), tab.locate(target)) else {
        return false;
    };
    let Some(&src_card) = tab.card(source) else {
        return false;
    };

    if src_card.is_placeholder() || !src_card.is_face_up() {
        return false;
    }
    // Only the window top of the visible waste is playable, and only a
    // foundation's top card may leave it.
    if matches!(src_pile, PileId::VisibleWaste | PileId::Foundation(_))
        && !is_pile_top(tab, src_pile, source)
    {
        return false;
    }

    match tab.pile(dst_pile).kind() {
        PileKind::Column => {
            let Some(&dst_top) = tab.pile(dst_pile).top() else {
                return false;
            };
            if dst_top.id() != target {
                // Clicked card is buried; not a drop target.
                return false;
            }
            fits_on_column(src_card, dst_top)
        }
        PileKind::Foundation => {
            // Runs cannot move to a foundation: the moving card must be
            // the top of its own pile.
            if !is_pile_top(tab, src_pile, source) {
                return false;
            }
            let Some(&dst_top) = tab.pile(dst_pile).top() else {
                return false;
            };
            if dst_top.id() != target {
                return false;
            }
            fits_on_foundation(src_card, dst_top)
        }
        PileKind::Deck | PileKind::Waste | PileKind::VisibleWaste => false,
    }
}

/// True if `id` is the top card of the pile named by `pid`.
#[inline]
fn is_pile_top(tab: &Tableau, pid: PileId, id: CardId) -> bool {
    tab.pile(pid).top().map(|c| c.id()) == Some(id)
}

/// Column placement rule: a King may land on an empty column's
/// placeholder; otherwise the card must be one rank lower than, and of
/// the opposite color to, the current top.
#[inline]
fn fits_on_column(card: Card, top: Card) -> bool {
    if top.is_placeholder() {
        return card.rank() == Some(Rank::King);
    }
    is_one_lower_opposite_color(card, top)
}

/// Foundation placement rule: an Ace may land on an empty foundation's
/// placeholder; otherwise the card must be the next rank up in the same
/// suit.
#[inline]
fn fits_on_foundation(card: Card, top: Card) -> bool {
    if top.is_placeholder() {
        return card.rank() == Some(Rank::Ace);
    }
    is_next_same_suit(card, top)
}
