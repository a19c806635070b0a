//! Game-level state: the tableau plus the click-driven selection
//! protocol.
//
//! `Game` is the single value the event-handling layer owns: one
//! tableau and one nullable "currently chosen card". Every interaction
//! funnels through `click`, which resolves to a draw, a selection
//! change, or a validated-and-executed move; there is no other mutation
//! path, so the structural invariants of the tableau hold at every
//! point an outside observer can read the state.
//!
//! Illegal moves and non-interactable cards are ordinary inputs, not
//! errors: they resolve to a no-op or a selection change, and `click`
//! never fails.

use log::{debug, info};

use crate::card::{Card, CardId, Rank};
use crate::decks::DeckOrder;
use crate::moves::apply_move;
use crate::rules::legal_move;
use crate::tableau::{PileId, Tableau, NUM_FOUNDATIONS};

/// One game: the full layout plus the current selection.
#[derive(Clone, Debug)]
pub struct Game {
    tableau: Tableau,
    selected: Option<CardId>,
}

impl Game {
    /// Start a game from an explicit deck order.
    pub fn new(order: &DeckOrder) -> Self {
        Game {
            tableau: Tableau::deal(order),
            selected: None,
        }
    }

    /// Start a game from a 32-bit shuffle seed.
    pub fn from_seed(seed: u32) -> Self {
        Game::new(&crate::decks::shuffled_order_from_seed(seed))
    }

    /// The full layout, for rendering.
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    /// The currently chosen card, if any.
    pub fn selected_card(&self) -> Option<&Card> {
        self.selected.and_then(|id| self.tableau.card(id))
    }

    /// True iff every foundation shows a King: the game is won.
    ///
    /// Recomputed on demand; the check is constant-time and mutation is
    /// rare, so nothing is cached.
    pub fn has_won(&self) -> bool {
        (0..NUM_FOUNDATIONS).all(|i| {
            self.tableau
                .foundation_top(i)
                .is_some_and(|c| c.rank() == Some(Rank::King))
        })
    }

    /// Process one click on the card with the given id.
    ///
    /// Resolution order:
    ///   1. A deck card: draw up to 3, or recycle when exhausted; the
    ///      selection clears and no move is attempted.
    ///   2. A face-down card, a buried visible-waste card, or a buried
    ///      foundation card: not interactable; the selection clears.
    ///   3. Nothing selected: a placeholder click is a no-op, anything
    ///      else becomes the selection.
    ///   4. Something selected: a legal pair executes the move; an
    ///      illegal pair redirects the selection to the clicked card
    ///      (or clears it, if that card is a placeholder).
    ///
    /// Ids that name no card of this game resolve as non-interactable.
    pub fn click(&mut self, id: CardId) {
        let Some(pile) = self.tableau.locate(id) else {
            debug!("click: id {:?} is not on the table", id);
            self.selected = None;
            return;
        };

        if pile == PileId::Deck {
            self.selected = None;
            self.tableau.draw_or_recycle();
            return;
        }

        let card = *self
            .tableau
            .card(id)
            .expect("locate() just found this card");

        if !self.is_interactable(pile, &card) {
            self.selected = None;
            return;
        }

        let Some(selected) = self.selected else {
            if card.is_placeholder() {
                // Nothing to pick up from an empty pile.
                return;
            }
            debug!("select {}", card.short_str());
            self.selected = Some(id);
            return;
        };

        if !legal_move(&self.tableau, selected, id) {
            // Redirect the selection in one click instead of forcing an
            // explicit deselect first.
            debug!("illegal move onto {}; reselecting", card.short_str());
            self.selected = if card.is_placeholder() { None } else { Some(id) };
            return;
        }

        apply_move(&mut self.tableau, selected, id);
        self.tableau.rebalance_visible_waste();
        self.selected = None;

        if self.has_won() {
            info!("all four foundations complete");
        }
    }

    /// Whether a (non-deck) card can take part in selection at all.
    fn is_interactable(&self, pile: PileId, card: &Card) -> bool {
        if !card.is_face_up() {
            return false;
        }
        // Only the window top of the visible waste is live, and only a
        // foundation's top card can be picked up or targeted.
        if matches!(pile, PileId::VisibleWaste | PileId::Foundation(_)) {
            return self.tableau.pile(pile).top().map(|c| c.id()) == Some(card.id());
        }
        true
    }

    // ----- Read accessors for the presentation layer -----

    /// The deck's top card (next to draw, or the exhaustion placeholder).
    pub fn deck_top(&self) -> Option<&Card> {
        self.tableau.deck_top()
    }

    /// Waste contents, oldest first.
    pub fn waste_cards(&self) -> &[Card] {
        self.tableau.waste_cards()
    }

    /// Visible-waste contents, oldest first; only the last is live.
    pub fn visible_waste_cards(&self) -> &[Card] {
        self.tableau.visible_waste_cards()
    }

    /// Contents of column `i` (0..7), bottom first.
    pub fn column_cards(&self, i: usize) -> &[Card] {
        self.tableau.column_cards(i)
    }

    /// Top card of foundation `i` (0..4).
    pub fn foundation_top(&self, i: usize) -> Option<&Card> {
        self.tableau.foundation_top(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Suit, NUM_RANKS};
    use crate::decks::standard_order;
    use crate::tableau::NUM_COLS;

    fn code(suit: Suit, rank_idx: u8) -> u8 {
        suit as u8 * NUM_RANKS + rank_idx
    }

    fn force_to_top(game: &mut Game, code: u8, pid: PileId, face_up: bool) {
        let tab = &mut game.tableau;
        let id = CardId(code as u32);
        let from = tab.locate(id).expect("card must exist after a deal");
        let idx = tab.pile(from).index_of(id).unwrap();
        let mut tail = tab.pile_mut(from).split_off(idx);
        let mut card = tail.remove(0);
        tab.pile_mut(from).extend(tail);
        if face_up {
            card.show();
        } else {
            card.hide();
        }
        tab.pile_mut(pid).push(card);
    }

    fn empty_column(game: &mut Game, i: usize) {
        let tab = &mut game.tableau;
        let cards = tab.pile_mut(PileId::Column(i)).take_all();
        for mut card in cards {
            card.hide();
            tab.pile_mut(PileId::Deck).push(card);
        }
        let p = tab.new_placeholder();
        tab.pile_mut(PileId::Column(i)).push(p);
    }

    #[test]
    fn deck_click_draws_and_clears_selection() {
        let mut game = Game::new(&standard_order());

        // Select a column top, then click the deck: the draw happens
        // and the selection is gone.
        let col_top = game.column_cards(6).last().unwrap().id();
        game.click(col_top);
        assert!(game.selected_card().is_some());

        let deck_top = game.deck_top().unwrap().id();
        game.click(deck_top);
        assert!(game.selected_card().is_none());
        assert_eq!(game.visible_waste_cards().len(), 3);
        game.tableau.check_invariants().unwrap();
    }

    #[test]
    fn face_down_and_buried_cards_clear_the_selection() {
        let mut game = Game::new(&standard_order());

        let col_top = game.column_cards(6).last().unwrap().id();
        game.click(col_top);
        assert!(game.selected_card().is_some());

        // A face-down base card is not interactable.
        let hidden = game.column_cards(6)[0].id();
        game.click(hidden);
        assert!(game.selected_card().is_none());

        // A buried visible-waste card is not interactable either.
        game.click(game.deck_top().unwrap().id());
        let buried = game.visible_waste_cards()[0].id();
        game.click(col_top);
        assert!(game.selected_card().is_some());
        game.click(buried);
        assert!(game.selected_card().is_none());
    }

    #[test]
    fn placeholder_click_with_nothing_selected_is_a_no_op() {
        let mut game = Game::new(&standard_order());
        let f_placeholder = game.foundation_top(0).unwrap().id();
        game.click(f_placeholder);
        assert!(game.selected_card().is_none());
        game.tableau.check_invariants().unwrap();
    }

    #[test]
    fn illegal_pair_redirects_the_selection() {
        let mut game = Game::new(&standard_order());

        let first = game.column_cards(5).last().unwrap().id();
        let second = game.column_cards(6).last().unwrap().id();

        game.click(first);
        assert_eq!(game.selected_card().unwrap().id(), first);

        // Standard order: adjacent dealt tops never form a legal pair,
        // so this click redirects the selection.
        assert!(!legal_move(&game.tableau, first, second));
        game.click(second);
        assert_eq!(game.selected_card().unwrap().id(), second);

        // Redirecting onto a placeholder clears instead.
        let f_placeholder = game.foundation_top(1).unwrap().id();
        assert!(!legal_move(&game.tableau, second, f_placeholder));
        game.click(f_placeholder);
        assert!(game.selected_card().is_none());
    }

    #[test]
    fn ace_click_pair_completes_a_foundation_move() {
        // Scenario B: a visible Ace, then the foundation placeholder.
        let mut game = Game::new(&standard_order());

        // The Ace of Hearts is column 0's only card in standard order;
        // fold that column away first so it keeps a placeholder.
        empty_column(&mut game, 0);

        // Put three cards in the window with the Ace on top and one
        // card in the waste so the window can refill.
        let ah = code(Suit::Hearts, 0);
        let parked = code(Suit::Diamonds, 8);
        let filler_a = code(Suit::Diamonds, 9);
        let filler_b = code(Suit::Diamonds, 10);
        force_to_top(&mut game, parked, PileId::Waste, false);
        force_to_top(&mut game, filler_a, PileId::VisibleWaste, true);
        force_to_top(&mut game, filler_b, PileId::VisibleWaste, true);
        force_to_top(&mut game, ah, PileId::VisibleWaste, true);

        game.click(CardId(ah as u32));
        assert_eq!(game.selected_card().unwrap().id(), CardId(ah as u32));

        let f_placeholder = game.foundation_top(0).unwrap().id();
        game.click(f_placeholder);

        assert_eq!(
            game.foundation_top(0).unwrap().id(),
            CardId(ah as u32),
            "the Ace must land on the foundation"
        );
        assert!(game.selected_card().is_none());
        assert_eq!(
            game.visible_waste_cards().len(),
            3,
            "the window refills from the waste"
        );
        assert_eq!(game.waste_cards().len(), 0);
        assert_eq!(
            game.visible_waste_cards()[0].id(),
            CardId(parked as u32),
            "the refilled card enters at the oldest-visible position"
        );
        game.tableau.check_invariants().unwrap();
    }

    #[test]
    fn king_click_pair_fills_an_empty_column() {
        let mut game = Game::new(&standard_order());
        empty_column(&mut game, 0);
        let placeholder = game.column_cards(0)[0].id();

        let ks = code(Suit::Spades, 12);
        force_to_top(&mut game, ks, PileId::Column(3), true);

        game.click(CardId(ks as u32));
        game.click(placeholder);

        assert_eq!(game.column_cards(0).len(), 1);
        assert_eq!(game.column_cards(0)[0].id(), CardId(ks as u32));
        assert!(game.selected_card().is_none());
        assert!(game.column_cards(3).last().unwrap().is_face_up());
        game.tableau.check_invariants().unwrap();
    }

    #[test]
    fn win_requires_all_four_kings_on_top() {
        // Scenario D: build the foundations by surgery and check the
        // detector at the boundary.
        let mut game = Game::new(&standard_order());
        for f in 0..NUM_FOUNDATIONS {
            game.tableau.pile_mut(PileId::Foundation(f)).take_all();
        }
        for (f, suit) in Suit::ALL.iter().enumerate() {
            // Stop one short on the last foundation.
            let highest = if f == NUM_FOUNDATIONS - 1 { 11 } else { 12 };
            for rank_idx in 0..=highest {
                force_to_top(
                    &mut game,
                    code(*suit, rank_idx),
                    PileId::Foundation(f),
                    true,
                );
            }
        }
        assert!(!game.has_won(), "a Queen-topped foundation is not a win");

        force_to_top(
            &mut game,
            code(Suit::Diamonds, 12),
            PileId::Foundation(3),
            true,
        );
        assert!(game.has_won());
    }

    #[test]
    fn unknown_ids_resolve_as_non_interactable() {
        let mut game = Game::new(&standard_order());
        let col_top = game.column_cards(6).last().unwrap().id();
        game.click(col_top);
        assert!(game.selected_card().is_some());

        game.click(CardId(987654));
        assert!(game.selected_card().is_none());
        game.tableau.check_invariants().unwrap();
    }

    /// Drive the public API with a deterministic pseudo-random click
    /// storm and require every structural invariant to survive each
    /// click. The LCG keeps failures reproducible.
    #[test]
    fn click_storm_preserves_every_invariant() {
        fn lcg(state: &mut u32) -> u32 {
            *state = state
                .wrapping_mul(1664525)
                .wrapping_add(1013904223);
            *state
        }

        for seed in [1_u32, 42, 2025] {
            let mut game = Game::from_seed(seed);
            let mut state = seed ^ 0xdead_beef;

            for step in 0..400 {
                // Gather every card currently on the table.
                let mut ids: Vec<CardId> = Vec::with_capacity(56);
                ids.extend(game.deck_top().map(|c| c.id()));
                ids.extend(game.visible_waste_cards().iter().map(|c| c.id()));
                ids.extend(game.waste_cards().iter().map(|c| c.id()));
                for i in 0..NUM_COLS {
                    ids.extend(game.column_cards(i).iter().map(|c| c.id()));
                }
                for i in 0..NUM_FOUNDATIONS {
                    ids.extend(game.foundation_top(i).map(|c| c.id()));
                }

                let pick = ids[(lcg(&mut state) as usize) % ids.len()];
                game.click(pick);

                if let Err(msg) = game.tableau.check_invariants() {
                    panic!(
                        "seed {} step {}: invariant broken after clicking {:?}: {}",
                        seed, step, pick, msg
                    );
                }

                // The selection, when present, is a live face-up card.
                if let Some(card) = game.selected_card() {
                    assert!(card.is_face_up());
                    assert!(!card.is_placeholder());
                }
            }
        }
    }
}
