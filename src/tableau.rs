//! The full table layout: deck, waste, visible waste, seven columns,
//! four foundations.
//
//! `Tableau` owns every card in a game and is the only place cards are
//! created: the 52 real cards come into being during `deal`, and the
//! synthetic placeholders are allocated here whenever a pile transitions
//! to empty. Cards only ever relocate between piles afterwards.
//!
//! This module also implements the deck/waste cycler: the draw-up-to-3
//! and recycle-when-exhausted automaton plus the visible-waste rebalance
//! loop that maintains the rolling 3-card window.

use log::debug;

use crate::card::{Card, CardId};
use crate::decks::{validate_order, DeckOrder};
use crate::pile::{Pile, PileKind};

/// Number of tableau columns.
pub const NUM_COLS: usize = 7;
/// Number of suit foundations.
pub const NUM_FOUNDATIONS: usize = 4;
/// Maximum size of the visible-waste window.
pub const VISIBLE_WASTE_MAX: usize = 3;
/// Cards consumed by the initial column deal: 1 + 2 + ... + 7.
const COLUMN_DEAL_CARDS: usize = NUM_COLS * (NUM_COLS + 1) / 2;
/// Cards drawn per deck click.
const CARDS_PER_DRAW: usize = 3;

/// Which pile a card currently sits in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PileId {
    Deck,
    Waste,
    VisibleWaste,
    Column(usize),
    Foundation(usize),
}

/// The complete layout of one game.
#[derive(Clone, Debug)]
pub struct Tableau {
    deck: Pile,
    waste: Pile,
    visible_waste: Pile,
    columns: [Pile; NUM_COLS],
    foundations: [Pile; NUM_FOUNDATIONS],
    /// Next id to hand to a placeholder; starts past the 52 real cards.
    next_placeholder_id: u32,
}

impl Tableau {
    /// Deal a fresh game from the given deck order.
    ///
    /// Positions 0..28 populate the columns: column `i` receives `i`
    /// face-down cards and then one face-up top card. Positions 28..52
    /// become the draw pile, drawn front-first. Each foundation starts
    /// as a single placeholder; columns and deck start without any.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `order` is not a valid permutation.
    pub fn deal(order: &DeckOrder) -> Self {
        debug_assert!(validate_order(order).is_ok());

        let mut tab = Tableau {
            deck: Pile::new(PileKind::Deck),
            waste: Pile::new(PileKind::Waste),
            visible_waste: Pile::new(PileKind::VisibleWaste),
            columns: std::array::from_fn(|_| Pile::new(PileKind::Column)),
            foundations: std::array::from_fn(|_| Pile::new(PileKind::Foundation)),
            next_placeholder_id: crate::card::CARDS_PER_DECK as u32,
        };

        let mut cursor = 0usize;
        for (i, column) in tab.columns.iter_mut().enumerate() {
            for _ in 0..i {
                // Face-down base cards.
                column.push(Card::from_code(order[cursor]));
                cursor += 1;
            }
            let mut top = Card::from_code(order[cursor]);
            cursor += 1;
            top.show();
            column.push(top);
        }
        debug_assert_eq!(cursor, COLUMN_DEAL_CARDS);

        // The draw pile stores its next card to draw on top, so the
        // remaining deal positions are pushed in reverse.
        for &code in order[COLUMN_DEAL_CARDS..].iter().rev() {
            tab.deck.push(Card::from_code(code));
        }

        for foundation in tab.foundations.iter_mut() {
            let id = tab.next_placeholder_id;
            tab.next_placeholder_id += 1;
            foundation.push(Card::placeholder(CardId(id)));
        }

        tab
    }

    /// Allocate a fresh placeholder card.
    pub(crate) fn new_placeholder(&mut self) -> Card {
        let id = self.next_placeholder_id;
        self.next_placeholder_id += 1;
        Card::placeholder(CardId(id))
    }

    // ----- Pile access -----

    /// Borrow the pile named by `id`.
    pub fn pile(&self, id: PileId) -> &Pile {
        match id {
            PileId::Deck => &self.deck,
            PileId::Waste => &self.waste,
            PileId::VisibleWaste => &self.visible_waste,
            PileId::Column(i) => &self.columns[i],
            PileId::Foundation(i) => &self.foundations[i],
        }
    }

    /// Mutably borrow the pile named by `id`.
    pub(crate) fn pile_mut(&mut self, id: PileId) -> &mut Pile {
        match id {
            PileId::Deck => &mut self.deck,
            PileId::Waste => &mut self.waste,
            PileId::VisibleWaste => &mut self.visible_waste,
            PileId::Column(i) => &mut self.columns[i],
            PileId::Foundation(i) => &mut self.foundations[i],
        }
    }

    /// Every pile id on the table, in a fixed lookup order.
    fn all_pile_ids() -> impl Iterator<Item = PileId> {
        [PileId::Deck, PileId::Waste, PileId::VisibleWaste]
            .into_iter()
            .chain((0..NUM_COLS).map(PileId::Column))
            .chain((0..NUM_FOUNDATIONS).map(PileId::Foundation))
    }

    /// Find which pile holds the card with the given id.
    ///
    /// Every card created for this game is always in exactly one pile,
    /// so `None` means the id belongs to no card of this game (or to a
    /// placeholder that has since been retired).
    pub fn locate(&self, id: CardId) -> Option<PileId> {
        Self::all_pile_ids().find(|&pid| self.pile(pid).contains(id))
    }

    /// Borrow the card with the given id, wherever it sits.
    pub fn card(&self, id: CardId) -> Option<&Card> {
        let pid = self.locate(id)?;
        let pile = self.pile(pid);
        pile.index_of(id).and_then(|i| pile.cards().get(i))
    }

    // ----- Read accessors for the presentation layer -----

    /// The deck's top card (the next to draw, or the placeholder when
    /// the deck is exhausted).
    pub fn deck_top(&self) -> Option<&Card> {
        self.deck.top()
    }

    /// Waste contents, oldest first.
    pub fn waste_cards(&self) -> &[Card] {
        self.waste.cards()
    }

    /// Visible-waste contents, oldest first; the last card is the only
    /// interactable one.
    pub fn visible_waste_cards(&self) -> &[Card] {
        self.visible_waste.cards()
    }

    /// Contents of column `i` (0..7), bottom first.
    pub fn column_cards(&self, i: usize) -> &[Card] {
        self.columns[i].cards()
    }

    /// Top card of foundation `i` (0..4): the highest card placed so
    /// far, or the placeholder while the foundation is empty.
    pub fn foundation_top(&self, i: usize) -> Option<&Card> {
        self.foundations[i].top()
    }

    // ----- Deck/waste cycler -----

    /// Handle a click on the deck: draw up to 3 cards, or recycle the
    /// waste when the deck is exhausted. Leaves the visible-waste
    /// window rebalanced.
    pub(crate) fn draw_or_recycle(&mut self) {
        let exhausted = self
            .deck
            .top()
            .is_none_or(|top| top.is_placeholder());

        if exhausted {
            self.recycle();
        } else {
            self.draw();
        }

        // The deck must always expose a defined top.
        if self.deck.is_empty() {
            let p = self.new_placeholder();
            self.deck.push(p);
        }

        self.rebalance_visible_waste();
    }

    /// Move up to 3 cards from the deck top into the visible waste,
    /// face-up, most recent on top. Inserts the deck placeholder the
    /// moment the deck empties mid-draw.
    fn draw(&mut self) {
        let mut moved = 0;
        while moved < CARDS_PER_DRAW {
            match self.deck.top() {
                Some(top) if !top.is_placeholder() => {}
                _ => break,
            }
            let mut card = self
                .deck
                .pop()
                .expect("deck top was just inspected");
            card.show();
            debug!("draw: {} into visible waste", card.short_str());
            self.visible_waste.push(card);
            moved += 1;

            if self.deck.is_empty() {
                let p = self.new_placeholder();
                self.deck.push(p);
            }
        }
    }

    /// Return all Waste and VisibleWaste cards to the deck, face-down,
    /// preserving relative order so a subsequent full pass reproduces
    /// the original draw order. The deck's placeholder is discarded
    /// first and re-created only in the degenerate case where no cards
    /// remain to recycle.
    fn recycle(&mut self) {
        // The exhausted deck holds only its placeholder; retire it.
        self.deck.take_all();

        // Waste accumulates in draw order (oldest drawn at the bottom),
        // and the visible window continues that order, so concatenating
        // bottom-to-top yields the original draw order.
        let mut returned = self.waste.take_all();
        returned.extend(self.visible_waste.take_all());
        debug!("recycle: {} cards back into deck", returned.len());

        // The draw pile stores its next card on top, so push in reverse.
        for mut card in returned.into_iter().rev() {
            card.hide();
            self.deck.push(card);
        }
    }

    /// Restore the visible-waste window invariant: at most 3 cards, all
    /// face-up, refilled from the waste when possible.
    ///
    /// A bounded loop in both directions: overflow pushes the oldest
    /// visible card back to the waste face-down; underflow pulls the
    /// waste's most recent card in as the new oldest-visible, face-up.
    pub(crate) fn rebalance_visible_waste(&mut self) {
        while self.visible_waste.len() > VISIBLE_WASTE_MAX {
            let Some(mut card) = self.visible_waste.take_bottom() else {
                break;
            };
            card.hide();
            self.waste.push(card);
        }
        while self.visible_waste.len() < VISIBLE_WASTE_MAX {
            let Some(mut card) = self.waste.pop() else {
                break;
            };
            card.show();
            self.visible_waste.insert_bottom(card);
        }
    }

    // ----- Consistency checking -----

    /// Walk every structural invariant of the layout and report the
    /// first violation found.
    ///
    /// This is a debugging aid: no sequence of public-API calls should
    /// ever make it fail, and the test suite runs it after every
    /// mutation it performs.
    pub fn check_invariants(&self) -> Result<(), String> {
        // 1. The 52 real cards are partitioned across the piles with no
        //    duplication or loss, and no card id appears twice.
        let mut real_seen = [false; crate::decks::DECK_LEN];
        let mut placeholder_ids: Vec<u32> = Vec::new();
        for pid in Self::all_pile_ids() {
            for card in self.pile(pid).cards() {
                if card.is_placeholder() {
                    let raw = card.id().0;
                    if placeholder_ids.contains(&raw) {
                        return Err(format!("placeholder id {} duplicated", raw));
                    }
                    placeholder_ids.push(raw);
                    continue;
                }
                let idx = card.id().0 as usize;
                if idx >= real_seen.len() {
                    return Err(format!("real card id {} out of range", idx));
                }
                if real_seen[idx] {
                    return Err(format!(
                        "card {} appears in more than one place",
                        card.short_str()
                    ));
                }
                real_seen[idx] = true;
            }
        }
        if let Some(missing) = real_seen.iter().position(|&seen| !seen) {
            return Err(format!("card id {} missing from every pile", missing));
        }

        // 2. Visible waste: window size and face state.
        if self.visible_waste.len() > VISIBLE_WASTE_MAX {
            return Err(format!(
                "visible waste holds {} cards",
                self.visible_waste.len()
            ));
        }
        for card in self.visible_waste.cards() {
            if card.is_placeholder() {
                return Err("placeholder in visible waste".to_string());
            }
            if !card.is_face_up() {
                return Err(format!(
                    "face-down card {} in visible waste",
                    card.short_str()
                ));
            }
        }
        for card in self.waste.cards() {
            if card.is_placeholder() {
                return Err("placeholder in waste".to_string());
            }
        }

        // 3. Columns: a single placeholder, or face-down base cards with
        //    one contiguous face-up run on top.
        for (i, column) in self.columns.iter().enumerate() {
            let cards = column.cards();
            if cards.is_empty() {
                return Err(format!("column {} is empty without a placeholder", i));
            }
            if cards.iter().any(|c| c.is_placeholder()) {
                if cards.len() != 1 {
                    return Err(format!(
                        "column {} mixes a placeholder with other cards",
                        i
                    ));
                }
                continue;
            }
            let mut seen_face_up = false;
            for card in cards {
                if card.is_face_up() {
                    seen_face_up = true;
                } else if seen_face_up {
                    return Err(format!(
                        "column {} has face-down card above a face-up one",
                        i
                    ));
                }
            }
            if !cards.is_empty() && !seen_face_up {
                return Err(format!("column {} has no face-up top card", i));
            }
        }

        // 4. Foundations: a single placeholder, or an ascending same-suit
        //    run starting at the Ace.
        for (i, foundation) in self.foundations.iter().enumerate() {
            let cards = foundation.cards();
            if cards.is_empty() {
                return Err(format!("foundation {} has no top at all", i));
            }
            if cards.iter().any(|c| c.is_placeholder()) {
                if cards.len() != 1 {
                    return Err(format!(
                        "foundation {} mixes a placeholder with cards",
                        i
                    ));
                }
                continue;
            }
            let suit = cards[0].suit();
            for (height, card) in cards.iter().enumerate() {
                if card.suit() != suit {
                    return Err(format!("foundation {} mixes suits", i));
                }
                if card.rank_number() != Some(height as u8 + 1) {
                    return Err(format!(
                        "foundation {} is not an ascending Ace-up run",
                        i
                    ));
                }
            }
        }

        // 5. Deck: all real cards face-down, or exactly one placeholder.
        let deck_cards = self.deck.cards();
        if deck_cards.is_empty() {
            return Err("deck has no top at all".to_string());
        }
        if deck_cards.iter().any(|c| c.is_placeholder()) && deck_cards.len() != 1 {
            return Err("deck mixes a placeholder with real cards".to_string());
        }
        for card in deck_cards {
            if !card.is_placeholder() && card.is_face_up() {
                return Err(format!("face-up card {} in deck", card.short_str()));
            }
        }

        Ok(())
    }
}
