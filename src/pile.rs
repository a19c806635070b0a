//! The pile abstraction: an ordered, LIFO-accessible card sequence
//! tagged with one of the five roles it plays on the table.
//!
//! Cards are stored bottom-to-top: index 0 is the oldest/bottom card and
//! the last element is the pile top (most recently added). The visible
//! waste window and the deck recycle path additionally need access to
//! the *bottom* end, so the pile exposes both-end operations; which end
//! a given role uses is the tableau's business.

use crate::card::{Card, CardId};

/// The role a pile plays on the table.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PileKind {
    /// Face-down draw source.
    Deck,
    /// Drawn cards pushed out of the visible window.
    Waste,
    /// The up-to-3-card sliding window of currently drawable cards.
    VisibleWaste,
    /// One of the seven tableau columns.
    Column,
    /// One of the four suit foundations.
    Foundation,
}

/// An ordered sequence of cards with a role tag.
#[derive(Clone, Debug)]
pub struct Pile {
    kind: PileKind,
    cards: Vec<Card>,
}

impl Pile {
    /// Create an empty pile with the given role.
    pub fn new(kind: PileKind) -> Self {
        Pile {
            kind,
            cards: Vec::new(),
        }
    }

    /// The role this pile plays.
    #[inline]
    pub fn kind(&self) -> PileKind {
        self.kind
    }

    /// Number of cards currently in the pile.
    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if the pile holds no cards at all (not even a placeholder).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The pile's cards, bottom-to-top.
    #[inline]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The top card (most recently added), if any.
    #[inline]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Mutable access to the top card, if any.
    #[inline]
    pub(crate) fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    /// The bottom card (oldest), if any.
    #[inline]
    pub fn bottom(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Add a card on top.
    #[inline]
    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the top card.
    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove and return the bottom (oldest) card.
    pub(crate) fn take_bottom(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Insert a card at the bottom (oldest position).
    pub(crate) fn insert_bottom(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Remove every card, returning them bottom-to-top.
    pub(crate) fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Position of the card with the given id, bottom-based.
    #[inline]
    pub fn index_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == id)
    }

    /// True if the pile contains the card with the given id.
    #[inline]
    pub fn contains(&self, id: CardId) -> bool {
        self.index_of(id).is_some()
    }

    /// Split off the cards at positions `at..`, preserving their order.
    /// Used for multi-card run transfers between columns.
    pub(crate) fn split_off(&mut self, at: usize) -> Vec<Card> {
        self.cards.split_off(at)
    }

    /// Append a run of cards on top, preserving their order.
    pub(crate) fn extend(&mut self, run: Vec<Card>) {
        self.cards.extend(run);
    }

    /// Mutable card access for face flips below the top.
    #[inline]
    pub(crate) fn card_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }
}
