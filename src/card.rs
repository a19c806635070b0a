//! Card, Suit, Rank, and Color types for a standard 52-card deck,
//! plus the placeholder cards that mark empty piles.
//!
//! - Every physical card carries a unique `CardId`; card equality is
//!   identity equality only, so no two cards ever compare equal.
//! - Real cards with ids 0..=51 use the compact mapping
//!   `id = suit as u32 * 13 + rank index`.
//! - Placeholder cards are synthetic "empty pile" markers with ids
//!   handed out by the tableau; they have no rank, suit, or color.

use core::fmt;

/// Number of suits in a standard deck.
pub const NUM_SUITS: u8 = 4;
/// Number of ranks in a standard deck.
pub const NUM_RANKS: u8 = 13;
/// Number of cards in a standard deck.
pub const CARDS_PER_DECK: u8 = NUM_SUITS * NUM_RANKS;

/// Unique identity of a physical card for the lifetime of one game.
///
/// Real cards use 0..=51; placeholders use ids allocated past that
/// range by the tableau, so every card in play is distinct.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CardId(pub u32);

/// The four suits in a standard deck.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Suit {
    Hearts = 0,
    Clubs = 1,
    Spades = 2,
    Diamonds = 3,
}

/// The two card colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    Red,
    Black,
}

/// The thirteen ranks in a standard deck.
///
/// Ace is the lowest rank here (0 as a discriminant); use `number()`
/// to get the conventional 1..=13 value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    Ace = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King, // 12
}

impl Suit {
    /// All suits in a fixed, reproducible order.
    pub const ALL: [Suit; NUM_SUITS as usize] = [
        Suit::Hearts,
        Suit::Clubs,
        Suit::Spades,
        Suit::Diamonds,
    ];

    /// Construct a suit from a small integer 0..=3.
    ///
    /// # Panics
    ///
    /// Panics if `v >= 4`.
    #[inline]
    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => Suit::Hearts,
            1 => Suit::Clubs,
            2 => Suit::Spades,
            3 => Suit::Diamonds,
            _ => panic!("invalid suit: {v}"),
        }
    }

    /// Single-character representation: 'H', 'C', 'S', or 'D'.
    #[inline]
    pub fn short_char(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
        }
    }

    /// True for the red suits (hearts and diamonds).
    #[inline]
    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    /// The color of this suit.
    #[inline]
    pub fn color(self) -> Color {
        if self.is_red() { Color::Red } else { Color::Black }
    }
}

impl Rank {
    /// All ranks in a fixed, reproducible order (Ace..King).
    pub const ALL: [Rank; NUM_RANKS as usize] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Construct a rank from a small integer 0..=12.
    ///
    /// # Panics
    ///
    /// Panics if `v >= 13`.
    #[inline]
    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => Rank::Ace,
            1 => Rank::Two,
            2 => Rank::Three,
            3 => Rank::Four,
            4 => Rank::Five,
            5 => Rank::Six,
            6 => Rank::Seven,
            7 => Rank::Eight,
            8 => Rank::Nine,
            9 => Rank::Ten,
            10 => Rank::Jack,
            11 => Rank::Queen,
            12 => Rank::King,
            _ => panic!("invalid rank: {v}"),
        }
    }

    /// Rank number in 1..=13 (Ace=1, King=13).
    #[inline]
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Single-character representation: 'A', '2'..'9', 'T', 'J', 'Q', 'K'.
    #[inline]
    pub fn short_char(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }
}

/// A physical card in play: either one of the 52 real cards, or a
/// synthetic placeholder marking an empty pile.
///
/// `face_up` is tracked per card because the click protocol addresses
/// individual cards; placeholders are always face-up (they exist
/// precisely to be a visible, clickable "empty pile" top).
#[derive(Clone, Copy, Debug)]
pub struct Card {
    id: CardId,
    rank_suit: Option<(Rank, Suit)>,
    face_up: bool,
}

/// Card equality is identity equality: two distinct physical cards are
/// never equal, and a card stays equal to itself as its face state
/// changes over time.
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl Card {
    /// Create a real card. Face state starts face-down; dealing and
    /// drawing flip cards up as the rules require.
    #[inline]
    pub fn new(rank: Rank, suit: Suit, id: CardId) -> Self {
        Card {
            id,
            rank_suit: Some((rank, suit)),
            face_up: false,
        }
    }

    /// Create a real card directly from its compact 0..=51 code, using
    /// the `suit * 13 + rank` mapping. The code doubles as the card id.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `code >= 52`.
    #[inline]
    pub fn from_code(code: u8) -> Self {
        debug_assert!(code < CARDS_PER_DECK);
        let suit = Suit::from_u8(code / NUM_RANKS);
        let rank = Rank::from_u8(code % NUM_RANKS);
        Card::new(rank, suit, CardId(code as u32))
    }

    /// Create a placeholder card with the given (tableau-allocated) id.
    #[inline]
    pub fn placeholder(id: CardId) -> Self {
        Card {
            id,
            rank_suit: None,
            face_up: true,
        }
    }

    /// Unique identity of this card.
    #[inline]
    pub fn id(self) -> CardId {
        self.id
    }

    /// True for the synthetic empty-pile markers.
    #[inline]
    pub fn is_placeholder(self) -> bool {
        self.rank_suit.is_none()
    }

    /// Rank of a real card; `None` for placeholders.
    #[inline]
    pub fn rank(self) -> Option<Rank> {
        self.rank_suit.map(|(r, _)| r)
    }

    /// Suit of a real card; `None` for placeholders.
    #[inline]
    pub fn suit(self) -> Option<Suit> {
        self.rank_suit.map(|(_, s)| s)
    }

    /// Color of a real card; `None` for placeholders.
    #[inline]
    pub fn color(self) -> Option<Color> {
        self.suit().map(Suit::color)
    }

    /// Rank number in 1..=13 of a real card; `None` for placeholders.
    #[inline]
    pub fn rank_number(self) -> Option<u8> {
        self.rank().map(Rank::number)
    }

    /// Whether this card currently shows its face.
    #[inline]
    pub fn is_face_up(self) -> bool {
        self.face_up
    }

    /// Turn the card face-up (reveal).
    #[inline]
    pub(crate) fn show(&mut self) {
        self.face_up = true;
    }

    /// Turn the card face-down.
    #[inline]
    pub(crate) fn hide(&mut self) {
        self.face_up = false;
    }

    /// Short string like "AH", "7C", "TD", "KS"; placeholders render
    /// as "--".
    pub fn short_str(self) -> String {
        match self.rank_suit {
            Some((rank, suit)) => {
                format!("{}{}", rank.short_char(), suit.short_char())
            }
            None => "--".to_string(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_str())
    }
}

/// Tableau-column rule helper: can `upper` be placed on `lower`?
///
/// True if `upper` is exactly one rank lower than `lower` and of the
/// opposite color. False whenever either card is a placeholder; the
/// empty-column King rule is a separate case in the validator.
#[inline]
pub fn is_one_lower_opposite_color(upper: Card, lower: Card) -> bool {
    match (upper.rank_suit, lower.rank_suit) {
        (Some((ur, us)), Some((lr, ls))) => {
            ur.number() + 1 == lr.number() && us.is_red() != ls.is_red()
        }
        _ => false,
    }
}

/// Foundation rule helper: can `card` be placed on `top`?
///
/// True if `card` is exactly one rank higher than `top` and of the same
/// suit. False whenever either card is a placeholder; the
/// empty-foundation Ace rule is a separate case in the validator.
#[inline]
pub fn is_next_same_suit(card: Card, top: Card) -> bool {
    match (card.rank_suit, top.rank_suit) {
        (Some((cr, cs)), Some((tr, ts))) => {
            cr.number() == tr.number() + 1 && cs == ts
        }
        _ => false,
    }
}
