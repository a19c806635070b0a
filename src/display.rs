//! Human-readable rendering of a Klondike layout.
//!
//! This module renders a `Tableau` as multi-line text using the compact
//! `Card` representation. Face-down cards are shown as "XX", placeholders
//! as "--", and face-up cards with their `short_str()` rank/suit code.
//!
//! The intent is a stable, readable CLI representation that is useful for
//! debugging and for logging interesting positions.

use crate::card::Card;
use crate::tableau::{PileId, Tableau, NUM_COLS, NUM_FOUNDATIONS};

/// Format a single card for display.
///
/// - Placeholders render as `"--"`.
/// - Face-down cards render as `"XX"`.
/// - Face-up cards use `Card::short_str()` such as `"AH"`, `"7C"`, `"TD"`.
pub fn format_card(card: &Card) -> String {
    if card.is_placeholder() {
        "--".to_string()
    } else if card.is_face_up() {
        card.short_str()
    } else {
        "XX".to_string()
    }
}

/// Render only the foundation row.
///
/// Each slot shows the pile's top card: `[--]` for a placeholder-only
/// foundation, otherwise e.g. `[AH]`, `[7C]`, `[KD]`. Cards buried under
/// the top are never shown, matching typical Klondike presentations.
pub fn render_foundations(tab: &Tableau) -> String {
    let mut s = String::new();
    s.push_str("Foundations: ");
    for i in 0..NUM_FOUNDATIONS {
        s.push('[');
        match tab.foundation_top(i) {
            Some(card) => s.push_str(&format_card(card)),
            None => s.push_str("  "),
        }
        s.push_str("] ");
    }
    s.trim_end().to_string()
}

/// Render the deck, the visible-waste window, and the waste on one line.
///
/// The deck never reveals its internal order, only a count of real cards
/// still to draw. The window shows all of its (at most three) cards,
/// oldest first; only the last of those is live. The waste is a count.
pub fn render_deck_and_waste(tab: &Tableau) -> String {
    let mut s = String::new();

    let in_deck = tab
        .pile(PileId::Deck)
        .cards()
        .iter()
        .filter(|c| !c.is_placeholder())
        .count();
    if in_deck == 0 {
        s.push_str("Deck: [empty]");
    } else {
        s.push_str(&format!("Deck: [{} cards]", in_deck));
    }

    s.push_str("    ");

    s.push_str("Visible:");
    if tab.visible_waste_cards().is_empty() {
        s.push_str(" --");
    } else {
        for card in tab.visible_waste_cards() {
            s.push(' ');
            s.push_str(&format_card(card));
        }
    }

    s.push_str(&format!("    Waste: {} cards", tab.waste_cards().len()));
    s
}

/// Render all tableau columns as a multi-line string.
///
/// Columns are arranged in 7 vertical stacks, each cell three characters
/// wide. The first body row holds every column's bottom card and stacks
/// grow downward, so the last non-blank cell in a column is its playable
/// edge.
pub fn render_columns(tab: &Tableau) -> String {
    let mut s = String::new();

    s.push_str("Columns:\n");
    s.push_str("      ");
    for col_idx in 0..NUM_COLS {
        s.push_str(&format!(" C{} ", col_idx + 1));
    }
    s.push('\n');

    let max_height = (0..NUM_COLS)
        .map(|i| tab.column_cards(i).len())
        .max()
        .unwrap_or(0);

    for row in 0..max_height {
        s.push_str("      ");
        for col_idx in 0..NUM_COLS {
            let cards = tab.column_cards(col_idx);
            match cards.get(row) {
                Some(card) => s.push_str(&format!("{:>3} ", format_card(card))),
                None => s.push_str("    "),
            }
        }
        s.push('\n');
    }

    s
}

/// Render a full tableau (foundations, deck/waste, and columns) as a
/// multi-line string.
pub fn render_tableau(tab: &Tableau) -> String {
    let mut s = String::new();

    s.push_str(&render_foundations(tab));
    s.push('\n');
    s.push_str(&render_deck_and_waste(tab));
    s.push('\n');
    s.push('\n');
    s.push_str(&render_columns(tab));

    s
}

/// Print a tableau to stdout using `render_tableau`.
pub fn print_tableau(tab: &Tableau) {
    println!("{}", render_tableau(tab));
}
