//! Deal orders: how a game's 52-card starting permutation is specified.
//!
//! A `DeckOrder` is a permutation of the compact card codes 0..=51 in
//! *dealing order*: positions 0..28 populate the tableau columns and
//! positions 28..52 become the draw pile, drawn front-first.
//!
//! This module provides one canonical path for every way a deal can be
//! specified:
//!   * the standard ordered deck,
//!   * a deterministic seeded shuffle (small LCG, no RNG crates needed),
//!   * a bracketed integer list as dumped by external tools,
//!   * an arbitrary-precision *deal number*: the permutation's
//!     lexicographic index in 0..52!, so any deal is shareable as a
//!     single (large) integer.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::card::CARDS_PER_DECK;

/// Our deck length as `usize`.
pub const DECK_LEN: usize = CARDS_PER_DECK as usize;

/// A 52-card permutation in dealing order. Each entry is a compact card
/// code in 0..=51 (`suit * 13 + rank`).
pub type DeckOrder = [u8; DECK_LEN];

/// The standard deck in suit-major, rank-minor order (deal number 0).
pub fn standard_order() -> DeckOrder {
    let mut order = [0u8; DECK_LEN];
    for (i, slot) in order.iter_mut().enumerate() {
        *slot = i as u8;
    }
    order
}

/// Return a deterministically shuffled deck order given a 32-bit seed.
///
/// This uses a simple LCG-driven Fisher-Yates shuffle (constants from
/// Numerical Recipes, not cryptographically secure) so we can generate
/// pseudo-random starting deals without pulling in external RNG crates.
pub fn shuffled_order_from_seed(seed: u32) -> DeckOrder {
    let mut order = standard_order();
    let mut state = seed;

    fn lcg(state: &mut u32) -> u32 {
        *state = state
            .wrapping_mul(1664525)
            .wrapping_add(1013904223);
        *state
    }

    let len = order.len();
    for i in (1..len).rev() {
        let r = (lcg(&mut state) as usize) % (i + 1);
        order.swap(i, r);
    }

    order
}

/// Check that `order` is a valid permutation of the 52 card codes.
pub fn validate_order(order: &DeckOrder) -> Result<(), String> {
    let mut seen = [false; DECK_LEN];
    for &v in order.iter() {
        if v as usize >= DECK_LEN {
            return Err(format!("card code {} out of range 0..=51", v));
        }
        if seen[v as usize] {
            return Err(format!("duplicate card code {}", v));
        }
        seen[v as usize] = true;
    }
    Ok(())
}

/// Parse a single bracketed integer list (e.g. "[1, 2, 3]") into a deck
/// order.
///
/// The list must contain exactly 52 integers, each in 0..=51, with no
/// duplicates.
pub fn parse_bracketed_order(s: &str) -> Result<DeckOrder, String> {
    let open = s.find('[').ok_or_else(|| "missing '['".to_string())?;
    let close = s.rfind(']').ok_or_else(|| "missing ']'".to_string())?;
    if close <= open {
        return Err("malformed [...] list".to_string());
    }

    let inner = &s[open + 1..close];
    let mut nums: Vec<u8> = Vec::with_capacity(DECK_LEN);

    for part in inner.split(',') {
        let t = part.trim();
        if t.is_empty() {
            continue;
        }
        let v: u8 = t
            .parse::<u8>()
            .map_err(|_| format!("could not parse '{}' as u8", t))?;
        nums.push(v);
    }

    if nums.len() != DECK_LEN {
        return Err(format!(
            "deck list must have {} numbers, got {}",
            DECK_LEN,
            nums.len()
        ));
    }

    let mut order = [0u8; DECK_LEN];
    order.copy_from_slice(&nums);
    validate_order(&order)?;
    Ok(order)
}

/// Parse a deal number from user-supplied text.
///
/// Whitespace and the separators '#', '-', '_', '.', ',' are ignored,
/// so numbers copied out of chat or filenames parse as-is.
pub fn parse_deal_number(s: &str) -> Result<BigUint, String> {
    let mut cleaned = String::with_capacity(s.len());
    for ch in s.trim().chars() {
        if ch.is_whitespace() || matches!(ch, '#' | '-' | '_' | '.' | ',') {
            continue;
        }
        cleaned.push(ch);
    }
    if cleaned.is_empty() {
        return Err("empty deal number".to_string());
    }
    if !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!(
            "deal number contains non-digits after normalization: {:?}",
            cleaned
        ));
    }
    BigUint::parse_bytes(cleaned.as_bytes(), 10)
        .ok_or_else(|| format!("could not parse deal number {:?}", s))
}

/// `n!` as a `BigUint`.
fn factorial(n: usize) -> BigUint {
    let mut f = BigUint::from(1u32);
    for k in 2..=n {
        f *= BigUint::from(k);
    }
    f
}

/// The lexicographic index of `order` among all 52! permutations.
///
/// This is the factorial-number-system (Lehmer code) encoding: for each
/// position, count how many smaller codes remain to its right and weight
/// that count by the factorial of the remaining length. The standard
/// order maps to 0; the fully reversed order maps to 52! - 1.
pub fn order_number(order: &DeckOrder) -> BigUint {
    let mut n = BigUint::zero();
    for i in 0..DECK_LEN {
        let smaller_later = order[i + 1..]
            .iter()
            .filter(|&&v| v < order[i])
            .count();
        n += BigUint::from(smaller_later) * factorial(DECK_LEN - 1 - i);
    }
    n
}

/// Reconstruct a deck order from its lexicographic index.
///
/// Inverse of `order_number`; fails if `number >= 52!`.
pub fn order_from_number(number: &BigUint) -> Result<DeckOrder, String> {
    if *number >= factorial(DECK_LEN) {
        return Err(format!("deal number {} is >= 52!", number));
    }

    let mut remaining: Vec<u8> = (0..CARDS_PER_DECK).collect();
    let mut order = [0u8; DECK_LEN];
    let mut rest = number.clone();

    for (i, slot) in order.iter_mut().enumerate() {
        let f = factorial(DECK_LEN - 1 - i);
        let idx = (&rest / &f)
            .to_usize()
            .expect("quotient is < remaining length, fits in usize");
        rest %= &f;
        *slot = remaining.remove(idx);
    }

    Ok(order)
}
