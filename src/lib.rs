//! A click-driven Klondike (draw-three) rules engine.
//!
//! The crate models the full table state — deck, waste, a three-card
//! visible-waste window, seven columns, and four foundations — and
//! exposes a single interaction surface: `game::Game::click`. Every
//! card, including the placeholder markers that stand in for empty
//! piles, carries a stable id, so a front end only ever reports "this
//! card was clicked" and reads the resulting state back.
//!
//! Starting deals are plain 52-card permutations; `decks` can derive
//! them from a seed, a bracketed list, or an arbitrary-precision deal
//! number.

pub mod card;
pub mod decks;
pub mod display;
pub mod game;
pub mod moves;
pub mod pile;
pub mod rules;
pub mod tableau;
