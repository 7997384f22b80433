//! Core primitives: cards, piles, geometry, deal RNG, and move errors.

pub mod card;
pub mod error;
pub mod layout;
pub mod pile;
pub mod rng;

pub use card::{
    down, down_alt_color, down_suit, down_suit_wrap, empty_accepts, rank_name, up_suit,
    up_suit_wrap, Card, CardId, Color, PairCmp, Suit, ACE, KING,
};
pub use error::MoveError;
pub use layout::{Metrics, Point, Rect, Slot};
pub use pile::{FanType, MoveRule, Pile, PileId, PileRole};
pub use rng::DealRng;
