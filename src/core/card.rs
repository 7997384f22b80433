//! Card identity and the pair-comparison predicates variants are built from.
//!
//! A card's identity (suit, rank, pack index) is fixed at deal time; its
//! placement state (owning pile, face orientation, baize position) changes as
//! the game is played. Cards live in an arena on the board and are referred to
//! everywhere else by `CardId`.
//!
//! The comparison functions at the bottom of this module are the vocabulary
//! every variant's legality rules are written in: "up by suit", "down by
//! alternating color", and so on. Each returns the human-readable reason for
//! rejection, which the board surfaces to the user unchanged.

use serde::{Deserialize, Serialize};

use crate::core::error::MoveError;
use crate::core::layout::Point;
use crate::core::pile::PileId;

/// Rank of an Ace.
pub const ACE: u8 = 1;
/// Rank of a King.
pub const KING: u8 = 13;

/// Index into the board's card arena.
///
/// Cards are allocated once per deal, in pack/suit/rank order, so the same
/// seed and variant always produce the same id-to-identity mapping. Snapshots
/// store `CardId`s, never card contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Arena index of this card.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One of the four French suits. Discriminants are 1-based to match the
/// traditional club=1..spade=4 numbering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Club = 1,
    Diamond = 2,
    Heart = 3,
    Spade = 4,
}

impl Suit {
    /// All suits, in deal order.
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    /// The print color of this suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Club | Suit::Spade => Color::Black,
            Suit::Diamond | Suit::Heart => Color::Red,
        }
    }
}

/// Card color, for alternating-color comparisons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
}

/// English name of a rank, for user-facing messages.
#[must_use]
pub fn rank_name(rank: u8) -> &'static str {
    match rank {
        1 => "Ace",
        2 => "Two",
        3 => "Three",
        4 => "Four",
        5 => "Five",
        6 => "Six",
        7 => "Seven",
        8 => "Eight",
        9 => "Nine",
        10 => "Ten",
        11 => "Jack",
        12 => "Queen",
        13 => "King",
        _ => "?",
    }
}

/// A playing card: immutable identity plus mutable placement state.
#[derive(Clone, Debug)]
pub struct Card {
    suit: Suit,
    rank: u8,
    pack: u8,
    owner: PileId,
    face_up: bool,
    // Cosmetic flags. `in_transit` gates drag *start* only; legality checks
    // never consult it. `movable` is a derived hint for highlighting.
    in_transit: bool,
    movable: bool,
    pos: Point,
}

impl Card {
    /// Create a face-down card owned by `owner`.
    #[must_use]
    pub fn new(suit: Suit, rank: u8, pack: u8, owner: PileId) -> Self {
        debug_assert!((ACE..=KING).contains(&rank));
        Self {
            suit,
            rank,
            pack,
            owner,
            face_up: false,
            in_transit: false,
            movable: false,
            pos: Point::new(0, 0),
        }
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Rank 1..=13 (Ace..King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Pack index, for multi-deck variants.
    #[must_use]
    pub const fn pack(&self) -> u8 {
        self.pack
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// The pile this card currently belongs to. A card being dragged still
    /// belongs to its source pile until the move commits.
    #[must_use]
    pub const fn owner(&self) -> PileId {
        self.owner
    }

    pub(crate) fn set_owner(&mut self, owner: PileId) {
        self.owner = owner;
    }

    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub(crate) fn flip_up(&mut self) {
        self.face_up = true;
    }

    pub(crate) fn flip_down(&mut self) {
        self.face_up = false;
    }

    /// True while a presentation layer is animating this card.
    #[must_use]
    pub const fn in_transit(&self) -> bool {
        self.in_transit
    }

    pub(crate) fn set_in_transit(&mut self, in_transit: bool) {
        self.in_transit = in_transit;
    }

    /// Derived hint: this card heads at least one legal move.
    #[must_use]
    pub const fn is_movable(&self) -> bool {
        self.movable
    }

    pub(crate) fn set_movable(&mut self, movable: bool) {
        self.movable = movable;
    }

    /// Current baize-space position of the card's top-left corner.
    #[must_use]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    pub(crate) fn set_pos(&mut self, pos: Point) {
        self.pos = pos;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {:?}s", rank_name(self.rank), self.suit)
    }
}

/// Signature shared by all pair comparisons: `under` is the card already in
/// place (a pile's top, or the earlier card of a run), `over` is the card
/// being placed on it.
pub type PairCmp = fn(&Card, &Card) -> Result<(), MoveError>;

/// Ascending by one, same suit (classic Foundation build).
pub fn up_suit(under: &Card, over: &Card) -> Result<(), MoveError> {
    if under.suit() != over.suit() {
        return Err(MoveError::WrongSuit);
    }
    if over.rank() != under.rank() + 1 {
        return Err(MoveError::NotAscending);
    }
    Ok(())
}

/// Descending by one, any suit.
pub fn down(under: &Card, over: &Card) -> Result<(), MoveError> {
    if over.rank() + 1 != under.rank() {
        return Err(MoveError::NotDescending);
    }
    Ok(())
}

/// Descending by one, alternating colors.
pub fn down_alt_color(under: &Card, over: &Card) -> Result<(), MoveError> {
    if under.color() == over.color() {
        return Err(MoveError::WrongColor);
    }
    down(under, over)
}

/// Descending by one, same suit.
pub fn down_suit(under: &Card, over: &Card) -> Result<(), MoveError> {
    if under.suit() != over.suit() {
        return Err(MoveError::WrongSuit);
    }
    down(under, over)
}

/// Ascending by one, same suit, with Ace following King.
pub fn up_suit_wrap(under: &Card, over: &Card) -> Result<(), MoveError> {
    if under.suit() != over.suit() {
        return Err(MoveError::WrongSuit);
    }
    let wraps = under.rank() == KING && over.rank() == ACE;
    if over.rank() != under.rank() + 1 && !wraps {
        return Err(MoveError::NotAscending);
    }
    Ok(())
}

/// Descending by one, same suit, with King following Ace.
pub fn down_suit_wrap(under: &Card, over: &Card) -> Result<(), MoveError> {
    if under.suit() != over.suit() {
        return Err(MoveError::WrongSuit);
    }
    let wraps = under.rank() == ACE && over.rank() == KING;
    if over.rank() + 1 != under.rank() && !wraps {
        return Err(MoveError::NotDescending);
    }
    Ok(())
}

/// Whether an empty pile with an optional rank label accepts `card`.
///
/// An unlabeled empty pile accepts anything; a labeled one (Foundation "A",
/// Klondike Tableau "K", Toad's base rank) accepts only that rank.
pub fn empty_accepts(label: Option<u8>, card: &Card) -> Result<(), MoveError> {
    match label {
        Some(rank) if card.rank() != rank => Err(MoveError::EmptyNeeds(rank)),
        _ => Ok(()),
    }
}
