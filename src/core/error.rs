//! Move rejection reasons.
//!
//! Illegal moves are recoverable and local: the drag is rolled back and the
//! `Display` string is surfaced to the user as-is. Nothing here is ever fatal.

use crate::core::card::rank_name;

/// Why a proposed move was refused.
///
/// Comparison predicates produce the ordering variants; the role table and
/// variant scripts produce the rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// Adjacent cards must share a suit.
    WrongSuit,
    /// Adjacent cards must alternate colors.
    WrongColor,
    /// Adjacent cards must ascend in rank.
    NotAscending,
    /// Adjacent cards must descend in rank.
    NotDescending,
    /// An empty labeled pile only accepts its labeled rank.
    EmptyNeeds(u8),
    /// Face-down cards cannot be moved.
    FaceDown,
    /// Cards leave the Stock by dealing, not dragging.
    FromStock,
    /// Foundations are one-way.
    FromFoundation,
    /// Discards are one-way.
    FromDiscard,
    /// Nothing can be dragged onto the Stock.
    ToStock,
    /// Nothing can be dragged onto a Reserve.
    ToReserve,
    /// The Waste is fed from the Stock only.
    WasteFromStock,
    /// A Cell holds a single card.
    CellOccupied,
    /// Destination (or source rule) takes one card at a time.
    OneCardOnly,
    /// Source pile moves one card or the whole pile, nothing in between.
    OneOrWhole,
    /// Not enough free cells/empty piles to move a run this long.
    TooManyCards { moved: usize, room: usize },
    /// This pile never yields cards.
    Immovable,
    /// A Discard accepts only a complete thirteen-card run onto an empty pile.
    DiscardFullRun,
    /// A discard run must start from a King.
    KingFirst,
    /// This variant forbids refilling an empty Tableau.
    EmptyTableau,
    /// This variant refills empty Tableaux from the Waste only.
    WasteOnly,
    /// The Stock recycle budget is exhausted.
    NoRecycles,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::WrongSuit => write!(f, "Cards must be the same suit"),
            MoveError::WrongColor => write!(f, "Cards must be in alternating colors"),
            MoveError::NotAscending => write!(f, "Cards must be in ascending order"),
            MoveError::NotDescending => write!(f, "Cards must be in descending order"),
            MoveError::EmptyNeeds(rank) => {
                write!(f, "An empty pile needs a {}", rank_name(*rank))
            }
            MoveError::FaceDown => write!(f, "Cannot move a face down card"),
            MoveError::FromStock => write!(f, "Cannot move cards from the Stock"),
            MoveError::FromFoundation => write!(f, "Cannot move cards from a Foundation"),
            MoveError::FromDiscard => write!(f, "Cannot move cards from a Discard"),
            MoveError::ToStock => write!(f, "Cannot move cards to the Stock"),
            MoveError::ToReserve => write!(f, "Cannot move cards to a Reserve"),
            MoveError::WasteFromStock => {
                write!(f, "The Waste can only be filled from the Stock")
            }
            MoveError::CellOccupied => write!(f, "A Cell can only hold one card"),
            MoveError::OneCardOnly => write!(f, "Can only move one card there"),
            MoveError::OneOrWhole => {
                write!(f, "Can only move one card, or the whole pile")
            }
            MoveError::TooManyCards { moved, room } => {
                write!(f, "Cannot move {moved} cards, only enough room to move {room}")
            }
            MoveError::Immovable => write!(f, "Cannot move cards from that pile"),
            MoveError::DiscardFullRun => {
                write!(f, "A Discard can only accept a complete run of thirteen cards")
            }
            MoveError::KingFirst => write!(f, "Can only discard starting from a King"),
            MoveError::EmptyTableau => {
                write!(f, "Cannot move a card to an empty Tableau")
            }
            MoveError::WasteOnly => {
                write!(f, "Empty Tableaux must be filled with cards from the Waste")
            }
            MoveError::NoRecycles => write!(f, "No more recycles"),
        }
    }
}

impl std::error::Error for MoveError {}
