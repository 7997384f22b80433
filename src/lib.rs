//! A polymorphic solitaire rule engine.
//!
//! One generic board (the "baize") of cards and piles, driven by pluggable
//! variant scripts: Klondike (draw one, draw three, Thoughtful), Freecell,
//! Baker's Dozen, Simple Simon, and American Toad. The engine owns legality,
//! dealing, drag/drop resolution, tap semantics, auto-collect, per-move undo
//! history with bookmarks, and save/load; presentation and audio hang off a
//! read-only observer seam.
//!
//! ```
//! use baize::{Baize, PileRole};
//!
//! let board = Baize::new("Klondike", 42);
//! assert_eq!(board.variant_name(), "Klondike");
//!
//! let dealt: usize = board
//!     .groups()
//!     .tableaux
//!     .iter()
//!     .map(|&t| board.pile(t).len())
//!     .sum();
//! assert_eq!(dealt, 28);
//! assert_eq!(board.pile(board.groups().stock).role(), PileRole::Stock);
//! ```

pub mod board;
pub mod core;
pub mod observer;
pub mod variants;

pub use crate::board::{
    Baize, LoadError, PileGroups, SavedBaize, SavedGame, SavedPile, StrokeEvent, StrokeKind, Tail,
};
pub use crate::core::{
    Card, CardId, Color, FanType, Metrics, MoveError, MoveRule, Pile, PileId, PileRole, Point,
    Rect, Slot, Suit, ACE, KING,
};
pub use crate::observer::{BaizeObserver, Cue, GameSignal, NullObserver, StatusLine, ToolbarState};
pub use crate::variants::{KlondikeCfg, Variant, VariantRegistry};
