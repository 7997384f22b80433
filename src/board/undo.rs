//! Move history, bookmarks, and save/load.
//!
//! The history is a stack of full-board snapshots, one per committed move,
//! with the deal itself as entry zero. Snapshots are cheap: pile contents are
//! `im::Vector` clones, so each entry shares structure with its neighbors.
//! A save file is the variant name, the seed, the bookmark, and the whole
//! stack; restoring replays nothing, it just reinstates the top snapshot.

use serde::{Deserialize, Serialize};
use std::fmt;

use im::Vector;

use crate::core::card::CardId;
use crate::core::pile::PileId;
use crate::core::rng::DealRng;
use crate::variants::VariantRegistry;

use super::Baize;

/// One pile's saved contents. Face state is stored separately because card
/// ids alone do not say which cards were face down. The label rides along
/// because some variants fix it at deal time rather than at pile creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPile {
    pub cards: Vector<CardId>,
    pub face_up: Vec<bool>,
    pub label: Option<u8>,
}

/// One history entry: every pile, plus the recycle budget at that point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedBaize {
    pub piles: Vec<SavedPile>,
    pub recycles: u32,
}

/// A complete saved game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub variant: String,
    pub seed: u64,
    pub bookmark: usize,
    pub stack: Vec<SavedBaize>,
}

impl SavedGame {
    /// Serialize for storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Deserialize from storage.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

/// Why a saved game could not be loaded. A failed load leaves the current
/// board untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadError {
    /// This run started with an unknown variant name; loading is disabled so
    /// a stale save is not reinstated over the fallback game.
    Blocked,
    /// The save names a variant this build does not know.
    UnknownVariant(String),
    /// The save's shape does not match the variant's piles or card count.
    Corrupt,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blocked => write!(f, "Loading is disabled for this session"),
            Self::UnknownVariant(name) => write!(f, "Unknown variant {name:?}"),
            Self::Corrupt => write!(f, "Saved game is corrupt"),
        }
    }
}

impl std::error::Error for LoadError {}

impl Baize {
    /// Snapshot the current board onto the history stack.
    pub(crate) fn undo_push(&mut self) {
        let snapshot = self.snapshot();
        self.undo_stack.push(snapshot);
    }

    fn snapshot(&self) -> SavedBaize {
        let piles = self
            .piles
            .iter()
            .map(|pile| SavedPile {
                cards: pile.cards().clone(),
                face_up: pile.iter().map(|id| self.card(id).is_face_up()).collect(),
                label: pile.label(),
            })
            .collect();
        SavedBaize {
            piles,
            recycles: self.recycles,
        }
    }

    /// The snapshot of the current position (top of the history stack).
    #[must_use]
    pub fn undo_peek(&self) -> Option<&SavedBaize> {
        self.undo_stack.last()
    }

    /// Undo the most recent move. The deal entry is never popped, so undoing
    /// past the start of the game is a no-op.
    pub fn undo(&mut self) {
        if self.undo_stack.len() < 2 {
            return;
        }
        self.undo_stack.pop();
        if let Some(saved) = self.undo_stack.last().cloned() {
            self.restore(&saved);
            self.after_restore();
        }
    }

    /// Remember the current position. A later [`Baize::goto_bookmark`]
    /// rewinds to it.
    pub fn set_bookmark(&mut self) {
        self.bookmark = self.undo_stack.len();
    }

    /// Rewind to the bookmarked position, if one was set and is still behind
    /// us. Moves made since are discarded.
    pub fn goto_bookmark(&mut self) {
        if self.bookmark == 0 || self.bookmark > self.undo_stack.len() {
            return;
        }
        self.undo_stack.truncate(self.bookmark);
        if let Some(saved) = self.undo_stack.last().cloned() {
            self.restore(&saved);
            self.after_restore();
        }
    }

    /// Rewind the whole game to the deal.
    pub fn restart_deal(&mut self) {
        if self.undo_stack.is_empty() {
            return;
        }
        self.undo_stack.truncate(1);
        self.bookmark = 0;
        if let Some(saved) = self.undo_stack.last().cloned() {
            self.restore(&saved);
            self.after_restore();
        }
    }

    /// Package the game for persistence.
    #[must_use]
    pub fn save(&self) -> SavedGame {
        SavedGame {
            variant: self.variant_name.clone(),
            seed: self.seed,
            bookmark: self.bookmark,
            stack: self.undo_stack.clone(),
        }
    }

    /// Build a board from a saved game.
    pub fn from_saved(saved: SavedGame) -> Result<Self, LoadError> {
        let Some(variant) = VariantRegistry::default().get(&saved.variant) else {
            return Err(LoadError::UnknownVariant(saved.variant));
        };
        if saved.stack.is_empty() {
            return Err(LoadError::Corrupt);
        }

        let mut baize = Self::bare(
            variant.clone(),
            saved.variant.clone(),
            saved.seed,
            Box::new(crate::observer::NullObserver),
        );
        variant.build_piles(&mut baize);
        baize.fill_stock(false);

        for entry in &saved.stack {
            if entry.piles.len() != baize.piles.len() {
                return Err(LoadError::Corrupt);
            }
            let mut total = 0;
            for pile in &entry.piles {
                if pile.face_up.len() != pile.cards.len() {
                    return Err(LoadError::Corrupt);
                }
                for id in pile.cards.iter() {
                    if id.index() >= baize.cards.len() {
                        return Err(LoadError::Corrupt);
                    }
                }
                total += pile.cards.len();
            }
            if total != baize.cards.len() {
                return Err(LoadError::Corrupt);
            }
        }

        baize.undo_stack = saved.stack;
        baize.bookmark = saved.bookmark.min(baize.undo_stack.len());
        if let Some(top) = baize.undo_stack.last().cloned() {
            baize.restore(&top);
            baize.after_restore();
        }
        Ok(baize)
    }

    /// Replace the current game with a saved one, keeping the attached
    /// observer. A failed load leaves the board exactly as it was.
    pub fn load(&mut self, saved: SavedGame) -> Result<(), LoadError> {
        if self.load_blocked {
            return Err(LoadError::Blocked);
        }
        let mut fresh = Self::from_saved(saved)?;
        std::mem::swap(&mut fresh.observer, &mut self.observer);
        *self = fresh;
        self.after_restore();
        Ok(())
    }

    /// Reinstate a snapshot's pile contents, owners, and face states.
    fn restore(&mut self, saved: &SavedBaize) {
        for (i, entry) in saved.piles.iter().enumerate() {
            if i >= self.piles.len() {
                break;
            }
            self.piles[i].set_cards(entry.cards.clone());
            self.piles[i].set_label(entry.label);
            for (pos, &id) in entry.cards.iter().enumerate() {
                let face_up = entry.face_up.get(pos).copied().unwrap_or(true);
                let card = &mut self.cards[id.index()];
                card.set_owner(PileId(i));
                if face_up {
                    card.flip_up();
                } else {
                    card.flip_down();
                }
            }
        }
        self.recycles = saved.recycles;
        self.tail.clear();
    }

    fn after_restore(&mut self) {
        self.recompute();
        self.update_toolbar();
        self.update_statusbar();
        self.signal_state();
        self.refan();
    }

    /// Re-deal the current game with its original seed: same layout, fresh
    /// history.
    pub fn replay_deal(&mut self) {
        self.rng = DealRng::new(self.seed);
        self.start_fresh();
    }
}
