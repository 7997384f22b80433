//! Variant scripts: the per-game rules layered over the generic board.
//!
//! A variant decides the pile layout, the deal, the card-comparison rules for
//! moving and appending, what a tap means, and any reactive rule that runs
//! after each committed move. Everything else (source-side move rules, role
//! checks, history, collect, input) is shared board machinery.

mod bakers_dozen;
mod freecell;
mod klondike;
mod simple_simon;
mod toad;

use rustc_hash::FxHashMap;

use crate::board::Baize;
use crate::core::card::{CardId, PairCmp};
use crate::core::error::MoveError;
use crate::core::pile::PileId;

pub use klondike::KlondikeCfg;

/// A solitaire variant's complete rule script.
///
/// Closed-set dispatch: adding a variant means adding an arm here and an
/// entry in [`VariantRegistry`], and the compiler walks you through every
/// operation that needs a decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Variant {
    Klondike(KlondikeCfg),
    Freecell,
    BakersDozen,
    SimpleSimon,
    Toad,
}

impl Variant {
    /// Canonical display name of the base game (registry aliases like
    /// "Klondike Draw Three" map onto a configured base variant).
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Klondike(_) => "Klondike",
            Self::Freecell => "Freecell",
            Self::BakersDozen => "Baker's Dozen",
            Self::SimpleSimon => "Simple Simon",
            Self::Toad => "Toad",
        }
    }

    /// Rules reference for the help screen.
    #[must_use]
    pub fn wikipedia(&self) -> &'static str {
        match self {
            Self::Klondike(_) => "https://en.wikipedia.org/wiki/Klondike_(solitaire)",
            Self::Freecell => "https://en.wikipedia.org/wiki/FreeCell",
            Self::BakersDozen => "https://en.wikipedia.org/wiki/Baker%27s_Dozen_(solitaire)",
            Self::SimpleSimon => "https://en.wikipedia.org/wiki/Simple_Simon_(solitaire)",
            Self::Toad => "https://en.wikipedia.org/wiki/American_Toad_(solitaire)",
        }
    }

    /// How many distinct card colors the variant's rules care about: 1 when
    /// suit never matters for building, 2 for alternating-color games, 4 for
    /// same-suit games. Presentation may use it to pick card faces.
    #[must_use]
    pub fn card_colors(&self) -> u8 {
        match self {
            Self::Klondike(_) | Self::Freecell => 2,
            Self::BakersDozen => 1,
            Self::SimpleSimon | Self::Toad => 4,
        }
    }

    /// Number of 52-card packs the variant plays with.
    #[must_use]
    pub fn packs(&self) -> u8 {
        match self {
            Self::Toad => 2,
            _ => 1,
        }
    }

    /// Register this variant's piles on an empty board.
    pub(crate) fn build_piles(&self, b: &mut Baize) {
        match self {
            Self::Klondike(cfg) => klondike::build_piles(cfg, b),
            Self::Freecell => freecell::build_piles(b),
            Self::BakersDozen => bakers_dozen::build_piles(b),
            Self::SimpleSimon => simple_simon::build_piles(b),
            Self::Toad => toad::build_piles(b),
        }
    }

    /// Deal the shuffled stock out into the starting position.
    pub(crate) fn start_game(&self, b: &mut Baize) {
        match self {
            Self::Klondike(cfg) => klondike::start_game(cfg, b),
            Self::Freecell => freecell::start_game(b),
            Self::BakersDozen => bakers_dozen::start_game(b),
            Self::SimpleSimon => simple_simon::start_game(b),
            Self::Toad => toad::start_game(b),
        }
    }

    /// Reactive rule run after every committed move, before the history
    /// push (refilling the waste, topping up tableaux, and so on).
    pub(crate) fn after_move(&self, b: &mut Baize) {
        match self {
            Self::Klondike(cfg) => klondike::after_move(cfg, b),
            Self::Toad => toad::after_move(b),
            Self::Freecell | Self::BakersDozen | Self::SimpleSimon => {}
        }
    }

    /// Variant veto on a tail leaving its pile (typically: the run must be
    /// conformant under the variant's build rule).
    pub(crate) fn tail_move_error(&self, b: &Baize, tail: &[CardId]) -> Result<(), MoveError> {
        match self {
            Self::Klondike(_) => klondike::tail_move_error(b, tail),
            Self::Freecell => freecell::tail_move_error(b, tail),
            Self::SimpleSimon => simple_simon::tail_move_error(b, tail),
            Self::BakersDozen | Self::Toad => Ok(()),
        }
    }

    /// Variant rule for appending a tail to `dst`, after the destination
    /// role's generic checks passed.
    pub(crate) fn tail_append_error(
        &self,
        b: &Baize,
        dst: PileId,
        tail: &[CardId],
    ) -> Result<(), MoveError> {
        match self {
            Self::Klondike(_) => klondike::tail_append_error(b, dst, tail),
            Self::Freecell => freecell::tail_append_error(b, dst, tail),
            Self::BakersDozen => bakers_dozen::tail_append_error(b, dst, tail),
            Self::SimpleSimon => simple_simon::tail_append_error(b, dst, tail),
            Self::Toad => toad::tail_append_error(b, dst, tail),
        }
    }

    /// Count of adjacent pairs in `pile` that break the variant's build
    /// rule, for conformance and the percent-complete metric.
    pub(crate) fn unsorted_pairs(&self, b: &Baize, pile: PileId) -> usize {
        let cmp: PairCmp = match self {
            Self::Klondike(_) | Self::Freecell => crate::core::card::down_alt_color,
            Self::BakersDozen | Self::SimpleSimon => crate::core::card::down_suit,
            Self::Toad => crate::core::card::down_suit_wrap,
        };
        pile_unsorted_pairs(b, pile, cmp)
    }

    /// A tail was tapped; the variant may deal, or fall back to the role
    /// default (foundation, then empty cell).
    pub(crate) fn tail_tapped(&self, b: &mut Baize, tail: &[CardId]) {
        match self {
            Self::Klondike(cfg) => klondike::tail_tapped(cfg, b, tail),
            Self::Toad => toad::tail_tapped(b, tail),
            Self::Freecell | Self::BakersDozen | Self::SimpleSimon => {
                crate::board::role::tail_tapped(b, tail);
            }
        }
    }

    /// An empty pile was tapped (an empty stock recycles the waste in
    /// variants that allow it).
    pub(crate) fn pile_tapped(&self, b: &mut Baize, pile: PileId) {
        match self {
            Self::Klondike(_) => klondike::pile_tapped(b, pile),
            Self::Toad => toad::pile_tapped(b, pile),
            Self::Freecell | Self::BakersDozen | Self::SimpleSimon => {}
        }
    }
}

/// Every window of two adjacent tail cards must be face up and satisfy
/// `cmp`, or the whole tail refuses to move as a unit.
pub(crate) fn tail_conformant(b: &Baize, tail: &[CardId], cmp: PairCmp) -> Result<(), MoveError> {
    for pair in tail.windows(2) {
        let under = b.card(pair[0]);
        let over = b.card(pair[1]);
        if !under.is_face_up() || !over.is_face_up() {
            return Err(MoveError::FaceDown);
        }
        cmp(under, over)?;
    }
    Ok(())
}

/// Adjacent pairs in `pile` that are face down or break `cmp`.
pub(crate) fn pile_unsorted_pairs(b: &Baize, pile: PileId, cmp: PairCmp) -> usize {
    let ids: Vec<CardId> = b.pile(pile).iter().collect();
    ids.windows(2)
        .filter(|pair| {
            let under = b.card(pair[0]);
            let over = b.card(pair[1]);
            !under.is_face_up() || !over.is_face_up() || cmp(under, over).is_err()
        })
        .count()
}

/// Name-to-variant lookup for the seven shipped games.
pub struct VariantRegistry {
    by_name: FxHashMap<&'static str, Variant>,
}

impl Default for VariantRegistry {
    fn default() -> Self {
        let mut by_name = FxHashMap::default();
        by_name.insert("Klondike", Variant::Klondike(KlondikeCfg::default()));
        by_name.insert(
            "Klondike Draw Three",
            Variant::Klondike(KlondikeCfg {
                draw: 3,
                ..KlondikeCfg::default()
            }),
        );
        by_name.insert(
            "Thoughtful",
            Variant::Klondike(KlondikeCfg {
                thoughtful: true,
                ..KlondikeCfg::default()
            }),
        );
        by_name.insert("Freecell", Variant::Freecell);
        by_name.insert("Baker's Dozen", Variant::BakersDozen);
        by_name.insert("Simple Simon", Variant::SimpleSimon);
        by_name.insert("Toad", Variant::Toad);
        Self { by_name }
    }
}

impl VariantRegistry {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Variant> {
        self.by_name.get(name).cloned()
    }

    /// All registered names, sorted for stable menus.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.by_name.keys().copied().collect();
        names.sort_unstable();
        names
    }
}
