//! The baize: the orchestrator that owns every pile and card.
//!
//! All state-changing operations go through the board. It consults pile state
//! plus the active variant script's legality predicates, mutates piles on
//! success, pushes a history entry, and recomputes derived state (movable
//! counts, completion, percent-complete) that the observer consumes.
//!
//! Everything runs on one logical turn per input event; there is no parallel
//! mutation of piles. Presentation-side animation state on cards is cosmetic
//! and never consulted by legality checks.

mod collect;
mod input;
pub(crate) mod role;
mod undo;

pub use input::{StrokeEvent, StrokeKind};
pub use undo::{LoadError, SavedBaize, SavedGame, SavedPile};

use smallvec::SmallVec;

use crate::core::card::{Card, CardId, Suit, ACE};
use crate::core::error::MoveError;
use crate::core::layout::{Metrics, Point, Rect, Slot};
use crate::core::pile::{FanType, MoveRule, Pile, PileId, PileRole};
use crate::core::rng::DealRng;
use crate::observer::{BaizeObserver, Cue, GameSignal, NullObserver, StatusLine, ToolbarState};
use crate::variants::{KlondikeCfg, Variant, VariantRegistry};

use input::DragState;

/// A short run of cards being relocated together. Index 0 is the grabbed
/// card; the last element is the top of the source pile.
pub type Tail = SmallVec<[CardId; 13]>;

/// The variant's piles, partitioned into named groups. Every pile created by
/// `build_piles` belongs to exactly one group and to the board's flat list.
#[derive(Clone, Debug)]
pub struct PileGroups {
    pub stock: PileId,
    pub waste: Option<PileId>,
    pub foundations: Vec<PileId>,
    pub tableaux: Vec<PileId>,
    pub cells: Vec<PileId>,
    pub reserves: Vec<PileId>,
    pub discards: Vec<PileId>,
}

impl Default for PileGroups {
    fn default() -> Self {
        Self {
            stock: PileId(0),
            waste: None,
            foundations: Vec::new(),
            tableaux: Vec::new(),
            cells: Vec::new(),
            reserves: Vec::new(),
            discards: Vec::new(),
        }
    }
}

/// The board. Created once per process and re-initialized on a new deal or a
/// variant change, which clears history, tail, and piles before rebuilding
/// from the variant script.
pub struct Baize {
    cards: Vec<Card>,
    piles: Vec<Pile>,
    groups: PileGroups,
    variant: Variant,
    variant_name: String,
    packs: u8,
    seed: u64,
    rng: DealRng,
    tail: Tail,
    drag: DragState,
    scroll_offset: Point,
    undo_stack: Vec<SavedBaize>,
    bookmark: usize,
    recycles: u32,
    moves: usize,
    foundation_moves: usize,
    metrics: Metrics,
    load_blocked: bool,
    observer: Box<dyn BaizeObserver>,
}

impl Baize {
    /// Create a board for the named variant and deal it.
    ///
    /// An unknown variant name is not fatal: the board falls back to Klondike,
    /// logs a warning, and blocks saved-game loading for this run so a stale
    /// save tied to the unknown variant is not reloaded.
    #[must_use]
    pub fn new(variant_name: &str, seed: u64) -> Self {
        Self::with_observer(variant_name, seed, Box::new(NullObserver))
    }

    /// As [`Baize::new`], with a presentation/audio observer attached.
    #[must_use]
    pub fn with_observer(
        variant_name: &str,
        seed: u64,
        observer: Box<dyn BaizeObserver>,
    ) -> Self {
        let (variant, resolved, load_blocked) = resolve_variant(variant_name);
        let mut baize = Self::bare(variant, resolved, seed, observer);
        baize.load_blocked = load_blocked;
        baize.start_fresh();
        baize
    }

    /// Create a board from an explicit variant value, for configurations the
    /// registry does not name (e.g. a custom recycle budget).
    #[must_use]
    pub fn with_variant(variant: Variant, seed: u64) -> Self {
        let name = variant.name().to_string();
        let mut baize = Self::bare(variant, name, seed, Box::new(NullObserver));
        baize.start_fresh();
        baize
    }

    fn bare(
        variant: Variant,
        variant_name: String,
        seed: u64,
        observer: Box<dyn BaizeObserver>,
    ) -> Self {
        Self {
            cards: Vec::new(),
            piles: Vec::new(),
            groups: PileGroups::default(),
            variant,
            variant_name,
            packs: 1,
            seed,
            rng: DealRng::new(seed),
            tail: Tail::new(),
            drag: DragState::default(),
            scroll_offset: Point::default(),
            undo_stack: Vec::new(),
            bookmark: 0,
            recycles: 0,
            moves: 0,
            foundation_moves: 0,
            metrics: Metrics::default(),
            load_blocked: false,
            observer,
        }
    }

    /// Rebuild piles and the card arena, then run the variant's deal.
    fn start_fresh(&mut self) {
        self.reset();
        let variant = self.variant.clone();
        variant.build_piles(self);
        self.fill_stock(true);
        variant.start_game(self);
        self.undo_push();
        self.recompute();
        self.update_toolbar();
        self.update_statusbar();
        self.signal_state();
        self.refan();
        self.observer.cue(Cue::Fan);
        log::info!(
            "dealt {} seed={} ({} piles, {} cards)",
            self.variant_name,
            self.seed,
            self.piles.len(),
            self.cards.len()
        );
    }

    fn reset(&mut self) {
        self.tail.clear();
        self.drag = DragState::default();
        self.undo_stack.clear();
        self.bookmark = 0;
        self.recycles = 0;
        self.piles.clear();
        self.cards.clear();
        self.groups = PileGroups::default();
    }

    /// Restart the current variant with a new seed.
    pub fn new_deal(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = DealRng::new(seed);
        self.start_fresh();
    }

    /// Switch variants. An unknown name leaves the board untouched.
    pub fn change_variant(&mut self, name: &str) {
        let Some(variant) = VariantRegistry::default().get(name) else {
            log::warn!("no variant named {name:?}");
            return;
        };
        self.variant = variant;
        self.variant_name = name.to_string();
        self.start_fresh();
    }

    /// Create the card arena and place every card, face down, in the stock.
    fn fill_stock(&mut self, shuffle: bool) {
        let stock = self.groups.stock;
        let count = self.packs as usize * 52;
        let mut ids = Vec::with_capacity(count);
        for pack in 0..self.packs {
            for suit in Suit::ALL {
                for rank in ACE..=crate::core::card::KING {
                    let id = CardId(self.cards.len() as u16);
                    self.cards.push(Card::new(suit, rank, pack, stock));
                    ids.push(id);
                }
            }
        }
        if shuffle {
            self.rng.shuffle(&mut ids);
        }
        self.piles[stock.index()].set_cards(ids.into_iter().collect());
    }

    // === Accessors ===

    #[must_use]
    pub fn card(&self, id: CardId) -> &Card {
        &self.cards[id.index()]
    }

    pub(crate) fn card_mut(&mut self, id: CardId) -> &mut Card {
        &mut self.cards[id.index()]
    }

    #[must_use]
    pub fn pile(&self, id: PileId) -> &Pile {
        &self.piles[id.index()]
    }

    pub(crate) fn pile_mut(&mut self, id: PileId) -> &mut Pile {
        &mut self.piles[id.index()]
    }

    /// All piles in registration order.
    pub fn piles(&self) -> impl Iterator<Item = (PileId, &Pile)> {
        self.piles.iter().enumerate().map(|(i, p)| (PileId(i), p))
    }

    /// The whole card arena, for inspection.
    pub fn cards(&self) -> impl Iterator<Item = (CardId, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, c)| (CardId(i as u16), c))
    }

    #[must_use]
    pub fn groups(&self) -> &PileGroups {
        &self.groups
    }

    #[must_use]
    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    #[must_use]
    pub fn variant_name(&self) -> &str {
        &self.variant_name
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub const fn recycles(&self) -> u32 {
        self.recycles
    }

    pub(crate) fn set_recycles(&mut self, recycles: u32) {
        self.recycles = recycles;
    }

    /// Count of possible (not useless) moves, recomputed after every change.
    #[must_use]
    pub const fn moves(&self) -> usize {
        self.moves
    }

    /// Count of possible moves to a Foundation, for the Collect affordance.
    #[must_use]
    pub const fn foundation_moves(&self) -> usize {
        self.foundation_moves
    }

    /// Number of committed moves this game (history length minus the deal).
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.undo_stack.len().saturating_sub(1)
    }

    /// The active drag tail, grabbed card first. Empty outside a drag.
    #[must_use]
    pub fn tail(&self) -> &[CardId] {
        &self.tail
    }

    #[must_use]
    pub const fn load_blocked(&self) -> bool {
        self.load_blocked
    }

    #[must_use]
    pub const fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Install new card metrics (after a window resize) and re-lay cards out.
    pub fn set_metrics(&mut self, metrics: Metrics) {
        self.metrics = metrics;
        self.refan();
    }

    /// Mark a card as animating. Gates drag start only; legality checks
    /// ignore it, so a card mid-animation is already in its destination pile.
    pub fn set_card_in_transit(&mut self, id: CardId, in_transit: bool) {
        self.card_mut(id).set_in_transit(in_transit);
    }

    // === Pile construction (variant scripts call these from build_piles) ===

    fn add_pile(&mut self, pile: Pile) -> PileId {
        let id = PileId(self.piles.len());
        self.piles.push(pile);
        id
    }

    pub(crate) fn new_stock(&mut self, slot: Slot, packs: u8) -> PileId {
        let id = self.add_pile(Pile::new(PileRole::Stock, slot, FanType::None, MoveRule::None));
        self.groups.stock = id;
        self.packs = packs;
        id
    }

    pub(crate) fn new_waste(&mut self, slot: Slot, fan: FanType) -> PileId {
        let id = self.add_pile(Pile::new(PileRole::Waste, slot, fan, MoveRule::One));
        self.groups.waste = Some(id);
        id
    }

    pub(crate) fn new_foundation(&mut self, slot: Slot) -> PileId {
        let id = self.add_pile(Pile::new(
            PileRole::Foundation,
            slot,
            FanType::None,
            MoveRule::None,
        ));
        self.groups.foundations.push(id);
        id
    }

    pub(crate) fn new_tableau(&mut self, slot: Slot, fan: FanType, move_rule: MoveRule) -> PileId {
        let id = self.add_pile(Pile::new(PileRole::Tableau, slot, fan, move_rule));
        self.groups.tableaux.push(id);
        id
    }

    pub(crate) fn new_cell(&mut self, slot: Slot) -> PileId {
        let id = self.add_pile(Pile::new(PileRole::Cell, slot, FanType::None, MoveRule::One));
        self.groups.cells.push(id);
        id
    }

    pub(crate) fn new_reserve(&mut self, slot: Slot, fan: FanType) -> PileId {
        let id = self.add_pile(Pile::new(PileRole::Reserve, slot, fan, MoveRule::One));
        self.groups.reserves.push(id);
        id
    }

    pub(crate) fn new_discard(&mut self, slot: Slot) -> PileId {
        let id = self.add_pile(Pile::new(
            PileRole::Discard,
            slot,
            FanType::None,
            MoveRule::None,
        ));
        self.groups.discards.push(id);
        id
    }

    pub(crate) fn set_pile_label(&mut self, id: PileId, label: Option<u8>) {
        self.pile_mut(id).set_label(label);
    }

    /// Stable-demote every card of `rank` in `pile` to the bottom.
    pub(crate) fn bury_rank(&mut self, pile: PileId, rank: u8) {
        let ranks: Vec<u8> = self.cards.iter().map(Card::rank).collect();
        self.pile_mut(pile).bury_rank(rank, |id| ranks[id.index()]);
    }

    /// Mirror the pile layout left-to-right, for left-handed play.
    pub fn mirror_slots(&mut self) {
        let visible: Vec<i32> = self
            .piles
            .iter()
            .filter(|p| !p.is_hidden())
            .map(|p| p.slot().x)
            .collect();
        let (Some(&min_x), Some(&max_x)) = (visible.iter().min(), visible.iter().max()) else {
            return;
        };
        for pile in &mut self.piles {
            let slot = pile.slot();
            if slot.is_hidden() {
                continue;
            }
            pile.set_slot(Slot::new(max_x - slot.x + min_x, slot.y));
            let mirrored = match pile.fan() {
                FanType::Right => FanType::Left,
                FanType::Left => FanType::Right,
                FanType::Right3 => FanType::Left3,
                FanType::Left3 => FanType::Right3,
                other => other,
            };
            pile.set_fan(mirrored);
        }
        self.refan();
    }

    // === Card movement primitives ===
    //
    // These relocate cards without consulting legality; the variant scripts
    // use them for dealing, and the validated paths call them after the
    // checks pass. Popping flips the moved card face up and exposes (flips
    // up) the new top of a non-Stock source; pushing onto the Stock flips
    // the card face down again.

    /// Move the top card of `src` to `dst`. Returns the card moved, or `None`
    /// if `src` was empty.
    pub fn move_card(&mut self, src: PileId, dst: PileId) -> Option<CardId> {
        let id = self.pile_mut(src).pop()?;
        {
            let card = self.card_mut(id);
            card.set_owner(dst);
            card.flip_up();
        }
        if self.pile(dst).role() == PileRole::Stock {
            self.card_mut(id).flip_down();
        }
        self.pile_mut(dst).push(id);
        self.expose_top(src);
        Some(id)
    }

    /// Move the run from `lead` to the top of its pile onto `dst`,
    /// preserving relative order.
    pub fn move_tail(&mut self, lead: CardId, dst: PileId) {
        let src = self.card(lead).owner();
        let Some(index) = self.pile(src).index_of(lead) else {
            return;
        };
        let run = self.pile_mut(src).split_off(index);
        for id in run.iter() {
            self.card_mut(*id).set_owner(dst);
        }
        self.pile_mut(dst).append(run);
        self.expose_top(src);
    }

    fn expose_top(&mut self, pile: PileId) {
        if self.pile(pile).role() == PileRole::Stock {
            return;
        }
        if let Some(top) = self.pile(pile).peek() {
            self.card_mut(top).flip_up();
        }
    }

    /// Move every waste card back onto the stock, consuming one recycle.
    /// Popping the waste one card at a time reverses the order, so dealing
    /// again replays the same sequence.
    pub(crate) fn recycle_waste_to_stock(&mut self) {
        let Some(waste) = self.groups.waste else {
            return;
        };
        if self.pile(waste).is_empty() {
            return;
        }
        if self.recycles == 0 {
            let msg = MoveError::NoRecycles.to_string();
            self.observer.toast_error(&msg);
            self.observer.cue(Cue::Error);
            return;
        }
        let stock = self.groups.stock;
        while self.move_card(waste, stock).is_some() {}
        self.recycles -= 1;
    }

    // === Tails and the validated move path ===

    /// Materialize the contiguous run from `card` to the top of its pile.
    /// The Stock refuses mid-pile grabs (only its top card ever forms a
    /// tail); returns an empty tail when the pile declines.
    #[must_use]
    pub fn make_tail(&self, card: CardId) -> Tail {
        let owner = self.card(card).owner();
        let pile = self.pile(owner);
        if pile.role() == PileRole::Stock && pile.peek() != Some(card) {
            return Tail::new();
        }
        match pile.index_of(card) {
            Some(index) => pile.iter().skip(index).collect(),
            None => Tail::new(),
        }
    }

    /// Propose moving the run starting at `index` in `src` onto `dst`,
    /// running the full legality chain. On success the move is committed,
    /// history pushed, and derived state recomputed.
    pub fn try_move(&mut self, src: PileId, index: usize, dst: PileId) -> Result<(), MoveError> {
        if index >= self.pile(src).len() {
            return Err(MoveError::Immovable);
        }
        let tail: Tail = self.pile(src).iter().skip(index).collect();
        self.attempt_tail_move(&tail, dst).map(|_| ())
    }

    /// The shared commit path for drops and programmatic moves.
    ///
    /// Check order: generic source-side rule, the variant's move veto, the
    /// destination role rule plus the variant's append predicate, then
    /// source/destination distinctness. Returns whether the board changed.
    pub(crate) fn attempt_tail_move(
        &mut self,
        tail: &[CardId],
        dst: PileId,
    ) -> Result<bool, MoveError> {
        let Some(&lead) = tail.first() else {
            return Ok(false);
        };
        let src = self.card(lead).owner();
        role::can_move_tail(self, tail)?;
        self.variant.tail_move_error(self, tail)?;
        role::can_accept_tail(self, dst, tail)?;
        if src == dst {
            return Ok(false);
        }

        let before = self.fingerprint();
        if tail.len() == 1 {
            self.move_card(src, dst);
        } else {
            self.move_tail(lead, dst);
        }
        let changed = before != self.fingerprint();
        if changed {
            self.after_user_move();
        }
        Ok(changed)
    }

    /// Single-tap a card: the variant decides (Stock deals to Waste; the
    /// default role behavior tries each foundation, then an empty cell).
    /// Counts as a move only if the board fingerprint actually changed.
    pub fn tap_card(&mut self, card: CardId) {
        let tail = self.make_tail(card);
        self.tap_tail(&tail);
    }

    pub(crate) fn tap_tail(&mut self, tail: &[CardId]) {
        if tail.is_empty() {
            return;
        }
        let before = self.fingerprint();
        let variant = self.variant.clone();
        variant.tail_tapped(self, tail);
        if before != self.fingerprint() {
            self.observer.cue(Cue::Slide);
            self.after_user_move();
        }
    }

    /// Single-tap a pile (e.g. an empty Stock to recycle the Waste).
    pub fn tap_pile(&mut self, pile: PileId) {
        let before = self.fingerprint();
        let variant = self.variant.clone();
        variant.pile_tapped(self, pile);
        if before != self.fingerprint() {
            self.observer.cue(Cue::Shove);
            self.after_user_move();
        }
    }

    /// Everything that follows a committed move: the variant's reactive
    /// rule, a history push, derived-state recomputation, and observer
    /// notifications.
    pub(crate) fn after_user_move(&mut self) {
        let variant = self.variant.clone();
        variant.after_move(self);
        self.undo_push();
        self.recompute();
        self.update_toolbar();
        self.update_statusbar();
        self.signal_state();
        self.refan();
    }

    // === Derived state ===

    /// Cheap content checksum over per-pile card counts. Detects "did this
    /// operation change the board" without deep comparison; collisions
    /// (different layouts, same counts) are an accepted limitation.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        use rustc_hash::FxHasher;
        use std::hash::Hasher;
        let mut hasher = FxHasher::default();
        for pile in &self.piles {
            hasher.write_usize(pile.len());
        }
        hasher.finish()
    }

    /// Re-derive the legal-move counts and per-card movable hints by testing
    /// every card's maximal tail against every other pile.
    pub(crate) fn recompute(&mut self) {
        for card in &mut self.cards {
            card.set_movable(false);
        }
        let mut moves = 0;
        let mut foundation_moves = 0;

        for src_i in 0..self.piles.len() {
            let src = PileId(src_i);
            for index in 0..self.pile(src).len() {
                let tail: Tail = self.pile(src).iter().skip(index).collect();
                if role::can_move_tail(self, &tail).is_err() {
                    continue;
                }
                if self.variant.tail_move_error(self, &tail).is_err() {
                    continue;
                }
                for dst_i in 0..self.piles.len() {
                    let dst = PileId(dst_i);
                    if dst == src {
                        continue;
                    }
                    if role::can_accept_tail(self, dst, &tail).is_err() {
                        continue;
                    }
                    if self.useless_move(src, &tail, dst) {
                        continue;
                    }
                    moves += 1;
                    if self.pile(dst).role() == PileRole::Foundation {
                        foundation_moves += 1;
                    }
                    self.cards[tail[0].index()].set_movable(true);
                }
            }
        }

        // Dealing from the stock, or recycling into it, is also a move.
        let stock = self.groups.stock;
        if !self.pile(stock).is_empty() {
            moves += 1;
            if let Some(top) = self.pile(stock).peek() {
                self.cards[top.index()].set_movable(true);
            }
        } else if let Some(waste) = self.groups.waste {
            if !self.pile(waste).is_empty() && self.recycles > 0 {
                moves += 1;
            }
        }

        self.moves = moves;
        self.foundation_moves = foundation_moves;
    }

    /// Moving an entire pile onto an empty pile of the same role and label
    /// accomplishes nothing; such moves are legal but not counted.
    fn useless_move(&self, src: PileId, tail: &[CardId], dst: PileId) -> bool {
        tail.len() == self.pile(src).len()
            && self.pile(dst).is_empty()
            && self.pile(dst).role() == self.pile(src).role()
            && self.pile(dst).label() == self.pile(src).label()
    }

    /// Every pile is in a legally-extendable state (weaker than complete;
    /// enables the "collect all" affordance).
    #[must_use]
    pub fn is_conformant(&self) -> bool {
        (0..self.piles.len()).all(|i| role::pile_conformant(self, PileId(i)))
    }

    /// Terminal win condition: every pile satisfies its completion predicate.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        (0..self.piles.len()).all(|i| role::pile_complete(self, PileId(i)))
    }

    /// `100 - scale(unsorted pairs, 0..total pairs, 0..100)`.
    #[must_use]
    pub fn percent_complete(&self) -> i32 {
        let mut pairs = 0usize;
        let mut unsorted = 0usize;
        for i in 0..self.piles.len() {
            let len = self.piles[i].len();
            if len > 1 {
                pairs += len - 1;
            }
            unsorted += role::pile_unsorted(self, PileId(i));
        }
        if pairs == 0 {
            return 100;
        }
        (100.0 - map_value(unsorted as f64, 0.0, pairs as f64, 0.0, 100.0)) as i32
    }

    // === Observer notifications ===

    fn update_toolbar(&mut self) {
        let state = ToolbarState {
            undo_enabled: self.undo_stack.len() > 1,
            collect_enabled: self.foundation_moves > 0,
        };
        self.observer.toolbar(state);
    }

    fn update_statusbar(&mut self) {
        let stock = self.groups.stock;
        let line = StatusLine {
            stock: if self.pile(stock).is_hidden() {
                None
            } else {
                Some(self.pile(stock).len())
            },
            waste: self.groups.waste.map(|w| self.pile(w).len()),
            moves: self.move_count(),
            percent: self.percent_complete(),
        };
        self.observer.statusbar(line);
    }

    fn signal_state(&mut self) {
        let signal = if self.is_complete() {
            GameSignal::Complete
        } else if self.is_conformant() {
            GameSignal::Collectable
        } else if self.moves == 0 {
            self.observer.toast("No movable cards");
            GameSignal::Stuck
        } else {
            GameSignal::Playing
        };
        self.observer.signal(signal);
    }

    pub(crate) fn notify_error(&mut self, err: &MoveError) {
        let msg = err.to_string();
        self.observer.toast_error(&msg);
        self.observer.cue(Cue::Error);
    }

    // === Layout ===

    /// Recompute every card's static baize position from its pile's slot and
    /// fan. Cancelling a drag is just "refan": ownership never changed, so
    /// positions snap back.
    pub(crate) fn refan(&mut self) {
        for i in 0..self.piles.len() {
            let pile = &self.piles[i];
            let base = self.metrics.slot_pos(pile.slot());
            let fan = pile.fan();
            let count = pile.len();
            let ids: Vec<CardId> = pile.iter().collect();
            for (index, id) in ids.into_iter().enumerate() {
                let pos = fan_pos(base, fan, index, count, &self.metrics);
                self.cards[id.index()].set_pos(pos);
            }
        }
    }

    /// The rectangle a pile occupies including its fanned cards, from the
    /// static layout (unaffected by an in-progress drag).
    #[must_use]
    pub(crate) fn fanned_rect(&self, id: PileId) -> Rect {
        let pile = self.pile(id);
        let base = self.metrics.slot_pos(pile.slot());
        let base_rect = self.metrics.card_rect(base);
        if pile.is_empty() {
            return base_rect;
        }
        let top = fan_pos(base, pile.fan(), pile.len() - 1, pile.len(), &self.metrics);
        base_rect.union(&self.metrics.card_rect(top))
    }
}

/// Position of the `index`-th card (of `count`) in a pile fanned from `base`.
fn fan_pos(base: Point, fan: FanType, index: usize, count: usize, metrics: &Metrics) -> Point {
    let dx = metrics.card_width / 4;
    let dy = metrics.card_height / 4;
    let i = index as i32;
    match fan {
        FanType::None => base,
        FanType::Down => base.offset(0, i * dy),
        FanType::Right => base.offset(i * dx, 0),
        FanType::Left => base.offset(-i * dx, 0),
        FanType::Down3 | FanType::Right3 | FanType::Left3 => {
            // Only the top three cards are spread.
            let start = count.saturating_sub(3) as i32;
            let j = (i - start).max(0);
            match fan {
                FanType::Down3 => base.offset(0, j * dy),
                FanType::Right3 => base.offset(j * dx, 0),
                _ => base.offset(-j * dx, 0),
            }
        }
    }
}

fn map_value(value: f64, in_lo: f64, in_hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    if (in_hi - in_lo).abs() < f64::EPSILON {
        return out_lo;
    }
    out_lo + (value - in_lo) * (out_hi - out_lo) / (in_hi - in_lo)
}

fn resolve_variant(name: &str) -> (Variant, String, bool) {
    let registry = VariantRegistry::default();
    match registry.get(name) {
        Some(variant) => (variant, name.to_string(), false),
        None => {
            log::warn!("no variant named {name:?}, falling back to Klondike");
            let fallback = registry
                .get("Klondike")
                .unwrap_or_else(|| Variant::Klondike(KlondikeCfg::default()));
            (fallback, "Klondike".to_string(), true)
        }
    }
}
