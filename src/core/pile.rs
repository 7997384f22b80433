//! Piles: ordered card sequences with a role, a slot, and a fan style.
//!
//! A pile never silently drops a card: popping or peeking an empty pile
//! returns `None`, which deal loops and auto-collect rely on as their normal
//! stop condition. Card flipping and ownership bookkeeping happen at the
//! board level, so the operations here are pure sequence manipulation.
//!
//! The card sequence is an `im::Vector`, so the per-move undo snapshots the
//! board takes are O(1) structural clones rather than deep copies.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::card::CardId;
use crate::core::layout::Slot;

/// Index into the board's pile arena. Pile registration order is part of a
/// variant's contract: drop-target ties resolve in favor of the
/// first-registered pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileId(pub usize);

impl PileId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// What a pile is for. Role determines the generic half of move legality;
/// the variant script supplies the comparison semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileRole {
    Stock,
    Waste,
    Foundation,
    Tableau,
    Cell,
    Reserve,
    Discard,
}

/// How a pile's cards are spread visually. Irrelevant to legality, but the
/// fanned rectangle is what drop targeting intersects against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FanType {
    None,
    Down,
    Left,
    Right,
    /// Only the top three cards are fanned (classic Waste).
    Down3,
    Left3,
    Right3,
}

/// Source-side constraint on dragging a run from a Tableau.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRule {
    /// Cards never leave by dragging.
    None,
    /// One card at a time.
    One,
    /// One card, or more if enough free cells/empty piles exist.
    OnePlus,
    /// One card or the entire pile, nothing in between.
    OneOrAll,
    /// Any contiguous run (the variant still checks conformance).
    Any,
}

/// An ordered stack of cards (index 0 = bottom) plus its placement metadata.
#[derive(Clone, Debug)]
pub struct Pile {
    role: PileRole,
    slot: Slot,
    fan: FanType,
    move_rule: MoveRule,
    label: Option<u8>,
    cards: Vector<CardId>,
}

impl Pile {
    #[must_use]
    pub fn new(role: PileRole, slot: Slot, fan: FanType, move_rule: MoveRule) -> Self {
        Self {
            role,
            slot,
            fan,
            move_rule,
            label: None,
            cards: Vector::new(),
        }
    }

    #[must_use]
    pub const fn role(&self) -> PileRole {
        self.role
    }

    #[must_use]
    pub const fn slot(&self) -> Slot {
        self.slot
    }

    pub(crate) fn set_slot(&mut self, slot: Slot) {
        self.slot = slot;
    }

    #[must_use]
    pub const fn fan(&self) -> FanType {
        self.fan
    }

    pub(crate) fn set_fan(&mut self, fan: FanType) {
        self.fan = fan;
    }

    #[must_use]
    pub const fn move_rule(&self) -> MoveRule {
        self.move_rule
    }

    /// The rank an empty pile accepts, if restricted.
    #[must_use]
    pub const fn label(&self) -> Option<u8> {
        self.label
    }

    pub(crate) fn set_label(&mut self, label: Option<u8>) {
        self.label = label;
    }

    /// Hidden piles (negative slot) are skipped by layout and hit testing.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.slot.is_hidden()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<CardId> {
        self.cards.get(index).copied()
    }

    /// Top card without removing it; `None` for an empty pile.
    #[must_use]
    pub fn peek(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    /// Remove and return the top card; `None` for an empty pile.
    pub(crate) fn pop(&mut self) -> Option<CardId> {
        self.cards.pop_back()
    }

    pub(crate) fn push(&mut self, card: CardId) {
        self.cards.push_back(card);
    }

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.index_of(&card).is_some()
    }

    /// Position of `card` in this pile, bottom = 0.
    #[must_use]
    pub fn index_of(&self, card: CardId) -> Option<usize> {
        self.cards.index_of(&card)
    }

    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().copied()
    }

    /// The card sequence, for snapshots.
    #[must_use]
    pub(crate) fn cards(&self) -> &Vector<CardId> {
        &self.cards
    }

    pub(crate) fn set_cards(&mut self, cards: Vector<CardId>) {
        self.cards = cards;
    }

    /// Split off the run from `index` to the top, leaving `0..index` behind.
    pub(crate) fn split_off(&mut self, index: usize) -> Vector<CardId> {
        self.cards.split_off(index)
    }

    pub(crate) fn append(&mut self, run: Vector<CardId>) {
        self.cards.append(run);
    }

    /// Stable-demote every card of `rank` to the bottom of the pile,
    /// preserving the relative order of everything else (Baker's Dozen
    /// buries its Kings this way after the deal).
    pub(crate) fn bury_rank(&mut self, rank: u8, rank_of: impl Fn(CardId) -> u8) {
        let (buried, rest): (Vec<CardId>, Vec<CardId>) =
            self.cards.iter().copied().partition(|&id| rank_of(id) == rank);
        self.cards = buried.into_iter().chain(rest).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::Slot;

    fn tableau() -> Pile {
        Pile::new(PileRole::Tableau, Slot::new(0, 0), FanType::Down, MoveRule::Any)
    }

    #[test]
    fn test_push_pop_peek() {
        let mut p = tableau();
        assert_eq!(p.pop(), None);
        assert_eq!(p.peek(), None);

        p.push(CardId(3));
        p.push(CardId(7));
        assert_eq!(p.len(), 2);
        assert_eq!(p.peek(), Some(CardId(7)));
        assert_eq!(p.pop(), Some(CardId(7)));
        assert_eq!(p.pop(), Some(CardId(3)));
        assert_eq!(p.pop(), None);
    }

    #[test]
    fn test_split_and_append() {
        let mut p = tableau();
        for i in 0..5 {
            p.push(CardId(i));
        }
        let run = p.split_off(2);
        assert_eq!(p.len(), 2);
        assert_eq!(run.len(), 3);
        assert_eq!(run[0], CardId(2));

        let mut q = tableau();
        q.append(run);
        assert_eq!(q.peek(), Some(CardId(4)));
    }

    #[test]
    fn test_index_of() {
        let mut p = tableau();
        p.push(CardId(10));
        p.push(CardId(20));
        assert_eq!(p.index_of(CardId(20)), Some(1));
        assert_eq!(p.index_of(CardId(99)), None);
    }

    #[test]
    fn test_bury_rank() {
        let mut p = tableau();
        // ids 0..4 with pretend ranks: 5, 13, 2, 13
        p.push(CardId(0));
        p.push(CardId(1));
        p.push(CardId(2));
        p.push(CardId(3));
        let ranks = [5u8, 13, 2, 13];
        p.bury_rank(13, |id| ranks[id.index()]);

        let order: Vec<CardId> = p.iter().collect();
        assert_eq!(order, vec![CardId(1), CardId(3), CardId(0), CardId(2)]);
    }
}
