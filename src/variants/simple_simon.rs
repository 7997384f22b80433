//! Simple Simon: Spider-like building with whole-suit runs discarded.

use crate::board::Baize;
use crate::core::card::{down, down_suit, CardId, KING};
use crate::core::error::MoveError;
use crate::core::layout::Slot;
use crate::core::pile::{FanType, MoveRule, PileId, PileRole};

use super::tail_conformant;

pub(super) fn build_piles(b: &mut Baize) {
    b.new_stock(Slot::new(-5, -5), 1);
    for x in 3..=6 {
        b.new_discard(Slot::new(x, 0));
    }
    for x in 0..=9 {
        b.new_tableau(Slot::new(x, 1), FanType::Down, MoveRule::Any);
    }
}

pub(super) fn start_game(b: &mut Baize) {
    let stock = b.groups().stock;
    let tableaux = b.groups().tableaux.clone();
    let deal = [8, 8, 8, 7, 6, 5, 4, 3, 2, 1];
    for (&t, &count) in tableaux.iter().zip(deal.iter()) {
        for _ in 0..count {
            b.move_card(stock, t);
        }
    }
}

pub(super) fn tail_move_error(b: &Baize, tail: &[CardId]) -> Result<(), MoveError> {
    let Some(&lead) = tail.first() else {
        return Ok(());
    };
    match b.pile(b.card(lead).owner()).role() {
        PileRole::Tableau => tail_conformant(b, tail, down_suit),
        _ => Ok(()),
    }
}

pub(super) fn tail_append_error(b: &Baize, dst: PileId, tail: &[CardId]) -> Result<(), MoveError> {
    let Some(&lead) = tail.first() else {
        return Ok(());
    };
    let over = b.card(lead);
    let pile = b.pile(dst);
    match pile.role() {
        // The role check already required an empty discard and 13 cards;
        // they must also form a King-to-Ace same-suit run.
        PileRole::Discard => {
            if over.rank() != KING {
                return Err(MoveError::KingFirst);
            }
            tail_conformant(b, tail, down_suit)
        }
        PileRole::Tableau => match pile.peek() {
            None => Ok(()),
            Some(top) => down(b.card(top), over),
        },
        _ => Ok(()),
    }
}
