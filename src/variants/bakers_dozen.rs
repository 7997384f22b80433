//! Baker's Dozen: thirteen single-card-move tableaux, Kings buried at deal.

use crate::board::Baize;
use crate::core::card::{down, empty_accepts, up_suit, CardId, ACE, KING};
use crate::core::error::MoveError;
use crate::core::layout::Slot;
use crate::core::pile::{FanType, MoveRule, PileId, PileRole};

pub(super) fn build_piles(b: &mut Baize) {
    b.new_stock(Slot::new(-5, -5), 1);
    for x in 0..=6 {
        b.new_tableau(Slot::new(x, 0), FanType::Down, MoveRule::One);
    }
    for x in 0..=5 {
        b.new_tableau(Slot::new(x, 3), FanType::Down, MoveRule::One);
    }
    // Tableaux first: on an ambiguous drop the tie goes to a tableau.
    for y in 0..=3 {
        let f = b.new_foundation(Slot::new(9, y));
        b.set_pile_label(f, Some(ACE));
    }
}

pub(super) fn start_game(b: &mut Baize) {
    let stock = b.groups().stock;
    let tableaux = b.groups().tableaux.clone();
    for &t in &tableaux {
        for _ in 0..4 {
            b.move_card(stock, t);
        }
        b.bury_rank(t, KING);
    }
}

pub(super) fn tail_append_error(b: &Baize, dst: PileId, tail: &[CardId]) -> Result<(), MoveError> {
    let Some(&lead) = tail.first() else {
        return Ok(());
    };
    let over = b.card(lead);
    let pile = b.pile(dst);
    match pile.role() {
        PileRole::Foundation => match pile.peek() {
            None => empty_accepts(pile.label(), over),
            Some(top) => up_suit(b.card(top), over),
        },
        PileRole::Tableau => match pile.peek() {
            // Emptied tableaux stay empty.
            None => Err(MoveError::EmptyTableau),
            Some(top) => down(b.card(top), over),
        },
        _ => Ok(()),
    }
}
