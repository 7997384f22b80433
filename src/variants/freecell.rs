//! Freecell: four free cells, everything dealt face up, staged moves.

use crate::board::Baize;
use crate::core::card::{down_alt_color, empty_accepts, up_suit, CardId, ACE};
use crate::core::error::MoveError;
use crate::core::layout::Slot;
use crate::core::pile::{FanType, MoveRule, PileId, PileRole};

use super::tail_conformant;

pub(super) fn build_piles(b: &mut Baize) {
    b.new_stock(Slot::new(-5, -5), 1);
    for x in 0..=3 {
        b.new_cell(Slot::new(x, 0));
    }
    for x in 4..=7 {
        let f = b.new_foundation(Slot::new(x, 0));
        b.set_pile_label(f, Some(ACE));
    }
    for x in 0..=7 {
        b.new_tableau(Slot::new(x, 1), FanType::Down, MoveRule::OnePlus);
    }
}

pub(super) fn start_game(b: &mut Baize) {
    let stock = b.groups().stock;
    let tableaux = b.groups().tableaux.clone();
    for (i, &t) in tableaux.iter().enumerate() {
        let count = if i < 4 { 7 } else { 6 };
        for _ in 0..count {
            b.move_card(stock, t);
        }
    }
    if !b.pile(stock).is_empty() {
        log::warn!("cards left in stock after deal");
    }
}

pub(super) fn tail_move_error(b: &Baize, tail: &[CardId]) -> Result<(), MoveError> {
    let Some(&lead) = tail.first() else {
        return Ok(());
    };
    match b.pile(b.card(lead).owner()).role() {
        PileRole::Tableau => tail_conformant(b, tail, down_alt_color),
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
        PileRole::Foundation => match pile.peek() {
            None => empty_accepts(pile.label(), over),
            Some(top) => up_suit(b.card(top), over),
        },
        PileRole::Tableau => match pile.peek() {
            None => empty_accepts(pile.label(), over),
            Some(top) => down_alt_color(b.card(top), over),
        },
        _ => Ok(()),
    }
}
