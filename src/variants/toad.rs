//! American Toad: two packs, a 20-card reserve, wrapped same-suit building,
//! and foundations based on whichever rank is dealt first.

use crate::board::{role, Baize};
use crate::core::card::{down_suit_wrap, empty_accepts, up_suit_wrap, CardId};
use crate::core::error::MoveError;
use crate::core::layout::Slot;
use crate::core::pile::{FanType, MoveRule, PileId, PileRole};

pub(super) fn build_piles(b: &mut Baize) {
    b.new_stock(Slot::new(0, 0), 2);
    b.new_waste(Slot::new(1, 0), FanType::Right3);
    b.new_reserve(Slot::new(3, 0), FanType::Right);
    for x in 0..=7 {
        b.new_foundation(Slot::new(x, 1));
    }
    for x in 0..=7 {
        b.new_tableau(Slot::new(x, 2), FanType::Down, MoveRule::OneOrAll);
    }
}

pub(super) fn start_game(b: &mut Baize) {
    b.set_recycles(1);
    let stock = b.groups().stock;

    let reserve = b.groups().reserves[0];
    for i in 0..20 {
        let dealt = b.move_card(stock, reserve);
        if i < 19 {
            if let Some(id) = dealt {
                b.card_mut(id).flip_down();
            }
        }
    }

    let tableaux = b.groups().tableaux.clone();
    for &t in &tableaux {
        b.move_card(stock, t);
    }

    // The first foundation card fixes the base rank for all eight.
    let foundations = b.groups().foundations.clone();
    if let Some(first) = b.move_card(stock, foundations[0]) {
        let base = b.card(first).rank();
        for &f in &foundations {
            b.set_pile_label(f, Some(base));
        }
    }

    if let Some(waste) = b.groups().waste {
        b.move_card(stock, waste);
    }
}

pub(super) fn after_move(b: &mut Baize) {
    let stock = b.groups().stock;
    let reserve = b.groups().reserves[0];
    let tableaux = b.groups().tableaux.clone();
    for &t in &tableaux {
        if b.pile(t).is_empty() && !b.pile(reserve).is_empty() {
            b.move_card(reserve, t);
        }
    }
    if let Some(waste) = b.groups().waste {
        if b.pile(waste).is_empty() && !b.pile(stock).is_empty() {
            b.move_card(stock, waste);
        }
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
            Some(top) => up_suit_wrap(b.card(top), over),
        },
        PileRole::Tableau => match pile.peek() {
            // An emptied tableau is refilled only from the waste.
            None => {
                if b.pile(over.owner()).role() == PileRole::Waste {
                    Ok(())
                } else {
                    Err(MoveError::WasteOnly)
                }
            }
            Some(top) => down_suit_wrap(b.card(top), over),
        },
        _ => Ok(()),
    }
}

pub(super) fn tail_tapped(b: &mut Baize, tail: &[CardId]) {
    let Some(&lead) = tail.first() else {
        return;
    };
    let src = b.card(lead).owner();
    if b.pile(src).role() == PileRole::Stock {
        let stock = b.groups().stock;
        if let Some(waste) = b.groups().waste {
            b.move_card(stock, waste);
        }
    } else {
        role::tail_tapped(b, tail);
    }
}

pub(super) fn pile_tapped(b: &mut Baize, pile: PileId) {
    if b.pile(pile).role() == PileRole::Stock && b.pile(pile).is_empty() {
        b.recycle_waste_to_stock();
    }
}
