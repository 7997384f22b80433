//! Klondike, plus its Draw Three and Thoughtful configurations.

use crate::board::{role, Baize};
use crate::core::card::{
    down_alt_color, empty_accepts, up_suit, CardId, ACE, KING,
};
use crate::core::error::MoveError;
use crate::core::layout::Slot;
use crate::core::pile::{FanType, MoveRule, PileId, PileRole};

use super::tail_conformant;

/// Klondike knobs. `draw` is the cards-per-deal from the stock; `thoughtful`
/// deals the tableaux face up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KlondikeCfg {
    pub draw: u8,
    pub recycles: u32,
    pub thoughtful: bool,
}

impl Default for KlondikeCfg {
    fn default() -> Self {
        Self {
            draw: 1,
            recycles: 32767,
            thoughtful: false,
        }
    }
}

pub(super) fn build_piles(_cfg: &KlondikeCfg, b: &mut Baize) {
    b.new_stock(Slot::new(0, 0), 1);
    b.new_waste(Slot::new(1, 0), FanType::Right3);
    for x in 3..=6 {
        let f = b.new_foundation(Slot::new(x, 0));
        b.set_pile_label(f, Some(ACE));
    }
    for x in 0..=6 {
        let t = b.new_tableau(Slot::new(x, 1), FanType::Down, MoveRule::Any);
        b.set_pile_label(t, Some(KING));
    }
}

pub(super) fn start_game(cfg: &KlondikeCfg, b: &mut Baize) {
    b.set_recycles(cfg.recycles);
    let stock = b.groups().stock;
    let tableaux = b.groups().tableaux.clone();
    // Classic triangle: pile n gets n+1 cards, only the last face up.
    for (i, &t) in tableaux.iter().enumerate() {
        for j in 0..=i {
            let dealt = b.move_card(stock, t);
            if !cfg.thoughtful && j < i {
                if let Some(id) = dealt {
                    b.card_mut(id).flip_down();
                }
            }
        }
    }
    if let Some(waste) = b.groups().waste {
        for _ in 0..cfg.draw {
            if b.move_card(stock, waste).is_none() {
                break;
            }
        }
    }
}

pub(super) fn after_move(cfg: &KlondikeCfg, b: &mut Baize) {
    let stock = b.groups().stock;
    let Some(waste) = b.groups().waste else {
        return;
    };
    if b.pile(waste).is_empty() {
        for _ in 0..cfg.draw {
            if b.move_card(stock, waste).is_none() {
                break;
            }
        }
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

pub(super) fn tail_tapped(cfg: &KlondikeCfg, b: &mut Baize, tail: &[CardId]) {
    let Some(&lead) = tail.first() else {
        return;
    };
    let src = b.card(lead).owner();
    if b.pile(src).role() == PileRole::Stock {
        let stock = b.groups().stock;
        let Some(waste) = b.groups().waste else {
            return;
        };
        for _ in 0..cfg.draw {
            if b.move_card(stock, waste).is_none() {
                break;
            }
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
