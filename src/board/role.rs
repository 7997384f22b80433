//! Role-generic halves of move legality and derived-state predicates.
//!
//! Every pile role carries a fixed source-side rule, a fixed destination-side
//! rule, a conformance predicate, and a completion predicate. The variant
//! script only ever supplies the card-comparison semantics layered on top.

use crate::core::card::CardId;
use crate::core::error::MoveError;
use crate::core::pile::{MoveRule, PileId, PileRole};

use super::Baize;

/// Can this tail leave its pile at all? Checks face state, the source role,
/// and the pile's move rule. The variant's conformance veto runs separately.
pub(crate) fn can_move_tail(b: &Baize, tail: &[CardId]) -> Result<(), MoveError> {
    let Some(&lead) = tail.first() else {
        return Err(MoveError::Immovable);
    };
    for &id in tail {
        if !b.card(id).is_face_up() {
            return Err(MoveError::FaceDown);
        }
    }
    let src = b.card(lead).owner();
    match b.pile(src).role() {
        PileRole::Stock => Err(MoveError::FromStock),
        PileRole::Foundation => Err(MoveError::FromFoundation),
        PileRole::Discard => Err(MoveError::FromDiscard),
        PileRole::Waste | PileRole::Cell | PileRole::Reserve => {
            if tail.len() == 1 {
                Ok(())
            } else {
                Err(MoveError::OneCardOnly)
            }
        }
        PileRole::Tableau => match b.pile(src).move_rule() {
            MoveRule::None => Err(MoveError::Immovable),
            MoveRule::One => {
                if tail.len() == 1 {
                    Ok(())
                } else {
                    Err(MoveError::OneCardOnly)
                }
            }
            MoveRule::OneOrAll => {
                if tail.len() == 1 || tail.len() == b.pile(src).len() {
                    Ok(())
                } else {
                    Err(MoveError::OneOrWhole)
                }
            }
            MoveRule::OnePlus => {
                let room = power_moves(b, src);
                if tail.len() > room {
                    Err(MoveError::TooManyCards {
                        moved: tail.len(),
                        room,
                    })
                } else {
                    Ok(())
                }
            }
            MoveRule::Any => Ok(()),
        },
    }
}

/// How many cards can move as one unit when single-card moves must be staged
/// through free cells and empty tableaux: `(free cells + 1) << empty piles`,
/// not counting the source pile itself.
fn power_moves(b: &Baize, src: PileId) -> usize {
    let free_cells = b
        .groups()
        .cells
        .iter()
        .filter(|&&c| b.pile(c).is_empty())
        .count();
    let empty_tableaux = b
        .groups()
        .tableaux
        .iter()
        .filter(|&&t| t != src && b.pile(t).is_empty())
        .count();
    (free_cells + 1) << empty_tableaux.min(8)
}

/// Can `dst` receive this tail? Checks the destination role's fixed rule,
/// then defers to the variant's append predicate.
pub(crate) fn can_accept_tail(b: &Baize, dst: PileId, tail: &[CardId]) -> Result<(), MoveError> {
    let Some(&lead) = tail.first() else {
        return Err(MoveError::Immovable);
    };
    match b.pile(dst).role() {
        PileRole::Stock => return Err(MoveError::ToStock),
        PileRole::Reserve => return Err(MoveError::ToReserve),
        PileRole::Waste => {
            if tail.len() != 1 {
                return Err(MoveError::OneCardOnly);
            }
            let src = b.card(lead).owner();
            if b.pile(src).role() != PileRole::Stock {
                return Err(MoveError::WasteFromStock);
            }
        }
        PileRole::Cell => {
            if tail.len() != 1 {
                return Err(MoveError::OneCardOnly);
            }
            if !b.pile(dst).is_empty() {
                return Err(MoveError::CellOccupied);
            }
        }
        PileRole::Foundation => {
            if tail.len() != 1 {
                return Err(MoveError::OneCardOnly);
            }
        }
        PileRole::Discard => {
            if !b.pile(dst).is_empty() || tail.len() != 13 {
                return Err(MoveError::DiscardFullRun);
            }
        }
        PileRole::Tableau => {}
    }
    b.variant().tail_append_error(b, dst, tail)
}

/// Is this pile in a legally-extendable state?
pub(crate) fn pile_conformant(b: &Baize, id: PileId) -> bool {
    let pile = b.pile(id);
    match pile.role() {
        PileRole::Stock => pile.is_empty(),
        PileRole::Waste | PileRole::Reserve => pile.len() <= 1,
        PileRole::Cell | PileRole::Foundation | PileRole::Discard => true,
        PileRole::Tableau => {
            pile.iter().all(|c| b.card(c).is_face_up())
                && b.variant().unsorted_pairs(b, id) == 0
        }
    }
}

/// Does this pile satisfy the win condition?
pub(crate) fn pile_complete(b: &Baize, id: PileId) -> bool {
    let pile = b.pile(id);
    match pile.role() {
        PileRole::Foundation => true,
        PileRole::Discard => pile.is_empty() || pile.len() == 13,
        _ => pile.is_empty(),
    }
}

/// Unsorted-pair count contributed to the percent-complete metric.
pub(crate) fn pile_unsorted(b: &Baize, id: PileId) -> usize {
    let pile = b.pile(id);
    match pile.role() {
        PileRole::Tableau => b.variant().unsorted_pairs(b, id),
        PileRole::Stock | PileRole::Waste | PileRole::Reserve => pile.len().saturating_sub(1),
        PileRole::Foundation | PileRole::Cell | PileRole::Discard => 0,
    }
}

/// Role-level tap dispatch for a tail whose variant declined to handle it.
/// Foundations and discards ignore taps; the stock is always variant-handled.
pub(crate) fn tail_tapped(b: &mut Baize, tail: &[CardId]) {
    let Some(&lead) = tail.first() else {
        return;
    };
    match b.pile(b.card(lead).owner()).role() {
        PileRole::Stock | PileRole::Foundation | PileRole::Discard => {}
        _ => default_tail_tapped(b, tail),
    }
}

/// Default tap: send a single card to the first foundation that will take
/// it, else to an empty cell.
pub(crate) fn default_tail_tapped(b: &mut Baize, tail: &[CardId]) {
    let Some(&lead) = tail.first() else {
        return;
    };
    if tail.len() != 1 {
        return;
    }
    let src = b.card(lead).owner();
    let foundations = b.groups().foundations.clone();
    for f in foundations {
        if can_accept_tail(b, f, tail).is_ok() {
            b.move_card(src, f);
            return;
        }
    }
    let cells = b.groups().cells.clone();
    for c in cells {
        if b.pile(c).is_empty() && can_accept_tail(b, c, tail).is_ok() {
            b.move_card(src, c);
            return;
        }
    }
}
