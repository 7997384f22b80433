//! Auto-collect: repeatedly send safe cards to the foundations.

use crate::core::pile::PileId;

use super::{role, Baize};

impl Baize {
    /// Send every card the foundations will currently accept, sweeping
    /// waste, cells, reserves, then tableaux, and repeating until a full
    /// pass moves nothing. Each card moved is a separate history entry, so
    /// collect is undoable step by step.
    pub fn collect(&mut self) {
        loop {
            let mut moved = 0;
            if let Some(waste) = self.groups().waste {
                moved += self.collect_from_pile(waste);
            }
            for cell in self.groups().cells.clone() {
                moved += self.collect_from_pile(cell);
            }
            for reserve in self.groups().reserves.clone() {
                moved += self.collect_from_pile(reserve);
            }
            for tableau in self.groups().tableaux.clone() {
                moved += self.collect_from_pile(tableau);
            }
            if moved == 0 {
                break;
            }
        }
    }

    /// Move the pile's top card to a foundation as many times as one will
    /// accept it. Returns how many cards moved.
    fn collect_from_pile(&mut self, src: PileId) -> usize {
        let mut moved = 0;
        loop {
            let Some(top) = self.pile(src).peek() else {
                break;
            };
            let tail = [top];
            let foundations = self.groups().foundations.clone();
            let Some(dst) = foundations
                .into_iter()
                .find(|&f| role::can_accept_tail(self, f, &tail).is_ok())
            else {
                break;
            };
            self.move_card(src, dst);
            self.after_user_move();
            moved += 1;
        }
        moved
    }
}
