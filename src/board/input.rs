//! Pointer stroke handling: drag, drop, scroll, and tap.
//!
//! The host feeds raw strokes in baize coordinates; the board resolves them
//! against the static layout. A stroke addresses exactly one subject (a card
//! tail, a pile, or the baize itself), decided at stroke start. Cancelling a
//! drag never needs a rollback: ownership only changes on a successful drop,
//! so a cancel just re-lays cards out.

use smallvec::SmallVec;

use crate::core::card::CardId;
use crate::core::layout::Point;
use crate::core::pile::PileId;
use crate::observer::Cue;

use super::{Baize, Tail};

/// One pointer event. `at` is the stroke's current position, `delta` the
/// displacement since the stroke started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrokeEvent {
    pub kind: StrokeKind,
    pub at: Point,
    pub delta: Point,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeKind {
    Start,
    Move,
    Stop,
    Cancel,
    Tap,
}

/// What the current stroke addresses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum DragSubject {
    #[default]
    None,
    Tail,
    Pile(PileId),
    Baize,
}

/// Per-stroke state. Cleared when the stroke ends.
#[derive(Clone, Debug, Default)]
pub(crate) struct DragState {
    subject: DragSubject,
    dragged: bool,
    /// Static positions of the tail's cards at stroke start.
    base: SmallVec<[Point; 13]>,
    scroll_start: Point,
}

impl Baize {
    /// Feed one pointer stroke to the board.
    pub fn handle_stroke(&mut self, event: StrokeEvent) {
        match event.kind {
            StrokeKind::Start => self.stroke_start(event),
            StrokeKind::Move => self.stroke_move(event),
            StrokeKind::Stop => self.stroke_stop(),
            StrokeKind::Cancel => self.stroke_cancel(),
            StrokeKind::Tap => self.stroke_tap(),
        }
    }

    /// Current baize scroll offset, always <= 0 on both axes.
    #[must_use]
    pub const fn scroll_offset(&self) -> Point {
        self.scroll_offset
    }

    fn stroke_start(&mut self, event: StrokeEvent) {
        self.drag = DragState::default();
        self.tail.clear();

        if let Some(card) = self.card_at(event.at) {
            if self.card(card).in_transit() {
                self.observer.cue(Cue::Error);
                return;
            }
            let tail = self.make_tail(card);
            if tail.is_empty() {
                return;
            }
            self.drag.base = tail.iter().map(|&id| self.card(id).pos()).collect();
            self.tail = tail;
            self.drag.subject = DragSubject::Tail;
        } else if let Some(pile) = self.pile_at(event.at) {
            self.drag.subject = DragSubject::Pile(pile);
        } else {
            self.drag.subject = DragSubject::Baize;
            self.drag.scroll_start = self.scroll_offset;
        }
    }

    fn stroke_move(&mut self, event: StrokeEvent) {
        if event.delta != Point::default() {
            self.drag.dragged = true;
        }
        match self.drag.subject {
            DragSubject::Tail => {
                let tail = self.tail.clone();
                for (i, id) in tail.iter().enumerate() {
                    if let Some(base) = self.drag.base.get(i).copied() {
                        self.card_mut(*id).set_pos(base.offset(event.delta.x, event.delta.y));
                    }
                }
            }
            DragSubject::Baize => {
                let start = self.drag.scroll_start;
                self.scroll_offset = Point::new(
                    (start.x + event.delta.x).min(0),
                    (start.y + event.delta.y).min(0),
                );
            }
            DragSubject::Pile(_) | DragSubject::None => {}
        }
    }

    fn stroke_stop(&mut self) {
        if self.drag.subject == DragSubject::Tail {
            if self.drag.dragged {
                self.drop_tail();
            } else {
                self.cancel_tail_drag();
            }
        }
        self.drag = DragState::default();
    }

    fn stroke_cancel(&mut self) {
        if self.drag.subject == DragSubject::Tail {
            self.cancel_tail_drag();
        }
        self.drag = DragState::default();
    }

    fn stroke_tap(&mut self) {
        match self.drag.subject {
            DragSubject::Tail => {
                let tail = self.tail.clone();
                self.tail.clear();
                self.tap_tail(&tail);
                self.refan();
            }
            DragSubject::Pile(pile) => self.tap_pile(pile),
            DragSubject::Baize | DragSubject::None => {}
        }
        self.drag = DragState::default();
    }

    fn drop_tail(&mut self) {
        let tail: Tail = self.tail.clone();
        let Some(&lead) = tail.first() else {
            return;
        };
        match self.largest_drop_target(lead) {
            None => self.cancel_tail_drag(),
            Some(dst) => match self.attempt_tail_move(&tail, dst) {
                Ok(_) => {
                    self.tail.clear();
                    self.refan();
                }
                Err(err) => {
                    self.notify_error(&err);
                    self.cancel_tail_drag();
                }
            },
        }
    }

    fn cancel_tail_drag(&mut self) {
        self.tail.clear();
        self.refan();
    }

    /// The visible pile (other than the tail's owner) whose fanned rectangle
    /// most overlaps the dragged lead card. Ties keep the first-registered
    /// pile; zero overlap is no target.
    fn largest_drop_target(&self, lead: CardId) -> Option<PileId> {
        let src = self.card(lead).owner();
        let card_rect = self.metrics.card_rect(self.card(lead).pos());
        let mut best_area = 0i64;
        let mut best = None;
        for i in 0..self.piles.len() {
            let id = PileId(i);
            if id == src || self.pile(id).is_hidden() {
                continue;
            }
            let area = self.fanned_rect(id).intersection_area(&card_rect);
            if area > best_area {
                best_area = area;
                best = Some(id);
            }
        }
        best
    }

    /// Topmost card whose rectangle contains `at`, searching piles in
    /// registration order and each pile top-down.
    #[must_use]
    pub fn card_at(&self, at: Point) -> Option<CardId> {
        for pile in &self.piles {
            if pile.is_hidden() {
                continue;
            }
            for i in (0..pile.len()).rev() {
                if let Some(id) = pile.get(i) {
                    if self.metrics.card_rect(self.card(id).pos()).contains(at) {
                        return Some(id);
                    }
                }
            }
        }
        None
    }

    /// The visible pile whose base rectangle contains `at`.
    #[must_use]
    pub fn pile_at(&self, at: Point) -> Option<PileId> {
        for i in 0..self.piles.len() {
            let id = PileId(i);
            let pile = self.pile(id);
            if pile.is_hidden() {
                continue;
            }
            let base = self.metrics.slot_pos(pile.slot());
            if self.metrics.card_rect(base).contains(at) {
                return Some(id);
            }
        }
        None
    }
}
