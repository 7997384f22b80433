//! The stroke state machine: drag, drop, cancel, and tap.

use std::cell::RefCell;
use std::rc::Rc;

use baize::{
    Baize, BaizeObserver, CardId, Cue, PileId, Point, StrokeEvent, StrokeKind, Suit,
};

#[derive(Clone, Default)]
struct Recorder {
    errors: Rc<RefCell<Vec<String>>>,
    cues: Rc<RefCell<Vec<Cue>>>,
}

impl BaizeObserver for Recorder {
    fn toast_error(&mut self, msg: &str) {
        self.errors.borrow_mut().push(msg.to_string());
    }

    fn cue(&mut self, cue: Cue) {
        self.cues.borrow_mut().push(cue);
    }
}

fn find(b: &Baize, suit: Suit, rank: u8) -> CardId {
    b.cards()
        .find(|(_, c)| c.suit() == suit && c.rank() == rank)
        .map(|(id, _)| id)
        .unwrap()
}

fn place_top(b: &mut Baize, id: CardId, dst: PileId) {
    let stock = b.groups().stock;
    b.move_tail(id, dst);
    let i = b.pile(dst).index_of(id).unwrap();
    if let Some(above) = b.pile(dst).get(i + 1) {
        b.move_tail(above, stock);
    }
    b.move_card(dst, stock);
    b.move_card(stock, dst);
}

fn stroke(kind: StrokeKind, at: Point, delta: Point) -> StrokeEvent {
    StrokeEvent { kind, at, delta }
}

/// Drag `card` so its rectangle lands exactly on `to`, then release.
fn drag_to(b: &mut Baize, card: CardId, to: Point) {
    // Raw setup moves leave positions stale; re-lay cards out first.
    b.set_metrics(*b.metrics());
    let from = b.card(card).pos();
    let grab = Point::new(from.x + 5, from.y + 5);
    let delta = Point::new(to.x - from.x, to.y - from.y);
    b.handle_stroke(stroke(StrokeKind::Start, grab, Point::default()));
    b.handle_stroke(stroke(
        StrokeKind::Move,
        Point::new(grab.x + delta.x, grab.y + delta.y),
        delta,
    ));
    b.handle_stroke(stroke(StrokeKind::Stop, Point::default(), delta));
}

/// Drag `card` onto `target`'s current position and release.
fn drag_onto(b: &mut Baize, card: CardId, target: CardId) {
    b.set_metrics(*b.metrics());
    let to = b.card(target).pos();
    drag_to(b, card, to);
}

#[test]
fn test_deal_emits_fan_cue() {
    let rec = Recorder::default();
    let _b = Baize::with_observer("Klondike", 1, Box::new(rec.clone()));
    assert!(rec.cues.borrow().contains(&Cue::Fan));
}

#[test]
fn test_legal_drop_commits_move() {
    let rec = Recorder::default();
    let mut b = Baize::with_observer("Klondike", 11, Box::new(rec.clone()));
    let g = b.groups().clone();
    let ten = find(&b, Suit::Diamond, 10);
    let nine = find(&b, Suit::Spade, 9);
    b.move_tail(ten, g.stock);
    b.move_tail(nine, g.stock);
    place_top(&mut b, ten, g.tableaux[0]);
    place_top(&mut b, nine, g.tableaux[1]);

    drag_onto(&mut b, nine, ten);

    assert_eq!(b.card(nine).owner(), g.tableaux[0]);
    assert_eq!(b.move_count(), 1);
    assert!(rec.errors.borrow().is_empty());
}

#[test]
fn test_illegal_drop_rolls_back_and_toasts() {
    let rec = Recorder::default();
    let mut b = Baize::with_observer("Klondike", 11, Box::new(rec.clone()));
    let g = b.groups().clone();
    let five = find(&b, Suit::Heart, 5);
    let nine = find(&b, Suit::Spade, 9);
    b.move_tail(five, g.stock);
    b.move_tail(nine, g.stock);
    place_top(&mut b, five, g.tableaux[0]);
    place_top(&mut b, nine, g.tableaux[1]);
    let before = b.fingerprint();

    drag_onto(&mut b, nine, five);

    assert_eq!(b.card(nine).owner(), g.tableaux[1]);
    assert_eq!(b.fingerprint(), before);
    assert_eq!(b.move_count(), 0);
    assert_eq!(
        rec.errors.borrow().last().map(String::as_str),
        Some("Cards must be in descending order")
    );
    assert!(rec.cues.borrow().contains(&Cue::Error));
}

#[test]
fn test_drop_on_nothing_cancels_silently() {
    let rec = Recorder::default();
    let mut b = Baize::with_observer("Klondike", 11, Box::new(rec.clone()));
    let g = b.groups().clone();
    let nine = find(&b, Suit::Spade, 9);
    place_top(&mut b, nine, g.tableaux[1]);

    drag_to(&mut b, nine, Point::new(5000, 5000));

    assert_eq!(b.card(nine).owner(), g.tableaux[1]);
    assert_eq!(b.move_count(), 0);
    assert!(rec.errors.borrow().is_empty());
}

#[test]
fn test_cancel_restores_positions() {
    let mut b = Baize::new("Klondike", 11);
    let g = b.groups().clone();
    let top = b.pile(g.tableaux[3]).peek().unwrap();
    let before = b.card(top).pos();
    let grab = Point::new(before.x + 5, before.y + 5);

    b.handle_stroke(stroke(StrokeKind::Start, grab, Point::default()));
    b.handle_stroke(stroke(StrokeKind::Move, Point::new(grab.x + 90, grab.y + 90), Point::new(90, 90)));
    assert_ne!(b.card(top).pos(), before);

    b.handle_stroke(stroke(StrokeKind::Cancel, Point::default(), Point::default()));
    assert_eq!(b.card(top).pos(), before);
    assert_eq!(b.move_count(), 0);
}

#[test]
fn test_tap_stroke_deals_from_stock() {
    let mut b = Baize::new("Klondike", 11);
    let g = b.groups().clone();
    let waste = g.waste.unwrap();
    let top = b.pile(g.stock).peek().unwrap();
    let at = Point::new(b.card(top).pos().x + 5, b.card(top).pos().y + 5);

    b.handle_stroke(stroke(StrokeKind::Start, at, Point::default()));
    b.handle_stroke(stroke(StrokeKind::Tap, at, Point::default()));

    assert_eq!(b.pile(waste).len(), 2);
    assert_eq!(b.move_count(), 1);
}

#[test]
fn test_baize_scroll_clamps_to_origin() {
    let mut b = Baize::new("Klondike", 11);
    let nowhere = Point::new(4000, 4000);

    b.handle_stroke(stroke(StrokeKind::Start, nowhere, Point::default()));
    b.handle_stroke(stroke(StrokeKind::Move, nowhere, Point::new(-60, -40)));
    b.handle_stroke(stroke(StrokeKind::Stop, nowhere, Point::new(-60, -40)));
    assert_eq!(b.scroll_offset(), Point::new(-60, -40));

    // Dragging back past the origin clamps at zero.
    b.handle_stroke(stroke(StrokeKind::Start, nowhere, Point::default()));
    b.handle_stroke(stroke(StrokeKind::Move, nowhere, Point::new(500, 500)));
    b.handle_stroke(stroke(StrokeKind::Stop, nowhere, Point::new(500, 500)));
    assert_eq!(b.scroll_offset(), Point::default());
}

#[test]
fn test_grabbing_buried_stock_card_is_refused() {
    let mut b = Baize::new("Klondike", 11);
    let g = b.groups().clone();
    // Any non-top stock card refuses to form a tail.
    let buried = b.pile(g.stock).get(0).unwrap();
    assert!(b.make_tail(buried).is_empty());
    let top = b.pile(g.stock).peek().unwrap();
    assert_eq!(b.make_tail(top).len(), 1);
    assert_eq!(b.make_tail(top)[0], top);
}
