//! Klondike rules: deal shape, building, stock dealing, and recycling.

use baize::{Baize, CardId, KlondikeCfg, MoveError, PileId, Suit, Variant, ACE, KING};

fn find(b: &Baize, suit: Suit, rank: u8) -> CardId {
    b.cards()
        .find(|(_, c)| c.suit() == suit && c.rank() == rank)
        .map(|(id, _)| id)
        .unwrap()
}

/// Force `id` to be the face-up top card of `dst`, using raw relocation.
/// Displaced cards are dumped onto the stock.
fn place_top(b: &mut Baize, id: CardId, dst: PileId) {
    let stock = b.groups().stock;
    b.move_tail(id, dst);
    let i = b.pile(dst).index_of(id).unwrap();
    if let Some(above) = b.pile(dst).get(i + 1) {
        b.move_tail(above, stock);
    }
    b.move_card(dst, stock);
    b.move_card(stock, dst);
    assert_eq!(b.pile(dst).peek(), Some(id));
    assert!(b.card(id).is_face_up());
}

fn clear_pile(b: &mut Baize, pile: PileId) {
    let stock = b.groups().stock;
    if let Some(bottom) = b.pile(pile).get(0) {
        b.move_tail(bottom, stock);
    }
}

#[test]
fn test_deal_shape() {
    let b = Baize::new("Klondike", 1);
    let g = b.groups();

    assert_eq!(b.pile(g.stock).len(), 23);
    assert_eq!(b.pile(g.waste.unwrap()).len(), 1);
    assert_eq!(g.foundations.len(), 4);
    assert_eq!(g.tableaux.len(), 7);
    for &f in &g.foundations {
        assert!(b.pile(f).is_empty());
        assert_eq!(b.pile(f).label(), Some(ACE));
    }
    for (i, &t) in g.tableaux.iter().enumerate() {
        assert_eq!(b.pile(t).len(), i + 1);
        let top = b.pile(t).peek().unwrap();
        assert!(b.card(top).is_face_up());
        for j in 0..i {
            let buried = b.pile(t).get(j).unwrap();
            assert!(!b.card(buried).is_face_up());
        }
    }
    assert_eq!(b.move_count(), 0);
    assert!(b.moves() >= 1);
    // Dealing from the stock is always an available move, and its top card
    // carries the movable hint.
    let stock_top = b.pile(g.stock).peek().unwrap();
    assert!(b.card(stock_top).is_movable());
}

#[test]
fn test_same_seed_same_deal() {
    let a = Baize::new("Klondike", 99);
    let b = Baize::new("Klondike", 99);
    for ((_, p), (_, q)) in a.piles().zip(b.piles()) {
        let pa: Vec<CardId> = p.iter().collect();
        let qa: Vec<CardId> = q.iter().collect();
        assert_eq!(pa, qa);
    }
}

#[test]
fn test_ace_to_empty_foundation() {
    let mut b = Baize::new("Klondike", 7);
    let g = b.groups().clone();
    let ace = find(&b, Suit::Spade, ACE);
    let t0 = g.tableaux[0];

    clear_pile(&mut b, t0);
    place_top(&mut b, ace, t0);

    b.try_move(t0, 0, g.foundations[0]).unwrap();
    assert_eq!(b.pile(g.foundations[0]).peek(), Some(ace));
    assert_eq!(b.card(ace).owner(), g.foundations[0]);
    assert_eq!(b.move_count(), 1);
}

#[test]
fn test_foundation_builds_up_in_suit() {
    let mut b = Baize::new("Klondike", 7);
    let g = b.groups().clone();
    let f = g.foundations[0];
    let t0 = g.tableaux[0];
    let t1 = g.tableaux[1];

    clear_pile(&mut b, t0);
    let c = find(&b, Suit::Spade, ACE);
    place_top(&mut b, c, t0);
    b.try_move(t0, 0, f).unwrap();

    clear_pile(&mut b, t1);
    let c = find(&b, Suit::Heart, 2);
    place_top(&mut b, c, t1);
    let i = b.pile(t1).len() - 1;
    assert_eq!(b.try_move(t1, i, f), Err(MoveError::WrongSuit));

    let c = find(&b, Suit::Spade, 3);
    place_top(&mut b, c, t1);
    let i = b.pile(t1).len() - 1;
    assert_eq!(b.try_move(t1, i, f), Err(MoveError::NotAscending));

    let c = find(&b, Suit::Spade, 2);
    place_top(&mut b, c, t1);
    b.try_move(t1, b.pile(t1).len() - 1, f).unwrap();
    assert_eq!(b.pile(f).len(), 2);
}

#[test]
fn test_empty_tableau_needs_king() {
    let mut b = Baize::new("Klondike", 3);
    let g = b.groups().clone();
    let t0 = g.tableaux[0];
    let t1 = g.tableaux[1];

    clear_pile(&mut b, t0);
    let c = find(&b, Suit::Heart, 5);
    place_top(&mut b, c, t1);
    let i = b.pile(t1).len() - 1;
    assert_eq!(b.try_move(t1, i, t0), Err(MoveError::EmptyNeeds(KING)));

    let c = find(&b, Suit::Heart, KING);
    place_top(&mut b, c, t1);
    let i = b.pile(t1).len() - 1;
    b.try_move(t1, i, t0).unwrap();
    assert_eq!(b.pile(t0).len(), 1);
}

#[test]
fn test_tableau_builds_down_alternating() {
    let mut b = Baize::new("Klondike", 11);
    let g = b.groups().clone();
    let t0 = g.tableaux[0];
    let t1 = g.tableaux[1];

    let c = find(&b, Suit::Club, 9);
    place_top(&mut b, c, t0);

    let c = find(&b, Suit::Spade, 8);
    place_top(&mut b, c, t1);
    let i = b.pile(t1).len() - 1;
    assert_eq!(b.try_move(t1, i, t0), Err(MoveError::WrongColor));

    let c = find(&b, Suit::Heart, 8);
    place_top(&mut b, c, t1);
    let i = b.pile(t1).len() - 1;
    b.try_move(t1, i, t0).unwrap();
    assert_eq!(b.pile(t0).peek(), Some(find(&b, Suit::Heart, 8)));
}

#[test]
fn test_stock_tap_deals_one() {
    let mut b = Baize::new("Klondike", 5);
    let g = b.groups().clone();
    let waste = g.waste.unwrap();
    let stock_before = b.pile(g.stock).len();

    let top = b.pile(g.stock).peek().unwrap();
    b.tap_card(top);

    assert_eq!(b.pile(g.stock).len(), stock_before - 1);
    assert_eq!(b.pile(waste).len(), 2);
    assert_eq!(b.move_count(), 1);
}

#[test]
fn test_draw_three() {
    let mut b = Baize::new("Klondike Draw Three", 5);
    let g = b.groups().clone();
    let waste = g.waste.unwrap();

    // Three cards go to the waste at the deal, and three per tap.
    assert_eq!(b.pile(g.stock).len(), 21);
    assert_eq!(b.pile(waste).len(), 3);

    let top = b.pile(g.stock).peek().unwrap();
    b.tap_card(top);
    assert_eq!(b.pile(g.stock).len(), 18);
    assert_eq!(b.pile(waste).len(), 6);
}

#[test]
fn test_draw_three_refills_in_threes() {
    let mut b = Baize::new("Klondike Draw Three", 7);
    let g = b.groups().clone();
    let f = g.foundations[0];
    let t0 = g.tableaux[0];
    let waste = g.waste.unwrap();

    // Leave a lone ace on the waste; playing it triggers the refill.
    clear_pile(&mut b, t0);
    let c = find(&b, Suit::Diamond, ACE);
    place_top(&mut b, c, t0);
    if let Some(bottom) = b.pile(waste).get(0) {
        b.move_tail(bottom, g.stock);
    }
    b.move_card(t0, waste);
    let stock_before = b.pile(g.stock).len();

    b.try_move(waste, 0, f).unwrap();

    assert_eq!(b.pile(f).len(), 1);
    assert_eq!(b.pile(waste).len(), 3);
    assert_eq!(b.pile(g.stock).len(), stock_before - 3);
}

#[test]
fn test_thoughtful_deals_face_up() {
    let cfg = KlondikeCfg {
        thoughtful: true,
        ..KlondikeCfg::default()
    };
    let b = Baize::with_variant(Variant::Klondike(cfg), 5);
    for &t in &b.groups().tableaux {
        for id in b.pile(t).iter() {
            assert!(b.card(id).is_face_up());
        }
    }
}

#[test]
fn test_recycle_budget() {
    let cfg = KlondikeCfg {
        recycles: 1,
        ..KlondikeCfg::default()
    };
    let mut b = Baize::with_variant(Variant::Klondike(cfg), 9);
    let g = b.groups().clone();
    let waste = g.waste.unwrap();
    assert_eq!(b.recycles(), 1);

    // Deal the stock out completely.
    for _ in 0..23 {
        let top = b.pile(g.stock).peek().unwrap();
        b.tap_card(top);
    }
    assert!(b.pile(g.stock).is_empty());
    assert_eq!(b.pile(waste).len(), 24);

    // Tapping the empty stock recycles the waste, and the reactive rule
    // immediately deals one card back to the waste.
    b.tap_pile(g.stock);
    assert_eq!(b.recycles(), 0);
    assert_eq!(b.pile(g.stock).len(), 23);
    assert_eq!(b.pile(waste).len(), 1);

    // Exhaust it again; with no recycles left the tap does nothing.
    for _ in 0..23 {
        let top = b.pile(g.stock).peek().unwrap();
        b.tap_card(top);
    }
    let before = b.fingerprint();
    b.tap_pile(g.stock);
    assert_eq!(b.fingerprint(), before);
    assert_eq!(b.pile(waste).len(), 24);
}

#[test]
fn test_waste_refills_after_emptying() {
    let mut b = Baize::new("Klondike", 7);
    let g = b.groups().clone();
    let f = g.foundations[0];
    let t0 = g.tableaux[0];
    let waste = g.waste.unwrap();

    // Make the waste's only card an ace, so moving it to a foundation is
    // legal; the reactive rule should immediately re-deal from the stock.
    clear_pile(&mut b, t0);
    let c = find(&b, Suit::Diamond, ACE);
    place_top(&mut b, c, t0);
    b.move_card(waste, g.stock);
    b.move_card(t0, waste);
    let stock_before = b.pile(g.stock).len();

    b.try_move(waste, 0, f).unwrap();

    assert_eq!(b.pile(f).len(), 1);
    assert_eq!(b.pile(waste).len(), 1);
    assert_eq!(b.pile(g.stock).len(), stock_before - 1);
}
