//! Whole-board invariants under random play.

use proptest::prelude::*;

use baize::{Baize, PileId};

fn pile_ids(b: &Baize) -> Vec<PileId> {
    b.piles().map(|(id, _)| id).collect()
}

fn total_cards(b: &Baize) -> usize {
    b.piles().map(|(_, p)| p.len()).sum()
}

proptest! {
    #[test]
    fn prop_random_moves_conserve_cards(
        seed in 0u64..200,
        plays in proptest::collection::vec((0usize..32, 0usize..13, 0usize..32), 0..60),
    ) {
        let mut b = Baize::new("Klondike", seed);
        let piles = pile_ids(&b);
        for (src, index, dst) in plays {
            let src = piles[src % piles.len()];
            let dst = piles[dst % piles.len()];
            let _ = b.try_move(src, index, dst);
        }

        prop_assert_eq!(total_cards(&b), 52);

        // Card/pile ownership stays bidirectionally consistent.
        for (id, card) in b.cards() {
            prop_assert!(b.pile(card.owner()).contains(id));
        }
        for (pid, pile) in b.piles() {
            for id in pile.iter() {
                prop_assert_eq!(b.card(id).owner(), pid);
            }
        }
    }

    #[test]
    fn prop_undo_rewinds_fingerprints(
        seed in 0u64..100,
        plays in proptest::collection::vec((0usize..32, 0usize..13, 0usize..32), 0..40),
    ) {
        let mut b = Baize::new("Klondike", seed);
        let piles = pile_ids(&b);
        let mut fingerprints = vec![b.fingerprint()];

        for (src, index, dst) in plays {
            let src = piles[src % piles.len()];
            let dst = piles[dst % piles.len()];
            let before = b.fingerprint();
            if b.try_move(src, index, dst).is_ok() && b.fingerprint() != before {
                fingerprints.push(b.fingerprint());
            }
        }
        prop_assert_eq!(b.move_count() + 1, fingerprints.len());

        while b.move_count() > 0 {
            b.undo();
            fingerprints.pop();
            prop_assert_eq!(b.fingerprint(), *fingerprints.last().unwrap());
        }
    }

    #[test]
    fn prop_percent_complete_in_range(seed in 0u64..100) {
        for name in ["Klondike", "Freecell", "Baker's Dozen", "Simple Simon", "Toad"] {
            let b = Baize::new(name, seed);
            let pct = b.percent_complete();
            prop_assert!((0..=100).contains(&pct), "{name}: {pct}");
        }
    }

    #[test]
    fn prop_random_taps_keep_board_consistent(
        seed in 0u64..100,
        taps in proptest::collection::vec(0usize..32, 0..30),
    ) {
        let mut b = Baize::new("Toad", seed);
        let piles = pile_ids(&b);
        for t in taps {
            let pid = piles[t % piles.len()];
            match b.pile(pid).peek() {
                Some(top) => b.tap_card(top),
                None => b.tap_pile(pid),
            }
        }
        prop_assert_eq!(total_cards(&b), 104);
        for (id, card) in b.cards() {
            prop_assert!(b.pile(card.owner()).contains(id));
        }
    }
}
