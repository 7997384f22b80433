//! Baize-space geometry.
//!
//! The rule engine needs just enough geometry to resolve drop targets: card
//! positions, pile rectangles, and intersection areas. All rendering-affecting
//! parameters live in an explicit [`Metrics`] value owned by the board, never
//! in process globals.

use serde::{Deserialize, Serialize};

/// A point in baize space (pixels, origin top-left).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// An axis-aligned rectangle, half-open on the right and bottom edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    #[must_use]
    pub const fn from_point(pos: Point, width: i32, height: i32) -> Self {
        Self::new(pos.x, pos.y, pos.x + width, pos.y + height)
    }

    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.left && pt.x < self.right && pt.y >= self.top && pt.y < self.bottom
    }

    /// Union of two rectangles.
    #[must_use]
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }

    /// Area of overlap with `other`, zero when disjoint.
    #[must_use]
    pub fn intersection_area(&self, other: &Rect) -> i64 {
        let w = i64::from(self.right.min(other.right)) - i64::from(self.left.max(other.left));
        let h = i64::from(self.bottom.min(other.bottom)) - i64::from(self.top.max(other.top));
        if w <= 0 || h <= 0 {
            0
        } else {
            w * h
        }
    }
}

/// A pile's position in the pile grid. Negative coordinates mean the pile is
/// hidden (not laid out), like Freecell's stock after the deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub x: i32,
    pub y: i32,
}

impl Slot {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Hidden piles take no part in layout or hit testing.
    #[must_use]
    pub const fn is_hidden(self) -> bool {
        self.x < 0 || self.y < 0
    }
}

/// Card dimensions and margins, supplied by the presentation layer.
///
/// The defaults are the classic 71x96 card face; only the ratios matter to
/// the engine (fan offsets and drop-target rectangles scale with them).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metrics {
    pub card_width: i32,
    pub card_height: i32,
    pub padding_x: i32,
    pub padding_y: i32,
    pub left_margin: i32,
    pub top_margin: i32,
}

impl Default for Metrics {
    fn default() -> Self {
        let card_width = 71;
        let card_height = 96;
        // Padding is 10% of the card dimension
        let padding_x = card_width / 10;
        let padding_y = card_height / 10;
        Self {
            card_width,
            card_height,
            padding_x,
            padding_y,
            left_margin: card_width / 2 + padding_x,
            top_margin: 48 + card_height / 3,
        }
    }
}

impl Metrics {
    /// Baize position of a pile slot.
    #[must_use]
    pub fn slot_pos(&self, slot: Slot) -> Point {
        Point::new(
            self.left_margin + slot.x * (self.card_width + self.padding_x),
            self.top_margin + slot.y * (self.card_height + self.padding_y),
        )
    }

    /// Rectangle of a single card at `pos`.
    #[must_use]
    pub fn card_rect(&self, pos: Point) -> Rect {
        Rect::from_point(pos, self.card_width, self.card_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_area() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 15, 15);
        assert_eq!(a.intersection_area(&b), 25);

        let c = Rect::new(20, 20, 30, 30);
        assert_eq!(a.intersection_area(&c), 0);

        // Touching edges do not overlap
        let d = Rect::new(10, 0, 20, 10);
        assert_eq!(a.intersection_area(&d), 0);
    }

    #[test]
    fn test_contains_half_open() {
        let r = Rect::new(0, 0, 10, 10);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(9, 9)));
        assert!(!r.contains(Point::new(10, 10)));
    }

    #[test]
    fn test_hidden_slot() {
        assert!(Slot::new(-5, -5).is_hidden());
        assert!(!Slot::new(0, 0).is_hidden());
    }

    #[test]
    fn test_slot_positions_increase() {
        let m = Metrics::default();
        let a = m.slot_pos(Slot::new(0, 0));
        let b = m.slot_pos(Slot::new(1, 0));
        assert!(b.x > a.x);
        assert_eq!(a.y, b.y);
    }
}
