//! Property-based invariant tests for the geometry primitives.
//!
//! 1. outset then inner by the same amount restores the rectangle.
//! 2. An intersection lies inside both operands.
//! 3. A rectangle with positive extent is never empty and contains its origin.

use proptest::prelude::*;
use waymark_core::{Insets, Rect};

fn coord() -> impl Strategy<Value = f64> {
    (-2_000i32..2_000).prop_map(f64::from)
}

fn extent() -> impl Strategy<Value = f64> {
    (1i32..1_000).prop_map(f64::from)
}

fn rect() -> impl Strategy<Value = Rect> {
    (coord(), coord(), extent(), extent()).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn outset_then_inner_round_trips(r in rect(), amount in 0i32..64) {
        let amount = f64::from(amount);
        let back = r.outset(amount).inner(Insets::all(amount));
        prop_assert_eq!(back, r);
    }

    #[test]
    fn intersection_is_inside_both(a in rect(), b in rect()) {
        if let Some(i) = a.intersection_opt(&b) {
            prop_assert!(!i.is_empty());
            prop_assert!(i.left() >= a.left() && i.left() >= b.left());
            prop_assert!(i.top() >= a.top() && i.top() >= b.top());
            prop_assert!(i.right() <= a.right() && i.right() <= b.right());
            prop_assert!(i.bottom() <= a.bottom() && i.bottom() <= b.bottom());
        }
    }

    #[test]
    fn positive_rects_contain_their_origin(r in rect()) {
        prop_assert!(!r.is_empty());
        prop_assert!(r.contains(r.origin()));
    }
}
