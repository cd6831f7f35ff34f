//! Property-based tests for threshold flag derivation
//!
//! Tests invariants:
//! - Overlap is set iff the most recent x is at or past the overlap limit
//! - Success is sticky once reached
//! - Success is never set by positions below the success limit

use proptest::prelude::*;

use crate::core::confirm::{derive_flags, DragFlags, OVERLAP_LIMIT, SUCCESS_LIMIT, TRACK_LENGTH};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// A sequence of x offsets inside the track.
fn arb_path() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(0..=TRACK_LENGTH, 1..40)
}

fn arb_flags() -> impl Strategy<Value = DragFlags> {
    (any::<bool>(), any::<bool>()).prop_map(|(overlap, success)| DragFlags { overlap, success })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: overlap tracks the latest x in both directions
    #[test]
    fn prop_overlap_follows_latest_x(path in arb_path()) {
        let flags = path
            .iter()
            .fold(DragFlags::default(), |flags, &x| derive_flags(x, flags));
        let last = *path.last().unwrap();
        prop_assert_eq!(flags.overlap, last >= OVERLAP_LIMIT);
    }

    /// Property: success stays set for the rest of the drag
    #[test]
    fn prop_success_is_sticky(path in arb_path()) {
        let mut flags = DragFlags::default();
        let mut reached = false;
        for x in path {
            flags = derive_flags(x, flags);
            reached |= x >= SUCCESS_LIMIT;
            prop_assert_eq!(flags.success, reached, "x = {}", x);
        }
    }

    /// Property: a single step never clears success and sets overlap by x alone
    #[test]
    fn prop_single_step(x in 0..=TRACK_LENGTH, previous in arb_flags()) {
        let next = derive_flags(x, previous);
        prop_assert!(next.success || !previous.success);
        prop_assert_eq!(next.overlap, x >= OVERLAP_LIMIT);
        prop_assert_eq!(next.success, previous.success || x >= SUCCESS_LIMIT);
    }
}
