//! Property-based tests for the confirm state machine
//!
//! Tests invariants:
//! - Handle position is always clamped to the track
//! - A release confirms exactly when it lands at or past the threshold
//! - A confirmed control ignores every later gesture until reset
//! - A disabled control never calls `on_drag`

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use proptest::prelude::*;

use crate::core::confirm::{DragConfirm, DragConfirmProps, DragState, SUCCESS_LIMIT, TRACK_LENGTH};
use crate::core::gesture::{Axis, DragBounds, GestureTracker, Position};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Pointer x offsets, including far outside the track.
fn arb_pointer_path() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-400i32..600, 1..30)
}

// ============================================================================
// Helpers
// ============================================================================

struct Counted {
    control: DragConfirm,
    confirms: Arc<AtomicUsize>,
    drags: Arc<AtomicUsize>,
}

fn counted(props: DragConfirmProps) -> Counted {
    let confirms = Arc::new(AtomicUsize::new(0));
    let drags = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&confirms);
    let d = Arc::clone(&drags);
    let control = DragConfirm::new(
        props
            .on_confirm(move || {
                c.fetch_add(1, Ordering::SeqCst);
            })
            .on_drag(move || {
                d.fetch_add(1, Ordering::SeqCst);
            }),
    );
    Counted {
        control,
        confirms,
        drags,
    }
}

fn tracker() -> GestureTracker {
    GestureTracker::new(Axis::X, DragBounds::horizontal(TRACK_LENGTH))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: x never leaves [0, TRACK_LENGTH] for any drag sequence
    #[test]
    fn prop_position_is_clamped(path in arb_pointer_path()) {
        let mut c = counted(DragConfirmProps::new());
        let mut tracker = tracker();
        tracker.press(Position::ORIGIN, Position::ORIGIN, &mut c.control);

        for x in path {
            tracker.motion(Position::new(x, 17), &mut c.control);
            let position = c.control.state().position;
            prop_assert!((0..=TRACK_LENGTH).contains(&position.x));
            prop_assert_eq!(position.y, 0);
        }
    }

    /// Property: direct moves are clamped even without a tracker
    #[test]
    fn prop_direct_moves_are_clamped(x in any::<i32>()) {
        let mut c = counted(DragConfirmProps::new());
        c.control.on_drag_start();
        c.control.on_drag_move(Position::new(x, 0));
        prop_assert!((0..=TRACK_LENGTH).contains(&c.control.state().position.x));
    }

    /// Property: release confirms once iff final x >= SUCCESS_LIMIT
    #[test]
    fn prop_release_confirms_iff_past_threshold(path in arb_pointer_path(), release in -50i32..250) {
        let mut c = counted(DragConfirmProps::new());
        let mut tracker = tracker();
        tracker.press(Position::ORIGIN, Position::ORIGIN, &mut c.control);
        for x in path {
            tracker.motion(Position::new(x, 0), &mut c.control);
        }
        tracker.release(Position::new(release, 0), &mut c.control);

        let expected = usize::from(release.clamp(0, TRACK_LENGTH) >= SUCCESS_LIMIT);
        prop_assert_eq!(c.confirms.load(Ordering::SeqCst), expected);
        prop_assert_eq!(c.control.is_disabled(), expected == 1);

        // Always snaps back.
        let state = c.control.state();
        prop_assert_eq!(state.position, Position::ORIGIN);
        prop_assert!(state.missed);
        prop_assert!(!state.dragging && !state.overlap && !state.success);
    }

    /// Property: after a confirm nothing happens until reset
    #[test]
    fn prop_confirmed_control_is_inert(path in arb_pointer_path()) {
        let mut c = counted(DragConfirmProps::new().reset(false));
        let mut tracker = tracker();
        tracker.press(Position::ORIGIN, Position::ORIGIN, &mut c.control);
        tracker.release(Position::new(TRACK_LENGTH, 0), &mut c.control);
        let locked = *c.control.state();

        tracker.press(Position::ORIGIN, Position::ORIGIN, &mut c.control);
        for x in &path {
            tracker.motion(Position::new(*x, 0), &mut c.control);
        }
        tracker.release(Position::new(TRACK_LENGTH, 0), &mut c.control);

        prop_assert_eq!(*c.control.state(), locked);
        prop_assert_eq!(c.confirms.load(Ordering::SeqCst), 1);
        prop_assert_eq!(c.drags.load(Ordering::SeqCst), 1);

        c.control.set_reset(true);
        prop_assert_eq!(*c.control.state(), DragState::idle());
        prop_assert!(!c.control.is_disabled());
    }

    /// Property: an externally disabled control never starts a drag
    #[test]
    fn prop_disabled_never_drags(path in arb_pointer_path()) {
        let mut c = counted(DragConfirmProps::new().disabled(true));
        let mut tracker = tracker();
        tracker.press(Position::ORIGIN, Position::ORIGIN, &mut c.control);
        for x in path {
            tracker.motion(Position::new(x, 0), &mut c.control);
        }
        tracker.release(Position::new(TRACK_LENGTH, 0), &mut c.control);

        prop_assert_eq!(c.drags.load(Ordering::SeqCst), 0);
        prop_assert_eq!(c.confirms.load(Ordering::SeqCst), 0);
        prop_assert_eq!(*c.control.state(), DragState::idle());
    }
}
