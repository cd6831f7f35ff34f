//! Drag-gesture provider.
//!
//! Turns raw pointer input into `start` / `drag` / `stop` callbacks on a
//! [`DragHandler`], restricted to an [`Axis`] and clamped to [`DragBounds`].
//! The handler never sees pointer coordinates, only handle positions in track
//! units, so it can be driven by a mouse, a keyboard, or a test.

mod tracker;

pub use tracker::GestureTracker;

use serde::{Deserialize, Serialize};

/// Handle offset in track units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Which axes a drag is allowed to move along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    X,
    Y,
    Both,
}

impl Axis {
    /// Zero out the component of `delta` that this axis does not permit.
    pub fn restrict(self, delta: Position) -> Position {
        match self {
            Axis::X => Position::new(delta.x, 0),
            Axis::Y => Position::new(0, delta.y),
            Axis::Both => delta,
        }
    }
}

/// Inclusive rectangle the handle may occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl DragBounds {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Horizontal-only track of the given length, starting at the origin.
    pub const fn horizontal(length: i32) -> Self {
        Self::new(0, 0, length, 0)
    }

    pub fn clamp(&self, position: Position) -> Position {
        Position::new(
            position.x.clamp(self.left, self.right.max(self.left)),
            position.y.clamp(self.top, self.bottom.max(self.top)),
        )
    }

    pub fn contains(&self, position: Position) -> bool {
        self.clamp(position) == position
    }
}

/// Answer from a [`DragHandler`] callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragResponse {
    /// Keep the gesture going.
    Continue,
    /// Abort the gesture; the provider drops the drag without further calls.
    Cancel,
}

impl DragResponse {
    pub fn is_cancel(self) -> bool {
        self == DragResponse::Cancel
    }
}

/// Receiver of drag events emitted by a gesture provider.
#[cfg_attr(test, mockall::automock)]
pub trait DragHandler {
    /// A pointer grabbed the handle.
    fn on_start(&mut self) -> DragResponse;

    /// The handle moved to `position` (already restricted and clamped).
    fn on_drag(&mut self, position: Position) -> DragResponse;

    /// The pointer let go with the handle at `position`.
    fn on_stop(&mut self, position: Position) -> DragResponse;
}
