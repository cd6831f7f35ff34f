//! Crossterm input adapters for the drag-gesture provider.
//!
//! Mouse drags and keyboard nudges share one [`GestureTracker`], so only one
//! gesture is ever in flight.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::layout::TrackGeometry;
use crate::core::gesture::{Axis, DragBounds, DragHandler, GestureTracker, Position};

/// Routes terminal input into drag gestures.
#[derive(Debug, Clone)]
pub struct DragInput {
    tracker: GestureTracker,
    keyboard_step: i32,
}

impl DragInput {
    pub fn new(bounds: DragBounds, keyboard_step: i32) -> Self {
        Self {
            tracker: GestureTracker::new(Axis::X, bounds),
            keyboard_step: keyboard_step.max(1),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// Abandon the gesture in progress, e.g. after the control was reset
    /// underneath it. The next key or press starts a fresh drag.
    pub fn cancel(&mut self) -> bool {
        self.tracker.cancel()
    }

    /// Handle a mouse event. Returns `true` if the event was consumed.
    ///
    /// Only a left press on the handle starts a drag; drags and releases are
    /// followed anywhere on screen once a drag is in progress.
    pub fn handle_mouse<H>(
        &mut self,
        event: &MouseEvent,
        geometry: &TrackGeometry,
        handle: Position,
        handler: &mut H,
    ) -> bool
    where
        H: DragHandler + ?Sized,
    {
        let pointer = geometry.pointer(event.column);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !geometry.hits_handle(event.column, event.row, handle) {
                    return false;
                }
                self.tracker.press(pointer, handle, handler);
                true
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.tracker.motion(pointer, handler).is_some()
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.tracker.release(pointer, handler).is_some()
            }
            _ => false,
        }
    }

    /// Handle a key event. Returns `true` if the event was consumed.
    ///
    /// `Right`/`l` nudge the handle forward (starting a drag if needed),
    /// `Left`/`h` nudge it back, `Enter`/`Space` release in place and `Esc`
    /// pulls the handle home before releasing.
    pub fn handle_key<H>(&mut self, event: &KeyEvent, handle: Position, handler: &mut H) -> bool
    where
        H: DragHandler + ?Sized,
    {
        if event.kind != KeyEventKind::Press || event.modifiers != KeyModifiers::NONE {
            return false;
        }

        match event.code {
            KeyCode::Right | KeyCode::Char('l') => {
                if !self.tracker.is_dragging()
                    && self.tracker.press(handle, handle, handler).is_cancel()
                {
                    return true;
                }
                self.tracker
                    .nudge(Position::new(self.keyboard_step, 0), handler);
                true
            }
            KeyCode::Left | KeyCode::Char('h') => self
                .tracker
                .nudge(Position::new(-self.keyboard_step, 0), handler)
                .is_some(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.tracker.release_in_place(handler).is_some()
            }
            KeyCode::Esc => {
                let Some(current) = self.tracker.current() else {
                    return false;
                };
                self.tracker
                    .nudge(Position::new(-current.x, -current.y), handler);
                self.tracker.release_in_place(handler);
                true
            }
            _ => false,
        }
    }
}
