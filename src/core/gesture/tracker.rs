//! Pointer bookkeeping for a single in-flight drag.

use super::{Axis, DragBounds, DragHandler, DragResponse, Position};

/// A drag in progress: where the pointer grabbed and where the handle was.
#[derive(Debug, Clone, Copy)]
struct ActiveDrag {
    anchor: Position,
    start: Position,
    last: Position,
}

/// Converts pointer positions into handle positions for a [`DragHandler`].
///
/// The handle follows the pointer relative to where it was grabbed, so
/// grabbing the right edge of the handle does not make it jump.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    axis: Axis,
    bounds: DragBounds,
    active: Option<ActiveDrag>,
}

impl GestureTracker {
    pub fn new(axis: Axis, bounds: DragBounds) -> Self {
        Self {
            axis,
            bounds,
            active: None,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn bounds(&self) -> DragBounds {
        self.bounds
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Last position forwarded to the handler, if a drag is in progress.
    pub fn current(&self) -> Option<Position> {
        self.active.map(|drag| drag.last)
    }

    /// Begin a drag with the pointer at `pointer` and the handle at `handle`.
    ///
    /// A press while a drag is already active is ignored and answered with
    /// `Continue`.
    pub fn press<H>(&mut self, pointer: Position, handle: Position, handler: &mut H) -> DragResponse
    where
        H: DragHandler + ?Sized,
    {
        if self.active.is_some() {
            return DragResponse::Continue;
        }

        let response = handler.on_start();
        if response.is_cancel() {
            log::debug!("drag start cancelled by handler");
            return response;
        }

        let start = self.bounds.clamp(handle);
        self.active = Some(ActiveDrag {
            anchor: pointer,
            start,
            last: start,
        });
        response
    }

    /// Move the pointer. Returns `None` when no drag is in progress.
    pub fn motion<H>(&mut self, pointer: Position, handler: &mut H) -> Option<DragResponse>
    where
        H: DragHandler + ?Sized,
    {
        let position = self.resolve(pointer)?;
        let response = handler.on_drag(position);
        match response {
            DragResponse::Continue => {
                if let Some(drag) = self.active.as_mut() {
                    drag.last = position;
                }
            }
            DragResponse::Cancel => {
                log::debug!("drag aborted by handler at x={}", position.x);
                self.active = None;
            }
        }
        Some(response)
    }

    /// Release the pointer, ending the drag. Returns `None` when no drag is in
    /// progress.
    pub fn release<H>(&mut self, pointer: Position, handler: &mut H) -> Option<DragResponse>
    where
        H: DragHandler + ?Sized,
    {
        let position = self.resolve(pointer)?;
        self.active = None;
        Some(handler.on_stop(position))
    }

    /// Move the handle by `delta` without a pointer (keyboard nudging).
    /// Returns `None` when no drag is in progress.
    pub fn nudge<H>(&mut self, delta: Position, handler: &mut H) -> Option<DragResponse>
    where
        H: DragHandler + ?Sized,
    {
        let drag = self.active?;
        let delta = self.axis.restrict(delta);
        let position = self
            .bounds
            .clamp(Position::new(drag.last.x + delta.x, drag.last.y + delta.y));

        let response = handler.on_drag(position);
        match response {
            DragResponse::Continue => {
                // Keep later pointer motion relative to the nudged handle.
                let applied = Position::new(position.x - drag.last.x, position.y - drag.last.y);
                self.active = Some(ActiveDrag {
                    anchor: drag.anchor,
                    start: Position::new(drag.start.x + applied.x, drag.start.y + applied.y),
                    last: position,
                });
            }
            DragResponse::Cancel => self.active = None,
        }
        Some(response)
    }

    /// End the drag where the handle currently is.
    pub fn release_in_place<H>(&mut self, handler: &mut H) -> Option<DragResponse>
    where
        H: DragHandler + ?Sized,
    {
        let drag = self.active.take()?;
        Some(handler.on_stop(drag.last))
    }

    /// Drop the drag in progress without notifying the handler. Returns
    /// whether a drag was active.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.active.take().is_some();
        if was_active {
            log::debug!("drag dropped by owner");
        }
        was_active
    }

    fn resolve(&self, pointer: Position) -> Option<Position> {
        let drag = self.active?;
        let delta = self.axis.restrict(Position::new(
            pointer.x - drag.anchor.x,
            pointer.y - drag.anchor.y,
        ));
        Some(
            self.bounds
                .clamp(Position::new(drag.start.x + delta.x, drag.start.y + delta.y)),
        )
    }
}
