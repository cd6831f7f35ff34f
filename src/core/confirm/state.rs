//! The slide-to-confirm state machine.

use std::fmt;

use super::flags::{derive_flags, is_confirmed, DragFlags, TRACK_LENGTH};
use crate::core::asset::Asset;
use crate::core::gesture::{DragBounds, DragHandler, DragResponse, Position};

/// Callback invoked by the control. Runs synchronously inside the handler.
pub type Callback = Box<dyn FnMut() + Send>;

/// Component-local state of a [`DragConfirm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    /// Current handle offset.
    pub position: Position,
    /// Between drag start and drag stop.
    pub dragging: bool,
    /// Handle is over the target icon.
    pub overlap: bool,
    /// Handle reached the confirm threshold during this drag.
    pub success: bool,
    /// Locked after a confirmation until the caller resets.
    pub disabled: bool,
    /// At rest without a completed drag.
    pub missed: bool,
}

impl DragState {
    /// Resting state: handle at the origin, nothing in flight.
    pub const fn idle() -> Self {
        Self {
            position: Position::ORIGIN,
            dragging: false,
            overlap: false,
            success: false,
            disabled: false,
            missed: true,
        }
    }

    pub fn flags(&self) -> DragFlags {
        DragFlags {
            overlap: self.overlap,
            success: self.success,
        }
    }

    fn apply(&mut self, flags: DragFlags) {
        self.overlap = flags.overlap;
        self.success = flags.success;
    }

    /// Snap the handle back to the origin. `disabled` is left alone.
    fn snap_back(&mut self) {
        let disabled = self.disabled;
        *self = Self::idle();
        self.disabled = disabled;
    }
}

impl Default for DragState {
    fn default() -> Self {
        Self::idle()
    }
}

/// Caller-supplied configuration for a [`DragConfirm`].
pub struct DragConfirmProps {
    /// Label drawn on the track. Empty means no label.
    pub title: String,
    /// Reset trigger; any change resets the control.
    pub reset: bool,
    pub source: Option<Asset>,
    pub target: Option<Asset>,
    /// Forces the control inert regardless of its own state.
    pub disabled: bool,
    on_confirm: Callback,
    on_drag: Callback,
}

impl DragConfirmProps {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            reset: true,
            source: None,
            target: None,
            disabled: false,
            on_confirm: Box::new(|| {}),
            on_drag: Box::new(|| {}),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn reset(mut self, reset: bool) -> Self {
        self.reset = reset;
        self
    }

    pub fn source(mut self, source: Option<Asset>) -> Self {
        self.source = source;
        self
    }

    pub fn target(mut self, target: Option<Asset>) -> Self {
        self.target = target;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Fired once per release at or past the confirm threshold.
    pub fn on_confirm(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_confirm = Box::new(callback);
        self
    }

    /// Fired once per accepted drag start.
    pub fn on_drag(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_drag = Box::new(callback);
        self
    }
}

impl Default for DragConfirmProps {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DragConfirmProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragConfirmProps")
            .field("title", &self.title)
            .field("reset", &self.reset)
            .field("source", &self.source)
            .field("target", &self.target)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

/// A handle the user slides along a track to confirm an action.
///
/// Drive it through [`DragHandler`] (usually via a
/// [`GestureTracker`](crate::core::gesture::GestureTracker)) and feed caller
/// configuration through [`set_props`](Self::set_props).
#[derive(Debug)]
pub struct DragConfirm {
    props: DragConfirmProps,
    state: DragState,
    bounds: DragBounds,
    observed_reset: bool,
    confirm_count: u64,
}

impl DragConfirm {
    pub fn new(props: DragConfirmProps) -> Self {
        let observed_reset = props.reset;
        Self {
            props,
            state: DragState::idle(),
            bounds: DragBounds::horizontal(TRACK_LENGTH),
            observed_reset,
            confirm_count: 0,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn props(&self) -> &DragConfirmProps {
        &self.props
    }

    pub fn bounds(&self) -> DragBounds {
        self.bounds
    }

    /// Confirmations fired since construction.
    pub fn confirm_count(&self) -> u64 {
        self.confirm_count
    }

    /// Caller override OR the post-confirm lock.
    pub fn is_disabled(&self) -> bool {
        self.props.disabled || self.state.disabled
    }

    /// Replace the caller configuration, resetting if `reset` changed.
    pub fn set_props(&mut self, props: DragConfirmProps) {
        let reset = props.reset;
        self.props = props;
        self.observe_reset(reset);
    }

    pub fn set_reset(&mut self, reset: bool) {
        self.props.reset = reset;
        self.observe_reset(reset);
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.props.disabled = disabled;
    }

    fn observe_reset(&mut self, reset: bool) {
        if reset != self.observed_reset {
            self.observed_reset = reset;
            self.on_reset_signal();
        }
    }

    /// Return to the idle state, clearing the post-confirm lock.
    pub fn on_reset_signal(&mut self) {
        log::debug!("drag confirm reset");
        self.state = DragState::idle();
    }

    pub fn on_drag_start(&mut self) -> DragResponse {
        if self.is_disabled() {
            log::debug!("drag start rejected: control disabled");
            return DragResponse::Cancel;
        }

        (self.props.on_drag)();

        self.state.missed = false;
        self.state.dragging = true;
        DragResponse::Continue
    }

    pub fn on_drag_move(&mut self, position: Position) -> DragResponse {
        if self.is_disabled() {
            return DragResponse::Cancel;
        }

        let position = self.bounds.clamp(position);
        let flags = derive_flags(position.x, self.state.flags());
        self.state.apply(flags);
        self.state.position = position;
        DragResponse::Continue
    }

    pub fn on_drag_stop(&mut self, position: Position) -> DragResponse {
        if self.is_disabled() {
            return DragResponse::Cancel;
        }

        let position = self.bounds.clamp(position);
        if is_confirmed(position.x) {
            self.state.success = true;
            self.state.overlap = false;
            self.state.disabled = true;
            self.confirm_count += 1;
            log::info!(
                "drag confirmed at x={} ({} -> {})",
                position.x,
                describe(self.props.source.as_ref()),
                describe(self.props.target.as_ref()),
            );
            (self.props.on_confirm)();
        }

        self.state.snap_back();
        DragResponse::Continue
    }
}

impl DragHandler for DragConfirm {
    fn on_start(&mut self) -> DragResponse {
        self.on_drag_start()
    }

    fn on_drag(&mut self, position: Position) -> DragResponse {
        self.on_drag_move(position)
    }

    fn on_stop(&mut self, position: Position) -> DragResponse {
        self.on_drag_stop(position)
    }
}

fn describe(asset: Option<&Asset>) -> String {
    asset.map(Asset::to_string).unwrap_or_else(|| "-".to_string())
}
