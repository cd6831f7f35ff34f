/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic tick for notification TTLs.
    Tick,
    /// Raw terminal input (keyboard/mouse).
    Input(crossterm::event::Event),
    /// The confirm control accepted a drag start.
    DragStarted,
    /// The confirm control fired its confirmation.
    Confirmed,
}

/// High-level actions dispatched by the input mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Flip the control's `reset` prop.
    ToggleReset,
    /// Flip the control's external `disabled` prop.
    ToggleDisabled,
    Quit,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::ToggleReset => "reset",
            Action::ToggleDisabled => "disable",
            Action::Quit => "quit",
        }
    }
}

/// Notification level for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
}

/// A timed notification shown in the status line.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub level: NotificationLevel,
    /// Ticks remaining before auto-dismiss.
    pub ttl_ticks: u32,
}
